use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use elinspect_core::{scan_and_write, Config, ElementTable, Inspector, LineIndex, ScanOptions};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "elinspect", version, about = "Elin Element 数值注解工具")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 扫描文件或目录，输出注解 JSON
    Scan {
        /// 输入文件或目录
        #[arg(long)]
        input: PathBuf,

        /// 输出文件（JSON 数组）
        #[arg(long, default_value = "./result.json")]
        output: PathBuf,

        /// Element 数据表（CSV）
        #[arg(long, default_value = "./data/elements.csv")]
        data: PathBuf,

        /// 配置文件（TOML）；不指定则使用默认配置
        #[arg(long)]
        config: Option<PathBuf>,

        /// 线程数（"auto"=CPU 核心数）
        #[arg(long, default_value = "auto")]
        threads: String,

        /// 最大扫描文件大小（单位字节，例如 5242880 代表 5MB）
        #[arg(long)]
        max_file_size: Option<u64>,

        /// 目录扫描时的扩展名过滤，可重复指定
        #[arg(long = "ext", default_values_t = vec!["cs".to_string()])]
        extensions: Vec<String>,
    },

    /// 输出光标处整数的 Hover 内容（Markdown）
    Hover {
        /// 源文件
        #[arg(long)]
        file: PathBuf,

        /// 行号（从 1 开始）
        #[arg(long)]
        line: usize,

        /// 列号（从 1 开始，按字符计）
        #[arg(long)]
        column: usize,

        #[arg(long, default_value = "./data/elements.csv")]
        data: PathBuf,

        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// 列出生效的目标函数（内置 + 配置追加）
    Targets {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { input, output, data, config, threads, max_file_size, extensions } => {
            info!(?input, ?output, "starting scan");
            let inspector = Arc::new(build_inspector(&data, config.as_deref())?);

            // 以缓冲方式打开输出文件，按 JSON 数组流式写入
            let mut out = BufWriter::new(File::create(&output).context("create output file")?);

            let opts = ScanOptions { extensions, max_file_size, threads: parse_threads(&threads) };
            let stats = scan_and_write(&input, &mut out, &inspector, &opts).context("scan and write failed")?;
            out.flush().context("flush output")?;

            info!(
                files_scanned = stats.files_scanned,
                occurrences = stats.occurrences_total,
                outputs_written = stats.outputs_written,
                "scan finished"
            );
        }
        Commands::Hover { file, line, column, data, config } => {
            let inspector = build_inspector(&data, config.as_deref())?;
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("read source {}", file.display()))?;

            let index = LineIndex::new(&text);
            let Some(offset) = index.offset(line.saturating_sub(1), column.saturating_sub(1)) else {
                warn!(line, "line out of range");
                return Ok(());
            };
            if let Some(hover) = inspector.hover(&text, offset) {
                println!("{}", hover.markdown);
            }
        }
        Commands::Targets { config } => {
            let config = load_config(config.as_deref())?;
            for t in config.all_targets() {
                println!("{}\t{}", t.name(), t.arg_index());
            }
        }
    }

    Ok(())
}

/// 加载配置与数据表；数据表加载失败对整个功能是致命的
fn build_inspector(data: &Path, config: Option<&Path>) -> Result<Inspector> {
    let config = load_config(config)?;
    let table = ElementTable::load(data).context("failed to load element data")?;
    info!(entries = table.len(), "element data loaded");
    Ok(Inspector::new(config, table)?)
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => Config::load(p),
        None => Ok(Config::default()),
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug；日志写 stderr，不污染 hover 输出
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).with_writer(std::io::stderr).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 解析线程参数
fn parse_threads(s: &str) -> Option<usize> {
    if s.eq_ignore_ascii_case("auto") { return None; }
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}
