//! 批量扫描主流程与并行调度
use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::annotate::Annotation;
use crate::inspector::Inspector;
use crate::options::{ScanOptions, ScanStats};
use crate::types::OutputItem;

/// 单个文件的扫描结果
#[derive(Debug)]
struct FileReport {
    file: String,
    occurrences: usize,
    annotations: Vec<Annotation>,
}

/// 扫描文件或目录，并将注解以 JSON 数组流式写入 `out`
/// 稳定性保证：
/// - 文件级：先收集文件并按路径排序，并行与串行输出一致
/// - 文件内：注解按起始偏移升序（由扫描器保证）
pub fn scan_and_write(input: &Path, out: &mut dyn Write, inspector: &Arc<Inspector>, opts: &ScanOptions) -> Result<ScanStats> {
    let files = collect_files(input, opts);
    debug!(files = files.len(), "files collected");

    let mut stats = ScanStats::default();

    // 决策：线程数>1 且文件数>1 时走并行调度；否则串行
    let threads = opts.threads.unwrap_or_else(num_cpus::get);
    if threads > 1 && files.len() > 1 {
        scan_and_write_parallel(files, out, opts, inspector, &mut stats, threads)?;
        return Ok(stats);
    }

    write!(out, "[")?;
    let mut first = true;
    for path in &files {
        match scan_one(path, inspector, opts.max_file_size) {
            Ok(Some(report)) => write_report(out, &mut first, &report, &mut stats)?,
            Ok(None) => continue,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skip unreadable file");
                continue;
            }
        }
    }
    write!(out, "]")?;
    Ok(stats)
}

/// 输入为文件时只扫描该文件；为目录时递归遍历并按扩展名过滤
fn collect_files(input: &Path, opts: &ScanOptions) -> Vec<PathBuf> {
    if input.is_file() {
        return vec![input.to_path_buf()];
    }

    let mut files: Vec<PathBuf> = vec![];
    for entry in WalkDir::new(input).min_depth(1) {
        let entry = match entry { Ok(e) => e, Err(_) => continue };
        if !entry.file_type().is_file() { continue; }
        let ext = entry.path().extension().and_then(|s| s.to_str());
        if opts.accepts_extension(ext) { files.push(entry.into_path()); }
    }
    // 按路径排序，确保输出顺序稳定
    files.sort();
    files
}

/// 扫描单个文件；超过大小限制返回 Ok(None)，读取失败（含非 UTF-8）返回 Err
fn scan_one(path: &Path, inspector: &Inspector, max_file_size: Option<u64>) -> Result<Option<FileReport>> {
    if let Some(max) = max_file_size {
        if std::fs::metadata(path)?.len() > max {
            debug!(path = %path.display(), "skip oversized file");
            return Ok(None);
        }
    }

    let text = std::fs::read_to_string(path)?;
    let occurrences = inspector.scanner().scan(&text);
    let annotations = inspector.annotate_occurrences(&text, &occurrences);
    Ok(Some(FileReport {
        file: path.display().to_string(),
        occurrences: occurrences.len(),
        annotations,
    }))
}

/// 写出单个文件的注解；行列在输出中从 1 开始
fn write_report(out: &mut dyn Write, first: &mut bool, report: &FileReport, stats: &mut ScanStats) -> Result<()> {
    stats.files_scanned += 1;
    stats.occurrences_total += report.occurrences;
    for a in &report.annotations {
        stats.outputs_written += 1;
        if !*first { write!(out, ",")?; } else { *first = false; }
        let item = OutputItem { file: &report.file, line: a.line + 1, column: a.column + 1, value: a.value, text: &a.text };
        serde_json::to_writer(&mut *out, &item)?;
    }
    Ok(())
}

/// 并行调度：
/// - 建索引后使用 Rayon 线程池并行扫描
/// - 单线程 Writer 按 idx 重排并流式写 JSON，保证稳定顺序
fn scan_and_write_parallel(
    files: Vec<PathBuf>,
    out: &mut dyn Write,
    opts: &ScanOptions,
    inspector: &Arc<Inspector>,
    stats: &mut ScanStats,
    threads: usize,
) -> Result<()> {
    use crossbeam_channel as channel;
    use rayon::prelude::*;
    use std::collections::BTreeMap;

    write!(out, "[")?;
    let mut first = true;

    // 通道用于 worker → writer 传递结果；None 表示该文件未扫描
    type Msg = (usize /*idx*/, Option<FileReport>);
    let (tx, rx) = channel::bounded::<Msg>(256);

    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
    let inspector = Arc::clone(inspector);
    let max_file_size = opts.max_file_size;

    // Writer 保持在当前线程；扫描在后台线程内的 Rayon 线程池中执行
    let scan_thread = std::thread::spawn(move || {
        pool.install(|| {
            files.par_iter().enumerate().for_each_with(tx, |tx, (idx, path)| {
                let report = match scan_one(path, &inspector, max_file_size) {
                    Ok(r) => r,
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "skip unreadable file");
                        None
                    }
                };
                let _ = tx.send((idx, report));
            });
        });
        // 结束后 Sender 全部被丢弃，Receiver 将收到关闭信号
    });

    let mut next_idx: usize = 0;
    let mut buffer: BTreeMap<usize, Option<FileReport>> = BTreeMap::new();

    while let Ok((idx, report)) = rx.recv() {
        buffer.insert(idx, report);
        // 从 next_idx 开始顺序冲刷
        while let Some(report) = buffer.remove(&next_idx) {
            if let Some(report) = report {
                write_report(out, &mut first, &report, stats)?;
            }
            next_idx += 1;
        }
    }

    if scan_thread.join().is_err() {
        anyhow::bail!("scan worker panicked");
    }

    write!(out, "]")?;
    Ok(())
}
