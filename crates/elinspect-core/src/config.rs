//! 配置文件加载（TOML）
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::types::Target;

/// 默认的显示格式
pub const DEFAULT_FORMAT: &str = "$name_JP";

/// 内置目标函数：Evalue / HasElement / ModExp，均取第 1 个参数
pub fn default_targets() -> Vec<Target> {
    [("Evalue", 1), ("HasElement", 1), ("ModExp", 1)]
        .into_iter()
        .filter_map(|(name, idx)| Target::new(name, idx).ok())
        .collect()
}

/// 配置项（文件中各键均可省略）
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 显示格式，`$列名` 会被替换为对应列的值
    pub format: String,
    /// 用户追加的目标函数（排在内置目标之后）
    #[serde(alias = "additionalTargets")]
    pub additional_targets: Vec<Target>,
    #[serde(alias = "enableInlineDecoration")]
    pub enable_inline_decoration: bool,
    #[serde(alias = "enableHover")]
    pub enable_hover: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            additional_targets: Vec::new(),
            enable_inline_decoration: true,
            enable_hover: true,
        }
    }
}

impl Config {
    /// 从 TOML 文件加载；非法目标（空函数名、参数位置 < 1）直接报错
    pub fn load(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml(&txt).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_toml(txt: &str) -> Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    /// 内置目标 + 用户追加目标
    pub fn all_targets(&self) -> Vec<Target> {
        let mut out = default_targets();
        out.extend(self.additional_targets.iter().cloned());
        out
    }
}
