//! 错误类型（对外暴露）
use std::path::PathBuf;
use thiserror::Error;

/// 目标函数配置错误：属于调用方/配置方的编程错误，构造时立即拒绝
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("target function name must not be empty")]
    EmptyName,

    #[error("argument index for `{name}` must be >= 1, got {index}")]
    InvalidArgIndex { name: String, index: i64 },
}

/// 扫描器构建错误
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to build call pattern for `{name}`: {source}")]
    Pattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

/// Element 查找表加载错误（对整个功能是致命的）
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read element table {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed element table: {0}")]
    Csv(#[from] csv::Error),

    #[error("element table has no `id` column")]
    MissingIdColumn,
}
