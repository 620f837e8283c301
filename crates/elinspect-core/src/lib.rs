//! 核心库：在源码中定位指定函数调用，抽取指定参数里的整数字面量
//!
//! 设计要点：
//! - 调用点定位用正则，参数边界用显式的括号深度状态机，两者可分别测试。
//! - 扫描是纯函数：无全局状态、无缓存，可在多线程中对任意文本反复调用。
//! - 查找表（Element CSV）显式加载一次，只读，按引用传给注解/Hover。
//! - 无匹配不是错误：调用不存在、参数越界、参数内无数字都只是 0 个命中。

mod annotate;
mod argument;
mod config;
mod error;
mod findings;
mod format;
mod hover;
mod inspector;
mod literals;
mod locator;
mod options;
mod scan;
mod scanner;
mod table;
mod types;

pub use annotate::{annotate, Annotation, LineIndex};
pub use argument::{extract_argument, ArgumentSpan};
pub use config::{default_targets, Config, DEFAULT_FORMAT};
pub use error::{ScanError, TableError, TargetError};
pub use format::{format_entry, format_entry_for_hover};
pub use hover::{hover, integer_at, Hover};
pub use inspector::Inspector;
pub use literals::find_literals;
pub use locator::CallLocator;
pub use options::{ScanOptions, ScanStats};
pub use scan::scan_and_write;
pub use scanner::{scan, Scanner};
pub use table::{ElementTable, Entry};
pub use types::{Occurrence, OutputItem, Target};
