//! 批量扫描选项与统计信息（模块）

/// 批量扫描选项
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// 只扫描这些扩展名的文件（不含点，忽略大小写）；为空则扫描全部文件
    pub extensions: Vec<String>,
    /// 最大文件大小（字节）；超过则跳过
    pub max_file_size: Option<u64>,
    /// 线程数：None 表示自动（等于 CPU 核数）；Some(1) 走串行
    pub threads: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["cs".to_string()],
            max_file_size: None,
            threads: None,
        }
    }
}

impl ScanOptions {
    pub(crate) fn accepts_extension(&self, ext: Option<&str>) -> bool {
        if self.extensions.is_empty() { return true; }
        match ext {
            Some(ext) => self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub occurrences_total: usize,
    pub outputs_written: usize,
}
