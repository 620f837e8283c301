//! 行内注解：命中项 → 查表 → 格式化文本 + 行列锚点
use serde::Serialize;

use crate::format::format_entry;
use crate::table::ElementTable;
use crate::types::Occurrence;

/// 字节偏移 → (行, 列) 换算；行、列均从 0 开始，列按字符计
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self { text, line_starts }
    }

    /// 偏移超出文本长度时按文本末尾处理
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.text.len());
        let line = self.line_starts.partition_point(|&s| s <= offset) - 1;
        let start = self.line_starts[line];
        let column = self.text.get(start..offset).map(|s| s.chars().count()).unwrap_or(offset - start);
        (line, column)
    }

    /// 行列 → 字节偏移；列超过行尾时截到行尾，行越界返回 None
    pub fn offset(&self, line: usize, column: usize) -> Option<usize> {
        let start = *self.line_starts.get(line)?;
        let end = self.line_starts.get(line + 1).map(|&s| s - 1).unwrap_or(self.text.len());
        let line_text = &self.text[start..end];
        let rel = line_text.char_indices().nth(column).map(|(i, _)| i).unwrap_or(line_text.len());
        Some(start + rel)
    }
}

/// 单个行内注解
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub value: u64,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
    pub end_line: usize,
    pub end_column: usize,
    /// 挂在数字后面显示的文本
    pub text: String,
}

/// 为命中项生成注解；表中没有对应 id 的命中项不生成注解
pub fn annotate(text: &str, occurrences: &[Occurrence], table: &ElementTable, format: &str) -> Vec<Annotation> {
    let index = LineIndex::new(text);
    occurrences
        .iter()
        .filter_map(|occ| {
            let entry = table.get(occ.value)?;
            let (line, column) = index.position(occ.start);
            let (end_line, end_column) = index.position(occ.end);
            Some(Annotation {
                value: occ.value,
                start: occ.start,
                end: occ.end,
                line,
                column,
                end_line,
                end_column,
                text: format_entry(entry, format),
            })
        })
        .collect()
}
