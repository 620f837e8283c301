//! Hover：光标处的整数 → 查表 → Markdown
//!
//! 不经过调用点扫描，只看光标所在的独立整数词。
use serde::Serialize;

use crate::format::format_entry_for_hover;
use crate::literals::INTEGER_TOKEN;
use crate::table::ElementTable;
use crate::types::Occurrence;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hover {
    pub markdown: String,
    pub start: usize,
    pub end: usize,
}

/// 取光标（字节偏移）所在行中包含该位置的整数词，`start <= offset <= end`
pub fn integer_at(text: &str, offset: usize) -> Option<Occurrence> {
    if !text.is_char_boundary(offset) { return None; }
    let line_start = text[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = text[offset..].find('\n').map(|i| offset + i).unwrap_or(text.len());
    let line = &text[line_start..line_end];
    let rel = offset - line_start;

    INTEGER_TOKEN
        .find_iter(line)
        .find(|m| m.start() <= rel && rel <= m.end())
        .and_then(|m| {
            let value = m.as_str().parse::<u64>().ok()?;
            Some(Occurrence { value, start: line_start + m.start(), end: line_start + m.end() })
        })
}

/// 生成 Hover；光标处没有整数或表中无此 id 时返回 None
pub fn hover(text: &str, offset: usize, table: &ElementTable, format: &str) -> Option<Hover> {
    let occ = integer_at(text, offset)?;
    let entry = table.get(occ.value)?;
    Some(Hover { markdown: format_entry_for_hover(entry, format), start: occ.start, end: occ.end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_integer_under_cursor() {
        let text = "a = 1;\nEvalue(60);";
        // 光标位于 "60" 的首、中、尾
        for offset in [14, 15, 16] {
            let occ = integer_at(text, offset).unwrap();
            assert_eq!((occ.value, occ.start, occ.end), (60, 14, 16));
        }
        assert_eq!(integer_at(text, 4).unwrap().value, 1);
    }

    #[test]
    fn ignores_digits_inside_identifiers() {
        assert!(integer_at("num123", 4).is_none());
        assert!(integer_at("Evalue(x)", 7).is_none());
    }

    #[test]
    fn offset_out_of_range() {
        assert!(integer_at("12", 3).is_none());
        assert!(integer_at("生 1", 1).is_none());
        assert_eq!(integer_at("12", 2).unwrap().value, 12);
    }

    #[test]
    fn hover_requires_table_entry() {
        let table = ElementTable::from_reader("id,alias\n60,life\n".as_bytes()).unwrap();
        let h = hover("Evalue(60)", 8, &table, "$alias").unwrap();
        assert!(h.markdown.starts_with("## **life**"));
        assert_eq!((h.start, h.end), (7, 9));
        assert!(hover("Evalue(61)", 8, &table, "$alias").is_none());
    }
}
