//! 显示格式化（行内注解与 Hover 共用同一套替换规则）
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::table::Entry;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\w+)").expect("valid placeholder pattern"));

/// Hover 表格中不展示的列（同名 `_JP` 列一并排除）
const EXCLUDED_COLUMNS: &[&str] = &["detail", "textPhase", "textExtra", "textInc", "textDec", "textAlt", "levelBonus"];

/// 将格式串中的 `$列名` 替换为该列的值；列不存在时原样保留 `$列名`
///
/// 例：`"$alias/$name_JP"` → `"life/生命力"`
pub fn format_entry(entry: &Entry, format: &str) -> String {
    PLACEHOLDER
        .replace_all(format, |caps: &Captures<'_>| match entry.get(&caps[1]) {
            Some(v) => v.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

fn is_excluded_column(column: &str) -> bool {
    EXCLUDED_COLUMNS
        .iter()
        .any(|c| column == *c || column.strip_suffix("_JP") == Some(*c))
}

/// 生成 Hover 用的 Markdown：标题 + 两列属性表
/// - 空值与排除列不输出
/// - 值中的 `|` 转义为 `\|`
pub fn format_entry_for_hover(entry: &Entry, format: &str) -> String {
    let header = format_entry(entry, format);
    let mut lines = vec![
        format!("## **{}**", header),
        String::new(),
        "| Property | Value |".to_string(),
        "|----------|-------|".to_string(),
    ];

    for (column, value) in entry.fields() {
        if is_excluded_column(column) || value.is_empty() { continue; }
        lines.push(format!("| {} | {} |", column, value.replace('|', "\\|")));
    }

    lines.join("\n")
}
