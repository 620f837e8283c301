//! 参数内整数字面量抽取
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::argument::ArgumentSpan;
use crate::types::Occurrence;

/// 完整的十进制数字串：两侧都不能紧贴字母/数字/下划线（排除 `num123` 这类标识符）
pub(crate) static INTEGER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]+\b").expect("valid integer token pattern"));

/// 抽取参数中的全部整数字面量，偏移换算为源文本绝对偏移
/// - 超出 u64 范围的数字串跳过
pub fn find_literals<'a>(arg: &ArgumentSpan<'a>) -> impl Iterator<Item = Occurrence> + 'a {
    let base = arg.offset;
    INTEGER_TOKEN.find_iter(arg.text).filter_map(move |m| match m.as_str().parse::<u64>() {
        Ok(value) => Some(Occurrence { value, start: base + m.start(), end: base + m.end() }),
        Err(_) => {
            debug!(literal = m.as_str(), offset = base + m.start(), "integer literal out of range, skipped");
            None
        }
    })
}
