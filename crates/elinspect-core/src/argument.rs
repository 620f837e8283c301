//! 参数切分（括号深度状态机）
//!
//! 单遍从左到右扫描；只有深度为 1 的逗号才是顶层参数分隔符，
//! 嵌套调用、集合字面量里的逗号都不影响外层切分。

/// 定位到的参数原文及其在源文本中的起始偏移
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentSpan<'a> {
    pub text: &'a str,
    pub offset: usize,
}

/// 从开括号之后的 `start` 起，取第 `arg_index` 个（从 1 开始）参数
/// - 文本结束时仍未闭合，或参数位置越界，返回 None（不做部分结果）
/// - 空参数列表 `f()` 取第 1 个参数得到空串
/// - `start` 不在字符边界上时返回 None
pub fn extract_argument(text: &str, start: usize, arg_index: usize) -> Option<ArgumentSpan<'_>> {
    if !text.is_char_boundary(start) { return None; }
    // 分隔符全是 ASCII，按字节扫描不会切到多字节字符中间
    let bytes = text.as_bytes();
    let mut depth: usize = 1;
    let mut current: usize = 1;
    let mut arg_start = start;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        match b {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => {
                depth -= 1;
                if depth == 0 {
                    if current == arg_index {
                        return Some(ArgumentSpan { text: &text[arg_start..i], offset: arg_start });
                    }
                    return None;
                }
            }
            b',' if depth == 1 => {
                if current == arg_index {
                    return Some(ArgumentSpan { text: &text[arg_start..i], offset: arg_start });
                }
                current += 1;
                arg_start = i + 1;
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg(text: &str, index: usize) -> Option<&str> {
        let start = text.find('(').map(|p| p + 1).unwrap();
        extract_argument(text, start, index).map(|a| a.text)
    }

    #[test]
    fn first_and_last_argument() {
        assert_eq!(arg("f(1, 2, 3)", 1), Some("1"));
        assert_eq!(arg("f(1, 2, 3)", 3), Some(" 3"));
    }

    #[test]
    fn nested_separators_are_inert() {
        assert_eq!(arg("f(g(1, 2), [3, 4], {5, 6}, 7)", 1), Some("g(1, 2)"));
        assert_eq!(arg("f(g(1, 2), [3, 4], {5, 6}, 7)", 2), Some(" [3, 4]"));
        assert_eq!(arg("f(g(1, 2), [3, 4], {5, 6}, 7)", 4), Some(" 7"));
    }

    #[test]
    fn offset_points_into_source() {
        let text = "call(\"str\", 42)";
        let span = extract_argument(text, 5, 2).unwrap();
        assert_eq!(span.offset, 11);
        assert_eq!(&text[span.offset..span.offset + span.text.len()], " 42");
    }

    #[test]
    fn empty_argument_list() {
        let span = extract_argument("f()", 2, 1).unwrap();
        assert_eq!(span.text, "");
        assert_eq!(span.offset, 2);
    }

    #[test]
    fn out_of_range_index() {
        assert_eq!(arg("f(1, 2)", 3), None);
        assert_eq!(arg("f()", 2), None);
    }

    #[test]
    fn unbalanced_text() {
        assert_eq!(arg("f(1, g(2", 2), None);
        assert_eq!(arg("f(1", 1), None);
    }

    #[test]
    fn start_inside_a_character() {
        assert_eq!(extract_argument("生)", 1, 1), None);
        assert_eq!(extract_argument("f(1)", 9, 1), None);
    }

    #[test]
    fn multibyte_text_around_delimiters() {
        assert_eq!(arg("f(\"生命\", 60)", 2), Some(" 60"));
    }
}
