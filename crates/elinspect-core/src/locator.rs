//! 调用点定位（正则）
//!
//! 匹配形态：`[可选 "标识符." 接收者] 函数名 [空白] [可选 "<...>" 泛型参数] [空白] "("`
//! - 函数名按字面量处理（`regex::escape`）
//! - 接收者只剥离单段 `ident.`，不扩展为多段限定名
//! - 泛型参数为扁平匹配，不做 `<`/`>` 配平
//! - 函数名左侧不加单词边界（`MyEvalue(` 也算 `Evalue` 的调用），右侧必须紧接 `<`/空白/`(`
use regex::Regex;

use crate::error::ScanError;

/// 单个函数名的调用点定位器（编译后可复用，跨线程共享）
#[derive(Debug, Clone)]
pub struct CallLocator {
    re: Regex,
}

impl CallLocator {
    pub fn new(name: &str) -> Result<Self, ScanError> {
        let re = Regex::new(&call_pattern(name)).map_err(|source| ScanError::Pattern {
            name: name.to_string(),
            source,
        })?;
        Ok(Self { re })
    }

    /// 返回每个调用点开括号之后的偏移（即参数扫描的起点）；不做去重
    pub fn call_sites<'t>(&'t self, text: &'t str) -> impl Iterator<Item = usize> + 't {
        self.re.find_iter(text).map(|m| m.end())
    }
}

fn call_pattern(name: &str) -> String {
    format!(r"(?:\w+\.)?{}\s*(?:<[^>]*>)?\s*\(", regex::escape(name))
}
