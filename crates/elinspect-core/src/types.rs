//! 公共类型（对外暴露）
use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// 扫描目标：函数名 + 参数位置（从 1 开始）
/// - 字段私有，只能经 `Target::new` 或反序列化构造，因此非法目标不可能存在
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTarget", into = "RawTarget")]
pub struct Target {
    name: String,
    arg_index: usize,
}

impl Target {
    pub fn new(name: impl Into<String>, arg_index: i64) -> Result<Self, TargetError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TargetError::EmptyName);
        }
        let idx = match usize::try_from(arg_index) {
            Ok(i) if i >= 1 => i,
            _ => return Err(TargetError::InvalidArgIndex { name, index: arg_index }),
        };
        Ok(Self { name, arg_index: idx })
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn arg_index(&self) -> usize { self.arg_index }
}

/// 配置文件中的目标写法（兼容 argIndex 字段名）
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawTarget {
    function: String,
    #[serde(alias = "argIndex")]
    arg_index: i64,
}

impl TryFrom<RawTarget> for Target {
    type Error = TargetError;

    fn try_from(raw: RawTarget) -> Result<Self, Self::Error> {
        Target::new(raw.function, raw.arg_index)
    }
}

impl From<Target> for RawTarget {
    fn from(t: Target) -> Self {
        RawTarget { function: t.name, arg_index: t.arg_index as i64 }
    }
}

/// 单个整数字面量命中：`[start, end)` 为原文中的字节区间，恰好覆盖该数字
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Occurrence {
    pub value: u64,
    pub start: usize,
    pub end: usize,
}

/// 输出项结构（对应 result.json 的单个元素）
#[derive(Debug, Clone, Serialize)]
pub struct OutputItem<'a> {
    pub file: &'a str,
    pub line: usize,
    pub column: usize,
    pub value: u64,
    pub text: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_name() {
        assert_eq!(Target::new("", 1), Err(TargetError::EmptyName));
    }

    #[test]
    fn rejects_non_positive_index() {
        assert!(matches!(Target::new("Evalue", 0), Err(TargetError::InvalidArgIndex { index: 0, .. })));
        assert!(matches!(Target::new("Evalue", -3), Err(TargetError::InvalidArgIndex { index: -3, .. })));
    }

    #[test]
    fn large_index_is_kept_exact() {
        let t = Target::new("Func", i64::from(u32::MAX)).unwrap();
        assert_eq!(t.arg_index() as u64, u64::from(u32::MAX));
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn index_beyond_usize_is_rejected() {
        assert!(matches!(Target::new("Func", i64::MAX), Err(TargetError::InvalidArgIndex { .. })));
    }

    #[test]
    fn deserializes_both_index_spellings() {
        let a: Target = serde_json::from_str(r#"{"function":"Func","arg_index":2}"#).unwrap();
        let b: Target = serde_json::from_str(r#"{"function":"Func","argIndex":2}"#).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.arg_index(), 2);
    }

    #[test]
    fn deserialization_validates() {
        let r: Result<Target, _> = serde_json::from_str(r#"{"function":"Func","arg_index":0}"#);
        assert!(r.is_err());
    }
}
