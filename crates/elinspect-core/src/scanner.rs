//! 扫描器：调用点定位 → 参数切分 → 字面量抽取
//!
//! 纯函数、无内部状态；编译后的 `Scanner` 只读，可跨线程共享、反复调用。
use tracing::debug;

use crate::argument::extract_argument;
use crate::error::ScanError;
use crate::findings::OccurrenceSet;
use crate::literals::find_literals;
use crate::locator::CallLocator;
use crate::types::{Occurrence, Target};

/// 已编译的目标集合（顺序与传入的目标列表一致）
#[derive(Debug, Clone)]
pub struct Scanner {
    targets: Vec<(Target, CallLocator)>,
}

impl Scanner {
    /// 为每个目标编译调用点定位器
    pub fn new(targets: &[Target]) -> Result<Self, ScanError> {
        let mut compiled = Vec::with_capacity(targets.len());
        for t in targets {
            compiled.push((t.clone(), CallLocator::new(t.name())?));
        }
        Ok(Self { targets: compiled })
    }

    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter().map(|(t, _)| t)
    }

    /// 扫描文本，返回按偏移排序的命中列表
    /// - 找不到调用、参数越界、参数内无数字，都只是贡献 0 个命中
    /// - 多个目标命中同一位置时按 `(value, start)` 去重
    pub fn scan(&self, text: &str) -> Vec<Occurrence> {
        let mut found = OccurrenceSet::default();

        for (target, locator) in &self.targets {
            let mut calls = 0usize;
            for site in locator.call_sites(text) {
                calls += 1;
                let Some(arg) = extract_argument(text, site, target.arg_index()) else { continue };
                for occ in find_literals(&arg) {
                    found.insert(occ);
                }
            }
            debug!(target = target.name(), arg_index = target.arg_index(), calls, "target scanned");
        }

        found.into_sorted()
    }
}

/// 一次性扫描（内部临时编译目标）
pub fn scan(text: &str, targets: &[Target]) -> Result<Vec<Occurrence>, ScanError> {
    Ok(Scanner::new(targets)?.scan(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_targets;

    fn values(text: &str, targets: &[Target]) -> Vec<u64> {
        scan(text, targets).unwrap().into_iter().map(|o| o.value).collect()
    }

    #[test]
    fn basic_call() {
        assert_eq!(values("var val = Evalue(60);", &default_targets()), vec![60]);
    }

    #[test]
    fn multiple_functions() {
        let text = "\n  var a = Evalue(60);\n  var b = HasElement(61);\n  var c = ModExp(62);\n";
        assert_eq!(values(text, &default_targets()), vec![60, 61, 62]);
    }

    #[test]
    fn unrelated_function() {
        assert!(values("var val = SomeOtherFunction(60);", &default_targets()).is_empty());
    }

    #[test]
    fn overlapping_targets_deduplicate() {
        let targets = vec![Target::new("Create", 1).unwrap(), Target::new("Element.Create", 1).unwrap()];
        assert_eq!(values("Element.Create(100)", &targets), vec![100]);
    }

    #[test]
    fn only_the_configured_argument() {
        let targets = vec![Target::new("Func", 2).unwrap()];
        assert_eq!(values("Func(1, 2, 3)", &targets), vec![2]);
    }

    #[test]
    fn empty_targets() {
        assert!(scan("Evalue(60)", &[]).unwrap().is_empty());
    }

    #[test]
    fn compiled_scanner_is_reusable() {
        let scanner = Scanner::new(&default_targets()).unwrap();
        assert_eq!(scanner.scan("Evalue(1)").len(), 1);
        assert_eq!(scanner.scan("Evalue(1); Evalue(2)").len(), 2);
        assert_eq!(scanner.targets().count(), 3);
    }
}
