//! 命中项去重与排序（内部使用）
use std::collections::HashSet;

use crate::types::Occurrence;

/// 单次扫描内的命中收集器：按 `(value, start)` 去重，保留首次出现的顺序
#[derive(Debug, Default)]
pub(crate) struct OccurrenceSet {
    seen: HashSet<(u64, usize)>,
    items: Vec<Occurrence>,
}

impl OccurrenceSet {
    /// 返回是否为新命中
    pub(crate) fn insert(&mut self, occ: Occurrence) -> bool {
        if !self.seen.insert((occ.value, occ.start)) { return false; }
        self.items.push(occ);
        true
    }

    /// 取出结果并稳定排序
    pub(crate) fn into_sorted(mut self) -> Vec<Occurrence> {
        sort_occurrences_stable(&mut self.items);
        self.items
    }
}

/// 稳定排序：起始偏移升序 → 结束偏移升序 → 值升序
pub(crate) fn sort_occurrences_stable(items: &mut [Occurrence]) {
    items.sort_by(|a, b| {
        use std::cmp::Ordering;
        match a.start.cmp(&b.start) {
            Ordering::Equal => match a.end.cmp(&b.end) {
                Ordering::Equal => a.value.cmp(&b.value),
                o => o,
            },
            o => o,
        }
    });
}
