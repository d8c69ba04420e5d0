use std::collections::BinaryHeap;

use crate::tally::FrequencyTable;

/// A key with its count, ordered by count and then by key, both ascending.
///
/// Under a max-heap this puts the highest count first and, among equal
/// counts, the lexicographically greater key (byte-wise) first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankedEntry {
    // Field order drives the derived Ord.
    pub count: u64,
    pub key: String,
}

impl RankedEntry {
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        Self {
            count,
            key: key.into(),
        }
    }
}

/// Returns up to `n` entries of `table`, highest count first, ties broken
/// by descending key.
pub fn top_n(table: &FrequencyTable, n: usize) -> Vec<RankedEntry> {
    let mut heap: BinaryHeap<RankedEntry> = table
        .iter()
        .map(|(key, count)| RankedEntry::new(key, count))
        .collect();

    std::iter::from_fn(|| heap.pop()).take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, u64)]) -> FrequencyTable {
        entries.iter().copied().collect()
    }

    fn render(entries: &[RankedEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| format!("{} {}", e.key, e.count))
            .collect()
    }

    #[test]
    fn test_equal_counts_order_by_descending_key() {
        let ranked = top_n(&table(&[("b", 5), ("a", 5), ("c", 3)]), 3);
        assert_eq!(render(&ranked), vec!["b 5", "a 5", "c 3"]);
    }

    #[test]
    fn test_count_dominates_key() {
        let ranked = top_n(&table(&[("zzz", 1), ("aaa", 9), ("mmm", 4)]), 3);
        assert_eq!(render(&ranked), vec!["aaa 9", "mmm 4", "zzz 1"]);
    }

    #[test]
    fn test_truncates_to_n() {
        let ranked = top_n(&table(&[("x", 1), ("y", 2), ("z", 3)]), 2);
        assert_eq!(render(&ranked), vec!["z 3", "y 2"]);
    }

    #[test]
    fn test_n_larger_than_table_returns_everything() {
        let ranked = top_n(&table(&[("one.com", 4), ("two.com", 7)]), 10);
        assert_eq!(ranked.len(), 2);
        assert_eq!(render(&ranked), vec!["two.com 7", "one.com 4"]);
    }

    #[test]
    fn test_empty_table() {
        assert!(top_n(&FrequencyTable::new(), 5).is_empty());
    }

    #[test]
    fn test_tie_break_is_bytewise() {
        // 'Z' (0x5A) sorts below 'a' (0x61) byte-wise
        let ranked = top_n(&table(&[("Zebra", 2), ("apple", 2), ("/a", 2)]), 3);
        assert_eq!(render(&ranked), vec!["apple 2", "Zebra 2", "/a 2"]);
    }

    #[test]
    fn test_repeated_ranking_is_identical() {
        let t = table(&[("/a", 3), ("/b", 3), ("/c", 3), ("/d", 1), ("/e", 2)]);
        let first = top_n(&t, 4);
        for _ in 0..10 {
            assert_eq!(top_n(&t, 4), first);
        }
        assert_eq!(render(&first), vec!["/c 3", "/b 3", "/a 3", "/e 2"]);
    }

    #[test]
    fn test_matches_full_sort_reference() {
        let t = table(&[
            ("k1", 2),
            ("k2", 9),
            ("k3", 2),
            ("k4", 5),
            ("k5", 9),
            ("k6", 1),
        ]);

        let mut reference: Vec<RankedEntry> =
            t.iter().map(|(k, c)| RankedEntry::new(k, c)).collect();
        reference.sort_by(|a, b| b.cmp(a));

        for n in 1..=8 {
            let expected: Vec<_> = reference.iter().take(n).cloned().collect();
            assert_eq!(top_n(&t, n), expected);
        }
    }
}
