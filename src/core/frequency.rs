//! Frequency counting with deterministic tie-breaking
//!
//! Values are counted in order of first appearance. Whenever two values share a
//! count, the one seen first wins: `mode` returns it, and `sorted` / `top`
//! place it ahead. Results are therefore reproducible for a given input order.

use crate::types::ValueCount;
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counter over values of type `T`
#[derive(Debug, Clone)]
pub struct FrequencyCounter<T> {
    index: HashMap<T, usize>,
    counts: Vec<ValueCount<T>>,
}

impl<T> Default for FrequencyCounter<T> {
    fn default() -> Self {
        FrequencyCounter {
            index: HashMap::new(),
            counts: Vec::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> FrequencyCounter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `value`
    pub fn add(&mut self, value: T) {
        match self.index.get(&value) {
            Some(&slot) => self.counts[slot].count += 1,
            None => {
                self.index.insert(value.clone(), self.counts.len());
                self.counts.push(ValueCount { value, count: 1 });
            }
        }
    }

    /// Number of occurrences recorded
    pub fn total(&self) -> usize {
        self.counts.iter().map(|entry| entry.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Most frequent value; first-seen wins ties
    pub fn mode(&self) -> Option<&T> {
        let mut best: Option<&ValueCount<T>> = None;
        for entry in &self.counts {
            if best.map_or(true, |b| entry.count > b.count) {
                best = Some(entry);
            }
        }
        best.map(|entry| &entry.value)
    }

    /// All values, descending by count, ties in first-seen order
    pub fn sorted(&self) -> Vec<ValueCount<T>> {
        let mut sorted = self.counts.clone();
        // stable sort keeps first-seen order among equal counts
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }

    /// The `n` most frequent values
    pub fn top(&self, n: usize) -> Vec<ValueCount<T>> {
        let mut sorted = self.sorted();
        sorted.truncate(n);
        sorted
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for FrequencyCounter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut counter = FrequencyCounter::new();
        for value in iter {
            counter.add(value);
        }
        counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::clear_winner(vec!["a", "b", "b", "c"], Some("b"))]
    #[case::tie_first_seen_wins(vec!["x", "y", "y", "x"], Some("x"))]
    #[case::tie_later_overtaken(vec!["x", "y", "y"], Some("y"))]
    #[case::single(vec!["only"], Some("only"))]
    #[case::empty(vec![], None)]
    fn test_mode(#[case] values: Vec<&str>, #[case] expected: Option<&str>) {
        let counter: FrequencyCounter<&str> = values.into_iter().collect();
        assert_eq!(counter.mode().copied(), expected);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let counter: FrequencyCounter<u32> = [3, 1, 2, 1, 2, 4].into_iter().collect();

        let sorted: Vec<(u32, usize)> = counter
            .sorted()
            .into_iter()
            .map(|entry| (entry.value, entry.count))
            .collect();

        assert_eq!(sorted, vec![(1, 2), (2, 2), (3, 1), (4, 1)]);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(2, 2)]
    #[case(10, 4)]
    fn test_top_truncates(#[case] n: usize, #[case] expected: usize) {
        let counter: FrequencyCounter<u32> = [3, 1, 2, 1, 2, 4].into_iter().collect();
        assert_eq!(counter.top(n).len(), expected);
    }

    #[test]
    fn test_total_counts_every_occurrence() {
        let counter: FrequencyCounter<&str> = ["a", "b", "a"].into_iter().collect();
        assert_eq!(counter.total(), 3);
        assert!(!counter.is_empty());
        assert!(FrequencyCounter::<&str>::new().is_empty());
    }
}
