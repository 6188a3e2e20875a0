/// Top-N selection over labelled sizes.
///
/// Results are ordered by size descending. Entries of equal size keep the
/// order they had in the input, which is what a stable sort would give,
/// but only the kept entries are ever fully sorted.

/// Return the `n` largest `(label, size)` pairs from `entries`.
///
/// Uses `select_nth_unstable_by` (O(len) average) to bring the top-n to
/// the front and sorts only that slice. Each entry is keyed by its input
/// position as well as its size, so the unstable selection cannot reorder
/// ties.
///
/// Returns an empty vec when `n == 0` or `entries` is empty.
pub fn select_top<L>(entries: impl IntoIterator<Item = (L, u64)>, n: usize) -> Vec<(L, u64)> {
    if n == 0 {
        return Vec::new();
    }

    let mut indexed: Vec<(usize, L, u64)> = entries
        .into_iter()
        .enumerate()
        .map(|(position, (label, size))| (position, label, size))
        .collect();

    // Descending by size, then ascending by input position.
    let order = |a: &(usize, L, u64), b: &(usize, L, u64)| b.2.cmp(&a.2).then(a.0.cmp(&b.0));

    if indexed.len() > n {
        indexed.select_nth_unstable_by(n - 1, order);
        indexed.truncate(n);
    }
    indexed.sort_unstable_by(order);

    indexed
        .into_iter()
        .map(|(_, label, size)| (label, size))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&'static str, u64)]) -> Vec<(&'static str, u64)> {
        pairs.to_vec()
    }

    #[test]
    fn test_descending_and_truncated() {
        let input = entries(&[("a", 10), ("b", 30), ("c", 20), ("d", 5)]);
        assert_eq!(select_top(input, 2), vec![("b", 30), ("c", 20)]);
    }

    #[test]
    fn test_never_returns_more_than_available() {
        let input = entries(&[("a", 1), ("b", 2)]);
        let top = select_top(input, 10);
        assert_eq!(top, vec![("b", 2), ("a", 1)]);
    }

    #[test]
    fn test_zero_and_empty() {
        assert!(select_top(entries(&[("a", 1)]), 0).is_empty());
        assert!(select_top(Vec::<(String, u64)>::new(), 5).is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let input = entries(&[
            ("first", 7),
            ("big", 9),
            ("second", 7),
            ("third", 7),
            ("small", 1),
        ]);
        assert_eq!(
            select_top(input.clone(), 3),
            vec![("big", 9), ("first", 7), ("second", 7)]
        );
        assert_eq!(
            select_top(input, 5),
            vec![("big", 9), ("first", 7), ("second", 7), ("third", 7), ("small", 1)]
        );
    }

    #[test]
    fn test_ties_are_not_broken_by_label() {
        // "z" comes first in the input, so it stays first despite sorting
        // after "a" alphabetically.
        let input = entries(&[("z", 3), ("a", 3)]);
        assert_eq!(select_top(input, 1), vec![("z", 3)]);
    }

    #[test]
    fn test_matches_stable_sort_on_many_ties() {
        let input: Vec<(usize, u64)> = (0..200).map(|i| (i, (i % 7) as u64)).collect();
        let mut expected = input.clone();
        expected.sort_by(|a, b| b.1.cmp(&a.1));
        expected.truncate(37);
        assert_eq!(select_top(input, 37), expected);
    }
}
