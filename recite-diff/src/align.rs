//! Longest-common-subsequence alignment under a pluggable equivalence

use std::collections::HashSet;

use crate::normalize::FilteredChar;

/// LCS length table, `(m + 1) x (n + 1)`, row-major
struct LcsTable {
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = value;
    }
}

fn build_table<F>(reference: &[FilteredChar], candidate: &[FilteredChar], eq: &mut F) -> LcsTable
where
    F: FnMut(char, char) -> bool,
{
    let m = reference.len();
    let n = candidate.len();
    let mut table = LcsTable {
        cols: n + 1,
        cells: vec![0; (m + 1) * (n + 1)],
    };

    for i in 1..=m {
        for j in 1..=n {
            let value = if eq(reference[i - 1].ch, candidate[j - 1].ch) {
                table.get(i - 1, j - 1) + 1
            } else {
                table.get(i - 1, j).max(table.get(i, j - 1))
            };
            table.set(i, j, value);
        }
    }

    table
}

/// Align `candidate` against `reference` and return the original indices of
/// the matched reference characters.
///
/// When several alignments have the same length the backtrack prefers
/// stepping back along the reference (`dp[i-1][j] >= dp[i][j-1]`), which
/// makes the chosen match set deterministic.
pub fn align<F>(reference: &[FilteredChar], candidate: &[FilteredChar], mut eq: F) -> HashSet<usize>
where
    F: FnMut(char, char) -> bool,
{
    let mut matched = HashSet::new();
    if reference.is_empty() || candidate.is_empty() {
        return matched;
    }

    let table = build_table(reference, candidate, &mut eq);

    let mut i = reference.len();
    let mut j = candidate.len();
    while i > 0 && j > 0 {
        if eq(reference[i - 1].ch, candidate[j - 1].ch) {
            matched.insert(reference[i - 1].index);
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) >= table.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn exact(a: char, b: char) -> bool {
        a == b
    }

    fn sorted(set: HashSet<usize>) -> Vec<usize> {
        let mut v: Vec<usize> = set.into_iter().collect();
        v.sort_unstable();
        v
    }

    fn align_str(reference: &str, candidate: &str) -> Vec<usize> {
        let r = normalize(reference);
        let c = normalize(candidate);
        sorted(align(&r.filtered, &c.filtered, exact))
    }

    #[test]
    fn test_identical_matches_everything() {
        assert_eq!(align_str("学而时习之", "学而时习之"), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_sides() {
        assert!(align_str("", "学而").is_empty());
        assert!(align_str("学而", "").is_empty());
        assert!(align_str("", "").is_empty());
    }

    #[test]
    fn test_skipped_character() {
        assert_eq!(align_str("学而时习之", "学时之"), vec![0, 2, 4]);
    }

    #[test]
    fn test_indices_refer_to_unfiltered_source() {
        assert_eq!(align_str("学而，时习之。", "而时"), vec![1, 3]);
    }

    #[test]
    fn test_tie_break_prefers_reference_pointer() {
        // A diagonal match is taken as soon as it is seen, so the last
        // reference occurrence claims the single candidate character.
        assert_eq!(align_str("甲甲", "甲"), vec![1]);
        // Both alignments ("甲" or "乙") have length 1; the backtrack visits
        // (2,2) -> (1,2) and matches "甲".
        assert_eq!(align_str("甲乙", "乙甲"), vec![0]);
    }

    #[test]
    fn test_tie_break_is_reproducible() {
        let first = align_str("甲乙甲乙甲", "乙甲乙");
        for _ in 0..10 {
            assert_eq!(align_str("甲乙甲乙甲", "乙甲乙"), first);
        }
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_custom_equivalence() {
        let r = normalize("abc");
        let c = normalize("ABC");
        let matched = align(&r.filtered, &c.filtered, |a, b| a.eq_ignore_ascii_case(&b));
        assert_eq!(sorted(matched), vec![0, 1, 2]);
    }
}
