use std::collections::HashMap;

use crate::{StringSearch, Symbol};

pub struct Horspool;

impl StringSearch for Horspool {
    type Config = ();
    type State = ();

    fn build(_config: &Self::Config) -> Self::State {}

    fn find_symbols<S: Symbol>(_state: &Self::State, text: &[S], pattern: &[S]) -> Option<usize> {
        horspool_find(text, pattern)
    }
}

/// Bad-character shift table for Horspool.
///
/// Every symbol of the pattern except the last maps to its distance from the
/// pattern end (rightmost occurrence wins). Anything else shifts by the full
/// pattern length.
#[derive(Debug, Clone)]
pub struct ShiftTable<S> {
    shifts: HashMap<S, usize>,
    default: usize,
}

impl<S: Symbol> ShiftTable<S> {
    pub fn new(pattern: &[S]) -> Self {
        let m = pattern.len();
        let mut shifts = HashMap::with_capacity(m);
        // the last symbol is left out so a mismatch there still moves forward
        for (i, &sym) in pattern.iter().enumerate().take(m.saturating_sub(1)) {
            shifts.insert(sym, m - 1 - i);
        }
        Self { shifts, default: m }
    }

    /// Entry for `sym`, if it occurs in the pattern's prefix.
    pub fn get(&self, sym: S) -> Option<usize> {
        self.shifts.get(&sym).copied()
    }

    #[inline]
    pub fn shift(&self, sym: S) -> usize {
        self.get(sym).unwrap_or(self.default)
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}

/// Find the first occurrence of `pattern` in `text` using Boyer–Moore–Horspool.
/// Returns Some(start_index) if found, None otherwise.
pub fn horspool_find<S: Symbol>(text: &[S], pattern: &[S]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let table = ShiftTable::new(pattern);

    let mut i = m - 1; // text index aligned with the pattern's last symbol

    while i < n {
        let mut k = 0;
        while k < m && pattern[m - 1 - k] == text[i - k] {
            k += 1;
        }

        if k == m {
            return Some(i + 1 - m);
        }
        i += table.shift(text[i]);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_table_rightmost_occurrence_wins() {
        let table = ShiftTable::new(b"ABCAB");
        assert_eq!(table.get(b'A'), Some(1));
        assert_eq!(table.get(b'B'), Some(3));
        assert_eq!(table.get(b'C'), Some(2));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_shift_table_excludes_last_symbol() {
        let table = ShiftTable::new(b"ABC");
        assert_eq!(table.get(b'C'), None);
        assert_eq!(table.shift(b'C'), 3);
        assert_eq!(table.shift(b'Z'), 3);
    }

    #[test]
    fn test_shift_table_degenerate_patterns() {
        assert!(ShiftTable::<u8>::new(b"").is_empty());
        let single = ShiftTable::new(b"x");
        assert!(single.is_empty());
        assert_eq!(single.shift(b'x'), 1);
    }

    #[test]
    fn test_horspool_basic() {
        let hay = b"ababcabcabababd";
        let pat = b"ababd";
        assert_eq!(horspool_find(hay, pat), Some(10));
    }

    #[test]
    fn test_horspool_not_found() {
        assert_eq!(horspool_find(b"hello world", b"rust"), None);
        assert_eq!(horspool_find(b"AAAAAA", b"AAB"), None);
    }

    #[test]
    fn test_horspool_empty_pattern() {
        let pat: &[u8] = b"";
        assert_eq!(horspool_find(b"abc", pat), Some(0));
        assert_eq!(horspool_find(pat, pat), Some(0));
    }

    #[test]
    fn test_horspool_pattern_longer_than_text() {
        assert_eq!(horspool_find(b"ab", b"abc"), None);
    }

    #[test]
    fn test_horspool_match_at_edges() {
        assert_eq!(horspool_find(b"ABAAABCD", b"ABC"), Some(4));
        assert_eq!(horspool_find(b"needle in hay", b"needle"), Some(0));
        assert_eq!(horspool_find(b"hay with needle", b"needle"), Some(9));
        assert_eq!(horspool_find(b"same", b"same"), Some(0));
    }

    #[test]
    fn test_horspool_repetitive_input() {
        let hay = b"aaaaaaaaaaaaaaaaaaab";
        assert_eq!(horspool_find(hay, b"aaab"), Some(16));
    }

    #[test]
    fn test_horspool_utf8() {
        let hay_s = "🌍hello🌍hello";
        let pat_s = "hello🌍";
        assert_eq!(horspool_find(hay_s.as_bytes(), pat_s.as_bytes()), Some(4));

        let hay: Vec<char> = hay_s.chars().collect();
        let pat: Vec<char> = pat_s.chars().collect();
        assert_eq!(horspool_find(&hay, &pat), Some(1));
    }
}
