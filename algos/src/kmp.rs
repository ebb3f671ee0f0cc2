use crate::{StringSearch, Symbol};

pub struct KMP;

impl StringSearch for KMP {
    type Config = ();
    type State = ();

    fn build(_config: &Self::Config) -> Self::State {}

    fn find_symbols<S: Symbol>(_state: &Self::State, text: &[S], pattern: &[S]) -> Option<usize> {
        kmp_find(text, pattern)
    }
}

/// Build the "longest proper prefix which is also suffix" (LPS) table
pub fn build_lps<S: Symbol>(pattern: &[S]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0; m];

    let mut len = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

pub fn kmp_find<S: Symbol>(text: &[S], pattern: &[S]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0); // convention: empty pattern matches at 0
    }

    if m > n {
        return None;
    }

    let lps = build_lps(pattern);

    let mut i = 0usize; // index in text
    let mut j = 0usize; // index in pattern

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;

            if j == m {
                // full match ending at i-1
                return Some(i - j);
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    None
}
