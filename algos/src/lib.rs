mod horspool;
mod kmp;
mod rabin_karp;
mod symbol;

pub mod bsearch;
pub mod hash_table;
pub mod source;
pub mod timing;

pub trait StringSearch {
    type Config;
    type State;

    fn build(config: &Self::Config) -> Self::State;
    fn find_symbols<S: Symbol>(state: &Self::State, text: &[S], pattern: &[S]) -> Option<usize>;
    fn find_bytes(state: &Self::State, text: &[u8], pattern: &[u8]) -> Option<usize> {
        Self::find_symbols(state, text, pattern)
    }
    /// Byte offset of the first match, usable for slicing `text`.
    fn find(state: &Self::State, text: &str, pattern: &str) -> Option<usize> {
        let text_bytes = text.as_bytes();
        let pattern_bytes = pattern.as_bytes();
        Self::find_bytes(state, text_bytes, pattern_bytes)
    }
    /// Character offset of the first match.
    fn find_chars(state: &Self::State, text: &str, pattern: &str) -> Option<usize> {
        let text_chars: Vec<char> = text.chars().collect();
        let pattern_chars: Vec<char> = pattern.chars().collect();
        Self::find_symbols(state, &text_chars, &pattern_chars)
    }
}

pub use horspool::{Horspool, ShiftTable, horspool_find};
pub use kmp::{KMP, build_lps, kmp_find};
pub use rabin_karp::{
    DEFAULT_BASE, DEFAULT_MODULUS, HashParams, RabinKarp, RollingHash, rabin_karp_find,
    rabin_karp_find_with,
};
pub use symbol::Symbol;

/// The search algorithms this crate provides, for callers that pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    Horspool,
    Kmp,
    RabinKarp,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Horspool, Algorithm::Kmp, Algorithm::RabinKarp];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Horspool => "Boyer-Moore",
            Algorithm::Kmp => "KMP",
            Algorithm::RabinKarp => "Rabin-Karp",
        }
    }

    pub fn search<S: Symbol>(self, text: &[S], pattern: &[S]) -> Option<usize> {
        self.search_with(HashParams::default(), text, pattern)
    }

    /// Like [`Algorithm::search`], with explicit hash parameters for Rabin-Karp.
    /// The other algorithms ignore `params`.
    pub fn search_with<S: Symbol>(
        self,
        params: HashParams,
        text: &[S],
        pattern: &[S],
    ) -> Option<usize> {
        log::debug!(
            "{}: searching n={} m={}",
            self.name(),
            text.len(),
            pattern.len()
        );
        match self {
            Algorithm::Horspool => horspool_find(text, pattern),
            Algorithm::Kmp => kmp_find(text, pattern),
            Algorithm::RabinKarp => rabin_karp_find_with(params, text, pattern),
        }
    }
}

/// Boyer-Moore-Horspool over the bytes of `text`; returns a byte offset.
pub fn search_boyer_moore_horspool(text: &str, pattern: &str) -> Option<usize> {
    Horspool::find(&(), text, pattern)
}

/// KMP over the bytes of `text`; returns a byte offset.
pub fn search_kmp(text: &str, pattern: &str) -> Option<usize> {
    KMP::find(&(), text, pattern)
}

/// Rabin-Karp with the default hash parameters; returns a byte offset.
pub fn search_rabin_karp(text: &str, pattern: &str) -> Option<usize> {
    RabinKarp::find(&HashParams::default(), text, pattern)
}
