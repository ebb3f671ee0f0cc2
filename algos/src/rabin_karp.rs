use crate::{StringSearch, Symbol};

pub const DEFAULT_BASE: u64 = 256;
pub const DEFAULT_MODULUS: u64 = 1_000_000_007;

pub struct RabinKarp;

impl StringSearch for RabinKarp {
    type Config = HashParams;
    type State = HashParams;

    fn build(config: &Self::Config) -> Self::State {
        *config
    }

    fn find_symbols<S: Symbol>(state: &Self::State, text: &[S], pattern: &[S]) -> Option<usize> {
        rabin_karp_find_with(*state, text, pattern)
    }
}

/// Radix and modulus of the polynomial hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    base: u64,
    modulus: u64,
}

impl Default for HashParams {
    fn default() -> Self {
        Self::new(DEFAULT_BASE, DEFAULT_MODULUS)
    }
}

impl HashParams {
    pub fn new(base: u64, modulus: u64) -> Self {
        assert!(modulus > 0, "HashParams: modulus must be > 0");
        Self {
            base: base % modulus,
            modulus,
        }
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    #[inline]
    fn reduce<S: Symbol>(&self, sym: S) -> u64 {
        sym.value() % self.modulus
    }

    #[inline]
    fn mul(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.modulus as u128) as u64
    }

    /// `hash * base + sym`, reduced. Both operands are already below the modulus.
    #[inline]
    fn push<S: Symbol>(&self, hash: u64, sym: S) -> u64 {
        let wide = hash as u128 * self.base as u128 + self.reduce(sym) as u128;
        (wide % self.modulus as u128) as u64
    }

    /// Hash of `window` computed from scratch with Horner's rule.
    pub fn hash<S: Symbol>(&self, window: &[S]) -> u64 {
        window.iter().fold(0, |hash, &sym| self.push(hash, sym))
    }

    /// `base^exp mod modulus`, by repeated multiplication.
    fn power(&self, exp: usize) -> u64 {
        let mut acc = 1 % self.modulus;
        for _ in 0..exp {
            acc = self.mul(acc, self.base);
        }
        acc
    }
}

/// Polynomial hash of a fixed-width window that slides one symbol at a time.
#[derive(Debug, Clone)]
pub struct RollingHash {
    params: HashParams,
    /// weight of the oldest symbol, `base^(width-1)`
    high_power: u64,
    hash: u64,
}

impl RollingHash {
    pub fn new<S: Symbol>(params: HashParams, window: &[S]) -> Self {
        Self {
            params,
            high_power: params.power(window.len().saturating_sub(1)),
            hash: params.hash(window),
        }
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.hash
    }

    /// Drop `outgoing` from the front of the window and append `incoming`.
    pub fn roll<S: Symbol>(&mut self, outgoing: S, incoming: S) {
        let modulus = self.params.modulus as i128;
        let weight = self.params.mul(self.params.reduce(outgoing), self.high_power);

        let mut hash = self.hash as i128 - weight as i128;
        if hash < 0 {
            hash += modulus;
        }

        self.hash = self.params.push(hash as u64, incoming);
    }
}

/// Rabin-Karp with the default hash parameters.
pub fn rabin_karp_find<S: Symbol>(text: &[S], pattern: &[S]) -> Option<usize> {
    rabin_karp_find_with(HashParams::default(), text, pattern)
}

pub fn rabin_karp_find_with<S: Symbol>(
    params: HashParams,
    text: &[S],
    pattern: &[S],
) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let pattern_hash = params.hash(pattern);
    let mut window = RollingHash::new(params, &text[..m]);

    for i in 0..=n - m {
        if window.value() == pattern_hash {
            // equal hashes only make a candidate
            if text[i..i + m] == *pattern {
                return Some(i);
            }
            log::trace!("rabin_karp: hash collision at {i}");
        }

        if i < n - m {
            window.roll(text[i], text[i + m]);
        }
    }

    None
}
