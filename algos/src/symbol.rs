use std::fmt::Debug;
use std::hash::Hash;

/// An element of a text or pattern.
///
/// Searches only compare symbols for equality; Rabin-Karp additionally needs
/// a numeric value to feed its polynomial hash.
pub trait Symbol: Copy + Eq + Hash + Debug {
    fn value(self) -> u64;
}

impl Symbol for u8 {
    #[inline]
    fn value(self) -> u64 {
        self as u64
    }
}

impl Symbol for char {
    #[inline]
    fn value(self) -> u64 {
        self as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_raw_code_units() {
        assert_eq!(b'A'.value(), 65);
        assert_eq!('A'.value(), 65);
        assert_eq!('ї'.value(), 0x457);
        assert_eq!('🌍'.value(), 0x1F30D);
    }
}
