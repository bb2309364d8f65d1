//! The 1024 bit (16 word) integer width.
//!
//! Author --- DMorgan
//! Last Moddified --- 2026-10-17

use crate::{UInt, WideUInt,};

/// A 1024 bit unsigned integer.
pub type U1024 = UInt<16,>;
/// The 2048 bit product of two `U1024`s.
pub type WideU1024 = WideUInt<16,>;

/// A zero `U1024`.
pub const ZERO: U1024 = UInt::ZERO;
/// A unit `U1024`.
pub const ONE: U1024 = UInt::ONE;
/// The largest `U1024`, every bit set.
pub const MAX: U1024 = UInt::MAX;

/// Creates a new `U1024` holding `value` in its lowest word.
#[inline]
pub const fn new(value: u64,) -> U1024 { UInt::new(value,) }

/// Creates a new `U1024` from up to 16 little endian words.
#[inline]
pub fn from_words(words: &[u64],) -> U1024 { UInt::from_words(words,) }

/// Creates a new `U1024` from up to 128 little endian bytes.
#[inline]
pub fn from_le_bytes(bytes: &[u8],) -> U1024 { UInt::from_le_bytes(bytes,) }

/// Creates a new `U1024` from up to 128 big endian bytes.
#[inline]
pub fn from_be_bytes(bytes: &[u8],) -> U1024 { UInt::from_be_bytes(bytes,) }

#[cfg(test,)]
mod tests {
  use super::*;

  #[test]
  fn test_constants() {
    assert!(ZERO.is_zero(), "`ZERO` is not zero",);
    assert_eq!(ONE, 1, "`ONE` is not one",);
    assert_eq!(MAX.leading_zeros(), 0, "`MAX` does not have every bit set",);
    assert_eq!(MAX.count_ones(), 1024, "`MAX` does not have every bit set",);
  }

  #[test]
  fn test_from_words() {
    assert_eq!(from_words(&[],), ZERO, "`from_words []` failed",);
    assert_eq!(from_words(&[42,],), 42, "`from_words [42]` failed",);

    let words = (1..=16).collect::<alloc::vec::Vec<u64>>();
    assert_eq!(from_words(&words,).to_words()[..], words[..], "`from_words 1..=16` failed",);

    let long = (1..=20).collect::<alloc::vec::Vec<u64>>();
    assert_eq!(from_words(&long,), from_words(&words,), "`from_words` did not truncate",);

    let short = from_words(&[100, 200, 300,],);
    assert_eq!(short.words()[..3], [100u64, 200, 300,], "`from_words` failed",);
    assert!(short.words()[3..].iter().all(|&word,| word == 0,), "`from_words` did not zero fill",);
  }

  #[test]
  fn test_bytes() {
    let bytes = (1..=16).collect::<alloc::vec::Vec<u8>>();
    let num = from_le_bytes(&bytes,);
    assert_eq!(num.words()[0], 0x0807060504030201, "`from_le_bytes` low word failed",);
    assert_eq!(num.words()[1], 0x100f0e0d0c0b0a09, "`from_le_bytes` second word failed",);

    assert_eq!(from_be_bytes(&[42,],), 42, "`from_be_bytes [42]` failed",);

    let be = new(42,).to_be_bytes();
    assert_eq!(be.len(), 128, "`to_be_bytes` has the wrong length",);
    assert!(be[..127].iter().all(|&byte,| byte == 0,) && be[127] == 42, "`to_be_bytes 42` failed",);

    let num = from_words(&(1..=16).collect::<alloc::vec::Vec<u64>>(),);
    assert_eq!(from_be_bytes(&num.to_be_bytes(),), num, "Big endian round trip failed",);
    assert_eq!(from_le_bytes(&num.to_le_bytes(),), num, "Little endian round trip failed",);
  }
}
