//! The 512 bit (8 word) integer width.
//!
//! Author --- DMorgan
//! Last Moddified --- 2026-10-17

use crate::{UInt, WideUInt,};

/// A 512 bit unsigned integer.
pub type U512 = UInt<8,>;
/// The 1024 bit product of two `U512`s.
pub type WideU512 = WideUInt<8,>;

/// A zero `U512`.
pub const ZERO: U512 = UInt::ZERO;
/// A unit `U512`.
pub const ONE: U512 = UInt::ONE;
/// The largest `U512`, every bit set.
pub const MAX: U512 = UInt::MAX;

/// Creates a new `U512` holding `value` in its lowest word.
#[inline]
pub const fn new(value: u64,) -> U512 { UInt::new(value,) }

/// Creates a new `U512` from up to 8 little endian words.
#[inline]
pub fn from_words(words: &[u64],) -> U512 { UInt::from_words(words,) }

/// Creates a new `U512` from up to 64 little endian bytes.
#[inline]
pub fn from_le_bytes(bytes: &[u8],) -> U512 { UInt::from_le_bytes(bytes,) }

/// Creates a new `U512` from up to 64 big endian bytes.
#[inline]
pub fn from_be_bytes(bytes: &[u8],) -> U512 { UInt::from_be_bytes(bytes,) }

#[cfg(test,)]
mod tests {
  use super::*;
  use alloc::string::ToString;

  #[test]
  fn test_constants() {
    assert!(ZERO.is_zero(), "`ZERO` is not zero",);
    assert_eq!(ONE, 1, "`ONE` is not one",);
    assert_eq!(MAX + ONE, ZERO, "`MAX + 1` did not wrap",);
    assert_eq!(MAX.count_ones(), 512, "`MAX` does not have every bit set",);
  }

  #[test]
  fn test_arithmetic() {
    let a = new(100,);
    let b = new(200,);

    assert_eq!(a + b, 300, "`100 + 200` failed",);
    assert_eq!(b - a, 100, "`200 - 100` failed",);
    assert_eq!((a * b).to_string(), "20000", "`100 * 200` failed",);
    assert_eq!(b / a, 2, "`200 / 100` failed",);
    assert_eq!(ZERO - ONE, MAX, "`0 - 1` did not wrap",);
  }

  #[test]
  fn test_bitwise() {
    let a = new(12,);
    let b = new(10,);

    assert_eq!(a & b, 8, "`12 & 10` failed",);
    assert_eq!(a | b, 14, "`12 | 10` failed",);
    assert_eq!(a ^ b, 6, "`12 ^ 10` failed",);
    assert_eq!(ONE << 4usize, 16, "`1 << 4` failed",);
    assert_eq!(new(16,) >> 4usize, 1, "`16 >> 4` failed",);
    assert!((a & !a).is_zero(), "`a & !a` failed",);
    assert_eq!(a | !a, MAX, "`a | !a` failed",);
  }

  #[test]
  fn test_strings() {
    assert_eq!(ZERO.to_string(), "0",);
    assert_eq!(ONE.to_string(), "1",);
    assert_eq!(new(123,).to_string(), "123",);
    assert_eq!(new(u64::MAX,).to_string(), "18446744073709551615",);
    assert_eq!(new(0xF,).to_hex_string(), "0xf",);
    assert_eq!(new(0x100,).to_hex_string(), "0x100",);
  }

  #[test]
  fn test_bytes() {
    assert_eq!(from_le_bytes(&[1, 2, 3, 4, 5, 6, 7, 8,],), 0x0807060504030201,);
    assert_eq!(from_be_bytes(&[1, 2, 3, 4, 5, 6, 7, 8,],), 0x0102030405060708,);
    assert_eq!(from_words(&[1, 2, 3, 4, 5, 6, 7, 8, 9,],).to_le_bytes().len(), 64,);
  }
}
