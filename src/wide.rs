//! The double width product of two `UInt`s.
//!
//! Author --- DMorgan
//! Last Moddified --- 2026-10-17

use crate::{UInt, uint,};
use alloc::vec::Vec;
use core::{fmt, iter,};


/// A `2N` word unsigned integer holding the full product of two `UInt<N>`s.
///
/// There is no arithmetic on a `WideUInt`; it can be rendered, checked for zero or split back
/// into its `UInt` halves.
#[derive(Clone, Copy, PartialEq, Eq, Hash,)]
pub struct WideUInt<const N: usize,>(pub(crate) [[u64; N]; 2],);

impl<const N: usize,> WideUInt<N,> {
  /// The number of words in a `WideUInt`.
  pub const WORDS: usize = N * 2;
  /// A zero `WideUInt`.
  pub const ZERO: Self = WideUInt([[0; N]; 2],);

  /// Creates a new `WideUInt` from its `low` and `high` halves.
  #[inline]
  pub const fn from_halves(low: UInt<N,>, high: UInt<N,>,) -> Self { WideUInt([low.0, high.0,],) }
  /// Returns `true` if every word is zero.
  #[inline]
  pub fn is_zero(&self,) -> bool { self.0.iter().flatten().all(|&word,| word == 0,) }
  /// The low `N` words; the product truncated back to a `UInt`.
  #[inline]
  pub const fn low(&self,) -> UInt<N,> { UInt(self.0[0],) }
  /// The high `N` words.
  #[inline]
  pub const fn high(&self,) -> UInt<N,> { UInt(self.0[1],) }
  /// Splits this `WideUInt` into its `low` and `high` halves.
  #[inline]
  pub const fn into_halves(self,) -> (UInt<N,>, UInt<N,>,) { (self.low(), self.high(),) }
  /// The word at `index`, counting from the least significant word.
  ///
  /// Returns `None` if `index` is out of range.
  pub fn word(&self, index: usize,) -> Option<u64> {
    if index >= Self::WORDS { return None }

    Some(self.0[index / N][index % N])
  }
  /// Copies out all `2N` little endian words.
  pub fn to_words(&self,) -> Vec<u64> { self.0.iter().flatten().copied().collect() }
  /// Adds `word` at word `index`, carrying upwards.
  ///
  /// A carry out of the top word is discarded.
  pub(crate) fn add_word_at(&mut self, index: usize, word: u64,) {
    let mut carry = word;
    let mut words = self.0.iter_mut().flatten().skip(index,);

    //Carry until the carry is absorbed or falls off the top.
    while carry != 0 {
      let slot = match words.next() {
        Some(slot) => slot,
        None => break,
      };

      let (v, check,) = slot.overflowing_add(carry,);
      *slot = v;
      carry = check as u64;
    }
  }
}

impl<const N: usize,> Default for WideUInt<N,> {
  #[inline]
  fn default() -> Self { WideUInt::ZERO }
}

impl<const N: usize,> fmt::Display for WideUInt<N,> {
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
    let mut num = *self;
    //Get the digits in reverse order.
    let digits = iter::from_fn(move || {
      if num.is_zero() { return None }

      //Divide from the most significant word of the high half down.
      let words = num.0.iter_mut().rev().flat_map(|half,| half.iter_mut().rev(),);
      Some(uint::div_small(words, 10,) as u8)
    },).collect::<Vec<_>>();

    uint::write_digits(fmt, digits,)
  }
}

impl<const N: usize,> fmt::Debug for WideUInt<N,> {
  #[inline]
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { write!(fmt, "{}", *self,) }
}
