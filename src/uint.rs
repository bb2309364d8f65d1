//! The fixed width unsigned integer and all of its operations.
//!
//! Author --- DMorgan
//! Last Moddified --- 2026-10-17

use crate::{WideUInt, DivisionByZero, FromIntError, ParseIntError,};
use alloc::{vec::Vec, string::String,};
use core::{
  fmt,
  ops::{
    Rem, RemAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Add, AddAssign,
    Sub, SubAssign,
    Mul,
    Div, DivAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Not,
  },
  num::IntErrorKind,
  cmp::Ordering,
  convert::TryFrom,
  str::FromStr,
  iter::{self, FromIterator,},
};

mod tests;
mod serde;

//Words are stored little endian; word `0` holds bits `0..64`.

/// An unsigned integer exactly `N` 64 bit words wide.
///
/// All arithmetic wraps modulo `2^(64 * N)`.
#[derive(Clone, Copy, Hash,)]
pub struct UInt<const N: usize,>(pub(crate) [u64; N],);

impl<const N: usize,> UInt<N,> {
  /// The number of words in a `UInt`.
  pub const WORDS: usize = N;
  /// The number of bytes in a `UInt`.
  pub const BYTES: usize = N * 8;
  /// The number of bits in a `UInt`.
  pub const BITS: u32 = N as u32 * 64;
  /// A zero `UInt`.
  pub const ZERO: Self = UInt([0; N],);
  /// A unit `UInt`.
  pub const ONE: Self = Self::new(1,);
  /// The largest `UInt`, every bit set.
  pub const MAX: Self = UInt([!0; N],);

  /// Creates a new `UInt` holding `value` in its lowest word.
  #[inline]
  pub const fn new(value: u64,) -> Self {
    let mut words = [0; N];
    words[0] = value;

    UInt(words,)
  }
  /// Creates a new `UInt` from little endian words.
  ///
  /// Missing high words are zero, words past `N` are ignored.
  ///
  /// # Params
  ///
  /// words --- The little endian words to copy.
  pub fn from_words(words: &[u64],) -> Self {
    let len = usize::min(words.len(), N,);
    let mut buffer = [0; N];
    buffer[..len].copy_from_slice(&words[..len],);

    UInt(buffer,)
  }
  /// Creates a new `UInt` from little endian bytes.
  ///
  /// Missing high bytes are zero, bytes past `BYTES` are ignored.
  ///
  /// # Params
  ///
  /// bytes --- The little endian bytes to decode.
  pub fn from_le_bytes(bytes: &[u8],) -> Self {
    let bytes = &bytes[..usize::min(bytes.len(), Self::BYTES,)];
    let mut words = [0; N];

    for (word, chunk,) in words.iter_mut().zip(bytes.chunks(8,),) {
      //The last chunk may be short; its missing bytes are high bytes.
      let mut buffer = [0; 8];
      buffer[..chunk.len()].copy_from_slice(chunk,);

      *word = u64::from_le_bytes(buffer,);
    }

    UInt(words,)
  }
  /// Creates a new `UInt` from big endian bytes.
  ///
  /// Only the first `BYTES` bytes are read. The bytes read are right aligned so a short
  /// input fills the low bytes and the leading bytes are zero.
  ///
  /// # Params
  ///
  /// bytes --- The big endian bytes to decode.
  pub fn from_be_bytes(bytes: &[u8],) -> Self {
    let bytes = &bytes[..usize::min(bytes.len(), Self::BYTES,)];
    let mut words = [0; N];

    //Read from the least significant end; the last chunk may be short.
    for (word, chunk,) in words.iter_mut().zip(bytes.rchunks(8,),) {
      let mut buffer = [0; 8];
      buffer[8 - chunk.len()..].copy_from_slice(chunk,);

      *word = u64::from_be_bytes(buffer,);
    }

    UInt(words,)
  }
  /// Borrows the little endian words of this `UInt`.
  #[inline]
  pub const fn words(&self,) -> &[u64; N] { &self.0 }
  /// Copies out the little endian words of this `UInt`.
  #[inline]
  pub const fn to_words(self,) -> [u64; N] { self.0 }
  /// Encodes this `UInt` as exactly `BYTES` little endian bytes.
  pub fn to_le_bytes(&self,) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(Self::BYTES,);
    for word in self.0.iter() { bytes.extend_from_slice(&word.to_le_bytes(),) }

    bytes
  }
  /// Encodes this `UInt` as exactly `BYTES` big endian bytes.
  pub fn to_be_bytes(&self,) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(Self::BYTES,);
    for word in self.0.iter().rev() { bytes.extend_from_slice(&word.to_be_bytes(),) }

    bytes
  }
  /// Renders this `UInt` as lower case hexadecimal prefixed by `0x`.
  #[inline]
  pub fn to_hex_string(&self,) -> String { format!("{:#x}", self,) }
  /// Returns `true` if every word is zero.
  #[inline]
  pub fn is_zero(&self,) -> bool { self.0.iter().all(|&word,| word == 0,) }
  /// Returns `true` if the lowest bit is set.
  #[inline]
  pub fn is_odd(&self,) -> bool { self.0[0] & 1 == 1 }
  /// Returns `true` if the lowest bit is clear.
  #[inline]
  pub fn is_even(&self,) -> bool { !self.is_odd() }
  /// Calculates `self + rhs` and whether a carry fell out of the top word.
  pub fn overflowing_add(mut self, rhs: Self,) -> (Self, bool,) {
    let carry = self.add_words(&rhs.0,);

    (self, carry,)
  }
  /// Calculates `self - rhs` and whether a borrow fell out of the top word.
  pub fn overflowing_sub(mut self, rhs: Self,) -> (Self, bool,) {
    let borrow = self.sub_words(&rhs.0,);

    (self, borrow,)
  }
  /// Calculates the full `2N` word product of `self` and `rhs`.
  pub fn widening_mul(self, rhs: Self,) -> WideUInt<N,> {
    let mut product = WideUInt::ZERO;

    for (i, &lhs,) in self.0.iter().enumerate() {
      //Zero words contribute nothing to the product.
      if lhs == 0 { continue }

      for (j, &rhs,) in rhs.0.iter().enumerate() {
        if rhs == 0 { continue }

        let wide = lhs as u128 * rhs as u128;
        //Accumulate the low half then the high half, each carrying upwards.
        product.add_word_at(i + j, wide as u64,);
        product.add_word_at(i + j + 1, (wide >> 64) as u64,);
      }
    }

    product
  }
  /// Calculates `self * rhs` truncated to `N` words.
  #[inline]
  pub fn wrapping_mul(self, rhs: Self,) -> Self { self.widening_mul(rhs,).low() }
  /// Calculates the `quotient` and `remainder` of `self / divisor`.
  ///
  /// # Params
  ///
  /// divisor --- The right hand side of the division.
  pub fn try_div_rem(self, divisor: Self,) -> Result<(Self, Self,), DivisionByZero> {
    if divisor.is_zero() {
      log::debug!("refused to divide a {} bit integer by zero", Self::BITS,);
      return Err(DivisionByZero)
    }

    match self.cmp(&divisor,) {
      //`divisor` does not fit into `self` at all.
      Ordering::Less => Ok((UInt::ZERO, self,)),
      Ordering::Equal => Ok((UInt::ONE, UInt::ZERO,)),
      Ordering::Greater => Ok(self.long_division(&divisor,)),
    }
  }
  /// Calculates the `quotient` of `self / divisor`.
  ///
  /// # Params
  ///
  /// divisor --- The right hand side of the division.
  #[inline]
  pub fn try_div(self, divisor: Self,) -> Result<Self, DivisionByZero> {
    self.try_div_rem(divisor,).map(|(quotient, _,),| quotient,)
  }
  /// Calculates the `remainder` of `self / divisor`.
  ///
  /// # Params
  ///
  /// divisor --- The right hand side of the division.
  #[inline]
  pub fn try_rem(self, divisor: Self,) -> Result<Self, DivisionByZero> {
    self.try_div_rem(divisor,).map(|(_, remainder,),| remainder,)
  }
  /// Returns the bit at `index`; `false` if `index` is out of range.
  pub fn bit(&self, index: usize,) -> bool {
    if index >= Self::BITS as usize { return false }

    self.0[index / 64] & (1 << (index % 64)) != 0
  }
  /// Sets the bit at `index`; no effect if `index` is out of range.
  pub fn set_bit(&mut self, index: usize,) {
    if index >= Self::BITS as usize { return }

    self.0[index / 64] |= 1 << (index % 64)
  }
  /// Clears the bit at `index`; no effect if `index` is out of range.
  pub fn clear_bit(&mut self, index: usize,) {
    if index >= Self::BITS as usize { return }

    self.0[index / 64] &= !(1 << (index % 64))
  }
  /// Flips the bit at `index`; no effect if `index` is out of range.
  pub fn flip_bit(&mut self, index: usize,) {
    if index >= Self::BITS as usize { return }

    self.0[index / 64] ^= 1 << (index % 64)
  }
  /// Flips every bit in place.
  pub fn invert(&mut self,) {
    for word in self.0.iter_mut() { *word = !*word }
  }
  /// The number of zero bits above the highest set bit; `BITS` for zero.
  pub fn leading_zeros(&self,) -> u32 {
    for (index, word,) in self.0.iter().rev().enumerate() {
      if *word != 0 { return index as u32 * 64 + word.leading_zeros() }
    }

    Self::BITS
  }
  /// The number of zero bits below the lowest set bit; `BITS` for zero.
  pub fn trailing_zeros(&self,) -> u32 {
    for (index, word,) in self.0.iter().enumerate() {
      if *word != 0 { return index as u32 * 64 + word.trailing_zeros() }
    }

    Self::BITS
  }
  /// The number of set bits.
  #[inline]
  pub fn count_ones(&self,) -> u32 { self.0.iter().map(|word,| word.count_ones(),).sum() }
  /// Performs addition between the words in place.
  ///
  /// Returns `true` if a carry fell out of the top word.
  fn add_words(&mut self, rhs: &[u64; N],) -> bool {
    self.0.iter_mut().zip(rhs.iter().copied(),).fold(false, |carry, (word, rhs,),| {
      let (v, check1,) = word.overflowing_add(rhs,);
      //Add the carry from the word below.
      let (v, check2,) = v.overflowing_add(carry as u64,);
      *word = v;

      check1 || check2
    },)
  }
  /// Performs subtraction between the words in place.
  ///
  /// Returns `true` if a borrow fell out of the top word.
  fn sub_words(&mut self, rhs: &[u64; N],) -> bool {
    self.0.iter_mut().zip(rhs.iter().copied(),).fold(false, |borrow, (word, rhs,),| {
      let (v, check1,) = word.overflowing_sub(rhs,);
      //Subtract the borrow from the word below.
      let (v, check2,) = v.overflowing_sub(borrow as u64,);
      *word = v;

      check1 || check2
    },)
  }
  /// Bit serial long division of `self` by a non zero `divisor`.
  ///
  /// Returns the `quotient` and `remainder`.
  fn long_division(&self, divisor: &Self,) -> (Self, Self,) {
    //Bits above the leading bit of `self` would only shift zeros into `remainder`.
    let top = Self::BITS - self.leading_zeros();
    log::trace!(
      "long division of a {} bit dividend by a {} bit divisor",
      top, Self::BITS - divisor.leading_zeros(),
    );

    let mut quotient = UInt::ZERO;
    let mut remainder = UInt::ZERO;
    for index in (0..top as usize).rev() {
      //`remainder < divisor` so at most one bit falls out of the shift, and when it
      //does `remainder` certainly exceeds `divisor`.
      let overflow = remainder.bit(Self::BITS as usize - 1,);
      remainder <<= 1usize;
      if self.bit(index,) { remainder.0[0] |= 1 }

      if overflow || remainder >= *divisor {
        remainder.sub_words(&divisor.0,);
        quotient.set_bit(index,);
      }
    }

    (quotient, remainder,)
  }
  /// Divides `self` in place by a single word divisor returning the `remainder`.
  #[inline]
  pub(crate) fn div_small(&mut self, divisor: u32,) -> u32 { div_small(self.0.iter_mut().rev(), divisor,) }
  /// Writes the non zero words of `self` most significant first.
  ///
  /// # Params
  ///
  /// fmt --- The formatter to write to.
  /// prefix --- Written first if the alternate flag is set.
  /// write_word --- Writes a single word; the flag is `true` if the word must be padded.
  fn write_words(
    &self,
    fmt: &mut fmt::Formatter,
    prefix: &str,
    write_word: fn(&mut fmt::Formatter, u64, bool,) -> fmt::Result,
  ) -> fmt::Result {
    if fmt.alternate() { fmt.write_str(prefix,)? }

    let mut words = self.0.iter().copied().rev().skip_while(|&word,| word == 0,);
    //Handle the zero case.
    let lead = match words.next() {
      Some(lead) => lead,
      None => return fmt.write_str("0",),
    };

    write_word(fmt, lead, false,)?;
    for word in words { write_word(fmt, word, true,)? }

    Ok(())
  }
}

/// Divides the words, given most significant first, in place by `divisor` and returns the
/// `remainder`.
///
/// Each word is divided as two 32 bit halves so only 64 bit division is needed.
///
/// # Params
///
/// words --- The words of the dividend, most significant first.
/// divisor --- A non zero divisor.
pub(crate) fn div_small<'a, I,>(words: I, divisor: u32,) -> u32
  where I: IntoIterator<Item = &'a mut u64>, {
  debug_assert!(divisor != 0, "`div_small` requires a non zero divisor",);

  let divisor = divisor as u64;
  let remainder = words.into_iter().fold(0, |remainder, word,| {
    //`remainder < divisor` so neither partial dividend overflows.
    let high = (remainder << 32) | (*word >> 32);
    let low = ((high % divisor) << 32) | (*word & 0xFFFF_FFFF);
    *word = ((high / divisor) << 32) | (low / divisor);

    low % divisor
  },);

  remainder as u32
}

/// Writes decimal `digits`, given least significant first, to `fmt`.
///
/// No digits is written as zero.
pub(crate) fn write_digits(fmt: &mut fmt::Formatter, digits: Vec<u8>,) -> fmt::Result {
  use core::fmt::Write;

  //Handle the zero case.
  if digits.is_empty() { return fmt.write_char('0',) }

  //Write the digits in the correct order.
  for digit in digits.into_iter().rev() { fmt.write_char((b'0' + digit) as char,)? }

  Ok(())
}

mod cmp {
  use super::*;

  impl<const N: usize,> PartialEq for UInt<N,> {
    #[inline]
    fn eq(&self, rhs: &Self,) -> bool { self.0.iter().zip(rhs.0.iter(),).all(|(a, b,),| a == b,) }
  }

  impl<const N: usize,> Eq for UInt<N,> {}

  impl<const N: usize,> PartialEq<u64> for UInt<N,> {
    #[inline]
    fn eq(&self, rhs: &u64,) -> bool { *self == UInt::<N,>::new(*rhs,) }
  }

  impl<const N: usize,> PartialOrd for UInt<N,> {
    #[inline]
    fn partial_cmp(&self, rhs: &Self,) -> Option<Ordering> { Some(self.cmp(rhs,)) }
  }

  impl<const N: usize,> Ord for UInt<N,> {
    fn cmp(&self, rhs: &Self,) -> Ordering {
      let lhs = self.0.iter().rev();
      let rhs = rhs.0.iter().rev();

      //Compare from the highest words first.
      lhs.zip(rhs,).map(|(a, b,),| a.cmp(b,),)
      //Filter out equal words.
      .find(|&c,| c != Ordering::Equal,)
      .unwrap_or(Ordering::Equal,)
    }
  }

  impl<const N: usize,> PartialOrd<u64> for UInt<N,> {
    #[inline]
    fn partial_cmp(&self, rhs: &u64,) -> Option<Ordering> { Some(self.cmp(&UInt::<N,>::new(*rhs,),)) }
  }

}

mod add {
  use super::*;

  impl<const N: usize,> AddAssign<UInt<N,>> for UInt<N,> {
    #[inline]
    fn add_assign(&mut self, rhs: UInt<N,>,) { self.add_words(&rhs.0,); }
  }

  impl<'a, const N: usize,> AddAssign<&'a UInt<N,>> for UInt<N,> {
    #[inline]
    fn add_assign(&mut self, rhs: &'a UInt<N,>,) { self.add_words(&rhs.0,); }
  }

  impl<const N: usize,> AddAssign<u64> for UInt<N,> {
    #[inline]
    fn add_assign(&mut self, rhs: u64,) { *self += UInt::new(rhs,) }
  }

  impl<Rhs, const N: usize,> Add<Rhs,> for UInt<N,>
    where UInt<N,>: AddAssign<Rhs>, {
    type Output = UInt<N,>;

    fn add(mut self, rhs: Rhs,) -> Self::Output { self += rhs; self }
  }

  impl<Rhs, const N: usize,> Add<Rhs,> for &'_ UInt<N,>
    where UInt<N,>: AddAssign<Rhs>, {
    type Output = UInt<N,>;

    #[inline]
    fn add(self, rhs: Rhs,) -> Self::Output { *self + rhs }
  }

}

mod sub {
  use super::*;

  impl<const N: usize,> SubAssign<UInt<N,>> for UInt<N,> {
    #[inline]
    fn sub_assign(&mut self, rhs: UInt<N,>,) { self.sub_words(&rhs.0,); }
  }

  impl<'a, const N: usize,> SubAssign<&'a UInt<N,>> for UInt<N,> {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a UInt<N,>,) { self.sub_words(&rhs.0,); }
  }

  impl<const N: usize,> SubAssign<u64> for UInt<N,> {
    #[inline]
    fn sub_assign(&mut self, rhs: u64,) { *self -= UInt::new(rhs,) }
  }

  impl<Rhs, const N: usize,> Sub<Rhs,> for UInt<N,>
    where UInt<N,>: SubAssign<Rhs>, {
    type Output = UInt<N,>;

    fn sub(mut self, rhs: Rhs,) -> Self::Output { self -= rhs; self }
  }

  impl<Rhs, const N: usize,> Sub<Rhs,> for &'_ UInt<N,>
    where UInt<N,>: SubAssign<Rhs>, {
    type Output = UInt<N,>;

    #[inline]
    fn sub(self, rhs: Rhs,) -> Self::Output { *self - rhs }
  }

}

mod mul {
  use super::*;

  //There is no `MulAssign`; the product does not fit back into `N` words.

  impl<const N: usize,> Mul<UInt<N,>> for UInt<N,> {
    type Output = WideUInt<N,>;

    #[inline]
    fn mul(self, rhs: UInt<N,>,) -> Self::Output { self.widening_mul(rhs,) }
  }

  impl<'a, const N: usize,> Mul<&'a UInt<N,>> for UInt<N,> {
    type Output = WideUInt<N,>;

    #[inline]
    fn mul(self, rhs: &'a UInt<N,>,) -> Self::Output { self.widening_mul(*rhs,) }
  }

  impl<const N: usize,> Mul<u64> for UInt<N,> {
    type Output = WideUInt<N,>;

    #[inline]
    fn mul(self, rhs: u64,) -> Self::Output { self.widening_mul(UInt::new(rhs,),) }
  }

  impl<Rhs, const N: usize,> Mul<Rhs,> for &'_ UInt<N,>
    where UInt<N,>: Mul<Rhs>, {
    type Output = <UInt<N,> as Mul<Rhs>>::Output;

    #[inline]
    fn mul(self, rhs: Rhs,) -> Self::Output { *self * rhs }
  }

}

mod div {
  use super::*;

  impl<const N: usize,> DivAssign<UInt<N,>> for UInt<N,> {
    fn div_assign(&mut self, rhs: UInt<N,>,) {
      match self.try_div(rhs,) {
        Ok(quotient) => *self = quotient,
        Err(DivisionByZero) => panic!("`lhs / rhs` requires `rhs` be non zero"),
      }
    }
  }

  impl<'a, const N: usize,> DivAssign<&'a UInt<N,>> for UInt<N,> {
    #[inline]
    fn div_assign(&mut self, rhs: &'a UInt<N,>,) { *self /= *rhs }
  }

  impl<const N: usize,> DivAssign<u64> for UInt<N,> {
    #[inline]
    fn div_assign(&mut self, rhs: u64,) { *self /= UInt::new(rhs,) }
  }

  impl<Rhs, const N: usize,> Div<Rhs,> for UInt<N,>
    where UInt<N,>: DivAssign<Rhs>, {
    type Output = UInt<N,>;

    fn div(mut self, rhs: Rhs,) -> Self::Output { self /= rhs; self }
  }

  impl<Rhs, const N: usize,> Div<Rhs,> for &'_ UInt<N,>
    where UInt<N,>: DivAssign<Rhs>, {
    type Output = UInt<N,>;

    #[inline]
    fn div(self, rhs: Rhs,) -> Self::Output { *self / rhs }
  }

}

mod rem {
  use super::*;

  impl<const N: usize,> RemAssign<UInt<N,>> for UInt<N,> {
    fn rem_assign(&mut self, rhs: UInt<N,>,) {
      match self.try_rem(rhs,) {
        Ok(remainder) => *self = remainder,
        Err(DivisionByZero) => panic!("`lhs % rhs` requires `rhs` be non zero"),
      }
    }
  }

  impl<'a, const N: usize,> RemAssign<&'a UInt<N,>> for UInt<N,> {
    #[inline]
    fn rem_assign(&mut self, rhs: &'a UInt<N,>,) { *self %= *rhs }
  }

  impl<const N: usize,> RemAssign<u64> for UInt<N,> {
    #[inline]
    fn rem_assign(&mut self, rhs: u64,) { *self %= UInt::new(rhs,) }
  }

  impl<Rhs, const N: usize,> Rem<Rhs,> for UInt<N,>
    where UInt<N,>: RemAssign<Rhs>, {
    type Output = UInt<N,>;

    fn rem(mut self, rhs: Rhs,) -> Self::Output { self %= rhs; self }
  }

  impl<Rhs, const N: usize,> Rem<Rhs,> for &'_ UInt<N,>
    where UInt<N,>: RemAssign<Rhs>, {
    type Output = UInt<N,>;

    #[inline]
    fn rem(self, rhs: Rhs,) -> Self::Output { *self % rhs }
  }

}

mod shl {
  use super::*;

  impl<const N: usize,> ShlAssign<usize> for UInt<N,> {
    fn shl_assign(&mut self, rhs: usize,) {
      //Shifting by zero has no effect.
      if rhs == 0 { return }
      //Every bit is shifted out.
      if rhs >= Self::BITS as usize { return *self = UInt::ZERO }

      //Calculate the number of full words which will be shifted in.
      let full_words = rhs / 64;
      //Calculate the number of bits each word is shifted by.
      let trailing_bits = (rhs % 64) as u32;

      //Move the words up and zero the vacated low words.
      if full_words > 0 {
        self.0.copy_within(..N - full_words, full_words,);
        for word in self.0[..full_words].iter_mut() { *word = 0 }
      }
      //Shift the bits, carrying the bits shifted out of each word into the word above.
      if trailing_bits > 0 {
        self.0[full_words..].iter_mut().fold(0, move |carry, word,| {
          let shifted_out = *word >> (64 - trailing_bits);
          *word = (*word << trailing_bits) | carry;

          shifted_out
        },);
      }
    }
  }

  impl<const N: usize,> ShlAssign<u32> for UInt<N,> {
    #[inline]
    fn shl_assign(&mut self, rhs: u32,) { *self <<= rhs as usize }
  }

  impl<Rhs, const N: usize,> Shl<Rhs> for UInt<N,>
    where UInt<N,>: ShlAssign<Rhs>, {
    type Output = UInt<N,>;

    fn shl(mut self, rhs: Rhs,) -> Self::Output { self <<= rhs; self }
  }

  impl<Rhs, const N: usize,> Shl<Rhs> for &'_ UInt<N,>
    where UInt<N,>: ShlAssign<Rhs>, {
    type Output = UInt<N,>;

    #[inline]
    fn shl(self, rhs: Rhs,) -> Self::Output { *self << rhs }
  }

}

mod shr {
  use super::*;

  impl<const N: usize,> ShrAssign<usize> for UInt<N,> {
    fn shr_assign(&mut self, rhs: usize,) {
      //Shifting by zero has no effect.
      if rhs == 0 { return }
      //If all of the bits will be shifted out simply clear the words.
      if rhs >= Self::BITS as usize { return *self = UInt::ZERO }

      //Calculate the number of full words which will be shifted out.
      let full_words = rhs / 64;
      //Calculate the number of bits each word is shifted by.
      let trailing_bits = (rhs % 64) as u32;

      //Move the words down and zero the vacated high words.
      if full_words > 0 {
        self.0.copy_within(full_words.., 0,);
        for word in self.0[N - full_words..].iter_mut() { *word = 0 }
      }
      //Shift the bits, carrying the bits shifted out of each word into the word below.
      if trailing_bits > 0 {
        self.0[..N - full_words].iter_mut().rev().fold(0, move |carry, word,| {
          let shifted_out = *word << (64 - trailing_bits);
          *word = (*word >> trailing_bits) | carry;

          shifted_out
        },);
      }
    }
  }

  impl<const N: usize,> ShrAssign<u32> for UInt<N,> {
    #[inline]
    fn shr_assign(&mut self, rhs: u32,) { *self >>= rhs as usize }
  }

  impl<Rhs, const N: usize,> Shr<Rhs> for UInt<N,>
    where UInt<N,>: ShrAssign<Rhs>, {
    type Output = UInt<N,>;

    fn shr(mut self, rhs: Rhs,) -> Self::Output { self >>= rhs; self }
  }

  impl<Rhs, const N: usize,> Shr<Rhs> for &'_ UInt<N,>
    where UInt<N,>: ShrAssign<Rhs>, {
    type Output = UInt<N,>;

    #[inline]
    fn shr(self, rhs: Rhs,) -> Self::Output { *self >> rhs }
  }

}

mod and {
  use super::*;

  impl<'a, const N: usize,> BitAndAssign<&'a UInt<N,>> for UInt<N,> {
    fn bitand_assign(&mut self, rhs: &'a UInt<N,>,) {
      for (a, &b,) in self.0.iter_mut().zip(rhs.0.iter(),) { *a &= b }
    }
  }

  impl<const N: usize,> BitAndAssign<UInt<N,>> for UInt<N,> {
    #[inline]
    fn bitand_assign(&mut self, rhs: UInt<N,>,) { *self &= &rhs }
  }

  impl<const N: usize,> BitAndAssign<u64> for UInt<N,> {
    #[inline]
    fn bitand_assign(&mut self, rhs: u64,) { *self &= UInt::new(rhs,) }
  }

  impl<Rhs, const N: usize,> BitAnd<Rhs> for UInt<N,>
    where UInt<N,>: BitAndAssign<Rhs>, {
    type Output = UInt<N,>;

    fn bitand(mut self, rhs: Rhs,) -> Self::Output { self &= rhs; self }
  }

  impl<Rhs, const N: usize,> BitAnd<Rhs> for &'_ UInt<N,>
    where UInt<N,>: BitAndAssign<Rhs>, {
    type Output = UInt<N,>;

    #[inline]
    fn bitand(self, rhs: Rhs,) -> Self::Output { *self & rhs }
  }

}

mod or {
  use super::*;

  impl<'a, const N: usize,> BitOrAssign<&'a UInt<N,>> for UInt<N,> {
    fn bitor_assign(&mut self, rhs: &'a UInt<N,>,) {
      for (a, &b,) in self.0.iter_mut().zip(rhs.0.iter(),) { *a |= b }
    }
  }

  impl<const N: usize,> BitOrAssign<UInt<N,>> for UInt<N,> {
    #[inline]
    fn bitor_assign(&mut self, rhs: UInt<N,>,) { *self |= &rhs }
  }

  impl<const N: usize,> BitOrAssign<u64> for UInt<N,> {
    #[inline]
    fn bitor_assign(&mut self, rhs: u64,) { *self |= UInt::new(rhs,) }
  }

  impl<Rhs, const N: usize,> BitOr<Rhs> for UInt<N,>
    where UInt<N,>: BitOrAssign<Rhs>, {
    type Output = UInt<N,>;

    fn bitor(mut self, rhs: Rhs,) -> Self::Output { self |= rhs; self }
  }

  impl<Rhs, const N: usize,> BitOr<Rhs> for &'_ UInt<N,>
    where UInt<N,>: BitOrAssign<Rhs>, {
    type Output = UInt<N,>;

    #[inline]
    fn bitor(self, rhs: Rhs,) -> Self::Output { *self | rhs }
  }

}

mod xor {
  use super::*;

  impl<'a, const N: usize,> BitXorAssign<&'a UInt<N,>> for UInt<N,> {
    fn bitxor_assign(&mut self, rhs: &'a UInt<N,>,) {
      for (a, &b,) in self.0.iter_mut().zip(rhs.0.iter(),) { *a ^= b }
    }
  }

  impl<const N: usize,> BitXorAssign<UInt<N,>> for UInt<N,> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: UInt<N,>,) { *self ^= &rhs }
  }

  impl<const N: usize,> BitXorAssign<u64> for UInt<N,> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: u64,) { *self ^= UInt::new(rhs,) }
  }

  impl<Rhs, const N: usize,> BitXor<Rhs> for UInt<N,>
    where UInt<N,>: BitXorAssign<Rhs>, {
    type Output = UInt<N,>;

    fn bitxor(mut self, rhs: Rhs,) -> Self::Output { self ^= rhs; self }
  }

  impl<Rhs, const N: usize,> BitXor<Rhs> for &'_ UInt<N,>
    where UInt<N,>: BitXorAssign<Rhs>, {
    type Output = UInt<N,>;

    #[inline]
    fn bitxor(self, rhs: Rhs,) -> Self::Output { *self ^ rhs }
  }

}

mod not {
  use super::*;

  impl<const N: usize,> Not for UInt<N,> {
    type Output = UInt<N,>;

    #[inline]
    fn not(mut self,) -> Self::Output { self.invert(); self }
  }

  impl<const N: usize,> Not for &'_ UInt<N,> {
    type Output = UInt<N,>;

    #[inline]
    fn not(self,) -> Self::Output { !*self }
  }

}

impl<const N: usize,> Default for UInt<N,> {
  #[inline]
  fn default() -> Self { UInt::ZERO }
}

impl<const N: usize,> From<u8> for UInt<N,> {
  #[inline]
  fn from(from: u8,) -> Self { UInt::new(from as u64,) }
}

impl<const N: usize,> From<u16> for UInt<N,> {
  #[inline]
  fn from(from: u16,) -> Self { UInt::new(from as u64,) }
}

impl<const N: usize,> From<u32> for UInt<N,> {
  #[inline]
  fn from(from: u32,) -> Self { UInt::new(from as u64,) }
}

impl<const N: usize,> From<u64> for UInt<N,> {
  #[inline]
  fn from(from: u64,) -> Self { UInt::new(from,) }
}

impl<const N: usize,> From<u128> for UInt<N,> {
  fn from(from: u128,) -> Self { UInt::from_words(&[from as u64, (from >> 64) as u64,],) }
}

impl<const N: usize,> From<[u64; N]> for UInt<N,> {
  #[inline]
  fn from(from: [u64; N],) -> Self { UInt(from,) }
}

impl<const N: usize,> From<UInt<N,>> for [u64; N] {
  #[inline]
  fn from(from: UInt<N,>,) -> Self { from.0 }
}

impl<const N: usize,> FromIterator<u64> for UInt<N,> {
  fn from_iter<I,>(iter: I,) -> Self
    where I: IntoIterator<Item = u64>, {
    let mut words = [0; N];
    //Extra words are never pulled from `iter`.
    for (word, value,) in words.iter_mut().zip(iter,) { *word = value }

    UInt(words,)
  }
}

impl<const N: usize,> FromStr for UInt<N,> {
  type Err = ParseIntError;

  fn from_str(s: &str,) -> Result<Self, Self::Err> {
    let s = s.strip_prefix('+',).unwrap_or(s,);
    let (digits, radix,) = match s.strip_prefix("0x",).or_else(|| s.strip_prefix("0X",),) {
      Some(digits) => (digits, 16,),
      None => (s, 10,),
    };

    if digits.is_empty() { return Err(ParseIntError(IntErrorKind::Empty,)) }

    //Accumulate all of the digits into a value.
    digits.chars().try_fold(UInt::ZERO, |acc: Self, c,| {
      //Convert the char to a digit.
      let digit = c.to_digit(radix,).ok_or(ParseIntError(IntErrorKind::InvalidDigit,),)?;

      //Shift all of the previous digits by one digit for the next digit to come in.
      let shifted = acc.widening_mul(UInt::new(radix as u64,),);
      let (value, carry,) = shifted.low().overflowing_add(UInt::new(digit as u64,),);
      if carry || !shifted.high().is_zero() { return Err(ParseIntError(IntErrorKind::PosOverflow,)) }

      Ok(value)
    },)
  }
}

impl<const N: usize,> fmt::Display for UInt<N,> {
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
    let mut num = *self;
    //Get the digits in reverse order.
    let digits = iter::from_fn(move || {
      if num.is_zero() { return None }

      Some(num.div_small(10,) as u8)
    },).collect::<Vec<_>>();

    write_digits(fmt, digits,)
  }
}

impl<const N: usize,> fmt::Debug for UInt<N,> {
  #[inline]
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { write!(fmt, "{}", *self,) }
}

impl<const N: usize,> fmt::LowerHex for UInt<N,> {
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
    self.write_words(fmt, "0x", |fmt, word, padded,| {
      if padded { write!(fmt, "{:016x}", word,) }
      else { write!(fmt, "{:x}", word,) }
    },)
  }
}

impl<const N: usize,> fmt::UpperHex for UInt<N,> {
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
    self.write_words(fmt, "0x", |fmt, word, padded,| {
      if padded { write!(fmt, "{:016X}", word,) }
      else { write!(fmt, "{:X}", word,) }
    },)
  }
}

impl<const N: usize,> fmt::Binary for UInt<N,> {
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
    self.write_words(fmt, "0b", |fmt, word, padded,| {
      if padded { write!(fmt, "{:064b}", word,) }
      else { write!(fmt, "{:b}", word,) }
    },)
  }
}

impl<const N: usize,> UInt<N,> {
  /// Returns `true` if no word at or above `len` is set.
  fn fits_in(&self, len: usize,) -> bool { self.0.iter().skip(len,).all(|&word,| word == 0,) }
  /// The value of word `index`, zero past the top word.
  fn word_or_zero(&self, index: usize,) -> u64 { self.0.get(index,).copied().unwrap_or(0,) }
}

impl<const N: usize,> TryFrom<UInt<N,>> for u64 {
  type Error = FromIntError<UInt<N,>,>;

  fn try_from(from: UInt<N,>,) -> Result<Self, Self::Error> {
    if from.fits_in(1,) { Ok(from.word_or_zero(0,)) }
    else { Err(FromIntError(from,)) }
  }
}

impl<const N: usize,> TryFrom<UInt<N,>> for u128 {
  type Error = FromIntError<UInt<N,>,>;

  fn try_from(from: UInt<N,>,) -> Result<Self, Self::Error> {
    if from.fits_in(2,) { Ok(from.word_or_zero(0,) as u128 | (from.word_or_zero(1,) as u128) << 64) }
    else { Err(FromIntError(from,)) }
  }
}

impl<const N: usize,> TryFrom<UInt<N,>> for usize {
  type Error = FromIntError<UInt<N,>,>;

  fn try_from(from: UInt<N,>,) -> Result<Self, Self::Error> {
    u64::try_from(from,).ok()
    .and_then(|word,| usize::try_from(word,).ok(),)
    .ok_or(FromIntError(from,),)
  }
}
