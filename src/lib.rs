//! Defines fixed width unsigned integers built from 64 bit words.
//!
//! A [`UInt<N>`](UInt) holds exactly `N` little endian words; every operation keeps that
//! width, wrapping on overflow and truncating oversized inputs. Multiplication widens into a
//! [`WideUInt<N>`](WideUInt) so no product bits are lost.
//!
//! The [`u512`] and [`u1024`] modules name the two common widths.
//!
//! Author --- DMorgan
//! Last Moddified --- 2026-10-17

#![no_std]
#![deny(missing_docs,)]

#[macro_use]
extern crate alloc;
#[cfg(feature = "std",)]
extern crate std;

use core::{fmt, num::IntErrorKind,};

pub mod uint;
pub mod wide;
pub mod u512;
pub mod u1024;

pub use self::{uint::UInt, wide::WideUInt, u512::U512, u1024::U1024,};

/// The error returned when dividing by a zero divisor.
#[derive(PartialEq, Eq, Clone, Copy, Hash,)]
pub struct DivisionByZero;

impl fmt::Debug for DivisionByZero {
  #[inline]
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { fmt.write_str("DivisionByZero",) }
}

impl fmt::Display for DivisionByZero {
  #[inline]
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { fmt.write_str("division by zero",) }
}

#[cfg(feature = "std",)]
impl std::error::Error for DivisionByZero {}

/// The error returned when trying to convert a big int into another type.
#[derive(Clone, Copy,)]
pub struct FromIntError<N,>(pub(crate) N,);

impl<N,> FromIntError<N,> {
  /// Unwraps the number inside the error.
  #[inline]
  pub fn into_inner(self,) -> N { self.0 }
}

impl<N,> fmt::Debug for FromIntError<N,>
  where N: fmt::Debug, {
  #[inline]
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { write!(fmt, "FromIntError({:?})", self.0,) }
}

impl<N,> fmt::Display for FromIntError<N,>
  where N: fmt::Display, {
  #[inline]
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
    write!(fmt, "`{}` does not fit in the target type", self.0,)
  }
}

#[cfg(feature = "std",)]
impl<N,> std::error::Error for FromIntError<N,>
  where N: fmt::Debug + fmt::Display, {}

/// An error encountered while parsing a string.
#[derive(PartialEq, Eq, Clone, Debug,)]
pub struct ParseIntError(pub(crate) IntErrorKind,);

impl ParseIntError {
  /// The detailed cause for this error.
  #[inline]
  pub const fn kind(&self,) -> &IntErrorKind { &self.0 }
}

impl fmt::Display for ParseIntError {
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
    let description = match self.0 {
      IntErrorKind::Empty => "cannot parse integer from empty string",
      IntErrorKind::InvalidDigit => "invalid digit found in string",
      IntErrorKind::PosOverflow => "number too large to fit in target type",
      _ => "cannot parse integer",
    };

    fmt.write_str(description,)
  }
}

#[cfg(feature = "std",)]
impl std::error::Error for ParseIntError {}
