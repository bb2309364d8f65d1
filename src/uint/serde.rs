//! Serialises a `UInt` as its big endian bytes.
//!
//! Author --- DMorgan
//! Last Moddified --- 2026-10-17

#![cfg(feature = "serde",)]

use super::*;
use ::serde::{
  ser::{Serialize, Serializer,},
  de::{Deserialize, Deserializer, SeqAccess, Visitor, Error,},
};

impl<const N: usize,> Serialize for UInt<N,> {
  #[inline]
  fn serialize<S,>(&self, serializer: S,) -> Result<S::Ok, S::Error>
    where S: Serializer, {
    serializer.serialize_bytes(&self.to_be_bytes(),)
  }
}

impl<'de, const N: usize,> Deserialize<'de,> for UInt<N,> {
  fn deserialize<D,>(deserializer: D,) -> Result<Self, D::Error>
    where D: Deserializer<'de,>, {
    struct UIntVisitor<const N: usize,>;

    impl<const N: usize,> UIntVisitor<N,> {
      /// Decodes `bytes` if they fit in a `UInt<N>`.
      fn decode<E,>(self, bytes: &[u8],) -> Result<UInt<N,>, E>
        where E: Error, {
        if bytes.len() > UInt::<N,>::BYTES { return Err(E::invalid_length(bytes.len(), &self,)) }

        Ok(UInt::from_be_bytes(bytes,))
      }
    }

    impl<'de, const N: usize,> Visitor<'de,> for UIntVisitor<N,> {
      type Value = UInt<N,>;

      #[inline]
      fn expecting(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        write!(fmt, "at most {} big endian bytes", UInt::<N,>::BYTES,)
      }
      #[inline]
      fn visit_bytes<E,>(self, bytes: &[u8],) -> Result<Self::Value, E,>
        where E: Error, {
        self.decode(bytes,)
      }
      fn visit_seq<A,>(self, mut seq: A,) -> Result<Self::Value, A::Error>
        where A: SeqAccess<'de,>, {
        //Create a store for the bytes.
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0,).min(UInt::<N,>::BYTES + 1,),);
        //Read in all of the bytes, stopping as soon as there are too many.
        while let Some(v) = seq.next_element()? {
          bytes.push(v,);
          if bytes.len() > UInt::<N,>::BYTES { break }
        }

        self.decode(&bytes,)
      }
    }

    deserializer.deserialize_bytes(UIntVisitor::<N,>,)
  }
}

#[cfg(test,)]
mod tests {
  use super::*;
  use crate::{U512, U1024,};

  #[allow(non_snake_case,)]
  #[test]
  fn test_UInt_serde() {
    let data = serde_cbor::to_vec(&U512::new(100,),)
      .expect("Failed to serialise `100`",);
    let int = serde_cbor::from_slice::<U512,>(&data,)
      .expect("Failed to deserialise `U512`",);

    assert_eq!(int, 100, "Deserialised value corrupted",);

    let num = U1024::from_iter(1..=16,);
    let data = serde_cbor::to_vec(&num,)
      .expect("Failed to serialise `U1024`",);
    let int = serde_cbor::from_slice::<U1024,>(&data,)
      .expect("Failed to deserialise `U1024`",);

    assert_eq!(int, num, "Deserialised value corrupted",);
  }

  #[allow(non_snake_case,)]
  #[test]
  fn test_UInt_serde_too_long() {
    let data = serde_cbor::to_vec(&U1024::MAX,)
      .expect("Failed to serialise `U1024::MAX`",);

    assert!(serde_cbor::from_slice::<U512,>(&data,).is_err(), "Oversized value deserialised",);
    //A `U512` always fits in a `U1024`.
    let data = serde_cbor::to_vec(&U512::MAX,)
      .expect("Failed to serialise `U512::MAX`",);
    let int = serde_cbor::from_slice::<U1024,>(&data,)
      .expect("Failed to deserialise `U1024`",);

    assert_eq!(int, U1024::from_words(&U512::MAX.to_words(),), "Widened value corrupted",);
  }
}
