//! Author --- DMorgan
//! Last Moddified --- 2026-10-17

#![cfg(test,)]

use super::*;
use crate::{U512, U1024,};
use alloc::string::ToString;

/// A 128 bit `UInt` checked against `u128`.
type U128 = UInt<2,>;

/// Sample `u128` values spread across both words, including the carry edges.
fn samples() -> Vec<u128> {
  let mut samples = vec![0, 1, 2, 3, 10, 255, 256, u64::MAX as u128, 1 << 64, (1 << 64) + 1, u128::MAX, u128::MAX - 1, 1 << 127, (1 << 127) + 1,];
  samples.extend((1u128..64).map(|n,| (n * n).wrapping_mul(0x9E37_79B9_7F4A_7C15_F39C_C060_5CED_C835,) >> (n % 61),),);

  samples
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_constants() {
  assert_eq!(U512::ZERO.0, [0; 8], "`ZERO` is not zero",);
  assert_eq!(U512::ONE.0, [1, 0, 0, 0, 0, 0, 0, 0,], "`ONE` is not one",);
  assert_eq!(U512::MAX.0, [!0; 8], "`MAX` does not have every bit set",);
  assert_eq!(U1024::MAX.count_ones(), 1024, "`MAX` does not have every bit set",);
  assert_eq!(U512::BITS, 512,);
  assert_eq!(U1024::BYTES, 128,);
  assert_eq!(U1024::WORDS, 16,);
  assert_eq!(U512::default(), U512::ZERO, "`default` is not zero",);

  //Constants are copied on use so mutating one never touches the constant.
  let mut one = U512::ONE;
  one += 1;
  assert_eq!(one, 2, "`1 + 1` failed",);
  assert_eq!(U512::ONE, 1, "`ONE` was corrupted",);
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_convert() {
  assert_eq!(U512::new(42,).0, [42, 0, 0, 0, 0, 0, 0, 0,], "`new 42` failed",);

  assert_eq!(U512::from_words(&[],), U512::ZERO, "`from_words []` failed",);
  assert_eq!(U512::from_words(&[100, 200, 300,],).0, [100, 200, 300, 0, 0, 0, 0, 0,], "`from_words` did not zero fill",);
  assert_eq!(U512::from_words(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10,],).0, [1, 2, 3, 4, 5, 6, 7, 8,], "`from_words` did not truncate",);
  assert_eq!(U512::from_iter(1..,).0, [1, 2, 3, 4, 5, 6, 7, 8,], "`from_iter` did not truncate",);
  assert_eq!(vec![7, 9,].into_iter().collect::<U512>().0, [7, 9, 0, 0, 0, 0, 0, 0,], "`from_iter` did not zero fill",);

  let words = [1, 2, 3, 4, 5, 6, 7, 8,];
  assert_eq!(U512::from(words,).to_words(), words, "`to_words` failed",);
  assert_eq!(<[u64; 8]>::from(U512::from(words,),), words, "`into [u64; 8]` failed",);
  assert_eq!(U512::from(words,).words(), &words, "`words` failed",);

  for num in samples() {
    let int = U128::from(num,);
    assert_eq!(u128::try_from(int,).ok(), Some(num), "`try_from {}` failed", num,);
    assert_eq!(int.to_le_bytes(), num.to_le_bytes(), "`to_le_bytes {}` failed", num,);
    assert_eq!(int.to_be_bytes(), num.to_be_bytes(), "`to_be_bytes {}` failed", num,);
    assert_eq!(U128::from_le_bytes(&num.to_le_bytes(),), int, "`from_le_bytes {}` failed", num,);
    assert_eq!(U128::from_be_bytes(&num.to_be_bytes(),), int, "`from_be_bytes {}` failed", num,);
  }

  assert_eq!(u64::try_from(U512::new(7,),).ok(), Some(7), "`try_from 7` failed",);
  assert_eq!(usize::try_from(U512::new(7,),).ok(), Some(7), "`try_from 7` failed",);
  let big = U512::ONE << 64usize;
  assert_eq!(u64::try_from(big,).map_err(FromIntError::into_inner,), Err(big), "`try_from 2^64` did not fail",);
  assert_eq!(u128::try_from(big,).ok(), Some(1 << 64), "`try_from 2^64` failed",);
  assert!(u128::try_from(U512::ONE << 128usize,).is_err(), "`try_from 2^128` did not fail",);
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_bytes() {
  assert_eq!(U1024::from_le_bytes(&[],), U1024::ZERO, "`from_le_bytes []` failed",);
  assert_eq!(U1024::from_le_bytes(&[42,],), 42, "`from_le_bytes [42]` failed",);
  assert_eq!(
    U1024::from_le_bytes(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,],),
    U1024::from_words(&[0x0807060504030201, 0x100f0e0d0c0b0a09,],),
    "`from_le_bytes` two words failed",
  );
  //A partial word fills the low bytes of that word.
  assert_eq!(U1024::from_le_bytes(&[0, 0, 0, 0, 0, 0, 0, 0, 1, 2,],), U1024::from_words(&[0, 0x0201,],),);

  assert_eq!(U1024::from_be_bytes(&[],), U1024::ZERO, "`from_be_bytes []` failed",);
  assert_eq!(U1024::from_be_bytes(&[42,],), 42, "`from_be_bytes [42]` failed",);
  assert_eq!(U1024::from_be_bytes(&[1, 2, 3, 4, 5, 6, 7, 8,],), 0x0102030405060708, "`from_be_bytes` one word failed",);
  //Big endian input is right aligned.
  assert_eq!(U1024::from_be_bytes(&[1, 0, 0, 0, 0, 0, 0, 0, 0,],), U1024::from_words(&[0, 1,],),);

  let mut le = vec![0; 128];
  le[0] = 42;
  assert_eq!(U1024::new(42,).to_le_bytes(), le, "`to_le_bytes 42` failed",);
  let mut be = vec![0; 128];
  be[127] = 42;
  assert_eq!(U1024::new(42,).to_be_bytes(), be, "`to_be_bytes 42` failed",);
  assert_eq!(U1024::ZERO.to_be_bytes(), vec![0; 128], "`to_be_bytes 0` failed",);

  //Oversized little endian input keeps the first bytes.
  let mut long = vec![0xAB; 64];
  long.extend_from_slice(&[1; 8],);
  assert_eq!(U512::from_le_bytes(&long,), U512::from_words(&[0xABAB_ABAB_ABAB_ABAB; 8],), "`from_le_bytes` did not truncate",);
  //Oversized big endian input also keeps the first bytes, which become the whole value.
  let mut long = vec![0; 63];
  long.extend_from_slice(&[1, 2,],);
  assert_eq!(U512::from_be_bytes(&long,), 1, "`from_be_bytes` did not truncate",);

  let num = U1024::from_iter(1..=16,);
  assert_eq!(U1024::from_le_bytes(&num.to_le_bytes(),), num, "Little endian round trip failed",);
  assert_eq!(U1024::from_be_bytes(&num.to_be_bytes(),), num, "Big endian round trip failed",);
  assert_eq!(num.to_be_bytes()[..8], 16u64.to_be_bytes(), "Big endian did not lead with the top word",);
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_add_sub() {
  let hundred = U512::new(100,);
  let two_hundred = U512::new(200,);

  assert_eq!(hundred + two_hundred, 300, "`100 + 200` failed",);
  assert_eq!(two_hundred - hundred, 100, "`200 - 100` failed",);
  assert_eq!(&hundred + &two_hundred, 300, "`&100 + &200` failed",);
  assert_eq!(hundred + 5, 105, "`100 + 5` failed",);

  //Carries cross word boundaries.
  assert_eq!(U512::new(!0,) + 1, U512::from_words(&[0, 1,],), "`2^64 - 1 + 1` failed",);
  assert_eq!(U512::from_words(&[0, 1,],) - 1, !0, "`2^64 - 1` failed",);

  //Overflow and underflow wrap.
  assert_eq!(U512::MAX + 1, U512::ZERO, "`MAX + 1` did not wrap",);
  assert_eq!(U512::ZERO - 1, U512::MAX, "`0 - 1` did not wrap",);
  assert_eq!(U512::MAX.overflowing_add(U512::ONE,), (U512::ZERO, true,), "`MAX + 1` did not carry",);
  assert_eq!(U512::ONE.overflowing_add(U512::ONE,), (U512::new(2,), false,), "`1 + 1` carried",);
  assert_eq!(U512::ZERO.overflowing_sub(U512::ONE,), (U512::MAX, true,), "`0 - 1` did not borrow",);
  assert_eq!(hundred.overflowing_sub(hundred,), (U512::ZERO, false,), "`100 - 100` borrowed",);

  let mut num = hundred;
  num += two_hundred;
  num -= &hundred;
  assert_eq!(num, two_hundred, "`100 += 200 -= 100` failed",);
  assert_eq!(hundred, 100, "Operands were mutated",);

  let samples = samples();
  for &a in samples.iter() {
    for &b in samples.iter() {
      let (num_a, num_b,) = (U128::from(a,), U128::from(b,),);

      assert_eq!(num_a + num_b, U128::from(a.wrapping_add(b,),), "`{} + {}` failed", a, b,);
      assert_eq!(num_a - num_b, U128::from(a.wrapping_sub(b,),), "`{} - {}` failed", a, b,);
      assert_eq!(num_a.overflowing_add(num_b,).1, a.overflowing_add(b,).1, "`{} + {}` carry failed", a, b,);
      assert_eq!(num_a.overflowing_sub(num_b,).1, a.overflowing_sub(b,).1, "`{} - {}` borrow failed", a, b,);
    }
  }
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_mul() {
  let product = U512::new(100,) * U512::new(200,);
  assert_eq!(format!("{}", product,), "20000", "`100 * 200` failed",);
  assert_eq!(product.low(), 20000, "`100 * 200` failed",);
  assert!(product.high().is_zero(), "`100 * 200` overflowed",);

  assert!((U512::MAX * U512::ZERO).is_zero(), "`MAX * 0` failed",);
  assert_eq!((U512::MAX * U512::ONE).low(), U512::MAX, "`MAX * 1` failed",);

  //`(2^512 - 1)^2 == 2^1024 - 2^513 + 1`
  let (low, high,) = (U512::MAX * U512::MAX).into_halves();
  assert_eq!(low, U512::ONE, "`MAX * MAX` low half failed",);
  assert_eq!(high, U512::MAX - 1, "`MAX * MAX` high half failed",);
  assert_eq!(U512::MAX.wrapping_mul(U512::MAX,), U512::ONE, "`MAX * MAX` did not truncate",);

  //Single word products check the word splitting against `u128`.
  let words = [0, 1, 2, 10, 0xFFFF, u32::MAX as u64, 1 << 63, u64::MAX - 1, u64::MAX,];
  for &a in words.iter() {
    for &b in words.iter() {
      let target = a as u128 * b as u128;
      let product = UInt::<1,>::new(a,) * UInt::<1,>::new(b,);
      assert_eq!(product.to_words(), vec![target as u64, (target >> 64) as u64,], "`{} * {}` failed", a, b,);
    }
  }

  let samples = samples();
  for &a in samples.iter() {
    for &b in samples.iter() {
      let (num_a, num_b,) = (U128::from(a,), U128::from(b,),);

      assert_eq!(num_a.wrapping_mul(num_b,), U128::from(a.wrapping_mul(b,),), "`{} * {}` failed", a, b,);
      assert_eq!(num_a * num_b, num_b * num_a, "`{} * {}` did not commute", a, b,);
    }
  }
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_div_rem() {
  let ten = U512::new(10,);

  assert_eq!(ten.try_div(U512::ZERO,), Err(DivisionByZero), "`10 / 0` did not fail",);
  assert_eq!(ten.try_rem(U512::ZERO,), Err(DivisionByZero), "`10 % 0` did not fail",);
  assert_eq!(U512::ZERO.try_div_rem(U512::ZERO,), Err(DivisionByZero), "`0 / 0` did not fail",);

  //The shortcuts.
  assert_eq!(ten.try_div_rem(U512::new(20,),), Ok((U512::ZERO, ten,)), "`10 / 20` failed",);
  assert_eq!(ten.try_div_rem(ten,), Ok((U512::ONE, U512::ZERO,)), "`10 / 10` failed",);

  assert_eq!(ten / 3, 3, "`10 / 3` failed",);
  assert_eq!(ten % 3, 1, "`10 % 3` failed",);
  assert_eq!(U512::new(20,) / U512::new(5,), 4, "`20 / 5` failed",);
  assert_eq!(U512::MAX / U512::MAX, 1, "`MAX / MAX` failed",);
  assert_eq!(U512::MAX % 2, 1, "`MAX % 2` failed",);
  assert_eq!(U512::MAX / (U512::ONE << 511usize), 1, "`MAX / 2^511` failed",);
  assert_eq!(U512::MAX % (U512::ONE << 511usize), U512::MAX >> 1usize, "`MAX % 2^511` failed",);

  let mut num = U512::new(1000,);
  num /= &ten;
  num %= 7;
  assert_eq!(num, 2, "`1000 / 10 % 7` failed",);

  let samples = samples();
  for &a in samples.iter() {
    for &b in samples.iter().filter(|&&b,| b != 0,) {
      let (num_a, num_b,) = (U128::from(a,), U128::from(b,),);

      assert_eq!(num_a.try_div_rem(num_b,), Ok((U128::from(a / b,), U128::from(a % b,),)), "`{} / {}` failed", a, b,);
    }
  }
}

#[allow(non_snake_case,)]
#[test]
#[should_panic(expected = "`lhs / rhs` requires `rhs` be non zero",)]
fn test_UInt_div_zero() { let _ = U512::ONE / U512::ZERO; }

#[allow(non_snake_case,)]
#[test]
#[should_panic(expected = "`lhs % rhs` requires `rhs` be non zero",)]
fn test_UInt_rem_zero() { let _ = U512::ONE % 0; }

#[allow(non_snake_case,)]
#[test]
fn test_UInt_shift() {
  assert_eq!(U512::ONE << 4usize, 16, "`1 << 4` failed",);
  assert_eq!(U512::new(16,) >> 4usize, 1, "`16 >> 4` failed",);
  assert_eq!(U512::new(10,) << 1u32, 20, "`10 << 1` failed",);
  assert_eq!(U512::new(10,) >> 1u32, 5, "`10 >> 1` failed",);

  assert_eq!(U512::ONE << 64usize, U512::from_words(&[0, 1,],), "`1 << 64` failed",);
  assert_eq!(U512::ONE << 65usize, U512::from_words(&[0, 2,],), "`1 << 65` failed",);
  assert_eq!(U512::ONE << 511usize, U512::from_words(&[0, 0, 0, 0, 0, 0, 0, 1 << 63,],), "`1 << 511` failed",);
  assert_eq!((U512::ONE << 511usize) >> 511usize, 1, "`2^511 >> 511` failed",);

  assert_eq!(U512::MAX << 0usize, U512::MAX, "`MAX << 0` failed",);
  assert_eq!(U512::MAX << 512usize, U512::ZERO, "`MAX << 512` failed",);
  assert_eq!(U512::MAX >> 512usize, U512::ZERO, "`MAX >> 512` failed",);
  assert_eq!(U512::MAX >> 10_000usize, U512::ZERO, "`MAX >> 10000` failed",);
  assert_eq!(U512::MAX >> 448usize, !0, "`MAX >> 448` failed",);

  let mut num = U512::new(3,);
  num <<= 200usize;
  num >>= 199u32;
  assert_eq!(num, 6, "`3 << 200 >> 199` failed",);

  for num in samples() {
    let int = U128::from(num,);
    for shift in 0..128usize {
      assert_eq!(int << shift, U128::from(num << shift,), "`{} << {}` failed", num, shift,);
      assert_eq!(int >> shift, U128::from(num >> shift,), "`{} >> {}` failed", num, shift,);
    }
  }
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_bitwise() {
  let twelve = U512::new(0b1100,);
  let ten = U512::new(0b1010,);

  assert_eq!(twelve & ten, 0b1000, "`12 & 10` failed",);
  assert_eq!(twelve | ten, 0b1110, "`12 | 10` failed",);
  assert_eq!(twelve ^ ten, 0b0110, "`12 ^ 10` failed",);
  assert_eq!(&twelve & 0b100, 0b100, "`12 & 4` failed",);

  let not = !twelve;
  assert!((not & twelve).is_zero(), "`!12 & 12` failed",);
  assert_eq!(not | twelve, U512::MAX, "`!12 | 12` failed",);
  assert_eq!(!U512::ZERO, U512::MAX, "`!0` failed",);

  let mut num = twelve;
  num.invert();
  assert_eq!(num, not, "`invert` failed",);
  num ^= U512::MAX;
  num |= 1;
  num &= &ten;
  assert_eq!(num, 0b1000, "In place operators failed",);
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_bits() {
  let mut num = U512::ZERO;

  num.set_bit(5,);
  assert!(num.bit(5,), "`set_bit 5` failed",);
  assert!((0..512).filter(|&i,| i != 5,).all(|i,| !num.bit(i,),), "`set_bit 5` touched other bits",);
  num.clear_bit(5,);
  assert!(!num.bit(5,), "`clear_bit 5` failed",);

  num.flip_bit(300,);
  assert!(num.bit(300,), "`flip_bit 300` failed",);
  num.flip_bit(300,);
  assert_eq!(num, U512::ZERO, "Double `flip_bit` failed",);

  //Out of range indices are ignored.
  let mut num = U512::MAX;
  num.clear_bit(512,);
  num.flip_bit(usize::MAX,);
  assert_eq!(num, U512::MAX, "Out of range index changed the value",);
  num = U512::ZERO;
  num.set_bit(512,);
  assert_eq!(num, U512::ZERO, "Out of range index changed the value",);
  assert!(!U512::MAX.bit(512,), "Out of range bit was set",);

  assert_eq!(U512::ZERO.leading_zeros(), 512, "`leading_zeros 0` failed",);
  assert_eq!(U512::ZERO.trailing_zeros(), 512, "`trailing_zeros 0` failed",);
  assert_eq!(U512::ZERO.count_ones(), 0, "`count_ones 0` failed",);
  assert_eq!(U512::ONE.leading_zeros(), 511, "`leading_zeros 1` failed",);
  assert_eq!((U512::ONE << 100usize).trailing_zeros(), 100, "`trailing_zeros 2^100` failed",);
  assert_eq!((U512::ONE << 100usize).leading_zeros(), 411, "`leading_zeros 2^100` failed",);
  assert_eq!(U512::new(0b1011,).count_ones(), 3, "`count_ones 11` failed",);

  assert!(U512::new(7,).is_odd() && !U512::new(7,).is_even(), "`7` is not odd",);
  assert!(U512::ZERO.is_even() && !U512::ZERO.is_odd(), "`0` is not even",);
  assert!((U512::ONE << 64usize).is_even(), "`2^64` is not even",);
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_cmp() {
  let a = U512::new(100,);
  let b = U512::new(200,);
  let high = U512::ONE << 448usize;

  assert!(a == U512::new(100,) && a != b, "`eq` failed",);
  assert!(a < b && b > a && a <= a && a >= a, "`cmp` failed",);
  assert!(!(a < a) && !(a > a), "`cmp` of equal values failed",);
  assert_eq!(a.cmp(&b,), Ordering::Less, "`100 cmp 200` failed",);
  assert_eq!(a.cmp(&a,), Ordering::Equal, "`100 cmp 100` failed",);
  assert_eq!(b.cmp(&a,), Ordering::Greater, "`200 cmp 100` failed",);
  //The high words decide.
  assert!(high > U512::from_words(&[!0; 7],), "High word did not decide",);
  assert!(a < 101 && a > 99 && a == 100, "`cmp u64` failed",);
  assert!(high > u64::MAX, "`cmp u64` failed",);

  assert_eq!(a.min(b,), a, "`min` failed",);
  assert_eq!(a.max(b,), b, "`max` failed",);
  assert_eq!(high.max(a,), high, "`max` failed",);
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_display() {
  assert_eq!(format!("{}", U512::ZERO,), "0",);
  assert_eq!(format!("{}", U512::ONE,), "1",);
  assert_eq!(format!("{}", U512::new(123,),), "123",);
  assert_eq!(format!("{}", U512::new(u64::MAX,),), "18446744073709551615",);
  assert_eq!(format!("{:?}", U512::new(300,),), "300",);
  assert_eq!(
    U512::MAX.to_string(),
    "13407807929942597099574024998205846127479365820592393377723561443721764030073546976801874298166903427690031858186486050853753882811946569946433649006084095",
  );

  assert_eq!(U512::ZERO.to_hex_string(), "0x0",);
  assert_eq!(U512::new(15,).to_hex_string(), "0xf",);
  assert_eq!(U512::new(255,).to_hex_string(), "0xff",);
  assert_eq!(U512::new(256,).to_hex_string(), "0x100",);
  assert_eq!(format!("{:x}", U512::ZERO,), "0",);
  //Lower words are padded, the leading word is not.
  assert_eq!(U512::from_words(&[0xab, 0x1,],).to_hex_string(), "0x100000000000000ab",);
  assert_eq!(format!("{:X}", U512::from_words(&[0xab, 0xc,],),), "C00000000000000AB",);
  assert_eq!(format!("{:#b}", U512::from_words(&[0, 1,],),), format!("0b1{:064b}", 0,),);
  assert_eq!(format!("{:x}", U1024::MAX,), "f".repeat(256,),);

  for num in samples() {
    let int = U128::from(num,);

    assert_eq!(
      format!(
        "Dsp:{}, Dbg:{:?}, Bin:{:b}, hex:{:x}, Hex:{:X}, Bin:{:#b}, hex:{:#x}, Hex:{:#X},",
        int, int, int, int, int, int, int, int,
      ),
      format!(
        "Dsp:{}, Dbg:{:?}, Bin:{:b}, hex:{:x}, Hex:{:X}, Bin:{:#b}, hex:{:#x}, Hex:{:#X},",
        num, num, num, num, num, num, num, num,
      ),
    );
  }
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_parse() {
  assert_eq!("0".parse::<U512>(), Ok(U512::ZERO),);
  assert_eq!("+42".parse::<U512>(), Ok(U512::new(42,)),);
  assert_eq!("0xff".parse::<U512>(), Ok(U512::new(255,)),);
  assert_eq!("0XFF".parse::<U512>(), Ok(U512::new(255,)),);
  assert_eq!("18446744073709551616".parse::<U512>(), Ok(U512::ONE << 64usize),);

  let kind = |s: &str,| s.parse::<U512>().map_err(|e,| e.kind().clone(),);
  assert_eq!(kind("",), Err(IntErrorKind::Empty),);
  assert_eq!(kind("+",), Err(IntErrorKind::Empty),);
  assert_eq!(kind("0x",), Err(IntErrorKind::Empty),);
  assert_eq!(kind("12a",), Err(IntErrorKind::InvalidDigit),);
  assert_eq!(kind("-1",), Err(IntErrorKind::InvalidDigit),);
  assert_eq!(kind("0xfg",), Err(IntErrorKind::InvalidDigit),);

  assert_eq!("18446744073709551615".parse::<UInt<1,>>(), Ok(UInt::new(u64::MAX,)),);
  assert_eq!(
    "18446744073709551616".parse::<UInt<1,>>().map_err(|e,| e.kind().clone(),),
    Err(IntErrorKind::PosOverflow),
  );
  assert_eq!(
    format!("0x1{}", "0".repeat(128,),).parse::<U512>().map_err(|e,| e.kind().clone(),),
    Err(IntErrorKind::PosOverflow),
  );

  assert_eq!(U512::MAX.to_string().parse::<U512>(), Ok(U512::MAX),);
  assert_eq!(U1024::MAX.to_hex_string().parse::<U1024>(), Ok(U1024::MAX),);
}

mod laws {
  use super::*;
  use quickcheck::{quickcheck, Arbitrary, Gen, TestResult,};

  impl<const N: usize,> Arbitrary for UInt<N,> {
    fn arbitrary(g: &mut Gen,) -> Self {
      //Vary the length so short values and carries into empty words are common.
      let len = usize::arbitrary(g,) % (N + 1);
      let mut words = [0; N];
      for word in words[..len].iter_mut() { *word = u64::arbitrary(g,) }

      UInt(words,)
    }
  }

  quickcheck! {
    fn compare_is_antisymmetric(a: U512, b: U512) -> bool {
      a.cmp(&b,) == b.cmp(&a,).reverse() && (a == b) == (a.cmp(&b,) == Ordering::Equal)
    }

    fn identities_hold(a: U1024) -> bool {
      let product = a * U1024::ONE;

      a + U1024::ZERO == a && a - U1024::ZERO == a && product.low() == a && product.high().is_zero()
    }

    fn sub_undoes_add(a: U512, b: U512) -> bool { (a + b) - b == a }

    fn mul_commutes(a: U512, b: U512) -> bool { a * b == b * a }

    fn division_recombines(a: U512, b: U512) -> TestResult {
      if b.is_zero() { return TestResult::discard() }

      let (quotient, remainder,) = match a.try_div_rem(b,) {
        Ok(v) => v,
        Err(_) => return TestResult::failed(),
      };
      let product = quotient.widening_mul(b,);
      let (sum, carry,) = product.low().overflowing_add(remainder,);

      TestResult::from_bool(remainder < b && product.high().is_zero() && !carry && sum == a)
    }

    fn conversions_round_trip(a: U1024) -> bool {
      U1024::from_words(&a.to_words(),) == a
      && U1024::from_le_bytes(&a.to_le_bytes(),) == a
      && U1024::from_be_bytes(&a.to_be_bytes(),) == a
      && a.to_string().parse::<U1024>() == Ok(a)
      && a.to_hex_string().parse::<U1024>() == Ok(a)
    }

    fn shifts_lose_only_shifted_bits(a: U512, shift: usize) -> bool {
      let shift = shift % 512;
      let mask = (U512::ONE << (512 - shift)) - 1;

      (a << shift) >> shift == a & mask && a << 0usize == a && a << 512usize == U512::ZERO
    }

    fn flip_twice_restores(a: U512, index: usize) -> bool {
      let index = index % 600;
      let mut num = a;
      num.flip_bit(index,);
      num.flip_bit(index,);

      num == a
    }
  }
}
