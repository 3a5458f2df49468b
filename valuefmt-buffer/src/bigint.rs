// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use num::{BigInt, Signed};
use std::cmp::Ordering;

/// A signed 256-bit integer, stored as two's complement in a low `u128`
/// and a high `i128` half
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct i256 {
    low: u128,
    high: i128,
}

impl std::fmt::Debug for i256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::fmt::Display for i256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_i128() {
            Some(v) => write!(f, "{v}"),
            None => write!(f, "{}", self.to_bigint()),
        }
    }
}

impl PartialOrd for i256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for i256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.high.cmp(&other.high).then(self.low.cmp(&other.low))
    }
}

impl i256 {
    /// The additive identity for this integer type, i.e. `0`.
    pub const ZERO: Self = i256 { low: 0, high: 0 };

    /// The multiplicative identity for this integer type, i.e. `1`.
    pub const ONE: Self = i256 { low: 1, high: 0 };

    /// The maximum value that can be represented by this integer type
    pub const MAX: Self = i256 {
        low: u128::MAX,
        high: i128::MAX,
    };

    /// The minimum value that can be represented by this integer type
    pub const MIN: Self = i256 {
        low: u128::MIN,
        high: i128::MIN,
    };

    /// Create an i256 from the provided low u128 and high i128
    #[inline]
    pub const fn from_parts(low: u128, high: i128) -> Self {
        Self { low, high }
    }

    /// Sign-extends an `i128`
    pub const fn from_i128(v: i128) -> Self {
        Self::from_parts(v as u128, v >> 127)
    }

    /// Converts this `i256` into an `i128` returning `None` if it does not fit
    pub fn to_i128(self) -> Option<i128> {
        let low = self.low as i128;
        // the high half must be the sign extension of the low half
        (self.high == low >> 127).then_some(low)
    }

    /// Create an integer value from its representation as a byte array in little-endian.
    pub fn from_le_bytes(b: [u8; 32]) -> Self {
        let mut low = [0_u8; 16];
        let mut high = [0_u8; 16];
        low.copy_from_slice(&b[..16]);
        high.copy_from_slice(&b[16..]);
        Self {
            low: u128::from_le_bytes(low),
            high: i128::from_le_bytes(high),
        }
    }

    /// Return the memory representation of this integer as a byte array in little-endian byte order.
    pub fn to_le_bytes(self) -> [u8; 32] {
        let mut out = [0_u8; 32];
        out[..16].copy_from_slice(&self.low.to_le_bytes());
        out[16..].copy_from_slice(&self.high.to_le_bytes());
        out
    }

    /// Create an `i256` from a [`BigInt`], returning `None` if it needs more than 256 bits
    pub fn from_bigint(v: &BigInt) -> Option<Self> {
        let bytes = v.to_signed_bytes_le();
        if bytes.len() > 32 {
            return None;
        }
        let mut out = if v.is_negative() { [255_u8; 32] } else { [0; 32] };
        out[..bytes.len()].copy_from_slice(&bytes);
        Some(Self::from_le_bytes(out))
    }

    /// Converts this `i256` into a [`BigInt`]
    pub fn to_bigint(self) -> BigInt {
        BigInt::from_signed_bytes_le(&self.to_le_bytes())
    }

    /// Returns true if this value is less than zero
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.high < 0
    }

    /// Computes `-self`, wrapping around for [`i256::MIN`]
    #[inline]
    pub fn wrapping_neg(self) -> Self {
        let low = (!self.low).wrapping_add(1);
        let high = (!self.high).wrapping_add((low == 0) as i128);
        Self { low, high }
    }

    /// Computes `-self`, returning `None` for [`i256::MIN`]
    #[inline]
    pub fn checked_neg(self) -> Option<Self> {
        (self != Self::MIN).then(|| self.wrapping_neg())
    }
}

impl From<i128> for i256 {
    fn from(v: i128) -> Self {
        Self::from_i128(v)
    }
}

impl From<i64> for i256 {
    fn from(v: i64) -> Self {
        Self::from_i128(v as i128)
    }
}

impl std::ops::Neg for i256 {
    type Output = i256;

    #[cfg(debug_assertions)]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("i256 overflow")
    }

    #[cfg(not(debug_assertions))]
    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_display() {
        assert_eq!(i256::ZERO.to_string(), "0");
        assert_eq!(i256::from_i128(-42).to_string(), "-42");
        assert_eq!(i256::from_parts(u64::MAX as u128, 0).to_string(), "18446744073709551615");
        assert_eq!(
            i256::MAX.to_string(),
            "57896044618658097711785492504343953926634992332820282019728792003956564819967"
        );
        assert_eq!(
            i256::MIN.to_string(),
            "-57896044618658097711785492504343953926634992332820282019728792003956564819968"
        );
        // one past i128::MAX needs the high half
        assert_eq!(
            i256::from_parts(1 << 127, 0).to_string(),
            "170141183460469231731687303715884105728"
        );
    }

    #[test]
    fn test_to_i128() {
        assert_eq!(i256::from_i128(i128::MAX).to_i128(), Some(i128::MAX));
        assert_eq!(i256::from_i128(i128::MIN).to_i128(), Some(i128::MIN));
        assert_eq!(i256::from_i128(-1).to_i128(), Some(-1));
        assert_eq!(i256::from_parts(1 << 127, 0).to_i128(), None);
        assert_eq!(i256::MAX.to_i128(), None);
        assert_eq!(i256::MIN.to_i128(), None);
    }

    #[test]
    fn test_signed_cmp() {
        let a = i256::from_parts(i128::MAX as u128, 12);
        let b = i256::from_parts(i128::MIN as u128, 12);
        assert!(a < b);

        let a = i256::from_parts(i128::MAX as u128, 12);
        let b = i256::from_parts(i128::MIN as u128, -12);
        assert!(a > b);
        assert!(i256::from_i128(-1) < i256::ZERO);
    }

    #[test]
    fn test_neg() {
        assert_eq!(-i256::ONE, i256::from_i128(-1));
        assert_eq!(i256::from_i128(-1).wrapping_neg(), i256::ONE);
        assert_eq!(i256::ZERO.wrapping_neg(), i256::ZERO);
        assert_eq!(i256::MIN.checked_neg(), None);
        assert_eq!(i256::MAX.checked_neg().unwrap().to_bigint(), -i256::MAX.to_bigint());
        // carry from the low half into the high half
        let v = i256::from_parts(0, 1);
        assert_eq!(v.wrapping_neg(), i256::from_parts(0, -1));
    }

    #[test]
    fn test_bigint_roundtrip() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let v = i256::from_parts(rng.random(), rng.random());
            let big = v.to_bigint();
            assert_eq!(i256::from_bigint(&big), Some(v));
            assert_eq!(v.to_string(), big.to_string());
            assert_eq!(v.is_negative(), big.is_negative());
        }

        let too_big = i256::MAX.to_bigint() + BigInt::from(1);
        assert_eq!(i256::from_bigint(&too_big), None);
        let too_small = i256::MIN.to_bigint() - BigInt::from(1);
        assert_eq!(i256::from_bigint(&too_small), None);
    }
}
