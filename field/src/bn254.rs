use alloc::vec::Vec;
use core::fmt;
use core::fmt::{Debug, Display, Formatter};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use itertools::Itertools;
use num::bigint::BigUint;
use num::Integer;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use static_assertions::assert_eq_size;

use crate::types::{Field, PrimeField, Sample};

/// The scalar field of the BN254 curve.
///
/// Its order is
/// `p = 21888242871839275222246405745257275088548364400416034343698204186575808495617`,
/// and `p - 1` is divisible by `2^28`.
///
/// Elements are four little-endian 64-bit limbs, always kept in canonical form (`< p`), so
/// equality and hashing on the limbs coincide with equality in the field.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u64; 4]", into = "[u64; 4]")]
pub struct Bn254Field(pub [u64; 4]);

assert_eq_size!(Bn254Field, [u64; 4]);

const MODULUS: [u64; 4] = [
    0x43e1f593f0000001,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

fn biguint_from_limbs(limbs: &[u64; 4]) -> BigUint {
    let digits = limbs
        .iter()
        .flat_map(|&limb| [limb as u32, (limb >> 32) as u32])
        .collect::<Vec<_>>();
    BigUint::from_slice(&digits)
}

/// `a >= b`, comparing from the most significant limb.
#[inline]
fn geq(a: &[u64; 4], b: &[u64; 4]) -> bool {
    for i in (0..4).rev() {
        if a[i] != b[i] {
            return a[i] > b[i];
        }
    }
    true
}

#[inline]
fn add_limbs(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], bool) {
    let mut out = [0u64; 4];
    let mut carry = false;
    for i in 0..4 {
        let (s, c1) = a[i].overflowing_add(b[i]);
        let (s, c2) = s.overflowing_add(carry as u64);
        out[i] = s;
        carry = c1 | c2;
    }
    (out, carry)
}

#[inline]
fn sub_limbs(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], bool) {
    let mut out = [0u64; 4];
    let mut borrow = false;
    for i in 0..4 {
        let (d, b1) = a[i].overflowing_sub(b[i]);
        let (d, b2) = d.overflowing_sub(borrow as u64);
        out[i] = d;
        borrow = b1 | b2;
    }
    (out, borrow)
}

impl Bn254Field {
    /// Parses a decimal string and reduces it modulo `p`. Returns `None` on malformed input.
    pub fn from_decimal_str(n: &str) -> Option<Self> {
        BigUint::parse_bytes(n.as_bytes(), 10).map(Self::from_noncanonical_biguint)
    }
}

impl TryFrom<[u64; 4]> for Bn254Field {
    type Error = &'static str;

    /// Accepts canonical limbs only.
    fn try_from(limbs: [u64; 4]) -> Result<Self, Self::Error> {
        if geq(&limbs, &MODULUS) {
            return Err("BN254 limbs are not below the modulus");
        }
        Ok(Self(limbs))
    }
}

impl From<Bn254Field> for [u64; 4] {
    fn from(x: Bn254Field) -> Self {
        x.0
    }
}

impl Default for Bn254Field {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Display for Bn254Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_canonical_biguint(), f)
    }
}

impl Debug for Bn254Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.to_canonical_biguint(), f)
    }
}

impl Sample for Bn254Field {
    #[inline]
    fn sample<R>(rng: &mut R) -> Self
    where
        R: RngCore + ?Sized,
    {
        // Rejection sampling on 254-bit candidates; p > 2^253, so at most two draws on average.
        loop {
            let mut limbs = [0u64; 4];
            for limb in limbs.iter_mut() {
                *limb = rng.next_u64();
            }
            limbs[3] &= (1 << 62) - 1;
            if !geq(&limbs, &MODULUS) {
                return Self(limbs);
            }
        }
    }
}

impl Field for Bn254Field {
    const ZERO: Self = Self([0; 4]);
    const ONE: Self = Self([1, 0, 0, 0]);
    const TWO: Self = Self([2, 0, 0, 0]);
    const NEG_ONE: Self = Self([
        0x43e1f593f0000000,
        0x2833e84879b97091,
        0xb85045b68181585d,
        0x30644e72e131a029,
    ]);

    const TWO_ADICITY: usize = 28;

    const MULTIPLICATIVE_GROUP_GENERATOR: Self = Self([5, 0, 0, 0]);

    // 5^((p - 1) / 2^28)
    // = 19103219067921713944291392827692070036145651957329286315305642004821462161904
    const POWER_OF_TWO_GENERATOR: Self = Self([
        0x9bd61b6e725b19f0,
        0x402d111e41112ed4,
        0x00e0a7eb8ef62abc,
        0x2a3c09f0a58a7e85,
    ]);

    const BITS: usize = 254;

    fn order() -> BigUint {
        biguint_from_limbs(&MODULUS)
    }

    fn try_inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        // Fermat's little theorem.
        let p = Self::order();
        let exponent = &p - 2u32;
        Some(Self::from_noncanonical_biguint(
            self.to_canonical_biguint().modpow(&exponent, &p),
        ))
    }

    fn from_noncanonical_biguint(n: BigUint) -> Self {
        let limbs = n
            .mod_floor(&Self::order())
            .to_u64_digits()
            .into_iter()
            .pad_using(4, |_| 0)
            .collect::<Vec<_>>();
        Self([limbs[0], limbs[1], limbs[2], limbs[3]])
    }

    #[inline]
    fn from_canonical_u64(n: u64) -> Self {
        Self([n, 0, 0, 0])
    }

    #[inline]
    fn from_noncanonical_u128(n: u128) -> Self {
        // Every u128 is below p.
        Self([n as u64, (n >> 64) as u64, 0, 0])
    }
}

impl PrimeField for Bn254Field {
    fn to_canonical_biguint(&self) -> BigUint {
        biguint_from_limbs(&self.0)
    }
}

impl Neg for Bn254Field {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.is_zero() {
            Self::ZERO
        } else {
            Self(sub_limbs(&MODULUS, &self.0).0)
        }
    }
}

impl Add for Bn254Field {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        // Both operands are below p < 2^254, so the limb sum cannot carry out.
        let (sum, _) = add_limbs(&self.0, &rhs.0);
        if geq(&sum, &MODULUS) {
            Self(sub_limbs(&sum, &MODULUS).0)
        } else {
            Self(sum)
        }
    }
}

impl AddAssign for Bn254Field {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Bn254Field {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Sub for Bn254Field {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let (diff, borrow) = sub_limbs(&self.0, &rhs.0);
        if borrow {
            Self(add_limbs(&diff, &MODULUS).0)
        } else {
            Self(diff)
        }
    }
}

impl SubAssign for Bn254Field {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Bn254Field {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_noncanonical_biguint(self.to_canonical_biguint() * rhs.to_canonical_biguint())
    }
}

impl MulAssign for Bn254Field {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Product for Bn254Field {
    #[inline]
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl Div for Bn254Field {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.inverse()
    }
}

impl DivAssign for Bn254Field {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use num::bigint::BigUint;

    use super::MODULUS;
    use crate::bn254::Bn254Field;
    use crate::polynomial::Polynomial;
    use crate::test_field_arithmetic;
    use crate::types::{Field, PrimeField, Sample};

    test_field_arithmetic!(crate::bn254::Bn254Field);

    type F = Bn254Field;

    #[test]
    fn modulus_matches_decimal() {
        let expected = BigUint::parse_bytes(
            b"21888242871839275222246405745257275088548364400416034343698204186575808495617",
            10,
        )
        .unwrap();
        assert_eq!(F::order(), expected);
        assert_eq!(F::NEG_ONE.to_canonical_biguint(), expected - 1u32);
    }

    #[test]
    fn power_of_two_generator() {
        assert_eq!(
            F::MULTIPLICATIVE_GROUP_GENERATOR.exp_biguint(&(F::order() >> F::TWO_ADICITY)),
            F::POWER_OF_TWO_GENERATOR
        );
        let half = F::POWER_OF_TWO_GENERATOR.exp_power_of_2(F::TWO_ADICITY - 1);
        assert_eq!(half, F::NEG_ONE);
        assert_eq!(half.square(), F::ONE);
    }

    #[test]
    fn wraparound() {
        assert_eq!(F::NEG_ONE + F::ONE, F::ZERO);
        assert_eq!(F::ZERO - F::ONE, F::NEG_ONE);
        assert_eq!(F::NEG_ONE * F::NEG_ONE, F::ONE);
        assert_eq!(-F::ZERO, F::ZERO);
        assert_eq!(F::from_decimal_str("21888242871839275222246405745257275088548364400416034343698204186575808495618"), Some(F::ONE));
        assert_eq!(F::from_decimal_str("12a"), None);
    }

    #[test]
    fn matches_biguint_arithmetic() {
        let p = F::order();
        for _ in 0..32 {
            let (x, y) = (F::rand(), F::rand());
            let (bx, by) = (x.to_canonical_biguint(), y.to_canonical_biguint());
            assert_eq!((x + y).to_canonical_biguint(), (&bx + &by) % &p);
            assert_eq!((x - y).to_canonical_biguint(), (&bx + &p - &by) % &p);
            assert_eq!((x * y).to_canonical_biguint(), (&bx * &by) % &p);
        }
    }

    #[test]
    fn deserialization_requires_canonical_limbs() -> anyhow::Result<()> {
        let x = F::rand();
        let json = serde_json::to_string(&x)?;
        assert_eq!(serde_json::from_str::<F>(&json)?, x);
        assert_eq!(serde_json::to_string(&F::NEG_ONE)?, serde_json::to_string(&F::NEG_ONE.0)?);

        let modulus = serde_json::to_string(&MODULUS)?;
        assert!(serde_json::from_str::<F>(&modulus).is_err());
        assert!(serde_json::from_str::<F>("[0,0,0,18446744073709551615]").is_err());

        // A non-canonical coefficient would otherwise pass for a non-zero one.
        let coefficients = format!("[[1,0,0,0],{}]", modulus);
        assert!(serde_json::from_str::<Polynomial<F>>(&coefficients).is_err());
        let coefficients = format!("[[1,0,0,0],{}]", serde_json::to_string(&F::NEG_ONE)?);
        let p: Polynomial<F> = serde_json::from_str(&coefficients)?;
        assert_eq!(p.degree(), 1);
        Ok(())
    }
}
