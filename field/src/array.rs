//! Elementwise operations over fixed-capacity coefficient and evaluation vectors.

use alloc::vec::Vec;

use itertools::Itertools;

use crate::error::{PolynomialError, Result};
use crate::types::Field;

fn ensure_covers<F>(a: &[F], b: &[F]) -> Result<()> {
    if a.len() < b.len() {
        return Err(PolynomialError::CapacityMismatch {
            lhs: a.len(),
            rhs: b.len(),
        });
    }
    Ok(())
}

fn ensure_same_len<F>(a: &[F], b: &[F]) -> Result<()> {
    if a.len() != b.len() {
        return Err(PolynomialError::CapacityMismatch {
            lhs: a.len(),
            rhs: b.len(),
        });
    }
    Ok(())
}

/// `a + b`, where `b` may be shorter than `a` and is then treated as zero-extended.
pub fn add_arrays<F: Field>(a: &[F], b: &[F]) -> Result<Vec<F>> {
    ensure_covers(a, b)?;
    let mut out = a.to_vec();
    for (x, &y) in out.iter_mut().zip(b) {
        *x += y;
    }
    Ok(out)
}

/// `a - b`, where `b` may be shorter than `a` and is then treated as zero-extended.
pub fn sub_arrays<F: Field>(a: &[F], b: &[F]) -> Result<Vec<F>> {
    ensure_covers(a, b)?;
    let mut out = a.to_vec();
    for (x, &y) in out.iter_mut().zip(b) {
        *x -= y;
    }
    Ok(out)
}

pub fn neg_array<F: Field>(a: &[F]) -> Vec<F> {
    a.iter().map(|&x| -x).collect()
}

pub fn scalar_multiply<F: Field>(a: &[F], scalar: F) -> Vec<F> {
    a.iter().map(|&x| x * scalar).collect()
}

pub fn pointwise_multiply<F: Field>(a: &[F], b: &[F]) -> Result<Vec<F>> {
    ensure_same_len(a, b)?;
    Ok(a.iter().zip_eq(b).map(|(&x, &y)| x * y).collect())
}

/// The highest index holding a non-zero value, or 0 if every value is zero.
pub fn last_non_zero_index<F: Field>(a: &[F]) -> usize {
    a.iter().rposition(F::is_nonzero).unwrap_or(0)
}
