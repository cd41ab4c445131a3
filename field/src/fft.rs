//! Number-theoretic transforms: bit-reversal followed by iterative Cooley-Tukey butterflies.
//!
//! The transform of capacity `N` runs against any [`Domain`] of capacity at least `N`, stepping
//! through its elements with stride `domain_capacity / N`.

use alloc::vec::Vec;

use polyntt_util::reverse_index_bits;

use crate::capacity::Capacity;
use crate::domain::Domain;
use crate::error::Result;
use crate::types::Field;

/// Returns `a` with each index mapped to its reverse in binary. `a.len()` must be a power of two.
pub fn bit_reverse<F: Copy>(a: &[F]) -> Vec<F> {
    reverse_index_bits(a)
}

/// Decimation-in-time butterflies shared by both directions; `invert` selects inverse twiddles.
fn butterfly<F: Field>(values: &mut [F], domain: &Domain<F>, invert: bool) -> Result<Capacity> {
    let capacity = Capacity::from_size(values.len())?;
    let step = domain.stride(capacity)?;
    let n = capacity.size();

    for stage in 1..=capacity.log_size() {
        let block_size = 1 << stage;
        let half_block = block_size / 2;
        let num_blocks = n / block_size;
        let root = domain.root(num_blocks * step);
        let twiddle = if invert { root.inverse() } else { root };

        for block in 0..num_blocks {
            let mut wp = F::ONE;
            for k in 0..half_block {
                let idx = block * block_size + k;
                let idx2 = idx + half_block;
                let u = values[idx];
                let v = values[idx2] * wp;
                values[idx] = u + v;
                values[idx2] = u - v;
                wp *= twiddle;
            }
        }
    }
    Ok(capacity)
}

/// Forward butterflies. Takes bit-reversed coefficients and leaves the evaluations at the
/// domain's `N`-th roots in natural order.
pub fn butterfly_forward<F: Field>(values: &mut [F], domain: &Domain<F>) -> Result<()> {
    butterfly(values, domain, false).map(|_| ())
}

/// Inverse butterflies, followed by scaling by `1/N`. Undoes [`butterfly_forward`] on
/// bit-reversed evaluations.
pub fn butterfly_inverse<F: Field>(values: &mut [F], domain: &Domain<F>) -> Result<()> {
    let capacity = butterfly(values, domain, true)?;
    let n_inv = F::inverse_2exp(capacity.log_size());
    values.iter_mut().for_each(|x| *x *= n_inv);
    Ok(())
}

/// Coefficients to evaluations.
pub fn ntt<F: Field>(coefficients: &[F], domain: &Domain<F>) -> Result<Vec<F>> {
    Capacity::from_size(coefficients.len())?;
    let mut buffer = bit_reverse(coefficients);
    butterfly_forward(&mut buffer, domain)?;
    Ok(buffer)
}

/// Evaluations to coefficients.
pub fn intt<F: Field>(evals: &[F], domain: &Domain<F>) -> Result<Vec<F>> {
    Capacity::from_size(evals.len())?;
    let mut buffer = bit_reverse(evals);
    butterfly_inverse(&mut buffer, domain)?;
    Ok(buffer)
}
