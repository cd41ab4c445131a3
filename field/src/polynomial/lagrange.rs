use alloc::vec;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::array::{add_arrays, neg_array, pointwise_multiply, scalar_multiply, sub_arrays};
use crate::capacity::Capacity;
use crate::domain::Domain;
use crate::error::{PolynomialError, Result};
use crate::fft::intt;
use crate::polynomial::Polynomial;
use crate::types::Field;

/// A polynomial in point-value form.
///
/// `evals[i]` is the value at the `i`-th element of whichever (possibly strided) domain produced
/// it. The domain is not recorded; callers must pass a compatible one to [`Self::intt`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", try_from = "Vec<F>", into = "Vec<F>")]
pub struct LagrangePolynomial<F: Field> {
    capacity: Capacity,
    evals: Vec<F>,
}

impl<F: Field> LagrangePolynomial<F> {
    pub fn new(evals: Vec<F>) -> Result<Self> {
        let capacity = Capacity::from_size(evals.len())?;
        Ok(Self { capacity, evals })
    }

    pub fn zero(capacity: Capacity) -> Self {
        Self {
            capacity,
            evals: vec![F::ZERO; capacity.size()],
        }
    }

    pub fn from_slice(capacity: Capacity, values: &[F]) -> Result<Self> {
        if values.len() > capacity.size() {
            return Err(PolynomialError::CapacityOverflow {
                context: "more evaluations than capacity",
            });
        }
        let mut result = Self::zero(capacity);
        result.evals[..values.len()].copy_from_slice(values);
        Ok(result)
    }

    /// Returns the polynomial whose value is one at the given index, and zero elsewhere.
    pub fn selector(capacity: Capacity, index: usize) -> Self {
        let mut result = Self::zero(capacity);
        result.evals[index] = F::ONE;
        result
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn evals(&self) -> &[F] {
        &self.evals
    }

    fn ensure_same_capacity(&self, other: &Self) -> Result<()> {
        if self.capacity != other.capacity {
            return Err(PolynomialError::CapacityMismatch {
                lhs: self.capacity.size(),
                rhs: other.capacity.size(),
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_capacity(other)?;
        Ok(Self {
            capacity: self.capacity,
            evals: add_arrays(&self.evals, &other.evals)?,
        })
    }

    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_capacity(other)?;
        Ok(Self {
            capacity: self.capacity,
            evals: sub_arrays(&self.evals, &other.evals)?,
        })
    }

    pub fn negate(&self) -> Self {
        Self {
            capacity: self.capacity,
            evals: neg_array(&self.evals),
        }
    }

    pub fn scale(&self, scalar: F) -> Self {
        Self {
            capacity: self.capacity,
            evals: scalar_multiply(&self.evals, scalar),
        }
    }

    /// Pointwise product. This is the evaluation form of the true product only if both operands
    /// were transformed at a capacity exceeding the product's degree; nothing here checks that.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            capacity: self.capacity,
            evals: pointwise_multiply(&self.evals, &other.evals)?,
        })
    }

    /// Interpolates back to coefficient form, in the same capacity.
    pub fn intt(&self, domain: &Domain<F>) -> Result<Polynomial<F>> {
        Polynomial::new(intt(&self.evals, domain)?)
    }
}

impl<F: Field> TryFrom<Vec<F>> for LagrangePolynomial<F> {
    type Error = PolynomialError;

    fn try_from(evals: Vec<F>) -> Result<Self> {
        Self::new(evals)
    }
}

impl<F: Field> From<LagrangePolynomial<F>> for Vec<F> {
    fn from(poly: LagrangePolynomial<F>) -> Self {
        poly.evals
    }
}
