mod division;
mod lagrange;

use alloc::vec;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

pub use self::lagrange::LagrangePolynomial;
use crate::array::{
    add_arrays, last_non_zero_index, neg_array, scalar_multiply, sub_arrays,
};
use crate::capacity::Capacity;
use crate::domain::Domain;
use crate::error::{PolynomialError, Result};
use crate::fft::ntt;
use crate::types::Field;

/// A polynomial in coefficient form, stored in a fixed power-of-two number of slots.
///
/// Slot `i` holds the coefficient of `x^i`. Slots above the degree are zero. Two polynomials
/// compare equal when they represent the same value, whatever their capacities.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "", try_from = "Vec<F>", into = "Vec<F>")]
pub struct Polynomial<F: Field> {
    capacity: Capacity,
    coefficients: Vec<F>,
}

impl<F: Field> Polynomial<F> {
    /// Wraps `coefficients`, whose length becomes the capacity and must be a power of two.
    pub fn new(coefficients: Vec<F>) -> Result<Self> {
        let capacity = Capacity::from_size(coefficients.len())?;
        Ok(Self {
            capacity,
            coefficients,
        })
    }

    pub fn zero(capacity: Capacity) -> Self {
        Self {
            capacity,
            coefficients: vec![F::ZERO; capacity.size()],
        }
    }

    pub fn one(capacity: Capacity) -> Self {
        let mut result = Self::zero(capacity);
        result.coefficients[0] = F::ONE;
        result
    }

    /// Copies `values` into a zero-padded buffer of the given capacity.
    pub fn from_slice(capacity: Capacity, values: &[F]) -> Result<Self> {
        if values.len() > capacity.size() {
            return Err(PolynomialError::CapacityOverflow {
                context: "more coefficients than capacity",
            });
        }
        let mut result = Self::zero(capacity);
        result.coefficients[..values.len()].copy_from_slice(values);
        Ok(result)
    }

    /// Returns `x - a`.
    pub fn vanishing_polynomial(capacity: Capacity, a: F) -> Result<Self> {
        if capacity.size() < 2 {
            return Err(PolynomialError::InvalidSize {
                size: capacity.size(),
                log_size: capacity.log_size(),
            });
        }
        Self::from_slice(capacity, &[-a, F::ONE])
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    /// The highest index holding a non-zero coefficient; 0 for the zero polynomial.
    pub fn degree(&self) -> usize {
        last_non_zero_index(&self.coefficients)
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(F::is_zero)
    }

    pub fn leading_coefficient(&self) -> F {
        self.coefficients[self.degree()]
    }

    fn ensure_covers(&self, other: &Self) -> Result<()> {
        if self.capacity < other.capacity {
            return Err(PolynomialError::CapacityMismatch {
                lhs: self.capacity.size(),
                rhs: other.capacity.size(),
            });
        }
        Ok(())
    }

    /// `self + other`; `other` may have a smaller capacity than `self`, never a larger one.
    pub fn add(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            capacity: self.capacity,
            coefficients: add_arrays(&self.coefficients, &other.coefficients)?,
        })
    }

    /// `self - other`, under the same capacity rule as [`Polynomial::add`].
    pub fn sub(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            capacity: self.capacity,
            coefficients: sub_arrays(&self.coefficients, &other.coefficients)?,
        })
    }

    pub fn negate(&self) -> Self {
        Self {
            capacity: self.capacity,
            coefficients: neg_array(&self.coefficients),
        }
    }

    pub fn scale(&self, scalar: F) -> Self {
        Self {
            capacity: self.capacity,
            coefficients: scalar_multiply(&self.coefficients, scalar),
        }
    }

    /// Evaluates at `x` by accumulating a running power of `x` over the whole capacity.
    pub fn evaluate(&self, x: F) -> F {
        let mut sum = F::ZERO;
        let mut power = F::ONE;
        for &c in &self.coefficients {
            sum += c * power;
            power *= x;
        }
        sum
    }

    /// Multiplies by `x`. Fails if the top slot is occupied.
    pub fn shift_up_by_x(&self) -> Result<Self> {
        let n = self.capacity.size();
        if self.coefficients[n - 1].is_nonzero() {
            return Err(PolynomialError::CapacityOverflow {
                context: "shifting out a non-zero top coefficient",
            });
        }
        let mut coefficients = Vec::with_capacity(n);
        coefficients.push(F::ZERO);
        coefficients.extend_from_slice(&self.coefficients[..n - 1]);
        Ok(Self {
            capacity: self.capacity,
            coefficients,
        })
    }

    /// Zero-extends to a capacity at least as large as the current one.
    pub fn expand(&self, capacity: Capacity) -> Result<Self> {
        if capacity < self.capacity {
            return Err(PolynomialError::CapacityMismatch {
                lhs: self.capacity.size(),
                rhs: capacity.size(),
            });
        }
        let mut coefficients = self.coefficients.clone();
        coefficients.resize(capacity.size(), F::ZERO);
        Ok(Self {
            capacity,
            coefficients,
        })
    }

    /// Keeps the first `capacity` coefficients. Fails if any dropped coefficient is non-zero.
    pub fn reduce(&self, capacity: Capacity) -> Result<Self> {
        if capacity > self.capacity {
            return Err(PolynomialError::CapacityMismatch {
                lhs: self.capacity.size(),
                rhs: capacity.size(),
            });
        }
        if self.coefficients[capacity.size()..]
            .iter()
            .any(F::is_nonzero)
        {
            return Err(PolynomialError::CapacityOverflow {
                context: "reducing away non-zero coefficients",
            });
        }
        Ok(Self {
            capacity,
            coefficients: self.coefficients[..capacity.size()].to_vec(),
        })
    }

    /// Evaluates on the `N`-th roots of `domain`, which must have capacity at least `N`.
    pub fn ntt(&self, domain: &Domain<F>) -> Result<LagrangePolynomial<F>> {
        LagrangePolynomial::new(ntt(&self.coefficients, domain)?)
    }

    /// The full product `self * other`, in twice `self`'s capacity.
    ///
    /// Both operands are zero-padded to `2N` before transforming so that the cyclic convolution
    /// computed by the transform has no wraparound. `other` must not have a larger capacity than
    /// `self`, and the transform runs at capacity `2N`, so `domain` must have at least `2N`
    /// elements.
    pub fn multiply(&self, other: &Self, domain: &Domain<F>) -> Result<Self> {
        self.ensure_covers(other)?;
        let doubled = self.capacity.doubled()?;
        let lhs = self.expand(doubled)?.ntt(domain)?;
        let rhs = other.expand(doubled)?.ntt(domain)?;
        lhs.multiply(&rhs)?.intt(domain)
    }

    /// The product `self * other mod (x^N - 1)`, in `self`'s capacity `N`.
    pub fn multiply_mod(&self, other: &Self, domain: &Domain<F>) -> Result<Self> {
        self.ensure_covers(other)?;
        let lhs = self.ntt(domain)?;
        let rhs = other.expand(self.capacity)?.ntt(domain)?;
        lhs.multiply(&rhs)?.intt(domain)
    }

    /// Let `self=p(X)`, this returns `(p(X)-p(z))/(X-z)`, in the same capacity.
    /// See <https://en.wikipedia.org/wiki/Horner%27s_method>
    pub fn divide_by_linear(&self, z: F) -> Self {
        let mut bs = self
            .coefficients
            .iter()
            .rev()
            .scan(F::ZERO, |acc, &c| {
                *acc = *acc * z + c;
                Some(*acc)
            })
            .collect::<Vec<_>>();
        // The last accumulator is p(z).
        bs.pop();
        bs.reverse();
        bs.resize(self.capacity.size(), F::ZERO);
        Self {
            capacity: self.capacity,
            coefficients: bs,
        }
    }
}

impl<F: Field> PartialEq for Polynomial<F> {
    fn eq(&self, other: &Self) -> bool {
        let max_terms = self.coefficients.len().max(other.coefficients.len());
        (0..max_terms).all(|i| {
            let self_i = self.coefficients.get(i).copied().unwrap_or(F::ZERO);
            let other_i = other.coefficients.get(i).copied().unwrap_or(F::ZERO);
            self_i == other_i
        })
    }
}

impl<F: Field> Eq for Polynomial<F> {}

impl<F: Field> TryFrom<Vec<F>> for Polynomial<F> {
    type Error = PolynomialError;

    fn try_from(coefficients: Vec<F>) -> Result<Self> {
        Self::new(coefficients)
    }
}

impl<F: Field> From<Polynomial<F>> for Vec<F> {
    fn from(poly: Polynomial<F>) -> Self {
        poly.coefficients
    }
}
