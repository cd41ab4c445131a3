//! Polynomial division in two separable steps: an untrusted long division, and a certifier that
//! recomputes `divisor * quotient + remainder` through the transform-based product.

use log::{debug, error};

use crate::domain::Domain;
use crate::error::{PolynomialError, Result};
use crate::polynomial::Polynomial;
use crate::types::Field;

impl<F: Field> Polynomial<F> {
    fn check_divisor(&self, divisor: &Self) -> Result<()> {
        if divisor.is_zero() {
            return Err(PolynomialError::DivisionByZeroPolynomial);
        }
        if divisor.capacity() > self.capacity() {
            return Err(PolynomialError::CapacityMismatch {
                lhs: self.capacity().size(),
                rhs: divisor.capacity().size(),
            });
        }
        if self.degree() < divisor.degree() {
            return Err(PolynomialError::DivisorDegreeTooHigh {
                dividend: self.degree(),
                divisor: divisor.degree(),
            });
        }
        Ok(())
    }

    /// Returns `(q, r)` with `self = divisor * q + r` and `deg r < deg divisor` (or `r = 0`),
    /// both in `self`'s capacity.
    ///
    /// The candidate from [`Self::long_division`] is only returned after
    /// [`Self::certify_division`] accepts it. `domain` must have at least twice `self`'s capacity.
    pub fn divide(&self, divisor: &Self, domain: &Domain<F>) -> Result<(Self, Self)> {
        let (quotient, remainder) = self.long_division(divisor, domain)?;
        self.certify_division(divisor, &quotient, &remainder, domain)?;
        Ok((quotient, remainder))
    }

    /// Schoolbook long division. Each step cancels the leading term of the remainder, so the
    /// loop runs at most `deg self - deg divisor + 1` times.
    pub fn long_division(&self, divisor: &Self, domain: &Domain<F>) -> Result<(Self, Self)> {
        self.check_divisor(divisor)?;

        let capacity = self.capacity();
        let divisor_degree = divisor.degree();
        let divisor_lead = divisor.leading_coefficient();
        let divisor = divisor.expand(capacity)?;

        let mut quotient = Self::zero(capacity);
        let mut remainder = self.clone();
        let mut steps = 0;
        while !remainder.is_zero() && remainder.degree() >= divisor_degree {
            let remainder_degree = remainder.degree();
            let lead = remainder.leading_coefficient() / divisor_lead;
            let mut monomial = Self::zero(capacity);
            monomial.coefficients[remainder_degree - divisor_degree] = lead;

            quotient = quotient.add(&monomial)?;
            let product = monomial.multiply(&divisor, domain)?.reduce(capacity)?;
            remainder = remainder.sub(&product)?;
            steps += 1;
        }
        debug!(
            "divided degree {} by degree {} in {} steps",
            self.degree(),
            divisor_degree,
            steps
        );
        Ok((quotient, remainder))
    }

    /// Accepts `(quotient, remainder)` only if `divisor * quotient + remainder` equals `self` and
    /// the remainder has lower degree than the divisor (or is zero).
    pub fn certify_division(
        &self,
        divisor: &Self,
        quotient: &Self,
        remainder: &Self,
        domain: &Domain<F>,
    ) -> Result<()> {
        self.check_divisor(divisor)?;
        let capacity = self.capacity();

        let fail = || {
            error!(
                "division certificate rejected for dividend of degree {} and divisor of degree {}",
                self.degree(),
                divisor.degree()
            );
            Err(PolynomialError::DivisionCertificationFailed)
        };

        if quotient.capacity() > capacity || remainder.capacity() > capacity {
            return fail();
        }
        let recomputed = divisor
            .expand(capacity)?
            .multiply(quotient, domain)?
            .add(remainder)?;
        let recomputed = match recomputed.reduce(capacity) {
            Ok(recomputed) => recomputed,
            Err(PolynomialError::CapacityOverflow { .. }) => return fail(),
            Err(e) => return Err(e),
        };
        if recomputed != *self {
            return fail();
        }
        if !(remainder.is_zero() || remainder.degree() < divisor.degree()) {
            return fail();
        }
        Ok(())
    }
}
