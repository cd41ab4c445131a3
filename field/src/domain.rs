//! Evaluation domains: the powers `1, r, r^2, ..., r^(N-1)` of a primitive `N`-th root of unity.
//!
//! A domain of capacity `N` also serves every transform of capacity `M <= N`: since `r^(N/M)` is a
//! primitive `M`-th root of unity, the smaller domain is `elements[0], elements[N/M], ...`.

use alloc::vec::Vec;

use log::{debug, error};

use crate::capacity::Capacity;
use crate::error::{PolynomialError, Result};
use crate::types::Field;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Domain<F: Field> {
    capacity: Capacity,
    elements: Vec<F>,
}

impl<F: Field> Domain<F> {
    /// Builds the domain of the given capacity from the field's root of unity of maximal
    /// power-of-two order. Intended to be done once and shared.
    pub fn generate(capacity: Capacity) -> Result<Self> {
        if capacity.log_size() > F::TWO_ADICITY {
            return Err(PolynomialError::InvalidSize {
                size: capacity.size(),
                log_size: capacity.log_size(),
            });
        }
        let elements = F::two_adic_subgroup(capacity.log_size());
        debug!("generated evaluation domain of size {}", capacity.size());
        Ok(Self { capacity, elements })
    }

    /// Wraps externally supplied elements without checking that they are powers of a primitive
    /// root. Call [`Domain::validate`] before trusting such a domain.
    pub fn from_raw(elements: Vec<F>) -> Result<Self> {
        let capacity = Capacity::from_size(elements.len())?;
        Ok(Self { capacity, elements })
    }

    /// Checks that `elements[i] = r^i` for `r = elements[1]` and that `r` has order exactly `N`.
    pub fn validate(&self) -> Result<()> {
        let fail = |index: usize| {
            error!("domain of size {} fails validation at index {}", self.len(), index);
            Err(PolynomialError::InvalidDomain { index })
        };

        if !self.elements[0].is_one() {
            return fail(0);
        }
        let root = self.primitive_root();
        let mut current = root;
        for i in 1..self.len() {
            if current.is_one() || self.elements[i] != current {
                return fail(i);
            }
            current *= root;
        }
        if !current.is_one() {
            return fail(self.len());
        }
        Ok(())
    }

    /// The generator `r = elements[1]`, or one for the trivial domain.
    pub fn primitive_root(&self) -> F {
        self.elements.get(1).copied().unwrap_or(F::ONE)
    }

    /// Returns `r^i`.
    #[inline]
    pub fn root(&self, i: usize) -> F {
        self.elements[i]
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn elements(&self) -> &[F] {
        &self.elements
    }

    /// The step through `elements` that yields the sub-domain of the given capacity.
    pub fn stride(&self, capacity: Capacity) -> Result<usize> {
        if capacity.size() > self.len() {
            return Err(PolynomialError::DomainTooSmall {
                domain: self.len(),
                required: capacity.size(),
            });
        }
        Ok(self.len() / capacity.size())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::Domain;
    use crate::bn254::Bn254Field;
    use crate::capacity::Capacity;
    use crate::error::PolynomialError;
    use crate::polynomial::tests::init_logger;
    use crate::types::Field;

    type F = Bn254Field;

    #[test]
    fn generated_domains_are_valid() -> anyhow::Result<()> {
        init_logger();
        for log_size in 0..=8 {
            let capacity = Capacity::from_log(log_size)?;
            let domain = Domain::<F>::generate(capacity)?;
            domain.validate()?;

            let n = capacity.size();
            let root = domain.primitive_root();
            assert_eq!(domain.root(0), F::ONE);
            assert_eq!(root.exp_u64(n as u64), F::ONE);
            for k in 1..n {
                assert_ne!(root.exp_u64(k as u64), F::ONE, "order of root divides {}", k);
            }
        }
        Ok(())
    }

    #[test]
    fn generate_rejects_oversized_capacity() {
        let capacity = Capacity::from_log(F::TWO_ADICITY + 1).unwrap();
        assert!(matches!(
            Domain::<F>::generate(capacity),
            Err(PolynomialError::InvalidSize { .. })
        ));
    }

    #[test]
    fn strided_subdomain_is_a_domain() -> anyhow::Result<()> {
        let big = Domain::<F>::generate(Capacity::from_log(6)?)?;
        let small_capacity = Capacity::from_log(3)?;
        let small = Domain::<F>::generate(small_capacity)?;
        let step = big.stride(small_capacity)?;
        assert_eq!(step, 8);

        let strided = (0..small.len()).map(|i| big.root(i * step)).collect();
        assert_eq!(Domain::from_raw(strided)?, small);
        Ok(())
    }

    #[test]
    fn stride_rejects_larger_capacity() -> anyhow::Result<()> {
        let domain = Domain::<F>::generate(Capacity::from_log(2)?)?;
        assert_eq!(
            domain.stride(Capacity::from_log(3)?),
            Err(PolynomialError::DomainTooSmall {
                domain: 4,
                required: 8
            })
        );
        Ok(())
    }

    #[test]
    fn validate_rejects_tampered_domains() -> anyhow::Result<()> {
        init_logger();
        let domain = Domain::<F>::generate(Capacity::from_log(3)?)?;

        let mut elements = domain.elements().to_vec();
        elements[5] += F::ONE;
        assert_eq!(
            Domain::from_raw(elements)?.validate(),
            Err(PolynomialError::InvalidDomain { index: 5 })
        );

        let mut elements = domain.elements().to_vec();
        elements[0] = F::TWO;
        assert_eq!(
            Domain::from_raw(elements)?.validate(),
            Err(PolynomialError::InvalidDomain { index: 0 })
        );

        // A root of order 4 laid out over 8 slots repeats one too early.
        let order_four = Domain::<F>::generate(Capacity::from_log(2)?)?;
        let root = order_four.primitive_root();
        let elements = root.powers().take(8).collect();
        assert_eq!(
            Domain::from_raw(elements)?.validate(),
            Err(PolynomialError::InvalidDomain { index: 4 })
        );

        // Powers of a root whose order exceeds the length never wrap back to one.
        let order_sixteen = Domain::<F>::generate(Capacity::from_log(4)?)?;
        let elements = order_sixteen.primitive_root().powers().take(8).collect();
        assert_eq!(
            Domain::from_raw(elements)?.validate(),
            Err(PolynomialError::InvalidDomain { index: 8 })
        );
        Ok(())
    }

    #[test]
    fn from_raw_checks_length_only() {
        assert!(Domain::<F>::from_raw(vec![F::ONE; 3]).is_err());
        let trivial = Domain::<F>::from_raw(vec![F::ONE]).unwrap();
        assert_eq!(trivial.primitive_root(), F::ONE);
        assert!(trivial.validate().is_ok());
        assert!(Domain::<F>::from_raw(vec![F::TWO, F::ONE])
            .unwrap()
            .validate()
            .is_err());
    }
}
