//! Errors raised by capacity checks, transforms and division.

use thiserror::Error;

/// Every precondition violation in this crate is reported through one of these variants; there
/// is no partial result on failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    /// A capacity that is not a power of two, or whose stated log does not match.
    #[error("invalid size: capacity {size} with log2 {log_size}")]
    InvalidSize { size: usize, log_size: usize },

    /// A value would not fit in the fixed capacity of the result.
    #[error("capacity overflow: {context}")]
    CapacityOverflow { context: &'static str },

    /// Two operands whose capacities cannot be combined by the requested operation.
    #[error("capacity mismatch: {lhs} and {rhs}")]
    CapacityMismatch { lhs: usize, rhs: usize },

    #[error("division by the zero polynomial")]
    DivisionByZeroPolynomial,

    /// The dividend has lower degree than the divisor.
    #[error("dividend of degree {dividend} is smaller than divisor of degree {divisor}")]
    DivisorDegreeTooHigh { dividend: usize, divisor: usize },

    #[error("domain of capacity {domain} cannot serve a transform of capacity {required}")]
    DomainTooSmall { domain: usize, required: usize },

    /// The element at `index` breaks the powers-of-a-primitive-root structure.
    #[error("invalid domain: mismatch at index {index}")]
    InvalidDomain { index: usize },

    #[error("divisor * quotient + remainder does not reproduce the dividend")]
    DivisionCertificationFailed,
}

pub type Result<T> = core::result::Result<T, PolynomialError>;
