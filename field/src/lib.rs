#![allow(clippy::len_without_is_empty)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::return_self_not_must_use)]
#![deny(rust_2018_idioms)]

extern crate alloc;

pub mod array;
pub mod bn254;
pub mod capacity;
pub mod domain;
pub mod error;
pub mod fft;
pub mod polynomial;
pub mod types;

#[cfg(test)]
mod field_testing;

pub use capacity::Capacity;
pub use domain::Domain;
pub use error::{PolynomialError, Result};
pub use polynomial::{LagrangePolynomial, Polynomial};
