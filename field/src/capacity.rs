use polyntt_util::try_log2;
use serde::{Deserialize, Serialize};

use crate::error::{PolynomialError, Result};

/// The fixed number of slots of a polynomial or domain, together with its base-2 logarithm.
///
/// The size is always a power of two; the constructors reject anything else.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCapacity", into = "RawCapacity")]
pub struct Capacity {
    size: usize,
    log_size: usize,
}

/// Unchecked wire form of [`Capacity`]; deserialization goes through [`Capacity::new`].
#[derive(Copy, Clone, Serialize, Deserialize)]
struct RawCapacity {
    size: usize,
    log_size: usize,
}

impl TryFrom<RawCapacity> for Capacity {
    type Error = PolynomialError;

    fn try_from(raw: RawCapacity) -> Result<Self> {
        Self::new(raw.size, raw.log_size)
    }
}

impl From<Capacity> for RawCapacity {
    fn from(capacity: Capacity) -> Self {
        Self {
            size: capacity.size,
            log_size: capacity.log_size,
        }
    }
}

impl Capacity {
    /// Validates an explicit `(size, log_size)` pair.
    pub fn new(size: usize, log_size: usize) -> Result<Self> {
        match try_log2(size) {
            Some(log) if log == log_size => Ok(Self { size, log_size }),
            _ => Err(PolynomialError::InvalidSize { size, log_size }),
        }
    }

    pub fn from_size(size: usize) -> Result<Self> {
        try_log2(size)
            .map(|log_size| Self { size, log_size })
            .ok_or(PolynomialError::InvalidSize {
                size,
                log_size: polyntt_util::log2_ceil(size),
            })
    }

    pub fn from_log(log_size: usize) -> Result<Self> {
        if log_size >= usize::BITS as usize {
            return Err(PolynomialError::InvalidSize {
                size: 0,
                log_size,
            });
        }
        Ok(Self {
            size: 1 << log_size,
            log_size,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn log_size(&self) -> usize {
        self.log_size
    }

    /// The capacity with twice as many slots.
    pub fn doubled(&self) -> Result<Self> {
        Self::from_log(self.log_size + 1)
    }
}
