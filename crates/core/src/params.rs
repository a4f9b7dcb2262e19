//! Balloon Hashing Parameters
//!
//! Cost parameters, their validation, and the fixed constants of the
//! construction (block length and neighbor count).

use core::fmt;

/// Block size in bytes (output length of every supported primitive)
pub const BLOCK_SIZE: usize = 32;

/// Number of pseudorandom neighbors mixed into each block update
pub const DELTA: usize = 3;

/// Default number of blocks in the buffer
pub const DEFAULT_SPACE_COST: u32 = 16;

/// Default number of mixing rounds
pub const DEFAULT_TIME_COST: u32 = 20;

/// Default number of independent instances
pub const DEFAULT_PARALLEL_COST: u32 = 1;

/// Algorithm version
pub const VERSION: u8 = 1;

/// A single buffer block
pub type Block = [u8; BLOCK_SIZE];

/// Errors reported by the core algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `space_cost` was zero
    InvalidSpaceCost,
    /// `time_cost` was zero
    InvalidTimeCost,
    /// `parallel_cost` was zero
    InvalidParallelCost,
    /// A buffer of `blocks` blocks could not be reserved
    Allocation { blocks: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSpaceCost => write!(f, "space_cost must be at least 1"),
            Error::InvalidTimeCost => write!(f, "time_cost must be at least 1"),
            Error::InvalidParallelCost => write!(f, "parallel_cost must be at least 1"),
            Error::Allocation { blocks } => {
                write!(f, "failed to allocate a buffer of {blocks} blocks")
            }
        }
    }
}

impl core::error::Error for Error {}

/// Validated cost parameters
///
/// Constructed through [`Params::new`], so every value held by this type
/// has all three costs at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Params {
    space_cost: u32,
    time_cost: u32,
    parallel_cost: u32,
}

impl Params {
    /// Validate and build a parameter set
    pub fn new(space_cost: u32, time_cost: u32, parallel_cost: u32) -> Result<Self, Error> {
        if space_cost < 1 {
            return Err(Error::InvalidSpaceCost);
        }
        if time_cost < 1 {
            return Err(Error::InvalidTimeCost);
        }
        if parallel_cost < 1 {
            return Err(Error::InvalidParallelCost);
        }

        Ok(Self {
            space_cost,
            time_cost,
            parallel_cost,
        })
    }

    /// Number of blocks in each instance's buffer
    pub fn space_cost(&self) -> u32 {
        self.space_cost
    }

    /// Number of mixing rounds
    pub fn time_cost(&self) -> u32 {
        self.time_cost
    }

    /// Number of independent instances
    pub fn parallel_cost(&self) -> u32 {
        self.parallel_cost
    }

    /// Bytes held by one instance's buffer, if addressable
    pub fn buffer_bytes(&self) -> Option<usize> {
        (self.space_cost as usize).checked_mul(BLOCK_SIZE)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            space_cost: DEFAULT_SPACE_COST,
            time_cost: DEFAULT_TIME_COST,
            parallel_cost: DEFAULT_PARALLEL_COST,
        }
    }
}
