//! Caller-facing hashing options
//!
//! Options fill in defaults for anything a caller leaves out and can be
//! read from JSON using the camelCase keys callers already use
//! (`spaceCost`, `timeCost`, `parallelCost`, `primitive`, `outputLen`).

use serde::{Deserialize, Serialize};

use balloon_core::{
    Params, BLOCK_SIZE, DEFAULT_PARALLEL_COST, DEFAULT_SPACE_COST, DEFAULT_TIME_COST,
};

use crate::error::{BalloonError, Result};

/// Longest digest `output_len` may request (1 MiB)
pub const MAX_OUTPUT_LEN: usize = 1 << 20;

/// Hash primitive selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    #[default]
    Sha256,
    Blake3,
}

impl PrimitiveKind {
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Sha256 => "sha256",
            PrimitiveKind::Blake3 => "blake3",
        }
    }
}

/// Hashing options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct HashOptions {
    /// Memory usage (number of blocks)
    pub space_cost: u32,
    /// Number of mixing rounds
    pub time_cost: u32,
    /// Number of independent instances
    pub parallel_cost: u32,
    /// Hash primitive
    pub primitive: PrimitiveKind,
    /// Digest length in bytes
    pub output_len: usize,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            space_cost: DEFAULT_SPACE_COST,
            time_cost: DEFAULT_TIME_COST,
            parallel_cost: DEFAULT_PARALLEL_COST,
            primitive: PrimitiveKind::default(),
            output_len: BLOCK_SIZE,
        }
    }
}

impl HashOptions {
    /// Options with the given costs and defaults for everything else
    pub fn new(space_cost: u32, time_cost: u32, parallel_cost: u32) -> Self {
        Self {
            space_cost,
            time_cost,
            parallel_cost,
            ..Self::default()
        }
    }

    /// Parse options from JSON; omitted keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn with_primitive(mut self, primitive: PrimitiveKind) -> Self {
        self.primitive = primitive;
        self
    }

    pub fn with_output_len(mut self, output_len: usize) -> Self {
        self.output_len = output_len;
        self
    }

    /// Validated core parameters
    pub fn params(&self) -> Result<Params> {
        Ok(Params::new(
            self.space_cost,
            self.time_cost,
            self.parallel_cost,
        )?)
    }

    /// Check every option without computing anything
    pub fn validate(&self) -> Result<()> {
        self.params()?;
        if self.output_len == 0 || self.output_len > MAX_OUTPUT_LEN {
            return Err(BalloonError::OutputLength);
        }
        Ok(())
    }
}
