//! Balloon Hashing Library
//!
//! Memory-hard password hashing after RFC 9197.
//!
//! # Overview
//!
//! The algorithm itself lives in `balloon-core` (re-exported as
//! [`algorithm`]). This crate is the layer callers use: it accepts
//! passwords and salts as bytes or text, fills in default costs, picks the
//! hash primitive, adjusts the output length and compares digests.
//!
//! # Features
//!
//! - **Bytes or Text**: `&str`, `String`, `&[u8]`, `Vec<u8>`, validated UTF-8
//!   or UTF-16 input
//! - **Defaults**: `spaceCost = 16`, `timeCost = 20`, `parallelCost = 1`
//! - **Options as JSON**: camelCase keys, unknown keys rejected
//! - **Verification**: constant-time digest comparison
//!
//! # Example
//!
//! ```rust
//! use balloon::{balloon_hash, verify, BalloonHash, HashOptions};
//!
//! // Explicit costs
//! let hasher = BalloonHash::new(16, 20, 4).unwrap();
//! let digest = hasher.hash("password", "salt").unwrap();
//! assert_eq!(
//!     digest.to_hex(),
//!     "b36bc6e5f3bc997a90c1abccc0caed74ad9b37f7b282c04a6450c96327b4be4a"
//! );
//!
//! // Default costs, bytes and text interchangeable
//! let options = HashOptions::default();
//! let a = balloon_hash("password", b"salt", &options).unwrap();
//! let b = balloon_hash(b"password", "salt", &options).unwrap();
//! assert_eq!(a, b);
//!
//! assert!(verify("password", "salt", &options, a.as_bytes()).unwrap());
//! ```

// Re-export the core algorithm
pub use balloon_core as algorithm;

pub mod error;
pub mod input;
pub mod options;
pub mod output;

pub use error::{BalloonError, Result};
pub use input::Input;
pub use options::{HashOptions, PrimitiveKind, MAX_OUTPUT_LEN};
pub use output::Digest;

use algorithm::{Balloon, Blake3, Params, Primitive, Sha256};

/// Reusable hasher bound to one set of options
///
/// Options are validated once at construction; every call to
/// [`BalloonHash::hash`] is independent and allocates its own buffers.
#[derive(Debug, Clone)]
pub struct BalloonHash {
    params: Params,
    primitive: PrimitiveKind,
    output_len: usize,
}

impl BalloonHash {
    /// SHA-256 hasher with the given costs and a 32-byte output
    pub fn new(space_cost: u32, time_cost: u32, parallel_cost: u32) -> Result<Self> {
        Self::with_options(&HashOptions::new(space_cost, time_cost, parallel_cost))
    }

    pub fn with_options(options: &HashOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            params: options.params()?,
            primitive: options.primitive,
            output_len: options.output_len,
        })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Hash `password` under `salt`
    pub fn hash<'p, 's>(
        &self,
        password: impl Into<Input<'p>>,
        salt: impl Into<Input<'s>>,
    ) -> Result<Digest> {
        let password = password.into();
        let salt = salt.into();

        log::debug!(
            "hashing {}-byte password with {}-byte salt ({}, {} byte output)",
            password.len(),
            salt.len(),
            self.primitive.name(),
            self.output_len
        );

        match self.primitive {
            PrimitiveKind::Sha256 => self.run(Sha256, &password, &salt),
            PrimitiveKind::Blake3 => self.run(Blake3, &password, &salt),
        }
    }

    fn run<P: Primitive>(
        &self,
        primitive: P,
        password: &Input<'_>,
        salt: &Input<'_>,
    ) -> Result<Digest> {
        let hasher = Balloon::new(primitive, self.params);
        let block = zeroize::Zeroizing::new(hasher.hash(password.as_bytes(), salt.as_bytes())?);
        Ok(output::fit(hasher.primitive(), &block, self.output_len))
    }

    /// Recompute the digest and compare it to `expected` in constant time
    pub fn verify<'p, 's>(
        &self,
        password: impl Into<Input<'p>>,
        salt: impl Into<Input<'s>>,
        expected: &[u8],
    ) -> Result<bool> {
        let matches = self.hash(password, salt)?.ct_eq(expected);
        if !matches {
            log::debug!("digest mismatch");
        }
        Ok(matches)
    }
}

/// Convenience function for single-shot hashing
pub fn balloon_hash<'p, 's>(
    password: impl Into<Input<'p>>,
    salt: impl Into<Input<'s>>,
    options: &HashOptions,
) -> Result<Digest> {
    BalloonHash::with_options(options)?.hash(password, salt)
}

/// Check a password against a previously computed digest
pub fn verify<'p, 's>(
    password: impl Into<Input<'p>>,
    salt: impl Into<Input<'s>>,
    options: &HashOptions,
    expected: &[u8],
) -> Result<bool> {
    BalloonHash::with_options(options)?.verify(password, salt, expected)
}
