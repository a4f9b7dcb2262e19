//! # Balloon Hashing Core Algorithm
//!
//! A memory-hard password hashing function after RFC 9197. Evaluating it
//! cheaply requires holding a buffer of `space_cost` blocks in fast memory
//! for `time_cost` rounds of data-independent mixing.
//!
//! ## Features
//!
//! - **Memory-Hard**: every block is rewritten in place from its
//!   predecessor and pseudorandom neighbors, round after round
//! - **Pluggable Primitive**: SHA-256 or BLAKE3, chosen explicitly by the caller
//! - **Parallel Instances**: `parallel_cost` domain-separated instances,
//!   optionally run on the rayon pool, combined by XOR
//! - **No Shared State**: buffers are allocated per call and wiped on drop
//!
//! ## Parameters
//!
//! - `space_cost`: blocks per instance (32 bytes each), default 16
//! - `time_cost`: mixing rounds, default 20
//! - `parallel_cost`: independent instances, default 1
//!
//! ## Example
//!
//! ```rust
//! use balloon_core::{Balloon, Params, Sha256, balloon};
//!
//! let params = Params::new(16, 20, 4).unwrap();
//!
//! // Single-shot hashing
//! let digest = balloon(Sha256, b"password", b"salt", params).unwrap();
//! assert_eq!(digest.len(), 32);
//!
//! // Reusable hasher (holds only the primitive and parameters)
//! let hasher = Balloon::new(Sha256, params);
//! assert_eq!(hasher.hash(b"password", b"salt").unwrap(), digest);
//! ```
//!
//! ## no_std Support
//!
//! This crate supports `no_std` environments with the `alloc` crate:
//!
//! ```toml
//! [dependencies]
//! balloon-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod balloon;
mod buffer;
mod params;
mod primitives;

pub use balloon::{Balloon, balloon, combine};
pub use params::*;
pub use primitives::{Blake3, Primitive, Sha256};
