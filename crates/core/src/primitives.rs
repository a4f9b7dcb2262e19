//! Hash primitives for Balloon Hashing
//!
//! The construction needs a single building block: a hash over a sequence
//! of byte strings that yields one [`Block`]. Fields are framed by the
//! caller (fixed-width integers, length-prefixed strings), so a primitive
//! only has to absorb the parts in order.

use blake3::Hasher as Blake3Hasher;
use sha2::{Digest, Sha256 as Sha256Hasher};

use crate::params::{BLOCK_SIZE, Block};

/// Fixed-output hash function used for every call of one computation
pub trait Primitive: Sync {
    /// Short identifier, used in logs
    const NAME: &'static str;

    /// Hash the concatenation of `parts`
    fn hash(&self, parts: &[&[u8]]) -> Block;
}

/// SHA-256 (FIPS 180-4)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256;

impl Primitive for Sha256 {
    const NAME: &'static str = "sha256";

    #[inline(always)]
    fn hash(&self, parts: &[&[u8]]) -> Block {
        let mut hasher = Sha256Hasher::new();
        for part in parts {
            hasher.update(part);
        }
        let mut out = [0u8; BLOCK_SIZE];
        out.copy_from_slice(&hasher.finalize());
        out
    }
}

/// BLAKE3 in its default 256-bit output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blake3;

impl Primitive for Blake3 {
    const NAME: &'static str = "blake3";

    #[inline(always)]
    fn hash(&self, parts: &[&[u8]]) -> Block {
        let mut hasher = Blake3Hasher::new();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize().into()
    }
}

/// Fixed-width little-endian encoding used for every integer field
#[inline(always)]
pub fn le64(value: u64) -> [u8; 8] {
    value.to_le_bytes()
}
