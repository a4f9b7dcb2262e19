//! Digest output and length adjustment
//!
//! The core produces one 32-byte block. Shorter outputs are prefixes of
//! it; longer outputs concatenate `H(le64(i) || block)` for `i = 0, 1, ...`
//! and cut the result to length.

use std::fmt;

use balloon_core::{Block, Primitive, BLOCK_SIZE};
use zeroize::Zeroize;

/// Final hash output
#[derive(Clone, PartialEq, Eq)]
pub struct Digest(Vec<u8>);

impl Digest {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Constant-time comparison against expected bytes
    pub fn ct_eq(&self, expected: &[u8]) -> bool {
        constant_time_eq::constant_time_eq(&self.0, expected)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl Drop for Digest {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Resize a core block to `len` bytes
///
/// `len` is a validated option: non-zero and at most
/// [`MAX_OUTPUT_LEN`](crate::options::MAX_OUTPUT_LEN).
pub(crate) fn fit<P: Primitive>(primitive: &P, block: &Block, len: usize) -> Digest {
    if len <= BLOCK_SIZE {
        return Digest(block[..len].to_vec());
    }

    let mut out = Vec::with_capacity(len.div_ceil(BLOCK_SIZE) * BLOCK_SIZE);
    let mut counter = 0u64;
    while out.len() < len {
        let index = counter.to_le_bytes();
        let parts: [&[u8]; 2] = [&index, block];
        out.extend_from_slice(&primitive.hash(&parts));
        counter += 1;
    }
    out.truncate(len);

    Digest(out)
}
