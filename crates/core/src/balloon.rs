//! Core Balloon Hashing Implementation
//!
//! Each of the `parallel_cost` instances owns a buffer of `space_cost`
//! blocks. An instance fills its buffer with a hash chain (expand), then
//! runs `time_cost` rounds that rewrite every block in place from its
//! predecessor and `DELTA` pseudorandomly chosen neighbors (mix). The last
//! blocks of all instances are XORed together and hashed once more with the
//! inputs to form the digest.
//!
//! Byte layout of every hash call (all integers are 8-byte little-endian,
//! `lp(x)` is `len(x) || x`, `j` is the instance index):
//! - expand, first block: `cnt || lp(password) || lp(salt) || s || t || p || j`
//! - expand, block `i`: `cnt || buf[i-1]`
//! - neighbor `k` of block `m` in round `r`: `cnt || lp(salt) || r || m || j || k`,
//!   index is the first 8 digest bytes read big-endian, modulo `s`
//! - mix: `cnt || buf[m] || buf[m-1] || buf[n0] || buf[n1] || buf[n2]`
//! - extract: `combined || lp(password) || lp(salt) || s || t || p`
//!
//! The counter starts at 0 for each instance and advances once per hash
//! call made by that instance.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::Zeroizing;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::buffer::BlockBuffer;
use crate::params::*;
use crate::primitives::{Primitive, le64};

/// Rolling per-instance hash counter
#[derive(Debug, Default)]
pub(crate) struct Counter(u64);

impl Counter {
    /// Encoded current value; advances the counter
    #[inline(always)]
    pub(crate) fn next(&mut self) -> [u8; 8] {
        let encoded = le64(self.0);
        self.0 += 1;
        encoded
    }

    #[cfg(test)]
    pub(crate) fn value(&self) -> u64 {
        self.0
    }
}

/// One independent expand + mix computation
pub(crate) struct Instance<'a, P: Primitive> {
    primitive: &'a P,
    password: &'a [u8],
    salt: &'a [u8],
    params: Params,
    index: u64,
    pub(crate) counter: Counter,
}

impl<'a, P: Primitive> Instance<'a, P> {
    pub(crate) fn new(
        primitive: &'a P,
        password: &'a [u8],
        salt: &'a [u8],
        params: Params,
        index: u64,
    ) -> Self {
        Self {
            primitive,
            password,
            salt,
            params,
            index,
            counter: Counter::default(),
        }
    }

    /// Run the instance to completion and return its final block
    pub(crate) fn run(&mut self) -> Result<Block, Error> {
        log::trace!(
            "balloon instance {}/{}: {} blocks, {} rounds",
            self.index + 1,
            self.params.parallel_cost(),
            self.params.space_cost(),
            self.params.time_cost()
        );

        let mut buffer = BlockBuffer::allocate(self.params.space_cost())?;
        self.expand(&mut buffer);
        for round in 0..self.params.time_cost() {
            self.mix_round(&mut buffer, u64::from(round));
        }

        Ok(buffer.last())
    }

    /// Fill the buffer with a hash chain seeded from the inputs
    pub(crate) fn expand(&mut self, buffer: &mut BlockBuffer) {
        let counter = self.counter.next();
        let password_len = le64(self.password.len() as u64);
        let salt_len = le64(self.salt.len() as u64);
        let space = le64(u64::from(self.params.space_cost()));
        let time = le64(u64::from(self.params.time_cost()));
        let parallel = le64(u64::from(self.params.parallel_cost()));
        let instance = le64(self.index);

        let seed: [&[u8]; 9] = [
            &counter,
            &password_len,
            self.password,
            &salt_len,
            self.salt,
            &space,
            &time,
            &parallel,
            &instance,
        ];
        buffer.set(0, self.primitive.hash(&seed));

        for i in 1..buffer.len() {
            let counter = self.counter.next();
            let parts: [&[u8]; 2] = [&counter, buffer.block(i - 1)];
            let block = self.primitive.hash(&parts);
            buffer.set(i, block);
        }
    }

    /// Pseudorandom neighbor index for block `position` in `round`
    pub(crate) fn neighbor(
        &mut self,
        round: u64,
        position: u64,
        ordinal: u64,
        space: usize,
    ) -> usize {
        let counter = self.counter.next();
        let salt_len = le64(self.salt.len() as u64);
        let round = le64(round);
        let position = le64(position);
        let instance = le64(self.index);
        let ordinal = le64(ordinal);

        let parts: [&[u8]; 7] = [
            &counter,
            &salt_len,
            self.salt,
            &round,
            &position,
            &instance,
            &ordinal,
        ];
        let digest = self.primitive.hash(&parts);

        let mut word = [0u8; 8];
        word.copy_from_slice(&digest[..8]);
        (u64::from_be_bytes(word) % space as u64) as usize
    }

    /// One full pass over the buffer, strictly in position order
    ///
    /// Block `m` reads block `m - 1` as already rewritten in this round.
    pub(crate) fn mix_round(&mut self, buffer: &mut BlockBuffer, round: u64) {
        let space = buffer.len();

        for m in 0..space {
            let mut neighbors = [0usize; DELTA];
            for (ordinal, neighbor) in neighbors.iter_mut().enumerate() {
                *neighbor = self.neighbor(round, m as u64, ordinal as u64, space);
            }

            let counter = self.counter.next();
            let empty: &[u8] = &[];
            let mut parts = [empty; 3 + DELTA];
            parts[0] = &counter;
            parts[1] = buffer.block(m);
            parts[2] = buffer.block(buffer.predecessor(m));
            for (slot, &neighbor) in parts[3..].iter_mut().zip(neighbors.iter()) {
                *slot = buffer.block(neighbor);
            }

            let mixed = self.primitive.hash(&parts);
            buffer.set(m, mixed);
        }
    }
}

/// Balloon hasher bound to one primitive and one parameter set
///
/// Holds no buffers: every call to [`Balloon::hash`] allocates fresh ones
/// and wipes them before returning, so a single value can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct Balloon<P: Primitive> {
    primitive: P,
    params: Params,
}

impl<P: Primitive> Balloon<P> {
    /// Create a hasher from a primitive and validated parameters
    pub fn new(primitive: P, params: Params) -> Self {
        Self { primitive, params }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Compute the Balloon hash of `password` under `salt`
    ///
    /// Returns a 32-byte digest, or [`Error::Allocation`] if a buffer of
    /// `space_cost` blocks cannot be reserved.
    pub fn hash(&self, password: &[u8], salt: &[u8]) -> Result<Block, Error> {
        if self.params.buffer_bytes().is_none() {
            return Err(Error::Allocation {
                blocks: self.params.space_cost(),
            });
        }

        log::debug!(
            "balloon hash ({}): space_cost={} time_cost={} parallel_cost={}",
            P::NAME,
            self.params.space_cost(),
            self.params.time_cost(),
            self.params.parallel_cost()
        );

        let finals = self.run_instances(password, salt)?;
        let mut combined = Zeroizing::new([0u8; BLOCK_SIZE]);
        for block in &finals {
            xor_into(&mut combined, block);
        }

        Ok(self.extract(&combined, password, salt))
    }

    /// Run one instance; its result is wiped on drop
    fn run_instance(
        &self,
        password: &[u8],
        salt: &[u8],
        index: u32,
    ) -> Result<Zeroizing<Block>, Error> {
        Instance::new(&self.primitive, password, salt, self.params, index.into())
            .run()
            .map(Zeroizing::new)
    }

    /// Run all instances on the rayon pool
    ///
    /// If any instance fails, results already collected are dropped (and
    /// wiped) before the error is returned.
    #[cfg(feature = "parallel")]
    pub(crate) fn run_instances(
        &self,
        password: &[u8],
        salt: &[u8],
    ) -> Result<Vec<Zeroizing<Block>>, Error> {
        (0..self.params.parallel_cost())
            .into_par_iter()
            .map(|index| self.run_instance(password, salt, index))
            .collect()
    }

    /// Run all instances one after another (sequential fallback)
    #[cfg(not(feature = "parallel"))]
    pub(crate) fn run_instances(
        &self,
        password: &[u8],
        salt: &[u8],
    ) -> Result<Vec<Zeroizing<Block>>, Error> {
        (0..self.params.parallel_cost())
            .map(|index| self.run_instance(password, salt, index))
            .collect()
    }

    /// Final domain-separated hash of the combined block
    fn extract(&self, combined: &Block, password: &[u8], salt: &[u8]) -> Block {
        let password_len = le64(password.len() as u64);
        let salt_len = le64(salt.len() as u64);
        let space = le64(u64::from(self.params.space_cost()));
        let time = le64(u64::from(self.params.time_cost()));
        let parallel = le64(u64::from(self.params.parallel_cost()));

        let parts: [&[u8]; 8] = [
            combined,
            &password_len,
            password,
            &salt_len,
            salt,
            &space,
            &time,
            &parallel,
        ];
        self.primitive.hash(&parts)
    }
}

/// XOR of all instance results
///
/// XOR is commutative and associative, so the order in which instances
/// finished does not affect the result.
pub fn combine(blocks: &[Block]) -> Block {
    let mut combined = [0u8; BLOCK_SIZE];
    for block in blocks {
        xor_into(&mut combined, block);
    }
    combined
}

#[inline(always)]
fn xor_into(acc: &mut Block, block: &Block) {
    for (a, b) in acc.iter_mut().zip(block.iter()) {
        *a ^= b;
    }
}

/// Convenience function for single-shot hashing
///
/// Equivalent to `Balloon::new(primitive, params).hash(password, salt)`.
pub fn balloon<P: Primitive>(
    primitive: P,
    password: &[u8],
    salt: &[u8],
    params: Params,
) -> Result<Block, Error> {
    Balloon::new(primitive, params).hash(password, salt)
}
