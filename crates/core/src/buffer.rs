//! Block buffer: the memory-hard working set of one instance

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::Zeroizing;

use crate::params::{BLOCK_SIZE, Block, Error};

/// `space_cost` blocks, owned by a single instance and wiped on drop
pub(crate) struct BlockBuffer {
    blocks: Zeroizing<Vec<Block>>,
}

impl BlockBuffer {
    /// Reserve and zero a buffer of `space_cost` blocks
    ///
    /// Reservation is fallible so an oversized request surfaces as
    /// [`Error::Allocation`] instead of aborting the process.
    pub(crate) fn allocate(space_cost: u32) -> Result<Self, Error> {
        Self::reserve(space_cost as usize).ok_or(Error::Allocation { blocks: space_cost })
    }

    /// `None` if `len` blocks cannot be reserved
    pub(crate) fn reserve(len: usize) -> Option<Self> {
        let mut blocks = Vec::new();
        blocks.try_reserve_exact(len).ok()?;
        blocks.resize(len, [0u8; BLOCK_SIZE]);

        Some(Self {
            blocks: Zeroizing::new(blocks),
        })
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline(always)]
    pub(crate) fn block(&self, index: usize) -> &Block {
        &self.blocks[index]
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, index: usize, block: Block) {
        self.blocks[index] = block;
    }

    /// Index of the block preceding `index`, wrapping to the end
    #[inline(always)]
    pub(crate) fn predecessor(&self, index: usize) -> usize {
        (index + self.len() - 1) % self.len()
    }

    /// The last block, which is the instance's result after mixing
    pub(crate) fn last(&self) -> Block {
        self.blocks[self.len() - 1]
    }
}
