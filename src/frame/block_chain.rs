use crate::error::CoreError;
use crate::inferior::{Block, BlockId, DebuggerCore};
use tracing::warn;

/// Upper bound on superblock hops before a chain is treated as malformed.
pub const MAX_BLOCK_DEPTH: usize = 4096;

/// Walks a block and its superblocks, innermost first.
///
/// A failed block lookup is yielded once and ends the walk.
pub struct BlockChain<'c> {
    core: &'c dyn DebuggerCore,
    next: Option<BlockId>,
    depth: usize,
}

impl<'c> BlockChain<'c> {
    pub fn new(core: &'c dyn DebuggerCore, start: Option<BlockId>) -> Self {
        Self {
            core,
            next: start,
            depth: 0,
        }
    }
}

impl<'c> Iterator for BlockChain<'c> {
    type Item = Result<(BlockId, &'c Block), CoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;
        if self.depth >= MAX_BLOCK_DEPTH {
            warn!(block = %id, "block chain exceeds {} levels, stopping", MAX_BLOCK_DEPTH);
            return None;
        }
        self.depth += 1;

        let block = self.core.block(id);
        Some(block.map(|block| {
            self.next = block.superblock;
            (id, block)
        }))
    }
}
