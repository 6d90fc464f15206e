mod block_chain;
mod iter;
mod symbol;
mod wrapper;

pub use block_chain::{BlockChain, MAX_BLOCK_DEPTH};
pub use iter::{FrameIter, UnwindStatus};
pub use symbol::NO_VALUE;
pub use wrapper::FrameWrapper;
