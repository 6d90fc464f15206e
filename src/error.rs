//! Error types for the backtrace pipeline and its debugger-core collaborator.

use crate::inferior::{BlockId, FrameId};
use thiserror::Error;

/// Failures reported by the debugger core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("No stack.")]
    NoStack,

    #[error("Cannot locate block for frame {0}.")]
    NoBlock(FrameId),

    #[error("Unknown frame {0}.")]
    UnknownFrame(FrameId),

    #[error("Unknown block {0}.")]
    UnknownBlock(BlockId),

    #[error("Backtrace stopped: {0}")]
    Unwind(String),

    #[error("Cannot access memory at address {0:#x}")]
    Memory(u64),

    #[error("<optimized out>")]
    OptimizedOut,

    #[error("{0}")]
    Other(String),
}

/// Errors surfaced to whoever invoked a command.
#[derive(Debug, Error)]
pub enum BacktraceError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl BacktraceError {
    pub fn usage(msg: impl Into<String>) -> Self {
        BacktraceError::Usage(msg.into())
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, BacktraceError::Usage(_))
    }
}

pub type Result<T> = std::result::Result<T, BacktraceError>;
