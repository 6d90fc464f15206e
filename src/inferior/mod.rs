//! Query interface onto the debugger core.
//!
//! Everything the backtrace pipeline knows about the stopped program comes
//! through [`DebuggerCore`]. Frames and blocks are plain handles; the core owns
//! the data behind them and answers queries for the duration of one command.

mod snapshot;

pub use snapshot::{Snapshot, SnapshotFrame, SnapshotValue, Solib};

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Address = u64;

/// Handle to one activation record, as issued by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameId(pub usize);

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to a lexical block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub usize);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameType {
    #[default]
    Normal,
    /// Frame pushed by the debugger to call a function in the inferior.
    Dummy,
    /// Signal trampoline frame.
    SigTramp,
}

/// Storage class of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressClass {
    Register,
    #[default]
    Memory,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    #[serde(default)]
    pub linkage_name: String,
    #[serde(default)]
    pub address_class: AddressClass,
    #[serde(default)]
    pub is_argument: bool,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default)]
    pub is_function: bool,
    #[serde(default)]
    pub is_variable: bool,
}

impl Symbol {
    /// Arguments, constants, functions and variables; not type tags or labels.
    pub fn is_value(&self) -> bool {
        self.is_argument || self.is_constant || self.is_function || self.is_variable
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub symbols: Vec<Symbol>,
    #[serde(default)]
    pub superblock: Option<BlockId>,
    /// Name of the function this block is the outermost body of.
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub is_global: bool,
    #[serde(default)]
    pub is_static: bool,
}

/// Symbol-and-line record for a pc.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SymtabAndLine {
    pub pc: Address,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub line: u32,
}

impl SymtabAndLine {
    pub fn has_file(&self) -> bool {
        self.filename.as_deref().is_some_and(|f| !f.is_empty())
    }
}

pub trait DebuggerCore {
    /// Innermost frame of the current thread.
    fn newest_frame(&self) -> Result<FrameId, CoreError>;

    /// Caller of `frame`, or `None` at the outermost frame.
    fn older_frame(&self, frame: FrameId) -> Result<Option<FrameId>, CoreError>;

    fn selected_frame(&self) -> Result<FrameId, CoreError>;

    fn frame_type(&self, frame: FrameId) -> FrameType;

    fn frame_pc(&self, frame: FrameId) -> Address;

    fn frame_name(&self, frame: FrameId) -> Option<String>;

    fn find_sal(&self, frame: FrameId) -> SymtabAndLine;

    /// Innermost lexical block; fails when the core has no debug info for the frame.
    fn frame_block(&self, frame: FrameId) -> Result<BlockId, CoreError>;

    fn frame_function(&self, frame: FrameId) -> Option<Symbol>;

    fn block(&self, block: BlockId) -> Result<&Block, CoreError>;

    /// Looks `name` up starting at `block` and walking outward.
    fn lookup_symbol(&self, name: &str, block: BlockId) -> Option<Symbol>;

    /// Reads `symbol` in the context of `frame`; `Ok(None)` when there is no value.
    fn read_var(&self, frame: FrameId, symbol: &Symbol) -> Result<Option<String>, CoreError>;

    /// Shared library containing `pc`, if any.
    fn solib_name(&self, pc: Address) -> Option<String>;
}
