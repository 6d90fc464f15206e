use super::{
    Address, AddressClass, Block, BlockId, DebuggerCore, FrameId, FrameType, Symbol,
    SymtabAndLine,
};
use crate::error::{BacktraceError, CoreError};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A stopped program captured as plain data.
///
/// Frames are listed innermost first; `FrameId(n)` is the n-th entry and
/// `BlockId(n)` the n-th block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub frames: Vec<SnapshotFrame>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub selected: usize,
    #[serde(default)]
    pub solibs: Vec<Solib>,
    /// Reported when unwinding past the last recorded frame.
    #[serde(default)]
    pub unwind_error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotFrame {
    #[serde(rename = "type", default)]
    pub frame_type: FrameType,
    pub pc: Address,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sal: SymtabAndLine,
    #[serde(default)]
    pub block: Option<BlockId>,
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub values: BTreeMap<String, SnapshotValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotValue {
    Value(String),
    Error(String),
    /// Read faulted at this address.
    Unreadable(Address),
    OptimizedOut,
    Absent,
}

/// Address range mapped from a shared library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solib {
    pub start: Address,
    pub end: Address,
    pub name: String,
}

impl Snapshot {
    pub fn from_json(text: &str) -> Result<Self, BacktraceError> {
        let snapshot: Snapshot = serde_json::from_str(text)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, BacktraceError> {
        let snapshot: Snapshot = serde_json::from_value(value)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn load(path: &Path) -> Result<Self, BacktraceError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Check handles are in range and every block chain terminates.
    fn validate(&self) -> Result<(), serde_json::Error> {
        for (i, frame) in self.frames.iter().enumerate() {
            if let Some(block) = frame.block {
                if block.0 >= self.blocks.len() {
                    return Err(serde_json::Error::custom(format!(
                        "frame {} refers to missing block {}",
                        i, block
                    )));
                }
            }
        }

        for (i, block) in self.blocks.iter().enumerate() {
            let mut steps = 0usize;
            let mut cur = block.superblock;
            while let Some(id) = cur {
                if id.0 >= self.blocks.len() {
                    return Err(serde_json::Error::custom(format!(
                        "block {} has missing superblock {}",
                        i, id
                    )));
                }
                steps += 1;
                if steps > self.blocks.len() {
                    return Err(serde_json::Error::custom(format!(
                        "block chain starting at {} is cyclic",
                        i
                    )));
                }
                cur = self.blocks[id.0].superblock;
            }
        }

        if !self.frames.is_empty() && self.selected >= self.frames.len() {
            return Err(serde_json::Error::custom(format!(
                "selected frame {} out of range",
                self.selected
            )));
        }

        Ok(())
    }

    fn frame(&self, frame: FrameId) -> Option<&SnapshotFrame> {
        self.frames.get(frame.0)
    }
}

impl DebuggerCore for Snapshot {
    fn newest_frame(&self) -> Result<FrameId, CoreError> {
        if self.frames.is_empty() {
            return Err(CoreError::NoStack);
        }
        Ok(FrameId(0))
    }

    fn older_frame(&self, frame: FrameId) -> Result<Option<FrameId>, CoreError> {
        if frame.0 >= self.frames.len() {
            return Err(CoreError::UnknownFrame(frame));
        }
        if frame.0 + 1 < self.frames.len() {
            return Ok(Some(FrameId(frame.0 + 1)));
        }
        match &self.unwind_error {
            Some(reason) => Err(CoreError::Unwind(reason.clone())),
            None => Ok(None),
        }
    }

    fn selected_frame(&self) -> Result<FrameId, CoreError> {
        if self.frames.is_empty() {
            return Err(CoreError::NoStack);
        }
        Ok(FrameId(self.selected))
    }

    fn frame_type(&self, frame: FrameId) -> FrameType {
        self.frame(frame).map(|f| f.frame_type).unwrap_or_default()
    }

    fn frame_pc(&self, frame: FrameId) -> Address {
        self.frame(frame).map(|f| f.pc).unwrap_or(0)
    }

    fn frame_name(&self, frame: FrameId) -> Option<String> {
        self.frame(frame).and_then(|f| f.name.clone())
    }

    fn find_sal(&self, frame: FrameId) -> SymtabAndLine {
        self.frame(frame).map(|f| f.sal.clone()).unwrap_or_default()
    }

    fn frame_block(&self, frame: FrameId) -> Result<BlockId, CoreError> {
        self.frame(frame)
            .ok_or(CoreError::UnknownFrame(frame))?
            .block
            .ok_or(CoreError::NoBlock(frame))
    }

    fn frame_function(&self, frame: FrameId) -> Option<Symbol> {
        let name = self.frame(frame)?.function.clone()?;
        Some(Symbol {
            linkage_name: name.clone(),
            name,
            address_class: AddressClass::Other,
            is_argument: false,
            is_constant: false,
            is_function: true,
            is_variable: false,
        })
    }

    fn block(&self, block: BlockId) -> Result<&Block, CoreError> {
        self.blocks.get(block.0).ok_or(CoreError::UnknownBlock(block))
    }

    fn lookup_symbol(&self, name: &str, block: BlockId) -> Option<Symbol> {
        let mut cur = Some(block);
        // validate() guarantees chains end within blocks.len() steps
        for _ in 0..=self.blocks.len() {
            let b = self.blocks.get(cur?.0)?;
            if let Some(sym) = b.symbols.iter().find(|s| s.name == name) {
                return Some(sym.clone());
            }
            cur = b.superblock;
        }
        None
    }

    fn read_var(&self, frame: FrameId, symbol: &Symbol) -> Result<Option<String>, CoreError> {
        let f = self.frame(frame).ok_or(CoreError::UnknownFrame(frame))?;
        match f.values.get(&symbol.name) {
            Some(SnapshotValue::Value(v)) => Ok(Some(v.clone())),
            Some(SnapshotValue::Error(msg)) => Err(CoreError::Other(msg.clone())),
            Some(SnapshotValue::Unreadable(addr)) => Err(CoreError::Memory(*addr)),
            Some(SnapshotValue::OptimizedOut) => Err(CoreError::OptimizedOut),
            Some(SnapshotValue::Absent) | None => Ok(None),
        }
    }

    fn solib_name(&self, pc: Address) -> Option<String> {
        self.solibs
            .iter()
            .find(|lib| lib.start <= pc && pc < lib.end)
            .map(|lib| lib.name.clone())
    }
}
