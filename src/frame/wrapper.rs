use super::block_chain::BlockChain;
use crate::error::Result;
use crate::inferior::{Address, BlockId, DebuggerCore, FrameId, FrameType, Symbol, SymtabAndLine};
use std::fmt;
use std::io::Write;
use tracing::debug;

/// Uniform view of one frame reported by the debugger core.
///
/// `level` is the frame's depth from the innermost frame; it travels with the
/// frame through any filters so numbering never depends on filter output.
#[derive(Clone, Copy)]
pub struct FrameWrapper<'c> {
    core: &'c dyn DebuggerCore,
    frame: FrameId,
    level: usize,
}

impl<'c> FrameWrapper<'c> {
    pub fn new(core: &'c dyn DebuggerCore, frame: FrameId, level: usize) -> Self {
        Self { core, frame, level }
    }

    /// The underlying frame handle, for queries not wrapped here.
    pub fn raw(&self) -> FrameId {
        self.frame
    }

    pub fn core(&self) -> &'c dyn DebuggerCore {
        self.core
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn frame_type(&self) -> FrameType {
        self.core.frame_type(self.frame)
    }

    pub fn pc(&self) -> Address {
        self.core.frame_pc(self.frame)
    }

    /// Function name, or empty when the core cannot name the frame.
    pub fn name(&self) -> String {
        self.core.frame_name(self.frame).unwrap_or_default()
    }

    pub fn find_sal(&self) -> SymtabAndLine {
        self.core.find_sal(self.frame)
    }

    pub fn function(&self) -> Option<Symbol> {
        self.core.frame_function(self.frame)
    }

    /// Innermost block, or `None` when the core cannot resolve one.
    pub fn block(&self) -> Option<BlockId> {
        match self.core.frame_block(self.frame) {
            Ok(block) => Some(block),
            Err(e) => {
                debug!(frame = %self.frame, error = %e, "no block for frame");
                None
            }
        }
    }

    pub fn blocks(&self) -> BlockChain<'c> {
        BlockChain::new(self.core, self.block())
    }

    pub fn print_frame_args(&self, out: &mut dyn Write) -> Result<()> {
        let function_block = self
            .blocks()
            .find(|entry| entry.as_ref().map_or(true, |(_, b)| b.function.is_some()))
            .transpose()?;
        let Some((block_id, block)) = function_block else {
            return Ok(());
        };

        let mut first = true;
        for sym in block.symbols.iter().filter(|s| s.is_argument) {
            if !first {
                out.write_all(b", ")?;
            }
            self.write_symbol(out, sym, block_id)?;
            first = false;
        }
        Ok(())
    }

    pub fn print_frame_locals(&self, out: &mut dyn Write) -> Result<()> {
        for entry in self.blocks() {
            let (block_id, block) = entry?;
            if block.is_global || block.is_static {
                break;
            }
            for sym in block.symbols.iter().filter(|s| !s.is_argument) {
                self.write_symbol(out, sym, block_id)?;
                out.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    /// Renders the frame line, and with `full` its locals, one per line.
    ///
    /// Write failures and block lookup failures are returned; a frame with no
    /// block at all just prints without arguments.
    pub fn describe(&self, out: &mut dyn Write, full: bool) -> Result<()> {
        match self.frame_type() {
            FrameType::Dummy => {
                out.write_all(b" <function called from debugger>\n")?;
                return Ok(());
            }
            FrameType::SigTramp => {
                out.write_all(b" <signal handler called>\n")?;
                return Ok(());
            }
            FrameType::Normal => {}
        }

        let sal = self.find_sal();
        let pc = self.pc();
        let raw_name = self.name();
        let name = if raw_name.is_empty() { "??" } else { raw_name.as_str() };

        if pc != sal.pc || !sal.has_file() {
            write!(out, " 0x{:08x} in", pc)?;
        }
        write!(out, " {} (", name)?;
        self.print_frame_args(out)?;
        out.write_all(b")")?;

        if let Some(file) = sal.filename.as_deref().filter(|f| !f.is_empty()) {
            write!(out, " at {}:{}", file, sal.line)?;
        }

        if raw_name.is_empty() || !sal.has_file() {
            if let Some(lib) = self.core.solib_name(pc).filter(|l| !l.is_empty()) {
                write!(out, " from {}", lib)?;
            }
        }

        out.write_all(b"\n")?;

        if full {
            self.print_frame_locals(out)?;
        }
        Ok(())
    }
}

impl fmt::Debug for FrameWrapper<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameWrapper")
            .field("frame", &self.frame)
            .field("level", &self.level)
            .finish()
    }
}
