//! `$in_scope(name, ...)`: whether every named value is visible from the
//! selected frame.

use crate::debugger::{ConvenienceFunction, DebugContext, FunctionValue};
use crate::error::{BacktraceError, Result};
use crate::frame::BlockChain;
use crate::inferior::{BlockId, DebuggerCore};
use std::collections::BTreeSet;
use tracing::debug;

/// True when every name in `names` is declared as an argument, constant,
/// function or variable somewhere on the chain starting at `start`.
/// A match in an outer block counts even when an inner block shadows it.
/// A block the core fails to return is an error, not the end of the chain.
pub fn names_visible_from<S: AsRef<str>>(
    core: &dyn DebuggerCore,
    start: Option<BlockId>,
    names: &[S],
) -> Result<bool> {
    let wanted: BTreeSet<&str> = names.iter().map(AsRef::as_ref).collect();
    let mut found = BTreeSet::new();

    for entry in BlockChain::new(core, start) {
        let (_, block) = entry?;
        for sym in block.symbols.iter().filter(|s| s.is_value()) {
            if let Some(name) = wanted.get(sym.name.as_str()) {
                found.insert(*name);
            }
        }
        if found.len() == wanted.len() {
            break;
        }
    }

    Ok(found == wanted)
}

/// Scope check from the innermost block of the selected frame.
pub fn in_scope<S: AsRef<str>>(core: &dyn DebuggerCore, names: &[S]) -> Result<bool> {
    if names.is_empty() {
        return Err(BacktraceError::usage("in_scope takes at least one argument"));
    }

    let frame = core.selected_frame()?;
    let block = match core.frame_block(frame) {
        Ok(block) => Some(block),
        Err(e) => {
            debug!(frame = %frame, error = %e, "no block for selected frame");
            None
        }
    };

    names_visible_from(core, block, names)
}

pub struct InScope;

impl ConvenienceFunction for InScope {
    fn name(&self) -> &str {
        "in_scope"
    }

    fn doc(&self) -> &str {
        "Return true if all the given variables or macros are in scope.\n\
         Takes one argument for each variable name to be checked."
    }

    fn invoke(&self, ctx: &DebugContext, args: &[String]) -> Result<FunctionValue> {
        in_scope(ctx.core(), args).map(FunctionValue::Bool)
    }
}
