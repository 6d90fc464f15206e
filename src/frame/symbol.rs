use super::FrameWrapper;
use crate::inferior::{AddressClass, BlockId, Symbol};
use std::borrow::Cow;
use std::io::{self, Write};
use tracing::debug;

/// Placeholder written when a read succeeds but yields no value.
pub const NO_VALUE: &str = "???";

impl<'c> FrameWrapper<'c> {
    /// Prefer the symbol the linkage name resolves to in `block`, unless that
    /// resolution lives in a register.
    pub fn resolve_symbol<'s>(&self, sym: &'s Symbol, block: BlockId) -> Cow<'s, Symbol> {
        if sym.linkage_name.is_empty() {
            return Cow::Borrowed(sym);
        }
        match self.core().lookup_symbol(&sym.linkage_name, block) {
            Some(found) if found.address_class != AddressClass::Register => {
                if found != *sym {
                    debug!(
                        symbol = %sym.name,
                        resolved = %found.name,
                        "rendering symbol through its linkage-name resolution"
                    );
                }
                Cow::Owned(found)
            }
            _ => Cow::Borrowed(sym),
        }
    }

    /// Value text for `sym` in this frame. Read failures become the text.
    pub fn symbol_value(&self, sym: &Symbol) -> String {
        match self.core().read_var(self.raw(), sym) {
            Ok(Some(value)) => value,
            Ok(None) => NO_VALUE.to_string(),
            Err(e) => {
                debug!(symbol = %sym.name, frame = %self.raw(), error = %e, "value unreadable");
                e.to_string()
            }
        }
    }

    /// Writes `name=value` for one symbol.
    pub fn write_symbol(&self, out: &mut dyn Write, sym: &Symbol, block: BlockId) -> io::Result<()> {
        let sym = self.resolve_symbol(sym, block);
        write!(out, "{}={}", sym.name, self.symbol_value(&sym))
    }
}
