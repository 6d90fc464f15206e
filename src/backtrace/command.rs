use super::pipeline::write_backtrace;
use crate::debugger::{Command, CommandClass, DebugContext, Parameter};
use crate::error::Result;
use crate::parser::BacktraceArgs;
use std::io::Write;

pub const BACKTRACE_COMMAND: &str = "new-backtrace";
pub const REVERSE_BACKTRACE: &str = "reverse-backtrace";

pub fn reverse_backtrace_parameter(value: bool) -> Parameter {
    Parameter::new(REVERSE_BACKTRACE, CommandClass::Stack, value).with_docs(
        "The new-backtrace command can show backtraces in 'reverse' order.\n\
         This means that the innermost frame will be printed last.\n\
         Note that reverse backtraces are more expensive to compute.",
        "Enable or disable reverse backtraces.",
        "Show whether backtraces will be printed in reverse order.",
    )
}

/// Backtrace that runs frames through the registered filters.
pub struct FilteringBacktrace;

impl Command for FilteringBacktrace {
    fn name(&self) -> &str {
        BACKTRACE_COMMAND
    }

    fn class(&self) -> CommandClass {
        CommandClass::Stack
    }

    fn doc(&self) -> &str {
        "Print backtrace of all stack frames, or innermost COUNT frames.\n\
         With a negative argument, print outermost -COUNT frames.\n\
         Use of the 'full' qualifier also prints the values of the local variables.\n\
         Use of the 'raw' qualifier avoids any filtering by loadable modules."
    }

    fn invoke(&self, ctx: &DebugContext, arg: &str, _from_tty: bool, out: &mut dyn Write) -> Result<()> {
        let args = BacktraceArgs::parse(arg)?;
        write_backtrace(ctx.core(), ctx.filters(), ctx.reverse_backtrace(), &args, out)?;
        Ok(())
    }
}
