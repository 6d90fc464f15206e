mod backtrace_args;
mod commands;
mod types;

pub use commands::{is_comment, normalize_whitespace, parse_console_line, parse_function_call};
pub use types::{BacktraceArgs, ConsoleLine};
