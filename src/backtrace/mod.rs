//! The filtering backtrace: frame walk, filters, numbering, reversal and
//! slicing, then one rendered line per frame.

mod command;
mod pipeline;

pub use command::{reverse_backtrace_parameter, FilteringBacktrace, BACKTRACE_COMMAND, REVERSE_BACKTRACE};
pub use pipeline::{arrange, final_n, reverse_iter, select_range, write_backtrace, NumberedFrame};
