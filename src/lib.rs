//! Filtering backtraces for an interactive debugger.
//!
//! Frames come from a [`inferior::DebuggerCore`], flow through the filters in a
//! [`filter::FilterRegistry`], get numbered, optionally reversed and sliced,
//! and are rendered one line each by [`frame::FrameWrapper::describe`].

pub mod backtrace;
pub mod config;
pub mod debugger;
pub mod error;
pub mod executor;
pub mod filter;
pub mod frame;
pub mod inferior;
pub mod logging;
pub mod parser;
pub mod scope;

pub use error::{BacktraceError, CoreError, Result};
