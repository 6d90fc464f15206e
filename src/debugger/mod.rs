mod commands;
mod context;
mod parameters;

pub use commands::{Command, CommandClass, CommandRegistry, ConvenienceFunction, FunctionValue};
pub use context::DebugContext;
pub use parameters::{parse_bool, Parameter, Parameters};
