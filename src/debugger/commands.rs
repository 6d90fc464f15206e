use super::DebugContext;
use crate::error::{BacktraceError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use tracing::info;

/// Help category a command or parameter is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandClass {
    Stack,
}

impl fmt::Display for CommandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandClass::Stack => f.write_str("stack"),
        }
    }
}

/// A console command installed into a [`DebugContext`].
pub trait Command {
    fn name(&self) -> &str;

    fn class(&self) -> CommandClass;

    /// Help text; the first line is the summary.
    fn doc(&self) -> &str;

    fn invoke(&self, ctx: &DebugContext, arg: &str, from_tty: bool, out: &mut dyn Write) -> Result<()>;
}

/// Value produced by a convenience function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionValue {
    Bool(bool),
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// A `$name(...)` function callable from `print`.
pub trait ConvenienceFunction {
    fn name(&self) -> &str;

    fn doc(&self) -> &str;

    fn invoke(&self, ctx: &DebugContext, args: &[String]) -> Result<FunctionValue>;
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn Command>>,
    functions: BTreeMap<String, Box<dyn ConvenienceFunction>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: Box<dyn Command>) -> Result<()> {
        let name = command.name().to_string();
        if self.commands.contains_key(&name) {
            return Err(BacktraceError::Config(format!("command \"{}\" is already defined", name)));
        }
        info!(command = %name, class = %command.class(), "command registered");
        self.commands.insert(name, command);
        Ok(())
    }

    pub fn register_function(&mut self, function: Box<dyn ConvenienceFunction>) -> Result<()> {
        let name = function.name().to_string();
        if self.functions.contains_key(&name) {
            return Err(BacktraceError::Config(format!("function \"${}\" is already defined", name)));
        }
        info!(function = %name, "convenience function registered");
        self.functions.insert(name, function);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn function(&self, name: &str) -> Option<&dyn ConvenienceFunction> {
        self.functions.get(name).map(|f| f.as_ref())
    }

    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.values().map(|c| c.as_ref())
    }

    pub fn functions(&self) -> impl Iterator<Item = &dyn ConvenienceFunction> {
        self.functions.values().map(|f| f.as_ref())
    }
}
