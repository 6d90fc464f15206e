use super::commands::{CommandRegistry, FunctionValue};
use super::parameters::{parse_bool, Parameters};
use crate::backtrace::{reverse_backtrace_parameter, FilteringBacktrace, REVERSE_BACKTRACE};
use crate::config::Settings;
use crate::error::{BacktraceError, Result};
use crate::filter::FilterRegistry;
use crate::inferior::DebuggerCore;
use crate::scope::InScope;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Everything one debugging session needs: the core being queried, the
/// registered filters, parameters and commands.
pub struct DebugContext {
    core: Box<dyn DebuggerCore>,
    filters: FilterRegistry,
    parameters: Parameters,
    commands: CommandRegistry,
    settings: Settings,
    settings_path: Option<PathBuf>,
}

impl DebugContext {
    /// Builds a context with the stack commands, the `reverse-backtrace`
    /// parameter and `$in_scope` installed.
    pub fn new(core: Box<dyn DebuggerCore>, settings: Settings) -> Result<Self> {
        let mut ctx = Self {
            core,
            filters: FilterRegistry::new(),
            parameters: Parameters::new(),
            commands: CommandRegistry::new(),
            settings,
            settings_path: None,
        };

        ctx.parameters
            .add(reverse_backtrace_parameter(ctx.settings.reverse_backtrace));
        ctx.commands.register(Box::new(FilteringBacktrace))?;
        ctx.commands.register_function(Box::new(InScope))?;

        Ok(ctx)
    }

    /// Persist parameter changes to `path`.
    pub fn with_settings_path(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }

    pub fn core(&self) -> &dyn DebuggerCore {
        self.core.as_ref()
    }

    pub fn filters(&self) -> &FilterRegistry {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterRegistry {
        &mut self.filters
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn commands_mut(&mut self) -> &mut CommandRegistry {
        &mut self.commands
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn reverse_backtrace(&self) -> bool {
        self.parameters.value(REVERSE_BACKTRACE).unwrap_or(false)
    }

    /// `set NAME VALUE`
    ///
    /// Persisted parameters are written out first; if that fails nothing changes.
    pub fn set_parameter(&mut self, name: &str, value: &str) -> Result<()> {
        let value = parse_bool(value)?;

        if name != REVERSE_BACKTRACE {
            return self.parameters.set(name, value);
        }

        let mut settings = self.settings.clone();
        settings.reverse_backtrace = value;
        if let Some(path) = &self.settings_path {
            settings.save(path)?;
        }
        self.parameters.set(name, value)?;
        self.settings = settings;
        Ok(())
    }

    /// `show NAME`
    pub fn show_parameter(&self, name: &str) -> Result<String> {
        let param = self
            .parameters
            .get(name)
            .ok_or_else(|| BacktraceError::usage(format!("No parameter named \"{}\".", name)))?;
        let state = if param.value() { "on" } else { "off" };
        let subject = param
            .show_doc
            .strip_prefix("Show ")
            .unwrap_or(&param.show_doc)
            .trim_end_matches('.');
        let mut chars = subject.chars();
        let subject = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => format!("Parameter {}", param.name),
        };
        Ok(format!("{} is {}.", subject, state))
    }

    pub fn execute(&self, name: &str, arg: &str, from_tty: bool, out: &mut dyn Write) -> Result<()> {
        let command = self
            .commands
            .get(name)
            .ok_or_else(|| BacktraceError::usage(format!("Undefined command: \"{}\".", name)))?;
        debug!(command = %name, arg = %arg, from_tty, "invoking command");
        command.invoke(self, arg, from_tty, out)
    }

    pub fn call_function(&self, name: &str, args: &[String]) -> Result<FunctionValue> {
        let function = self
            .commands
            .function(name)
            .ok_or_else(|| BacktraceError::usage(format!("No function \"${}\".", name)))?;
        function.invoke(self, args)
    }
}
