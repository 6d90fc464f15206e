use crate::debugger::DebugContext;
use crate::error::Result;
use crate::parser::{parse_console_line, ConsoleLine};
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "(fbt) ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-oriented front end over a [`DebugContext`].
pub struct Console<'a> {
    ctx: &'a mut DebugContext,
    interactive: bool,
    history: usize,
}

impl<'a> Console<'a> {
    pub fn new(ctx: &'a mut DebugContext, interactive: bool) -> Self {
        Self {
            ctx,
            interactive,
            history: 0,
        }
    }

    pub fn execute_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        match parse_console_line(line)? {
            ConsoleLine::Empty => {}
            ConsoleLine::Quit => return Ok(Flow::Quit),
            ConsoleLine::Help(topic) => self.help(topic.as_deref(), out)?,
            ConsoleLine::Set { param, value } => self.ctx.set_parameter(&param, &value)?,
            ConsoleLine::Show(param) => writeln!(out, "{}", self.ctx.show_parameter(&param)?)?,
            ConsoleLine::Print { function, args } => {
                let value = self.ctx.call_function(&function, &args)?;
                self.history += 1;
                writeln!(out, "${} = {}", self.history, value)?;
            }
            ConsoleLine::Command { name, arg } => {
                self.ctx.execute(&name, &arg, self.interactive, out)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Reads lines until EOF or `quit`. Command errors go to `err` and the
    /// loop carries on.
    pub fn run<R: BufRead>(&mut self, input: R, out: &mut dyn Write, err: &mut dyn Write) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if self.interactive {
                write!(err, "{}", PROMPT)?;
                err.flush()?;
            }

            let Some(line) = lines.next() else { break };
            let line = line?;

            match self.execute_line(&line, out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    debug!(line = %line, error = %e, "command failed");
                    out.flush()?;
                    writeln!(err, "{}", e)?;
                }
            }
        }
        out.flush()
    }

    fn help(&self, topic: Option<&str>, out: &mut dyn Write) -> Result<()> {
        let commands = self.ctx.commands();

        if let Some(topic) = topic {
            if let Some(command) = commands.get(topic) {
                writeln!(out, "{}", command.doc())?;
            } else if let Some(function) = commands.function(topic.trim_start_matches('$')) {
                writeln!(out, "{}", function.doc())?;
            } else if let Some(param) = self.ctx.parameters().get(topic) {
                writeln!(out, "{}\n{}", param.set_doc, param.doc)?;
            } else {
                writeln!(out, "Undefined command: \"{}\".", topic)?;
            }
            return Ok(());
        }

        writeln!(out, "Commands:")?;
        for command in commands.commands() {
            let summary = command.doc().lines().next().unwrap_or_default();
            writeln!(out, "  {} ({}) -- {}", command.name(), command.class(), summary)?;
        }
        writeln!(out, "  set PARAMETER on|off, show PARAMETER, print $FUNCTION(ARGS), quit")?;

        writeln!(out, "Parameters:")?;
        for param in self.ctx.parameters().iter() {
            writeln!(out, "  {} -- {}", param.name, param.set_doc)?;
        }

        writeln!(out, "Functions:")?;
        for function in commands.functions() {
            let summary = function.doc().lines().next().unwrap_or_default();
            writeln!(out, "  ${} -- {}", function.name(), summary)?;
        }
        Ok(())
    }
}
