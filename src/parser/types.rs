/// Parsed arguments of the backtrace command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BacktraceArgs {
    /// Run frames through the registered filters (cleared by `raw`).
    pub filter: bool,
    /// Print locals after each frame line.
    pub full: bool,
    /// Positive: innermost frames only. Negative: outermost frames only. Zero: all.
    pub count: i64,
}

impl Default for BacktraceArgs {
    fn default() -> Self {
        Self {
            filter: true,
            full: false,
            count: 0,
        }
    }
}

/// One line typed at the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    Empty,
    Quit,
    Help(Option<String>),
    Set { param: String, value: String },
    Show(String),
    Print { function: String, args: Vec<String> },
    Command { name: String, arg: String },
}
