use super::types::BacktraceArgs;
use crate::error::BacktraceError;

impl BacktraceArgs {
    /// `[raw] [full] [COUNT]` in any order; the last COUNT wins.
    pub fn parse(arg: &str) -> Result<Self, BacktraceError> {
        let mut args = BacktraceArgs::default();

        for word in arg.split_whitespace() {
            match word {
                "raw" => args.filter = false,
                "full" => args.full = true,
                _ => {
                    args.count = word.parse::<i64>().map_err(|_| {
                        BacktraceError::usage(format!(
                            "Invalid backtrace argument \"{}\": expected raw, full or a frame count",
                            word
                        ))
                    })?;
                }
            }
        }

        Ok(args)
    }
}
