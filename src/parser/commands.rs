use super::types::ConsoleLine;
use crate::error::BacktraceError;

/// Normalize whitespace in command
pub fn normalize_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check if line is a comment
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Parse one console line into the action it requests.
pub fn parse_console_line(line: &str) -> Result<ConsoleLine, BacktraceError> {
    let line = normalize_whitespace(line);
    if line.is_empty() || is_comment(&line) {
        return Ok(ConsoleLine::Empty);
    }

    let (word, rest) = match line.split_once(' ') {
        Some((w, r)) => (w, r.trim()),
        None => (line.as_str(), ""),
    };

    match word {
        "q" | "quit" => Ok(ConsoleLine::Quit),
        "help" => Ok(ConsoleLine::Help((!rest.is_empty()).then(|| rest.to_string()))),
        "set" => {
            let mut words = rest.split(' ').filter(|w| !w.is_empty());
            match (words.next(), words.next(), words.next()) {
                (Some(param), Some(value), None) => Ok(ConsoleLine::Set {
                    param: param.to_string(),
                    value: value.to_string(),
                }),
                _ => Err(BacktraceError::usage("Usage: set PARAMETER VALUE")),
            }
        }
        "show" => {
            if rest.is_empty() || rest.contains(' ') {
                return Err(BacktraceError::usage("Usage: show PARAMETER"));
            }
            Ok(ConsoleLine::Show(rest.to_string()))
        }
        "p" | "print" => {
            let (function, args) = parse_function_call(rest)?;
            Ok(ConsoleLine::Print { function, args })
        }
        _ => Ok(ConsoleLine::Command {
            name: word.to_string(),
            arg: rest.to_string(),
        }),
    }
}

/// Split `$name(a, "b", ...)` into the function name and its string arguments.
pub fn parse_function_call(expr: &str) -> Result<(String, Vec<String>), BacktraceError> {
    let bad = || BacktraceError::usage(format!("Cannot evaluate \"{}\": expected $function(args...)", expr));

    let body = expr.trim().strip_prefix('$').ok_or_else(bad)?;
    let (name, rest) = body.split_once('(').ok_or_else(bad)?;
    let inner = rest.trim_end().strip_suffix(')').ok_or_else(bad)?;

    let name = name.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(bad());
    }

    if inner.trim().is_empty() {
        return Ok((name.to_string(), Vec::new()));
    }

    let mut args = Vec::new();
    for piece in inner.split(',') {
        let tokens = shlex::split(piece.trim()).ok_or_else(bad)?;
        match tokens.as_slice() {
            [single] => args.push(single.clone()),
            _ => return Err(bad()),
        }
    }

    Ok((name.to_string(), args))
}
