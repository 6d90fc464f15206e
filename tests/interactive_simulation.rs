// tests/interactive_simulation.rs
// Drives the console the way a user session would.

mod common;

use common::*;
use filtering_backtrace::config::Settings;
use filtering_backtrace::debugger::DebugContext;
use filtering_backtrace::executor::{Console, Flow};
use filtering_backtrace::filter::HideFunctions;
use std::io::Cursor;

fn session(script: &str, ctx: &mut DebugContext) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    Console::new(ctx, false)
        .run(Cursor::new(script.to_string()), &mut out, &mut err)
        .expect("console io");
    (render(out), render(err))
}

fn context() -> DebugContext {
    DebugContext::new(Box::new(three_frames()), Settings::default()).expect("context builds")
}

#[cfg(test)]
mod interactive_tests {
    use super::*;

    #[test]
    fn test_backtrace_then_reverse() {
        let mut ctx = context();
        let script = "new-backtrace\n\
                      set reverse-backtrace on\n\
                      show reverse-backtrace\n\
                      new-backtrace 1\n";
        let (out, err) = session(script, &mut ctx);

        let expected = format!(
            "{}{}{}Whether backtraces will be printed in reverse order is on.\n{}",
            BAR_LINE, FOO_LINE, MAIN_LINE, MAIN_LINE
        );
        assert_eq!(out, expected);
        assert_eq!(err, "");
        assert!(ctx.reverse_backtrace());
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let mut ctx = context();
        let script = "frobnicate\n\
                      new-backtrace sideways\n\
                      set reverse-backtrace maybe\n\
                      print $in_scope()\n\
                      new-backtrace -1\n";
        let (out, err) = session(script, &mut ctx);

        assert_eq!(out, MAIN_LINE);
        let errors: Vec<&str> = err.lines().collect();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0], "Undefined command: \"frobnicate\".");
        assert!(errors[1].contains("sideways"));
        assert_eq!(errors[2], "\"on\" or \"off\" expected.");
        assert_eq!(errors[3], "in_scope takes at least one argument");
    }

    #[test]
    fn test_print_in_scope_numbers_results() {
        let mut ctx = context();
        let (out, err) = session("print $in_scope(x)\np $in_scope(\"x\", y)\n", &mut ctx);
        assert_eq!(out, "$1 = true\n$2 = false\n");
        assert_eq!(err, "");
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut ctx = context();
        let (out, _) = session("new-backtrace 1\nquit\nnew-backtrace\n", &mut ctx);
        assert_eq!(out, BAR_LINE);
    }

    #[test]
    fn test_execute_line_reports_flow() {
        let mut ctx = context();
        let mut console = Console::new(&mut ctx, true);
        let mut out = Vec::new();
        assert_eq!(console.execute_line("# comment", &mut out).unwrap(), Flow::Continue);
        assert_eq!(console.execute_line("q", &mut out).unwrap(), Flow::Quit);
        assert!(out.is_empty());
    }

    #[test]
    fn test_registered_filter_applies_until_raw() {
        let mut ctx = context();
        ctx.filters_mut().push(HideFunctions::new(["foo"]));
        let (out, _) = session("new-backtrace\nnew-backtrace raw\n", &mut ctx);
        assert_eq!(
            out,
            format!("{}{}{}{}{}", BAR_LINE, MAIN_LINE, BAR_LINE, FOO_LINE, MAIN_LINE)
        );
    }

    #[test]
    fn test_help_lists_installed_names() {
        let mut ctx = context();
        let (out, _) = session("help\nhelp new-backtrace\n", &mut ctx);
        assert!(out.contains("new-backtrace (stack) -- Print backtrace of all stack frames"));
        assert!(out.contains("reverse-backtrace -- Enable or disable reverse backtraces."));
        assert!(out.contains("$in_scope -- Return true if all the given variables"));
        assert!(out.contains("Use of the 'raw' qualifier avoids any filtering"));
    }

    #[test]
    fn test_duplicate_command_is_rejected() {
        let mut ctx = context();
        let err = ctx
            .commands_mut()
            .register(Box::new(filtering_backtrace::backtrace::FilteringBacktrace))
            .unwrap_err();
        assert!(err.to_string().contains("already defined"));
    }
}

#[cfg(test)]
mod settings_tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!settings.reverse_backtrace);
    }

    #[test]
    fn test_reverse_setting_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut ctx = context().with_settings_path(path.clone());
        ctx.set_parameter("reverse-backtrace", "on").unwrap();

        let saved = Settings::load(&path).unwrap();
        assert!(saved.reverse_backtrace);

        let restored = DebugContext::new(Box::new(three_frames()), saved).unwrap();
        assert!(restored.reverse_backtrace());
    }

    #[test]
    fn test_failed_save_leaves_setting_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("settings.json");

        let mut ctx = context().with_settings_path(path.clone());
        let err = ctx.set_parameter("reverse-backtrace", "on").unwrap_err();
        assert!(matches!(err, filtering_backtrace::BacktraceError::Io(_)));

        assert!(!ctx.reverse_backtrace());
        assert!(!ctx.settings().reverse_backtrace);
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, filtering_backtrace::BacktraceError::Config(_)));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "reverse_backtrace": true }"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert!(settings.reverse_backtrace);
        assert_eq!(settings.log_level, "warn");
    }
}
