use clap::Parser;
use filtering_backtrace::config::Settings;
use filtering_backtrace::debugger::DebugContext;
use filtering_backtrace::executor::{Console, Flow};
use filtering_backtrace::filter::HideFunctions;
use filtering_backtrace::inferior::Snapshot;
use filtering_backtrace::logging;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Filtering backtraces over a captured program snapshot.
#[derive(Debug, Parser)]
#[command(name = "filtering-backtrace", version)]
struct Cli {
    /// JSON snapshot of the stopped program
    snapshot: PathBuf,

    /// Settings file (defaults to $FBT_CONFIG or ./filtering-backtrace.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with reverse-backtrace on
    #[arg(long)]
    reverse: bool,

    /// Register a filter hiding frames of this function (repeatable)
    #[arg(long = "hide", value_name = "FUNCTION")]
    hide: Vec<String>,

    /// Run these commands and exit instead of reading the console
    #[arg(short = 'x', long = "execute", value_name = "COMMAND")]
    execute: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let settings = match Settings::load(&config_path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init_logging(&settings.log_level) {
        eprintln!("❌ {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli, settings, config_path) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "session failed");
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, mut settings: Settings, config_path: PathBuf) -> filtering_backtrace::Result<ExitCode> {
    let snapshot = Snapshot::load(&cli.snapshot)?;
    info!(frames = snapshot.frames.len(), path = %cli.snapshot.display(), "snapshot loaded");

    if cli.reverse {
        settings.reverse_backtrace = true;
    }

    let mut ctx = DebugContext::new(Box::new(snapshot), settings)?.with_settings_path(config_path);
    if !cli.hide.is_empty() {
        ctx.filters_mut().push(HideFunctions::new(cli.hide.clone()));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.execute.is_empty() {
        let mut console = Console::new(&mut ctx, false);
        for line in &cli.execute {
            match console.execute_line(line, &mut out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    out.flush()?;
                    eprintln!("{}", e);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        out.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut console = Console::new(&mut ctx, interactive);
    console.run(stdin.lock(), &mut out, &mut io::stderr())?;
    Ok(ExitCode::SUCCESS)
}
