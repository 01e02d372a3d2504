#![forbid(unsafe_code)]

mod config;
mod output;
mod tui;

use anyhow::Context;
use checklist_core::ErrorCode;
use clap::{Parser, Subcommand};
use output::{ChecklistView, CliError, OutputMode};
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt, fmt::writer::BoxMakeWriter, prelude::*,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "todo: a checklist panel for the terminal",
    long_about = None
)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read settings and seed items from this TOML file.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Open the interactive panel (default)",
        after_help = "KEYS:\n    j/k, arrows  move\n    g/G          first/last\n    space/enter  toggle\n    a            add\n    d            delete\n    s            sort\n    esc          unselect\n    q            quit"
    )]
    Tui,

    #[command(
        about = "Print the checklist",
        long_about = "Print the configured checklist, unchecked items first.",
        after_help = "EXAMPLES:\n    # Print for humans\n    todo show\n\n    # Emit machine-readable output\n    todo show --json"
    )]
    Show {
        /// Output format.
        #[arg(long, value_enum)]
        format: Option<OutputMode>,

        /// Shorthand for `--format json`.
        #[arg(long, hide = true)]
        json: bool,
    },
}

/// Ceiling on what reaches the log writer. The panel owns stderr's terminal
/// while it runs, so only warnings get through unless logs go to a file.
fn log_ceiling(interactive: bool, log_file: Option<&Path>) -> LevelFilter {
    if interactive && log_file.is_none() {
        LevelFilter::WARN
    } else {
        LevelFilter::TRACE
    }
}

fn init_tracing(verbose: bool, interactive: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("CHECKLIST_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "checklist_core=debug,todo=debug,info"
        } else {
            "checklist_core=info,todo=info,warn"
        })
    });

    let format = env::var("CHECKLIST_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let (writer, ansi) = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(io::stderr), true),
    };

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(log_ceiling(interactive, log_file));

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(writer))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_ansi(ansi).with_writer(writer))
                .init();
        }
    }
    Ok(())
}

fn load_checklist(cli: &Cli) -> Result<(String, checklist_core::Checklist), config::ConfigError> {
    let fallback = config::default_config_path();
    let settings = config::resolve_config(cli.config.as_deref(), fallback.as_deref())?;
    Ok((settings.title.clone(), settings.build_checklist()))
}

fn run_show(cli: &Cli, mode: OutputMode) -> anyhow::Result<()> {
    let (title, list) = load_checklist(cli)?;
    let view = ChecklistView::from_checklist(&title, &list);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::render_checklist(mode, &view, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run_tui(cli: &Cli) -> anyhow::Result<()> {
    let (title, list) = load_checklist(cli)?;
    info!(items = list.len(), "opening panel");
    let mut panel = tui::panel::TodoPanel::new(title, list);
    tui::run(&mut panel)?;
    let list = panel.checklist();
    info!(
        items = list.len(),
        checked = list.checked_items().len(),
        "panel closed"
    );
    Ok(())
}

/// Best-effort code for a top-level failure.
fn error_code(err: &anyhow::Error) -> ErrorCode {
    if let Some(config_err) = err.downcast_ref::<config::ConfigError>() {
        return config_err.code();
    }
    if let Some(list_err) = err.downcast_ref::<checklist_core::ChecklistError>() {
        return list_err.code();
    }
    if let Some(tui_err) = err.downcast_ref::<tui::TuiError>() {
        return tui_err.code();
    }
    ErrorCode::InternalUnexpected
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let interactive = !matches!(cli.command, Some(Commands::Show { .. }));
    init_tracing(cli.verbose, interactive, cli.log_file.as_deref())?;

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let (result, mode) = match &cli.command {
        Some(Commands::Show { format, json }) => {
            let mode = output::resolve_output_mode(*format, *json);
            (run_show(&cli, mode), mode)
        }
        Some(Commands::Tui) | None => (run_tui(&cli), OutputMode::Pretty),
    };

    if let Err(err) = result {
        let cli_error = CliError::new(format!("{err:#}")).with_code(error_code(&err));
        output::render_error(mode, &cli_error)?;
        std::process::exit(1);
    }
    Ok(())
}
