mod cli;
mod config;
mod dir_list;
mod header;
mod stamp;

use cli::{Cli, Command, LogLevel};
use config::StampConfig;
use stamp::{StampOptions, check_tree, stamp_tree};
use std::fmt as stdfmt;
use std::io::{IsTerminal, stderr};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Event, Level, Subscriber, error, info};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt as tracing_fmt;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

struct StampExitCode;

impl StampExitCode {
    /// Exit code used when `check` finds files without the header.
    fn headers_missing() -> ExitCode {
        ExitCode::from(1)
    }

    /// Exit code used for other errors (I/O errors, invalid arguments, etc.).
    fn any_error() -> ExitCode {
        ExitCode::from(255)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_level);

    // Change working directory if -C was specified
    if let Some(directory) = &cli.directory
        && let Err(e) = std::env::set_current_dir(directory)
    {
        error!(
            "Failed to change directory to {}: {}",
            directory.display(),
            e
        );
        return StampExitCode::any_error();
    }

    let result: anyhow::Result<ExitCode> = StampConfig::load(cli.config.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|config| match cli.command {
            Command::Stamp { path, dry_run } => handle_stamp(path, config, dry_run),
            Command::Check { path } => handle_check(path, config),
        });

    match result {
        Ok(exit_code) => exit_code,
        Err(err) => {
            error!("{err}");
            StampExitCode::any_error()
        }
    }
}

fn handle_stamp(path: PathBuf, config: StampConfig, dry_run: bool) -> anyhow::Result<ExitCode> {
    let result = stamp_tree(&path, &StampOptions { config, dry_run })?;

    if dry_run {
        info!("DRY RUN - no files were modified");
        info!(
            "Would stamp {} files, skipped {} already stamped",
            result.stamped.len(),
            result.skipped.len()
        );
    } else {
        info!(
            "Stamped {} files, skipped {} already stamped",
            result.stamped.len(),
            result.skipped.len()
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn handle_check(path: PathBuf, config: StampConfig) -> anyhow::Result<ExitCode> {
    let result = check_tree(&path, &config)?;

    if result.missing.is_empty() {
        info!(
            "All {} eligible files carry the header",
            result.files_checked
        );
        return Ok(ExitCode::SUCCESS);
    }

    for missing in &result.missing {
        println!("Missing header: {}", missing.display());
    }

    error!(
        "{} of {} eligible files are missing the header",
        result.missing.len(),
        result.files_checked
    );
    info!("Run 'authorstamp stamp' to add it.");

    Ok(StampExitCode::headers_missing())
}

/// Picks the filter directive: explicit flags win over RUST_LOG, which wins
/// over the `warn` default.
fn filter_directive(verbose: u8, log_level: Option<LogLevel>) -> Option<&'static str> {
    if let Some(level) = log_level {
        return Some(level.as_filter());
    }

    match verbose {
        0 => None,
        1 => Some("info"),
        _ => Some("debug"),
    }
}

fn init_tracing(verbose: u8, log_level: Option<LogLevel>) {
    let stderr_is_terminal = stderr().is_terminal();
    let formatter = EmojiFormatter { stderr_is_terminal };

    let filter = match filter_directive(verbose, log_level) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let fmt_layer = tracing_fmt::layer()
        .event_format(formatter)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

struct EmojiFormatter {
    stderr_is_terminal: bool,
}

impl<S, N> FormatEvent<S, N> for EmojiFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> stdfmt::Result {
        if self.stderr_is_terminal {
            match *event.metadata().level() {
                Level::DEBUG => write!(writer, "🔍 ")?,
                Level::INFO => write!(writer, "ℹ️ ")?,
                Level::WARN => write!(writer, "⚠️  ")?,
                Level::ERROR => write!(writer, "❌️ ")?,
                _ => write!(writer, "🔬 ")?,
            }
        } else {
            match *event.metadata().level() {
                Level::DEBUG => writer.write_str("DEBUG: ")?,
                Level::INFO => writer.write_str("INFO: ")?,
                Level::WARN => writer.write_str("WARN: ")?,
                Level::ERROR => writer.write_str("ERROR: ")?,
                _ => writer.write_str("TRACE: ")?,
            }
        }

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
