use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod help_text;

/// Stamp author headers onto trees of source files
#[derive(Parser, Debug)]
#[command(
    name = "authorstamp",
    version,
    about,
    long_about = help_text::ROOT_LONG_ABOUT
)]
pub struct Cli {
    /// Change to DIRECTORY before doing anything
    #[arg(short = 'C', value_name = "DIRECTORY", global = true)]
    pub directory: Option<PathBuf>,

    /// Increase log verbosity. Takes precedence over RUST_LOG. Repeat for more (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Set the log level. Takes precedence over RUST_LOG. Conflicts with --verbose
    #[arg(
        long,
        value_name = "LEVEL",
        value_enum,
        conflicts_with = "verbose",
        global = true
    )]
    pub log_level: Option<LogLevel>,

    /// Read header and extension overrides from a TOML file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prepend the author header to every eligible file that lacks it
    #[command(long_about = help_text::STAMP_LONG_ABOUT)]
    Stamp {
        /// Directory to stamp
        #[arg(value_name = "PATH", default_value = "src")]
        path: PathBuf,

        /// Report what would be stamped without writing any files
        #[arg(long)]
        dry_run: bool,
    },

    /// List eligible files missing the header, exit 1 if there are any
    #[command(long_about = help_text::CHECK_LONG_ABOUT)]
    Check {
        /// Directory to check
        #[arg(value_name = "PATH", default_value = "src")]
        path: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
