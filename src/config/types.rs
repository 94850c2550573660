//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::constants::{NEWLINE, NUL};
use crate::iri::{ParseOptions, ParseProfile};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl LogLevel {
    /// The level `steps` notches more verbose, saturating at `Trace`.
    pub fn raised(self, steps: u8) -> LogLevel {
        let all = [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let current = all.iter().position(|l| *l == self).unwrap_or(0);
        all[(current + steps as usize).min(all.len() - 1)]
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Shape of each output record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The normalized IRI only
    Plain,
    /// One JSON object with every component and derived field
    Json,
}

/// Separator written after each output record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terminator {
    Newline,
    Nul,
}

impl Terminator {
    pub fn as_byte(self) -> u8 {
        match self {
            Terminator::Newline => NEWLINE,
            Terminator::Nul => NUL,
        }
    }
}

/// Command-line options and configuration.
///
/// This struct is generated by `clap` from the field attributes and can also
/// be built programmatically through `Default`.
///
/// # Examples
///
/// ```bash
/// # Normalize IRIs given as arguments
/// iritool 'https://example.com/a#top' 'http://b.example.com/'
///
/// # Filter a newline-delimited file down to links internal to a site
/// iritool --allow-missing-scheme --internal-to https://example.com < links.txt
///
/// # Emit every component as JSON lines
/// iritool --format json --newline < links.txt
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "iritool",
    version,
    about = "Parses IRIs/URLs and prints their normalized form."
)]
pub struct Config {
    /// IRIs to parse; records are read from stdin when none are given
    #[arg(value_name = "IRI")]
    pub iris: Vec<String>,

    /// Use the split profile (no params splitting, missing scheme always allowed)
    #[arg(long)]
    pub split: bool,

    /// Accept IRIs without a scheme instead of failing
    #[arg(long)]
    pub allow_missing_scheme: bool,

    /// Only emit IRIs sharing a registrable domain with this root IRI
    #[arg(long, value_name = "ROOT")]
    pub internal_to: Option<String>,

    /// Output record format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Stdin records are NUL-delimited instead of newline-delimited
    #[arg(short = 'z', long)]
    pub null_input: bool,

    /// Terminate output records with NUL (default when stdout is not a terminal)
    #[arg(short = '0', long, conflicts_with = "newline")]
    pub null: bool,

    /// Terminate output records with a newline (default on a terminal)
    #[arg(long)]
    pub newline: bool,

    /// Log and skip records that fail to parse instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Raise the log level one step per occurrence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iris: Vec::new(),
            split: false,
            allow_missing_scheme: false,
            internal_to: None,
            format: OutputFormat::Plain,
            null_input: false,
            null: false,
            newline: false,
            keep_going: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            verbose: 0,
        }
    }
}

impl Config {
    /// `--log-level` raised by each `-v`.
    pub fn effective_log_level(&self) -> LogLevel {
        self.log_level.raised(self.verbose)
    }

    pub fn profile(&self) -> ParseProfile {
        if self.split {
            ParseProfile::Split
        } else {
            ParseProfile::Full
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::default().allow_missing_scheme(self.allow_missing_scheme)
    }

    /// Output separator: explicit flags win, otherwise newline on a terminal
    /// and NUL when piped.
    pub fn terminator(&self, stdout_is_terminal: bool) -> Terminator {
        if self.null {
            Terminator::Nul
        } else if self.newline || stdout_is_terminal {
            Terminator::Newline
        } else {
            Terminator::Nul
        }
    }

    /// Input separator for stdin records.
    pub fn input_delimiter(&self) -> u8 {
        if self.null_input {
            NUL
        } else {
            NEWLINE
        }
    }
}
