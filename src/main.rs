//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `iritool` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Choosing input and output framing
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufReader, BufWriter, IsTerminal};
use std::process::ExitCode;

use iritool::app::{arg_records, read_records, RecordWriter};
use iritool::config::IO_BUFFER_SIZE;
use iritool::initialization::init_logger_with;
use iritool::{is_broken_pipe, run_filter, Config};

fn main() -> Result<ExitCode> {
    let config = Config::parse();

    init_logger_with(config.effective_log_level().into(), config.log_format)
        .context("Failed to initialize logger")?;

    let stdout = io::stdout();
    let terminator = config.terminator(stdout.is_terminal());
    let mut writer = RecordWriter::new(
        BufWriter::with_capacity(IO_BUFFER_SIZE, stdout.lock()),
        config.format,
        terminator,
    );

    let result = if config.iris.is_empty() {
        let stdin = io::stdin();
        let reader = BufReader::with_capacity(IO_BUFFER_SIZE, stdin.lock());
        run_filter(
            &config,
            read_records(reader, config.input_delimiter()),
            &mut writer,
        )
    } else {
        run_filter(&config, arg_records(&config.iris), &mut writer)
    };

    match result {
        Ok(_) => Ok(ExitCode::SUCCESS),
        // Downstream closed early (e.g. `| head`); nothing left to report.
        Err(e) if is_broken_pipe(&e) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            // Records accepted before the failure still reach stdout.
            if let Err(flush_err) = writer.flush() {
                if !is_broken_pipe(&flush_err) {
                    eprintln!("iritool error: {:#}", flush_err);
                }
            }
            eprintln!("iritool error: {:#}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
