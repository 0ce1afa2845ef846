use std::io::{self, Write};
use std::process::ExitCode;

use colored::*;
use dialr_common::config::Config;
use dialr_common::{info, success, warn};
use dialr_core::error::InputError;
use dialr_core::{parser, password};
use tracing::error;

/// Exit status when the input file cannot be opened.
pub const EXIT_FILE_ACCESS: u8 = 1;
/// Exit status for every other failure (malformed input, unreadable data).
pub const EXIT_FAILURE: u8 = 2;

/// Parses the configured input, runs it on the dial and writes the password
/// to stdout as a single line.
pub fn count(cfg: &Config) -> anyhow::Result<()> {
    info!("Reading rotations from {}", cfg.input.display());
    let rotations = parser::parse_file(&cfg.input)?;

    if rotations.is_empty() {
        warn!("{} contains no rotations", cfg.input.display());
    }

    let password: u64 = password::count_zeros(&rotations, cfg.method);
    success!(
        "{} rotations applied, counting by {}: {}",
        rotations.len(),
        cfg.method,
        password.to_string().green().bold()
    );

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{password}")?;
    stdout.flush()?;
    Ok(())
}

/// Logs the failure on stderr and picks the exit status for it.
pub fn report_failure(err: &anyhow::Error) -> ExitCode {
    error!("{err:#}");

    match err.downcast_ref::<InputError>() {
        Some(input_err) if input_err.is_file_access() => ExitCode::from(EXIT_FILE_ACCESS),
        _ => ExitCode::from(EXIT_FAILURE),
    }
}
