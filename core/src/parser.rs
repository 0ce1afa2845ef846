//! # Rotation Parser
//!
//! Reads a rotation list, one `<direction><clicks>` per line. Blank lines are
//! skipped. Any malformed line aborts the whole parse; there is no partial
//! result.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use dialr_common::rotation::Rotation;
use tracing::debug;

use crate::error::InputError;

/// Parses every rotation in the file at `path`.
///
/// The file is opened and closed within this call, on every exit path.
pub fn parse_file(path: &Path) -> Result<Vec<Rotation>, InputError> {
    let file = File::open(path).map_err(|source| InputError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rotations: Vec<Rotation> = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(rotation) = parse_line(&line, idx + 1)? {
            rotations.push(rotation);
        }
    }

    debug!(
        "Parsed {} rotations from {}",
        rotations.len(),
        path.display()
    );
    Ok(rotations)
}

/// Parses rotations from text already in memory.
pub fn parse_str(text: &str) -> Result<Vec<Rotation>, InputError> {
    let mut rotations: Vec<Rotation> = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(rotation) = parse_line(line, idx + 1)? {
            rotations.push(rotation);
        }
    }
    Ok(rotations)
}

fn parse_line(line: &str, line_no: usize) -> Result<Option<Rotation>, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<Rotation>()
        .map(Some)
        .map_err(|source| InputError::Malformed {
            line: line_no,
            source,
        })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
