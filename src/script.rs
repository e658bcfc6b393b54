//! Script ingestion.
//!
//! A script is a JSON array of rows, each row a tagged list of strings:
//!
//! ```json
//! [["FILE_UPLOAD", "a.txt", "10gb"],
//!  ["FILE_GET", "a.txt"]]
//! ```
//!
//! Malformed rows are script faults, rejected before anything executes.

use anyhow::{Context, Result};

use tana_types::Command;

/// Parse a whole script into typed commands.
pub fn parse_script(text: &str) -> Result<Vec<Command>> {
    let rows: Vec<Vec<String>> =
        serde_json::from_str(text).context("script must be a JSON array of string rows")?;
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            Command::parse_row(row).with_context(|| format!("script row {index}"))
        })
        .collect()
}
