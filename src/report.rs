//! Writing the resulting listing of a round as CSV, with the same `name,category` layout that
//! [`crate::listing`] reads.

use std::ffi::OsStr;
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::agent::Agent;
use crate::error::MeetupError;
use crate::trace;

/// Writes `agents` as CSV rows under a `name,category` header.
///
/// # Errors
///
/// Returns `MeetupError::CSVError` if a row cannot be written.
pub fn write_listing<W: Write>(writer: W, agents: &[Agent]) -> Result<(), MeetupError> {
    let mut writer = Writer::from_writer(writer);
    for agent in agents {
        writer.serialize(agent)?;
    }
    // An empty listing still gets a header row.
    if agents.is_empty() {
        writer.write_record(["name", "category"])?;
    }
    writer.flush()?;
    Ok(())
}

// Checks that the path is valid. Creates all parent directories if they do not exist. Returns
// the file if successful.
fn generate_validate_filepath(path: &Path, overwrite: bool) -> Result<File, MeetupError> {
    match path.extension().and_then(OsStr::to_str) {
        Some("csv") => {
            if path.exists() && !overwrite {
                return Err(MeetupError::ReportError(format!(
                    "Report file {} already exists; pass --overwrite to replace it",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                create_dir_all(parent)?;
            }
            Ok(File::create(path)?)
        }
        _ => Err(MeetupError::ReportError(
            "Report output files must be CSVs at this time".to_string(),
        )),
    }
}

/// Writes `agents` to the CSV file at `path`.
///
/// # Errors
///
/// Returns `MeetupError::ReportError` if `path` is not a `.csv` file, or already exists and
/// `overwrite` is false. Propagates I/O and CSV errors.
pub fn write_listing_file(
    path: &Path,
    agents: &[Agent],
    overwrite: bool,
) -> Result<(), MeetupError> {
    trace!("Writing {} agents to {}", agents.len(), path.display());
    let file = generate_validate_filepath(path, overwrite)?;
    write_listing(file, agents)
}
