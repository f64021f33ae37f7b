//! Reading agent listings from CSV or JSON.
//!
//! A CSV listing has a `name,category` header row:
//!
//! ```text
//! name,category
//! Adam,SICK
//! Cure0,CURE
//! ```
//!
//! A JSON listing is an array of objects with the same two fields. Categories may be given as a
//! label in any case or as an ordinal (`"1"` for `CURE` through `"5"` for `DEAD`). An unknown
//! category is rejected with `MeetupError::InvalidCategory` when the listing is read.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_derive::Deserialize;

use crate::agent::{Agent, HealthCategory};
use crate::error::MeetupError;
use crate::{debug, trace};

/// The ten-agent listing used when no input is supplied.
#[must_use]
pub fn sample_listing() -> Vec<Agent> {
    vec![
        Agent::new("Adam", HealthCategory::Sick),
        Agent::new("Cure0", HealthCategory::Cure),
        Agent::new("Cure1", HealthCategory::Cure),
        Agent::new("Bob", HealthCategory::Healthy),
        Agent::new("Alice", HealthCategory::Dead),
        Agent::new("Charlie", HealthCategory::Dying),
        Agent::new("Vaccine", HealthCategory::Sick),
        Agent::new("Darlene", HealthCategory::Dying),
        Agent::new("Emma", HealthCategory::Sick),
        Agent::new("Cure2", HealthCategory::Cure),
    ]
}

// Categories arrive as strings so a bad one can be reported as `InvalidCategory` rather than as
// an opaque deserialization error.
#[derive(Deserialize)]
struct AgentRecord {
    name: String,
    category: String,
}

impl TryFrom<AgentRecord> for Agent {
    type Error = MeetupError;

    fn try_from(record: AgentRecord) -> Result<Self, Self::Error> {
        let category = record.category.parse::<HealthCategory>()?;
        Ok(Agent::new(record.name, category))
    }
}

/// Reads a CSV listing with a `name,category` header.
///
/// # Errors
///
/// Returns `MeetupError::CSVError` for malformed CSV and `MeetupError::InvalidCategory` for an
/// unknown category.
pub fn parse_listing_csv<R: Read>(reader: R) -> Result<Vec<Agent>, MeetupError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut agents = Vec::new();
    for record in reader.deserialize::<AgentRecord>() {
        agents.push(Agent::try_from(record?)?);
    }
    Ok(agents)
}

/// Reads a JSON array of `{ "name": ..., "category": ... }` objects.
///
/// # Errors
///
/// Returns `MeetupError::JsonError` for malformed JSON and `MeetupError::InvalidCategory` for an
/// unknown category.
pub fn parse_listing_json<R: Read>(reader: R) -> Result<Vec<Agent>, MeetupError> {
    let records: Vec<AgentRecord> = serde_json::from_reader(reader)?;
    records.into_iter().map(Agent::try_from).collect()
}

/// Loads a listing from `path`, choosing the format from its `.csv` or `.json` extension.
///
/// # Errors
///
/// Returns `MeetupError::ListingError` for any other extension, and propagates I/O and parse
/// errors.
pub fn load_listing(path: &Path) -> Result<Vec<Agent>, MeetupError> {
    trace!("Loading agent listing from {}", path.display());
    let extension = path.extension().and_then(OsStr::to_str);
    let agents = match extension {
        Some("csv") => parse_listing_csv(BufReader::new(File::open(path)?))?,
        Some("json") => parse_listing_json(BufReader::new(File::open(path)?))?,
        _ => {
            return Err(MeetupError::ListingError(format!(
                "Agent listings must be .csv or .json files: {}",
                path.display()
            )))
        }
    };
    debug!("Loaded {} agents from {}", agents.len(), path.display());
    Ok(agents)
}
