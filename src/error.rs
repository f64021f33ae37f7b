use std::fmt::{self, Debug, Display};
use std::io;

/// Provides `MeetupError` and maps other errors to
/// convert to a `MeetupError`
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum MeetupError {
    IoError(io::Error),
    JsonError(serde_json::Error),
    CSVError(csv::Error),
    /// A category label or ordinal outside the five health categories.
    InvalidCategory(String),
    /// A transition was requested that the engine guarantees never happens.
    ContractViolation(String),
    ListingError(String),
    ReportError(String),
    ConfigError(String),
    MeetupError(String),
}

impl From<io::Error> for MeetupError {
    fn from(error: io::Error) -> Self {
        MeetupError::IoError(error)
    }
}

impl From<serde_json::Error> for MeetupError {
    fn from(error: serde_json::Error) -> Self {
        MeetupError::JsonError(error)
    }
}

impl From<csv::Error> for MeetupError {
    fn from(error: csv::Error) -> Self {
        MeetupError::CSVError(error)
    }
}

impl From<String> for MeetupError {
    fn from(error: String) -> Self {
        MeetupError::MeetupError(error)
    }
}

impl From<&str> for MeetupError {
    fn from(error: &str) -> Self {
        MeetupError::MeetupError(error.to_string())
    }
}

impl std::error::Error for MeetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeetupError::IoError(error) => Some(error),
            MeetupError::JsonError(error) => Some(error),
            MeetupError::CSVError(error) => Some(error),
            _ => None,
        }
    }
}

impl Display for MeetupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MeetupError::IoError(error) => write!(f, "I/O error: {error}"),
            MeetupError::JsonError(error) => write!(f, "JSON error: {error}"),
            MeetupError::CSVError(error) => write!(f, "CSV error: {error}"),
            MeetupError::InvalidCategory(value) => {
                write!(f, "invalid health category: {value:?}")
            }
            MeetupError::ContractViolation(message) => {
                write!(f, "contract violation: {message}")
            }
            MeetupError::ListingError(message)
            | MeetupError::ReportError(message)
            | MeetupError::ConfigError(message)
            | MeetupError::MeetupError(message) => write!(f, "{message}"),
        }
    }
}
