//! Runner configuration loaded from a JSON file. Every field is optional; values given on the
//! command line take precedence over the file.
//!
//! ```json
//! {
//!     "input": "data/agents.csv",
//!     "output": "output/round.csv",
//!     "overwrite": true,
//!     "log_level": "meetup=Trace"
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde_derive::Deserialize;

use crate::error::MeetupError;
use crate::trace;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeetupConfig {
    /// Agent listing to read (`.csv` or `.json`).
    pub input: Option<PathBuf>,
    /// CSV file to write the resulting listing to.
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub overwrite: bool,
    /// Same syntax as `--log-level`.
    pub log_level: Option<String>,
}

impl MeetupConfig {
    /// Reads a configuration file. Relative `input` and `output` paths are kept as written,
    /// i.e. relative to the working directory.
    ///
    /// # Errors
    ///
    /// Returns `MeetupError::ConfigError` if the file cannot be opened or is not a valid
    /// configuration.
    pub fn load(path: &Path) -> Result<MeetupConfig, MeetupError> {
        trace!("Loading configuration from {}", path.display());
        let file = File::open(path).map_err(|error| {
            MeetupError::ConfigError(format!(
                "could not open config file {}: {error}",
                path.display()
            ))
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|error| {
            MeetupError::ConfigError(format!("invalid config file {}: {error}", path.display()))
        })
    }
}
