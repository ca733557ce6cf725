pub mod agenda;
pub mod config;
pub mod habit;

use std::error::Error;
use std::path::PathBuf;

use chrono::NaiveDate;
use lifeboard_core::storage::load_commitments;
use lifeboard_core::{parse_date_key, Commitment, Config};

/// Where the commitment list comes from.
pub struct Snapshot {
    file: Option<PathBuf>,
}

impl Snapshot {
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }

    /// Load commitments from `--file`, falling back to the configured path.
    pub fn load(&self, config: &Config) -> Result<Vec<Commitment>, Box<dyn Error>> {
        let path = self
            .file
            .clone()
            .or_else(|| config.commitments_file())
            .ok_or("no commitments file: pass --file or set data.commitments_file")?;
        tracing::debug!("reading commitments from {}", path.display());
        Ok(load_commitments(&path)?)
    }
}

/// clap value parser for `YYYY-MM-DD` arguments.
pub fn parse_day(value: &str) -> Result<NaiveDate, String> {
    parse_date_key(value).map_err(|e| e.to_string())
}
