//! Inspection history model and import from the upstream JSON document.

mod domain;
mod normalizer;
mod parser;

pub use domain::{DefectItem, DefectKind, InspectionRecord, TestResult, VehicleHistory};

use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum HistoryImportError {
    #[error("failed to read history document: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid history document: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct HistoryImporter;

impl HistoryImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<VehicleHistory, HistoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<VehicleHistory, HistoryImportError> {
        let history: VehicleHistory = serde_json::from_reader(reader)?;
        Ok(Self::inspect(history))
    }

    pub fn parse_str(raw: &str) -> Result<VehicleHistory, HistoryImportError> {
        let history: VehicleHistory = serde_json::from_str(raw)?;
        Ok(Self::inspect(history))
    }

    fn inspect(history: VehicleHistory) -> VehicleHistory {
        for record in &history.tests {
            if let Some(raw) = record.completed_date.as_deref() {
                if record.completed_on().is_none() {
                    warn!(
                        test_number = %record.mot_test_number,
                        completed_date = raw,
                        "unrecognised completion date; record excluded from mileage analysis"
                    );
                }
            }
        }

        debug!(
            registration = history.registration.as_deref().unwrap_or("unknown"),
            tests = history.tests.len(),
            "imported inspection history"
        );
        history
    }
}
