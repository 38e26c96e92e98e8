use thiserror::Error as ThisError;
use uniffi::Error;

use crate::report::ReportError;

#[derive(Debug, ThisError, Error)]
#[uniffi(flat_error)]
pub enum LiftlogError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("invalid report: {0}")]
    InvalidReport(String),
}

impl From<anyhow::Error> for LiftlogError {
    fn from(e: anyhow::Error) -> Self {
        LiftlogError::Storage(format!("{:#}", e))
    }
}

impl From<ReportError> for LiftlogError {
    fn from(e: ReportError) -> Self {
        LiftlogError::InvalidReport(e.to_string())
    }
}
