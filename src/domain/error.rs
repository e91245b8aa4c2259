// Error taxonomy shared by the dashboard layers
use chrono::NaiveDate;
use thiserror::Error;

use super::range::ChartMode;

/// Failure while retrieving telemetry from the remote endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("endpoint responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode telemetry: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("failed to fetch data: {0}")]
    Fetch(#[from] FetchError),

    #[error("unsupported range descriptor {0:?}")]
    UnsupportedRange(String),

    #[error("invalid preset {0:?}")]
    InvalidPreset(String),

    #[error("expected {expected:?} rows but received {found:?} rows")]
    ShapeMismatch { expected: ChartMode, found: ChartMode },

    #[error("{0} is later than today")]
    FutureDate(NaiveDate),

    #[error("invalid date {0:?}, expected YYYY-MM-DD or DD.MM.YYYY")]
    InvalidDate(String),
}
