// Source trait for telemetry data access
use crate::domain::error::FetchError;
use crate::domain::range::RangeDescriptor;
use crate::domain::telemetry::TelemetryRows;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Fetch the rows for a range. The returned variant always matches `range.mode()`.
    async fn fetch(&self, range: RangeDescriptor) -> Result<TelemetryRows, FetchError>;
}

/// Local calendar, injected so "today" is deterministic under test.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
