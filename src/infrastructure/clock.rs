// System clock adapter
use crate::application::telemetry_source::Clock;
use chrono::NaiveDate;

/// Calendar date in the machine's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}
