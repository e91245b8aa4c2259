// Telemetry data domain models
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::range::ChartMode;

/// One sampling interval of a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    pub time: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub power: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub energy: f64,
}

impl TelemetrySample {
    pub fn new(time: impl Into<String>, power: f64, energy: f64) -> Self {
        Self {
            time: time.into(),
            power,
            energy,
        }
    }
}

/// Highest cumulative energy reading of one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub date: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub max_energy: f64,
}

impl DailyAggregate {
    pub fn new(date: impl Into<String>, max_energy: f64) -> Self {
        Self {
            date: date.into(),
            max_energy,
        }
    }
}

/// A fetch response, tagged with the shape it was decoded as.
#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryRows {
    Samples(Vec<TelemetrySample>),
    Daily(Vec<DailyAggregate>),
}

impl TelemetryRows {
    pub fn mode(&self) -> ChartMode {
        match self {
            Self::Samples(_) => ChartMode::Line,
            Self::Daily(_) => ChartMode::Bar,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Samples(rows) => rows.len(),
            Self::Daily(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Readings arrive either as JSON numbers or as strings such as `"1,234"`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(text) => text
            .trim()
            .replace(',', "")
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| de::Error::custom(format!("invalid numeric reading {text:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_accepts_numbers_and_strings() {
        let body = r#"[
            {"time": "00:00", "power": 0, "energy": 0},
            {"time": "12:05", "power": "1,234", "energy": "3.20", "temperature": "21.5"}
        ]"#;
        let samples: Vec<TelemetrySample> = serde_json::from_str(body).unwrap();

        assert_eq!(samples[0], TelemetrySample::new("00:00", 0.0, 0.0));
        assert_eq!(samples[1], TelemetrySample::new("12:05", 1234.0, 3.2));
    }

    #[test]
    fn test_daily_aggregate_rejects_garbage_reading() {
        let body = r#"[{"date": "2024-05-01", "max_energy": "n/a"}]"#;
        let err = serde_json::from_str::<Vec<DailyAggregate>>(body).unwrap_err();
        assert!(err.to_string().contains("invalid numeric reading"));
    }

    #[test]
    fn test_non_finite_readings_are_rejected() {
        for reading in ["NaN", "inf", "-infinity"] {
            let body = format!(r#"[{{"date": "2024-05-01", "max_energy": "{reading}"}}]"#);
            let err = serde_json::from_str::<Vec<DailyAggregate>>(&body).unwrap_err();
            assert!(err.to_string().contains("invalid numeric reading"), "{reading}");
        }
    }

    #[test]
    fn test_rows_report_their_mode() {
        let rows = TelemetryRows::Daily(vec![DailyAggregate::new("2024-05-01", 3.2)]);
        assert_eq!(rows.mode(), ChartMode::Bar);
        assert_eq!(rows.len(), 1);
        assert!(TelemetryRows::Samples(Vec::new()).is_empty());
    }
}
