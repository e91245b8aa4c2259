// Range descriptor domain model
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use super::error::DashboardError;

/// How a range is charted: same-day samples as lines, multi-day aggregates as bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartMode {
    Line,
    Bar,
}

/// The active query window. Selects both the fetch query and the chart mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeDescriptor {
    /// Today's samples.
    Day,
    /// Samples of a past calendar day.
    Date(NaiveDate),
    /// Daily maxima for the last 7 days.
    LastWeek,
    /// Daily maxima for the last 30 days.
    LastMonth,
}

impl RangeDescriptor {
    /// Descriptor for a picked calendar day; today collapses to `Day`.
    pub fn for_date(date: NaiveDate, today: NaiveDate) -> Self {
        if date == today {
            Self::Day
        } else {
            Self::Date(date)
        }
    }

    pub fn mode(&self) -> ChartMode {
        match self {
            Self::Day | Self::Date(_) => ChartMode::Line,
            Self::LastWeek | Self::LastMonth => ChartMode::Bar,
        }
    }

    /// Token sent as the `range` query parameter.
    pub fn as_query(&self) -> String {
        match self {
            Self::Day => "day".to_string(),
            Self::Date(date) => date.format("%Y%m%d").to_string(),
            Self::LastWeek => "7".to_string(),
            Self::LastMonth => "30".to_string(),
        }
    }
}

impl FromStr for RangeDescriptor {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "7" => Ok(Self::LastWeek),
            "30" => Ok(Self::LastMonth),
            _ if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) => {
                NaiveDate::parse_from_str(s, "%Y%m%d")
                    .map(Self::Date)
                    .map_err(|_| DashboardError::UnsupportedRange(s.to_string()))
            }
            _ => Err(DashboardError::UnsupportedRange(s.to_string())),
        }
    }
}

impl fmt::Display for RangeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "Today"),
            Self::Date(date) => write!(f, "{}", date.format("%d.%m.%Y")),
            Self::LastWeek => write!(f, "Last Week"),
            Self::LastMonth => write!(f, "Last Month"),
        }
    }
}

/// Entries of the preset menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Day,
    LastWeek,
    LastMonth,
}

impl Preset {
    /// Menu order.
    pub const ALL: [Preset; 3] = [Preset::Day, Preset::LastWeek, Preset::LastMonth];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::LastWeek => "Last Week",
            Self::LastMonth => "Last Month",
        }
    }
}

impl FromStr for Preset {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.label() == s)
            .ok_or_else(|| DashboardError::InvalidPreset(s.to_string()))
    }
}
