// Range data presenter - Maps fetched rows to a chart description
use crate::domain::chart::{AxisConfig, AxisPosition, ChartConfig, ChartKind, Rgb, SeriesConfig};
use crate::domain::error::DashboardError;
use crate::domain::range::RangeDescriptor;
use crate::domain::telemetry::{DailyAggregate, TelemetryRows, TelemetrySample};

pub const POWER_LABEL: &str = "Power Output (W)";
pub const ENERGY_LABEL: &str = "Energy Generated (kWh)";

const POWER_COLOR: Rgb = Rgb(0xFF, 0x6F, 0x00);
const ENERGY_COLOR: Rgb = Rgb(0x00, 0x7B, 0xFF);

const LINE_TENSION: f64 = 0.4;
const LINE_WIDTH: u16 = 4;
const LINE_MAX_TICKS: usize = 10;
const BAR_MAX_TICKS: usize = 7;

#[derive(Debug, Clone, Copy, Default)]
pub struct RangeDataPresenter;

impl RangeDataPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Build the chart for `rows` fetched under `range`.
    ///
    /// Returns `Ok(None)` for an empty response so the caller keeps its
    /// no-data state instead of drawing an empty chart.
    pub fn present(
        &self,
        range: RangeDescriptor,
        rows: &TelemetryRows,
    ) -> Result<Option<ChartConfig>, DashboardError> {
        let expected = range.mode();
        if rows.mode() != expected {
            return Err(DashboardError::ShapeMismatch {
                expected,
                found: rows.mode(),
            });
        }

        if rows.is_empty() {
            return Ok(None);
        }

        let config = match rows {
            TelemetryRows::Samples(samples) => Self::line_chart(samples),
            TelemetryRows::Daily(days) => Self::bar_chart(days),
        };
        Ok(Some(config))
    }

    fn line_chart(samples: &[TelemetrySample]) -> ChartConfig {
        let labels = samples.iter().map(|s| s.time.clone()).collect();
        let power = samples.iter().map(|s| s.power).collect();
        let energy = samples.iter().map(|s| s.energy).collect();

        ChartConfig {
            kind: ChartKind::Line,
            labels,
            series: vec![
                SeriesConfig {
                    label: POWER_LABEL.to_string(),
                    data: power,
                    axis_id: "y".to_string(),
                    color: POWER_COLOR,
                    fill: false,
                    tension: LINE_TENSION,
                    point_radius: 0,
                    border_width: LINE_WIDTH,
                },
                SeriesConfig {
                    label: ENERGY_LABEL.to_string(),
                    data: energy,
                    axis_id: "y1".to_string(),
                    color: ENERGY_COLOR,
                    fill: true,
                    tension: LINE_TENSION,
                    point_radius: 0,
                    border_width: LINE_WIDTH,
                },
            ],
            x_title: "Time of Day".to_string(),
            max_x_ticks: LINE_MAX_TICKS,
            y_axes: vec![
                AxisConfig::new("y", "Power (W)", AxisPosition::Left, true),
                // energy grid would overlap the power grid
                AxisConfig::new("y1", "Energy (kWh)", AxisPosition::Right, false),
            ],
        }
    }

    fn bar_chart(days: &[DailyAggregate]) -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Bar,
            labels: days.iter().map(|d| d.date.clone()).collect(),
            series: vec![SeriesConfig {
                label: ENERGY_LABEL.to_string(),
                data: days.iter().map(|d| d.max_energy).collect(),
                axis_id: "y".to_string(),
                color: ENERGY_COLOR,
                fill: true,
                tension: 0.0,
                point_radius: 0,
                border_width: 1,
            }],
            x_title: "Date".to_string(),
            max_x_ticks: BAR_MAX_TICKS,
            y_axes: vec![AxisConfig::new(
                "y",
                "Energy (kWh)",
                AxisPosition::Left,
                true,
            )],
        }
    }
}
