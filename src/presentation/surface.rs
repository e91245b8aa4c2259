//! Terminal rendering surface.
//!
//! Turns a [`ChartConfig`] into owned, widget-ready data. Chart widgets borrow
//! their datasets, so every vector they need lives in the [`ChartInstance`]
//! for as long as the instance is held by the chart slot.

use ratatui::style::Color;
use ratatui::symbols::Marker;

use crate::application::render::RenderSurface;
use crate::domain::chart::{AxisPosition, ChartConfig, ChartKind, Rgb};

/// Axis headroom above the largest value.
const HEADROOM: f64 = 1.1;

#[derive(Debug, Clone, PartialEq)]
pub struct AxisScale {
    pub title: String,
    pub min: f64,
    pub max: f64,
}

impl AxisScale {
    fn span(&self) -> f64 {
        (self.max - self.min).max(f64::EPSILON)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreparedLine {
    pub name: String,
    pub color: Color,
    pub filled: bool,
    /// Braille for smoothed curves, half blocks for straight segments.
    pub marker: Marker,
    pub bold: bool,
    pub show_points: bool,
    /// (index, value) already mapped onto the left axis.
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreparedBar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    pub id: u64,
    pub kind: ChartKind,
    pub x_title: String,
    pub x_max: f64,
    /// Evenly spaced subset of the labels, at most `max_x_ticks` long.
    pub x_ticks: Vec<String>,
    pub lines: Vec<PreparedLine>,
    pub bars: Vec<PreparedBar>,
    pub bar_name: String,
    pub bar_color: Color,
    pub left: AxisScale,
    pub right: Option<AxisScale>,
}

/// Counts instances so a leak shows up in the debug log.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    created: u64,
    released: u64,
}

impl TerminalSurface {
    pub fn live(&self) -> u64 {
        self.created - self.released
    }
}

impl RenderSurface for TerminalSurface {
    type Instance = ChartInstance;

    fn create(&mut self, config: &ChartConfig) -> ChartInstance {
        self.created += 1;
        tracing::debug!(
            "Creating chart #{} ({:?}, {} live)",
            self.created,
            config.kind,
            self.live()
        );
        prepare(self.created, config)
    }

    fn destroy(&mut self, instance: ChartInstance) {
        self.released += 1;
        tracing::debug!("Released chart #{}", instance.id);
    }
}

fn prepare(id: u64, config: &ChartConfig) -> ChartInstance {
    let axis_scale = |position: AxisPosition| {
        let axis = config.y_axes.iter().find(|a| a.position == position)?;
        let values = || {
            config
                .series
                .iter()
                .filter(|s| s.axis_id == axis.id)
                .flat_map(|s| s.data.iter().copied())
        };
        Some(AxisScale {
            title: axis.title.clone(),
            min: if axis.begin_at_zero {
                0.0
            } else {
                lower_bound(values())
            },
            max: upper_bound(values()),
        })
    };

    let left = axis_scale(AxisPosition::Left).unwrap_or(AxisScale {
        title: String::new(),
        min: 0.0,
        max: 1.0,
    });
    let right = axis_scale(AxisPosition::Right);

    let mut instance = ChartInstance {
        id,
        kind: config.kind,
        x_title: config.x_title.clone(),
        x_max: config.labels.len().saturating_sub(1).max(1) as f64,
        x_ticks: sample_ticks(&config.labels, config.max_x_ticks),
        lines: Vec::new(),
        bars: Vec::new(),
        bar_name: String::new(),
        bar_color: Color::Reset,
        left,
        right,
    };

    match config.kind {
        ChartKind::Line => {
            for series in &config.series {
                let on_right = config
                    .axis(&series.axis_id)
                    .is_some_and(|a| a.position == AxisPosition::Right);
                let left = &instance.left;
                let map = |v: f64| match (&instance.right, on_right) {
                    (Some(right), true) => left.min + (v - right.min) * left.span() / right.span(),
                    _ => v,
                };
                let points = series
                    .data
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i as f64, map(*v)))
                    .collect();
                instance.lines.push(PreparedLine {
                    name: series.label.clone(),
                    color: to_color(series.color),
                    filled: series.fill,
                    marker: if series.tension > 0.0 {
                        Marker::Braille
                    } else {
                        Marker::HalfBlock
                    },
                    bold: series.border_width >= 2,
                    show_points: series.point_radius > 0,
                    points,
                });
            }
        }
        ChartKind::Bar => {
            if let Some(series) = config.series.first() {
                instance.bar_name = series.label.clone();
                instance.bar_color = to_color(series.color);
                instance.bars = config
                    .labels
                    .iter()
                    .zip(series.data.iter())
                    .map(|(label, value)| PreparedBar {
                        label: label.clone(),
                        value: *value,
                    })
                    .collect();
            }
        }
    }

    instance
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Zero-based axis maximum with headroom; 1.0 when there is nothing positive to show.
pub fn upper_bound(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.filter(|v| v.is_finite()).fold(0.0_f64, f64::max);
    if max > 0.0 { max * HEADROOM } else { 1.0 }
}

/// Axis minimum for axes that are not zero-based.
pub fn lower_bound(values: impl Iterator<Item = f64>) -> f64 {
    let min = values
        .filter(|v| v.is_finite())
        .fold(f64::INFINITY, f64::min);
    if min.is_finite() { min } else { 0.0 }
}

/// Pick at most `max` labels spread evenly over `labels`, keeping first and last.
pub fn sample_ticks(labels: &[String], max: usize) -> Vec<String> {
    if labels.len() <= max {
        return labels.to_vec();
    }
    if max < 2 {
        return labels.iter().take(max).cloned().collect();
    }
    let last = labels.len() - 1;
    (0..max)
        .map(|i| labels[(i * last + (max - 1) / 2) / (max - 1)].clone())
        .collect()
}

/// Evenly spaced labels covering the axis, bottom first.
pub fn axis_labels(axis: &AxisScale, steps: usize) -> Vec<String> {
    let steps = steps.max(2);
    (0..steps)
        .map(|i| format_value(axis.min + axis.span() * i as f64 / (steps - 1) as f64))
        .collect()
}

fn format_value(value: f64) -> String {
    if value >= 100.0 {
        format!("{value:.0}")
    } else if value >= 10.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}
