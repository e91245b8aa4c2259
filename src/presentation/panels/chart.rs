//! Chart panel: draws the live chart instance.
//!
//! Line charts carry two zero-based axes. The terminal chart widget only has a
//! left axis, so right-axis series arrive pre-scaled from the surface and the
//! right axis labels are drawn in a narrow column next to the chart.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::Line,
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, LegendPosition,
        Paragraph,
    },
};

use crate::application::dashboard_service::DashboardState;
use crate::domain::chart::ChartKind;
use crate::presentation::surface::{AxisScale, ChartInstance, axis_labels};

const RIGHT_AXIS_WIDTH: u16 = 8;
const Y_STEPS: usize = 5;

pub struct ChartPanel<'a> {
    state: &'a DashboardState,
    instance: Option<&'a ChartInstance>,
}

impl<'a> ChartPanel<'a> {
    pub fn new(state: &'a DashboardState, instance: Option<&'a ChartInstance>) -> Self {
        Self { state, instance }
    }

    fn draw_placeholder(&self, f: &mut Frame<'_>, area: Rect) {
        let text = if self.state.loading {
            "Loading data..."
        } else {
            "No data for this range"
        };
        let p = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }

    fn draw_line(f: &mut Frame<'_>, area: Rect, instance: &ChartInstance) {
        let (chart_area, axis_area) = match &instance.right {
            Some(_) => {
                let chunks =
                    Layout::horizontal([Constraint::Min(0), Constraint::Length(RIGHT_AXIS_WIDTH)])
                        .split(area);
                (chunks[0], Some(chunks[1]))
            }
            None => (area, None),
        };

        // filled series first so the plain lines stay visible on top
        let ordered = instance
            .lines
            .iter()
            .filter(|l| l.filled)
            .chain(instance.lines.iter().filter(|l| !l.filled));
        let datasets: Vec<Dataset> = ordered
            .map(|line| {
                let mut style = Style::default().fg(line.color);
                if line.bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Dataset::default()
                    .name(line.name.clone())
                    .marker(line.marker)
                    .graph_type(if line.filled {
                        GraphType::Bar
                    } else {
                        GraphType::Line
                    })
                    .style(style)
                    .data(&line.points)
            })
            .collect();
        let points = instance
            .lines
            .iter()
            .filter(|l| l.show_points)
            .map(|line| {
                Dataset::default()
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(line.color))
                    .data(&line.points)
            });
        let datasets: Vec<Dataset> = datasets.into_iter().chain(points).collect();

        let title = match &instance.right {
            Some(right) => format!("{} / {}", instance.left.title, right.title),
            None => instance.left.title.clone(),
        };
        let muted = Style::default().fg(Color::DarkGray);

        let chart = Chart::new(datasets)
            .block(Block::default().title(title).borders(Borders::ALL))
            .x_axis(
                Axis::default()
                    .title(instance.x_title.clone())
                    .style(muted)
                    .bounds([0.0, instance.x_max])
                    .labels(instance.x_ticks.clone()),
            )
            .y_axis(
                Axis::default()
                    .title(instance.left.title.clone())
                    .style(muted)
                    .bounds([instance.left.min, instance.left.max])
                    .labels(axis_labels(&instance.left, Y_STEPS)),
            )
            .legend_position(Some(LegendPosition::Bottom))
            .hidden_legend_constraints((Constraint::Ratio(1, 1), Constraint::Ratio(1, 2)));
        f.render_widget(chart, chart_area);

        if let (Some(right), Some(axis_area)) = (&instance.right, axis_area) {
            let lines: Vec<Line> = right_axis_rows(axis_area.height, right)
                .into_iter()
                .map(Line::from)
                .collect();
            f.render_widget(Paragraph::new(lines).style(muted), axis_area);
        }
    }

    fn draw_bar(f: &mut Frame<'_>, area: Rect, instance: &ChartInstance) {
        let count = instance.bars.len().max(1) as u16;
        let bar_width = (area.width.saturating_sub(2) / count)
            .saturating_sub(1)
            .clamp(1, 10);

        let bars: Vec<Bar> = instance
            .bars
            .iter()
            .map(|bar| {
                let label = if instance.x_ticks.contains(&bar.label) {
                    short_label(&bar.label, bar_width)
                } else {
                    String::new()
                };
                Bar::default()
                    .value((bar.value.max(0.0) * 100.0).round() as u64)
                    .text_value(format!("{:.1}", bar.value))
                    .label(Line::from(label))
                    .style(Style::default().fg(instance.bar_color))
            })
            .collect();

        let chart = BarChart::default()
            .block(
                Block::default()
                    .title(format!("{} ({})", instance.bar_name, instance.left.title))
                    .title_bottom(instance.x_title.clone())
                    .borders(Borders::ALL),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(1)
            .max((instance.left.max.max(0.0) * 100.0).round() as u64)
            .value_style(Style::default().fg(Color::Black).bg(instance.bar_color));
        f.render_widget(chart, area);
    }
}

impl crate::presentation::ui::Panel for ChartPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self.instance {
            None => self.draw_placeholder(f, area),
            Some(instance) => match instance.kind {
                ChartKind::Line => Self::draw_line(f, area, instance),
                ChartKind::Bar => Self::draw_bar(f, area, instance),
            },
        }
    }
}

/// One string per terminal row: axis title on top, labels from `max` down to 0
/// spread over the plot rows (border above, x-axis rows below).
pub fn right_axis_rows(height: u16, axis: &AxisScale) -> Vec<String> {
    let height = height as usize;
    let mut rows = vec![String::new(); height];
    if height == 0 {
        return rows;
    }
    rows[0] = axis.title.clone();

    let top = 1;
    let bottom = height.saturating_sub(4).max(top);
    let labels = axis_labels(axis, Y_STEPS);
    let steps = labels.len() - 1;
    for (i, label) in labels.into_iter().enumerate() {
        let row = bottom - (bottom - top) * i / steps;
        if row < height {
            rows[row] = label;
        }
    }
    rows
}

/// `2024-05-01` becomes `05-01` when the bar is too narrow for the full date.
fn short_label(label: &str, width: u16) -> String {
    match label.get(5..) {
        Some(tail) if label.len() > width as usize && label.len() == 10 => tail.to_string(),
        _ => label.to_string(),
    }
}
