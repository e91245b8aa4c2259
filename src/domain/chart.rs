// Declarative chart description handed to the rendering surface

/// 24-bit colour, kept independent of any terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPosition {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfig {
    pub id: String,
    pub title: String,
    pub position: AxisPosition,
    pub begin_at_zero: bool,
    /// Whether grid lines of this axis are drawn across the chart area.
    pub grid: bool,
}

impl AxisConfig {
    pub fn new(id: &str, title: &str, position: AxisPosition, grid: bool) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            position,
            begin_at_zero: true,
            grid,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesConfig {
    pub label: String,
    pub data: Vec<f64>,
    pub axis_id: String,
    pub color: Rgb,
    pub fill: bool,
    /// Curve smoothing, 0.0 draws straight segments.
    pub tension: f64,
    pub point_radius: u16,
    pub border_width: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<SeriesConfig>,
    pub x_title: String,
    pub max_x_ticks: usize,
    pub y_axes: Vec<AxisConfig>,
}

impl ChartConfig {
    pub fn series(&self, label: &str) -> Option<&SeriesConfig> {
        self.series.iter().find(|s| s.label == label)
    }

    pub fn axis(&self, id: &str) -> Option<&AxisConfig> {
        self.y_axes.iter().find(|a| a.id == id)
    }
}
