// Screen layout of the dashboard
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

const HEADER_HEIGHT: u16 = 4;
const STATUS_HEIGHT: u16 = 3;
const MIN_CHART_HEIGHT: u16 = 10;
const MENU_WIDTH: u16 = 20;

/// Anything that can draw itself into an area.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

/// Areas of one frame: title and range picker side by side on top, the chart
/// below them and the status footer at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub range: Rect,
    pub chart: Rect,
    pub status: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let [top, chart, status] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(MIN_CHART_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .areas(area);
        let [header, range] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(top);

        Self {
            header,
            range,
            chart,
            status,
        }
    }

    /// Preset menu popup: hangs below the right edge of the range block and
    /// overlaps the chart, clipped to `screen`.
    pub fn menu(&self, entries: usize, screen: Rect) -> Rect {
        let width = MENU_WIDTH.min(self.range.width);
        Rect {
            x: self.range.right().saturating_sub(width),
            y: self.range.bottom(),
            width,
            height: entries as u16 + 2,
        }
        .intersection(screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_header_row() {
        let layout = DashboardLayout::new(Rect::new(0, 0, 100, 40));

        assert_eq!(layout.header, Rect::new(0, 0, 50, 4));
        assert_eq!(layout.range, Rect::new(50, 0, 50, 4));
        assert_eq!(layout.chart, Rect::new(0, 4, 100, 33));
        assert_eq!(layout.status, Rect::new(0, 37, 100, 3));
    }

    #[test]
    fn test_menu_hangs_below_range_block() {
        let screen = Rect::new(0, 0, 100, 40);
        let layout = DashboardLayout::new(screen);

        assert_eq!(layout.menu(3, screen), Rect::new(80, 4, 20, 5));
    }

    #[test]
    fn test_menu_is_clipped_to_screen() {
        let screen = Rect::new(0, 0, 30, 6);
        let layout = DashboardLayout::new(screen);
        let menu = layout.menu(3, screen);

        assert!(menu.width <= layout.range.width);
        assert!(menu.bottom() <= screen.bottom());
    }
}
