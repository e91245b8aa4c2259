// Dashboard panels and the per-frame layout
pub mod chart;
pub mod header;
pub mod range;
pub mod status;

use ratatui::Frame;

use crate::application::dashboard_service::DashboardService;
use crate::domain::range::Preset;
use crate::presentation::app_state::AppState;
use crate::presentation::surface::TerminalSurface;
use crate::presentation::ui::{DashboardLayout, Panel};

pub use chart::ChartPanel;
pub use header::HeaderPanel;
pub use range::RangePanel;
pub use status::StatusPanel;

pub fn draw_dashboard(
    f: &mut Frame<'_>,
    service: &DashboardService<TerminalSurface>,
    view: &AppState,
) {
    let state = service.state();
    let selector = service.selector().state();
    let screen = f.area();
    let layout = DashboardLayout::new(screen);

    HeaderPanel::new(state, view).draw(f, layout.header);
    RangePanel::new(selector, view).draw(f, layout.range);
    ChartPanel::new(state, service.chart_instance()).draw(f, layout.chart);
    StatusPanel::new(state, view).draw(f, layout.status);

    // drawn last so it sits on top of the chart
    if selector.menu_open {
        range::draw_menu(f, selector, layout.menu(Preset::ALL.len(), screen));
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::application::range_selector::RangeSelector;
    use crate::application::range_selector::tests::FixedClock;
    use crate::application::telemetry_source::TelemetrySource;
    use crate::domain::error::FetchError;
    use crate::domain::range::RangeDescriptor;
    use crate::domain::telemetry::TelemetryRows;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use std::sync::Arc;
    use std::time::Duration;

    /// Rows of the buffer as plain text.
    pub(crate) fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    /// Draw a single panel on an in-memory terminal and return its rows.
    pub(crate) fn render_panel(panel: &dyn Panel, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                panel.draw(f, area);
            })
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    struct Offline;

    #[async_trait]
    impl TelemetrySource for Offline {
        async fn fetch(&self, _range: RangeDescriptor) -> Result<TelemetryRows, FetchError> {
            Err(FetchError::Transport("offline".to_string()))
        }
    }

    fn dashboard() -> DashboardService<TerminalSurface> {
        let today = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let selector = RangeSelector::new(Arc::new(FixedClock(today)));
        DashboardService::new(Arc::new(Offline), selector, TerminalSurface::default())
    }

    fn draw(service: &DashboardService<TerminalSurface>) -> String {
        let view = AppState::new(Duration::from_secs(300));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| draw_dashboard(f, service, &view))
            .unwrap();
        buffer_lines(terminal.backend().buffer()).join("\n")
    }

    #[test]
    fn test_dashboard_shows_every_panel() {
        let screen = draw(&dashboard());

        assert!(screen.contains("Solar Panel Dashboard"));
        assert!(screen.contains("range=day"));
        assert!(screen.contains("Loading data..."));
        assert!(screen.contains("q quit"));
        assert!(!screen.contains("Last Month"));
    }

    #[test]
    fn test_dashboard_draws_open_menu() {
        let mut service = dashboard();
        service.selector_mut().toggle_menu();

        let screen = draw(&service);
        assert!(screen.contains("Last Week"));
        assert!(screen.contains("Last Month"));
    }
}
