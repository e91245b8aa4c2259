//! Footer: transient notices, data status and key help.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::application::dashboard_service::{DashboardState, NoticeLevel};
use crate::presentation::app_state::AppState;

const HELP: &str = "</> day  d/w/m preset  Tab menu  g date  r refresh  q quit";

pub struct StatusPanel<'a> {
    state: &'a DashboardState,
    view: &'a AppState,
}

impl<'a> StatusPanel<'a> {
    pub fn new(state: &'a DashboardState, view: &'a AppState) -> Self {
        Self { state, view }
    }

    fn status_text(&self) -> String {
        match (&self.state.displayed, self.state.last_updated) {
            (Some((range, rows)), Some(updated)) => format!(
                "{} rows for {}, updated {}s ago",
                rows.len(),
                range,
                updated.elapsed().as_secs()
            ),
            _ if self.state.loading => "Loading data...".to_string(),
            _ => "No data".to_string(),
        }
    }
}

impl crate::presentation::ui::Panel for StatusPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let first = match self.view.visible_notice(Instant::now()) {
            Some(notice) => {
                let color = match notice.level {
                    NoticeLevel::Error => Color::Red,
                    NoticeLevel::Info => Color::Cyan,
                };
                Span::styled(notice.message.clone(), Style::default().fg(color))
            }
            None => Span::raw(self.status_text()),
        };

        let line = Line::from(vec![
            first,
            Span::raw("   "),
            Span::styled(HELP, Style::default().fg(Color::DarkGray)),
        ]);

        f.render_widget(
            Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::Notice;
    use crate::presentation::panels::tests::render_panel;
    use std::time::Duration;

    #[test]
    fn test_notice_replaces_status_text() {
        let mut view = AppState::new(Duration::from_secs(300));
        let state = DashboardState::default();

        let rows = render_panel(&StatusPanel::new(&state, &view), 120, 3).join("\n");
        assert!(rows.contains("No data"));
        assert!(rows.contains("q quit"));

        view.show_notice(Notice {
            level: NoticeLevel::Error,
            message: "Request failed: connection refused".to_string(),
        });
        let rows = render_panel(&StatusPanel::new(&state, &view), 120, 3).join("\n");
        assert!(rows.contains("Request failed: connection refused"));
        assert!(!rows.contains("No data"));
    }

    #[test]
    fn test_loading_status() {
        let view = AppState::new(Duration::from_secs(300));
        let state = DashboardState {
            loading: true,
            ..DashboardState::default()
        };

        let rows = render_panel(&StatusPanel::new(&state, &view), 120, 3).join("\n");
        assert!(rows.contains("Loading data..."));
    }
}
