//! Title block with the update interval and the fetch-in-progress indicator.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::application::dashboard_service::DashboardState;
use crate::presentation::app_state::AppState;

const ACCENT: Color = Color::Rgb(0xFF, 0x6F, 0x00);

pub struct HeaderPanel<'a> {
    state: &'a DashboardState,
    view: &'a AppState,
}

impl<'a> HeaderPanel<'a> {
    pub fn new(state: &'a DashboardState, view: &'a AppState) -> Self {
        Self { state, view }
    }
}

impl crate::presentation::ui::Panel for HeaderPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let refresh = if self.state.is_fetching() {
            Span::styled(
                format!("{} refreshing", self.view.spinner()),
                Style::default().fg(ACCENT),
            )
        } else {
            Span::styled("r refresh", Style::default().fg(Color::DarkGray))
        };

        let lines = vec![
            Line::from(Span::styled(
                "PV Output",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!("Update interval: {}  ", self.view.interval_text()),
                    Style::default().fg(Color::DarkGray),
                ),
                refresh,
            ]),
        ];

        let block = Block::default()
            .title("Solar Panel Dashboard")
            .borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
