//! Date stepper, preset menu and the date-entry prompt.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::application::range_selector::SelectorState;
use crate::domain::range::Preset;
use crate::presentation::app_state::{AppState, InputMode};

pub struct RangePanel<'a> {
    selector: &'a SelectorState,
    view: &'a AppState,
}

impl<'a> RangePanel<'a> {
    pub fn new(selector: &'a SelectorState, view: &'a AppState) -> Self {
        Self { selector, view }
    }
}

impl crate::presentation::ui::Panel for RangePanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let date_line = match &self.view.mode {
            InputMode::DateEntry(buffer) => Line::from(vec![
                Span::raw("Date: "),
                Span::styled(
                    format!("{buffer}_"),
                    Style::default().add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled("  (YYYY-MM-DD, Enter/Esc)", Style::default().fg(Color::DarkGray)),
            ]),
            InputMode::Normal => Line::from(vec![
                Span::styled(" < ", Style::default().bg(Color::DarkGray)),
                Span::raw(format!(" {} ", self.selector.selected_date.format("%d.%m.%Y"))),
                Span::styled(" > ", Style::default().bg(Color::DarkGray)),
                Span::raw("   "),
                Span::styled(
                    format!(" {} v ", self.selector.preset.label()),
                    Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
                ),
            ]),
        };

        let range_line = Line::from(Span::styled(
            format!("range={}", self.selector.range.as_query()),
            Style::default().fg(Color::DarkGray),
        ));

        let p = Paragraph::new(vec![date_line, range_line])
            .block(Block::default().title("Range").borders(Borders::ALL));
        f.render_widget(p, area);
    }
}

/// Preset menu with the cursor entry highlighted.
pub fn draw_menu(f: &mut Frame<'_>, selector: &SelectorState, area: Rect) {
    let items: Vec<ListItem> = Preset::ALL
        .iter()
        .map(|p| ListItem::new(p.label()))
        .collect();
    let list = List::new(items)
        .block(Block::default().title("Range").borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    let mut state = ListState::default().with_selected(Some(selector.menu_cursor));

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}
