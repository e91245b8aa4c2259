// Keyboard handlers
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::application::dashboard_service::DashboardService;
use crate::application::range_selector::parse_picked_date;
use crate::application::render::RenderSurface;
use crate::domain::range::Preset;
use crate::presentation::app_state::{AppState, InputMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    PreviousDay,
    NextDay,
    Preset(Preset),
    ToggleMenu,
    MenuUp,
    MenuDown,
    MenuConfirm,
    StartDateEntry,
    DateChar(char),
    DateBackspace,
    DateSubmit,
    DateCancel,
}

/// What the event loop has to do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch,
    Quit,
}

pub fn action_for(key: KeyEvent, mode: &InputMode, menu_open: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if let InputMode::DateEntry(_) = mode {
        return match key.code {
            KeyCode::Enter => Some(Action::DateSubmit),
            KeyCode::Esc => Some(Action::DateCancel),
            KeyCode::Backspace => Some(Action::DateBackspace),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '.' => {
                Some(Action::DateChar(c))
            }
            _ => None,
        };
    }

    if menu_open {
        return match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MenuUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MenuDown),
            KeyCode::Enter => Some(Action::MenuConfirm),
            KeyCode::Esc | KeyCode::Tab => Some(Action::ToggleMenu),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PreviousDay),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextDay),
        KeyCode::Char('d') => Some(Action::Preset(Preset::Day)),
        KeyCode::Char('w') => Some(Action::Preset(Preset::LastWeek)),
        KeyCode::Char('m') => Some(Action::Preset(Preset::LastMonth)),
        KeyCode::Tab | KeyCode::Enter => Some(Action::ToggleMenu),
        KeyCode::Char('g') => Some(Action::StartDateEntry),
        _ => None,
    }
}

/// Apply an action. A fetch is requested only when the range actually changed,
/// or on an explicit refresh.
pub fn apply<S: RenderSurface>(
    action: Action,
    service: &mut DashboardService<S>,
    view: &mut AppState,
) -> Effect {
    let before = service.range();

    match action {
        Action::Quit => return Effect::Quit,
        Action::Refresh => return Effect::Fetch,
        Action::PreviousDay => {
            service.previous_day();
        }
        Action::NextDay => {
            service.next_day();
        }
        Action::Preset(preset) => {
            let _ = service.select_preset(preset.label());
        }
        Action::ToggleMenu => service.selector_mut().toggle_menu(),
        Action::MenuUp => service.selector_mut().menu_up(),
        Action::MenuDown => service.selector_mut().menu_down(),
        Action::MenuConfirm => {
            service.selector_mut().confirm_menu();
        }
        Action::StartDateEntry => view.mode = InputMode::DateEntry(String::new()),
        Action::DateChar(c) => {
            if let InputMode::DateEntry(buffer) = &mut view.mode {
                if buffer.len() < 10 {
                    buffer.push(c);
                }
            }
        }
        Action::DateBackspace => {
            if let InputMode::DateEntry(buffer) = &mut view.mode {
                buffer.pop();
            }
        }
        Action::DateCancel => view.mode = InputMode::Normal,
        Action::DateSubmit => {
            if let InputMode::DateEntry(buffer) = std::mem::replace(&mut view.mode, InputMode::Normal)
            {
                match parse_picked_date(&buffer) {
                    Ok(date) => {
                        let _ = service.pick_date(date);
                    }
                    Err(e) => service.report(&e),
                }
            }
        }
    }

    if service.range() != before {
        Effect::Fetch
    } else {
        Effect::None
    }
}
