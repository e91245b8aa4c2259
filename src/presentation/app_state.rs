// View state of the terminal UI
use crate::application::dashboard_service::Notice;
use std::time::{Duration, Instant};

const NOTICE_TTL: Duration = Duration::from_secs(5);
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing a date for the picker.
    DateEntry(String),
}

#[derive(Debug)]
pub struct AppState {
    pub mode: InputMode,
    pub poll_interval: Duration,
    notice: Option<(Notice, Instant)>,
    tick: usize,
}

impl AppState {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            mode: InputMode::Normal,
            poll_interval,
            notice: None,
            tick: 0,
        }
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some((notice, Instant::now()));
    }

    /// The latest notice while it is still fresh.
    pub fn visible_notice(&self, now: Instant) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|(_, shown)| now.saturating_duration_since(*shown) < NOTICE_TTL)
            .map(|(notice, _)| notice)
    }

    pub fn advance(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn spinner(&self) -> char {
        SPINNER[self.tick % SPINNER.len()]
    }

    pub fn interval_text(&self) -> String {
        let secs = self.poll_interval.as_secs();
        if secs % 60 == 0 {
            let minutes = secs / 60;
            format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
        } else {
            format!("{secs} seconds")
        }
    }
}
