// Range selector - Turns picker interactions into range descriptors
use crate::application::telemetry_source::Clock;
use crate::domain::error::DashboardError;
use crate::domain::range::{Preset, RangeDescriptor};
use chrono::{Days, NaiveDate};
use std::sync::Arc;

/// Transient picker state. Not persisted across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorState {
    pub range: RangeDescriptor,
    pub selected_date: NaiveDate,
    pub preset: Preset,
    pub menu_open: bool,
    pub menu_cursor: usize,
}

#[derive(Clone)]
pub struct RangeSelector {
    clock: Arc<dyn Clock>,
    state: SelectorState,
}

impl RangeSelector {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let today = clock.today();
        Self {
            clock,
            state: SelectorState {
                range: RangeDescriptor::Day,
                selected_date: today,
                preset: Preset::Day,
                menu_open: false,
                menu_cursor: 0,
            },
        }
    }

    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    pub fn range(&self) -> RangeDescriptor {
        self.state.range
    }

    /// Explicit date pick. Dates after today are outside the picker bound.
    pub fn pick_date(&mut self, date: NaiveDate) -> Result<RangeDescriptor, DashboardError> {
        let today = self.clock.today();
        if date > today {
            return Err(DashboardError::FutureDate(date));
        }
        Ok(self.apply_date(date, today))
    }

    pub fn previous_day(&mut self) -> RangeDescriptor {
        let today = self.clock.today();
        let date = self
            .state
            .selected_date
            .checked_sub_days(Days::new(1))
            .unwrap_or(self.state.selected_date);
        self.apply_date(date, today)
    }

    /// Returns `None`, leaving the state untouched, when tomorrow would be in the future.
    pub fn next_day(&mut self) -> Option<RangeDescriptor> {
        let today = self.clock.today();
        let date = self.state.selected_date.checked_add_days(Days::new(1))?;
        if date > today {
            return None;
        }
        Some(self.apply_date(date, today))
    }

    /// Preset selection by menu label.
    pub fn select_preset(&mut self, label: &str) -> Result<RangeDescriptor, DashboardError> {
        let preset = label.parse::<Preset>()?;
        Ok(self.select(preset))
    }

    pub fn select(&mut self, preset: Preset) -> RangeDescriptor {
        self.state.preset = preset;
        self.state.menu_open = false;
        self.state.range = match preset {
            Preset::Day => {
                self.state.selected_date = self.clock.today();
                RangeDescriptor::Day
            }
            Preset::LastWeek => RangeDescriptor::LastWeek,
            Preset::LastMonth => RangeDescriptor::LastMonth,
        };
        self.state.range
    }

    /// Move the selector onto an arbitrary descriptor, e.g. one given on the command line.
    pub fn apply(&mut self, range: RangeDescriptor) -> Result<RangeDescriptor, DashboardError> {
        match range {
            RangeDescriptor::Day => Ok(self.select(Preset::Day)),
            RangeDescriptor::Date(date) => self.pick_date(date),
            RangeDescriptor::LastWeek => Ok(self.select(Preset::LastWeek)),
            RangeDescriptor::LastMonth => Ok(self.select(Preset::LastMonth)),
        }
    }

    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
        if self.state.menu_open {
            self.state.menu_cursor = Preset::ALL
                .iter()
                .position(|p| *p == self.state.preset)
                .unwrap_or(0);
        }
    }

    pub fn menu_up(&mut self) {
        let len = Preset::ALL.len();
        self.state.menu_cursor = (self.state.menu_cursor + len - 1) % len;
    }

    pub fn menu_down(&mut self) {
        self.state.menu_cursor = (self.state.menu_cursor + 1) % Preset::ALL.len();
    }

    pub fn confirm_menu(&mut self) -> RangeDescriptor {
        let preset = Preset::ALL[self.state.menu_cursor % Preset::ALL.len()];
        self.select(preset)
    }

    fn apply_date(&mut self, date: NaiveDate, today: NaiveDate) -> RangeDescriptor {
        self.state.selected_date = date;
        self.state.preset = Preset::Day;
        self.state.range = RangeDescriptor::for_date(date, today);
        self.state.range
    }
}

/// Parse date-picker input, either `YYYY-MM-DD` or `DD.MM.YYYY`.
pub fn parse_picked_date(input: &str) -> Result<NaiveDate, DashboardError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%d.%m.%Y"))
        .map_err(|_| DashboardError::InvalidDate(input.to_string()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) struct FixedClock(pub NaiveDate);

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn selector_on(today: NaiveDate) -> RangeSelector {
        RangeSelector::new(Arc::new(FixedClock(today)))
    }

    #[test]
    fn test_pick_today_yields_day() {
        let mut selector = selector_on(date(2024, 5, 2));
        assert_eq!(selector.pick_date(date(2024, 5, 2)), Ok(RangeDescriptor::Day));
        assert_eq!(selector.range().as_query(), "day");
    }

    #[test]
    fn test_pick_other_date_yields_padded_token() {
        let mut selector = selector_on(date(2024, 5, 2));
        let range = selector.pick_date(date(2024, 1, 9)).unwrap();
        assert_eq!(range.as_query(), "20240109");
        assert_eq!(selector.state().selected_date, date(2024, 1, 9));
    }

    #[test]
    fn test_pick_future_date_is_rejected() {
        let mut selector = selector_on(date(2024, 5, 2));
        let before = selector.state().clone();
        assert_eq!(
            selector.pick_date(date(2024, 5, 3)),
            Err(DashboardError::FutureDate(date(2024, 5, 3)))
        );
        assert_eq!(selector.state(), &before);
    }

    #[test]
    fn test_previous_then_next_day() {
        let mut selector = selector_on(date(2024, 3, 1));

        assert_eq!(
            selector.previous_day(),
            RangeDescriptor::Date(date(2024, 2, 29))
        );
        assert_eq!(selector.next_day(), Some(RangeDescriptor::Day));
        assert_eq!(selector.state().selected_date, date(2024, 3, 1));
    }

    #[test]
    fn test_next_day_past_today_is_noop() {
        let mut selector = selector_on(date(2024, 5, 2));
        selector.toggle_menu();
        let before = selector.state().clone();

        assert_eq!(selector.next_day(), None);
        assert_eq!(selector.state(), &before);
    }

    #[test]
    fn test_previous_day_resets_preset_label() {
        let mut selector = selector_on(date(2024, 5, 2));
        selector.select(Preset::LastMonth);

        selector.previous_day();
        assert_eq!(selector.state().preset, Preset::Day);
        assert_eq!(selector.range(), RangeDescriptor::Date(date(2024, 5, 1)));
    }

    #[test]
    fn test_presets() {
        let mut selector = selector_on(date(2024, 5, 2));
        selector.previous_day();
        selector.previous_day();

        assert_eq!(selector.select_preset("Last Week"), Ok(RangeDescriptor::LastWeek));
        assert_eq!(selector.select_preset("Last Month"), Ok(RangeDescriptor::LastMonth));
        assert_eq!(selector.state().selected_date, date(2024, 4, 30));

        assert_eq!(selector.select_preset("Day"), Ok(RangeDescriptor::Day));
        assert_eq!(selector.state().selected_date, date(2024, 5, 2));
    }

    #[test]
    fn test_invalid_preset_leaves_state() {
        let mut selector = selector_on(date(2024, 5, 2));
        selector.select(Preset::LastWeek);
        let before = selector.state().clone();

        assert_eq!(
            selector.select_preset("Fortnight"),
            Err(DashboardError::InvalidPreset("Fortnight".to_string()))
        );
        assert_eq!(selector.state(), &before);
    }

    #[test]
    fn test_menu_navigation() {
        let mut selector = selector_on(date(2024, 5, 2));
        selector.toggle_menu();
        assert!(selector.state().menu_open);
        assert_eq!(selector.state().menu_cursor, 0);

        selector.menu_up();
        assert_eq!(selector.state().menu_cursor, 2);
        selector.menu_down();
        selector.menu_down();
        assert_eq!(selector.confirm_menu(), RangeDescriptor::LastWeek);
        assert!(!selector.state().menu_open);

        selector.toggle_menu();
        assert_eq!(selector.state().menu_cursor, 1);
    }

    #[test]
    fn test_apply_descriptor() {
        let mut selector = selector_on(date(2024, 5, 2));
        assert_eq!(
            selector.apply("20240420".parse().unwrap()),
            Ok(RangeDescriptor::Date(date(2024, 4, 20)))
        );
        assert_eq!(selector.apply(RangeDescriptor::LastMonth), Ok(RangeDescriptor::LastMonth));
        assert_eq!(selector.state().preset, Preset::LastMonth);
    }

    #[test]
    fn test_parse_picked_date() {
        assert_eq!(parse_picked_date("2024-05-01"), Ok(date(2024, 5, 1)));
        assert_eq!(parse_picked_date(" 01.05.2024 "), Ok(date(2024, 5, 1)));
        assert_eq!(
            parse_picked_date("May 1st"),
            Err(DashboardError::InvalidDate("May 1st".to_string()))
        );
    }
}
