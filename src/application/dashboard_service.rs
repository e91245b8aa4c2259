// Dashboard service - Owns the dashboard state and drives fetch, present and render
use crate::application::presenter::RangeDataPresenter;
use crate::application::range_selector::RangeSelector;
use crate::application::render::{ChartSlot, RenderSurface};
use crate::application::telemetry_source::TelemetrySource;
use crate::domain::chart::ChartConfig;
use crate::domain::error::{DashboardError, FetchError};
use crate::domain::range::RangeDescriptor;
use crate::domain::telemetry::TelemetryRows;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A user-visible message raised by the service and drained by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn error(err: &DashboardError) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: err.to_string(),
        }
    }

    fn info(message: String) -> Self {
        Self {
            level: NoticeLevel::Info,
            message,
        }
    }
}

/// Result of one fetch, tagged with the range it was issued for.
#[derive(Debug)]
pub struct FetchOutcome {
    pub range: RangeDescriptor,
    pub result: Result<TelemetryRows, FetchError>,
}

/// Everything the dashboard shows. Only the service mutates it.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Rows currently displayed and the range they were fetched for.
    pub displayed: Option<(RangeDescriptor, TelemetryRows)>,
    pub chart: Option<ChartConfig>,
    /// True until the first fetch settles.
    pub loading: bool,
    pub in_flight: usize,
    pub last_updated: Option<Instant>,
    pub notices: Vec<Notice>,
}

impl DashboardState {
    pub fn is_fetching(&self) -> bool {
        self.in_flight > 0
    }

    pub fn displayed_range(&self) -> Option<RangeDescriptor> {
        self.displayed.as_ref().map(|(range, _)| *range)
    }
}

pub struct DashboardService<S: RenderSurface> {
    source: Arc<dyn TelemetrySource>,
    selector: RangeSelector,
    presenter: RangeDataPresenter,
    slot: ChartSlot<S>,
    state: DashboardState,
}

impl<S: RenderSurface> DashboardService<S> {
    pub fn new(source: Arc<dyn TelemetrySource>, selector: RangeSelector, surface: S) -> Self {
        Self {
            source,
            selector,
            presenter: RangeDataPresenter::new(),
            slot: ChartSlot::new(surface),
            state: DashboardState {
                loading: true,
                ..DashboardState::default()
            },
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn selector(&self) -> &RangeSelector {
        &self.selector
    }

    pub fn range(&self) -> RangeDescriptor {
        self.selector.range()
    }

    pub fn chart_instance(&self) -> Option<&S::Instance> {
        self.slot.current()
    }

    pub fn previous_day(&mut self) -> RangeDescriptor {
        let range = self.selector.previous_day();
        tracing::info!("Range changed to {}", range.as_query());
        range
    }

    pub fn next_day(&mut self) -> Option<RangeDescriptor> {
        let range = self.selector.next_day();
        match range {
            Some(range) => tracing::info!("Range changed to {}", range.as_query()),
            None => tracing::debug!("Ignoring next day, already at today"),
        }
        range
    }

    pub fn pick_date(&mut self, date: NaiveDate) -> Result<RangeDescriptor, DashboardError> {
        let range = self.selector.pick_date(date).inspect_err(|e| self.report(e))?;
        tracing::info!("Range changed to {}", range.as_query());
        Ok(range)
    }

    pub fn select_preset(&mut self, label: &str) -> Result<RangeDescriptor, DashboardError> {
        let range = self
            .selector
            .select_preset(label)
            .inspect_err(|e| self.report(e))?;
        tracing::info!("Range changed to {}", range.as_query());
        Ok(range)
    }

    /// Pass-through for menu handling that does not change the range by itself.
    pub fn selector_mut(&mut self) -> &mut RangeSelector {
        &mut self.selector
    }

    /// Record a user-visible error.
    pub fn report(&mut self, err: &DashboardError) {
        tracing::warn!("{}", err);
        self.state.notices.push(Notice::error(err));
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.state.notices)
    }

    /// Mark a fetch for the current range as in flight.
    pub fn begin_fetch(&mut self) -> RangeDescriptor {
        let range = self.selector.range();
        self.state.in_flight += 1;
        tracing::debug!(
            "Fetching range {} ({} in flight)",
            range.as_query(),
            self.state.in_flight
        );
        range
    }

    /// Apply a settled fetch. The last outcome to arrive wins.
    pub fn complete_fetch(&mut self, outcome: FetchOutcome) {
        self.state.in_flight = self.state.in_flight.saturating_sub(1);
        self.state.loading = false;

        let rows = match outcome.result {
            Ok(rows) => rows,
            Err(e) => {
                // keep whatever is on screen
                self.report(&DashboardError::Fetch(e));
                return;
            }
        };

        let chart = match self.presenter.present(outcome.range, &rows) {
            Ok(chart) => chart,
            Err(e) => {
                self.report(&e);
                return;
            }
        };

        tracing::info!(
            "Loaded {} rows for range {}",
            rows.len(),
            outcome.range.as_query()
        );

        match &chart {
            Some(config) => {
                self.slot.replace(config);
            }
            None => {
                self.slot.clear();
                self.state
                    .notices
                    .push(Notice::info(format!("No data for {}", outcome.range)));
            }
        }
        self.state.displayed = Some((outcome.range, rows));
        self.state.chart = chart;
        self.state.last_updated = Some(Instant::now());
    }

    /// Fetch the current range and apply the result in place.
    pub async fn refresh(&mut self) {
        let range = self.begin_fetch();
        let result = self.source.fetch(range).await;
        self.complete_fetch(FetchOutcome { range, result });
    }

    /// Fetch the current range on a background task; the outcome is sent on `tx`.
    pub fn spawn_fetch(&mut self, tx: mpsc::Sender<FetchOutcome>) {
        let range = self.begin_fetch();
        let source = self.source.clone();
        tokio::spawn(async move {
            let result = source.fetch(range).await;
            if let Err(e) = &result {
                tracing::error!("Fetch for range {} failed: {}", range.as_query(), e);
            }
            let _ = tx.send(FetchOutcome { range, result }).await;
        });
    }
}
