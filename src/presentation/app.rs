// Terminal event loop
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use crate::application::dashboard_service::DashboardService;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{self, Effect};
use crate::presentation::panels::draw_dashboard;
use crate::presentation::surface::TerminalSurface;

const FRAME_TIME: Duration = Duration::from_millis(100);

/// Run the dashboard until the user quits. The terminal is restored on every exit path.
pub async fn run(
    mut service: DashboardService<TerminalSurface>,
    poll_interval: Duration,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut service, poll_interval).await;
    ratatui::restore();
    result
}

async fn event_loop(
    terminal: &mut DefaultTerminal,
    service: &mut DashboardService<TerminalSurface>,
    poll_interval: Duration,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::channel(16);
    let mut view = AppState::new(poll_interval);

    // initial load
    service.spawn_fetch(tx.clone());
    let mut last_poll = Instant::now();

    loop {
        let frame_start = Instant::now();

        while let Ok(outcome) = rx.try_recv() {
            service.complete_fetch(outcome);
        }
        for notice in service.take_notices() {
            view.show_notice(notice);
        }

        if last_poll.elapsed() >= poll_interval {
            tracing::debug!("Poll interval elapsed, refreshing {}", service.range().as_query());
            service.spawn_fetch(tx.clone());
            last_poll = Instant::now();
        }

        terminal.draw(|f| draw_dashboard(f, service, &view))?;
        view.advance();

        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            let menu_open = service.selector().state().menu_open;
            let Some(action) = handlers::action_for(key, &view.mode, menu_open) else {
                continue;
            };
            match handlers::apply(action, service, &mut view) {
                Effect::Quit => {
                    tracing::info!("Quit requested");
                    return Ok(());
                }
                Effect::Fetch => {
                    service.spawn_fetch(tx.clone());
                    last_poll = Instant::now();
                }
                Effect::None => {}
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            tokio::time::sleep(FRAME_TIME - elapsed).await;
        }
    }
}
