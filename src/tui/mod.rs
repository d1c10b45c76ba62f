//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The countdown and the header clock tick once per second, so the loop
//! polls for input with a short timeout and redraws whenever the
//! displayed second changes, an input event arrives, or a fetch result
//! lands. Between ticks the loop just sleeps in `event::poll`.
//!
//! ## Fetches
//!
//! HTTP never happens on the UI thread. An `Effect::Fetch` from the
//! reducer spawns a tokio task that resolves the query through
//! `fetch_or_unknown` (so failures are already collapsed to sentinel
//! schedules) and sends the result back over an mpsc channel as an
//! `Action::ScheduleLoaded`.

mod component;
mod components;
mod event;
mod ui;

use std::io::stdout;
use std::sync::{Arc, mpsc};

use chrono::{Local, NaiveDate};
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use log::{info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::timings::{AladhanProvider, TimingsProvider, TimingsQuery, fetch_or_unknown};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> Self {
        // The cursor just flickers over the table; hide it for the session.
        let _ = execute!(stdout(), Hide);
        Self
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

pub fn run(config: ResolvedConfig, start_date: Option<NaiveDate>) -> std::io::Result<()> {
    let provider: Arc<dyn TimingsProvider> =
        Arc::new(AladhanProvider::new(Some(config.base_url.clone())));

    let mut app = App::new(&config, Local::now().date_naive());
    if let Some(date) = start_date {
        app.date = date;
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel::<Action>();

    // Initial fetch for the configured location and date
    run_effect(
        update(&mut app, Action::Refresh),
        provider.clone(),
        tx.clone(),
    );

    let mut last_drawn_clock = String::new();
    let mut needs_redraw = true;

    loop {
        let now = Local::now().naive_local();

        // The visible clock has one-second resolution; redraw on tick.
        let clock = now.format("%H:%M:%S").to_string();
        if clock != last_drawn_clock {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, now))?;
            last_drawn_clock = clock;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                TuiEvent::Quit => {
                    should_quit = true;
                    continue;
                }
                TuiEvent::Resize => continue, // redraw already flagged
                TuiEvent::NextProvince => Action::NextProvince,
                TuiEvent::PrevProvince => Action::PrevProvince,
                TuiEvent::NextCity => Action::NextCity,
                TuiEvent::PrevCity => Action::PrevCity,
                TuiEvent::NextDay => Action::NextDay,
                TuiEvent::PrevDay => Action::PrevDay,
                TuiEvent::BackToToday => Action::BackToToday,
                TuiEvent::Refresh => Action::Refresh,
            };
            run_effect(update(&mut app, action), provider.clone(), tx.clone());
        }

        if should_quit {
            break;
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            run_effect(update(&mut app, action), provider.clone(), tx.clone());
        }
    }

    ratatui::restore();
    Ok(())
}

fn run_effect(effect: Effect, provider: Arc<dyn TimingsProvider>, tx: mpsc::Sender<Action>) {
    match effect {
        Effect::None => {}
        Effect::Fetch(query) => spawn_fetch(provider, query, tx),
    }
}

fn spawn_fetch(provider: Arc<dyn TimingsProvider>, query: TimingsQuery, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning timings fetch: {} ({}, {})",
        query.date, query.latitude, query.longitude
    );
    tokio::spawn(async move {
        let schedule = fetch_or_unknown(provider.as_ref(), &query).await;
        if tx.send(Action::ScheduleLoaded { query, schedule }).is_err() {
            warn!("Fetch result dropped: receiver gone");
        }
    });
}
