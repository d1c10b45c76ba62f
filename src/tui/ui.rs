use chrono::NaiveDateTime;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::schedule::{format_remaining, select_next};
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{NextPrayerPanel, PrayerTable, TitleBar};

/// Renders one frame from the app state and the current instant.
///
/// `now` is passed in from the event loop rather than read here, so the
/// whole render path stays deterministic: state + clock in, frame out.
pub fn draw_ui(frame: &mut Frame, app: &App, now: NaiveDateTime) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(4), Min(8), Length(1)]);
    let [title_area, next_area, table_area, footer_area] = layout.areas(frame.area());

    TitleBar {
        clock: now.format("%H:%M:%S").to_string(),
        status_message: app.status_message.clone(),
        is_loading: app.is_loading,
    }
    .render(frame, title_area);

    draw_next_prayer(frame, next_area, app, now);

    let title = format!(
        "📋 Prayer Times — {}, {} — {}",
        app.city().name,
        app.province().name,
        app.date.format("%B %d, %Y")
    );
    PrayerTable::from_schedule(app.schedule, title, now).render(frame, table_area);

    draw_footer(frame, footer_area);
}

fn draw_next_prayer(frame: &mut Frame, area: Rect, app: &App, now: NaiveDateTime) {
    // Before the first fetch lands there is no next prayer to name.
    let panel = match &app.schedule {
        Some(schedule) => {
            let next = select_next(schedule, now);
            NextPrayerPanel {
                name: next.name.label().to_string(),
                time: next.time.to_string(),
                remaining: format_remaining(next.time, now),
            }
        }
        None => NextPrayerPanel {
            name: String::from("..."),
            time: crate::core::schedule::SENTINEL.to_string(),
            remaining: None,
        },
    };
    panel.render(frame, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let hints = "←/→ province  ↑/↓ city  PgUp/PgDn date  t today  r refresh  q quit";
    frame.render_widget(
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        area,
    );
}
