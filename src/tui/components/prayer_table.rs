//! # PrayerTable Component
//!
//! The six-row table of the day's prayer times: emoji, English name,
//! Arabic name, time. Unknown entries render the `--:--` sentinel, so
//! a provider outage still produces a complete table. The row for the
//! upcoming prayer is highlighted.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Row, Table};

use crate::core::schedule::{PrayerName, PrayerSchedule, select_next};
use crate::tui::component::Component;

pub struct PrayerTable {
    /// None = nothing fetched yet; renders all sentinels.
    pub schedule: Option<PrayerSchedule>,
    /// Panel title, e.g. "Prayer Times — Yangzhou (扬州), 2025-06-15".
    pub title: String,
    /// The prayer to highlight as upcoming, if any.
    pub upcoming: Option<PrayerName>,
}

impl PrayerTable {
    /// Builds the component from app state and the current instant.
    pub fn from_schedule(
        schedule: Option<PrayerSchedule>,
        title: String,
        now: chrono::NaiveDateTime,
    ) -> Self {
        let upcoming = schedule
            .map(|s| select_next(&s, now))
            .filter(|next| !next.time.is_unknown())
            .map(|next| next.name);
        Self {
            schedule,
            title,
            upcoming,
        }
    }
}

impl Component for PrayerTable {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let schedule = self.schedule.unwrap_or_else(PrayerSchedule::unknown);

        let rows = schedule.entries().map(|(name, time)| {
            let style = if self.upcoming == Some(name) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                name.emoji().to_string(),
                name.label().to_string(),
                name.arabic().to_string(),
                time.to_string(),
            ])
            .style(style)
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Fill(1),
            ],
        )
        .block(Block::bordered().title(self.title.clone()));

        frame.render_widget(table, area);
    }
}
