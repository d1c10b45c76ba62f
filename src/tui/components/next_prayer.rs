//! # NextPrayer Component
//!
//! The highlighted panel showing which prayer is next, at what time,
//! and how long remains. When the time is unknown (provider failure)
//! the countdown line is omitted entirely — the panel shows the
//! sentinel time and nothing else, it never shows a bogus duration.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub struct NextPrayerPanel {
    /// English name of the upcoming prayer.
    pub name: String,
    /// Rendered time, `HH:MM` or `--:--`.
    pub time: String,
    /// `"Xh Ym"` countdown; `None` renders no countdown line.
    pub remaining: Option<String>,
}

impl Component for NextPrayerPanel {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} {}", self.name, self.time),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(remaining) = &self.remaining {
            lines.push(Line::from(Span::styled(
                format!("⏰ {remaining} remaining"),
                Style::default().fg(Color::Yellow),
            )));
        }

        let panel = Paragraph::new(lines).block(
            Block::bordered()
                .title("🕌 Next Prayer")
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(panel, area);
    }
}
