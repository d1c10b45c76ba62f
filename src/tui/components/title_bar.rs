//! # TitleBar Component
//!
//! Top status bar: app name, a live HH:MM:SS clock, and the current
//! status message. Purely presentational — all three props come in from
//! the caller, so the component itself has nothing to get wrong about
//! where the time comes from.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar {
    pub clock: String,
    pub status_message: String,
    pub is_loading: bool,
}

impl Component for TitleBar {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "🕌 Minaret",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("🕐 {}", self.clock),
                Style::default().fg(Color::Yellow),
            ),
        ];
        if self.is_loading {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                "Fetching...",
                Style::default().fg(Color::Cyan),
            ));
        } else if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(self.status_message.clone()));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
