use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// TUI-specific input events
pub enum TuiEvent {
    Quit,
    NextProvince,
    PrevProvince,
    NextCity,
    PrevCity,
    NextDay,
    PrevDay,
    BackToToday,
    Refresh,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            log::debug!("Key event: {:?}", key_event.code);
            match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(TuiEvent::Quit),
                KeyCode::Right => Some(TuiEvent::NextProvince),
                KeyCode::Left => Some(TuiEvent::PrevProvince),
                KeyCode::Down => Some(TuiEvent::NextCity),
                KeyCode::Up => Some(TuiEvent::PrevCity),
                KeyCode::PageDown => Some(TuiEvent::NextDay),
                KeyCode::PageUp => Some(TuiEvent::PrevDay),
                KeyCode::Char('t') => Some(TuiEvent::BackToToday),
                KeyCode::Char('r') => Some(TuiEvent::Refresh),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
