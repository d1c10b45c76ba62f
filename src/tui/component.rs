use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the props-in-struct pattern: they receive their
/// data as struct fields and render into a `Rect`. All of minaret's
/// components are stateless — they are rebuilt from `App` state every
/// frame, which keeps the render path a pure function of the state and
/// the clock.
pub trait Component {
    /// Render the component into the given area.
    fn render(&self, frame: &mut Frame, area: Rect);
}
