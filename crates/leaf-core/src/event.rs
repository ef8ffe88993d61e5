use crossterm::event::{KeyEvent, MouseEvent};

/// Terminal input delivered through the
/// [`terminal_events`](crate::subscriptions::terminal_events) subscription.
///
/// Key and mouse variants carry the raw [`crossterm`] payloads so widgets can
/// match on key codes, buttons, and modifiers directly. Focus and paste
/// events are dropped; nothing in leaf reacts to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event (clicks, drags, wheel).
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
}

impl TerminalEvent {
    /// Convert a crossterm event, discarding the kinds leaf does not route.
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        match event {
            crossterm::event::Event::Key(k) => Some(TerminalEvent::Key(k)),
            crossterm::event::Event::Mouse(m) => Some(TerminalEvent::Mouse(m)),
            crossterm::event::Event::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
            _ => None,
        }
    }
}
