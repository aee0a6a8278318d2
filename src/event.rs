use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};

use crate::error::Result;

/// Application events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}

impl Event {
    /// Convert a raw crossterm event. Key releases/repeats, focus and paste
    /// events are dropped.
    pub fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
            _ => None,
        }
    }
}

/// Blocking event source over the terminal.
///
/// Events are read one at a time on the calling thread; there is no
/// background reader.
#[derive(Debug, Default)]
pub struct EventSource;

impl EventSource {
    pub fn new() -> Self {
        Self
    }

    /// Block until the next relevant event arrives.
    pub fn next(&mut self) -> Result<Event> {
        loop {
            if let Some(event) = Event::from_crossterm(event::read()?) {
                return Ok(event);
            }
        }
    }
}
