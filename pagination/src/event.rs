/// Events fired against the rendered control, targeted by element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Button press (mouse click or activation).
    Click { target: String },
    /// Selector value change.
    Change { target: String, value: String },
    /// Key press while the control has focus.
    Key { key: Key },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    pub fn change(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Change {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn key(key: Key) -> Self {
        Self::Key { key }
    }

    /// The targeted element id, if the event has one.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Click { target } | Self::Change { target, .. } => Some(target),
            Self::Key { .. } => None,
        }
    }
}

/// Whether the control handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Other,
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => Key::Other,
        }
    }
}
