//! Keyboard key codes recognized by the UI layer.

/// A recognized keyboard key, mapped to its platform-standard numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Key {
    /// The Tab key.
    Tab = 9,
    /// The Enter key.
    Enter = 13,
    /// The Escape key.
    Esc = 27,
    /// The up arrow key.
    Up = 38,
    /// The down arrow key.
    Down = 40,
}

impl Key {
    /// The numeric key code.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Look up a key by its numeric code.
    pub fn from_code(code: u16) -> Option<Key> {
        match code {
            9 => Some(Key::Tab),
            13 => Some(Key::Enter),
            27 => Some(Key::Esc),
            38 => Some(Key::Up),
            40 => Some(Key::Down),
            _ => None,
        }
    }
}
