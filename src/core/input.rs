use std::fmt;

/// Keys the checklist reacts to, decoded from single raw input bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// `k`
    Up,
    /// `j`
    Down,
    /// Backspace / DEL
    Uncheck,
    /// Enter
    Check,
    /// Space
    Toggle,
    /// `q`, Ctrl-C
    Quit,
    /// Anything else; ignored by the navigator
    Other(u8),
}

impl Key {
    /// Decode one byte of terminal input.
    ///
    /// Raw mode delivers the Return key as CR, so both CR and LF count as
    /// Enter. Ctrl-C arrives as a plain byte because raw mode disables the
    /// terminal's own interrupt handling.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'k' => Key::Up,
            b'j' => Key::Down,
            0x7f => Key::Uncheck,
            b'\n' | b'\r' => Key::Check,
            b' ' => Key::Toggle,
            b'q' | 0x03 => Key::Quit,
            other => Key::Other(other),
        }
    }
}

impl From<u8> for Key {
    fn from(byte: u8) -> Self {
        Key::from_byte(byte)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Up => write!(f, "k"),
            Key::Down => write!(f, "j"),
            Key::Uncheck => write!(f, "DEL"),
            Key::Check => write!(f, "RET"),
            Key::Toggle => write!(f, "SPC"),
            Key::Quit => write!(f, "q"),
            Key::Other(b) => write!(f, "0x{:02x}", b),
        }
    }
}
