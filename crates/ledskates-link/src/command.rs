//! Command data model and wire codec
//!
//! A command is a single-character key followed by a raw value string.
//! On the wire it is sent as one datagram with the key character immediately
//! followed by the value, no separator and no terminator.

use core::fmt;

use heapless::String;

/// Maximum size of a serialized command, in bytes
pub const MAX_DATAGRAM_LEN: usize = 255;

/// Serialized command, ready to be sent as one datagram
pub type Token = String<MAX_DATAGRAM_LEN>;

/// Raw command value
pub type CommandValue = String<MAX_DATAGRAM_LEN>;

const KEY_COLOR: char = 'c';
const KEY_MODE: char = 'm';
const KEY_BRIGHTNESS: char = 'b';
const KEY_SPEED: char = 's';
const KEY_AUTO_CYCLE: char = 'a';

/// Routing key of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKey {
    /// `c`: 24-bit RGB color
    Color,
    /// `m`: effect mode index
    Mode,
    /// `b`: brightness, absolute or relative
    Brightness,
    /// `s`: animation speed, absolute or relative
    Speed,
    /// `a`: auto-cycle toggle
    AutoCycle,
    /// Any other key. Dispatching it is a no-op.
    Unrecognized(char),
}

impl CommandKey {
    pub const fn from_char(key: char) -> Self {
        match key {
            KEY_COLOR => Self::Color,
            KEY_MODE => Self::Mode,
            KEY_BRIGHTNESS => Self::Brightness,
            KEY_SPEED => Self::Speed,
            KEY_AUTO_CYCLE => Self::AutoCycle,
            other => Self::Unrecognized(other),
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Color => KEY_COLOR,
            Self::Mode => KEY_MODE,
            Self::Brightness => KEY_BRIGHTNESS,
            Self::Speed => KEY_SPEED,
            Self::AutoCycle => KEY_AUTO_CYCLE,
            Self::Unrecognized(other) => other,
        }
    }

    /// Check if the key belongs to the recognized alphabet
    pub const fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

/// Error returned when a command cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The key (or the whole token) is empty
    EmptyKey,
    /// The serialized command would not fit into one datagram
    TooLong,
    /// The datagram payload is not valid UTF-8
    InvalidUtf8,
    /// The key or value contains a NUL byte, which ends a datagram
    ContainsNul,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyKey => write!(f, "Empty command key"),
            ParseError::TooLong => write!(f, "Command exceeds {} bytes", MAX_DATAGRAM_LEN),
            ParseError::InvalidUtf8 => write!(f, "Command is not valid UTF-8"),
            ParseError::ContainsNul => write!(f, "Command contains a NUL byte"),
        }
    }
}

/// Parsed key/value directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    key: CommandKey,
    value: CommandValue,
}

impl Command {
    /// Create a command from a key and a value.
    ///
    /// Fails with [`ParseError::TooLong`] if the serialized form would not fit
    /// into a single datagram, and with [`ParseError::ContainsNul`] if it would
    /// not survive [`Command::from_datagram`].
    pub fn new(key: CommandKey, value: &str) -> Result<Self, ParseError> {
        if key.as_char().len_utf8() + value.len() > MAX_DATAGRAM_LEN {
            return Err(ParseError::TooLong);
        }
        if key.as_char() == '\0' || value.contains('\0') {
            return Err(ParseError::ContainsNul);
        }
        let mut buf = CommandValue::new();
        buf.push_str(value).map_err(|()| ParseError::TooLong)?;

        Ok(Self { key, value: buf })
    }

    /// Parse a command from separate key and value fields.
    ///
    /// Only the first character of `key` is used for routing, `value` is kept
    /// whole.
    pub fn parse(key: &str, value: &str) -> Result<Self, ParseError> {
        let key = key.chars().next().ok_or(ParseError::EmptyKey)?;
        Self::new(CommandKey::from_char(key), value)
    }

    /// Parse a command from a single token: the first character is the key,
    /// the rest is the value.
    pub fn parse_token(token: &str) -> Result<Self, ParseError> {
        let mut chars = token.chars();
        let key = chars.next().ok_or(ParseError::EmptyKey)?;
        Self::new(CommandKey::from_char(key), chars.as_str())
    }

    /// Parse a command from a received datagram payload.
    ///
    /// The payload ends at the first NUL byte, if any.
    pub fn from_datagram(payload: &[u8]) -> Result<Self, ParseError> {
        let end = payload
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(payload.len());
        let token =
            core::str::from_utf8(&payload[..end]).map_err(|_| ParseError::InvalidUtf8)?;
        Self::parse_token(token)
    }

    /// Serialize the command into its wire token
    pub fn serialize(&self) -> Token {
        let mut token = Token::new();
        // Both pushes fit, the length is checked on construction
        let _ = token.push(self.key.as_char());
        let _ = token.push_str(&self.value);
        token
    }

    pub fn key(&self) -> CommandKey {
        self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Length of the serialized command, in bytes
    pub fn encoded_len(&self) -> usize {
        self.key.as_char().len_utf8() + self.value.len()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key.as_char(), self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_alphabet_round_trips() {
        for key in ['c', 'm', 'b', 's', 'a', 'x', 'é'] {
            assert_eq!(CommandKey::from_char(key).as_char(), key);
        }
        assert!(CommandKey::from_char('b').is_recognized());
        assert!(!CommandKey::from_char('x').is_recognized());
    }

    #[test]
    fn new_rejects_oversized_value() {
        let value = "9".repeat(MAX_DATAGRAM_LEN);
        assert_eq!(
            Command::new(CommandKey::Color, &value),
            Err(ParseError::TooLong)
        );
        assert!(Command::new(CommandKey::Color, &value[1..]).is_ok());
    }

    #[test]
    fn nul_is_rejected_in_key_and_value() {
        assert_eq!(
            Command::new(CommandKey::Brightness, "1\02"),
            Err(ParseError::ContainsNul)
        );
        assert_eq!(Command::parse("\0", "1"), Err(ParseError::ContainsNul));
    }

    #[test]
    fn multibyte_key_counts_towards_length() {
        let value = "1".repeat(MAX_DATAGRAM_LEN - 1);
        assert_eq!(Command::parse("é", &value), Err(ParseError::TooLong));
    }
}
