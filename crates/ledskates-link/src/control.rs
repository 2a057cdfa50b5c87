//! Control surface request decoding
//!
//! The host accepts `GET /set?k=v&k=v` requests. Every pair becomes one
//! [`Command`], in the order it appears in the query.

use core::fmt::{self, Write};

use heapless::{String, Vec};
use log::warn;

use crate::command::{Command, MAX_DATAGRAM_LEN, ParseError};
use crate::engine::EffectEngine;

/// Maximum number of commands taken from one request
pub const MAX_REQUEST_COMMANDS: usize = 8;

/// Commands carried by one control surface request, in submission order
pub type ControlRequest = Vec<Command, MAX_REQUEST_COMMANDS>;

const PATH_SET: &str = "/set";
const PATH_MODES: &str = "/modes";

/// Control surface endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// Apply the commands in the query string
    Set(&'a str),
    /// List the engine modes
    Modes,
    NotFound,
}

/// Resolve a request target (`/path?query`) to a route
pub fn route(target: &str) -> Route<'_> {
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    match path {
        PATH_SET => Route::Set(query),
        PATH_MODES => Route::Modes,
        _ => Route::NotFound,
    }
}

/// Decode the commands of a `/set` query string.
///
/// Pairs without `=` or with an empty key are skipped, as are pairs beyond
/// [`MAX_REQUEST_COMMANDS`].
pub fn parse_query(query: &str) -> ControlRequest {
    let mut request = ControlRequest::new();

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let Some((raw_key, raw_value)) = pair.split_once('=') else {
            continue;
        };
        let command = match decode_pair(raw_key, raw_value) {
            Ok(command) => command,
            Err(e) => {
                warn!("control: skipping argument {:?}: {}", raw_key, e);
                continue;
            }
        };
        if request.push(command).is_err() {
            warn!("control: more than {} arguments, rest dropped", MAX_REQUEST_COMMANDS);
            break;
        }
    }

    request
}

fn decode_pair(raw_key: &str, raw_value: &str) -> Result<Command, ParseError> {
    let key = url_decode(raw_key)?;
    let value = url_decode(raw_value)?;
    Command::parse(&key, &value)
}

/// Decode a URL-encoded component: `+` is a space, `%XX` is a byte.
///
/// A `%` not followed by two hex digits is kept literally.
pub fn url_decode(raw: &str) -> Result<String<MAX_DATAGRAM_LEN>, ParseError> {
    let mut bytes: Vec<u8, MAX_DATAGRAM_LEN> = Vec::new();
    let input = raw.as_bytes();
    let mut i = 0;

    while i < input.len() {
        let byte = match input[i] {
            b'+' => b' ',
            b'%' if i + 2 < input.len() => {
                match (hex_value(input[i + 1]), hex_value(input[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        i += 2;
                        (hi << 4) | lo
                    }
                    _ => b'%',
                }
            }
            other => other,
        };
        bytes.push(byte).map_err(|_| ParseError::TooLong)?;
        i += 1;
    }

    String::from_utf8(bytes).map_err(|_| ParseError::InvalidUtf8)
}

const fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Write the engine's mode names, one per line, in index order
pub fn write_mode_list<E: EffectEngine, W: Write>(engine: &E, out: &mut W) -> fmt::Result {
    for mode in 0..engine.mode_count() {
        writeln!(out, "{}", engine.mode_name(mode))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plus_and_percent() {
        assert_eq!(url_decode("a+b").unwrap().as_str(), "a b");
        assert_eq!(url_decode("%20").unwrap().as_str(), " ");
        assert_eq!(url_decode("%2d").unwrap().as_str(), "-");
        assert_eq!(url_decode("100%").unwrap().as_str(), "100%");
        assert_eq!(url_decode("%zz1").unwrap().as_str(), "%zz1");
        assert_eq!(url_decode("%C3%A9").unwrap().as_str(), "é");
    }

    #[test]
    fn rejects_invalid_utf8() {
        assert_eq!(url_decode("%FF"), Err(ParseError::InvalidUtf8));
    }
}
