//! Command intake
//!
//! Polls the datagram link for at most one pending command per call.

use core::fmt::Debug;

use log::warn;

use crate::command::{Command, MAX_DATAGRAM_LEN};

/// Inbound half of the datagram link
pub trait DatagramSource {
    type Error: Debug;

    /// Receive one pending datagram into `buf` without waiting.
    ///
    /// Returns `Ok(None)` when nothing is pending, otherwise the full payload
    /// length. A length above `buf.len()` reports a datagram that did not
    /// fit; only its first `buf.len()` bytes were copied.
    fn try_recv_datagram(&mut self, buf: &mut [u8]) -> Result<Option<usize>, Self::Error>;
}

/// Non-blocking command receiver
pub struct CommandIntake<S: DatagramSource> {
    source: S,
    buf: [u8; MAX_DATAGRAM_LEN],
}

impl<S: DatagramSource> CommandIntake<S> {
    pub const fn new(source: S) -> Self {
        Self {
            source,
            buf: [0; MAX_DATAGRAM_LEN],
        }
    }

    /// Take the next pending command, if any.
    ///
    /// Transport errors and malformed datagrams are logged and dropped.
    pub fn poll(&mut self) -> Option<Command> {
        let len = match self.source.try_recv_datagram(&mut self.buf) {
            Ok(Some(len)) if len > self.buf.len() => {
                warn!("intake: dropping oversized datagram ({} bytes)", len);
                return None;
            }
            Ok(Some(len)) => len,
            Ok(None) => return None,
            Err(e) => {
                warn!("intake: receive error: {:?}", e);
                return None;
            }
        };

        match Command::from_datagram(&self.buf[..len]) {
            Ok(command) => Some(command),
            Err(e) => {
                warn!("intake: dropping datagram: {}", e);
                None
            }
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
