//! Mirror relay
//!
//! Forwards every command handled on the host to the peer node, one datagram
//! per command. Delivery is best effort: a failed send is logged and counted,
//! never retried, and never blocks the caller.

use core::fmt::Debug;

use log::warn;

use crate::command::Command;

/// Outbound half of the datagram link
pub trait DatagramSink {
    type Error: Debug;

    /// Send one datagram without waiting for the transport
    fn send_datagram(&mut self, payload: &[u8]) -> Result<(), Self::Error>;
}

/// Counters of mirrored commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayStats {
    pub sent: u32,
    pub failed: u32,
}

/// Fire-and-forget command forwarder
pub struct MirrorRelay<S: DatagramSink> {
    sink: S,
    stats: RelayStats,
}

impl<S: DatagramSink> MirrorRelay<S> {
    pub const fn new(sink: S) -> Self {
        Self {
            sink,
            stats: RelayStats { sent: 0, failed: 0 },
        }
    }

    /// Serialize `command` and send it to the peer
    pub fn mirror(&mut self, command: &Command) {
        let token = command.serialize();
        match self.sink.send_datagram(token.as_bytes()) {
            Ok(()) => self.stats.sent = self.stats.sent.wrapping_add(1),
            Err(e) => {
                self.stats.failed = self.stats.failed.wrapping_add(1);
                warn!("relay: failed to mirror {}: {:?}", command, e);
            }
        }
    }

    pub fn stats(&self) -> RelayStats {
        self.stats
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
