//! UDP link between the nodes
//!
//! Both link halves are non-blocking: each call polls the socket exactly once
//! and never waits for buffer space or incoming data.

use core::fmt;
use core::task::Poll;

use embassy_futures::poll_once;
use embassy_net::udp::{BindError, PacketMetadata, RecvError, SendError, UdpSocket};
use embassy_net::{IpEndpoint, Stack};

use ledskates_link::{DatagramSink, DatagramSource, MAX_DATAGRAM_LEN};

const PACKET_SLOTS: usize = 4;
const BUFFER_SIZE: usize = 4 * MAX_DATAGRAM_LEN;

#[derive(Debug)]
pub enum LinkError {
    Bind(BindError),
    /// Transmit buffer is full
    Busy,
    Send(SendError),
    Recv(RecvError),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::Bind(e) => write!(f, "bind failed: {e:?}"),
            LinkError::Busy => write!(f, "transmit buffer full"),
            LinkError::Send(e) => write!(f, "send failed: {e:?}"),
            LinkError::Recv(e) => write!(f, "receive failed: {e:?}"),
        }
    }
}

/// Socket storage, must outlive the link
pub struct LinkBuffers {
    rx_meta: [PacketMetadata; PACKET_SLOTS],
    rx_buffer: [u8; BUFFER_SIZE],
    tx_meta: [PacketMetadata; PACKET_SLOTS],
    tx_buffer: [u8; BUFFER_SIZE],
}

impl LinkBuffers {
    pub const fn new() -> Self {
        Self {
            rx_meta: [PacketMetadata::EMPTY; PACKET_SLOTS],
            rx_buffer: [0; BUFFER_SIZE],
            tx_meta: [PacketMetadata::EMPTY; PACKET_SLOTS],
            tx_buffer: [0; BUFFER_SIZE],
        }
    }
}

impl Default for LinkBuffers {
    fn default() -> Self {
        Self::new()
    }
}

/// Bound UDP socket plus the peer datagrams are mirrored to
pub struct UdpLink<'a> {
    socket: UdpSocket<'a>,
    peer: IpEndpoint,
}

impl<'a> UdpLink<'a> {
    /// Bind the link on `port`
    ///
    /// # Arguments
    /// * `peer` - Destination of outgoing datagrams (unused by the client)
    pub fn bind(
        stack: Stack<'a>,
        buffers: &'a mut LinkBuffers,
        port: u16,
        peer: IpEndpoint,
    ) -> Result<Self, LinkError> {
        let mut socket = UdpSocket::new(
            stack,
            &mut buffers.rx_meta,
            &mut buffers.rx_buffer,
            &mut buffers.tx_meta,
            &mut buffers.tx_buffer,
        );
        socket.bind(port).map_err(LinkError::Bind)?;
        log::info!("udp: bound to port {}", port);

        Ok(Self { socket, peer })
    }
}

impl DatagramSink for UdpLink<'_> {
    type Error = LinkError;

    fn send_datagram(&mut self, payload: &[u8]) -> Result<(), Self::Error> {
        match poll_once(self.socket.send_to(payload, self.peer)) {
            Poll::Ready(result) => result.map_err(LinkError::Send),
            Poll::Pending => Err(LinkError::Busy),
        }
    }
}

impl DatagramSource for UdpLink<'_> {
    type Error = LinkError;

    fn try_recv_datagram(&mut self, buf: &mut [u8]) -> Result<Option<usize>, Self::Error> {
        match poll_once(self.socket.recv_from(buf)) {
            Poll::Ready(Ok((len, _meta))) => Ok(Some(len)),
            // Oversized datagrams come back as `RecvError::Truncated`
            Poll::Ready(Err(e)) => Err(LinkError::Recv(e)),
            Poll::Pending => Ok(None),
        }
    }
}
