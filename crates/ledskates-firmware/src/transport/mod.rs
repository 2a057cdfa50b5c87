mod udp;

pub use udp::{LinkBuffers, LinkError, UdpLink};
