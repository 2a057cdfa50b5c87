mod connection;
mod headers;
mod server;

pub use connection::HttpConnection;
pub use headers::{ContentHeaders, ContentType, HttpMethod, ResponseHeaders, TextEncoding};
pub(crate) use server::{HttpHandler, HttpServer};

#[derive(Debug)]
pub enum Error {
    /// Peer closed or reset the connection
    Closed,
    /// Request line is missing or malformed
    Parse,
    FormatHeaders,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Closed => write!(f, "connection closed"),
            Error::Parse => write!(f, "malformed request"),
            Error::FormatHeaders => write!(f, "response headers overflow"),
        }
    }
}

impl From<core::fmt::Error> for Error {
    fn from(_error: core::fmt::Error) -> Self {
        Error::FormatHeaders
    }
}

impl From<embassy_net::tcp::Error> for Error {
    fn from(err: embassy_net::tcp::Error) -> Self {
        match err {
            embassy_net::tcp::Error::ConnectionReset => Error::Closed,
        }
    }
}

pub type HttpResult = Result<(), Error>;
