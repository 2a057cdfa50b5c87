use embassy_net::tcp::TcpSocket;
use embedded_io_async::Write as _;
use heapless::{String, Vec};

use super::headers::{
    ContentHeaders, ContentType, HttpMethod, ResponseHeaders, TextEncoding, parse_request_line,
    read_heading,
};
use super::{Error, HttpResult};

const HEADER_BUFFER_SIZE: usize = 1024;
const TARGET_MAX_LEN: usize = 512;

/// HTTP connection context
pub struct HttpConnection<'a> {
    pub method: HttpMethod,
    pub target: String<TARGET_MAX_LEN>,

    socket: TcpSocket<'a>,
    header_buf: Vec<u8, HEADER_BUFFER_SIZE>,
}

impl<'a> HttpConnection<'a> {
    /// Read the request heading from a freshly accepted socket.
    pub(crate) async fn from_socket(mut socket: TcpSocket<'a>) -> Result<Self, Error> {
        let mut raw = [0u8; HEADER_BUFFER_SIZE];
        let len = read_heading(&mut raw, &mut socket).await?;

        let header_str = core::str::from_utf8(&raw[..len]).map_err(|_| Error::Parse)?;
        let (method, raw_target) = parse_request_line(header_str).ok_or(Error::Parse)?;

        let mut target = String::new();
        target.push_str(raw_target).map_err(|()| Error::Parse)?;
        Ok(Self {
            method,
            target,
            socket,
            header_buf: Vec::new(),
        })
    }

    /// Get request method and target
    pub fn route(&self) -> (HttpMethod, &'_ str) {
        (self.method, self.target.as_str())
    }

    /// Write the headers to the connection
    pub async fn write_headers(&mut self, headers: &ResponseHeaders) -> HttpResult {
        self.header_buf.clear();
        headers.write_to(&mut HeaderWriter(&mut self.header_buf))?;
        self.socket.write_all(self.header_buf.as_slice()).await?;
        self.socket.flush().await?;
        Ok(())
    }

    /// Write the body to the connection
    pub async fn write_body(&mut self, body: &[u8]) -> HttpResult {
        self.socket.write_all(body).await?;
        self.socket.flush().await?;
        Ok(())
    }

    /// Write a complete plain text response
    pub async fn write_text(&mut self, headers: ResponseHeaders, body: &str) -> HttpResult {
        let content = ContentHeaders::new(ContentType::TextPlain)
            .with_text_encoding(TextEncoding::Utf8)
            .with_length(body.len());
        self.write_headers(&headers.with_content(content)).await?;
        self.write_body(body.as_bytes()).await
    }

    /// Close the connection gracefully
    pub async fn close(mut self) {
        self.socket.close();
        let _ = self.socket.flush().await;
    }
}

/// `fmt::Write` adapter over the header byte buffer
struct HeaderWriter<'b>(&'b mut Vec<u8, HEADER_BUFFER_SIZE>);

impl core::fmt::Write for HeaderWriter<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.0
            .extend_from_slice(s.as_bytes())
            .map_err(|()| core::fmt::Error)
    }
}
