use embassy_net::{Stack, tcp::TcpSocket};
use embassy_time::Duration;

use super::HttpResult;
use super::connection::HttpConnection;

const SOCKET_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) trait HttpHandler {
    async fn handle_request(&self, conn: &mut HttpConnection<'_>) -> HttpResult;
}

/// Single-connection HTTP server
pub(crate) struct HttpServer<'a, T: HttpHandler> {
    handler: &'a T,
}

impl<'a, T: HttpHandler> HttpServer<'a, T> {
    pub(crate) fn new(handler: &'a T) -> Self {
        Self { handler }
    }

    /// Accept and serve connections one at a time, forever
    pub(crate) async fn listen_and_serve(
        &self,
        stack: Stack<'static>,
        port: u16,
        rx_buffer: &mut [u8],
        tx_buffer: &mut [u8],
    ) -> ! {
        loop {
            let mut socket = TcpSocket::new(stack, rx_buffer, tx_buffer);
            socket.set_timeout(Some(SOCKET_TIMEOUT));

            if socket.accept(port).await.is_err() {
                continue;
            }

            if let Err(e) = self.handle_connection(socket).await {
                log::warn!("http: connection error: {}", e);
            }
        }
    }

    async fn handle_connection(&self, socket: TcpSocket<'_>) -> HttpResult {
        let mut connection = HttpConnection::from_socket(socket).await?;
        let result = self.handler.handle_request(&mut connection).await;
        connection.close().await;
        result
    }
}
