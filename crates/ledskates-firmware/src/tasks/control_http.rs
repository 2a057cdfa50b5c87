//! HTTP control surface of the host node
//!
//! `GET /set?k=v&...` queues the decoded commands for the host loop,
//! `GET /modes` lists the effect modes. The HTTP task never touches the
//! engine; the host loop drains the queue.

use embassy_net::Stack;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};
use log::{info, warn};

use ledskates_link::control::{self, Route};
use ledskates_link::ControlRequest;

use crate::config;
use crate::http::{HttpConnection, HttpHandler, HttpMethod, HttpResult, HttpServer, ResponseHeaders};

/// Requests waiting for the host loop
const CONTROL_QUEUE_SIZE: usize = 2;

const RX_BUFFER_SIZE: usize = 1024;
const TX_BUFFER_SIZE: usize = 1024;

pub static CONTROL_REQUESTS: Channel<CriticalSectionRawMutex, ControlRequest, CONTROL_QUEUE_SIZE> =
    Channel::new();

pub type ControlReceiver =
    Receiver<'static, CriticalSectionRawMutex, ControlRequest, CONTROL_QUEUE_SIZE>;

pub struct ControlHttpController {
    /// Mode names, one per line
    modes: &'static str,
}

impl ControlHttpController {
    pub const fn new(modes: &'static str) -> Self {
        Self { modes }
    }
}

impl HttpHandler for ControlHttpController {
    async fn handle_request(&self, conn: &mut HttpConnection<'_>) -> HttpResult {
        let (method, target) = conn.route();
        if method != HttpMethod::Get {
            return conn
                .write_text(ResponseHeaders::method_not_allowed(), "Method Not Allowed")
                .await;
        }

        match control::route(target) {
            Route::Set(query) => {
                let request = control::parse_query(query);
                info!("control_http: {} command(s)", request.len());
                if CONTROL_REQUESTS.try_send(request).is_err() {
                    warn!("control_http: host loop busy, request dropped");
                    return conn.write_text(ResponseHeaders::unavailable(), "Busy").await;
                }
                conn.write_text(ResponseHeaders::success(), "OK").await
            }
            Route::Modes => conn.write_text(ResponseHeaders::success(), self.modes).await,
            Route::NotFound => {
                conn.write_text(ResponseHeaders::not_found(), "File Not Found")
                    .await
            }
        }
    }
}

#[embassy_executor::task]
pub async fn control_http_task(stack: Stack<'static>, handler: ControlHttpController) {
    let server = HttpServer::new(&handler);
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];

    info!("control_http: listening on port {}", config::LINK.http_port);
    server
        .listen_and_serve(stack, config::LINK.http_port, &mut rx_buffer, &mut tx_buffer)
        .await
}
