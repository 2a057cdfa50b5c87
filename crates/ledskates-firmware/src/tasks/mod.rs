pub mod control_http;

pub use control_http::{CONTROL_REQUESTS, ControlReceiver, control_http_task};
