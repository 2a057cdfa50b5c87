mod led_ws2812;
mod random;
pub mod wifi;

pub use led_ws2812::EspLedDriver;
pub use wifi::{NetworkError, StaticAddress, start_wifi_ap, start_wifi_sta};
