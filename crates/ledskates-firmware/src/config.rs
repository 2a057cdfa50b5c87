#![allow(clippy::unreadable_literal)]

use embassy_net::Ipv4Address;
use embassy_time::Duration;
use ledskates_fx::{FxConfig, ModeId};

pub struct WifiConfig {
    pub ssid: &'static str,
    pub password: &'static str,
}

/// Addressing of the two-node link network
pub struct LinkConfig {
    pub host_ip: Ipv4Address,
    pub client_ip: Ipv4Address,
    pub gateway: Ipv4Address,
    pub prefix_len: u8,
    pub http_port: u16,
    pub udp_port: u16,
}

pub struct LightConfig {
    pub led_count: usize,
    pub mode: ModeId,
    pub color: u32,
    pub speed: u16,
    pub brightness: u8,
    pub frame_interval: Duration,
}

impl LightConfig {
    pub const fn fx(&self) -> FxConfig {
        FxConfig {
            mode: self.mode,
            color: self.color,
            speed: self.speed,
            brightness: self.brightness,
            frame_interval: self.frame_interval,
        }
    }
}

pub const WIFI: WifiConfig = WifiConfig {
    ssid: match option_env!("LEDSKATES_WIFI_SSID") {
        Some(ssid) => ssid,
        None => "LedSkates",
    },
    password: match option_env!("LEDSKATES_WIFI_PASSWORD") {
        Some(password) => password,
        None => "1234567890",
    },
};

pub const LINK: LinkConfig = LinkConfig {
    host_ip: Ipv4Address::new(192, 168, 100, 1),
    client_ip: Ipv4Address::new(192, 168, 100, 2),
    gateway: Ipv4Address::new(192, 168, 100, 1),
    prefix_len: 24,
    http_port: 80,
    udp_port: 8080,
};

pub const LIGHT_LED_COUNT: usize = 14;

pub const LIGHT: LightConfig = LightConfig {
    led_count: LIGHT_LED_COUNT,
    mode: ModeId::Static,
    color: 0x00ff00,
    speed: 1000,
    brightness: 128,
    frame_interval: Duration::from_millis(16),
};

#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO25
    };
}
