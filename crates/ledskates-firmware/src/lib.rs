#![no_std]
#![feature(type_alias_impl_trait)]

//! LedSkates firmware - ESP32 bring-up for the host and client nodes
//!
//! The protocol core lives in `ledskates-link` and the effect engine in
//! `ledskates-fx`; this crate wires them to the radio, the UDP link, the HTTP
//! control surface and the WS2812 strip.

pub mod config;
pub mod drivers;
pub mod http;
pub mod runtime;
pub mod tasks;
pub mod transport;

#[macro_export]
// Create a static cell for a given type and value
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write(($val));
        x
    }};
}
