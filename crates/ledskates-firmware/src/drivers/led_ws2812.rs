use esp_hal::xtensa_lx::interrupt;
use esp_hal::{gpio::interconnect::PeripheralOutput, peripherals::RMT, rmt::Rmt, time::Rate};
use esp_hal_smartled::{SmartLedsAdapter, buffer_size, smart_led_buffer};
use smart_leds::SmartLedsWrite;
use static_cell::make_static;

use ledskates_fx::{LedDriver, Rgb};

use crate::config::LIGHT_LED_COUNT;

/// ESP-specific LED driver using RMT peripheral
///
/// This driver uses the ESP32's RMT (Remote Control) peripheral
/// to generate the precise timing signals required by WS2812B LEDs.
pub struct EspLedDriver<'a> {
    adapter: SmartLedsAdapter<'a, { buffer_size(LIGHT_LED_COUNT) }>,
}

impl<'a> EspLedDriver<'a> {
    /// Create a new ESP LED driver
    ///
    /// # Arguments
    /// * `rmt` - RMT peripheral
    /// * `pin` - GPIO pin connected to the LED data line
    ///
    /// Returns `None` when the RMT peripheral cannot be configured.
    pub fn new<O>(rmt: RMT<'a>, pin: O) -> Option<Self>
    where
        O: PeripheralOutput<'a>,
    {
        let rmt = match Rmt::new(rmt, Rate::from_mhz(80)) {
            Ok(rmt) => rmt,
            Err(e) => {
                log::error!("led: failed to configure RMT: {:?}", e);
                return None;
            }
        };

        // Lives for the entire program
        let rmt_buffer = make_static!(smart_led_buffer!(LIGHT_LED_COUNT));
        let adapter = SmartLedsAdapter::new(rmt.channel0, pin, rmt_buffer);

        Some(Self { adapter })
    }
}

impl LedDriver<LIGHT_LED_COUNT> for EspLedDriver<'static> {
    fn write(&mut self, colors: &[Rgb; LIGHT_LED_COUNT]) {
        let result = interrupt::free(|| self.adapter.write(colors.iter().copied()));
        if let Err(e) = result {
            log::warn!("led: write failed: {:?}", e);
        }
    }
}
