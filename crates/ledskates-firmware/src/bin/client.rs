#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_net::{IpAddress, IpEndpoint};
use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};
use esp_println::println;

use ledskates_firmware::config::{self, LIGHT_LED_COUNT};
use ledskates_firmware::drivers::{EspLedDriver, StaticAddress, start_wifi_sta};
use ledskates_firmware::runtime::run_client;
use ledskates_firmware::transport::{LinkBuffers, UdpLink};
use ledskates_firmware::{led_gpio, mk_static};
use ledskates_fx::FxEngine;
use ledskates_link::{ClientNode, Node};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Radio driver needs heap
    esp_alloc::heap_allocator!(size: 64 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    println!("client: {} LEDs", config::LIGHT.led_count);
    let Some(driver) = EspLedDriver::new(peripherals.RMT, led_gpio!(peripherals)) else {
        panic!("client: LED driver unavailable");
    };
    let engine: FxEngine<EspLedDriver<'static>, LIGHT_LED_COUNT> =
        FxEngine::new(driver, config::LIGHT.fx());

    let address = StaticAddress {
        address: config::LINK.client_ip,
        gateway: config::LINK.gateway,
        prefix_len: config::LINK.prefix_len,
    };
    let stack = match start_wifi_sta(
        spawner,
        peripherals.WIFI,
        config::WIFI.ssid,
        config::WIFI.password,
        address,
    )
    .await
    {
        Ok(stack) => stack,
        Err(e) => panic!("client: network bring-up failed: {}", e),
    };

    // The client never sends; the peer is only there to complete the link
    let peer = IpEndpoint::new(IpAddress::Ipv4(config::LINK.host_ip), config::LINK.udp_port);
    let buffers = mk_static!(LinkBuffers, LinkBuffers::new());
    let link = match UdpLink::bind(stack, buffers, config::LINK.udp_port, peer) {
        Ok(link) => link,
        Err(e) => panic!("client: UDP link unavailable: {}", e),
    };

    println!("client: ready");
    let mut client = ClientNode::new(Node::new(engine), link);
    run_client(&mut client).await
}
