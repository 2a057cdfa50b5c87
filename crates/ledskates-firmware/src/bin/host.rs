#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_net::{IpAddress, IpEndpoint};
use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};
use esp_println::println;
use heapless::String;

use ledskates_firmware::config::{self, LIGHT_LED_COUNT};
use ledskates_firmware::drivers::{EspLedDriver, StaticAddress, start_wifi_ap};
use ledskates_firmware::runtime::run_host;
use ledskates_firmware::tasks::control_http::ControlHttpController;
use ledskates_firmware::tasks::{CONTROL_REQUESTS, control_http_task};
use ledskates_firmware::transport::{LinkBuffers, UdpLink};
use ledskates_firmware::{led_gpio, mk_static};
use ledskates_fx::FxEngine;
use ledskates_link::control::write_mode_list;
use ledskates_link::{HostNode, Node};

esp_bootloader_esp_idf::esp_app_desc!();

/// Room for every mode name, one per line
const MODE_LIST_CAPACITY: usize = 256;

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

    println!("host: {} LEDs", config::LIGHT.led_count);
    let Some(driver) = EspLedDriver::new(peripherals.RMT, led_gpio!(peripherals)) else {
        panic!("host: LED driver unavailable");
    };
    let engine: FxEngine<EspLedDriver<'static>, LIGHT_LED_COUNT> =
        FxEngine::new(driver, config::LIGHT.fx());

    let mut modes = String::<MODE_LIST_CAPACITY>::new();
    if write_mode_list(&engine, &mut modes).is_err() {
        log::warn!("host: mode list truncated");
    }
    let modes = mk_static!(String<MODE_LIST_CAPACITY>, modes);

    let address = StaticAddress {
        address: config::LINK.host_ip,
        gateway: config::LINK.gateway,
        prefix_len: config::LINK.prefix_len,
    };
    let stack = match start_wifi_ap(
        spawner,
        peripherals.WIFI,
        config::WIFI.ssid,
        config::WIFI.password,
        address,
    )
    .await
    {
        Ok(stack) => stack,
        Err(e) => panic!("host: network bring-up failed: {}", e),
    };

    let peer = IpEndpoint::new(IpAddress::Ipv4(config::LINK.client_ip), config::LINK.udp_port);
    let buffers = mk_static!(LinkBuffers, LinkBuffers::new());
    let link = match UdpLink::bind(stack, buffers, config::LINK.udp_port, peer) {
        Ok(link) => link,
        Err(e) => panic!("host: UDP link unavailable: {}", e),
    };

    spawner
        .spawn(control_http_task(
            stack,
            ControlHttpController::new(modes.as_str()),
        ))
        .ok();

    println!("host: ready");
    let mut host = HostNode::new(Node::new(engine), link);
    run_host(&mut host, CONTROL_REQUESTS.receiver()).await
}
