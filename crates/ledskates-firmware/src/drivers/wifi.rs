//! Wi-Fi bring-up for both nodes
//!
//! The host runs a WPA2 access point, the client joins it as a station.
//! Both ends use static addressing, so there is no DHCP on the link.

use core::fmt;

use embassy_executor::Spawner;
use embassy_net::{Ipv4Address, Ipv4Cidr, Runner, Stack, StackResources, StaticConfigV4};
use embassy_time::{Duration, Timer};
use esp_hal::peripherals::WIFI;
use esp_println::println;
use esp_radio::wifi::{
    AccessPointConfig, AuthMethod, ClientConfig, Config, ModeConfig, WifiController, WifiDevice,
    WifiEvent, WifiStaState,
};
use static_cell::make_static;

use super::random::get_seed;

const MAX_CONNECTIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    /// Radio driver failed to initialize
    Radio,
    /// Wi-Fi controller could not be created
    Wifi,
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Radio => write!(f, "radio initialization failed"),
            NetworkError::Wifi => write!(f, "wifi controller unavailable"),
        }
    }
}

/// Static IPv4 configuration of one node
#[derive(Debug, Clone, Copy)]
pub struct StaticAddress {
    pub address: Ipv4Address,
    pub gateway: Ipv4Address,
    pub prefix_len: u8,
}

impl StaticAddress {
    fn net_config(self) -> embassy_net::Config {
        embassy_net::Config::ipv4_static(StaticConfigV4 {
            address: Ipv4Cidr::new(self.address, self.prefix_len),
            gateway: Some(self.gateway),
            dns_servers: heapless::Vec::default(),
        })
    }
}

fn init_radio(
    wifi_device: WIFI<'static>,
) -> Result<(WifiController<'static>, esp_radio::wifi::Interfaces<'static>), NetworkError> {
    let esp_radio_ctrl = match esp_radio::init() {
        Ok(ctrl) => &*make_static!(ctrl),
        Err(e) => {
            log::error!("wifi: radio init failed: {:?}", e);
            return Err(NetworkError::Radio);
        }
    };
    esp_radio::wifi::new(esp_radio_ctrl, wifi_device, Config::default()).map_err(|e| {
        log::error!("wifi: controller init failed: {:?}", e);
        NetworkError::Wifi
    })
}

/// Start the Wi-Fi AP (Access Point) mode
///
/// Spawns the controller and stack runner tasks and waits for the link.
pub async fn start_wifi_ap(
    spawner: Spawner,
    wifi_device: WIFI<'static>,
    ssid: &'static str,
    password: &'static str,
    address: StaticAddress,
) -> Result<Stack<'static>, NetworkError> {
    let (controller, interfaces) = init_radio(wifi_device)?;

    let network_resources = make_static!(StackResources::<MAX_CONNECTIONS>::new());
    let (stack, runner) = embassy_net::new(
        interfaces.ap,
        address.net_config(),
        network_resources,
        get_seed(),
    );

    spawner
        .spawn(wifi_ap_task(controller, ssid, password))
        .ok();
    spawner.spawn(network_runner_task(runner)).ok();

    wait_for_link(stack).await;
    println!("wifi: access point up at {}", address.address);

    Ok(stack)
}

/// Start the Wi-Fi STA (Station) mode
///
/// Connects to the host's access point and keeps reconnecting if the
/// connection is lost.
pub async fn start_wifi_sta(
    spawner: Spawner,
    wifi_device: WIFI<'static>,
    ssid: &'static str,
    password: &'static str,
    address: StaticAddress,
) -> Result<Stack<'static>, NetworkError> {
    let (controller, interfaces) = init_radio(wifi_device)?;

    let network_resources = make_static!(StackResources::<MAX_CONNECTIONS>::new());
    let (stack, runner) = embassy_net::new(
        interfaces.sta,
        address.net_config(),
        network_resources,
        get_seed(),
    );

    spawner
        .spawn(wifi_connection_task(controller, ssid, password))
        .ok();
    spawner.spawn(network_runner_task(runner)).ok();

    wait_for_link(stack).await;
    println!("wifi: connected as {}", address.address);

    Ok(stack)
}

/// Background task for running the Wi-Fi AP
#[embassy_executor::task]
async fn wifi_ap_task(
    mut controller: WifiController<'static>,
    ssid: &'static str,
    password: &'static str,
) {
    println!("wifi: starting AP with SSID '{}'", ssid);

    let ap_config = AccessPointConfig::default()
        .with_ssid(ssid.into())
        .with_password(password.into())
        .with_auth_method(AuthMethod::Wpa2Personal);

    if let Err(e) = controller.set_config(&ModeConfig::AccessPoint(ap_config)) {
        log::error!("wifi: invalid AP config: {:?}", e);
        return;
    }
    if let Err(e) = controller.start_async().await {
        log::error!("wifi: failed to start AP: {:?}", e);
        return;
    }

    println!("wifi: AP started");

    // Keep the AP running
    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}

/// Background task for connecting to the host AP and reconnecting if needed
#[embassy_executor::task]
async fn wifi_connection_task(
    mut controller: WifiController<'static>,
    ssid: &'static str,
    password: &'static str,
) {
    loop {
        // Wait until we're no longer connected
        if esp_radio::wifi::sta_state() == WifiStaState::Connected {
            controller.wait_for_event(WifiEvent::StaDisconnected).await;
            Timer::after(Duration::from_millis(2000)).await;
        }
        if !matches!(controller.is_started(), Ok(true)) {
            let client_config = ClientConfig::default()
                .with_ssid(ssid.into())
                .with_password(password.into());
            if let Err(e) = controller.set_config(&ModeConfig::Client(client_config)) {
                log::error!("wifi: invalid station config: {:?}", e);
                return;
            }
            if let Err(e) = controller.start_async().await {
                log::warn!("wifi: failed to start station: {:?}", e);
                Timer::after(Duration::from_millis(5000)).await;
                continue;
            }
        }

        println!("wifi: connecting to '{}'", ssid);
        if let Err(e) = controller.connect_async().await {
            println!("wifi: error connecting: {:?}", e);
            Timer::after(Duration::from_millis(5000)).await;
        }
    }
}

/// Background task for running the network stack
#[embassy_executor::task]
async fn network_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}

/// Wait for the network link to become active
async fn wait_for_link(stack: Stack<'_>) {
    loop {
        if stack.is_link_up() {
            break;
        }
        Timer::after(Duration::from_millis(100)).await;
    }
}
