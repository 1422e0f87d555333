mod network;
mod power;
mod uptime;

pub use network::*;
pub use power::*;
pub use uptime::*;

use serde::Deserialize;

/// Snapshot of everything `query/device-info` reports about a device.
///
/// Devices differ in which fields they send, so anything missing decodes to
/// its default. The most useful fields are probably `power_mode` (see
/// [`DeviceInfo::power`]) and the naming/network information.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename = "device-info", default)]
pub struct DeviceInfo {
  pub udn: String,

  #[serde(rename = "serial-number")]
  pub serial_number: String,

  #[serde(rename = "device-id")]
  pub device_id: String,

  #[serde(rename = "advertising-id")]
  pub advertising_id: String,

  #[serde(rename = "vendor-name")]
  pub vendor_name: String,

  #[serde(rename = "model-name")]
  pub model_name: String,

  #[serde(rename = "model-number")]
  pub model_number: String,

  #[serde(rename = "model-region")]
  pub model_region: String,

  #[serde(rename = "is-tv")]
  pub is_tv: bool,

  #[serde(rename = "is-stick")]
  pub is_stick: bool,

  #[serde(rename = "screen-size")]
  pub screen_size: String,

  #[serde(rename = "wifi-mac")]
  pub wifi_mac: String,

  #[serde(rename = "ethernet-mac")]
  pub ethernet_mac: String,

  #[serde(rename = "network-type")]
  pub network_type: String,

  #[serde(rename = "network-name")]
  pub network_name: String,

  #[serde(rename = "friendly-device-name")]
  pub friendly_device_name: String,

  #[serde(rename = "friendly-model-name")]
  pub friendly_model_name: String,

  #[serde(rename = "default-device-name")]
  pub default_device_name: String,

  #[serde(rename = "user-device-name")]
  pub user_device_name: String,

  #[serde(rename = "user-device-location")]
  pub user_device_location: String,

  #[serde(rename = "build-number")]
  pub build_number: String,

  #[serde(rename = "software-version")]
  pub software_version: String,

  #[serde(rename = "software-build")]
  pub software_build: String,

  pub language: String,
  pub country: String,
  pub locale: String,

  #[serde(rename = "time-zone-auto")]
  pub time_zone_auto: bool,

  #[serde(rename = "time-zone")]
  pub time_zone: String,

  #[serde(rename = "time-zone-name")]
  pub time_zone_name: String,

  #[serde(rename = "time-zone-tz")]
  pub time_zone_tz: String,

  /// Offset from UTC in minutes
  #[serde(rename = "time-zone-offset")]
  pub time_zone_offset: i32,

  #[serde(rename = "clock-format")]
  pub clock_format: String,

  #[serde(rename = "uptime")]
  pub uptime_seconds: u64,

  /// Raw power state, e.g. "PowerOn" or "Ready"
  #[serde(rename = "power-mode")]
  pub power_mode: String,

  #[serde(rename = "supports-suspend")]
  pub supports_suspend: bool,

  #[serde(rename = "supports-find-remote")]
  pub supports_find_remote: bool,

  #[serde(rename = "supports-audio-guide")]
  pub supports_audio_guide: bool,

  #[serde(rename = "supports-private-listening")]
  pub supports_private_listening: bool,

  #[serde(rename = "supports-ethernet")]
  pub supports_ethernet: bool,

  #[serde(rename = "supports-wake-on-wlan")]
  pub supports_wake_on_wlan: bool,

  #[serde(rename = "supports-ecs-textedit")]
  pub supports_ecs_textedit: bool,

  #[serde(rename = "developer-enabled")]
  pub developer_enabled: bool,

  #[serde(rename = "search-enabled")]
  pub search_enabled: bool,

  #[serde(rename = "voice-search-enabled")]
  pub voice_search_enabled: bool
}

impl DeviceInfo {
  pub fn power(&self) -> PowerMode {
    PowerMode::from(self.power_mode.as_str())
  }

  pub fn network(&self) -> NetworkType {
    NetworkType::from(self.network_type.as_str())
  }

  /// The most personal name the device knows itself by.
  pub fn display_name(&self) -> &str {
    [
      &self.user_device_name,
      &self.friendly_device_name,
      &self.default_device_name,
      &self.model_name
    ]
    .into_iter()
    .find(|name| !name.is_empty())
    .map(String::as_str)
    .unwrap_or("Roku")
  }
}
