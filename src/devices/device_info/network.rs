use std::fmt::{Display, Formatter, Result};

/// Describes the link-layer technology behind the device's network connection,
/// as reported in the `network-type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkType {
  WiFi,
  Ethernet,
  Unknown
}

impl From<&str> for NetworkType {
  fn from(raw: &str) -> NetworkType {
    match raw {
      "wifi" => NetworkType::WiFi,
      "ethernet" => NetworkType::Ethernet,
      _ => NetworkType::Unknown
    }
  }
}

impl Display for NetworkType {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(
      f, "{}",
      match self {
        NetworkType::WiFi => "WiFi",
        NetworkType::Ethernet => "Ethernet",
        NetworkType::Unknown => "Unknown"
      }
    )
  }
}
