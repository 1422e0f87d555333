use std::fmt::{Display, Formatter, Result};

/// Classified view of the raw `power-mode` field.
///
/// `Ready` and `DisplayOff` are both standby states: the device answers ECP
/// but the screen is dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerMode {
  On,
  Ready,
  DisplayOff,
  Other(String)
}

impl PowerMode {
  pub fn is_on(&self) -> bool {
    matches!(self, PowerMode::On)
  }

  pub fn is_standby(&self) -> bool {
    matches!(self, PowerMode::Ready | PowerMode::DisplayOff)
  }
}

impl From<&str> for PowerMode {
  fn from(raw: &str) -> PowerMode {
    match raw {
      "PowerOn" => PowerMode::On,
      "Ready" => PowerMode::Ready,
      "DisplayOff" => PowerMode::DisplayOff,
      other => PowerMode::Other(other.to_string())
    }
  }
}

impl Display for PowerMode {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      PowerMode::On => write!(f, "PowerOn"),
      PowerMode::Ready => write!(f, "Ready"),
      PowerMode::DisplayOff => write!(f, "DisplayOff"),
      PowerMode::Other(raw) if raw.is_empty() => write!(f, "unknown"),
      PowerMode::Other(raw) => write!(f, "{}", raw)
    }
  }
}
