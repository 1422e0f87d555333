/// Every physical button ECP knows how to press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RokuKey {
  Home,
  Back,
  Select,

  Up,
  Down,
  Left,
  Right,

  Play,
  Rev,
  Fwd,
  InstantReplay,
  Info,

  Backspace,
  Enter,
  Search,

  // Not present on all hardware. Devices without them ignore the keypress.
  VolumeUp,
  VolumeDown,
  VolumeMute,
  PowerOn,
  PowerOff,
  ChannelUp,
  ChannelDown
}

impl RokuKey {
  pub const ALL: [RokuKey; 22] = [
    RokuKey::Home,
    RokuKey::Back,
    RokuKey::Select,
    RokuKey::Up,
    RokuKey::Down,
    RokuKey::Left,
    RokuKey::Right,
    RokuKey::Play,
    RokuKey::Rev,
    RokuKey::Fwd,
    RokuKey::InstantReplay,
    RokuKey::Info,
    RokuKey::Backspace,
    RokuKey::Enter,
    RokuKey::Search,
    RokuKey::VolumeUp,
    RokuKey::VolumeDown,
    RokuKey::VolumeMute,
    RokuKey::PowerOn,
    RokuKey::PowerOff,
    RokuKey::ChannelUp,
    RokuKey::ChannelDown
  ];

  /// Volume, power and channel keys only exist on TVs and some sticks/soundbars.
  pub fn is_hardware_dependent(&self) -> bool {
    matches!(
      self,
      RokuKey::VolumeUp | RokuKey::VolumeDown | RokuKey::VolumeMute |
      RokuKey::PowerOn | RokuKey::PowerOff |
      RokuKey::ChannelUp | RokuKey::ChannelDown
    )
  }
}

impl From<&RokuKey> for &'static str {
  fn from(key: &RokuKey) -> &'static str {
    match key {
      RokuKey::Home          => "Home",
      RokuKey::Back          => "Back",
      RokuKey::Select        => "Select",
      RokuKey::Up            => "Up",
      RokuKey::Down          => "Down",
      RokuKey::Left          => "Left",
      RokuKey::Right         => "Right",
      RokuKey::Play          => "Play",
      RokuKey::Rev           => "Rev",
      RokuKey::Fwd           => "Fwd",
      RokuKey::InstantReplay => "InstantReplay",
      RokuKey::Info          => "Info",
      RokuKey::Backspace     => "Backspace",
      RokuKey::Enter         => "Enter",
      RokuKey::Search        => "Search",
      RokuKey::VolumeUp      => "VolumeUp",
      RokuKey::VolumeDown    => "VolumeDown",
      RokuKey::VolumeMute    => "VolumeMute",
      RokuKey::PowerOn       => "PowerOn",
      RokuKey::PowerOff      => "PowerOff",
      RokuKey::ChannelUp     => "ChannelUp",
      RokuKey::ChannelDown   => "ChannelDown"
    }
  }
}

impl From<RokuKey> for &'static str {
  fn from(key: RokuKey) -> &'static str {
    (&key).into()
  }
}
