use termion::event::Key;

use crate::devices::RokuKey;

/// Everything the control loop knows how to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  /// A plain remote button
  Press(RokuKey),

  /// Power on when in standby, off when on
  TogglePower,

  /// Read a line locally, then type it on the device
  EnterText,

  /// Read an app id locally, then launch it
  LaunchById,

  ListApps,
  ShowActiveApp,
  ShowPlayer,
  ShowDevice,
  Help,
  Quit
}

impl Command {
  /// Case-sensitive key table. `None` for keys that mean nothing.
  pub fn from_key(key: Key) -> Option<Command> {
    use Command::*;

    let command = match key {
      Key::Esc | Key::Ctrl('c') | Key::Ctrl('d') | Key::Char('q') => Quit,

      Key::Left  | Key::Char('h') => Press(RokuKey::Left),
      Key::Down  | Key::Char('j') => Press(RokuKey::Down),
      Key::Up    | Key::Char('k') => Press(RokuKey::Up),
      Key::Right | Key::Char('l') => Press(RokuKey::Right),

      Key::Char('\n') => Press(RokuKey::Select),
      Key::Char(' ')  => Press(RokuKey::Play),
      Key::Backspace | Key::Char('B') | Key::Char('u') => Press(RokuKey::Back),
      Key::Char('H') => Press(RokuKey::Home),
      Key::Char('i') => Press(RokuKey::Info),
      Key::Char('r') => Press(RokuKey::Rev),
      Key::Char('f') => Press(RokuKey::Fwd),
      Key::Char('R') => Press(RokuKey::InstantReplay),
      Key::Char('S') => Press(RokuKey::Search),
      Key::Char('x') => Press(RokuKey::Backspace),

      Key::Char('+') | Key::Ctrl('k') => Press(RokuKey::VolumeUp),
      Key::Char('-') => Press(RokuKey::VolumeDown),
      Key::Char('m') => Press(RokuKey::VolumeMute),
      Key::Char('>') => Press(RokuKey::ChannelUp),
      Key::Char('<') => Press(RokuKey::ChannelDown),
      Key::Char('p') => TogglePower,

      Key::Char('/') => EnterText,
      Key::Ctrl('l') => LaunchById,

      Key::Char('a') => ListApps,
      Key::Char('A') => ShowActiveApp,
      Key::Char('s') => ShowPlayer,
      Key::Char('d') => ShowDevice,
      Key::Char('?') => Help,

      _ => return None
    };

    Some(command)
  }
}

/// Printable name of a key for "does not match" notices
pub fn describe_key(key: Key) -> String {
  match key {
    Key::Char('\t') => "<Tab>".into(),
    Key::Char(c) => c.to_string(),
    Key::Ctrl(c) => format!("<Ctrl-{}>", c.to_ascii_uppercase()),
    Key::Alt(c) => format!("<Alt-{}>", c),
    Key::F(n) => format!("<F{}>", n),
    other => format!("<{:?}>", other)
  }
}

pub const USAGE: &str = "\
+----------------------------------+-----------------------------------+
| Left           h or <Left>       | Rewind          r                 |
| Down           j or <Down>       | Fast-Fwd        f                 |
| Up             k or <Up>         | Replay          R                 |
| Right          l or <Right>      | Play/Pause      <Space>           |
| Volume Up      + or <Ctrl-K>     | Ok/Select       <Enter>           |
| Volume Down    -                 | Back            B, u, or <Backsp> |
| Volume Mute    m                 | Home            H                 |
| Channel Up/Dn  > / <             | Info/Settings   i                 |
| Power Off/On   p                 | Search          S                 |
| List Apps      a                 | Player Status   s                 |
| Active App     A                 | Device Info     d                 |
| Enter Input    / + <Text>        | Launch (By ID)  <Ctrl-L> + ID     |
| Backspace      x                 | Help            ?                 |
+----------------------------------+-----------------------------------+
  (press q, Esc, or Ctrl-C to exit)";
