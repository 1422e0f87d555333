//! The interactive remote: read a key, run the matching command, report, repeat.

use std::{fmt::Display, io::Write};

use anyhow::{bail, Context, Result};
use futures::{Stream, StreamExt};
use log::{info, warn};
use termion::event::Key;

use crate::devices::{App, RemoteSession, RokuKey, Transport};

mod command;
mod display;
mod user_input;

pub use command::*;
pub use display::*;
pub use user_input::user_input;

/// Drives one session from a stream of key events.
///
/// Output goes to `out` with `\r\n` line endings, since the terminal is in raw mode.
pub struct ControlLoop<'a, T, W> {
  remote: &'a mut RemoteSession<T>,
  out: W,

  /// a "> " prompt is the last thing on screen
  at_prompt: bool
}

impl<'a, T: Transport, W: Write> ControlLoop<'a, T, W> {
  pub fn new(remote: &'a mut RemoteSession<T>, out: W) -> Self {
    ControlLoop { remote, out, at_prompt: false }
  }

  /// Runs until a quit key or the end of the key stream. A failing command is
  /// logged and never ends the loop; only failing to write output does.
  pub async fn run<S>(&mut self, keys: &mut S) -> std::io::Result<()>
  where
    S: Stream<Item = Key> + Unpin
  {
    self.prompt()?;

    while let Some(key) = keys.next().await {
      let command = match Command::from_key(key) {
        Some(Command::Quit) => break,
        Some(command) => command,
        None => {
          let notice = format!("'{}' key does not match any command", describe_key(key));
          info!("{}", notice);
          self.say([notice])?;
          self.prompt()?;
          continue;
        }
      };

      if let Err(e) = self.execute(command, keys).await {
        warn!("{:?} failed: {:#}", command, e);
      }

      self.prompt()?;
    }

    Ok(())
  }

  /// Run a single command. Modal commands read their argument from `keys`.
  pub async fn execute<S>(&mut self, command: Command, keys: &mut S) -> Result<()>
  where
    S: Stream<Item = Key> + Unpin
  {
    match command {
      Command::Press(key) => self.remote.press(key).await?,

      Command::TogglePower => self.toggle_power().await?,

      Command::EnterText => {
        if let Some(text) = self.read_line("Enter Text: ", keys).await? {
          self.remote.input_string(&format!("{}\n", text)).await?;
        }
      },

      Command::LaunchById => {
        if let Some(id) = self.read_line("Launch App ID: ", keys).await? {
          self.remote.launch_app(&App::from_id(id.trim())).await?;
        }
      },

      Command::ListApps => {
        let apps = self.remote.apps().await?;
        self.say(app_list(&apps))?;
      },

      Command::ShowActiveApp => {
        let app = self.remote.active_app().await?;
        self.say([active_app(app.as_ref())])?;
      },

      Command::ShowPlayer => {
        let status = self.remote.player_status().await?;
        self.say(player_status(&status))?;
      },

      Command::ShowDevice => {
        self.remote.refresh().await?;
        let lines = device_summary(self.remote.device(), self.remote.address());
        self.say(lines)?;
      },

      Command::Help => self.say(USAGE.lines())?,

      Command::Quit => ()
    }

    Ok(())
  }

  /// Decide from the cached power mode, press, then refresh so the next
  /// toggle sees what the device actually did.
  async fn toggle_power(&mut self) -> Result<()> {
    let mode = self.remote.device().power();

    let key = if mode.is_on() {
      RokuKey::PowerOff
    } else if mode.is_standby() {
      RokuKey::PowerOn
    } else {
      bail!("unrecognized power mode: {}", mode);
    };

    self.remote
      .press(key)
      .await
      .with_context(|| format!("could not send {}", <&'static str>::from(key)))?;

    let mode = self.remote
      .refresh()
      .await
      .context("could not refresh device info")?
      .power();

    self.say([format!("Mode: {}", mode)])?;
    Ok(())
  }

  /// Accumulate typed characters until Enter. Esc (or running out of keys) cancels.
  async fn read_line<S>(&mut self, label: &str, keys: &mut S) -> std::io::Result<Option<String>>
  where
    S: Stream<Item = Key> + Unpin
  {
    self.start_line()?;
    write!(self.out, "{}", label)?;
    self.out.flush()?;

    let mut text = String::new();

    while let Some(key) = keys.next().await {
      match key {
        Key::Char('\n') => {
          write!(self.out, "\r\n")?;
          return Ok(Some(text));
        },
        Key::Esc | Key::Ctrl('c') => break,
        Key::Backspace => {
          if text.pop().is_some() {
            write!(self.out, "\x08 \x08")?;
          }
        },
        Key::Char(c) => {
          text.push(c);
          write!(self.out, "{}", c)?;
        },
        _ => ()
      }
      self.out.flush()?;
    }

    write!(self.out, "\r\n")?;
    self.say(["(cancelled)"])?;
    Ok(None)
  }

  fn say<I>(&mut self, lines: I) -> std::io::Result<()>
  where
    I: IntoIterator,
    I::Item: Display
  {
    self.start_line()?;
    for line in lines {
      write!(self.out, "{}\r\n", line)?;
    }
    self.out.flush()
  }

  fn start_line(&mut self) -> std::io::Result<()> {
    if self.at_prompt {
      write!(self.out, "\r\n")?;
      self.at_prompt = false;
    }
    Ok(())
  }

  fn prompt(&mut self) -> std::io::Result<()> {
    if !self.at_prompt {
      write!(self.out, "> ")?;
      self.out.flush()?;
      self.at_prompt = true;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::devices::{
    mock::{MockTransport, ADDRESS},
    PowerMode
  };
  use futures::stream;

  async fn open(mock: &MockTransport) -> RemoteSession<MockTransport> {
    let session = RemoteSession::open_with(ADDRESS, mock.clone()).await.unwrap();
    mock.clear();
    session
  }

  /// Run the loop over `keys`, returning everything it printed
  async fn run(session: &mut RemoteSession<MockTransport>, keys: Vec<Key>) -> String {
    let mut out = Vec::new();
    let mut keys = stream::iter(keys);

    ControlLoop::new(session, &mut out).run(&mut keys).await.unwrap();
    String::from_utf8(out).unwrap()
  }

  fn chars(text: &str) -> Vec<Key> {
    text.chars().map(Key::Char).collect()
  }

  #[tokio::test]
  async fn presses_mapped_keys_until_quit() {
    let mock = MockTransport::new();
    let mut session = open(&mock).await;

    run(&mut session, vec![Key::Char('H'), Key::Down, Key::Char(' '), Key::Char('q'), Key::Char('H')]).await;

    assert_eq!(mock.posts(), ["keypress/Home", "keypress/Down", "keypress/Play"]);
  }

  #[tokio::test]
  async fn unmapped_keys_are_reported_and_loop_continues() {
    let mock = MockTransport::new();
    let mut session = open(&mock).await;

    let out = run(&mut session, vec![Key::Char('z'), Key::F(3), Key::Char('H')]).await;

    assert!(out.contains("'z' key does not match any command"));
    assert!(out.contains("'<F3>' key does not match any command"));
    assert_eq!(mock.posts(), ["keypress/Home"]);
  }

  #[tokio::test]
  async fn failing_commands_do_not_end_the_loop() {
    let mock = MockTransport::new().fail_post_from(1);
    let mut session = open(&mock).await;

    let out = run(&mut session, vec![Key::Char('H'), Key::Char('k'), Key::Char('a')]).await;

    assert_eq!(mock.posts(), ["keypress/Home", "keypress/Up"]);
    assert!(out.contains("Installed apps:"));
    assert!(out.contains("[2285]\tHulu"));
  }

  #[tokio::test]
  async fn text_entry_types_line_with_newline() {
    let mock = MockTransport::new();
    let mut session = open(&mock).await;

    let mut keys = vec![Key::Char('/')];
    keys.extend(chars("Hx"));
    keys.push(Key::Backspace);
    keys.extend(chars("i!\n"));
    keys.push(Key::Char('H'));

    let out = run(&mut session, keys).await;

    assert!(out.contains("Enter Text: "));
    assert_eq!(
      mock.posts(),
      ["keypress/Lit_H", "keypress/Lit_i", "keypress/Lit_%21", "keypress/Lit_%0A", "keypress/Home"]
    );
  }

  #[tokio::test]
  async fn text_entry_can_be_cancelled() {
    let mock = MockTransport::new();
    let mut session = open(&mock).await;

    let out = run(&mut session, vec![Key::Char('/'), Key::Char('a'), Key::Esc, Key::Char('H')]).await;

    assert!(out.contains("(cancelled)"));
    // Esc only left text mode, the loop went on to press Home
    assert_eq!(mock.posts(), ["keypress/Home"]);
  }

  #[tokio::test]
  async fn text_entry_cancelled_by_end_of_input() {
    let mock = MockTransport::new();
    let mut session = open(&mock).await;

    run(&mut session, vec![Key::Char('/'), Key::Char('a')]).await;
    assert!(mock.posts().is_empty());
  }

  #[tokio::test]
  async fn launch_by_id() {
    let mock = MockTransport::new();
    let mut session = open(&mock).await;

    let mut keys = vec![Key::Ctrl('l')];
    keys.extend(chars("2285\n"));
    run(&mut session, keys).await;

    assert_eq!(mock.posts(), ["launch/2285"]);
  }

  #[tokio::test]
  async fn launch_with_empty_id_is_reported_not_sent() {
    let mock = MockTransport::new();
    let mut session = open(&mock).await;

    run(&mut session, vec![Key::Ctrl('l'), Key::Char('\n'), Key::Char('H')]).await;
    assert_eq!(mock.posts(), ["keypress/Home"]);
  }

  #[tokio::test]
  async fn power_toggle_follows_device() {
    let mock = MockTransport::new().with_power_mode("PowerOn");
    let mut session = open(&mock).await;

    let expected = [("keypress/PowerOff", PowerMode::Ready), ("keypress/PowerOn", PowerMode::On), ("keypress/PowerOff", PowerMode::Ready)];

    for (post, mode) in expected {
      mock.clear();
      let out = run(&mut session, vec![Key::Char('p')]).await;

      assert_eq!(mock.posts(), [post]);
      assert_eq!(session.device().power(), mode);
      assert_eq!(session.device().power_mode, mock.power_mode());
      assert!(out.contains(&format!("Mode: {}", mode)));
    }
  }

  #[tokio::test]
  async fn power_toggle_from_display_off_powers_on() {
    let mock = MockTransport::new().with_power_mode("DisplayOff");
    let mut session = open(&mock).await;

    run(&mut session, vec![Key::Char('p')]).await;
    assert_eq!(mock.posts(), ["keypress/PowerOn"]);
  }

  #[tokio::test]
  async fn unknown_power_mode_sends_nothing() {
    let mock = MockTransport::new().with_power_mode("Suspend");
    let mut session = open(&mock).await;

    run(&mut session, vec![Key::Char('p'), Key::Char('H')]).await;
    assert_eq!(mock.posts(), ["keypress/Home"]);
  }

  #[tokio::test]
  async fn queries_are_printed() {
    let mock = MockTransport::new();
    let mut session = open(&mock).await;

    let out = run(&mut session, vec![Key::Char('s'), Key::Char('A'), Key::Char('d'), Key::Char('?')]).await;

    assert!(out.contains("App: [2285] Hulu\r\n"));
    assert!(out.contains("Position: 41537 ms\r\n"));
    assert!(out.contains("Active app: [12] Netflix\r\n"));
    assert!(out.contains("Connected to Living Room (Roku Ultra) at 192.168.1.20:8060\r\n"));
    assert!(out.contains("(press q, Esc, or Ctrl-C to exit)"));
    // 'd' refreshed
    assert!(mock.requests().iter().any(|r| r.path == "query/device-info"));
  }
}
