//! A simulated Roku for tests: answers queries from fixtures, records every
//! request, flips its power mode on PowerOn/PowerOff and can be told to fail.

use std::{
  collections::HashMap,
  sync::{Arc, Mutex}
};

use async_trait::async_trait;

use super::{query::fixtures, Transport, TransportError};

pub const ADDRESS: &str = "192.168.1.20:8060";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
  pub method: &'static str,
  /// url with the `http://<address>/` prefix stripped
  pub path: String
}

#[derive(Debug)]
struct State {
  requests: Vec<Recorded>,
  bodies: HashMap<String, String>,
  power_mode: String,
  posts: usize,
  fail_post: Option<usize>,
  unreachable: bool
}

#[derive(Debug, Clone)]
pub struct MockTransport {
  state: Arc<Mutex<State>>
}

impl MockTransport {
  pub fn new() -> Self {
    let bodies = [
      ("query/apps", fixtures::APPS),
      ("query/active-app", fixtures::ACTIVE_APP),
      ("query/media-player", fixtures::MEDIA_PLAYER)
    ]
    .into_iter()
    .map(|(path, body)| (path.to_string(), body.to_string()))
    .collect();

    MockTransport {
      state: Arc::new(Mutex::new(State {
        requests: vec![],
        bodies,
        power_mode: "PowerOn".into(),
        posts: 0,
        fail_post: None,
        unreachable: false
      }))
    }
  }

  pub fn with_power_mode(self, mode: &str) -> Self {
    self.state.lock().unwrap().power_mode = mode.to_string();
    self
  }

  /// Serve `body` for `path` (e.g. "query/apps") instead of the fixture.
  pub fn with_body(self, path: &str, body: &str) -> Self {
    self.state.lock().unwrap().bodies.insert(path.to_string(), body.to_string());
    self
  }

  /// The `n`-th POST (1-based) and every POST after it fail.
  pub fn fail_post_from(self, n: usize) -> Self {
    self.state.lock().unwrap().fail_post = Some(n);
    self
  }

  /// Every request fails.
  pub fn unreachable(self) -> Self {
    self.state.lock().unwrap().unreachable = true;
    self
  }

  pub fn set_unreachable(&self, unreachable: bool) {
    self.state.lock().unwrap().unreachable = unreachable;
  }

  pub fn power_mode(&self) -> String {
    self.state.lock().unwrap().power_mode.clone()
  }

  pub fn requests(&self) -> Vec<Recorded> {
    self.state.lock().unwrap().requests.clone()
  }

  /// Paths of every POST, in order
  pub fn posts(&self) -> Vec<String> {
    self.requests()
      .into_iter()
      .filter(|r| r.method == "POST")
      .map(|r| r.path)
      .collect()
  }

  pub fn clear(&self) {
    self.state.lock().unwrap().requests.clear();
  }

  fn record(state: &mut State, method: &'static str, url: &str) -> Result<String, TransportError> {
    let prefix = format!("http://{}/", ADDRESS);
    let path = url.strip_prefix(&prefix).unwrap_or(url).to_string();
    state.requests.push(Recorded { method, path: path.clone() });

    if state.unreachable {
      return Err(TransportError::Status { url: url.to_string(), status: 503 });
    }

    Ok(path)
  }
}

#[async_trait]
impl Transport for MockTransport {
  async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
    let mut state = self.state.lock().unwrap();
    let path = Self::record(&mut state, "GET", url)?;

    let body = match path.as_str() {
      "query/device-info" if !state.bodies.contains_key(&path) => fixtures::device_info(&state.power_mode),
      _ => state.bodies
        .get(&path)
        .cloned()
        .ok_or(TransportError::Status { url: url.to_string(), status: 404 })?
    };

    Ok(body.into_bytes())
  }

  async fn post(&self, url: &str) -> Result<(), TransportError> {
    let mut state = self.state.lock().unwrap();
    let path = Self::record(&mut state, "POST", url)?;

    state.posts += 1;
    if matches!(state.fail_post, Some(n) if state.posts >= n) {
      return Err(TransportError::Status { url: url.to_string(), status: 503 });
    }

    match path.as_str() {
      "keypress/PowerOn" => state.power_mode = "PowerOn".into(),
      "keypress/PowerOff" => state.power_mode = "Ready".into(),
      _ => ()
    }

    Ok(())
  }
}
