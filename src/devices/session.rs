use std::collections::BTreeMap;

use log::debug;
use url::{form_urlencoded, Url};

use super::{
  query::{ActiveAppQuery, AppsQuery, DeviceInfoQuery, MediaPlayerQuery, Query},
  App, ConnectError, DeviceInfo, EcpError, HttpTransport, PlayerStatus, Transport
};

/// Extra launch arguments: each key maps to one or more values.
/// Sorted, so the encoded query string is stable.
pub type LaunchParams = BTreeMap<String, Vec<String>>;

/// A remote control bound to one device.
///
/// The address never changes after [`RemoteSession::open`]. The held
/// [`DeviceInfo`] is only replaced by [`RemoteSession::refresh`]; nothing else
/// re-fetches it behind your back, so e.g. the power mode is stale after a
/// power keypress until you refresh.
///
/// ECP has no streaming, persistent connection or authentication: every
/// operation below is exactly one HTTP request, awaited to completion.
#[derive(Debug)]
pub struct RemoteSession<T = HttpTransport> {
  address: String,
  device: DeviceInfo,
  transport: T
}

impl RemoteSession<HttpTransport> {
  /// Connect to `address` (host:port, usually port 8060) over HTTP.
  pub async fn open(address: &str) -> Result<Self, ConnectError> {
    let transport = HttpTransport::new()?;
    Self::open_with(address, transport).await
  }
}

impl<T: Transport> RemoteSession<T> {
  /// Connect through a specific transport. Fetches device-info right away:
  /// an address that cannot answer it is not a usable session.
  pub async fn open_with(address: &str, transport: T) -> Result<Self, ConnectError> {
    let address = validate_address(address)?;

    let device = fetch::<DeviceInfoQuery, T>(&transport, &address)
      .await
      .map_err(|source| ConnectError::Unreachable { address: address.clone(), source })?;

    debug!("connected to {} ({}) at {}", device.display_name(), device.model_name, address);

    Ok(RemoteSession { address, device, transport })
  }

  pub fn address(&self) -> &str {
    &self.address
  }

  /// Device info as of construction or the last successful refresh
  pub fn device(&self) -> &DeviceInfo {
    &self.device
  }

  /// Re-fetch device info. On failure the previous info is kept.
  pub async fn refresh(&mut self) -> Result<&DeviceInfo, EcpError> {
    self.device = self.device_info().await?;
    Ok(&self.device)
  }

  /// `GET /query/<cmd>`, body returned as-is
  pub async fn query(&self, cmd: &str) -> Result<Vec<u8>, EcpError> {
    Ok(self.transport.get(&self.url(&format!("query/{}", cmd))).await?)
  }

  /// `POST /keypress/<token>`
  pub async fn keypress(&self, token: &str) -> Result<(), EcpError> {
    Ok(self.transport.post(&self.url(&format!("keypress/{}", token))).await?)
  }

  /// `POST /launch/<app_id>?<params>`
  pub async fn launch(&self, app_id: &str, params: &LaunchParams) -> Result<(), EcpError> {
    if app_id.is_empty() {
      return Err(EcpError::EmptyAppId);
    }

    let mut path = format!("launch/{}", app_id);
    if !params.is_empty() {
      path.push('?');
      path.push_str(&encode_params(params));
    }

    Ok(self.transport.post(&self.url(&path)).await?)
  }

  /// `POST /install/<app_id>`
  pub async fn install(&self, app_id: &str) -> Result<(), EcpError> {
    if app_id.is_empty() {
      return Err(EcpError::EmptyAppId);
    }

    Ok(self.transport.post(&self.url(&format!("install/{}", app_id))).await?)
  }

  pub async fn device_info(&self) -> Result<DeviceInfo, EcpError> {
    fetch::<DeviceInfoQuery, T>(&self.transport, &self.address).await
  }

  /// The channel in the foreground, or `None` on the home screen
  pub async fn active_app(&self) -> Result<Option<App>, EcpError> {
    fetch::<ActiveAppQuery, T>(&self.transport, &self.address).await
  }

  /// Installed channels, in the device's order
  pub async fn apps(&self) -> Result<Vec<App>, EcpError> {
    fetch::<AppsQuery, T>(&self.transport, &self.address).await
  }

  pub async fn player_status(&self) -> Result<PlayerStatus, EcpError> {
    fetch::<MediaPlayerQuery, T>(&self.transport, &self.address).await
  }

  fn url(&self, path: &str) -> String {
    format!("http://{}/{}", self.address, path)
  }
}

async fn fetch<Q: Query, T: Transport>(transport: &T, address: &str) -> Result<Q::Output, EcpError> {
  let body = transport.get(&format!("http://{}/query/{}", address, Q::ENDPOINT)).await?;
  Ok(Q::decode(&body)?)
}

/// Form-encode launch params, repeating keys with several values.
pub fn encode_params(params: &LaunchParams) -> String {
  let mut serializer = form_urlencoded::Serializer::new(String::new());
  for (key, values) in params {
    for value in values {
      serializer.append_pair(key, value);
    }
  }
  serializer.finish()
}

fn validate_address(address: &str) -> Result<String, ConnectError> {
  let address = address.trim();
  if address.is_empty() {
    return Err(ConnectError::EmptyAddress);
  }

  let invalid = || ConnectError::InvalidAddress(address.to_string());
  let url = Url::parse(&format!("http://{}/", address)).map_err(|_| invalid())?;

  // anything beyond host[:port] (paths, credentials, queries) is not an address
  let is_authority_only = url.host_str().is_some()
    && url.path() == "/"
    && url.username().is_empty()
    && url.query().is_none()
    && url.fragment().is_none();

  if !is_authority_only {
    return Err(invalid());
  }

  Ok(address.to_string())
}
