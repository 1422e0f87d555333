use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use log::{debug, warn};
use ssdp_client::SearchTarget;
use url::Url;

use super::{DiscoveryError, SearchError};

/// Service type every ECP device answers to
pub const ROKU_SERVICE: &str = "roku:ecp";

/// One raw answer to an SSDP search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsdpHit {
  pub location: String,
  pub server: String
}

/// A device found on the network. Promote it with [`super::RemoteSession::open`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredDevice {
  /// host:port
  pub address: String,

  /// Whatever the device put in its SERVER header
  pub name: String
}

#[async_trait(?Send)]
pub trait SsdpSearch {
  async fn search(&self, service: &str, timeout: Duration) -> Result<Vec<SsdpHit>, SearchError>;
}

/// Multicast M-SEARCH over UDP
#[derive(Debug, Clone, Copy, Default)]
pub struct SsdpClient;

#[async_trait(?Send)]
impl SsdpSearch for SsdpClient {
  async fn search(&self, service: &str, timeout: Duration) -> Result<Vec<SsdpHit>, SearchError> {
    let target = match service.split_once(':') {
      Some((kind, value)) => SearchTarget::Custom(kind.to_string(), value.to_string()),
      None => SearchTarget::Custom(service.to_string(), String::new())
    };

    // devices pick a random delay in [0, MX] before answering; keep it inside the timeout
    let mx = timeout.as_secs().clamp(1, 5) as usize;

    let mut responses = ssdp_client::search(&target, timeout, mx, None).await?;
    let mut hits = vec![];

    while let Some(response) = responses.next().await {
      match response {
        Ok(response) => hits.push(SsdpHit {
          location: response.location().to_string(),
          server: response.server().to_string()
        }),
        Err(e) => debug!("ignoring unreadable SSDP response: {}", e)
      }
    }

    Ok(hits)
  }
}

/// Search the local network for Roku devices.
///
/// Finding nothing is not an error, and neither is a failing search (it is
/// logged and treated as finding nothing). A device advertising a location
/// that is not a URL with a host aborts the scan.
///
/// Results come in arrival order and are not de-duplicated; a device on two
/// interfaces may show up twice.
pub async fn discover<S: SsdpSearch>(search: &S, timeout: Duration) -> Result<Vec<DiscoveredDevice>, DiscoveryError> {
  let hits = match search.search(ROKU_SERVICE, timeout).await {
    Ok(hits) => hits,
    Err(e) => {
      warn!("could not find any devices on network: {}", e);
      return Ok(vec![]);
    }
  };

  let devices = hits
    .into_iter()
    .map(|hit| {
      let address = address_of(&hit.location)?;
      debug!("found {} at {}", hit.server, address);
      Ok(DiscoveredDevice { address, name: hit.server })
    })
    .collect::<Result<Vec<_>, DiscoveryError>>()?;

  Ok(devices)
}

/// [`discover`] with a real multicast search
pub async fn discover_devices(timeout: Duration) -> Result<Vec<DiscoveredDevice>, DiscoveryError> {
  discover(&SsdpClient, timeout).await
}

/// `http://192.168.1.20:8060/` => `192.168.1.20:8060`
fn address_of(location: &str) -> Result<String, DiscoveryError> {
  let malformed = |reason: String| DiscoveryError::MalformedLocation {
    location: location.to_string(),
    reason
  };

  let url = Url::parse(location).map_err(|e| malformed(e.to_string()))?;
  let host = url.host_str().ok_or_else(|| malformed("no host".into()))?;

  Ok(match url.port_or_known_default() {
    Some(port) => format!("{}:{}", host, port),
    None => host.to_string()
  })
}
