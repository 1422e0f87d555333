use thiserror::Error;

/// Failure to establish a session with a device.
#[derive(Debug, Error)]
pub enum ConnectError {
  #[error("no device address given")]
  EmptyAddress,

  #[error("'{0}' is not a valid device address (expected host or host:port)")]
  InvalidAddress(String),

  /// No request was made: the HTTP client itself could not be set up.
  #[error(transparent)]
  Transport(#[from] TransportError),

  /// The device did not answer device-info (or answered with garbage),
  /// so the address is not usable.
  #[error("could not connect to device at {address}: {source}")]
  Unreachable {
    address: String,
    #[source]
    source: EcpError
  }
}

/// The request never produced a usable response.
#[derive(Debug, Error)]
pub enum TransportError {
  #[error("could not build HTTP client: {0}")]
  Client(#[source] reqwest::Error),

  #[error("request to {url} failed: {source}")]
  Http {
    url: String,
    #[source]
    source: reqwest::Error
  },

  #[error("{url} answered with HTTP status {status}")]
  Status {
    url: String,
    status: u16
  }
}

/// The device answered, but not with the XML shape we expected.
#[derive(Debug, Error)]
#[error("unexpected response from query/{endpoint}: {reason}")]
pub struct DecodeError {
  pub endpoint: &'static str,
  pub reason: String
}

impl DecodeError {
  pub fn new(endpoint: &'static str, reason: impl ToString) -> Self {
    DecodeError { endpoint, reason: reason.to_string() }
  }
}

/// Errors raised by an established session.
#[derive(Debug, Error)]
pub enum EcpError {
  #[error(transparent)]
  Transport(#[from] TransportError),

  #[error(transparent)]
  Decode(#[from] DecodeError),

  #[error("app id must not be empty")]
  EmptyAppId
}

#[derive(Debug, Error)]
pub enum DiscoveryError {
  /// A device advertised a location we cannot turn into an address.
  #[error("device advertised malformed location '{location}': {reason}")]
  MalformedLocation {
    location: String,
    reason: String
  }
}

/// Failure of the underlying SSDP search. Never escapes `discover`.
#[derive(Debug, Error)]
pub enum SearchError {
  #[error(transparent)]
  Ssdp(#[from] ssdp_client::Error)
}
