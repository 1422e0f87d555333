use async_trait::async_trait;
use log::trace;
use reqwest::{Client, Response};

use super::TransportError;

/// The HTTP half of ECP: every operation is a single GET or an empty-bodied POST.
#[async_trait]
pub trait Transport: Send + Sync {
  /// GET `url`, returning the raw response body
  async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError>;

  /// POST an empty body to `url`, discarding whatever comes back
  async fn post(&self, url: &str) -> Result<(), TransportError>;
}

/// Plain HTTP over `reqwest`, one request per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpTransport {
  client: Client
}

impl HttpTransport {
  pub fn new() -> Result<Self, TransportError> {
    // TCP_NODELAY *enabled*: every keypress is its own tiny request and
    // packet aggregation makes the remote feel sluggish
    let client = Client::builder()
      .tcp_nodelay(true)
      .build()
      .map_err(TransportError::Client)?;

    Ok(HttpTransport { client })
  }

  fn check(url: &str, response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
      Ok(response)
    } else {
      Err(TransportError::Status { url: url.to_string(), status: status.as_u16() })
    }
  }
}

#[async_trait]
impl Transport for HttpTransport {
  async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
    trace!("GET {}", url);

    let http = |source| TransportError::Http { url: url.to_string(), source };
    let response = self.client.get(url).send().await.map_err(http)?;
    let body = Self::check(url, response)?.bytes().await.map_err(http)?;

    Ok(body.to_vec())
  }

  async fn post(&self, url: &str) -> Result<(), TransportError> {
    trace!("POST {}", url);

    let response = self.client
      .post(url)
      .send()
      .await
      .map_err(|source| TransportError::Http { url: url.to_string(), source })?;

    Self::check(url, response).map(drop)
  }
}
