//! Talking to Roku devices over the External Control Protocol.
//!
//! The Roku engineers decided the API would work over HTTP and you must do a full
//! HTTP request for each keypress. No streaming, no persistent connection, no
//! authentication, just HTTP and a bit of XML.

mod app;
mod device_info;
mod discovery;
mod error;
mod player;
mod query;
mod remote;
mod roku;
mod session;
mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use app::{ActiveAppEnvelope, App, AppsEnvelope};
pub use device_info::*;
pub use discovery::*;
pub use error::*;
pub use player::*;
pub use query::*;
pub use roku::*;
pub use session::*;
pub use transport::*;
