//! Control Roku devices over the External Control Protocol (ECP).
//!
//! [`devices`] is the client library: discovery, the [`devices::RemoteSession`]
//! and its button/text/launch operations. [`ui`] is the interactive terminal
//! remote built on top of it.

pub mod devices;
pub mod ui;
