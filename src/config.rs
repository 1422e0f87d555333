use std::time::Duration;

use clap::Parser;

pub const ECP_PORT: u16 = 8060;

#[derive(Parser, Debug)]
#[command(author, version, about = "Control Roku devices from your terminal", long_about = None)]
pub struct Args {
  /// IP address (or host[:port]) of the device; skips discovery
  #[arg(long)]
  pub ip: Option<String>,

  /// Port to use when --ip does not include one
  #[arg(long, default_value_t = ECP_PORT)]
  pub port: u16,

  /// How long to search the network for devices, in seconds
  #[arg(long, default_value_t = 3)]
  pub timeout: u64,

  /// Increase logging verbosity (-v for debug, -vv for trace)
  #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
  pub verbose: u8
}

impl Args {
  pub fn discovery_timeout(&self) -> Duration {
    Duration::from_secs(self.timeout)
  }

  /// The device address given on the command line, with the port filled in.
  pub fn address(&self) -> Option<String> {
    let ip = self.ip.as_deref()?.trim();

    let has_port = match ip.rsplit_once(':') {
      // bare IPv6 literals are full of colons; only a bracketed one can carry a port
      Some((host, port)) => !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) && (!host.contains(':') || host.ends_with(']')),
      None => false
    };

    Some(if has_port {
      ip.to_string()
    } else if ip.contains(':') && !ip.starts_with('[') {
      format!("[{}]:{}", ip, self.port)
    } else {
      format!("{}:{}", ip, self.port)
    })
  }
}
