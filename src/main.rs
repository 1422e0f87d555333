use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env, Target};
use log::{debug, LevelFilter};
use termion::raw::IntoRawMode;

use ecp_remote::{
  devices::{discover_devices, DiscoveredDevice, RemoteSession},
  ui::{self, ControlLoop}
};

mod config;

use config::Args;

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();
  init_logging(args.verbose);

  let address = match args.address() {
    Some(address) => address,
    None => match find_device(&args).await? {
      Some(address) => address,
      None => {
        println!("Could not find any Roku devices.");
        println!("Please try again, or enter the IP address manually with '--ip'");
        return Ok(());
      }
    }
  };

  let mut remote = RemoteSession::open(&address).await.context("could not create remote")?;

  for line in ui::device_summary(remote.device(), remote.address()) {
    println!("{}", line);
  }

  // purely informational, not worth failing over
  match remote.active_app().await {
    Ok(app) => println!("{}", ui::active_app(app.as_ref())),
    Err(e) => debug!("could not get active app: {}", e)
  }

  println!("{}", ui::USAGE);

  let stdout = io::stdout()
    .into_raw_mode()
    .context("failed to put terminal into raw mode")?;

  // the loop owns the raw terminal; dropping it returns the terminal to normal mode
  let result = ControlLoop::new(&mut remote, stdout)
    .run(&mut ui::user_input())
    .await;

  println!("\nShutting down...");
  if let Err(e) = result {
    eprintln!("error: {}", e);
  }

  // forcibly exit: the stdin reader is still blocked on a read and would keep the runtime alive
  std::process::exit(0);
}

fn init_logging(verbose: u8) {
  let level = match verbose {
    0 => LevelFilter::Info,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace
  };

  // "\r\n" so records line up while the terminal is in raw mode
  Builder::from_env(Env::default().default_filter_or(level.as_str()))
    .target(Target::Stderr)
    .format(|buf, record| write!(buf, "[{}] {}\r\n", record.level(), record.args()))
    .init();
}

async fn find_device(args: &Args) -> Result<Option<String>> {
  println!("Searching for Roku devices...");

  let mut devices = discover_devices(args.discovery_timeout())
    .await
    .context("could not find roku devices")?;

  match devices.len() {
    0 => Ok(None),
    1 => Ok(devices.pop().map(|device| device.address)),
    _ => select_device(&devices).map(Some)
  }
}

fn select_device(devices: &[DiscoveredDevice]) -> Result<String> {
  println!("Roku Devices:");
  for (i, device) in devices.iter().enumerate() {
    println!("[{}] {} ({})", i, device.address, device.name);
  }

  print!("Select a device: ");
  io::stdout().flush()?;

  let mut line = String::new();
  io::stdin().lock().read_line(&mut line)?;
  let choice = line.trim();

  choice
    .parse::<usize>()
    .ok()
    .and_then(|index| devices.get(index))
    .map(|device| device.address.clone())
    .with_context(|| format!("invalid choice: '{}'", choice))
}
