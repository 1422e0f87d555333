use crate::devices::{format_uptime, App, DeviceInfo, PlayerStatus};

/// Connection banner
pub fn device_summary(info: &DeviceInfo, address: &str) -> Vec<String> {
  let mut lines = vec![format!("Connected to {} ({}) at {}", info.display_name(), model_label(info), address)];

  if !info.user_device_location.is_empty() {
    lines.push(format!("  in {}", info.user_device_location));
  }

  lines.push(format!("  on {} network '{}'", info.network(), info.network_name));
  lines.push(format!("  software {} build {}", info.software_version, info.software_build));
  lines.push(format!("Mode: {}, up {}", info.power(), format_uptime(info.uptime_seconds)));
  lines
}

pub fn app_list(apps: &[App]) -> Vec<String> {
  if apps.is_empty() {
    return vec!["No apps installed".into()];
  }

  let mut lines = vec!["Installed apps:".to_string()];
  lines.extend(apps.iter().map(|app| format!("[{}]\t{}", app.id, app.name)));
  lines
}

pub fn active_app(app: Option<&App>) -> String {
  match app {
    Some(app) => format!("Active app: [{}] {}", app.id, app.name),
    None => "Active app: none (home screen)".into()
  }
}

pub fn player_status(status: &PlayerStatus) -> Vec<String> {
  let mut lines = vec!["Media Player".to_string()];

  if !status.plugin.id.is_empty() {
    lines.push(format!("App: [{}] {}", status.plugin.id, status.plugin.name));
    lines.push(format!("Bandwidth: {}", status.plugin.bandwidth));
  }

  lines.push(format!("Error: {} State: {}", status.error, status.state));

  if !status.format.video.is_empty() || !status.format.audio.is_empty() {
    lines.push(format!(
      "Format: video {} audio {} captions {} drm {}",
      status.format.video, status.format.audio, status.format.captions, status.format.drm
    ));
  }

  if !status.position.is_empty() {
    lines.push(format!("Position: {}", status.position));
  }

  lines.push(format!("Live: {}", status.is_live));
  lines
}

fn model_label(info: &DeviceInfo) -> &str {
  if info.friendly_model_name.is_empty() { &info.model_name } else { &info.friendly_model_name }
}
