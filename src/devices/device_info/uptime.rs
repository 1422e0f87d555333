const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Compact human form of an uptime in seconds, e.g. `3d 4h 12m`.
/// Seconds are only shown for uptimes under a minute.
pub fn format_uptime(seconds: u64) -> String {
  if seconds < MINUTE {
    return format!("{}s", seconds);
  }

  let parts = [
    (seconds / DAY, "d"),
    ((seconds % DAY) / HOUR, "h"),
    ((seconds % HOUR) / MINUTE, "m")
  ];

  parts
    .iter()
    .filter(|(value, _)| *value != 0)
    .map(|(value, unit)| format!("{}{}", value, unit))
    .collect::<Vec<_>>()
    .join(" ")
}
