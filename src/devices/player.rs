use serde::Deserialize;

/// What the foreground media session is doing right now, from `query/media-player`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename = "player")]
pub struct PlayerStatus {
  #[serde(default)]
  pub error: bool,

  /// Free-form playback state: "play", "pause", "close", ...
  pub state: String,

  #[serde(default)]
  pub plugin: Plugin,

  #[serde(default)]
  pub format: Format,

  /// Device-defined position string, e.g. "41537 ms". Not parsed further.
  #[serde(default)]
  pub position: String,

  #[serde(default)]
  pub is_live: bool
}

/// The channel owning the media session
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Plugin {
  #[serde(default)]
  pub bandwidth: String,

  #[serde(default)]
  pub id: String,

  #[serde(default)]
  pub name: String
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Format {
  #[serde(default)]
  pub audio: String,

  #[serde(default)]
  pub video: String,

  #[serde(default)]
  pub captions: String,

  #[serde(default)]
  pub drm: String
}
