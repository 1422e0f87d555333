use serde::Deserialize;

/// An installed (or installable) channel.
///
/// The id is an opaque handle and the only thing launch/install care about.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct App {
  #[serde(default)]
  pub id: String,

  #[serde(rename = "$value", default)]
  pub name: String,

  /// e.g. "appl", "ndka", "tvin"
  #[serde(rename = "type", default)]
  pub kind: String,

  #[serde(default)]
  pub version: String
}

impl App {
  pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
    App {
      id: id.into(),
      name: name.into(),
      ..Default::default()
    }
  }

  /// An app handle for an id typed by hand, name unknown.
  pub fn from_id(id: impl Into<String>) -> Self {
    App::new(id, "")
  }
}

/// `<active-app>` envelope. The home screen shows up as an `<app>` without an id.
#[derive(Debug, Deserialize)]
#[serde(rename = "active-app")]
pub struct ActiveAppEnvelope {
  #[serde(default)]
  pub app: Option<App>
}

impl ActiveAppEnvelope {
  pub fn into_app(self) -> Option<App> {
    self.app.filter(|app| !app.id.is_empty())
  }
}

/// `<apps>` envelope, in the order the device lists them.
#[derive(Debug, Deserialize)]
#[serde(rename = "apps")]
pub struct AppsEnvelope {
  #[serde(rename = "app", default)]
  pub apps: Vec<App>
}
