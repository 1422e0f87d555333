use super::{App, EcpError, LaunchParams, RemoteSession, RokuInput, RokuKey, Transport};

/// Button-level operations, each a thin layer over the session's request primitives.
impl<T: Transport> RemoteSession<T> {
  /// Press one remote button: exactly one keypress request.
  pub async fn press(&self, key: RokuKey) -> Result<(), EcpError> {
    self.send(RokuInput::Key(key)).await
  }

  pub async fn send(&self, input: RokuInput) -> Result<(), EcpError> {
    self.keypress(&String::from(&input)).await
  }

  /// Type `text` one character at a time (useful for filling a search box).
  ///
  /// Stops at the first failed keypress and returns its error. Characters
  /// sent before that have already been typed on the device.
  pub async fn input_string(&self, text: &str) -> Result<(), EcpError> {
    for c in text.chars() {
      self.send(RokuInput::Literal(c)).await?;
    }
    Ok(())
  }

  pub async fn input_char(&self, c: char) -> Result<(), EcpError> {
    self.send(RokuInput::Literal(c)).await
  }

  pub async fn launch_app(&self, app: &App) -> Result<(), EcpError> {
    self.launch(&app.id, &LaunchParams::new()).await
  }

  /// Launch with extra arguments, e.g. deep-linking into a stream inside a channel.
  pub async fn launch_with_values(&self, app: &App, params: &LaunchParams) -> Result<(), EcpError> {
    self.launch(&app.id, params).await
  }

  /// Install a channel from the store. Requires already knowing its id.
  pub async fn install_app(&self, app: &App) -> Result<(), EcpError> {
    self.install(&app.id).await
  }
}
