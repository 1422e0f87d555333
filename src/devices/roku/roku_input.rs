use url::form_urlencoded::byte_serialize;

use super::RokuKey;

/// Something that can be sent to `keypress/<token>`.
// the /keydown/:k and /keyup/:k routes also exist but nothing here needs them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RokuInput {
  Key(RokuKey),

  /// A single typed character, sent as `Lit_<form-urlencoded char>`
  Literal(char)
}

impl From<&RokuInput> for String {
  fn from(input: &RokuInput) -> String {
    match input {
      RokuInput::Key(key) => <&'static str>::from(key).to_string(),
      RokuInput::Literal(c) => {
        let mut buffer = [0u8; 4];
        let encoded: String = byte_serialize(c.encode_utf8(&mut buffer).as_bytes()).collect();
        format!("Lit_{}", encoded)
      }
    }
  }
}

impl From<RokuInput> for String {
  fn from(input: RokuInput) -> String {
    String::from(&input)
  }
}

impl From<RokuKey> for RokuInput {
  fn from(key: RokuKey) -> RokuInput {
    RokuInput::Key(key)
  }
}
