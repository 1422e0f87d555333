use serde::de::DeserializeOwned;

use super::{
  app::{ActiveAppEnvelope, AppsEnvelope},
  App, DecodeError, DeviceInfo, PlayerStatus
};

/// One `query/*` endpoint: where it lives, what XML it answers with,
/// and what that XML means once decoded.
pub trait Query {
  /// Path segment after `query/`
  const ENDPOINT: &'static str;

  /// Shape of the XML document
  type Envelope: DeserializeOwned;

  type Output;

  fn interpret(envelope: Self::Envelope) -> Result<Self::Output, DecodeError>;

  fn decode(body: &[u8]) -> Result<Self::Output, DecodeError> {
    let envelope: Self::Envelope = serde_xml_rs::from_reader(body)
      .map_err(|e| DecodeError::new(Self::ENDPOINT, e))?;

    Self::interpret(envelope)
  }
}

pub struct DeviceInfoQuery;
pub struct ActiveAppQuery;
pub struct AppsQuery;
pub struct MediaPlayerQuery;

impl Query for DeviceInfoQuery {
  const ENDPOINT: &'static str = "device-info";
  type Envelope = DeviceInfo;
  type Output = DeviceInfo;

  fn interpret(info: DeviceInfo) -> Result<DeviceInfo, DecodeError> {
    // every field is optional on the wire; a document with neither of these
    // is some other XML that happened to deserialize into all defaults
    if info.serial_number.is_empty() && info.model_name.is_empty() {
      return Err(DecodeError::new(Self::ENDPOINT, "missing serial-number and model-name"));
    }

    Ok(info)
  }
}

impl Query for ActiveAppQuery {
  const ENDPOINT: &'static str = "active-app";
  type Envelope = ActiveAppEnvelope;
  type Output = Option<App>;

  fn interpret(envelope: ActiveAppEnvelope) -> Result<Option<App>, DecodeError> {
    Ok(envelope.into_app())
  }
}

impl Query for AppsQuery {
  const ENDPOINT: &'static str = "apps";
  type Envelope = AppsEnvelope;
  type Output = Vec<App>;

  fn interpret(envelope: AppsEnvelope) -> Result<Vec<App>, DecodeError> {
    Ok(envelope.apps)
  }
}

impl Query for MediaPlayerQuery {
  const ENDPOINT: &'static str = "media-player";
  type Envelope = PlayerStatus;
  type Output = PlayerStatus;

  fn interpret(status: PlayerStatus) -> Result<PlayerStatus, DecodeError> {
    Ok(status)
  }
}

#[cfg(test)]
pub(crate) mod fixtures {
  pub const DEVICE_INFO: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<device-info>
	<udn>29600009-5406-1005-8080-d4e22f3b1a2c</udn>
	<serial-number>X004000AB123</serial-number>
	<device-id>S0A1234AB123</device-id>
	<vendor-name>Roku</vendor-name>
	<model-name>Roku Ultra</model-name>
	<model-number>4800X</model-number>
	<model-region>US</model-region>
	<is-tv>false</is-tv>
	<is-stick>false</is-stick>
	<supports-ethernet>true</supports-ethernet>
	<wifi-mac>d4:e2:2f:3b:1a:2c</wifi-mac>
	<network-type>wifi</network-type>
	<network-name>HomeNet</network-name>
	<friendly-device-name>Living Room</friendly-device-name>
	<friendly-model-name>Roku Ultra</friendly-model-name>
	<default-device-name>Roku Ultra - X004000AB123</default-device-name>
	<user-device-name>Living Room</user-device-name>
	<user-device-location>Living room</user-device-location>
	<software-version>11.5.0</software-version>
	<software-build>4312</software-build>
	<language>en</language>
	<country>US</country>
	<locale>en_US</locale>
	<time-zone-auto>true</time-zone-auto>
	<time-zone>US/Pacific</time-zone>
	<time-zone-tz>America/Los_Angeles</time-zone-tz>
	<time-zone-offset>-480</time-zone-offset>
	<clock-format>12-hour</clock-format>
	<uptime>93784</uptime>
	<power-mode>PowerOn</power-mode>
	<supports-suspend>false</supports-suspend>
	<supports-find-remote>true</supports-find-remote>
	<supports-private-listening>true</supports-private-listening>
	<developer-enabled>false</developer-enabled>
	<search-enabled>true</search-enabled>
</device-info>
"#;

  /// Device info for a device in the given power mode
  pub fn device_info(power_mode: &str) -> String {
    DEVICE_INFO.replace("<power-mode>PowerOn</power-mode>", &format!("<power-mode>{}</power-mode>", power_mode))
  }

  pub const APPS: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<apps>
	<app id="31012" type="appl" version="2.1.7">Vudu</app>
	<app id="12" type="appl" version="4.2.81179053">Netflix</app>
	<app id="2285" type="appl" version="6.40.2">Hulu</app>
</apps>
"#;

  pub const ACTIVE_APP: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<active-app>
	<app id="12" type="appl" version="4.2.81179053">Netflix</app>
</active-app>
"#;

  pub const ACTIVE_APP_HOME: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<active-app>
	<app>Roku</app>
</active-app>
"#;

  pub const MEDIA_PLAYER: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<player error="false" state="play">
	<plugin bandwidth="12345678 bps" id="2285" name="Hulu"/>
	<format audio="aac" captions="none" drm="widevine" video="hevc"/>
	<buffering current="1000" max="1000" target="0"/>
	<position>41537 ms</position>
	<is_live>false</is_live>
</player>
"#;
}
