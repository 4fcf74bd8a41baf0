//! Lights as listed by the bridge.

use serde::{Deserialize, Serialize};

use crate::response::{LightingResponse, Target};
use crate::status::LightStatus;

/// A single light known to the bridge.
///
/// Obtained from [`Bridge::get_lights`](crate::Bridge::get_lights) or
/// [`Bridge::get_light`](crate::Bridge::get_light). The id is the key the
/// bridge lists the light under and is used to address it in later calls.
///
/// # Example
///
/// ```
/// use hue_lights_rs::Light;
///
/// let light = Light::new("3", "Bedroom");
/// assert_eq!(light.id(), "3");
/// assert!(!light.state().emitting());
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Light {
    #[serde(skip)]
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(rename = "modelid")]
    model_id: Option<String>,
    #[serde(rename = "uniqueid")]
    unique_id: Option<String>,
    #[serde(rename = "swversion")]
    sw_version: Option<String>,
    #[serde(default)]
    state: LightStatus,
}

impl Light {
    pub fn new(id: &str, name: &str) -> Self {
        Light {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bridge light type, e.g. "Extended color light".
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn model_id(&self) -> Option<&str> {
        self.model_id.as_deref()
    }

    pub fn unique_id(&self) -> Option<&str> {
        self.unique_id.as_deref()
    }

    pub fn sw_version(&self) -> Option<&str> {
        self.sw_version.as_deref()
    }

    pub fn state(&self) -> &LightStatus {
        &self.state
    }

    /// Update the cached state from a state-update response.
    ///
    /// Returns `false` if the response was addressed to another light.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{Light, LightState, LightingResponse, PowerMode};
    ///
    /// let mut light = Light::new("1", "Desk");
    /// let resp = LightingResponse::light("2", LightState::from(&PowerMode::On));
    /// assert!(!light.process_reply(&resp));
    ///
    /// let resp = LightingResponse::light("1", LightState::from(&PowerMode::On));
    /// assert!(light.process_reply(&resp));
    /// assert!(light.state().emitting());
    /// ```
    pub fn process_reply(&mut self, resp: &LightingResponse) -> bool {
        match &resp.target {
            Target::Light(id) if *id == self.id => {
                self.state.update_from_state(&resp.state);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_bridge_light() {
        let light: Light = serde_json::from_value(json!({
            "state": {"on": true, "bri": 254, "xy": [0.3227, 0.329], "colormode": "xy"},
            "type": "Extended color light",
            "name": "Hue color lamp 1",
            "modelid": "LCT007",
            "uniqueid": "00:17:88:01:00:bd:c7:b9-0b",
            "swversion": "5.105.0.21169"
        }))
        .unwrap();
        let light = light.with_id("1");

        assert_eq!(light.id(), "1");
        assert_eq!(light.name(), "Hue color lamp 1");
        assert_eq!(light.kind(), Some("Extended color light"));
        assert_eq!(light.model_id(), Some("LCT007"));
        assert!(light.state().emitting());
    }
}
