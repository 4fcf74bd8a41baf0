//! State-update payload for bridge lights and groups.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::ColorConverter;
use crate::errors::Error;
use crate::types::{
    Alert, Brightness, ChromaticityPoint, Effect, HueSaturation, PowerMode, RgbColor,
};

/// A state update to send to a light (`/lights/<id>/state`) or a group
/// (`/groups/<id>/action`).
///
/// Only the attributes that were set are serialized, so the bridge leaves
/// everything else untouched.
///
/// # Creating Payloads
///
/// 1. **From a single attribute** using the [`From`] trait:
///    ```
///    use hue_lights_rs::{LightState, PowerMode};
///    let state = LightState::from(&PowerMode::Off);
///    assert_eq!(serde_json::to_string(&state).unwrap(), r#"{"on":false}"#);
///    ```
///
/// 2. **Builder pattern** for combining multiple attributes:
///    ```
///    use hue_lights_rs::{Brightness, ColorConverter, LightState};
///    let mut state = LightState::new();
///    state.brightness(&Brightness::create(200).unwrap());
///    state.hex("#FF0000", &ColorConverter::default()).unwrap();
///
///    let json = serde_json::to_value(&state).unwrap();
///    assert_eq!(json["bri"], 200);
///    assert_eq!(json["xy"].as_array().unwrap().len(), 2);
///    ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LightState {
    pub(crate) on: Option<bool>,
    pub(crate) bri: Option<u8>,
    pub(crate) hue: Option<u16>,
    pub(crate) sat: Option<u8>,
    pub(crate) xy: Option<ChromaticityPoint>,
    pub(crate) alert: Option<Alert>,
    pub(crate) effect: Option<Effect>,
    #[serde(rename = "transitiontime")]
    pub(crate) transition_time: Option<u16>,
}

impl LightState {
    /// Create a new empty payload.
    ///
    /// At least one attribute must be set for the payload to be valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::LightState;
    ///
    /// let state = LightState::new();
    /// assert_eq!(state.is_valid(), false);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this payload changes anything on the light.
    ///
    /// A transition time on its own changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use hue_lights_rs::{LightState, PowerMode};
    ///
    /// let mut state = LightState::new();
    /// state.transition(Duration::from_secs(1));
    /// assert_eq!(state.is_valid(), false);
    ///
    /// state.power(&PowerMode::On);
    /// assert_eq!(state.is_valid(), true);
    /// ```
    pub fn is_valid(&self) -> bool {
        self.on.is_some()
            || self.bri.is_some()
            || self.hue.is_some()
            || self.sat.is_some()
            || self.xy.is_some()
            || self.alert.is_some()
            || self.effect.is_some()
    }

    pub fn power(&mut self, power: &PowerMode) {
        self.on = Some(power.is_on());
    }

    pub fn brightness(&mut self, brightness: &Brightness) {
        self.bri = Some(brightness.value);
    }

    pub fn hue_saturation(&mut self, hs: &HueSaturation) {
        self.hue = Some(hs.hue());
        self.sat = Some(hs.saturation());
    }

    /// Set the color as a chromaticity point.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{ChromaticityPoint, LightState};
    ///
    /// let mut state = LightState::new();
    /// state.xy(&ChromaticityPoint::new(0.5, 0.25));
    /// assert_eq!(serde_json::to_string(&state).unwrap(), r#"{"xy":[0.5,0.25]}"#);
    /// ```
    pub fn xy(&mut self, point: &ChromaticityPoint) {
        self.xy = Some(*point);
    }

    /// Set the color from RGB, converted to xy.
    pub fn color(&mut self, rgb: &RgbColor, converter: &ColorConverter) {
        self.xy(&converter.xy_from_rgb(rgb));
    }

    /// Set the color from a hex string, converted to xy.
    ///
    /// Leaves the payload untouched if the string is not a valid color.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{ColorConverter, LightState};
    ///
    /// let mut state = LightState::new();
    /// assert!(state.hex("#GG0000", &ColorConverter::default()).is_err());
    /// assert_eq!(state.is_valid(), false);
    /// ```
    pub fn hex(&mut self, hex: &str, converter: &ColorConverter) -> Result<(), Error> {
        let point = converter.xy_from_hex(hex)?;
        self.xy(&point);
        Ok(())
    }

    pub fn alert(&mut self, alert: &Alert) {
        self.alert = Some(*alert);
    }

    pub fn effect(&mut self, effect: &Effect) {
        self.effect = Some(*effect);
    }

    /// Set the transition time; the bridge counts in steps of 100ms.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use hue_lights_rs::LightState;
    ///
    /// let mut state = LightState::new();
    /// state.transition(Duration::from_millis(1250));
    /// assert_eq!(state.transition_time(), Some(12));
    ///
    /// state.transition(Duration::from_secs(86_400));
    /// assert_eq!(state.transition_time(), Some(u16::MAX));
    /// ```
    pub fn transition(&mut self, duration: Duration) {
        let steps = duration.as_millis() / 100;
        self.transition_time = Some(u16::try_from(steps).unwrap_or(u16::MAX));
    }

    pub fn transition_time(&self) -> Option<u16> {
        self.transition_time
    }

    pub fn get_xy(&self) -> Option<ChromaticityPoint> {
        self.xy
    }
}

impl From<&ChromaticityPoint> for LightState {
    fn from(point: &ChromaticityPoint) -> Self {
        let mut p = LightState::new();
        p.xy(point);
        p
    }
}

impl From<&PowerMode> for LightState {
    fn from(power: &PowerMode) -> Self {
        let mut p = LightState::new();
        p.power(power);
        p
    }
}

impl From<&Brightness> for LightState {
    fn from(brightness: &Brightness) -> Self {
        let mut p = LightState::new();
        p.brightness(brightness);
        p
    }
}

impl From<&HueSaturation> for LightState {
    fn from(hs: &HueSaturation) -> Self {
        let mut p = LightState::new();
        p.hue_saturation(hs);
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GammaMode;
    use serde_json::json;

    #[test]
    fn test_skips_unset_fields() {
        let mut state = LightState::new();
        state.power(&PowerMode::On);
        state.brightness(&Brightness::create(128).unwrap());
        state.alert(&Alert::Select);
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({"on": true, "bri": 128, "alert": "select"})
        );
    }

    #[test]
    fn test_color_embeds_xy_array() {
        let mut state = LightState::new();
        state.color(
            &RgbColor::rgb(0, 0, 0),
            &ColorConverter::new(GammaMode::Legacy),
        );
        state.effect(&Effect::ColorLoop);
        state.transition(Duration::from_millis(400));
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({"xy": [0.0, 0.0], "effect": "colorloop", "transitiontime": 4})
        );
    }

    #[test]
    fn test_hue_saturation() {
        let state = LightState::from(&HueSaturation::create(46920, 254).unwrap());
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({"hue": 46920, "sat": 254})
        );
    }

    #[test]
    fn test_round_trip_from_bridge_json() {
        let state: LightState =
            serde_json::from_value(json!({"on": true, "xy": [0.3, 0.4], "effect": "none"}))
                .unwrap();
        assert_eq!(state.get_xy(), Some(ChromaticityPoint::new(0.3, 0.4)));
        assert_eq!(state.effect, Some(Effect::None));
        assert!(state.is_valid());
    }
}
