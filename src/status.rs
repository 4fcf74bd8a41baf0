//! Light state as reported by the bridge.

use serde::{Deserialize, Serialize};

use crate::payload::LightState;
use crate::types::{Alert, Brightness, ChromaticityPoint, Effect, HueSaturation, PowerMode};

/// The color mode a light is currently rendering in.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Hue and saturation
    Hs,
    /// CIE xy chromaticity
    Xy,
    /// Color temperature
    Ct,
}

/// The `state` object of a light, or the `action` object of a group.
///
/// Fields the bridge omits for a given light type (e.g. `xy` on a white-only
/// bulb) are `None`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct LightStatus {
    #[serde(default)]
    on: bool,
    bri: Option<u8>,
    hue: Option<u16>,
    sat: Option<u8>,
    xy: Option<ChromaticityPoint>,
    alert: Option<Alert>,
    effect: Option<Effect>,
    #[serde(rename = "colormode")]
    color_mode: Option<ColorMode>,
    reachable: Option<bool>,
}

impl LightStatus {
    /// Check if the light is emitting.
    pub fn emitting(&self) -> bool {
        self.on
    }

    pub fn power(&self) -> PowerMode {
        PowerMode::from(self.on)
    }

    pub fn brightness(&self) -> Option<Brightness> {
        self.bri.and_then(Brightness::create)
    }

    pub fn hue_saturation(&self) -> Option<HueSaturation> {
        match (self.hue, self.sat) {
            (Some(hue), Some(sat)) => HueSaturation::create(hue, sat),
            _ => None,
        }
    }

    pub fn xy(&self) -> Option<ChromaticityPoint> {
        self.xy
    }

    pub fn alert(&self) -> Option<Alert> {
        self.alert
    }

    pub fn effect(&self) -> Option<Effect> {
        self.effect
    }

    pub fn color_mode(&self) -> Option<ColorMode> {
        self.color_mode
    }

    /// Lights that are not reported as unreachable count as reachable.
    pub fn reachable(&self) -> bool {
        self.reachable.unwrap_or(true)
    }

    /// Apply a state update that the bridge acknowledged.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{ChromaticityPoint, ColorMode, LightState, LightStatus};
    ///
    /// let mut status = LightStatus::default();
    /// status.update_from_state(&LightState::from(&ChromaticityPoint::new(0.2, 0.3)));
    /// assert_eq!(status.xy(), Some(ChromaticityPoint::new(0.2, 0.3)));
    /// assert_eq!(status.color_mode(), Some(ColorMode::Xy));
    /// ```
    pub fn update_from_state(&mut self, state: &LightState) {
        if let Some(on) = state.on {
            self.on = on;
        }
        if let Some(bri) = state.bri {
            self.bri = Some(bri);
        }
        if state.hue.is_some() || state.sat.is_some() {
            self.hue = state.hue.or(self.hue);
            self.sat = state.sat.or(self.sat);
            self.color_mode = Some(ColorMode::Hs);
        }
        if let Some(xy) = state.xy {
            self.xy = Some(xy);
            self.color_mode = Some(ColorMode::Xy);
        }
        if let Some(alert) = state.alert {
            self.alert = Some(alert);
        }
        if let Some(effect) = state.effect {
            self.effect = Some(effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_color_light_state() {
        let status: LightStatus = serde_json::from_value(json!({
            "on": true,
            "bri": 144,
            "hue": 13088,
            "sat": 212,
            "xy": [0.5128, 0.4147],
            "ct": 467,
            "alert": "none",
            "effect": "none",
            "colormode": "xy",
            "reachable": true
        }))
        .unwrap();

        assert!(status.emitting());
        assert_eq!(status.brightness().unwrap().value(), 144);
        assert_eq!(status.hue_saturation().unwrap().hue(), 13088);
        assert_eq!(status.xy(), Some(ChromaticityPoint::new(0.5128, 0.4147)));
        assert_eq!(status.color_mode(), Some(ColorMode::Xy));
        assert!(status.reachable());
    }

    #[test]
    fn test_parse_white_light_state() {
        let status: LightStatus = serde_json::from_value(json!({
            "on": false,
            "bri": 0,
            "alert": "select",
            "reachable": false
        }))
        .unwrap();

        assert_eq!(status.power(), PowerMode::Off);
        assert!(status.brightness().is_none());
        assert!(status.xy().is_none());
        assert_eq!(status.alert(), Some(Alert::Select));
        assert!(!status.reachable());
    }

    #[test]
    fn test_update_from_state_hs() {
        let mut status = LightStatus::default();
        let mut state = LightState::new();
        state.hue_saturation(&HueSaturation::create(100, 200).unwrap());
        state.power(&PowerMode::On);
        status.update_from_state(&state);

        assert!(status.emitting());
        assert_eq!(status.color_mode(), Some(ColorMode::Hs));
        assert_eq!(status.hue_saturation(), HueSaturation::create(100, 200));
    }
}
