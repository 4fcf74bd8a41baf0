//! Alert and dynamic effect modes.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// A temporary alert cycle, used to identify a light.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Alert {
    /// Stop any running alert
    #[default]
    None,
    /// One breathe cycle
    Select,
    /// Breathe cycles for 15 seconds
    #[strum(serialize = "lselect")]
    LSelect,
}

/// A dynamic effect that keeps running until replaced.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use hue_lights_rs::{Alert, Effect};
///
/// assert_eq!(Effect::from_str("colorloop").unwrap(), Effect::ColorLoop);
/// assert_eq!(Alert::LSelect.to_string(), "lselect");
/// assert_eq!(serde_json::to_string(&Alert::LSelect).unwrap(), "\"lselect\"");
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Effect {
    /// No effect
    #[default]
    None,
    /// Cycle through all hues at current brightness and saturation
    ColorLoop,
}
