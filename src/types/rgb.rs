//! 8-bit RGB color representation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::HexColor;

/// An RGB color with red, green, and blue components.
///
/// Channels are nominally 0-255 but are not range-checked here; values
/// outside that range are clamped when the color is gamma corrected.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub(crate) red: i32,
    pub(crate) green: i32,
    pub(crate) blue: i32,
}

impl RgbColor {
    /// Create a color with the given RGB values.
    pub fn rgb(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// Create a default color (black: 0,0,0).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn red(&self) -> i32 {
        self.red
    }

    pub fn green(&self) -> i32 {
        self.green
    }

    pub fn blue(&self) -> i32 {
        self.blue
    }

    /// Returns the channels as an array in red, green, blue order.
    pub fn channels(&self) -> [i32; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<HexColor> for RgbColor {
    fn from(hex: HexColor) -> Self {
        RgbColor::rgb(hex.red.into(), hex.green.into(), hex.blue.into())
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        RgbColor::rgb(red.into(), green.into(), blue.into())
    }
}

impl FromStr for RgbColor {
    type Err = String;

    /// Parse from comma-separated string (e.g., "255,128,0").
    ///
    /// # Examples
    ///
    /// ```
    /// use std::str::FromStr;
    /// use hue_lights_rs::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_str("255, 128,0").unwrap(), RgbColor::rgb(255, 128, 0));
    /// assert!(RgbColor::from_str("1,2").is_err());
    /// assert!(RgbColor::from_str("1,x,3").is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, String> {
        let parts = s
            .split(',')
            .map(|c| c.trim().parse::<i32>().map_err(|e| format!("{c:?}: {e}")))
            .collect::<Result<Vec<_>, _>>()?;
        match parts.as_slice() {
            [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
            _ => Err("Expected format: r,g,b".into()),
        }
    }
}
