//! Hue and Saturation color representation.

use serde::{Deserialize, Serialize};

/// Hue and Saturation as the bridge understands them.
///
/// - Hue: position on the color wheel, 0-65535 (both ends are red)
/// - Saturation: 0 (white) to 254 (fully colored)
///
/// An alternative to [`crate::ChromaticityPoint`] for lights that are
/// driven in `hs` color mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HueSaturation {
    hue: u16,
    saturation: u8,
}

impl HueSaturation {
    const SAT_MAX: u8 = 254;

    /// Create a new HueSaturation with the given values.
    ///
    /// Returns `None` if saturation exceeds 254.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::HueSaturation;
    ///
    /// assert!(HueSaturation::create(0, 254).is_some());
    /// assert!(HueSaturation::create(65535, 0).is_some());
    /// assert!(HueSaturation::create(25500, 255).is_none());
    /// ```
    pub fn create(hue: u16, saturation: u8) -> Option<Self> {
        if saturation <= Self::SAT_MAX {
            Some(HueSaturation { hue, saturation })
        } else {
            None
        }
    }

    /// Create from an angle in degrees and a saturation percentage.
    ///
    /// Returns `None` if `degrees > 360` or `percent > 100`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::HueSaturation;
    ///
    /// let green = HueSaturation::from_degrees(120, 100).unwrap();
    /// assert_eq!(green.hue(), 21845);
    /// assert_eq!(green.saturation(), 254);
    ///
    /// assert!(HueSaturation::from_degrees(361, 50).is_none());
    /// assert!(HueSaturation::from_degrees(180, 101).is_none());
    /// ```
    pub fn from_degrees(degrees: u16, percent: u8) -> Option<Self> {
        if degrees > 360 || percent > 100 {
            return None;
        }
        let hue = (u32::from(degrees) * u32::from(u16::MAX) / 360) as u16;
        let saturation = (u16::from(percent) * u16::from(Self::SAT_MAX) / 100) as u8;
        Some(HueSaturation { hue, saturation })
    }

    /// Get the hue value.
    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// Get the saturation value.
    pub fn saturation(&self) -> u8 {
        self.saturation
    }
}
