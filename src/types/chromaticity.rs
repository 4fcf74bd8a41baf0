//! CIE 1931 xy chromaticity coordinates.

use serde::{Deserialize, Serialize};

/// A point in the CIE 1931 xy chromaticity diagram.
///
/// Describes hue and saturation independently of luminance. Both coordinates
/// are in `[0.0, 1.0]`. On the wire the point is the two-element array the
/// bridge expects for its `xy` attribute.
///
/// # Examples
///
/// ```
/// use hue_lights_rs::ChromaticityPoint;
///
/// let point = ChromaticityPoint::new(0.675, 0.322);
/// assert_eq!(serde_json::to_string(&point).unwrap(), "[0.675,0.322]");
///
/// let back: ChromaticityPoint = serde_json::from_str("[0.675,0.322]").unwrap();
/// assert_eq!(back, point);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct ChromaticityPoint {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl ChromaticityPoint {
    /// The degenerate point returned for black input.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns true if both coordinates lie in `[0.0, 1.0]`.
    pub fn is_normalized(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

impl From<[f64; 2]> for ChromaticityPoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<ChromaticityPoint> for [f64; 2] {
    fn from(point: ChromaticityPoint) -> Self {
        [point.x, point.y]
    }
}

impl From<(f64, f64)> for ChromaticityPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
