//! Conversion from hex and RGB colors to CIE 1931 xy chromaticity.
//!
//! The bridge describes color as a point in the xy diagram, which carries hue
//! and saturation but no brightness. The pipeline is:
//!
//! 1. clamp each channel to `0..=255` and gamma-expand it ([`gamma_correct`]),
//! 2. project linear RGB into XYZ with a fixed matrix,
//! 3. normalize: `x = X / (X + Y + Z)`, `y = Y / (X + Y + Z)`.
//!
//! Black has no chromaticity; it maps to [`ChromaticityPoint::ORIGIN`].
//!
//! Everything here is pure and safe to call from any thread.
//!
//! # Examples
//!
//! ```
//! use hue_lights_rs::{GammaMode, RgbColor, xy_from_hex, xy_from_rgb};
//!
//! let red = xy_from_rgb(&RgbColor::rgb(255, 0, 0), GammaMode::Srgb);
//! assert!((red.x() - 0.6484).abs() < 1e-4);
//! assert!((red.y() - 0.3309).abs() < 1e-4);
//!
//! let same = xy_from_hex("#FF0000", GammaMode::Srgb).unwrap();
//! assert_eq!(red, same);
//! ```

use log::trace;

use crate::errors::Error;
use crate::types::{ChromaticityPoint, GammaMode, HexColor, RgbColor};

type Result<T> = std::result::Result<T, Error>;

const CHANNEL_MAX: f64 = 255.0;
const LINEAR_THRESHOLD: f64 = 0.04045;

/// Rows produce X, Y and Z from linear R, G, B.
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4360747, 0.3850649, 0.0930804],
    [0.2225045, 0.7168786, 0.0406169],
    [0.0139322, 0.0971045, 0.7141733],
];

/// Gamma-expands a single channel.
///
/// The channel is clamped to `0..=255` first (NaN counts as 0), so the result
/// is always finite. See [`GammaMode`] for the two curves.
///
/// # Examples
///
/// ```
/// use hue_lights_rs::{GammaMode, gamma_correct};
///
/// assert_eq!(gamma_correct(255.0, GammaMode::Srgb), 1.0);
/// assert_eq!(gamma_correct(0.0, GammaMode::Srgb), 0.0);
/// assert_eq!(gamma_correct(300.0, GammaMode::Legacy), gamma_correct(255.0, GammaMode::Legacy));
/// ```
pub fn gamma_correct(channel: f64, mode: GammaMode) -> f64 {
    let clamped = clamp_channel(channel);
    match mode {
        GammaMode::Srgb => {
            let c = clamped / CHANNEL_MAX;
            if c > LINEAR_THRESHOLD {
                ((c + 0.055) / 1.055).powf(2.4)
            } else {
                c / 12.92
            }
        }
        GammaMode::Legacy => {
            if clamped > LINEAR_THRESHOLD {
                (clamped + 1.055).powf(2.4)
            } else {
                clamped / 12.92
            }
        }
    }
}

/// Parses a `#RRGGBB` or `RRGGBB` string into its channels.
///
/// Fails with [`Error::InvalidColorFormat`] when the string is not exactly six
/// hex digits after the optional `#`; the error names the offending channel.
///
/// # Examples
///
/// ```
/// use hue_lights_rs::{RgbColor, hex_to_rgb};
///
/// assert_eq!(hex_to_rgb("00FF00").unwrap(), RgbColor::rgb(0, 255, 0));
/// assert!(hex_to_rgb("12").is_err());
/// assert!(hex_to_rgb("GGGGGG").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<RgbColor> {
    hex.parse::<HexColor>().map(RgbColor::from)
}

/// Converts an RGB color to its xy chromaticity.
///
/// Out-of-range channels are clamped rather than rejected. The result is in
/// `[0, 1]` on both axes; black yields [`ChromaticityPoint::ORIGIN`].
pub fn xy_from_rgb(rgb: &RgbColor, mode: GammaMode) -> ChromaticityPoint {
    let linear = rgb.channels().map(|c| gamma_correct(f64::from(c), mode));
    let [x, y, z] = RGB_TO_XYZ.map(|row| {
        row.iter()
            .zip(linear.iter())
            .map(|(coeff, channel)| coeff * channel)
            .sum::<f64>()
    });

    let sum = x + y + z;
    if sum == 0.0 {
        return ChromaticityPoint::ORIGIN;
    }
    ChromaticityPoint::new(x / sum, y / sum)
}

/// Parses a hex string and converts it to xy chromaticity.
///
/// Same errors as [`hex_to_rgb`].
pub fn xy_from_hex(hex: &str, mode: GammaMode) -> Result<ChromaticityPoint> {
    hex_to_rgb(hex).map(|rgb| xy_from_rgb(&rgb, mode))
}

fn clamp_channel(channel: f64) -> f64 {
    if channel.is_nan() {
        trace!("clamping NaN channel to 0");
        return 0.0;
    }
    let clamped = channel.clamp(0.0, CHANNEL_MAX);
    if clamped != channel {
        trace!("clamping channel {channel} to {clamped}");
    }
    clamped
}

/// A color converter bound to one [`GammaMode`].
///
/// Holds no other state; copy it wherever a conversion is needed.
///
/// # Examples
///
/// ```
/// use hue_lights_rs::{ColorConverter, GammaMode};
///
/// let legacy = ColorConverter::new(GammaMode::Legacy);
/// let srgb = ColorConverter::default();
///
/// // Primaries and grays do not depend on the curve...
/// let a = legacy.xy_from_hex("#0000FF").unwrap();
/// let b = srgb.xy_from_hex("#0000FF").unwrap();
/// assert!((a.x() - b.x()).abs() < 1e-12 && (a.y() - b.y()).abs() < 1e-12);
/// // ...mixed colors do.
/// assert_ne!(legacy.xy_from_hex("#FF8000").unwrap(), srgb.xy_from_hex("#FF8000").unwrap());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ColorConverter {
    gamma: GammaMode,
}

impl ColorConverter {
    pub const fn new(gamma: GammaMode) -> Self {
        Self { gamma }
    }

    pub fn gamma(&self) -> GammaMode {
        self.gamma
    }

    pub fn gamma_correct(&self, channel: f64) -> f64 {
        gamma_correct(channel, self.gamma)
    }

    pub fn hex_to_rgb(&self, hex: &str) -> Result<RgbColor> {
        hex_to_rgb(hex)
    }

    pub fn xy_from_rgb(&self, rgb: &RgbColor) -> ChromaticityPoint {
        xy_from_rgb(rgb, self.gamma)
    }

    pub fn xy_from_hex(&self, hex: &str) -> Result<ChromaticityPoint> {
        xy_from_hex(hex, self.gamma)
    }
}

impl From<GammaMode> for ColorConverter {
    fn from(gamma: GammaMode) -> Self {
        Self::new(gamma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn assert_close(point: ChromaticityPoint, x: f64, y: f64) {
        assert!(
            (point.x() - x).abs() < 1e-4 && (point.y() - y).abs() < 1e-4,
            "expected ({x}, {y}), got {point:?}"
        );
    }

    #[test]
    fn test_xy_in_unit_square() {
        for mode in GammaMode::iter() {
            for r in (0..=255).step_by(5) {
                for g in (0..=255).step_by(5) {
                    for b in (0..=255).step_by(5) {
                        let point = xy_from_rgb(&RgbColor::rgb(r, g, b), mode);
                        assert!(point.is_normalized(), "{mode} ({r},{g},{b}) -> {point:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_xy_in_unit_square_out_of_range() {
        for mode in GammaMode::iter() {
            for rgb in [
                RgbColor::rgb(-1000, 128, 4000),
                RgbColor::rgb(i32::MIN, i32::MAX, 0),
                RgbColor::rgb(300, -10, 256),
            ] {
                assert!(xy_from_rgb(&rgb, mode).is_normalized());
            }
        }
    }

    #[test]
    fn test_black_is_origin() {
        for mode in GammaMode::iter() {
            assert_eq!(
                xy_from_rgb(&RgbColor::rgb(0, 0, 0), mode),
                ChromaticityPoint::ORIGIN
            );
            assert_eq!(
                xy_from_rgb(&RgbColor::rgb(-5, -5, -5), mode),
                ChromaticityPoint::ORIGIN
            );
            assert_eq!(
                xy_from_hex("#000000", mode).unwrap(),
                ChromaticityPoint::ORIGIN
            );
        }
    }

    #[test]
    fn test_hash_prefix_is_optional() {
        for mode in GammaMode::iter() {
            assert_eq!(
                xy_from_hex("#FFFFFF", mode).unwrap(),
                xy_from_hex("FFFFFF", mode).unwrap()
            );
            assert_eq!(
                xy_from_hex("#3a7bd5", mode).unwrap(),
                xy_from_hex("3A7BD5", mode).unwrap()
            );
        }
    }

    #[test]
    fn test_hex_to_rgb_primaries() {
        assert_eq!(hex_to_rgb("FF0000").unwrap(), RgbColor::rgb(255, 0, 0));
        assert_eq!(hex_to_rgb("00FF00").unwrap(), RgbColor::rgb(0, 255, 0));
        assert_eq!(hex_to_rgb("0000FF").unwrap(), RgbColor::rgb(0, 0, 255));
        assert_eq!(hex_to_rgb("#0a0B0c").unwrap(), RgbColor::rgb(10, 11, 12));
    }

    #[test]
    fn test_hex_to_rgb_invalid() {
        assert!(matches!(
            hex_to_rgb("12"),
            Err(Error::InvalidColorFormat { .. })
        ));
        assert!(matches!(
            hex_to_rgb("GGGGGG"),
            Err(Error::InvalidColorFormat { .. })
        ));
        assert!(matches!(
            xy_from_hex("#12345", GammaMode::Srgb),
            Err(Error::InvalidColorFormat { .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        for mode in GammaMode::iter() {
            let rgb = RgbColor::rgb(17, 200, 99);
            let first = xy_from_rgb(&rgb, mode);
            let second = xy_from_rgb(&rgb, mode);
            assert_eq!(first.x().to_bits(), second.x().to_bits());
            assert_eq!(first.y().to_bits(), second.y().to_bits());
        }
    }

    #[test]
    fn test_gamma_clamps() {
        for mode in GammaMode::iter() {
            assert_eq!(gamma_correct(300.0, mode), gamma_correct(255.0, mode));
            assert_eq!(gamma_correct(-10.0, mode), gamma_correct(0.0, mode));
            assert_eq!(gamma_correct(f64::INFINITY, mode), gamma_correct(255.0, mode));
            assert_eq!(gamma_correct(f64::NAN, mode), 0.0);
        }
    }

    #[test]
    fn test_gamma_srgb_curve() {
        assert_eq!(gamma_correct(255.0, GammaMode::Srgb), 1.0);
        // 10 / 255 is below the linear threshold.
        assert!((gamma_correct(10.0, GammaMode::Srgb) - (10.0 / 255.0) / 12.92).abs() < 1e-12);
        // Mid gray is about 21.6% linear.
        assert!((gamma_correct(128.0, GammaMode::Srgb) - 0.2158605).abs() < 1e-6);
    }

    #[test]
    fn test_gamma_legacy_curve() {
        assert_eq!(gamma_correct(0.0, GammaMode::Legacy), 0.0);
        assert!((gamma_correct(0.04, GammaMode::Legacy) - 0.04 / 12.92).abs() < 1e-12);
        assert!((gamma_correct(1.0, GammaMode::Legacy) - 2.055f64.powf(2.4)).abs() < 1e-9);
        assert!((gamma_correct(1.0, GammaMode::Legacy) - 5.6331120).abs() < 1e-6);
        assert!((gamma_correct(255.0, GammaMode::Legacy) - 256.055f64.powf(2.4)).abs() < 1e-6);
        assert!((gamma_correct(255.0, GammaMode::Legacy) - 602559.3444).abs() < 1e-3);
    }

    /// The legacy conversion written out longhand, independent of `gamma_correct`.
    fn reference_legacy_xy(red: f64, green: f64, blue: f64) -> (f64, f64) {
        fn to_point(color: f64) -> f64 {
            let color = if color < 0.0 { 0.0 } else { color };
            let color = if color > 255.0 { 255.0 } else { color };
            if color > 0.04045 {
                (color + 1.055).powf(2.4)
            } else {
                color / 12.92
            }
        }
        let (r, g, b) = (to_point(red), to_point(green), to_point(blue));
        let x = r * 0.4360747 + g * 0.3850649 + b * 0.0930804;
        let y = r * 0.2225045 + g * 0.7168786 + b * 0.0406169;
        let z = r * 0.0139322 + g * 0.0971045 + b * 0.7141733;
        if x + y + z == 0.0 {
            (0.0, 0.0)
        } else {
            (x / (x + y + z), y / (x + y + z))
        }
    }

    #[test]
    fn test_legacy_matches_reference_formula() {
        for (r, g, b) in [
            (255, 128, 0),
            (3, 1, 2),
            (58, 123, 213),
            (17, 200, 99),
            (1, 0, 254),
            (0, 0, 0),
            (400, -20, 77),
        ] {
            let point = xy_from_rgb(&RgbColor::rgb(r, g, b), GammaMode::Legacy);
            let (x, y) = reference_legacy_xy(f64::from(r), f64::from(g), f64::from(b));
            assert!(
                (point.x() - x).abs() < 1e-12 && (point.y() - y).abs() < 1e-12,
                "({r},{g},{b}): got {point:?}, expected ({x}, {y})"
            );
        }
    }

    #[test]
    fn test_legacy_mixed_colors() {
        let legacy = ColorConverter::new(GammaMode::Legacy);
        assert_close(legacy.xy_from_hex("#FF8000").unwrap(), 0.564595, 0.399251);
        assert_close(legacy.xy_from_rgb(&RgbColor::rgb(3, 1, 2)), 0.417845, 0.286772);
        assert_close(legacy.xy_from_hex("#3A7BD5").unwrap(), 0.180406, 0.203217);
    }

    #[test]
    fn test_primaries_and_white_are_distinct() {
        for mode in GammaMode::iter() {
            let points: Vec<_> = ["#FF0000", "#00FF00", "#0000FF", "#FFFFFF"]
                .iter()
                .map(|hex| xy_from_hex(hex, mode).unwrap())
                .collect();
            for (i, a) in points.iter().enumerate() {
                for b in &points[i + 1..] {
                    assert_ne!(a, b, "{mode}");
                }
            }
        }
    }

    #[test]
    fn test_reference_points() {
        let srgb = ColorConverter::new(GammaMode::Srgb);
        assert_close(srgb.xy_from_hex("#FF0000").unwrap(), 0.648427, 0.330856);
        assert_close(srgb.xy_from_hex("#00FF00").unwrap(), 0.321142, 0.597873);
        assert_close(srgb.xy_from_hex("#0000FF").unwrap(), 0.109781, 0.047905);
        assert_close(srgb.xy_from_hex("#FFFFFF").unwrap(), 0.336181, 0.360370);
        assert_close(srgb.xy_from_hex("#FF8000").unwrap(), 0.557472, 0.405062);

        let legacy = ColorConverter::new(GammaMode::Legacy);
        assert_close(legacy.xy_from_hex("#FF8000").unwrap(), 0.564595, 0.399251);
    }

    #[test]
    fn test_grays_agree_across_modes() {
        for level in [1, 64, 128, 200, 255] {
            let gray = RgbColor::rgb(level, level, level);
            let srgb = xy_from_rgb(&gray, GammaMode::Srgb);
            let legacy = xy_from_rgb(&gray, GammaMode::Legacy);
            assert!((srgb.x() - legacy.x()).abs() < 1e-12);
            assert!((srgb.y() - legacy.y()).abs() < 1e-12);
        }
    }
}
