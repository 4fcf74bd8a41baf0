//! Hexadecimal `#RRGGBB` color strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

const CHANNELS: [&str; 3] = ["red", "green", "blue"];

/// A color written as six hexadecimal digits, with or without a leading `#`.
///
/// Parsing is strict: after an optional `#` exactly six ASCII hex digits must
/// follow. The color always displays in the canonical `#RRGGBB` form.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use hue_lights_rs::HexColor;
///
/// let orange = HexColor::from_str("#ff8000").unwrap();
/// assert_eq!((orange.red(), orange.green(), orange.blue()), (255, 128, 0));
/// assert_eq!(orange.to_string(), "#FF8000");
///
/// assert_eq!(HexColor::from_str("FF8000").unwrap(), orange);
/// assert!(HexColor::from_str("#FF80").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub(crate) red: u8,
    pub(crate) green: u8,
    pub(crate) blue: u8,
}

impl HexColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let len = digits.chars().count();
        if len != 6 {
            return Err(Error::invalid_color(
                input,
                format!("expected 6 hex digits, found {len} characters"),
            ));
        }

        // Length is 6 chars; a multi-byte char would push the byte length past 6.
        if digits.len() != 6 {
            return Err(Error::invalid_color(input, "contains non-ASCII characters"));
        }

        let mut values = [0u8; 3];
        for (i, name) in CHANNELS.iter().enumerate() {
            let pair = &digits[i * 2..i * 2 + 2];
            // from_str_radix tolerates a leading '+', so check the digits first.
            if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(Error::invalid_color(
                    input,
                    format!("{name} channel {pair:?} is not hexadecimal"),
                ));
            }
            values[i] = u8::from_str_radix(pair, 16).map_err(|e| {
                Error::invalid_color(input, format!("{name} channel {pair:?}: {e}"))
            })?;
        }

        let [red, green, blue] = values;
        Ok(Self { red, green, blue })
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(input: &str) -> String {
        match HexColor::from_str(input) {
            Err(Error::InvalidColorFormat { reason, .. }) => reason,
            other => panic!("expected InvalidColorFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_length() {
        assert!(reason("12").contains("found 2"));
        assert!(reason("#1234567").contains("found 7"));
        assert!(reason("").contains("found 0"));
        assert!(reason("#").contains("found 0"));
    }

    #[test]
    fn test_names_offending_channel() {
        assert!(reason("GGGGGG").starts_with("red channel"));
        assert!(reason("00GG00").starts_with("green channel"));
        assert!(reason("#0000zz").starts_with("blue channel"));
    }

    #[test]
    fn test_rejects_sign_and_whitespace() {
        assert!(HexColor::from_str("+F0000").is_err());
        assert!(HexColor::from_str(" F0000").is_err());
        assert!(HexColor::from_str("##FF0000").is_err());
    }

    #[test]
    fn test_rejects_multibyte() {
        assert!(HexColor::from_str("ééé").is_err());
        assert!(HexColor::from_str("FFFFFé").is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let hex: HexColor = serde_json::from_str("\"#00ff7f\"").unwrap();
        assert_eq!(hex, HexColor::new(0, 255, 127));
        assert_eq!(serde_json::to_string(&hex).unwrap(), "\"#00FF7F\"");
        assert!(serde_json::from_str::<HexColor>("\"#00ff7\"").is_err());
    }
}
