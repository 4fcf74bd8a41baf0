//! Bridge API version handling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// A bridge API version as reported in `/config` (`"apiversion": "1.16.0"`).
///
/// Versions order component-wise, so they can be compared against the
/// minimum a feature needs.
///
/// # Examples
///
/// ```
/// use hue_lights_rs::ApiVersion;
///
/// let v: ApiVersion = "1.16.0".parse().unwrap();
/// assert!(v >= ApiVersion::new(1, 4, 0));
/// assert!(v < "1.30".parse().unwrap());
/// assert_eq!(v.to_string(), "1.16.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApiVersion {
    major: u32,
    minor: u32,
    patch: u32,
}

impl ApiVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }
}

impl FromStr for ApiVersion {
    type Err = Error;

    /// Parses `major[.minor[.patch]]`; missing parts are zero.
    fn from_str(s: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidApiVersion(s.to_string());

        let parts = s
            .trim()
            .split('.')
            .map(|p| p.parse::<u32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match parts.as_slice() {
            [major] => Ok(Self::new(*major, 0, 0)),
            [major, minor] => Ok(Self::new(*major, *minor, 0)),
            [major, minor, patch] => Ok(Self::new(*major, *minor, *patch)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for ApiVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Error> {
        value.parse()
    }
}

impl From<ApiVersion> for String {
    fn from(version: ApiVersion) -> Self {
        version.to_string()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("1".parse::<ApiVersion>().unwrap(), ApiVersion::new(1, 0, 0));
        assert_eq!(
            " 1.2.3 ".parse::<ApiVersion>().unwrap(),
            ApiVersion::new(1, 2, 3)
        );
        assert!("".parse::<ApiVersion>().is_err());
        assert!("1.2.3.4".parse::<ApiVersion>().is_err());
        assert!("1.x".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_ordering() {
        let mut versions: Vec<ApiVersion> = ["1.10.0", "1.2.0", "1.9.1", "0.9"]
            .iter()
            .map(|v| v.parse().unwrap())
            .collect();
        versions.sort();
        let sorted: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
        assert_eq!(sorted, ["0.9.0", "1.2.0", "1.9.1", "1.10.0"]);
    }
}
