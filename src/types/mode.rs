// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode type for the power strip.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Operating mode of the power strip.
///
/// The device reports and accepts the wire strings `"green"` (eco mode)
/// and `"normal"`. This is a closed enumeration: any other literal is
/// rejected during parsing.
///
/// # Examples
///
/// ```
/// use mistrip_lib::types::PowerMode;
///
/// assert_eq!(PowerMode::Eco.as_str(), "green");
/// assert_eq!(PowerMode::Normal.as_str(), "normal");
/// assert_eq!("green".parse::<PowerMode>().unwrap(), PowerMode::Eco);
/// assert!("turbo".parse::<PowerMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerMode {
    /// Power-saving mode, wire value `"green"`.
    #[serde(rename = "green")]
    Eco,
    /// Normal operation, wire value `"normal"`.
    #[serde(rename = "normal")]
    Normal,
}

impl PowerMode {
    /// Returns the miIO wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eco => "green",
            Self::Normal => "normal",
        }
    }
}

impl fmt::Display for PowerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PowerMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(Self::Eco),
            "normal" => Ok(Self::Normal),
            _ => Err(ValueError::InvalidPowerMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_wire_strings() {
        assert_eq!(PowerMode::Eco.as_str(), "green");
        assert_eq!(PowerMode::Normal.as_str(), "normal");
    }

    #[test]
    fn mode_from_str() {
        assert_eq!("green".parse::<PowerMode>().unwrap(), PowerMode::Eco);
        assert_eq!("normal".parse::<PowerMode>().unwrap(), PowerMode::Normal);
    }

    #[test]
    fn mode_from_str_invalid() {
        let result = "eco".parse::<PowerMode>();
        assert!(matches!(
            result.unwrap_err(),
            ValueError::InvalidPowerMode(_)
        ));
    }

    #[test]
    fn mode_serializes_to_wire_string() {
        assert_eq!(serde_json::to_value(PowerMode::Eco).unwrap(), "green");
        assert_eq!(serde_json::to_value(PowerMode::Normal).unwrap(), "normal");
    }

    #[test]
    fn mode_display() {
        assert_eq!(PowerMode::Eco.to_string(), "green");
    }
}
