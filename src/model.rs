// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power strip model variants and their property catalogs.
//!
//! Each hardware variant supports a fixed, ordered list of miIO
//! properties. The list determines both what is requested from the
//! device and how the positional response is keyed when building a
//! [`PowerStripStatus`](crate::PowerStripStatus).

use std::fmt;

/// Model identifier of the first-generation strip.
pub const MODEL_POWER_STRIP_V1: &str = "qmi.powerstrip.v1";

/// Model identifier of the second-generation strip.
pub const MODEL_POWER_STRIP_V2: &str = "zimi.powerstrip.v2";

const PROPERTIES_V1: &[&str] = &[
    "power",
    "temperature",
    "current",
    "mode",
    "power_consume_rate",
    "voltage",
    "power_factor",
    "elec_leakage",
];

const PROPERTIES_V2: &[&str] = &[
    "power",
    "temperature",
    "current",
    "mode",
    "power_consume_rate",
    "wifi_led",
    "power_price",
];

/// Hardware variant of the power strip.
///
/// The variant is reported by the transport at connection time and
/// determines which properties a status query requests.
///
/// # Examples
///
/// ```
/// use mistrip_lib::Model;
///
/// let model = Model::detect("zimi.powerstrip.v2");
/// assert_eq!(model, Model::V2);
/// assert!(model.properties().contains(&"wifi_led"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    /// First generation, `qmi.powerstrip.v1`.
    V1,
    /// Second generation, `zimi.powerstrip.v2`.
    V2,
}

impl Model {
    /// Parses a model identifier string into a known variant.
    ///
    /// Returns `None` for identifiers outside the supported family.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            MODEL_POWER_STRIP_V1 => Some(Self::V1),
            MODEL_POWER_STRIP_V2 => Some(Self::V2),
            _ => None,
        }
    }

    /// Resolves a model identifier string, falling back to [`Model::V1`]
    /// for unrecognized identifiers.
    ///
    /// The fallback mirrors the device family's reference behavior:
    /// an unknown identifier is treated as a first-generation strip
    /// rather than an error.
    #[must_use]
    pub fn detect(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            tracing::debug!(model = %id, "unknown model, falling back to v1 property list");
            Self::V1
        })
    }

    /// Returns the model identifier string.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::V1 => MODEL_POWER_STRIP_V1,
            Self::V2 => MODEL_POWER_STRIP_V2,
        }
    }

    /// Returns the ordered list of miIO properties this variant supports.
    #[must_use]
    pub const fn properties(&self) -> &'static [&'static str] {
        match self {
            Self::V1 => PROPERTIES_V1,
            Self::V2 => PROPERTIES_V2,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
