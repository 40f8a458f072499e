// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power price type for energy cost tracking.
//!
//! This module provides a type-safe representation of the stored power
//! price, ensuring values are always within the range the device accepts.

use std::fmt;

use serde::Serialize;

use crate::error::ValueError;

/// The power price stored on the device (0-999).
///
/// The device rejects prices outside this range, so the constructor
/// enforces it before any transport call is made.
///
/// # Examples
///
/// ```
/// use mistrip_lib::types::PowerPrice;
///
/// let price = PowerPrice::new(49).unwrap();
/// assert_eq!(price.value(), 49);
///
/// // Boundary values are accepted
/// assert!(PowerPrice::new(0).is_ok());
/// assert!(PowerPrice::new(999).is_ok());
///
/// // Out-of-range values return error
/// assert!(PowerPrice::new(-1).is_err());
/// assert!(PowerPrice::new(1000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PowerPrice(u16);

impl PowerPrice {
    /// Minimum accepted price.
    pub const MIN: Self = Self(0);

    /// Maximum accepted price.
    pub const MAX: Self = Self(999);

    /// Creates a new power price.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is outside [0, 999].
    pub fn new(value: i64) -> Result<Self, ValueError> {
        match u16::try_from(value) {
            Ok(price) if price <= 999 => Ok(Self(price)),
            _ => Err(ValueError::OutOfRange {
                min: 0,
                max: 999,
                actual: value,
            }),
        }
    }

    /// Returns the price value.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for PowerPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_valid_range() {
        assert_eq!(PowerPrice::new(0).unwrap().value(), 0);
        assert_eq!(PowerPrice::new(49).unwrap().value(), 49);
        assert_eq!(PowerPrice::new(999).unwrap().value(), 999);
    }

    #[test]
    fn price_below_range() {
        let result = PowerPrice::new(-1);
        assert_eq!(
            result.unwrap_err(),
            ValueError::OutOfRange {
                min: 0,
                max: 999,
                actual: -1,
            }
        );
    }

    #[test]
    fn price_above_range() {
        let result = PowerPrice::new(1000);
        assert_eq!(
            result.unwrap_err(),
            ValueError::OutOfRange {
                min: 0,
                max: 999,
                actual: 1000,
            }
        );
    }

    #[test]
    fn price_serializes_as_number() {
        let price = PowerPrice::new(49).unwrap();
        assert_eq!(serde_json::to_value(price).unwrap(), 49);
    }

    #[test]
    fn price_constants() {
        assert_eq!(PowerPrice::MIN.value(), 0);
        assert_eq!(PowerPrice::MAX.value(), 999);
    }
}
