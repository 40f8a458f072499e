// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status report parsing for the power strip.
//!
//! A status query asks the device for its model's property list and gets
//! back a positionally aligned sequence of raw values. This module pairs
//! the two into a sparse snapshot and exposes typed, unit-converted
//! accessors over it.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::types::PowerMode;

/// Status report from the power strip.
///
/// Built from the ordered property list of the queried model and the raw
/// values the transport returned for it. The snapshot is sparse: a
/// property the model does not support, or one the device reported as
/// null, reads as `None` from its accessor rather than failing.
///
/// Response of a Power Strip 2 (`zimi.powerstrip.v2`):
/// `{'power': 'on', 'temperature': 48.7, 'current': 0.05, 'mode': None,
/// 'power_consume_rate': 4.09, 'wifi_led': 'on', 'power_price': 49}`
///
/// # Examples
///
/// ```
/// use mistrip_lib::{Model, PowerStripStatus};
/// use serde_json::json;
///
/// let model = Model::V2;
/// let values = vec![
///     json!("on"),
///     json!(48.7),
///     json!(0.05),
///     json!(null),
///     json!(4.09),
///     json!("on"),
///     json!(49),
/// ];
/// let status = PowerStripStatus::new(model.properties(), values);
///
/// assert!(status.is_on());
/// assert_eq!(status.temperature(), Some(48.7));
/// assert_eq!(status.mode(), None);
/// assert_eq!(status.led(), Some(true));
/// // v2 has no voltage property
/// assert_eq!(status.voltage(), None);
/// ```
#[derive(Debug, Clone)]
pub struct PowerStripStatus {
    data: HashMap<&'static str, Value>,
}

impl PowerStripStatus {
    /// Builds a status snapshot by pairing property names with the raw
    /// values returned for them.
    ///
    /// The transport contract guarantees `values` is positionally
    /// aligned with `properties`; a shorter value sequence simply leaves
    /// the trailing properties absent.
    #[must_use]
    pub fn new(properties: &'static [&'static str], values: Vec<Value>) -> Self {
        let data = properties.iter().copied().zip(values).collect();
        Self { data }
    }

    /// Returns the raw value for a property, treating both a missing key
    /// and an explicit JSON null as absent.
    fn get(&self, property: &str) -> Option<&Value> {
        self.data.get(property).filter(|value| !value.is_null())
    }

    fn get_f64(&self, property: &str) -> Option<f64> {
        self.get(property).and_then(Value::as_f64)
    }

    fn get_str(&self, property: &str) -> Option<&str> {
        self.get(property).and_then(Value::as_str)
    }

    /// Raw power state string, `"on"` or `"off"`.
    #[must_use]
    pub fn power(&self) -> Option<&str> {
        self.get_str("power")
    }

    /// Returns `true` if the device is turned on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.power() == Some("on")
    }

    /// Current temperature in degrees Celsius.
    #[must_use]
    pub fn temperature(&self) -> Option<f64> {
        self.get_f64("temperature")
    }

    /// Current in amperes, if available.
    ///
    /// Meaning and voltage reference unknown.
    #[must_use]
    pub fn current(&self) -> Option<f64> {
        self.get_f64("current")
    }

    /// Current power load in watts, if available.
    #[must_use]
    pub fn load_power(&self) -> Option<f64> {
        self.get_f64("power_consume_rate")
    }

    /// Current operating mode, if reported.
    ///
    /// Unrecognized mode strings read as `None`, keeping the accessor
    /// total over whatever the device reports.
    #[must_use]
    pub fn mode(&self) -> Option<PowerMode> {
        self.get_str("mode").and_then(|s| s.parse().ok())
    }

    /// Returns `true` if the wifi LED is turned on, if available.
    #[must_use]
    pub fn led(&self) -> Option<bool> {
        self.get_str("wifi_led").map(|s| s == "on")
    }

    /// Returns `true` if the wifi LED is turned on, if available.
    #[deprecated(note = "use `led` instead of `wifi_led`")]
    #[must_use]
    pub fn wifi_led(&self) -> Option<bool> {
        self.led()
    }

    /// The stored power price, if available.
    #[must_use]
    pub fn power_price(&self) -> Option<i64> {
        self.get("power_price").and_then(Value::as_i64)
    }

    /// The leakage current in amperes, if available.
    #[must_use]
    pub fn leakage_current(&self) -> Option<f64> {
        self.get_f64("elec_leakage")
    }

    /// The voltage in volts, if available.
    ///
    /// The device reports voltage scaled by 100.
    #[must_use]
    pub fn voltage(&self) -> Option<f64> {
        self.get_f64("voltage").map(|raw| raw / 100.0)
    }

    /// The power factor as a percentage, if available.
    #[must_use]
    pub fn power_factor(&self) -> Option<f64> {
        self.get_f64("power_factor")
    }
}

impl fmt::Display for PowerStripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn opt<T: fmt::Display>(value: Option<T>) -> String {
            value.map_or_else(|| "unavailable".to_string(), |v| v.to_string())
        }

        writeln!(f, "Power: {}", opt(self.power()))?;
        writeln!(f, "Temperature: {} °C", opt(self.temperature()))?;
        writeln!(f, "Voltage: {} V", opt(self.voltage()))?;
        writeln!(f, "Current: {} A", opt(self.current()))?;
        writeln!(f, "Load power: {} W", opt(self.load_power()))?;
        writeln!(f, "Power factor: {} %", opt(self.power_factor()))?;
        writeln!(f, "Power price: {}", opt(self.power_price()))?;
        writeln!(f, "Leakage current: {} A", opt(self.leakage_current()))?;
        writeln!(f, "Mode: {}", opt(self.mode()))?;
        write!(f, "LED: {}", opt(self.led()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::Model;

    fn v2_status() -> PowerStripStatus {
        PowerStripStatus::new(
            Model::V2.properties(),
            vec![
                json!("on"),
                json!(48.7),
                json!(0.05),
                json!(null),
                json!(4.09),
                json!("on"),
                json!(49),
            ],
        )
    }

    #[test]
    fn v2_typical_response() {
        let status = v2_status();

        assert!(status.is_on());
        assert_eq!(status.power(), Some("on"));
        assert_eq!(status.temperature(), Some(48.7));
        assert_eq!(status.current(), Some(0.05));
        assert_eq!(status.mode(), None);
        assert_eq!(status.load_power(), Some(4.09));
        assert_eq!(status.led(), Some(true));
        assert_eq!(status.power_price(), Some(49));
    }

    #[test]
    fn v2_fields_outside_property_list_read_absent() {
        let status = v2_status();

        assert_eq!(status.voltage(), None);
        assert_eq!(status.power_factor(), None);
        assert_eq!(status.leakage_current(), None);
    }

    #[test]
    fn v1_typical_response() {
        let status = PowerStripStatus::new(
            Model::V1.properties(),
            vec![
                json!("on"),
                json!(32.5),
                json!(0.11),
                json!("green"),
                json!(12.5),
                json!(23081),
                json!(98.0),
                json!(0.0),
            ],
        );

        assert!(status.is_on());
        assert_eq!(status.mode(), Some(PowerMode::Eco));
        assert_eq!(status.voltage(), Some(230.81));
        assert_eq!(status.power_factor(), Some(98.0));
        assert_eq!(status.leakage_current(), Some(0.0));
        // v1 has no led or power price
        assert_eq!(status.led(), None);
        assert_eq!(status.power_price(), None);
    }

    #[test]
    fn power_off() {
        let status = PowerStripStatus::new(
            Model::V2.properties(),
            vec![
                json!("off"),
                json!(30.0),
                json!(null),
                json!("normal"),
                json!(null),
                json!("off"),
                json!(null),
            ],
        );

        assert!(!status.is_on());
        assert_eq!(status.mode(), Some(PowerMode::Normal));
        assert_eq!(status.led(), Some(false));
        assert_eq!(status.current(), None);
        assert_eq!(status.load_power(), None);
        assert_eq!(status.power_price(), None);
    }

    #[test]
    fn null_value_reads_absent_like_missing_key() {
        let status = PowerStripStatus::new(
            Model::V2.properties(),
            vec![
                json!(null),
                json!(null),
                json!(null),
                json!(null),
                json!(null),
                json!(null),
                json!(null),
            ],
        );

        assert!(!status.is_on());
        assert_eq!(status.power(), None);
        assert_eq!(status.temperature(), None);
        assert_eq!(status.mode(), None);
        assert_eq!(status.led(), None);
    }

    #[test]
    fn unrecognized_mode_reads_absent() {
        let status = PowerStripStatus::new(
            Model::V1.properties(),
            vec![
                json!("on"),
                json!(30.0),
                json!(0.1),
                json!("turbo"),
                json!(1.0),
                json!(null),
                json!(null),
                json!(null),
            ],
        );

        assert_eq!(status.mode(), None);
    }

    #[test]
    fn deprecated_wifi_led_alias_matches_led() {
        let status = v2_status();

        #[allow(deprecated)]
        let alias = status.wifi_led();
        assert_eq!(alias, status.led());
    }

    #[test]
    fn short_value_sequence_leaves_trailing_properties_absent() {
        let status = PowerStripStatus::new(Model::V2.properties(), vec![json!("on")]);

        assert!(status.is_on());
        assert_eq!(status.temperature(), None);
        assert_eq!(status.power_price(), None);
    }

    #[test]
    fn display_reports_all_fields() {
        let rendered = v2_status().to_string();

        assert!(rendered.contains("Power: on"));
        assert!(rendered.contains("Temperature: 48.7 °C"));
        assert!(rendered.contains("Voltage: unavailable V"));
        assert!(rendered.contains("Power price: 49"));
        assert!(rendered.contains("LED: true"));
    }
}
