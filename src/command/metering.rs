// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Metering commands: power price and realtime power measurement.

use serde_json::{Value, json};

use crate::command::Command;
use crate::types::PowerPrice;

/// Command to store the power price on the device.
///
/// The price is validated at [`PowerPrice`] construction, so a command
/// value always carries an in-range price.
///
/// # Examples
///
/// ```
/// use mistrip_lib::command::{Command, PowerPriceCommand};
/// use mistrip_lib::types::PowerPrice;
/// use serde_json::json;
///
/// let cmd = PowerPriceCommand::Set(PowerPrice::new(49).unwrap());
/// assert_eq!(cmd.name(), "set_power_price");
/// assert_eq!(cmd.args(), vec![json!(49)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerPriceCommand {
    /// Store the given price.
    Set(PowerPrice),
}

impl Command for PowerPriceCommand {
    fn name(&self) -> &'static str {
        "set_power_price"
    }

    fn args(&self) -> Vec<Value> {
        let Self::Set(price) = self;
        vec![json!(price.value())]
    }
}

/// Command to enable or disable realtime power measurement.
///
/// The device expects the numeric literals `1` and `0` here, unlike the
/// string states used by the other commands.
///
/// # Examples
///
/// ```
/// use mistrip_lib::command::{Command, RealtimePowerCommand};
/// use serde_json::json;
///
/// let cmd = RealtimePowerCommand::Enable;
/// assert_eq!(cmd.name(), "set_rt_power");
/// assert_eq!(cmd.args(), vec![json!(1)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RealtimePowerCommand {
    /// Enable realtime power measurement.
    Enable,
    /// Disable realtime power measurement.
    Disable,
}

impl From<bool> for RealtimePowerCommand {
    fn from(value: bool) -> Self {
        if value { Self::Enable } else { Self::Disable }
    }
}

impl Command for RealtimePowerCommand {
    fn name(&self) -> &'static str {
        "set_rt_power"
    }

    fn args(&self) -> Vec<Value> {
        match self {
            Self::Enable => vec![json!(1)],
            Self::Disable => vec![json!(0)],
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn price_command() {
        let cmd = PowerPriceCommand::Set(PowerPrice::new(999).unwrap());
        assert_eq!(cmd.name(), "set_power_price");
        assert_eq!(json!(cmd.args()), json!([999]));
    }

    #[test]
    fn realtime_power_enable() {
        let cmd = RealtimePowerCommand::Enable;
        assert_eq!(cmd.name(), "set_rt_power");
        assert_eq!(json!(cmd.args()), json!([1]));
    }

    #[test]
    fn realtime_power_disable() {
        let cmd = RealtimePowerCommand::Disable;
        assert_eq!(json!(cmd.args()), json!([0]));
    }

    #[test]
    fn realtime_power_from_bool() {
        assert_eq!(
            RealtimePowerCommand::from(true),
            RealtimePowerCommand::Enable
        );
        assert_eq!(
            RealtimePowerCommand::from(false),
            RealtimePowerCommand::Disable
        );
    }
}
