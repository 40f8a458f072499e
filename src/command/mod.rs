// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power strip command definitions.
//!
//! This module provides typed representations of the miIO commands the
//! power strip accepts. Each command serializes to a method name and a
//! JSON argument list, the pair the transport forwards to the device.
//!
//! # Available Commands
//!
//! | Command Type | Method | Example args |
//! |-------------|--------|--------------|
//! | [`PowerCommand`] | `set_power` | `["on"]` |
//! | [`PowerModeCommand`] | `set_power_mode` | `["green"]` |
//! | [`LedCommand`] | `set_wifi_led` | `["off"]` |
//! | [`PowerPriceCommand`] | `set_power_price` | `[49]` |
//! | [`RealtimePowerCommand`] | `set_rt_power` | `[1]` |
//!
//! # Examples
//!
//! ```
//! use mistrip_lib::command::{Command, PowerCommand};
//! use mistrip_lib::types::PowerState;
//! use serde_json::json;
//!
//! let cmd = PowerCommand::Set(PowerState::On);
//! assert_eq!(cmd.name(), "set_power");
//! assert_eq!(cmd.args(), vec![json!("on")]);
//! ```

mod led;
mod metering;
mod power;

pub use led::LedCommand;
pub use metering::{PowerPriceCommand, RealtimePowerCommand};
pub use power::{PowerCommand, PowerModeCommand};

use serde_json::Value;

/// A command that can be sent to the power strip.
///
/// Commands are serialized to the miIO method-plus-arguments format for
/// transmission by the transport collaborator.
pub trait Command {
    /// Returns the miIO method name, e.g. `"set_power"`.
    fn name(&self) -> &'static str;

    /// Returns the JSON argument list sent with the method.
    fn args(&self) -> Vec<Value>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::PowerState;

    #[test]
    fn command_serializes_to_method_and_args() {
        let cmd = LedCommand::Set(PowerState::Off);
        assert_eq!(cmd.name(), "set_wifi_led");
        assert_eq!(json!(cmd.args()), json!(["off"]));
    }
}
