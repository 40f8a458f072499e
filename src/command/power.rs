// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power and operating mode commands.

use serde_json::{Value, json};

use crate::command::Command;
use crate::types::{PowerMode, PowerState};

/// Command to control the strip's power state.
///
/// # Examples
///
/// ```
/// use mistrip_lib::command::{Command, PowerCommand};
/// use mistrip_lib::types::PowerState;
/// use serde_json::json;
///
/// let cmd = PowerCommand::on();
/// assert_eq!(cmd.name(), "set_power");
/// assert_eq!(cmd.args(), vec![json!("on")]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerCommand {
    /// Set the power state.
    Set(PowerState),
}

impl PowerCommand {
    /// Creates a command to turn the strip on.
    #[must_use]
    pub const fn on() -> Self {
        Self::Set(PowerState::On)
    }

    /// Creates a command to turn the strip off.
    #[must_use]
    pub const fn off() -> Self {
        Self::Set(PowerState::Off)
    }
}

impl Command for PowerCommand {
    fn name(&self) -> &'static str {
        "set_power"
    }

    fn args(&self) -> Vec<Value> {
        let Self::Set(state) = self;
        vec![json!(state.as_str())]
    }
}

/// Command to switch the strip's operating mode.
///
/// # Examples
///
/// ```
/// use mistrip_lib::command::{Command, PowerModeCommand};
/// use mistrip_lib::types::PowerMode;
/// use serde_json::json;
///
/// let cmd = PowerModeCommand::Set(PowerMode::Eco);
/// assert_eq!(cmd.name(), "set_power_mode");
/// assert_eq!(cmd.args(), vec![json!("green")]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerModeCommand {
    /// Set the operating mode.
    Set(PowerMode),
}

impl Command for PowerModeCommand {
    fn name(&self) -> &'static str {
        "set_power_mode"
    }

    fn args(&self) -> Vec<Value> {
        let Self::Set(mode) = self;
        vec![json!(mode.as_str())]
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn power_command_on() {
        let cmd = PowerCommand::on();
        assert_eq!(cmd.name(), "set_power");
        assert_eq!(json!(cmd.args()), json!(["on"]));
    }

    #[test]
    fn power_command_off() {
        let cmd = PowerCommand::off();
        assert_eq!(cmd.name(), "set_power");
        assert_eq!(json!(cmd.args()), json!(["off"]));
    }

    #[test]
    fn power_command_from_state() {
        let cmd = PowerCommand::Set(PowerState::from(true));
        assert_eq!(cmd, PowerCommand::on());
    }

    #[test]
    fn mode_command_eco() {
        let cmd = PowerModeCommand::Set(PowerMode::Eco);
        assert_eq!(cmd.name(), "set_power_mode");
        assert_eq!(json!(cmd.args()), json!(["green"]));
    }

    #[test]
    fn mode_command_normal() {
        let cmd = PowerModeCommand::Set(PowerMode::Normal);
        assert_eq!(json!(cmd.args()), json!(["normal"]));
    }
}
