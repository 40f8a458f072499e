// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wifi LED control command.

use serde_json::{Value, json};

use crate::command::Command;
use crate::types::PowerState;

/// Command to turn the wifi LED on or off.
///
/// The wire method keeps the historical `set_wifi_led` name even though
/// the public API talks about the LED without the wifi prefix.
///
/// # Examples
///
/// ```
/// use mistrip_lib::command::{Command, LedCommand};
/// use mistrip_lib::types::PowerState;
/// use serde_json::json;
///
/// let cmd = LedCommand::Set(PowerState::On);
/// assert_eq!(cmd.name(), "set_wifi_led");
/// assert_eq!(cmd.args(), vec![json!("on")]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedCommand {
    /// Set the LED state.
    Set(PowerState),
}

impl Command for LedCommand {
    fn name(&self) -> &'static str {
        "set_wifi_led"
    }

    fn args(&self) -> Vec<Value> {
        let Self::Set(state) = self;
        vec![json!(state.as_str())]
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn led_command_on() {
        let cmd = LedCommand::Set(PowerState::On);
        assert_eq!(cmd.name(), "set_wifi_led");
        assert_eq!(json!(cmd.args()), json!(["on"]));
    }

    #[test]
    fn led_command_off() {
        let cmd = LedCommand::Set(PowerState::Off);
        assert_eq!(json!(cmd.args()), json!(["off"]));
    }
}
