// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level driver for the smart power strip.
//!
//! [`PowerStrip`] wraps a connected [`Transport`] and exposes the
//! device's operations as typed methods: a status query plus a handful
//! of imperative commands. The driver holds no cross-call state beyond
//! the model resolved at construction; device-side effects are not
//! tracked locally and must be re-queried via [`PowerStrip::status`].

use serde_json::Value;

use crate::command::{
    Command, LedCommand, PowerCommand, PowerModeCommand, PowerPriceCommand, RealtimePowerCommand,
};
use crate::error::Result;
use crate::model::Model;
use crate::status::PowerStripStatus;
use crate::transport::Transport;
use crate::types::{PowerMode, PowerPrice, PowerState};

/// A smart power strip driven over a connected transport.
///
/// Every method issues at most one blocking transport call and returns;
/// there is no batching and no retrying here. Concurrent invocation
/// safety is delegated to the transport collaborator.
///
/// # Examples
///
/// ```no_run
/// use mistrip_lib::{PowerStrip, Transport};
/// # async fn example<T: Transport>(transport: T) -> mistrip_lib::Result<()> {
/// let strip = PowerStrip::new(transport);
///
/// let status = strip.status().await?;
/// if !status.is_on() {
///     strip.on().await?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PowerStrip<T: Transport> {
    transport: T,
    model: Model,
}

impl<T: Transport> PowerStrip<T> {
    /// Creates a driver over a connected transport.
    ///
    /// The model variant is resolved once from the transport's reported
    /// identifier; unrecognized identifiers fall back to [`Model::V1`].
    pub fn new(transport: T) -> Self {
        let model = Model::detect(transport.model());
        Self { transport, model }
    }

    /// Returns the resolved model variant.
    #[must_use]
    pub const fn model(&self) -> Model {
        self.model
    }

    /// Returns a reference to the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Retrieves the current device status.
    ///
    /// Fetches the raw values of the model's property list and wraps
    /// them into a typed snapshot. Properties the device reports as
    /// null read as absent from the snapshot's accessors.
    ///
    /// # Errors
    ///
    /// Returns error if the transport request fails.
    pub async fn status(&self) -> Result<PowerStripStatus> {
        let properties = self.model.properties();
        tracing::debug!(model = %self.model, count = properties.len(), "querying status");
        let values = self.transport.get_properties(properties).await?;
        Ok(PowerStripStatus::new(properties, values))
    }

    async fn dispatch<C: Command>(&self, command: &C) -> Result<Value> {
        tracing::debug!(method = command.name(), "sending command");
        let response = self.transport.send(command.name(), &command.args()).await?;
        Ok(response)
    }

    /// Sets the power on or off.
    ///
    /// # Errors
    ///
    /// Returns error if the transport request fails.
    pub async fn set_power(&self, power: bool) -> Result<Value> {
        if power { self.on().await } else { self.off().await }
    }

    /// Powers the strip on.
    ///
    /// # Errors
    ///
    /// Returns error if the transport request fails.
    pub async fn on(&self) -> Result<Value> {
        self.dispatch(&PowerCommand::on()).await
    }

    /// Powers the strip off.
    ///
    /// # Errors
    ///
    /// Returns error if the transport request fails.
    pub async fn off(&self) -> Result<Value> {
        self.dispatch(&PowerCommand::off()).await
    }

    /// Sets the operating mode.
    ///
    /// # Errors
    ///
    /// Returns error if the transport request fails.
    pub async fn set_power_mode(&self, mode: PowerMode) -> Result<Value> {
        self.dispatch(&PowerModeCommand::Set(mode)).await
    }

    /// Turns the wifi LED on or off.
    ///
    /// # Errors
    ///
    /// Returns error if the transport request fails.
    pub async fn set_led(&self, led: bool) -> Result<Value> {
        self.dispatch(&LedCommand::Set(PowerState::from(led))).await
    }

    /// Turns the wifi LED on or off.
    ///
    /// # Errors
    ///
    /// Returns error if the transport request fails.
    #[deprecated(note = "use `set_led` instead of `set_wifi_led`")]
    pub async fn set_wifi_led(&self, led: bool) -> Result<Value> {
        self.set_led(led).await
    }

    /// Stores the power price on the device.
    ///
    /// The price is validated at [`PowerPrice`] construction, so no
    /// out-of-range value ever reaches the transport.
    ///
    /// # Errors
    ///
    /// Returns error if the transport request fails.
    pub async fn set_power_price(&self, price: PowerPrice) -> Result<Value> {
        self.dispatch(&PowerPriceCommand::Set(price)).await
    }

    /// Enables or disables realtime power measurement.
    ///
    /// # Errors
    ///
    /// Returns error if the transport request fails.
    pub async fn set_realtime_power(&self, enabled: bool) -> Result<Value> {
        self.dispatch(&RealtimePowerCommand::from(enabled)).await
    }
}
