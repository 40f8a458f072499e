// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `MiStrip` Lib - A Rust driver for Xiaomi Mi smart power strips.
//!
//! This library translates the raw miIO property values reported by the
//! power strip family (`qmi.powerstrip.v1`, `zimi.powerstrip.v2`) into a
//! typed status snapshot and exposes the device's commands as validated
//! methods. The miIO session itself (encryption, discovery, retries,
//! timeouts) is owned by the caller and plugged in through the
//! [`Transport`] trait.
//!
//! # Supported Features
//!
//! - **Power control**: Turn the strip on/off
//! - **Operating mode**: Eco (`green`) or normal mode
//! - **Status queries**: Temperature, current, load power, voltage,
//!   power factor, leakage current, keyed by model variant
//! - **Metering**: Stored power price, realtime power measurement
//! - **LED control**: Wifi LED on/off
//!
//! # Quick Start
//!
//! ```no_run
//! use mistrip_lib::{PowerMode, PowerStrip, Transport};
//! use mistrip_lib::error::ProtocolError;
//! use serde_json::Value;
//!
//! // The session layer is supplied by the caller.
//! struct MiioSession;
//!
//! impl Transport for MiioSession {
//!     fn model(&self) -> &str {
//!         "zimi.powerstrip.v2"
//!     }
//!
//!     async fn get_properties(&self, properties: &[&str]) -> Result<Vec<Value>, ProtocolError> {
//!         unimplemented!("issue a get_prop request over the session")
//!     }
//!
//!     async fn send(&self, method: &str, args: &[Value]) -> Result<Value, ProtocolError> {
//!         unimplemented!("issue a method call over the session")
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> mistrip_lib::Result<()> {
//! let strip = PowerStrip::new(MiioSession);
//!
//! let status = strip.status().await?;
//! println!("{status}");
//!
//! if !status.is_on() {
//!     strip.on().await?;
//! }
//! strip.set_power_mode(PowerMode::Eco).await?;
//! # Ok(())
//! # }
//! ```

pub mod command;
mod device;
pub mod error;
mod model;
mod status;
mod transport;
pub mod types;

pub use command::{
    Command, LedCommand, PowerCommand, PowerModeCommand, PowerPriceCommand, RealtimePowerCommand,
};
pub use device::PowerStrip;
pub use error::{Error, ProtocolError, Result, ValueError};
pub use model::{MODEL_POWER_STRIP_V1, MODEL_POWER_STRIP_V2, Model};
pub use status::PowerStripStatus;
pub use transport::Transport;
pub use types::{PowerMode, PowerPrice, PowerState};
