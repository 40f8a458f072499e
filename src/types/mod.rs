// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for power strip control.
//!
//! This module provides type-safe representations of values used in
//! power strip commands. Each type ensures values are valid at
//! construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off power state
//! - [`PowerMode`] - Eco/Normal operating mode
//! - [`PowerPrice`] - Stored power price (0-999)

mod mode;
mod power;
mod price;

pub use mode::PowerMode;
pub use power::PowerState;
pub use price::PowerPrice;
