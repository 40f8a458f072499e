// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport seam to the miIO session layer.
//!
//! The request/response session with the device (encryption, token
//! handling, retries, timeouts) is owned by an external collaborator.
//! This module defines the trait that collaborator implements so the
//! [`PowerStrip`](crate::PowerStrip) driver can run over it.

use serde_json::Value;

use crate::error::ProtocolError;

/// A connected miIO session the driver issues requests over.
///
/// Implementations own all wire-level concerns: encoding, retries,
/// timeouts and cancellation. The driver issues at most one call per
/// public operation and propagates failures unchanged.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Returns the model identifier of the connected device.
    ///
    /// Set once per connection, e.g. `"zimi.powerstrip.v2"`.
    fn model(&self) -> &str;

    /// Fetches the raw values of the given properties.
    ///
    /// The returned values are positionally aligned with `properties`;
    /// a property the device cannot report must be returned as JSON
    /// null rather than omitted.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the response
    /// cannot be decoded.
    async fn get_properties(&self, properties: &[&str]) -> Result<Vec<Value>, ProtocolError>;

    /// Sends a method call with the given arguments to the device.
    ///
    /// The response shape is opaque to the driver.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the device
    /// reports a fault.
    async fn send(&self, method: &str, args: &[Value]) -> Result<Value, ProtocolError>;
}
