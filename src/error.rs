// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `MiStrip` library.
//!
//! This module provides the error hierarchy for handling failures across
//! the library: value validation and transport communication. Absent
//! status fields are not errors and surface as `None` from the
//! corresponding [`PowerStripStatus`](crate::PowerStripStatus) accessors.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when
/// interacting with a power strip.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during transport communication.
    #[error("transport error: {0}")]
    Transport(#[from] ProtocolError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur locally, before any transport call is made, when
/// attempting to create constrained types with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// An invalid power mode string was provided.
    #[error("invalid power mode: {0}")]
    InvalidPowerMode(String),
}

/// Errors reported by the transport collaborator.
///
/// The transport layer (miIO session handling, retries, timeouts) lives
/// outside this crate; these variants cover the failures an
/// implementation of [`Transport`](crate::Transport) may surface. They
/// are propagated unchanged to the caller.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Connection to the device failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The device reported a fault for the request.
    #[error("device fault {code}: {message}")]
    DeviceFault {
        /// Device-reported error code.
        code: i64,
        /// Device-reported error message.
        message: String,
    },

    /// The response could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
