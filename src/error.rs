// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `purei9_lib` library.
//!
//! Every public operation returns either a success value or one of three
//! failure kinds:
//!
//! - [`TransportError`]: a device or cloud call failed or timed out
//! - [`ValidationError`]: the caller's input is wrong; nothing was sent
//! - [`ExecutionError`]: input was valid but the device mutation failed
//!
//! Callers can use [`Error::is_retryable`] to decide whether trying again
//! without changing the input makes sense.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A device or cloud call failed while reading state.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A request was rejected before any device I/O took place.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A validated command failed on the device.
    #[error("execution error: {0}")]
    Execution(#[from] ExecutionError),
}

impl Error {
    /// Returns `true` if retrying the same request may succeed.
    ///
    /// Validation failures are never retryable until the input changes.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Validation(_))
    }

    /// Returns the validation error, if this is one.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Errors raised by the cloud transport.
///
/// This type is `Clone` so that the result of one shared refresh can be
/// handed to every caller waiting on it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The cloud or robot could not be reached.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The operation did not finish before its deadline.
    #[error("operation timed out after {0} ms")]
    Timeout(u64),

    /// The cloud rejected the credentials.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The cloud accepted the request but refused to carry it out.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The blocking worker running the call panicked or was cancelled.
    #[error("transport worker failed: {0}")]
    Worker(String),
}

/// Errors raised while validating a request against the cached state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required parameter is missing.
    #[error("missing parameter `{field}` (expected {expected})")]
    MissingField {
        /// Name of the missing parameter.
        field: &'static str,
        /// Human readable description of the expected type.
        expected: &'static str,
    },

    /// A parameter is present but malformed.
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidField {
        /// Name of the malformed parameter.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The referenced map is not in the robot's cached map catalog.
    #[error("map \"{map}\" not found")]
    MapNotFound {
        /// The requested map name.
        map: String,
    },

    /// None of the requested zones exist in the resolved map.
    #[error("no matching zones in map \"{map}\"")]
    NoMatchingZones {
        /// The map that was searched.
        map: String,
    },

    /// No robot with this id is managed.
    #[error("robot not found: {0}")]
    RobotNotFound(String),
}

impl ValidationError {
    /// Returns the name of the offending parameter, if the error concerns one.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field, .. } | Self::InvalidField { field, .. } => Some(field),
            Self::MapNotFound { .. } => Some("map"),
            Self::NoMatchingZones { .. } => Some("zones"),
            Self::RobotNotFound(_) => None,
        }
    }
}

/// A device mutation that failed after validation succeeded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("command `{command}` failed: {source}")]
pub struct ExecutionError {
    /// Host-facing name of the command that failed.
    pub command: &'static str,
    /// The underlying transport failure.
    #[source]
    pub source: TransportError,
}

impl ExecutionError {
    /// Creates an execution error for the given command.
    #[must_use]
    pub fn new(command: &'static str, source: TransportError) -> Self {
        Self { command, source }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
