// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Predicted state changes.
//!
//! The robot's own status reporting lags behind commands, so after a
//! successful mutation the coordinator applies the expected outcome to its
//! cached snapshot straight away. The prediction stays until the next
//! completed refresh, which always replaces it with polled truth.

use std::fmt;

use crate::types::{CanonicalStatus, FanSpeed};

/// The expected outcome of a command, applied before the next poll confirms it.
///
/// # Examples
///
/// ```
/// use purei9_lib::state::StateChange;
/// use purei9_lib::types::{CanonicalStatus, FanSpeed};
///
/// let paused = StateChange::status(CanonicalStatus::Paused);
/// assert_eq!(paused.to_string(), "status=paused");
///
/// let quiet = StateChange::fan_speed(FanSpeed::Quiet);
/// assert_eq!(quiet.to_string(), "fan_speed=Quiet");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StateChange {
    /// The robot is expected to report this status.
    Status(CanonicalStatus),
    /// The robot is expected to report this fan speed.
    FanSpeed(FanSpeed),
}

impl StateChange {
    /// Creates a status prediction.
    #[must_use]
    pub const fn status(status: CanonicalStatus) -> Self {
        Self::Status(status)
    }

    /// Creates a fan speed prediction.
    #[must_use]
    pub const fn fan_speed(speed: FanSpeed) -> Self {
        Self::FanSpeed(speed)
    }
}

impl fmt::Display for StateChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(status) => write!(f, "status={status}"),
            Self::FanSpeed(speed) => write!(f, "fan_speed={speed}"),
        }
    }
}
