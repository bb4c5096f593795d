// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Robot status types.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Raw robot state code as reported by the cloud API.
///
/// # Examples
///
/// ```
/// use purei9_lib::types::RobotState;
///
/// assert_eq!(RobotState::from_code(10), RobotState::Sleeping);
/// assert_eq!(RobotState::from_code(42), RobotState::Unknown(42));
/// assert_eq!(RobotState::Charging.code(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RobotState {
    /// Cleaning.
    Cleaning,
    /// Cleaning, paused.
    PausedCleaning,
    /// Spot cleaning.
    SpotCleaning,
    /// Spot cleaning, paused.
    PausedSpotCleaning,
    /// Returning to the dock.
    Return,
    /// Returning to the dock, paused.
    PausedReturn,
    /// Returning to the dock to recharge mid-clean.
    ReturnForPitstop,
    /// Returning to the dock to recharge mid-clean, paused.
    PausedReturnForPitstop,
    /// Charging on the dock.
    Charging,
    /// Sleeping. Reported both when stopped mid-room and when docked and full.
    Sleeping,
    /// The robot reports an error.
    Error,
    /// Recharging on the dock mid-clean.
    Pitstop,
    /// Manual steering from the app.
    ManualSteering,
    /// Installing a firmware upgrade.
    FirmwareUpgrade,
    /// A code this library does not know.
    Unknown(u8),
}

impl RobotState {
    /// Creates a state from its numeric cloud code.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Cleaning,
            2 => Self::PausedCleaning,
            3 => Self::SpotCleaning,
            4 => Self::PausedSpotCleaning,
            5 => Self::Return,
            6 => Self::PausedReturn,
            7 => Self::ReturnForPitstop,
            8 => Self::PausedReturnForPitstop,
            9 => Self::Charging,
            10 => Self::Sleeping,
            11 => Self::Error,
            12 => Self::Pitstop,
            13 => Self::ManualSteering,
            14 => Self::FirmwareUpgrade,
            other => Self::Unknown(other),
        }
    }

    /// Returns the numeric cloud code.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Cleaning => 1,
            Self::PausedCleaning => 2,
            Self::SpotCleaning => 3,
            Self::PausedSpotCleaning => 4,
            Self::Return => 5,
            Self::PausedReturn => 6,
            Self::ReturnForPitstop => 7,
            Self::PausedReturnForPitstop => 8,
            Self::Charging => 9,
            Self::Sleeping => 10,
            Self::Error => 11,
            Self::Pitstop => 12,
            Self::ManualSteering => 13,
            Self::FirmwareUpgrade => 14,
            Self::Unknown(code) => *code,
        }
    }
}

/// Canonical robot status, independent of device generation.
///
/// # Examples
///
/// ```
/// use purei9_lib::types::CanonicalStatus;
///
/// assert_eq!(CanonicalStatus::Docked.as_str(), "docked");
/// assert_eq!("paused".parse::<CanonicalStatus>().unwrap(), CanonicalStatus::Paused);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalStatus {
    /// The robot is cleaning.
    Cleaning,
    /// A clean or return is paused.
    Paused,
    /// The robot is heading back to its dock.
    Returning,
    /// The robot sits on its dock.
    Docked,
    /// The robot needs attention.
    Error,
    /// The robot is stopped away from its dock.
    #[default]
    Idle,
}

impl CanonicalStatus {
    /// All statuses, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Cleaning,
        Self::Paused,
        Self::Returning,
        Self::Docked,
        Self::Error,
        Self::Idle,
    ];

    /// Returns the host-facing state string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cleaning => "cleaning",
            Self::Paused => "paused",
            Self::Returning => "returning",
            Self::Docked => "docked",
            Self::Error => "error",
            Self::Idle => "idle",
        }
    }

    /// Returns `true` if the robot is doing something the user started.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Cleaning | Self::Returning)
    }
}

impl fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::InvalidField {
                field: "status",
                reason: format!("unknown status \"{s}\""),
            })
    }
}
