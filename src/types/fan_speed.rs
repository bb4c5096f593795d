// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power mode and fan speed types.
//!
//! The robot only knows three raw [`PowerMode`]s. What the user sees is a
//! [`FanSpeed`] label whose meaning depends on the robot generation: older
//! robots expose two levels, newer ones three. The generation is captured by
//! [`FanSpeedVocabulary`] once, at discovery.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Raw suction power mode as reported by the cloud API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerMode {
    /// Lowest suction.
    Low,
    /// Medium suction.
    Medium,
    /// Highest suction.
    High,
    /// A code this library does not know.
    Unknown(u8),
}

impl PowerMode {
    /// Creates a power mode from its numeric cloud code.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Low,
            2 => Self::Medium,
            3 => Self::High,
            other => Self::Unknown(other),
        }
    }

    /// Returns the numeric cloud code.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Unknown(code) => *code,
        }
    }
}

impl fmt::Display for PowerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("LOW"),
            Self::Medium => f.write_str("MEDIUM"),
            Self::High => f.write_str("HIGH"),
            Self::Unknown(code) => write!(f, "UNKNOWN({code})"),
        }
    }
}

/// A user-facing fan speed label.
///
/// # Examples
///
/// ```
/// use purei9_lib::types::FanSpeed;
///
/// assert_eq!(FanSpeed::Smart.as_str(), "Smart");
/// assert_eq!("power".parse::<FanSpeed>().unwrap(), FanSpeed::Power);
/// assert!("Turbo".parse::<FanSpeed>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FanSpeed {
    /// Legacy medium level.
    Eco,
    /// Three-level low.
    Quiet,
    /// Three-level medium.
    Smart,
    /// Highest level in both vocabularies.
    Power,
}

impl FanSpeed {
    /// All labels across both vocabularies.
    pub const ALL: [Self; 4] = [Self::Eco, Self::Quiet, Self::Smart, Self::Power];

    /// Returns the label shown to users.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eco => "Eco",
            Self::Quiet => "Quiet",
            Self::Smart => "Smart",
            Self::Power => "Power",
        }
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FanSpeed {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|speed| speed.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::InvalidField {
                field: "fan_speed",
                reason: format!("unknown fan speed \"{s}\""),
            })
    }
}

/// The set of fan speed labels a robot generation understands.
///
/// Fixed once per robot at discovery and never changed afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FanSpeedVocabulary {
    /// Two levels: `Eco` and `Power`.
    #[default]
    Legacy,
    /// Three levels: `Quiet`, `Smart` and `Power`.
    V2,
}

impl FanSpeedVocabulary {
    /// Returns the labels of this vocabulary, lowest first.
    #[must_use]
    pub const fn labels(&self) -> &'static [FanSpeed] {
        match self {
            Self::Legacy => &[FanSpeed::Eco, FanSpeed::Power],
            Self::V2 => &[FanSpeed::Quiet, FanSpeed::Smart, FanSpeed::Power],
        }
    }

    /// Returns the label used when the robot reports a mode this vocabulary
    /// has no entry for.
    #[must_use]
    pub const fn fallback(&self) -> FanSpeed {
        match self {
            Self::Legacy => FanSpeed::Eco,
            Self::V2 => FanSpeed::Smart,
        }
    }

    /// Returns `true` if `speed` belongs to this vocabulary.
    #[must_use]
    pub fn contains(&self, speed: FanSpeed) -> bool {
        self.labels().contains(&speed)
    }
}
