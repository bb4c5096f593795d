// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw battery level codes.

/// Battery level as a six-step code reported by the cloud API.
///
/// The robot never reports a percentage, only one of these steps.
///
/// # Examples
///
/// ```
/// use purei9_lib::types::BatteryStatus;
///
/// assert_eq!(BatteryStatus::from_code(6), BatteryStatus::High);
/// assert!(BatteryStatus::High.is_full());
/// assert!(!BatteryStatus::Normal.is_full());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BatteryStatus {
    /// Empty.
    Dead,
    /// Nearly empty.
    CriticalLow,
    /// Low.
    Low,
    /// About half.
    Medium,
    /// Mostly charged.
    Normal,
    /// Fully charged.
    High,
    /// A code this library does not know.
    Unknown(u8),
}

impl BatteryStatus {
    /// Creates a battery status from its numeric cloud code.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Dead,
            2 => Self::CriticalLow,
            3 => Self::Low,
            4 => Self::Medium,
            5 => Self::Normal,
            6 => Self::High,
            other => Self::Unknown(other),
        }
    }

    /// Returns the numeric cloud code.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Dead => 1,
            Self::CriticalLow => 2,
            Self::Low => 3,
            Self::Medium => 4,
            Self::Normal => 5,
            Self::High => 6,
            Self::Unknown(code) => *code,
        }
    }

    /// Returns `true` for the maximum battery code.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        matches!(self, Self::High)
    }
}
