// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw-to-canonical translation tables.
//!
//! Every function here is pure and total: any raw input, including codes
//! this library does not know, yields a canonical value.

use crate::types::{
    BatteryStatus, CanonicalStatus, DustbinCondition, DustbinStatus, FanSpeed,
    FanSpeedVocabulary, PowerMode, RobotState,
};

/// Translates a raw robot reading to a [`CanonicalStatus`].
///
/// Rules apply in order:
///
/// 1. A missing or full dustbin is always [`CanonicalStatus::Error`].
/// 2. `Sleeping` is [`CanonicalStatus::Docked`] when the battery is full,
///    otherwise [`CanonicalStatus::Idle`]. The robot reports `Sleeping` both
///    on the dock and when stopped mid-room; a full battery is the only hint.
/// 3. A fixed table for the remaining known states.
/// 4. Everything else is [`CanonicalStatus::Idle`].
///
/// # Examples
///
/// ```
/// use purei9_lib::telemetry::translation::status_to_canonical;
/// use purei9_lib::types::{BatteryStatus, CanonicalStatus, DustbinStatus, RobotState};
///
/// let status = status_to_canonical(
///     RobotState::Sleeping,
///     BatteryStatus::High,
///     DustbinStatus::Connected,
/// );
/// assert_eq!(status, CanonicalStatus::Docked);
///
/// let status = status_to_canonical(
///     RobotState::Cleaning,
///     BatteryStatus::High,
///     DustbinStatus::Full,
/// );
/// assert_eq!(status, CanonicalStatus::Error);
/// ```
#[must_use]
pub fn status_to_canonical(
    status: RobotState,
    battery: BatteryStatus,
    dustbin: DustbinStatus,
) -> CanonicalStatus {
    if dustbin_to_canonical(dustbin).is_error() {
        return CanonicalStatus::Error;
    }

    match status {
        RobotState::Sleeping if battery.is_full() => CanonicalStatus::Docked,
        RobotState::Cleaning | RobotState::SpotCleaning => CanonicalStatus::Cleaning,
        RobotState::PausedCleaning
        | RobotState::PausedSpotCleaning
        | RobotState::PausedReturn
        | RobotState::PausedReturnForPitstop => CanonicalStatus::Paused,
        RobotState::Return | RobotState::ReturnForPitstop => CanonicalStatus::Returning,
        RobotState::Charging | RobotState::Pitstop | RobotState::FirmwareUpgrade => {
            CanonicalStatus::Docked
        }
        RobotState::Error => CanonicalStatus::Error,
        RobotState::Sleeping | RobotState::ManualSteering | RobotState::Unknown(_) => {
            CanonicalStatus::Idle
        }
    }
}

/// Translates a raw battery step to a percentage.
///
/// Known steps map to `0, 20, 40, 60, 80, 100`; unknown codes map to `0`.
#[must_use]
pub const fn battery_to_percent(battery: BatteryStatus) -> u8 {
    match battery {
        BatteryStatus::Dead | BatteryStatus::Unknown(_) => 0,
        BatteryStatus::CriticalLow => 20,
        BatteryStatus::Low => 40,
        BatteryStatus::Medium => 60,
        BatteryStatus::Normal => 80,
        BatteryStatus::High => 100,
    }
}

/// Translates a raw dustbin code to a [`DustbinCondition`].
#[must_use]
pub const fn dustbin_to_canonical(dustbin: DustbinStatus) -> DustbinCondition {
    match dustbin {
        DustbinStatus::Connected => DustbinCondition::Connected,
        DustbinStatus::Empty => DustbinCondition::Disconnected,
        DustbinStatus::Full => DustbinCondition::Full,
        DustbinStatus::Unset | DustbinStatus::Unknown(_) => DustbinCondition::Unknown,
    }
}

/// Chooses the fan speed vocabulary from the number of supported power modes.
///
/// Exactly three modes means the three-level vocabulary; any other count
/// falls back to the legacy two-level one.
#[must_use]
pub const fn fan_speed_vocabulary_for(supported_modes: usize) -> FanSpeedVocabulary {
    if supported_modes == 3 {
        FanSpeedVocabulary::V2
    } else {
        FanSpeedVocabulary::Legacy
    }
}

/// Translates a raw power mode to a label of `vocabulary`.
///
/// Modes the vocabulary has no entry for yield
/// [`FanSpeedVocabulary::fallback`].
#[must_use]
pub const fn fan_speed_to_canonical(vocabulary: FanSpeedVocabulary, mode: PowerMode) -> FanSpeed {
    match (vocabulary, mode) {
        (FanSpeedVocabulary::V2, PowerMode::Low) => FanSpeed::Quiet,
        (FanSpeedVocabulary::V2, PowerMode::Medium) => FanSpeed::Smart,
        (FanSpeedVocabulary::Legacy, PowerMode::Medium) => FanSpeed::Eco,
        (_, PowerMode::High) => FanSpeed::Power,
        (vocabulary, _) => vocabulary.fallback(),
    }
}

/// Translates a user-facing label back to a raw power mode.
///
/// Labels match exactly, with no trimming or case folding. `Eco` and `Smart`
/// both map to [`PowerMode::Medium`], so this is not an inverse across
/// vocabularies. Unrecognized labels map to [`PowerMode::Medium`].
///
/// # Examples
///
/// ```
/// use purei9_lib::telemetry::translation::canonical_to_raw_fan_speed;
/// use purei9_lib::types::PowerMode;
///
/// assert_eq!(canonical_to_raw_fan_speed("Quiet"), PowerMode::Low);
/// assert_eq!(canonical_to_raw_fan_speed("Turbo"), PowerMode::Medium);
/// assert_eq!(canonical_to_raw_fan_speed("power"), PowerMode::Medium);
/// ```
#[must_use]
pub fn canonical_to_raw_fan_speed(label: &str) -> PowerMode {
    if label == FanSpeed::Quiet.as_str() {
        PowerMode::Low
    } else if label == FanSpeed::Power.as_str() {
        PowerMode::High
    } else {
        PowerMode::Medium
    }
}
