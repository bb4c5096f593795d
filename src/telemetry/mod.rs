// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw robot telemetry and its translation to a [`Snapshot`].
//!
//! A refresh reads one [`RawTelemetry`] from a [`RobotClient`] and turns it
//! into a canonical [`Snapshot`] through the tables in [`translation`].
//!
//! # Examples
//!
//! ```
//! use purei9_lib::RobotId;
//! use purei9_lib::state::RobotIdentity;
//! use purei9_lib::telemetry::RawTelemetry;
//! use purei9_lib::types::{
//!     BatteryStatus, CanonicalStatus, DustbinStatus, FanSpeed, FanSpeedVocabulary, PowerMode,
//!     RobotState,
//! };
//!
//! let raw = RawTelemetry {
//!     status: RobotState::Sleeping,
//!     battery: BatteryStatus::High,
//!     dustbin: DustbinStatus::Connected,
//!     power_mode: PowerMode::Low,
//!     connected: true,
//!     firmware: "42.9".to_string(),
//!     name: "Robbie".to_string(),
//!     last_session: None,
//!     maps: None,
//! };
//!
//! let identity = RobotIdentity::new(RobotId::new("r1"), "Robbie");
//! let snapshot = raw.into_snapshot(identity, FanSpeedVocabulary::V2, Vec::new());
//!
//! assert_eq!(snapshot.status(), CanonicalStatus::Docked);
//! assert_eq!(snapshot.battery(), 100);
//! assert_eq!(snapshot.fan_speed(), FanSpeed::Quiet);
//! ```

pub mod translation;

use chrono::Utc;

use crate::error::TransportError;
use crate::protocol::RobotClient;
use crate::state::{RobotIdentity, Snapshot};
use crate::types::{
    BatteryStatus, CleaningSession, DustbinStatus, FanSpeedVocabulary, Map, PowerMode, RobotState,
};

/// One round of raw readings from a robot.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTelemetry {
    /// Raw robot state.
    pub status: RobotState,
    /// Raw battery step.
    pub battery: BatteryStatus,
    /// Raw dustbin state.
    pub dustbin: DustbinStatus,
    /// Raw power mode.
    pub power_mode: PowerMode,
    /// Cloud connectivity.
    pub connected: bool,
    /// Firmware version.
    pub firmware: String,
    /// Current display name.
    pub name: String,
    /// Most recent cleaning session, if one was reported and could be read.
    pub last_session: Option<CleaningSession>,
    /// Map catalog, if it was fetched this round and the fetch succeeded.
    pub maps: Option<Vec<Map>>,
}

impl RawTelemetry {
    /// Reads telemetry from a robot. Blocks on every call.
    ///
    /// Readings happen in a fixed order: state, battery, dustbin, power mode,
    /// connectivity, firmware, name, cleaning sessions and, if `with_maps`,
    /// maps. The cleaning session and map readings are best-effort: a
    /// failure there is logged and leaves the field `None`.
    ///
    /// # Errors
    ///
    /// Returns the first `TransportError` from a required reading.
    pub fn read(robot: &dyn RobotClient, with_maps: bool) -> Result<Self, TransportError> {
        let status = robot.status()?;
        let battery = robot.battery()?;
        let dustbin = robot.dustbin()?;
        let power_mode = robot.power_mode()?;
        let connected = robot.is_connected()?;
        let firmware = robot.firmware()?;
        let name = robot.name()?;

        let last_session = match robot.cleaning_sessions() {
            Ok(sessions) => sessions.into_iter().next(),
            Err(e) => {
                tracing::warn!(robot = %name, error = %e, "Failed to read cleaning sessions");
                None
            }
        };

        let maps = if with_maps {
            match robot.maps() {
                Ok(maps) => Some(maps),
                Err(e) => {
                    tracing::warn!(robot = %name, error = %e, "Failed to read maps, keeping previous catalog");
                    None
                }
            }
        } else {
            None
        };

        Ok(Self {
            status,
            battery,
            dustbin,
            power_mode,
            connected,
            firmware,
            name,
            last_session,
            maps,
        })
    }

    /// Translates these readings into a snapshot stamped with the current time.
    ///
    /// `previous_maps` is used when this round carries no map catalog.
    #[must_use]
    pub fn into_snapshot(
        self,
        identity: RobotIdentity,
        vocabulary: FanSpeedVocabulary,
        previous_maps: Vec<Map>,
    ) -> Snapshot {
        Snapshot {
            identity,
            name: self.name,
            battery: translation::battery_to_percent(self.battery),
            status: translation::status_to_canonical(self.status, self.battery, self.dustbin),
            available: self.connected,
            firmware_version: Some(self.firmware),
            fan_speed: translation::fan_speed_to_canonical(vocabulary, self.power_mode),
            fan_speed_vocabulary: vocabulary,
            dustbin: translation::dustbin_to_canonical(self.dustbin),
            last_cleaning_session: self.last_session,
            maps: self.maps.unwrap_or(previous_maps),
            assumed: false,
            refreshed_at: Some(Utc::now()),
        }
    }
}
