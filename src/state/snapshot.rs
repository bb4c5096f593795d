// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Robot snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{DeviceInfo, StateChange};
use crate::event::RobotId;
use crate::types::{
    CanonicalStatus, CleaningSession, DustbinCondition, FanSpeed, FanSpeedVocabulary, Map,
};

/// Stable id and discovery-time name of a robot.
///
/// Assigned once at discovery and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RobotIdentity {
    id: RobotId,
    name: String,
}

impl RobotIdentity {
    /// Creates an identity.
    pub fn new(id: RobotId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the robot id.
    #[must_use]
    pub fn id(&self) -> &RobotId {
        &self.id
    }

    /// Returns the name the robot had at discovery.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Everything known about one robot at one point in time.
///
/// Snapshots are produced by the coordinator and shared as
/// `Arc<Snapshot>`; a newer snapshot replaces an older one instead of
/// mutating it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub(crate) identity: RobotIdentity,
    pub(crate) name: String,
    pub(crate) battery: u8,
    pub(crate) status: CanonicalStatus,
    pub(crate) available: bool,
    pub(crate) firmware_version: Option<String>,
    pub(crate) fan_speed: FanSpeed,
    pub(crate) fan_speed_vocabulary: FanSpeedVocabulary,
    pub(crate) dustbin: DustbinCondition,
    pub(crate) last_cleaning_session: Option<CleaningSession>,
    pub(crate) maps: Vec<Map>,
    pub(crate) assumed: bool,
    pub(crate) refreshed_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Creates the placeholder snapshot cached before the first refresh.
    ///
    /// It reports the robot as unavailable and idle with an empty battery.
    #[must_use]
    pub fn unrefreshed(identity: RobotIdentity, vocabulary: FanSpeedVocabulary) -> Self {
        Self {
            name: identity.name().to_string(),
            identity,
            battery: 0,
            status: CanonicalStatus::Idle,
            available: false,
            firmware_version: None,
            fan_speed: vocabulary.fallback(),
            fan_speed_vocabulary: vocabulary,
            dustbin: DustbinCondition::Unknown,
            last_cleaning_session: None,
            maps: Vec::new(),
            assumed: false,
            refreshed_at: None,
        }
    }

    // ===== Accessors =====

    /// Returns the robot identity.
    #[must_use]
    pub fn identity(&self) -> &RobotIdentity {
        &self.identity
    }

    /// Returns the robot id.
    #[must_use]
    pub fn id(&self) -> &RobotId {
        self.identity.id()
    }

    /// Returns the display name as of the last refresh.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the battery level, one of `0, 20, 40, 60, 80, 100`.
    #[must_use]
    pub fn battery(&self) -> u8 {
        self.battery
    }

    /// Returns the canonical status.
    #[must_use]
    pub fn status(&self) -> CanonicalStatus {
        self.status
    }

    /// Returns whether the robot reported itself connected to the cloud.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Returns the firmware version, if known.
    #[must_use]
    pub fn firmware_version(&self) -> Option<&str> {
        self.firmware_version.as_deref()
    }

    /// Returns the current fan speed label.
    #[must_use]
    pub fn fan_speed(&self) -> FanSpeed {
        self.fan_speed
    }

    /// Returns the robot's fan speed vocabulary.
    #[must_use]
    pub fn fan_speed_vocabulary(&self) -> FanSpeedVocabulary {
        self.fan_speed_vocabulary
    }

    /// Returns the fan speed labels this robot accepts, lowest first.
    #[must_use]
    pub fn fan_speed_list(&self) -> &'static [FanSpeed] {
        self.fan_speed_vocabulary.labels()
    }

    /// Returns the dustbin condition.
    #[must_use]
    pub fn dustbin(&self) -> DustbinCondition {
        self.dustbin
    }

    /// Returns the most recent cleaning session, if any was reported.
    #[must_use]
    pub fn last_cleaning_session(&self) -> Option<&CleaningSession> {
        self.last_cleaning_session.as_ref()
    }

    /// Returns the cached map catalog.
    #[must_use]
    pub fn maps(&self) -> &[Map] {
        &self.maps
    }

    /// Finds a map by exact, case-sensitive name.
    #[must_use]
    pub fn map_named(&self, name: &str) -> Option<&Map> {
        self.maps.iter().find(|map| map.name == name)
    }

    /// Returns `true` while this snapshot carries a prediction not yet
    /// confirmed by a refresh.
    #[must_use]
    pub fn is_assumed(&self) -> bool {
        self.assumed
    }

    /// Returns when the refresh that produced this snapshot completed.
    ///
    /// `None` until the first refresh.
    #[must_use]
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    /// Returns a human readable error explanation when the status is
    /// [`CanonicalStatus::Error`].
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        if self.status != CanonicalStatus::Error {
            return None;
        }
        Some(self.dustbin.error_message().unwrap_or("Error"))
    }

    /// Returns the information a host device registry needs.
    #[must_use]
    pub fn device_info(&self) -> DeviceInfo {
        DeviceInfo {
            identifier: self.id().clone(),
            name: self.name.clone(),
            manufacturer: DeviceInfo::MANUFACTURER,
            model: DeviceInfo::MODEL,
            sw_version: self.firmware_version.clone(),
        }
    }

    // ===== Predictions =====

    /// Applies a change in place. Returns `true` if a field changed.
    ///
    /// A dustbin error pins the status to [`CanonicalStatus::Error`], so
    /// status changes are ignored until the bin is fixed. This does not touch
    /// the assumed flag; see [`Snapshot::with_prediction`].
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match *change {
            StateChange::Status(_) if self.dustbin.is_error() => false,
            StateChange::Status(status) => {
                let changed = self.status != status;
                self.status = status;
                changed
            }
            StateChange::FanSpeed(speed) => {
                let changed = self.fan_speed != speed;
                self.fan_speed = speed;
                changed
            }
        }
    }

    /// Returns a copy with `change` applied and marked as assumed.
    #[must_use]
    pub fn with_prediction(&self, change: &StateChange) -> Self {
        let mut next = self.clone();
        next.apply(change);
        next.assumed = true;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Zone;

    fn snapshot() -> Snapshot {
        let identity = RobotIdentity::new(RobotId::new("r1"), "Robbie");
        let mut snapshot = Snapshot::unrefreshed(identity, FanSpeedVocabulary::V2);
        snapshot.maps = vec![
            Map::new("m1", "Living Room").with_zone(Zone::new("1", "Sofa")),
            Map::new("m2", "Upstairs"),
        ];
        snapshot
    }

    #[test]
    fn unrefreshed_is_unavailable() {
        let snapshot = snapshot();
        assert!(!snapshot.is_available());
        assert_eq!(snapshot.refreshed_at(), None);
        assert_eq!(snapshot.name(), "Robbie");
        assert_eq!(snapshot.fan_speed(), FanSpeed::Smart);
    }

    #[test]
    fn apply_reports_change() {
        let mut snapshot = snapshot();
        assert!(snapshot.apply(&StateChange::Status(CanonicalStatus::Cleaning)));
        assert!(!snapshot.apply(&StateChange::Status(CanonicalStatus::Cleaning)));
        assert!(snapshot.apply(&StateChange::FanSpeed(FanSpeed::Power)));
        assert_eq!(snapshot.fan_speed(), FanSpeed::Power);
    }

    #[test]
    fn with_prediction_leaves_original_untouched() {
        let original = snapshot();
        let predicted = original.with_prediction(&StateChange::Status(CanonicalStatus::Paused));
        assert_eq!(original.status(), CanonicalStatus::Idle);
        assert!(!original.is_assumed());
        assert_eq!(predicted.status(), CanonicalStatus::Paused);
        assert!(predicted.is_assumed());
    }

    #[test]
    fn dustbin_error_pins_status() {
        let mut snapshot = snapshot();
        snapshot.status = CanonicalStatus::Error;
        snapshot.dustbin = DustbinCondition::Full;

        assert!(!snapshot.apply(&StateChange::Status(CanonicalStatus::Cleaning)));
        assert!(snapshot.apply(&StateChange::FanSpeed(FanSpeed::Power)));

        let predicted = snapshot.with_prediction(&StateChange::Status(CanonicalStatus::Cleaning));
        assert_eq!(predicted.status(), CanonicalStatus::Error);
        assert_eq!(
            predicted.error_message(),
            Some("The dustbin needs to be emptied")
        );
        assert!(predicted.is_assumed());
    }

    #[test]
    fn error_message_depends_on_dustbin() {
        let mut snapshot = snapshot();
        assert_eq!(snapshot.error_message(), None);

        snapshot.status = CanonicalStatus::Error;
        assert_eq!(snapshot.error_message(), Some("Error"));

        snapshot.dustbin = DustbinCondition::Disconnected;
        assert_eq!(snapshot.error_message(), Some("The dustbin is missing"));

        snapshot.dustbin = DustbinCondition::Full;
        assert_eq!(
            snapshot.error_message(),
            Some("The dustbin needs to be emptied")
        );
    }

    #[test]
    fn map_lookup_is_exact() {
        let snapshot = snapshot();
        assert!(snapshot.map_named("Living Room").is_some());
        assert!(snapshot.map_named("living room").is_none());
        assert!(snapshot.map_named("Living Room ").is_none());
    }

    #[test]
    fn device_info_uses_fixed_manufacturer() {
        let info = snapshot().device_info();
        assert_eq!(info.manufacturer, "Electrolux");
        assert_eq!(info.model, "Pure i9");
        assert_eq!(info.identifier.as_str(), "r1");
        assert_eq!(info.sw_version, None);
    }

    #[test]
    fn fan_speed_list_follows_vocabulary() {
        assert_eq!(
            snapshot().fan_speed_list(),
            &[FanSpeed::Quiet, FanSpeed::Smart, FanSpeed::Power]
        );
    }
}
