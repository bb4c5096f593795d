// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Robot event types.

use std::sync::Arc;

use crate::error::TransportError;
use crate::state::{Snapshot, StateChange};

use super::RobotId;

/// Events emitted by coordinators and the robot manager.
///
/// Every event names the robot it concerns.
///
/// # Examples
///
/// ```
/// use purei9_lib::RobotId;
/// use purei9_lib::error::TransportError;
/// use purei9_lib::event::RobotEvent;
///
/// let robot_id = RobotId::new("r1");
///
/// let added = RobotEvent::robot_added(robot_id.clone());
/// assert!(added.is_lifecycle());
///
/// let failed = RobotEvent::refresh_failed(robot_id, TransportError::Timeout(10_000));
/// assert!(failed.is_failure());
/// ```
#[derive(Debug, Clone)]
pub enum RobotEvent {
    /// A robot was discovered and is now managed.
    RobotAdded {
        /// The ID of the added robot.
        robot_id: RobotId,
    },

    /// A refresh completed and replaced the cached snapshot.
    SnapshotUpdated {
        /// The ID of the robot.
        robot_id: RobotId,
        /// The new snapshot.
        snapshot: Arc<Snapshot>,
    },

    /// A command succeeded and its predicted outcome was cached.
    StatePredicted {
        /// The ID of the robot.
        robot_id: RobotId,
        /// The predicted change.
        change: StateChange,
        /// The snapshot carrying the prediction.
        snapshot: Arc<Snapshot>,
    },

    /// The robot's cloud connectivity flipped between two refreshes.
    AvailabilityChanged {
        /// The ID of the robot.
        robot_id: RobotId,
        /// Whether the robot is now reachable.
        available: bool,
    },

    /// A refresh failed; the previous snapshot stays cached.
    RefreshFailed {
        /// The ID of the robot.
        robot_id: RobotId,
        /// Why the refresh failed.
        error: TransportError,
    },
}

impl RobotEvent {
    /// Returns the robot ID associated with this event.
    #[must_use]
    pub fn robot_id(&self) -> &RobotId {
        match self {
            Self::RobotAdded { robot_id }
            | Self::SnapshotUpdated { robot_id, .. }
            | Self::StatePredicted { robot_id, .. }
            | Self::AvailabilityChanged { robot_id, .. }
            | Self::RefreshFailed { robot_id, .. } => robot_id,
        }
    }

    /// Returns the snapshot carried by this event, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Arc<Snapshot>> {
        match self {
            Self::SnapshotUpdated { snapshot, .. } | Self::StatePredicted { snapshot, .. } => {
                Some(snapshot)
            }
            _ => None,
        }
    }

    /// Returns `true` if this is a lifecycle event.
    #[must_use]
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, Self::RobotAdded { .. })
    }

    /// Returns `true` if this event reports a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::RefreshFailed { .. })
    }

    /// Creates a robot added event.
    #[must_use]
    pub fn robot_added(robot_id: RobotId) -> Self {
        Self::RobotAdded { robot_id }
    }

    /// Creates a snapshot updated event.
    #[must_use]
    pub fn snapshot_updated(robot_id: RobotId, snapshot: Arc<Snapshot>) -> Self {
        Self::SnapshotUpdated { robot_id, snapshot }
    }

    /// Creates a state predicted event.
    #[must_use]
    pub fn state_predicted(robot_id: RobotId, change: StateChange, snapshot: Arc<Snapshot>) -> Self {
        Self::StatePredicted {
            robot_id,
            change,
            snapshot,
        }
    }

    /// Creates an availability changed event.
    #[must_use]
    pub fn availability_changed(robot_id: RobotId, available: bool) -> Self {
        Self::AvailabilityChanged {
            robot_id,
            available,
        }
    }

    /// Creates a refresh failed event.
    #[must_use]
    pub fn refresh_failed(robot_id: RobotId, error: TransportError) -> Self {
        Self::RefreshFailed { robot_id, error }
    }
}
