// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Canonical robot state.
//!
//! A [`Snapshot`] is everything the library knows about one robot after a
//! refresh. Snapshots are immutable once shared: the coordinator replaces the
//! cached `Arc<Snapshot>` wholesale, so readers never observe a half-applied
//! update. A [`StateChange`] is the prediction applied to a copy of the
//! cached snapshot right after a successful command.
//!
//! # Examples
//!
//! ```
//! use purei9_lib::RobotId;
//! use purei9_lib::state::{RobotIdentity, Snapshot, StateChange};
//! use purei9_lib::types::{CanonicalStatus, FanSpeedVocabulary};
//!
//! let identity = RobotIdentity::new(RobotId::new("900277479937001234567890"), "Robbie");
//! let snapshot = Snapshot::unrefreshed(identity, FanSpeedVocabulary::V2);
//!
//! let predicted = snapshot.with_prediction(&StateChange::Status(CanonicalStatus::Cleaning));
//! assert_eq!(predicted.status(), CanonicalStatus::Cleaning);
//! assert!(predicted.is_assumed());
//! assert!(!snapshot.is_assumed());
//! ```

mod device_info;
mod snapshot;
mod state_change;

pub use device_info::DeviceInfo;
pub use snapshot::{RobotIdentity, Snapshot};
pub use state_change::StateChange;
