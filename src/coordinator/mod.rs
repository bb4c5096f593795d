// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-robot refresh and command coordination.
//!
//! A [`RobotCoordinator`] is the only owner of a robot's cached
//! [`Snapshot`](crate::state::Snapshot). It refreshes the snapshot on a
//! schedule or on demand, applies predicted state after commands, and
//! suppresses commands the robot would misinterpret when repeated.
//!
//! # Refresh cycle
//!
//! 1. Read state, battery, dustbin, power mode, connectivity, firmware,
//!    name and the most recent cleaning session on the blocking pool.
//! 2. Read the map catalog too when it is older than
//!    [`CoordinatorConfig::maps_refresh_interval`] or was requested.
//! 3. Translate and replace the cached snapshot, dropping any prediction.
//!
//! The whole cycle is bounded by [`CoordinatorConfig::refresh_timeout`].

mod config;
mod polling;
mod robot_coordinator;

pub use config::CoordinatorConfig;
pub use robot_coordinator::RobotCoordinator;
