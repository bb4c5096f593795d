// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Robot manager for every robot on one account.
//!
//! [`RobotManager::discover`] logs in, lists the account's robots and builds
//! one [`RobotCoordinator`](crate::coordinator::RobotCoordinator) each. The
//! manager then exposes the host-facing API keyed by [`RobotId`](crate::RobotId):
//!
//! - [`snapshot`](RobotManager::snapshot): cached state, no I/O
//! - [`refresh_now`](RobotManager::refresh_now): fresh state, bounded by the
//!   refresh timeout
//! - [`dispatch`](RobotManager::dispatch): run a command by name
//! - [`start_polling`](RobotManager::start_polling) and
//!   [`stop_polling`](RobotManager::stop_polling): scheduled refreshes
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use purei9_lib::{CloudClient, CoordinatorConfig, Credentials, RobotManager};
//! use serde_json::json;
//!
//! async fn run(cloud: Arc<dyn CloudClient>) -> purei9_lib::Result<()> {
//!     let credentials = Credentials::new("user@example.com", "secret", "SE");
//!     let manager = RobotManager::discover(cloud, credentials, CoordinatorConfig::default()).await?;
//!
//!     manager.start_polling();
//!
//!     for robot_id in manager.robot_ids() {
//!         manager
//!             .dispatch(robot_id.as_str(), "clean_zones", &json!({
//!                 "map": "Ground floor",
//!                 "zones": ["Kitchen"],
//!             }))
//!             .await?;
//!     }
//!
//!     manager.stop_polling().await;
//!     Ok(())
//! }
//! ```

mod robot_manager;

pub use robot_manager::RobotManager;
