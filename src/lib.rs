// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `purei9_lib` - State reconciliation and command dispatch for Electrolux
//! Pure i9 robot vacuums.
//!
//! The vendor cloud reports raw, generation-dependent codes and offers
//! commands that are not idempotent. This library turns those codes into one
//! canonical [`Snapshot`] per robot, keeps it fresh on a schedule, and runs
//! host commands against it safely.
//!
//! # Features
//!
//! - **Translation**: raw state, battery, dustbin and power mode codes to
//!   canonical values, including the two fan speed vocabularies
//! - **Coordination**: single-flight refreshes with deadlines, a cached
//!   snapshot per robot, optimistic state after commands
//! - **Commands**: start, stop, pause, return to base, fan speed and zone
//!   cleaning, validated against the cached map catalog
//! - **Events**: snapshot, prediction and failure notifications over a
//!   broadcast channel
//!
//! The cloud itself is reached through the [`CloudClient`] and
//! [`RobotClient`] traits, which the host implements.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use purei9_lib::{CloudClient, CoordinatorConfig, Credentials, RobotManager};
//! use serde_json::Value;
//!
//! async fn run(cloud: Arc<dyn CloudClient>) -> purei9_lib::Result<()> {
//!     let credentials = Credentials::new("user@example.com", "secret", "SE");
//!     let manager = RobotManager::discover(cloud, credentials, CoordinatorConfig::default()).await?;
//!
//!     for robot_id in manager.robot_ids() {
//!         let snapshot = manager.refresh_now(robot_id.as_str()).await?;
//!         println!("{}: {} ({}%)", snapshot.name(), snapshot.status(), snapshot.battery());
//!
//!         manager.dispatch(robot_id.as_str(), "start", &Value::Null).await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod coordinator;
pub mod error;
pub mod event;
pub mod manager;
pub mod protocol;
pub mod state;
pub mod telemetry;
pub mod types;

pub use command::{CleanZonesParams, CommandOutcome, Dispatcher, RobotCommand};
pub use coordinator::{CoordinatorConfig, RobotCoordinator};
pub use error::{Error, ExecutionError, Result, TransportError, ValidationError};
pub use event::{EventBus, RobotEvent, RobotId};
pub use manager::RobotManager;
pub use protocol::{CloudClient, Credentials, RobotClient};
pub use state::{DeviceInfo, RobotIdentity, Snapshot, StateChange};
pub use types::{
    BatteryStatus, CanonicalStatus, CleaningSession, DustbinCondition, DustbinStatus, FanSpeed,
    FanSpeedVocabulary, Map, PowerMode, RobotState, Zone,
};
