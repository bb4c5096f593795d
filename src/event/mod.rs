// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for robot state changes.
//!
//! Coordinators publish a [`RobotEvent`] whenever their cached snapshot is
//! replaced, a prediction is applied, or a refresh fails. The [`EventBus`]
//! fans these out over a tokio broadcast channel.
//!
//! # Examples
//!
//! ```
//! use purei9_lib::event::{EventBus, RobotEvent, RobotId};
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(RobotEvent::robot_added(RobotId::new("r1")));
//! assert!(rx.try_recv().is_ok());
//! ```

mod event_bus;
mod robot_event;
mod robot_id;

pub use event_bus::EventBus;
pub use robot_event::RobotEvent;
pub use robot_id::RobotId;
