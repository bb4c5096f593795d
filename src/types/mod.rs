// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Pure i9 robots.
//!
//! Two families of types live here:
//!
//! - **Raw codes** as reported by the vendor cloud, before translation:
//!   [`RobotState`], [`BatteryStatus`], [`DustbinStatus`], [`PowerMode`].
//!   Each keeps an `Unknown` variant so codes added by newer firmware are
//!   carried through instead of rejected.
//! - **Canonical values** the rest of the crate works with:
//!   [`CanonicalStatus`], [`DustbinCondition`], [`FanSpeed`],
//!   [`FanSpeedVocabulary`], [`Map`], [`Zone`], [`CleaningSession`].
//!
//! Conversions between the two live in
//! [`telemetry::translation`](crate::telemetry::translation).

mod battery;
mod dustbin;
mod fan_speed;
mod map;
mod session;
mod status;

pub use battery::BatteryStatus;
pub use dustbin::{DustbinCondition, DustbinStatus};
pub use fan_speed::{FanSpeed, FanSpeedVocabulary, PowerMode};
pub use map::{Map, Zone};
pub use session::CleaningSession;
pub use status::{CanonicalStatus, RobotState};
