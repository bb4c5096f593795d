// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device registry information.

use serde::Serialize;

use crate::event::RobotId;

/// Static description of a robot for a host's device registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    /// Stable robot id.
    pub identifier: RobotId,
    /// Display name.
    pub name: String,
    /// Always [`DeviceInfo::MANUFACTURER`].
    pub manufacturer: &'static str,
    /// Always [`DeviceInfo::MODEL`].
    pub model: &'static str,
    /// Firmware version, once a refresh has reported one.
    pub sw_version: Option<String>,
}

impl DeviceInfo {
    /// Manufacturer name reported for every robot.
    pub const MANUFACTURER: &'static str = "Electrolux";

    /// Model name reported for every robot.
    pub const MODEL: &'static str = "Pure i9";
}
