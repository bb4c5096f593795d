// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The closed set of robot commands.

use std::fmt;

use serde_json::Value;

use super::CleanZonesParams;
use crate::error::ValidationError;

/// A command the library can send to a robot.
///
/// Strings only appear at the host boundary, in [`RobotCommand::parse`].
///
/// # Examples
///
/// ```
/// use purei9_lib::command::RobotCommand;
/// use serde_json::{Value, json};
///
/// let cmd = RobotCommand::parse("pause", &Value::Null).unwrap();
/// assert_eq!(cmd, Some(RobotCommand::Pause));
///
/// let cmd = RobotCommand::parse("set_fan_speed", &json!({"fan_speed": "Quiet"})).unwrap();
/// assert_eq!(cmd.map(|c| c.name()), Some("set_fan_speed"));
///
/// // Unknown names are not an error
/// assert_eq!(RobotCommand::parse("locate", &Value::Null).unwrap(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotCommand {
    /// Start or resume cleaning.
    Start,
    /// Stop cleaning where the robot is.
    Stop,
    /// Pause cleaning.
    Pause,
    /// Return to the dock.
    ReturnToBase,
    /// Change the fan speed to a label of the robot's vocabulary.
    ///
    /// Labels outside every vocabulary select the medium power mode.
    SetFanSpeed(String),
    /// Clean selected zones of one map.
    CleanZones(CleanZonesParams),
}

impl RobotCommand {
    /// Host-facing command names, in declaration order.
    pub const NAMES: [&'static str; 6] = [
        "start",
        "stop",
        "pause",
        "return_to_base",
        "set_fan_speed",
        "clean_zones",
    ];

    /// Returns the host-facing name of this command.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Pause => "pause",
            Self::ReturnToBase => "return_to_base",
            Self::SetFanSpeed(_) => "set_fan_speed",
            Self::CleanZones(_) => "clean_zones",
        }
    }

    /// Parses a host command name and its parameters.
    ///
    /// Returns `Ok(None)` for names this library does not implement.
    /// Commands without parameters ignore `params`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a known command's parameters are missing
    /// or malformed.
    pub fn parse(name: &str, params: &Value) -> Result<Option<Self>, ValidationError> {
        let command = match name {
            "start" => Self::Start,
            "stop" => Self::Stop,
            "pause" => Self::Pause,
            "return_to_base" => Self::ReturnToBase,
            "set_fan_speed" => Self::SetFanSpeed(fan_speed_param(params)?),
            "clean_zones" => Self::CleanZones(CleanZonesParams::from_params(params)?),
            _ => return Ok(None),
        };
        Ok(Some(command))
    }
}

impl fmt::Display for RobotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetFanSpeed(speed) => write!(f, "set_fan_speed({speed})"),
            Self::CleanZones(params) => {
                write!(f, "clean_zones({}: {})", params.map, params.zones.join(", "))
            }
            other => f.write_str(other.name()),
        }
    }
}

fn fan_speed_param(params: &Value) -> Result<String, ValidationError> {
    match params.get("fan_speed") {
        Some(Value::String(speed)) => Ok(speed.clone()),
        None | Some(Value::Null) => Err(ValidationError::MissingField {
            field: "fan_speed",
            expected: "string",
        }),
        Some(_) => Err(ValidationError::InvalidField {
            field: "fan_speed",
            reason: "expected a string".to_string(),
        }),
    }
}
