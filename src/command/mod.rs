// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Robot commands.
//!
//! Hosts address commands by name with a JSON parameter object. The
//! [`Dispatcher`] parses that pair into a [`RobotCommand`] and hands it to
//! the robot's coordinator.
//!
//! # Available Commands
//!
//! | Name | Parameters | Predicted status |
//! |------|------------|------------------|
//! | `start` | none | cleaning |
//! | `stop` | none | idle |
//! | `pause` | none | paused |
//! | `return_to_base` | none | returning |
//! | `set_fan_speed` | `fan_speed`: label | fan speed only |
//! | `clean_zones` | `map`: name, `zones`: list of names | none |
//!
//! `start` is skipped while the robot is already cleaning and `pause` while
//! it is already paused: the robot toggles on repeated calls.

mod clean_zones;
mod dispatcher;
mod robot_command;

pub use clean_zones::{CleanZonesParams, ZoneTarget};
pub use dispatcher::Dispatcher;
pub use robot_command::RobotCommand;

/// Successful result of dispatching a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandOutcome {
    /// The command was sent to the robot.
    Executed,
    /// The robot is already in the target state; nothing was sent.
    Skipped,
    /// The command name is unknown; nothing was sent.
    NotImplemented,
}

impl CommandOutcome {
    /// Returns `true` if the robot received the command.
    #[must_use]
    pub const fn was_sent(&self) -> bool {
        matches!(self, Self::Executed)
    }
}
