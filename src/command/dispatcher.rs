// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-boundary command dispatch.

use serde_json::Value;

use super::{CommandOutcome, RobotCommand};
use crate::coordinator::RobotCoordinator;
use crate::error::Result;

/// Turns host command names into [`RobotCommand`]s and runs them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher;

impl Dispatcher {
    /// Parses `name` and `params`, then executes the command on `coordinator`.
    ///
    /// Parameter validation, including map and zone lookup, completes before
    /// any transport call. Unknown command names are logged and reported as
    /// [`CommandOutcome::NotImplemented`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` for bad parameters and `Error::Execution`
    /// if the robot rejected the command.
    pub async fn dispatch(
        coordinator: &RobotCoordinator,
        name: &str,
        params: &Value,
    ) -> Result<CommandOutcome> {
        let Some(command) = RobotCommand::parse(name, params)? else {
            tracing::warn!(
                robot_id = %coordinator.id(),
                command = name,
                "Command not implemented"
            );
            return Ok(CommandOutcome::NotImplemented);
        };

        tracing::debug!(robot_id = %coordinator.id(), %command, "Dispatching command");
        coordinator.execute(command).await
    }
}
