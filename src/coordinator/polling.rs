// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Background polling loop.

use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::RobotCoordinator;

/// Shortest interval the loop accepts.
const MIN_POLL_INTERVAL: Duration = Duration::from_secs(1);

pub(super) async fn poll_task(coordinator: RobotCoordinator, cancel: CancellationToken) {
    let period = coordinator.config().poll_interval.max(MIN_POLL_INTERVAL);
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::debug!(robot_id = %coordinator.id(), ?period, "Polling started");

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            _ = interval.tick() => {
                // Already logged and published by the coordinator
                let _ = coordinator.refresh_now().await;
            }
        }
    }

    tracing::debug!(robot_id = %coordinator.id(), "Polling stopped");
}
