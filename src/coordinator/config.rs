// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coordinator configuration.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Timing configuration for a [`RobotCoordinator`](super::RobotCoordinator).
///
/// Deserializes from whole seconds, with every field optional:
///
/// ```json
/// { "poll_interval": 30, "refresh_timeout": 5 }
/// ```
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use purei9_lib::CoordinatorConfig;
///
/// let config = CoordinatorConfig::default();
/// assert_eq!(config.poll_interval, Duration::from_secs(60));
/// assert_eq!(config.refresh_timeout, Duration::from_secs(10));
///
/// let config = CoordinatorConfig::new()
///     .with_poll_interval(Duration::from_secs(30))
///     .with_maps_refresh_interval(Duration::from_secs(3600));
/// assert_eq!(config.poll_interval, Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    /// Time between scheduled refreshes.
    #[serde(deserialize_with = "seconds")]
    pub poll_interval: Duration,
    /// How long a refresh may take before it is reported as timed out.
    #[serde(deserialize_with = "seconds")]
    pub refresh_timeout: Duration,
    /// How long a command may take before it is reported as timed out.
    #[serde(deserialize_with = "seconds")]
    pub command_timeout: Duration,
    /// Minimum age of the map catalog before a refresh fetches it again.
    #[serde(deserialize_with = "seconds")]
    pub maps_refresh_interval: Duration,
}

impl CoordinatorConfig {
    /// Creates a configuration with default timings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time between scheduled refreshes.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the refresh deadline.
    #[must_use]
    pub fn with_refresh_timeout(mut self, timeout: Duration) -> Self {
        self.refresh_timeout = timeout;
        self
    }

    /// Sets the command deadline.
    #[must_use]
    pub fn with_command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    /// Sets how often the map catalog is re-fetched.
    #[must_use]
    pub fn with_maps_refresh_interval(mut self, interval: Duration) -> Self {
        self.maps_refresh_interval = interval;
        self
    }
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(60),
            refresh_timeout: Duration::from_secs(10),
            command_timeout: Duration::from_secs(10),
            maps_refresh_interval: Duration::from_secs(15 * 60),
        }
    }
}

fn seconds<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}
