// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Robot manager implementation.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::{broadcast, watch};
use tokio::task::{JoinHandle, JoinSet};
use tokio_util::sync::CancellationToken;

use crate::command::{CommandOutcome, Dispatcher};
use crate::coordinator::{CoordinatorConfig, RobotCoordinator};
use crate::error::{Error, TransportError, ValidationError};
use crate::event::{EventBus, RobotEvent, RobotId};
use crate::protocol::{CloudClient, Credentials, RobotClient, run_blocking};
use crate::state::{RobotIdentity, Snapshot};
use crate::telemetry::translation::fan_speed_vocabulary_for;

/// Owns every robot found on an account.
///
/// The set of robots is fixed at discovery. All per-robot operations take a
/// [`RobotId`] and fail with [`ValidationError::RobotNotFound`] for ids that
/// were not discovered.
pub struct RobotManager {
    robots: HashMap<RobotId, RobotCoordinator>,
    events: EventBus,
    polling: Mutex<Option<Polling>>,
}

struct Polling {
    cancel: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
}

impl RobotManager {
    /// Logs in and builds a coordinator for every robot on the account.
    ///
    /// No robot state is read yet; call [`RobotManager::refresh_all`] or
    /// [`RobotManager::start_polling`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::AuthenticationFailed` if the cloud rejected
    /// the credentials, or any `TransportError` raised while listing or
    /// probing robots.
    pub async fn discover(
        cloud: Arc<dyn CloudClient>,
        credentials: Credentials,
        config: CoordinatorConfig,
    ) -> Result<Self, Error> {
        Self::discover_with_events(cloud, credentials, config, EventBus::new()).await
    }

    /// Like [`RobotManager::discover`], publishing on an existing event bus.
    ///
    /// Subscribe to `events` first to receive the `RobotAdded` events.
    ///
    /// # Errors
    ///
    /// Same as [`RobotManager::discover`].
    pub async fn discover_with_events(
        cloud: Arc<dyn CloudClient>,
        credentials: Credentials,
        config: CoordinatorConfig,
        events: EventBus,
    ) -> Result<Self, Error> {
        let deadline = Some(config.refresh_timeout);

        tracing::info!(country_code = credentials.country_code(), "Logging in to cloud");
        let login = Arc::clone(&cloud);
        let accepted = run_blocking(deadline, move || login.try_login(&credentials)).await?;
        if !accepted {
            tracing::warn!("Cloud rejected credentials");
            return Err(TransportError::AuthenticationFailed.into());
        }

        let clients = run_blocking(deadline, move || cloud.robots()).await?;

        let mut robots = HashMap::with_capacity(clients.len());
        for client in clients {
            let coordinator = Self::probe(client, &config, &events).await?;
            let robot_id = coordinator.id().clone();
            robots.insert(robot_id.clone(), coordinator);
            events.publish(RobotEvent::robot_added(robot_id));
        }

        tracing::info!(count = robots.len(), "Robot discovery complete");

        Ok(Self {
            robots,
            events,
            polling: Mutex::new(None),
        })
    }

    async fn probe(
        client: Arc<dyn RobotClient>,
        config: &CoordinatorConfig,
        events: &EventBus,
    ) -> Result<RobotCoordinator, Error> {
        let probe = Arc::clone(&client);
        let (id, name, modes) = run_blocking(Some(config.refresh_timeout), move || {
            Ok((probe.id()?, probe.name()?, probe.supported_power_modes()?))
        })
        .await?;

        let vocabulary = fan_speed_vocabulary_for(modes.len());
        let identity = RobotIdentity::new(RobotId::new(id), name);
        tracing::info!(
            robot_id = %identity.id(),
            name = identity.name(),
            ?vocabulary,
            "Discovered robot"
        );

        Ok(RobotCoordinator::new(
            identity,
            vocabulary,
            client,
            config.clone(),
            events.clone(),
        ))
    }

    // ===== Lookup =====

    /// Returns the ids of all managed robots, sorted.
    #[must_use]
    pub fn robot_ids(&self) -> Vec<RobotId> {
        let mut ids: Vec<_> = self.robots.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Returns the number of managed robots.
    #[must_use]
    pub fn robot_count(&self) -> usize {
        self.robots.len()
    }

    /// Returns the coordinator of a robot.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::RobotNotFound` for unknown ids.
    pub fn coordinator(&self, robot_id: &str) -> Result<&RobotCoordinator, Error> {
        self.robots
            .get(robot_id)
            .ok_or_else(|| ValidationError::RobotNotFound(robot_id.to_string()).into())
    }

    // ===== State =====

    /// Returns the cached snapshot of a robot without any I/O.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::RobotNotFound` for unknown ids.
    pub fn snapshot(&self, robot_id: &str) -> Result<Arc<Snapshot>, Error> {
        Ok(self.coordinator(robot_id)?.snapshot())
    }

    /// Subscribes to snapshot replacements of a robot.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::RobotNotFound` for unknown ids.
    pub fn watch(&self, robot_id: &str) -> Result<watch::Receiver<Arc<Snapshot>>, Error> {
        Ok(self.coordinator(robot_id)?.watch_snapshot())
    }

    /// Subscribes to events of all robots.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RobotEvent> {
        self.events.subscribe()
    }

    /// Refreshes one robot now, bounded by the refresh timeout.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::RobotNotFound` for unknown ids, or the
    /// refresh failure.
    pub async fn refresh_now(&self, robot_id: &str) -> Result<Arc<Snapshot>, Error> {
        self.coordinator(robot_id)?.refresh_now().await
    }

    /// Refreshes one robot including its map catalog.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::RobotNotFound` for unknown ids, or the
    /// refresh failure.
    pub async fn refresh_maps(&self, robot_id: &str) -> Result<Arc<Snapshot>, Error> {
        self.coordinator(robot_id)?.refresh_maps().await
    }

    /// Refreshes every robot concurrently.
    ///
    /// One robot failing does not affect the others.
    pub async fn refresh_all(&self) -> HashMap<RobotId, Result<Arc<Snapshot>, Error>> {
        let mut set = JoinSet::new();
        for coordinator in self.robots.values().cloned() {
            set.spawn(async move {
                let result = coordinator.refresh_now().await;
                (coordinator.id().clone(), result)
            });
        }

        let mut results = HashMap::with_capacity(self.robots.len());
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((robot_id, result)) => {
                    results.insert(robot_id, result);
                }
                Err(e) => tracing::warn!(error = %e, "Refresh task failed"),
            }
        }
        results
    }

    // ===== Commands =====

    /// Dispatches a host command to a robot.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::RobotNotFound` for unknown ids, otherwise
    /// see [`Dispatcher::dispatch`].
    pub async fn dispatch(
        &self,
        robot_id: &str,
        name: &str,
        params: &Value,
    ) -> Result<CommandOutcome, Error> {
        Dispatcher::dispatch(self.coordinator(robot_id)?, name, params).await
    }

    // ===== Polling =====

    /// Starts one polling task per robot.
    ///
    /// Returns `false` if polling is already running.
    pub fn start_polling(&self) -> bool {
        let mut polling = self.polling.lock();
        if polling.is_some() {
            return false;
        }

        let cancel = CancellationToken::new();
        let tasks = self
            .robots
            .values()
            .map(|coordinator| coordinator.spawn_polling(cancel.child_token()))
            .collect();
        *polling = Some(Polling { cancel, tasks });

        tracing::debug!(robots = self.robots.len(), "Polling started");
        true
    }

    /// Stops polling and waits for the polling tasks to finish.
    ///
    /// A refresh in progress completes first. Returns `false` if polling was
    /// not running.
    pub async fn stop_polling(&self) -> bool {
        let Some(polling) = self.polling.lock().take() else {
            return false;
        };

        polling.cancel.cancel();
        for task in polling.tasks {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "Polling task failed");
            }
        }

        tracing::debug!("Polling stopped");
        true
    }

    /// Returns `true` while polling is running.
    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.polling.lock().is_some()
    }
}

impl Drop for RobotManager {
    fn drop(&mut self) {
        if let Some(polling) = self.polling.get_mut().take() {
            polling.cancel.cancel();
        }
    }
}

impl std::fmt::Debug for RobotManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RobotManager")
            .field("robots", &self.robot_ids())
            .field("polling", &self.is_polling())
            .finish_non_exhaustive()
    }
}
