// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-robot state coordinator.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::CoordinatorConfig;
use crate::command::{CommandOutcome, RobotCommand};
use crate::error::{Error, ExecutionError, Result, TransportError};
use crate::event::{EventBus, RobotEvent, RobotId};
use crate::protocol::{RobotClient, run_blocking};
use crate::state::{RobotIdentity, Snapshot, StateChange};
use crate::telemetry::RawTelemetry;
use crate::telemetry::translation::{canonical_to_raw_fan_speed, fan_speed_to_canonical};
use crate::types::{CanonicalStatus, FanSpeedVocabulary};

type RefreshResult = std::result::Result<Arc<Snapshot>, TransportError>;

/// Owns the cached snapshot of one robot and serializes access to it.
///
/// Cloning is cheap and yields another handle to the same robot.
///
/// - Refreshes are single-flight: concurrent [`refresh_now`] calls share one
///   round trip and receive the same result.
/// - Commands are serialized per robot, so the already-in-state check and
///   the mutation that follows cannot interleave with another command.
/// - After a successful command the cached snapshot carries the predicted
///   outcome, flagged as assumed, until the next refresh completes.
///
/// [`refresh_now`]: RobotCoordinator::refresh_now
#[derive(Clone)]
pub struct RobotCoordinator {
    inner: Arc<Inner>,
}

struct Inner {
    identity: RobotIdentity,
    vocabulary: FanSpeedVocabulary,
    robot: Arc<dyn RobotClient>,
    config: CoordinatorConfig,
    cache: Mutex<Cache>,
    in_flight: Mutex<Option<watch::Receiver<Option<RefreshResult>>>>,
    command_gate: tokio::sync::Mutex<()>,
    snapshot_tx: watch::Sender<Arc<Snapshot>>,
    events: EventBus,
}

/// Snapshot and prediction live under one lock so a refresh replacing the
/// snapshot and a command applying a prediction exclude each other.
struct Cache {
    snapshot: Arc<Snapshot>,
    pending: Option<StateChange>,
    maps_fetched_at: Option<Instant>,
    maps_requested: bool,
    /// Completed refreshes that tried to read maps, successful or not.
    maps_attempts: u64,
}

impl RobotCoordinator {
    /// Creates a coordinator caching an unrefreshed snapshot.
    #[must_use]
    pub fn new(
        identity: RobotIdentity,
        vocabulary: FanSpeedVocabulary,
        robot: Arc<dyn RobotClient>,
        config: CoordinatorConfig,
        events: EventBus,
    ) -> Self {
        let snapshot = Arc::new(Snapshot::unrefreshed(identity.clone(), vocabulary));
        let (snapshot_tx, _) = watch::channel(Arc::clone(&snapshot));

        Self {
            inner: Arc::new(Inner {
                identity,
                vocabulary,
                robot,
                config,
                cache: Mutex::new(Cache {
                    snapshot,
                    pending: None,
                    maps_fetched_at: None,
                    maps_requested: false,
                    maps_attempts: 0,
                }),
                in_flight: Mutex::new(None),
                command_gate: tokio::sync::Mutex::new(()),
                snapshot_tx,
                events,
            }),
        }
    }

    // ===== Accessors =====

    /// Returns the robot id.
    #[must_use]
    pub fn id(&self) -> &RobotId {
        self.inner.identity.id()
    }

    /// Returns the robot identity.
    #[must_use]
    pub fn identity(&self) -> &RobotIdentity {
        &self.inner.identity
    }

    /// Returns the fan speed vocabulary fixed at discovery.
    #[must_use]
    pub fn vocabulary(&self) -> FanSpeedVocabulary {
        self.inner.vocabulary
    }

    /// Returns the timing configuration.
    #[must_use]
    pub fn config(&self) -> &CoordinatorConfig {
        &self.inner.config
    }

    /// Returns the cached snapshot without any I/O.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.inner.cache.lock().snapshot)
    }

    /// Returns the prediction not yet confirmed by a refresh, if any.
    #[must_use]
    pub fn pending_prediction(&self) -> Option<StateChange> {
        self.inner.cache.lock().pending
    }

    /// Subscribes to snapshot replacements.
    ///
    /// The receiver sees every refresh and every applied prediction.
    #[must_use]
    pub fn watch_snapshot(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.inner.snapshot_tx.subscribe()
    }

    // ===== Refresh =====

    /// Refreshes the snapshot from the robot.
    ///
    /// If a refresh is already running, waits for it instead of starting
    /// another one. The refresh runs in its own task, so dropping this
    /// future does not abort it for other waiters.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if a reading failed or the refresh took
    /// longer than the configured timeout. The previous snapshot stays
    /// cached.
    pub async fn refresh_now(&self) -> Result<Arc<Snapshot>> {
        let mut rx = self.join_or_start_refresh();

        let result = match rx.wait_for(Option::is_some).await {
            Ok(result) => result.clone(),
            Err(_) => None,
        };

        match result {
            Some(result) => result.map_err(Error::from),
            None => {
                let e = TransportError::Worker("refresh task ended without a result".to_string());
                Err(e.into())
            }
        }
    }

    /// Refreshes the snapshot and the map catalog.
    ///
    /// # Errors
    ///
    /// Same as [`RobotCoordinator::refresh_now`]. A failed map fetch is not
    /// an error; the previous catalog stays cached.
    pub async fn refresh_maps(&self) -> Result<Arc<Snapshot>> {
        let attempts = {
            let mut cache = self.inner.cache.lock();
            cache.maps_requested = true;
            cache.maps_attempts
        };

        let snapshot = self.refresh_now().await?;
        if self.inner.cache.lock().maps_attempts != attempts {
            return Ok(snapshot);
        }

        // Joined a refresh that started without maps
        self.refresh_now().await
    }

    fn join_or_start_refresh(&self) -> watch::Receiver<Option<RefreshResult>> {
        let mut slot = self.inner.in_flight.lock();
        if let Some(rx) = slot.as_ref() {
            tracing::debug!(robot_id = %self.id(), "Joining in-flight refresh");
            return rx.clone();
        }

        let (tx, rx) = watch::channel(None);
        *slot = Some(rx.clone());

        let this = self.clone();
        tokio::spawn(async move {
            let result = this.perform_refresh().await;
            this.inner.in_flight.lock().take();
            let _ = tx.send(Some(result));
        });

        rx
    }

    async fn perform_refresh(&self) -> RefreshResult {
        let with_maps = self.maps_due();
        let robot = Arc::clone(&self.inner.robot);
        tracing::debug!(robot_id = %self.id(), with_maps, "Refreshing robot");

        let raw = match run_blocking(Some(self.inner.config.refresh_timeout), move || {
            RawTelemetry::read(robot.as_ref(), with_maps)
        })
        .await
        {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(robot_id = %self.id(), error = %e, "Refresh failed");
                self.inner
                    .events
                    .publish(RobotEvent::refresh_failed(self.id().clone(), e.clone()));
                return Err(e);
            }
        };

        let maps_fetched = raw.maps.is_some();
        let (snapshot, was_available) = {
            let mut cache = self.inner.cache.lock();
            let was_available = cache.snapshot.is_available();
            let snapshot = Arc::new(raw.into_snapshot(
                self.inner.identity.clone(),
                self.inner.vocabulary,
                cache.snapshot.maps().to_vec(),
            ));

            cache.snapshot = Arc::clone(&snapshot);
            cache.pending = None;
            if with_maps {
                cache.maps_attempts += 1;
            }
            if maps_fetched {
                cache.maps_fetched_at = Some(Instant::now());
                cache.maps_requested = false;
            }
            self.inner.snapshot_tx.send_replace(Arc::clone(&snapshot));
            (snapshot, was_available)
        };

        tracing::debug!(
            robot_id = %self.id(),
            status = %snapshot.status(),
            battery = snapshot.battery(),
            "Refresh complete"
        );

        if snapshot.is_available() != was_available {
            self.inner.events.publish(RobotEvent::availability_changed(
                self.id().clone(),
                snapshot.is_available(),
            ));
        }
        self.inner.events.publish(RobotEvent::snapshot_updated(
            self.id().clone(),
            Arc::clone(&snapshot),
        ));

        Ok(snapshot)
    }

    fn maps_due(&self) -> bool {
        let cache = self.inner.cache.lock();
        cache.maps_requested
            || cache
                .maps_fetched_at
                .is_none_or(|at| at.elapsed() >= self.inner.config.maps_refresh_interval)
    }

    // ===== Commands =====

    /// Executes a command against the robot.
    ///
    /// `Start` is skipped while the cached status is cleaning and `Pause`
    /// while it is paused. `Start` while returning stops the return first.
    /// Zone names are resolved against the cached map catalog before
    /// anything is sent.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if a zone command does not match the
    /// cached catalog, or `Error::Execution` if the robot call failed.
    pub async fn execute(&self, command: RobotCommand) -> Result<CommandOutcome> {
        let _gate = self.inner.command_gate.lock().await;
        let current = self.snapshot();
        let name = command.name();

        let prediction = match command {
            RobotCommand::Start => {
                if current.status() == CanonicalStatus::Cleaning {
                    return Ok(self.skip(name));
                }
                let returning = current.status() == CanonicalStatus::Returning;
                self.send(name, move |robot| {
                    if returning {
                        robot.stop_clean()?;
                    }
                    robot.start_clean()
                })
                .await?;
                Some(StateChange::Status(CanonicalStatus::Cleaning))
            }
            RobotCommand::Pause => {
                if current.status() == CanonicalStatus::Paused {
                    return Ok(self.skip(name));
                }
                self.send(name, |robot| robot.pause_clean()).await?;
                Some(StateChange::Status(CanonicalStatus::Paused))
            }
            RobotCommand::Stop => {
                self.send(name, |robot| robot.stop_clean()).await?;
                Some(StateChange::Status(CanonicalStatus::Idle))
            }
            RobotCommand::ReturnToBase => {
                self.send(name, |robot| robot.go_home()).await?;
                Some(StateChange::Status(CanonicalStatus::Returning))
            }
            RobotCommand::SetFanSpeed(label) => {
                let mode = canonical_to_raw_fan_speed(&label);
                self.send(name, move |robot| robot.set_power_mode(mode)).await?;
                Some(StateChange::FanSpeed(fan_speed_to_canonical(
                    self.inner.vocabulary,
                    mode,
                )))
            }
            RobotCommand::CleanZones(params) => {
                let target = params.resolve(&current)?;
                self.send(name, move |robot| {
                    robot.clean_zones(&target.map_id, &target.zone_ids)
                })
                .await?;
                None
            }
        };

        if let Some(change) = prediction {
            self.apply_prediction(change);
        }

        Ok(CommandOutcome::Executed)
    }

    fn skip(&self, command: &'static str) -> CommandOutcome {
        tracing::debug!(robot_id = %self.id(), command, "Robot already in target state");
        CommandOutcome::Skipped
    }

    async fn send<F>(&self, command: &'static str, work: F) -> Result<()>
    where
        F: FnOnce(&dyn RobotClient) -> std::result::Result<(), TransportError> + Send + 'static,
    {
        let robot = Arc::clone(&self.inner.robot);
        run_blocking(Some(self.inner.config.command_timeout), move || {
            work(robot.as_ref())
        })
        .await
        .map_err(|e| {
            tracing::warn!(robot_id = %self.id(), command, error = %e, "Command failed");
            ExecutionError::new(command, e).into()
        })
    }

    fn apply_prediction(&self, change: StateChange) {
        let snapshot = {
            let mut cache = self.inner.cache.lock();
            let snapshot = Arc::new(cache.snapshot.with_prediction(&change));
            cache.snapshot = Arc::clone(&snapshot);
            cache.pending = Some(change);
            self.inner.snapshot_tx.send_replace(Arc::clone(&snapshot));
            snapshot
        };

        tracing::debug!(robot_id = %self.id(), %change, "Applied predicted state");
        self.inner.events.publish(RobotEvent::state_predicted(
            self.id().clone(),
            change,
            snapshot,
        ));
    }

    // ===== Polling =====

    /// Starts refreshing on the configured interval until `cancel` fires.
    ///
    /// The first refresh happens immediately. Failures are logged and the
    /// loop carries on.
    #[must_use = "dropping the handle detaches the polling task"]
    pub fn spawn_polling(&self, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(super::polling::poll_task(self.clone(), cancel))
    }
}

impl fmt::Debug for RobotCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RobotCoordinator")
            .field("identity", &self.inner.identity)
            .field("vocabulary", &self.inner.vocabulary)
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}
