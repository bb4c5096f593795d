// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory cloud and robot fakes shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use purei9_lib::{
    BatteryStatus, CleaningSession, CloudClient, CoordinatorConfig, Credentials, DustbinStatus,
    EventBus, FanSpeedVocabulary, Map, PowerMode, RobotClient, RobotCoordinator, RobotId,
    RobotIdentity, RobotState, TransportError, Zone,
};

/// Raw state the fake robot reports.
#[derive(Debug, Clone)]
pub struct RobotData {
    pub id: String,
    pub name: String,
    pub status: RobotState,
    pub battery: BatteryStatus,
    pub dustbin: DustbinStatus,
    pub power_mode: PowerMode,
    pub supported_modes: Vec<PowerMode>,
    pub connected: bool,
    pub firmware: String,
    pub maps: Vec<Map>,
    pub sessions: Vec<CleaningSession>,
}

impl Default for RobotData {
    fn default() -> Self {
        Self {
            id: "robot-1".to_string(),
            name: "Robbie".to_string(),
            status: RobotState::Charging,
            battery: BatteryStatus::Normal,
            dustbin: DustbinStatus::Connected,
            power_mode: PowerMode::Medium,
            supported_modes: vec![PowerMode::Low, PowerMode::Medium, PowerMode::High],
            connected: true,
            firmware: "42.19".to_string(),
            maps: vec![living_room()],
            sessions: vec![CleaningSession::new(
                Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
                1800,
            )],
        }
    }
}

/// The map used throughout the tests: `Living Room` with `Sofa` (1) and `TV` (2).
pub fn living_room() -> Map {
    Map::new("map-1", "Living Room")
        .with_zone(Zone::new("1", "Sofa"))
        .with_zone(Zone::new("2", "TV"))
}

/// A recorded call to the fake robot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Status,
    Maps,
    Sessions,
    StartClean,
    StopClean,
    PauseClean,
    GoHome,
    SetPowerMode(PowerMode),
    CleanZones { map_id: String, zone_ids: Vec<String> },
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::Status | Self::Maps | Self::Sessions)
    }
}

/// A scripted robot that records every call.
#[derive(Debug, Default)]
pub struct FakeRobot {
    data: Mutex<RobotData>,
    calls: Mutex<Vec<Call>>,
    status_delay: Mutex<Option<Duration>>,
    status_error: Mutex<Option<TransportError>>,
    maps_error: Mutex<Option<TransportError>>,
    sessions_error: Mutex<Option<TransportError>>,
    mutation_error: Mutex<Option<TransportError>>,
}

impl FakeRobot {
    pub fn new(data: RobotData) -> Arc<Self> {
        Arc::new(Self {
            data: Mutex::new(data),
            ..Self::default()
        })
    }

    pub fn update(&self, f: impl FnOnce(&mut RobotData)) {
        f(&mut self.data.lock());
    }

    pub fn delay_status(&self, delay: Duration) {
        *self.status_delay.lock() = Some(delay);
    }

    pub fn fail_status(&self, error: Option<TransportError>) {
        *self.status_error.lock() = error;
    }

    pub fn fail_maps(&self, error: Option<TransportError>) {
        *self.maps_error.lock() = error;
    }

    pub fn fail_sessions(&self, error: Option<TransportError>) {
        *self.sessions_error.lock() = error;
    }

    pub fn fail_mutations(&self, error: Option<TransportError>) {
        *self.mutation_error.lock() = error;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.lock().iter().filter(|c| *c == call).count()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.is_mutation())
            .cloned()
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }

    fn mutate(&self, call: Call) -> Result<(), TransportError> {
        self.record(call);
        match self.mutation_error.lock().clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl RobotClient for FakeRobot {
    fn id(&self) -> Result<String, TransportError> {
        Ok(self.data.lock().id.clone())
    }

    fn name(&self) -> Result<String, TransportError> {
        Ok(self.data.lock().name.clone())
    }

    fn status(&self) -> Result<RobotState, TransportError> {
        self.record(Call::Status);
        let delay = *self.status_delay.lock();
        if let Some(delay) = delay {
            std::thread::sleep(delay);
        }
        if let Some(e) = self.status_error.lock().clone() {
            return Err(e);
        }
        Ok(self.data.lock().status)
    }

    fn battery(&self) -> Result<BatteryStatus, TransportError> {
        Ok(self.data.lock().battery)
    }

    fn power_mode(&self) -> Result<PowerMode, TransportError> {
        Ok(self.data.lock().power_mode)
    }

    fn supported_power_modes(&self) -> Result<Vec<PowerMode>, TransportError> {
        Ok(self.data.lock().supported_modes.clone())
    }

    fn dustbin(&self) -> Result<DustbinStatus, TransportError> {
        Ok(self.data.lock().dustbin)
    }

    fn is_connected(&self) -> Result<bool, TransportError> {
        Ok(self.data.lock().connected)
    }

    fn firmware(&self) -> Result<String, TransportError> {
        Ok(self.data.lock().firmware.clone())
    }

    fn maps(&self) -> Result<Vec<Map>, TransportError> {
        self.record(Call::Maps);
        if let Some(e) = self.maps_error.lock().clone() {
            return Err(e);
        }
        Ok(self.data.lock().maps.clone())
    }

    fn cleaning_sessions(&self) -> Result<Vec<CleaningSession>, TransportError> {
        self.record(Call::Sessions);
        if let Some(e) = self.sessions_error.lock().clone() {
            return Err(e);
        }
        Ok(self.data.lock().sessions.clone())
    }

    fn start_clean(&self) -> Result<(), TransportError> {
        self.mutate(Call::StartClean)
    }

    fn stop_clean(&self) -> Result<(), TransportError> {
        self.mutate(Call::StopClean)
    }

    fn pause_clean(&self) -> Result<(), TransportError> {
        self.mutate(Call::PauseClean)
    }

    fn go_home(&self) -> Result<(), TransportError> {
        self.mutate(Call::GoHome)
    }

    fn set_power_mode(&self, mode: PowerMode) -> Result<(), TransportError> {
        self.mutate(Call::SetPowerMode(mode))
    }

    fn clean_zones(&self, map_id: &str, zone_ids: &[String]) -> Result<(), TransportError> {
        self.mutate(Call::CleanZones {
            map_id: map_id.to_string(),
            zone_ids: zone_ids.to_vec(),
        })
    }
}

/// A cloud account holding a fixed list of robots.
pub struct FakeCloud {
    pub accept_login: bool,
    pub robots: Vec<Arc<FakeRobot>>,
    pub logins: Mutex<Vec<Credentials>>,
}

impl FakeCloud {
    pub fn new(robots: Vec<Arc<FakeRobot>>) -> Arc<Self> {
        Arc::new(Self {
            accept_login: true,
            robots,
            logins: Mutex::new(Vec::new()),
        })
    }

    pub fn rejecting() -> Arc<Self> {
        Arc::new(Self {
            accept_login: false,
            robots: Vec::new(),
            logins: Mutex::new(Vec::new()),
        })
    }
}

impl CloudClient for FakeCloud {
    fn try_login(&self, credentials: &Credentials) -> Result<bool, TransportError> {
        self.logins.lock().push(credentials.clone());
        Ok(self.accept_login)
    }

    fn robots(&self) -> Result<Vec<Arc<dyn RobotClient>>, TransportError> {
        Ok(self
            .robots
            .iter()
            .map(|robot| Arc::clone(robot) as Arc<dyn RobotClient>)
            .collect())
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("user@example.com", "hunter2", "SE")
}

/// Builds a coordinator directly, bypassing discovery.
pub fn coordinator(robot: &Arc<FakeRobot>, config: CoordinatorConfig) -> RobotCoordinator {
    coordinator_with_events(robot, config, EventBus::new())
}

pub fn coordinator_with_events(
    robot: &Arc<FakeRobot>,
    config: CoordinatorConfig,
    events: EventBus,
) -> RobotCoordinator {
    let data = robot.data.lock().clone();
    let vocabulary = if data.supported_modes.len() == 3 {
        FanSpeedVocabulary::V2
    } else {
        FanSpeedVocabulary::Legacy
    };
    RobotCoordinator::new(
        RobotIdentity::new(RobotId::new(data.id), data.name),
        vocabulary,
        Arc::clone(robot) as Arc<dyn RobotClient>,
        config,
        events,
    )
}
