// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cloud client traits.

use std::sync::Arc;

use super::Credentials;
use crate::error::TransportError;
use crate::types::{BatteryStatus, CleaningSession, DustbinStatus, Map, PowerMode, RobotState};

/// Account-level access to the vendor cloud.
pub trait CloudClient: Send + Sync + 'static {
    /// Checks the credentials against the cloud.
    ///
    /// Returns `Ok(false)` if the cloud rejected them.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the cloud could not be asked.
    fn try_login(&self, credentials: &Credentials) -> Result<bool, TransportError>;

    /// Lists the robots registered to the logged-in account.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the listing failed.
    fn robots(&self) -> Result<Vec<Arc<dyn RobotClient>>, TransportError>;
}

/// Blocking access to one robot.
///
/// Every method performs a cloud round trip and may fail with a
/// [`TransportError`].
#[allow(clippy::missing_errors_doc)]
pub trait RobotClient: Send + Sync + 'static {
    /// Vendor robot id.
    fn id(&self) -> Result<String, TransportError>;

    /// Current display name.
    fn name(&self) -> Result<String, TransportError>;

    /// Raw robot state.
    fn status(&self) -> Result<RobotState, TransportError>;

    /// Raw battery step.
    fn battery(&self) -> Result<BatteryStatus, TransportError>;

    /// Current raw power mode.
    fn power_mode(&self) -> Result<PowerMode, TransportError>;

    /// Power modes this robot accepts.
    fn supported_power_modes(&self) -> Result<Vec<PowerMode>, TransportError>;

    /// Raw dustbin state.
    fn dustbin(&self) -> Result<DustbinStatus, TransportError>;

    /// Whether the robot is currently connected to the cloud.
    fn is_connected(&self) -> Result<bool, TransportError>;

    /// Firmware version string.
    fn firmware(&self) -> Result<String, TransportError>;

    /// Stored maps with their zones.
    fn maps(&self) -> Result<Vec<Map>, TransportError>;

    /// Past cleaning sessions, most recent first.
    fn cleaning_sessions(&self) -> Result<Vec<CleaningSession>, TransportError>;

    /// Starts or resumes cleaning.
    fn start_clean(&self) -> Result<(), TransportError>;

    /// Stops cleaning.
    fn stop_clean(&self) -> Result<(), TransportError>;

    /// Pauses cleaning. Toggles on some firmware when already paused.
    fn pause_clean(&self) -> Result<(), TransportError>;

    /// Sends the robot back to its dock.
    fn go_home(&self) -> Result<(), TransportError>;

    /// Sets the suction power mode.
    fn set_power_mode(&self, mode: PowerMode) -> Result<(), TransportError>;

    /// Cleans the given zones of one map.
    fn clean_zones(&self, map_id: &str, zone_ids: &[String]) -> Result<(), TransportError>;
}
