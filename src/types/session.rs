// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cleaning session records.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// A finished cleaning run.
///
/// The cloud reports when a run ended and how long it lasted; the start time
/// is derived.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use purei9_lib::types::CleaningSession;
///
/// let end = Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();
/// let session = CleaningSession::new(end, 1800);
///
/// assert_eq!(session.start_time(), Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningSession {
    end_time: DateTime<Utc>,
    duration_seconds: u32,
}

impl CleaningSession {
    /// Creates a session from its end time and duration in seconds.
    #[must_use]
    pub const fn new(end_time: DateTime<Utc>, duration_seconds: u32) -> Self {
        Self {
            end_time,
            duration_seconds,
        }
    }

    /// When the run ended.
    #[must_use]
    pub const fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    /// How long the run lasted.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        TimeDelta::seconds(i64::from(self.duration_seconds))
    }

    /// Duration in whole seconds.
    #[must_use]
    pub const fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// When the run started, `end_time - duration`.
    #[must_use]
    pub fn start_time(&self) -> DateTime<Utc> {
        self.end_time - self.duration()
    }
}
