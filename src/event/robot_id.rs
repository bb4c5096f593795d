// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Robot identifier type.

use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a managed robot.
///
/// Wraps the id the vendor cloud assigns to each robot so it cannot be
/// confused with map or zone ids, which are strings too.
///
/// # Examples
///
/// ```
/// use purei9_lib::RobotId;
///
/// let id = RobotId::new("900277479937001234567890");
/// assert_eq!(id.as_str(), "900277479937001234567890");
/// assert_eq!(format!("{id:?}"), "RobotId(90027747...)");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RobotId(String);

impl RobotId {
    /// Creates a robot identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Vendor ids are long serial numbers
        match self.0.get(..8) {
            Some(short) if self.0.len() > 8 => write!(f, "RobotId({short}...)"),
            _ => write!(f, "RobotId({})", self.0),
        }
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RobotId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RobotId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Borrow<str> for RobotId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
