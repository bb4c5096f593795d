// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Maps and zones known to a robot.

use serde::{Deserialize, Serialize};

/// A named zone within a [`Map`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Zone {
    /// Vendor zone id, passed back to the robot when cleaning.
    pub id: String,
    /// Display name, used to look the zone up.
    pub name: String,
}

impl Zone {
    /// Creates a zone.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A stored map with its zones in robot order.
///
/// # Examples
///
/// ```
/// use purei9_lib::types::{Map, Zone};
///
/// let map = Map::new("m1", "Living Room")
///     .with_zone(Zone::new("1", "Sofa"))
///     .with_zone(Zone::new("2", "TV"));
///
/// assert_eq!(map.zone_ids_named(&["TV"]), vec!["2".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    /// Vendor map id.
    pub id: String,
    /// Display name, used to look the map up.
    pub name: String,
    /// Zones in the order the robot reports them.
    pub zones: Vec<Zone>,
}

impl Map {
    /// Creates a map without zones.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            zones: Vec::new(),
        }
    }

    /// Appends a zone.
    #[must_use]
    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zones.push(zone);
        self
    }

    /// Returns the ids of the zones whose name is in `names`.
    ///
    /// Matching is exact and case-sensitive. The result follows map order,
    /// not the order of `names`, and contains each zone at most once.
    #[must_use]
    pub fn zone_ids_named<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        self.zones
            .iter()
            .filter(|zone| names.iter().any(|n| n.as_ref() == zone.name))
            .map(|zone| zone.id.clone())
            .collect()
    }
}
