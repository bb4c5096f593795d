// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone cleaning parameters.

use serde_json::Value;

use crate::error::ValidationError;
use crate::state::Snapshot;

/// Validated parameters of a `clean_zones` command.
///
/// Parsing only checks the shape of the parameters. Whether the map and
/// zones exist is decided later by [`CleanZonesParams::resolve`], against
/// the cached snapshot.
///
/// # Examples
///
/// ```
/// use purei9_lib::command::CleanZonesParams;
/// use serde_json::json;
///
/// let params = CleanZonesParams::from_params(&json!({
///     "map": "Living Room",
///     "zones": ["Sofa", "TV"],
/// }))
/// .unwrap();
/// assert_eq!(params.map, "Living Room");
/// assert_eq!(params.zones, vec!["Sofa", "TV"]);
///
/// let err = CleanZonesParams::from_params(&json!({})).unwrap_err();
/// assert_eq!(err.field(), Some("map"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanZonesParams {
    /// Name of the map to clean in.
    pub map: String,
    /// Names of the zones to clean. Never empty.
    pub zones: Vec<String>,
}

/// A map id and zone ids resolved from [`CleanZonesParams`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneTarget {
    /// Vendor id of the resolved map.
    pub map_id: String,
    /// Vendor ids of the resolved zones, in map order.
    pub zone_ids: Vec<String>,
}

impl CleanZonesParams {
    /// Creates parameters directly.
    pub fn new<I, S>(map: impl Into<String>, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            map: map.into(),
            zones: zones.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses host-supplied parameters.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first offending field, checked in
    /// the order `params`, `map`, `zones`.
    pub fn from_params(params: &Value) -> Result<Self, ValidationError> {
        let object = match params {
            Value::Object(object) => object,
            Value::Null => {
                return Err(ValidationError::MissingField {
                    field: "params",
                    expected: "object",
                });
            }
            other => {
                return Err(ValidationError::InvalidField {
                    field: "params",
                    reason: format!("expected an object, got {}", json_type(other)),
                });
            }
        };

        let map = match object.get("map") {
            None | Some(Value::Null) => {
                return Err(ValidationError::MissingField {
                    field: "map",
                    expected: "string",
                });
            }
            Some(Value::String(map)) => map.clone(),
            Some(other) => {
                return Err(ValidationError::InvalidField {
                    field: "map",
                    reason: format!("expected a string, got {}", json_type(other)),
                });
            }
        };

        let zones = match object.get("zones") {
            None | Some(Value::Null) => {
                return Err(ValidationError::MissingField {
                    field: "zones",
                    expected: "list of strings",
                });
            }
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(zone) => Ok(zone.clone()),
                    other => Err(ValidationError::InvalidField {
                        field: "zones",
                        reason: format!("expected zone names, got {}", json_type(other)),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(ValidationError::InvalidField {
                    field: "zones",
                    reason: format!("expected a list, got {}", json_type(other)),
                });
            }
        };

        if zones.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "zones",
                reason: "must name at least one zone".to_string(),
            });
        }

        Ok(Self { map, zones })
    }

    /// Resolves names to vendor ids against a snapshot's map catalog.
    ///
    /// Map and zone names match exactly and case-sensitively. Requested zones
    /// missing from the map are ignored as long as one matches.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MapNotFound` if no map has this name, or
    /// `ValidationError::NoMatchingZones` if none of the zones exist in it.
    pub fn resolve(&self, snapshot: &Snapshot) -> Result<ZoneTarget, ValidationError> {
        let map = snapshot
            .map_named(&self.map)
            .ok_or_else(|| ValidationError::MapNotFound {
                map: self.map.clone(),
            })?;

        let zone_ids = map.zone_ids_named(&self.zones);
        if zone_ids.is_empty() {
            return Err(ValidationError::NoMatchingZones {
                map: self.map.clone(),
            });
        }

        Ok(ZoneTarget {
            map_id: map.id.clone(),
            zone_ids,
        })
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
