// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dustbin types.

use std::fmt;

/// Raw dustbin code as reported by the cloud API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DustbinStatus {
    /// No reading yet.
    Unset,
    /// The bin is in place.
    Connected,
    /// The bin slot is empty, i.e. the bin is missing.
    Empty,
    /// The bin is full.
    Full,
    /// A code this library does not know.
    Unknown(u8),
}

impl DustbinStatus {
    /// Creates a dustbin status from its numeric cloud code.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Unset,
            1 => Self::Connected,
            2 => Self::Empty,
            3 => Self::Full,
            other => Self::Unknown(other),
        }
    }
}

/// Canonical dustbin condition.
///
/// `Disconnected` and `Full` indicate an error; a snapshot carrying either
/// always reports [`CanonicalStatus::Error`](super::CanonicalStatus::Error).
///
/// # Examples
///
/// ```
/// use purei9_lib::types::DustbinCondition;
///
/// assert!(DustbinCondition::Full.is_error());
/// assert!(!DustbinCondition::Connected.is_error());
/// assert_eq!(DustbinCondition::Disconnected.to_string(), "Disconnected");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub enum DustbinCondition {
    /// The robot has not reported the bin yet.
    #[default]
    Unknown,
    /// The bin is in place.
    Connected,
    /// The bin is missing.
    Disconnected,
    /// The bin needs to be emptied.
    Full,
}

impl DustbinCondition {
    /// All conditions, usable as the option list of an enum sensor.
    pub const ALL: [Self; 4] = [Self::Unknown, Self::Connected, Self::Disconnected, Self::Full];

    /// Returns the condition name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
            Self::Full => "Full",
        }
    }

    /// Returns `true` if this condition overrides the robot status with an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Disconnected | Self::Full)
    }

    /// Returns the user-facing explanation for an error condition.
    #[must_use]
    pub const fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Disconnected => Some("The dustbin is missing"),
            Self::Full => Some("The dustbin needs to be emptied"),
            Self::Unknown | Self::Connected => None,
        }
    }
}

impl fmt::Display for DustbinCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_codes() {
        assert_eq!(DustbinStatus::from_code(0), DustbinStatus::Unset);
        assert_eq!(DustbinStatus::from_code(2), DustbinStatus::Empty);
        assert_eq!(DustbinStatus::from_code(9), DustbinStatus::Unknown(9));
    }

    #[test]
    fn only_missing_or_full_are_errors() {
        let errors: Vec<_> = DustbinCondition::ALL
            .into_iter()
            .filter(DustbinCondition::is_error)
            .collect();
        assert_eq!(
            errors,
            vec![DustbinCondition::Disconnected, DustbinCondition::Full]
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            DustbinCondition::Full.error_message(),
            Some("The dustbin needs to be emptied")
        );
        assert_eq!(DustbinCondition::Connected.error_message(), None);
    }
}
