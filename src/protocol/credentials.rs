// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Account credentials.

use std::fmt;

use serde::Deserialize;

/// Login credentials for the vendor cloud.
///
/// The password is never printed by `Debug`.
///
/// # Examples
///
/// ```
/// use purei9_lib::Credentials;
///
/// let credentials = Credentials::new("user@example.com", "hunter2", "SE");
///
/// assert_eq!(credentials.country_code(), "SE");
/// assert!(!format!("{credentials:?}").contains("hunter2"));
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    email: String,
    password: String,
    country_code: String,
}

impl Credentials {
    /// Creates credentials for an account in the given country.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            country_code: country_code.into(),
        }
    }

    /// Returns the account email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the account password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the two-letter country code selecting the cloud region.
    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.country_code
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("country_code", &self.country_code)
            .finish()
    }
}
