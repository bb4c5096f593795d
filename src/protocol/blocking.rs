// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Blocking work executor.

use std::time::Duration;

use crate::error::TransportError;

/// Runs blocking transport work on tokio's blocking pool.
///
/// With a `deadline`, the caller stops waiting once it expires and gets
/// [`TransportError::Timeout`]. The work itself keeps running to completion
/// on its worker thread; its result is discarded.
///
/// # Errors
///
/// Returns the work's own error, `TransportError::Timeout` if the deadline
/// expired, or `TransportError::Worker` if the work panicked.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use purei9_lib::protocol::run_blocking;
///
/// # #[tokio::main]
/// # async fn main() {
/// let answer = run_blocking(Some(Duration::from_secs(1)), || Ok(42)).await;
/// assert_eq!(answer, Ok(42));
/// # }
/// ```
pub async fn run_blocking<T, F>(deadline: Option<Duration>, work: F) -> Result<T, TransportError>
where
    F: FnOnce() -> Result<T, TransportError> + Send + 'static,
    T: Send + 'static,
{
    let handle = tokio::task::spawn_blocking(work);

    let joined = match deadline {
        Some(deadline) => match tokio::time::timeout(deadline, handle).await {
            Ok(joined) => joined,
            Err(_) => {
                let millis = u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX);
                return Err(TransportError::Timeout(millis));
            }
        },
        None => handle.await,
    };

    joined.map_err(|e| TransportError::Worker(e.to_string()))?
}
