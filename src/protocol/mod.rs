// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The seam between this library and the vendor cloud.
//!
//! The library does not talk to the cloud itself. A host provides a
//! [`CloudClient`] that logs in and lists robots, and one [`RobotClient`]
//! per robot that reads raw state and issues commands. Both traits are
//! blocking: implementations are expected to wrap a synchronous HTTP
//! client.
//!
//! Every call made by the library goes through [`run_blocking`], which moves
//! it onto tokio's blocking pool so slow cloud calls never stall the async
//! runtime or other robots.

mod blocking;
mod client;
mod credentials;

pub use blocking::run_blocking;
pub use client::{CloudClient, RobotClient};
pub use credentials::Credentials;
