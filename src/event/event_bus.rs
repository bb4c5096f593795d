// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event bus for broadcasting robot events.

use tokio::sync::broadcast;

use super::RobotEvent;

/// Default channel capacity for the event bus.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Broadcasts [`RobotEvent`]s to any number of subscribers.
///
/// Backed by a tokio broadcast channel. A subscriber that falls more than
/// the channel capacity behind loses the oldest events and receives
/// `RecvError::Lagged`.
///
/// Cloning the bus yields another handle to the same channel.
///
/// # Examples
///
/// ```
/// use purei9_lib::RobotId;
/// use purei9_lib::event::{EventBus, RobotEvent};
///
/// let bus = EventBus::new();
/// let _rx = bus.subscribe();
///
/// assert_eq!(bus.publish_counted(RobotEvent::robot_added(RobotId::new("r1"))), 1);
/// ```
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<RobotEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a new event bus buffering up to `capacity` events.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribes to events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RobotEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes an event to all subscribers.
    ///
    /// Without subscribers the event is discarded.
    pub fn publish(&self, event: RobotEvent) {
        // No subscribers is not an error
        let _ = self.sender.send(event);
    }

    /// Publishes an event and returns how many subscribers received it.
    #[must_use]
    pub fn publish_counted(&self, event: RobotEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
