// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the list of currently visible notifications. It caps
//! how many are shown at once (evicting the oldest when full) and schedules
//! the one-shot expiry timer for each notification it accepts.

use crate::notification::{Notification, NotificationId, DEFAULT_DURATION};
use iced::Task;
use std::collections::VecDeque;
use std::time::Duration;

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 5;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// A notification's expiry timer fired.
    Expired(NotificationId),
}

/// Manages the visible notifications and their bounded, ordered display.
///
/// Visible notifications are kept oldest-first. When the cap is reached, the
/// oldest one is evicted before a new one is appended, so the count never
/// exceeds [`MAX_VISIBLE`] (or the configured capacity) after an insertion.
#[derive(Debug)]
pub struct Manager {
    /// Currently visible notifications (oldest first).
    visible: VecDeque<Notification>,
    /// Upper bound on simultaneously visible notifications.
    capacity: usize,
    /// Time-to-live for notifications without an explicit duration.
    default_ttl: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates a new empty manager with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MAX_VISIBLE)
    }

    /// Creates a new empty manager holding at most `capacity` notifications.
    ///
    /// A zero capacity is bumped to one so that a pushed notification is
    /// always displayed.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_settings(capacity, DEFAULT_DURATION)
    }

    /// Creates a new empty manager with an explicit capacity and default
    /// time-to-live, typically taken from [`crate::config::Config`].
    #[must_use]
    pub fn with_settings(capacity: usize, default_ttl: Duration) -> Self {
        Self {
            visible: VecDeque::new(),
            capacity: capacity.max(1),
            default_ttl,
        }
    }

    /// Pushes a new notification and schedules its expiry.
    ///
    /// If the manager is already at capacity, the oldest visible notification
    /// is evicted first. The returned task sleeps for the notification's
    /// time-to-live and then emits [`Message::Expired`]; feed that message
    /// back into [`handle_message`](Self::handle_message).
    pub fn push(&mut self, notification: Notification) -> Task<Message> {
        let id = notification.id();
        let ttl = notification.time_to_live_or(self.default_ttl);
        self.insert(notification);
        Self::expiry_task(id, ttl)
    }

    /// Inserts a notification, evicting the oldest one if at capacity.
    ///
    /// This is the synchronous half of [`push`](Self::push); it does not
    /// schedule an expiry timer.
    pub fn insert(&mut self, notification: Notification) {
        if self.visible.len() >= self.capacity {
            self.visible.pop_front();
        }
        self.visible.push_back(notification);
    }

    /// Removes the notification with the given ID, if it is still visible.
    ///
    /// Returns `true` if the notification was found and removed. A
    /// notification already evicted by a later insertion is simply gone and
    /// this is a no-op.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            true
        } else {
            false
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Expired(id) => {
                self.expire(id);
            }
        }
    }

    /// Returns the currently visible notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the capacity this manager was configured with.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns whether any notifications are visible.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }

    /// Clears all visible notifications.
    ///
    /// Pending expiry timers still fire afterwards; their messages become
    /// guarded no-ops.
    pub fn clear(&mut self) {
        self.visible.clear();
    }

    /// Builds the one-shot timer that expires a notification.
    fn expiry_task(id: NotificationId, ttl: Duration) -> Task<Message> {
        Task::perform(tokio::time::sleep(ttl), move |()| Message::Expired(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
        assert_eq!(manager.capacity(), MAX_VISIBLE);
    }

    #[test]
    fn insert_adds_to_visible() {
        let mut manager = Manager::new();
        manager.insert(Notification::success("test"));

        assert_eq!(manager.visible_count(), 1);
        assert!(manager.has_notifications());
    }

    #[test]
    fn insert_keeps_oldest_first_order() {
        let mut manager = Manager::new();
        for i in 0..3 {
            manager.insert(Notification::info(format!("m{i}")));
        }

        let messages: Vec<&str> = manager.visible().map(Notification::message).collect();
        assert_eq!(messages, ["m0", "m1", "m2"]);
    }

    #[test]
    fn insert_at_capacity_evicts_oldest() {
        let mut manager = Manager::new();
        for i in 1..=6 {
            manager.insert(Notification::info(format!("m{i}")));
        }

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        let messages: Vec<&str> = manager.visible().map(Notification::message).collect();
        assert_eq!(messages, ["m2", "m3", "m4", "m5", "m6"]);
    }

    #[test]
    fn count_never_exceeds_capacity_after_insert() {
        let mut manager = Manager::with_capacity(5);
        for i in 0..20 {
            manager.insert(Notification::warning(format!("m{i}")));
            assert!(manager.visible_count() <= 5);
        }
    }

    #[test]
    fn eviction_removes_first_inserted_regardless_of_duration() {
        // The longest-duration notification is first; eviction still takes it.
        let mut manager = Manager::new();
        let long_lived = Notification::info("long").duration(Duration::from_secs(60));
        let long_id = long_lived.id();
        manager.insert(long_lived);
        for i in 0..MAX_VISIBLE {
            manager.insert(Notification::info(format!("short{i}")));
        }

        assert!(manager.visible().all(|n| n.id() != long_id));
    }

    #[test]
    fn expire_removes_matching_notification() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();
        manager.insert(notification);

        assert!(manager.expire(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn expire_after_eviction_is_noop() {
        let mut manager = Manager::with_capacity(1);
        let first = Notification::info("first");
        let first_id = first.id();
        manager.insert(first);
        manager.insert(Notification::info("second"));

        // The first notification was evicted; its timer firing changes nothing.
        assert!(!manager.expire(first_id));
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.visible().next().map(Notification::message), Some("second"));
    }

    #[test]
    fn expire_only_removes_the_target() {
        let mut manager = Manager::new();
        let keep = Notification::info("keep");
        let drop = Notification::info("drop");
        let drop_id = drop.id();
        manager.insert(keep);
        manager.insert(drop);

        manager.handle_message(Message::Expired(drop_id));
        let messages: Vec<&str> = manager.visible().map(Notification::message).collect();
        assert_eq!(messages, ["keep"]);
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let mut manager = Manager::with_capacity(0);
        manager.insert(Notification::error("still shown"));
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..3 {
            manager.insert(Notification::success(format!("m{i}")));
        }

        manager.clear();
        assert_eq!(manager.visible_count(), 0);
    }

    #[tokio::test]
    async fn push_schedules_expiry() {
        let mut manager = Manager::new();
        let notification = Notification::success("short").duration(Duration::from_millis(10));
        let id = notification.id();
        let _task = manager.push(notification);

        // The task is driven by the Iced runtime in production; here we just
        // replicate its effect after the time-to-live elapses.
        tokio::time::sleep(Duration::from_millis(10)).await;
        manager.handle_message(Message::Expired(id));
        assert_eq!(manager.visible_count(), 0);
    }
}
