// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the toast system.

use crate::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Time-to-live applied when a notification carries no usable duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the accent color of the rendered toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Positive confirmation (green).
    #[default]
    Success,
    /// Failure condition (red).
    Error,
    /// Caution (orange).
    Warning,
    /// Neutral information (blue).
    Info,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Info => palette::INFO_500,
        }
    }

    /// Returns the glyph drawn next to the message for this severity.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "\u{2713}", // check mark
            Severity::Error => "\u{2715}",   // multiplication x
            Severity::Warning => "!",
            Severity::Info => "i",
        }
    }
}

/// A transient message to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity level (determines the accent color).
    severity: Severity,
    /// The display text. Rendered as-is; never validated.
    message: String,
    /// When this notification was created.
    created_at: Instant,
    /// Custom time-to-live, overriding [`DEFAULT_DURATION`].
    duration: Option<Duration>,
}

impl Notification {
    /// Creates a new notification with the given severity and message text.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: Instant::now(),
            duration: None,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Sets a custom time-to-live for this notification.
    ///
    /// A zero duration is treated as "not provided" and falls back to
    /// [`DEFAULT_DURATION`], mirroring the behavior of callers that pass a
    /// falsy value where a duration is expected.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the effective time-to-live: the custom duration if set and
    /// non-zero, otherwise [`DEFAULT_DURATION`].
    #[must_use]
    pub fn time_to_live(&self) -> Duration {
        self.time_to_live_or(DEFAULT_DURATION)
    }

    /// Returns the custom duration if set and non-zero, otherwise `default`.
    #[must_use]
    pub fn time_to_live_or(&self, default: Duration) -> Duration {
        self.duration.filter(|d| !d.is_zero()).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let success = Severity::Success.color();
        let error = Severity::Error.color();
        let warning = Severity::Warning.color();
        let info = Severity::Info.color();

        assert_ne!(success, error);
        assert_ne!(success, warning);
        assert_ne!(success, info);
        assert_ne!(error, warning);
        assert_ne!(error, info);
        assert_ne!(warning, info);
    }

    #[test]
    fn default_time_to_live_is_four_seconds() {
        let notification = Notification::info("test");
        assert_eq!(notification.time_to_live(), DEFAULT_DURATION);
    }

    #[test]
    fn custom_duration_overrides_default() {
        let notification = Notification::info("test").duration(Duration::from_millis(250));
        assert_eq!(notification.time_to_live(), Duration::from_millis(250));
    }

    #[test]
    fn zero_duration_falls_back_to_default() {
        let notification = Notification::info("test").duration(Duration::ZERO);
        assert_eq!(notification.time_to_live(), DEFAULT_DURATION);
    }

    #[test]
    fn notification_constructors_set_correct_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::error("").severity(), Severity::Error);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
        assert_eq!(Notification::info("").severity(), Severity::Info);
    }

    #[test]
    fn message_text_is_stored_verbatim() {
        let notification = Notification::success("Saved");
        assert_eq!(notification.message(), "Saved");
    }
}
