// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a transient toast notification overlay for the Iced GUI
//! framework.
//!
//! Notifications appear temporarily in a window corner to inform users about
//! actions (save success, errors, etc.) without blocking interaction. At most
//! five are visible at once; pushing a sixth evicts the oldest, and each one
//! auto-dismisses after its time-to-live (4 seconds unless overridden).
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for capping and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//! - [`config`] - Optional `settings.toml` preferences
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::{Corner, Manager, Notification, Toast};
//!
//! // Keep a manager in your application state
//! let mut manager = Manager::new();
//!
//! // Push a notification; the returned task drives its expiry
//! let task = manager.push(Notification::success("Image saved"));
//!
//! // In your view function, render the overlay on top of your content
//! let overlay = Toast::view_overlay(&manager, Corner::TopRight).map(Message::Notification);
//! ```

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod config;
pub mod design_tokens;
pub mod error;
pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::{Corner, Toast};
