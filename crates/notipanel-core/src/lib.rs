//! Data model behind the notifications panel.
//!
//! This crate holds everything about notifications that does not need a
//! window:
//! - The [`notification::Notification`] record and the hardcoded seed set.
//! - [`list::NotificationList`], the in-memory set with its read/delete
//!   actions.
//! - [`filter::NotificationFilter`] and its empty-state messages.
//! - Presentation tokens in [`style`] that the frontend maps onto theme
//!   colors and icons.
//! - [`config::PanelConfig`], the user-editable panel settings.

pub mod config;
pub mod filter;
pub mod list;
pub mod notification;
pub mod style;

pub use filter::NotificationFilter;
pub use list::{NotificationAction, NotificationList};
pub use notification::{Notification, NotificationId, NotificationType, Priority};
