//! # AWSomeShop Application Layer
//!
//! Wires the session, transport, and endpoint layers together behind an
//! explicit dependency-injection context, and exposes the page-level
//! operations an embedding shell drives.
//!
//! This crate contains:
//! - [`context::AppContext`] - the DI container, constructed once at start
//! - [`navigation::NavigationState`] - current route + guard-driven moves
//! - [`notifications::NotificationCenter`] - the shared toast queue
//! - [`commands`] - one thin async function per page operation

pub mod commands;
pub mod context;
pub mod navigation;
pub mod notifications;

pub use context::AppContext;
pub use navigation::NavigationState;
pub use notifications::{Notification, NotificationCenter, NotificationKind};
