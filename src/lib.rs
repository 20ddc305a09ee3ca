//! # notifactory
//!
//! Factory-pattern construction of notification channels.
//!
//! ## Features
//!
//! - **Open registry**: map a case-insensitive key to a constructor closure and add
//!   new channels at runtime without touching dispatch code
//! - **Closed factory**: an exhaustive `match` over [`NotificationKind`] for when the
//!   set of channels is fixed
//! - **Shared registry**: the same registry behind a read-write lock, plus an opt-in
//!   process-wide instance
//! - **Observable sends**: channels report every delivery to an [`Outbox`] instead of a
//!   real transport
//!
//! ## Quick Start
//!
//! ```rust
//! use notifactory::prelude::*;
//!
//! let mut registry = NotificationRegistry::with_defaults();
//! registry.register("slack", |config: &Configuration| {
//!     let hook = WebhookNotification::new(
//!         "Slack",
//!         config.get_or("webhook", "https://hooks.slack.com/default"),
//!     )?;
//!     Ok(Box::new(hook) as Box<dyn Notification>)
//! });
//!
//! let outbox = MemoryOutbox::new();
//! let sms = registry
//!     .create("SMS", &Configuration::new().with("provider", "Nexmo"))
//!     .unwrap();
//! sms.send("+919876543210", "This is an SMS notification.", &outbox).unwrap();
//!
//! assert_eq!(sms.description(), "SMSNotification (Provider: Nexmo)");
//! assert_eq!(outbox.len(), 1);
//! ```
//!
//! ## Module Organization
//!
//! - [`channels`]: Built-in channels and helpers for runtime-defined ones
//! - [`prelude`]: Commonly used types and traits (import with `use notifactory::prelude::*`)

// ============================================================================
// Core Module
// ============================================================================

mod core;
mod error;

pub mod channels;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use crate::core::config::Configuration;
pub use crate::core::factory::{NotificationFactory, NotificationKind};
pub use crate::core::notification::{AsAny, Notification};
pub use crate::core::outbox::{ConsoleOutbox, Delivery, LogOutbox, MemoryOutbox, Outbox};
pub use crate::core::registry::{Constructor, NotificationRegistry, SharedRegistry};
pub use crate::error::{DeliveryError, FactoryError};

// ============================================================================
// Prelude
// ============================================================================

/// Everything needed to register, create and send.
///
/// # Example
/// ```rust
/// use notifactory::prelude::*;
/// ```
pub mod prelude {
    pub use super::channels::{
        CustomNotification, EmailNotification, PushNotification, SmsNotification,
        WebhookNotification,
    };
    pub use super::{
        Configuration, ConsoleOutbox, Delivery, DeliveryError, FactoryError, LogOutbox,
        MemoryOutbox, Notification, NotificationFactory, NotificationKind, NotificationRegistry,
        Outbox, SharedRegistry,
    };
}

// ============================================================================
// Library Metadata
// ============================================================================

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate.
pub const NAME: &str = env!("CARGO_PKG_NAME");
