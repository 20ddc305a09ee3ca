//! Concrete notification channels.
//!
//! [`EmailNotification`], [`SmsNotification`] and [`PushNotification`] are the
//! built-in kinds seeded into every default registry. [`WebhookNotification`]
//! and [`CustomNotification`] are building blocks for variants registered at runtime.

pub mod custom;
pub mod email;
pub mod push;
pub mod sms;
pub mod webhook;

pub use custom::CustomNotification;
pub use email::EmailNotification;
pub use push::PushNotification;
pub use sms::SmsNotification;
pub use webhook::WebhookNotification;
