use crate::channels::{EmailNotification, PushNotification, SmsNotification};
use crate::core::config::Configuration;
use crate::core::notification::Notification;
use crate::error::FactoryError;
use std::fmt;
use std::str::FromStr;

/// The closed set of built-in notification kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Email,
    Sms,
    Push,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 3] = [
        NotificationKind::Email,
        NotificationKind::Sms,
        NotificationKind::Push,
    ];

    /// Canonical registry key for this kind.
    pub fn key(self) -> &'static str {
        match self {
            NotificationKind::Email => "email",
            NotificationKind::Sms => "sms",
            NotificationKind::Push => "push",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for NotificationKind {
    type Err = FactoryError;

    /// Parses a kind name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        NotificationKind::ALL
            .into_iter()
            .find(|kind| kind.key() == normalized)
            .ok_or_else(|| FactoryError::unknown_kind(s))
    }
}

/// Closed factory: an exhaustive dispatch over [`NotificationKind`].
///
/// Use it when the set of channels is fixed at compile time. For runtime
/// extension use [`NotificationRegistry`](crate::NotificationRegistry).
pub struct NotificationFactory;

impl NotificationFactory {
    pub fn create(kind: NotificationKind, config: &Configuration) -> Box<dyn Notification> {
        match kind {
            NotificationKind::Email => Box::new(EmailNotification::from_config(config)),
            NotificationKind::Sms => Box::new(SmsNotification::from_config(config)),
            NotificationKind::Push => Box::new(PushNotification::from_config(config)),
        }
    }

    /// Parses `name` into a [`NotificationKind`] first, failing with
    /// [`FactoryError::UnknownKind`] for anything outside the enumeration.
    pub fn create_by_name(
        name: &str,
        config: &Configuration,
    ) -> Result<Box<dyn Notification>, FactoryError> {
        let kind = name.parse::<NotificationKind>()?;
        Ok(Self::create(kind, config))
    }
}
