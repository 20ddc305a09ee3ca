use thiserror::Error;

/// Errors raised while turning a key and a [`Configuration`](crate::Configuration)
/// into a notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    /// No constructor is registered under this key, or the name does not
    /// match any [`NotificationKind`](crate::NotificationKind).
    #[error("No creator registered for key: {key}")]
    UnknownKind { key: String },

    /// A constructor rejected its configuration.
    #[error("Invalid configuration for '{key}': {reason}")]
    InvalidConfig { key: String, reason: String },
}

impl FactoryError {
    pub fn unknown_kind(key: impl Into<String>) -> Self {
        Self::UnknownKind { key: key.into() }
    }

    pub fn invalid_config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by [`Notification::send`](crate::Notification::send).
///
/// The built-in channels only report to an outbox and never fail. A channel
/// backed by a real transport returns `ActionFailed` when delivery does not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("Delivery failed: {reason}")]
    ActionFailed { reason: String },
}

impl DeliveryError {
    pub fn action_failed(reason: impl Into<String>) -> Self {
        Self::ActionFailed {
            reason: reason.into(),
        }
    }
}
