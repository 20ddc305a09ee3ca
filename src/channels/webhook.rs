use crate::core::config::Configuration;
use crate::core::notification::Notification;
use crate::core::outbox::{Delivery, Outbox};
use crate::error::{DeliveryError, FactoryError};

pub const WEBHOOK_KEY: &str = "webhook";
pub const LABEL_KEY: &str = "label";
pub const DEFAULT_WEBHOOK: &str = "https://hooks.slack.com/default";
pub const DEFAULT_LABEL: &str = "Webhook";

/// Webhook-backed channel (Slack, Teams and similar).
///
/// Not seeded into the default registry; callers register it under whatever
/// key they like, e.g. `"slack"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookNotification {
    label: String,
    webhook: String,
}

impl WebhookNotification {
    /// Fails with [`FactoryError::InvalidConfig`] unless `webhook` is an http(s) URL.
    pub fn new(label: impl Into<String>, webhook: impl Into<String>) -> Result<Self, FactoryError> {
        let webhook = webhook.into();
        if !(webhook.starts_with("https://") || webhook.starts_with("http://")) {
            return Err(FactoryError::invalid_config(
                WEBHOOK_KEY,
                format!("'{}' is not an http(s) URL", webhook),
            ));
        }
        Ok(Self {
            label: label.into(),
            webhook,
        })
    }

    pub fn from_config(config: &Configuration) -> Result<Self, FactoryError> {
        Self::new(
            config.get_or(LABEL_KEY, DEFAULT_LABEL),
            config.get_or(WEBHOOK_KEY, DEFAULT_WEBHOOK),
        )
    }

    pub fn webhook(&self) -> &str {
        &self.webhook
    }
}

impl Notification for WebhookNotification {
    fn channel(&self) -> &str {
        &self.label
    }

    fn description(&self) -> String {
        format!("{}Notification (webhook: {})", self.label, self.webhook)
    }

    fn send(&self, recipient: &str, message: &str, outbox: &dyn Outbox) -> Result<(), DeliveryError> {
        outbox.record(Delivery::new(self.channel(), recipient, message).via(&self.webhook));
        Ok(())
    }
}
