use crate::core::config::Configuration;
use crate::core::notification::Notification;
use crate::core::outbox::{Delivery, Outbox};
use crate::error::DeliveryError;

pub const PROVIDER_KEY: &str = "provider";
pub const DEFAULT_PROVIDER: &str = "Twilio";

/// SMS channel, parameterized by gateway provider name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsNotification {
    provider: String,
}

impl SmsNotification {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
        }
    }

    pub fn from_config(config: &Configuration) -> Self {
        Self::new(config.get_or(PROVIDER_KEY, DEFAULT_PROVIDER))
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }
}

impl Notification for SmsNotification {
    fn channel(&self) -> &str {
        "SMS"
    }

    fn description(&self) -> String {
        format!("SMSNotification (Provider: {})", self.provider)
    }

    fn send(&self, recipient: &str, message: &str, outbox: &dyn Outbox) -> Result<(), DeliveryError> {
        outbox.record(Delivery::new(self.channel(), recipient, message).via(&self.provider));
        Ok(())
    }
}
