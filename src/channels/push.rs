use crate::core::config::Configuration;
use crate::core::notification::Notification;
use crate::core::outbox::{Delivery, Outbox};
use crate::error::DeliveryError;

pub const APP_ID_KEY: &str = "appId";
pub const DEFAULT_APP_ID: &str = "com.example.app";

/// Push channel, addressed by application id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushNotification {
    app_id: String,
}

impl PushNotification {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
        }
    }

    pub fn from_config(config: &Configuration) -> Self {
        Self::new(config.get_or(APP_ID_KEY, DEFAULT_APP_ID))
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }
}

impl Notification for PushNotification {
    fn channel(&self) -> &str {
        "Push"
    }

    fn description(&self) -> String {
        format!("PushNotification (AppId: {})", self.app_id)
    }

    fn send(&self, recipient: &str, message: &str, outbox: &dyn Outbox) -> Result<(), DeliveryError> {
        outbox.record(Delivery::new(self.channel(), recipient, message).via(&self.app_id));
        Ok(())
    }
}
