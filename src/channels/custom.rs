use crate::core::notification::Notification;
use crate::core::outbox::{Delivery, Outbox};
use crate::error::DeliveryError;
use std::sync::Arc;

type SendFn = dyn Fn(&str, &str) -> Result<Delivery, DeliveryError> + Send + Sync;

/// A channel assembled from a closure, for ad-hoc variants registered at runtime
/// without declaring a new type.
#[derive(Clone)]
pub struct CustomNotification {
    channel: String,
    description: String,
    send: Arc<SendFn>,
}

impl CustomNotification {
    /// `send` builds the delivery for a `(recipient, message)` pair, or fails.
    pub fn new<F>(channel: impl Into<String>, description: impl Into<String>, send: F) -> Self
    where
        F: Fn(&str, &str) -> Result<Delivery, DeliveryError> + Send + Sync + 'static,
    {
        Self {
            channel: channel.into(),
            description: description.into(),
            send: Arc::new(send),
        }
    }

    /// A channel whose deliveries carry only its label, recipient and message.
    pub fn plain(channel: impl Into<String>, description: impl Into<String>) -> Self {
        let label: String = channel.into();
        let tag = label.clone();
        Self::new(label, description, move |recipient, message| {
            Ok(Delivery::new(tag.as_str(), recipient, message))
        })
    }
}

impl Notification for CustomNotification {
    fn channel(&self) -> &str {
        &self.channel
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn send(&self, recipient: &str, message: &str, outbox: &dyn Outbox) -> Result<(), DeliveryError> {
        let delivery = (self.send)(recipient, message)?;
        outbox.record(delivery);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::outbox::MemoryOutbox;

    #[test]
    fn test_plain_channel() {
        let logger = CustomNotification::plain("ConsoleLogger", "ConsoleLoggerNotification");
        let outbox = MemoryOutbox::new();
        logger.send("DevOps", "Deployment completed successfully.", &outbox).unwrap();

        assert_eq!(logger.description(), "ConsoleLoggerNotification");
        assert_eq!(
            outbox.deliveries()[0].to_string(),
            "[ConsoleLogger -> DevOps]: Deployment completed successfully."
        );
    }

    #[test]
    fn test_failed_send_records_nothing() {
        let flaky = CustomNotification::new("Pager", "PagerNotification", |_, _| {
            Err(DeliveryError::action_failed("gateway unreachable"))
        });
        let outbox = MemoryOutbox::new();

        let err = flaky.send("oncall", "disk full", &outbox).unwrap_err();
        assert_eq!(err, DeliveryError::action_failed("gateway unreachable"));
        assert!(outbox.is_empty());
    }
}
