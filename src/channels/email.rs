use crate::core::config::Configuration;
use crate::core::notification::Notification;
use crate::core::outbox::{Delivery, Outbox};
use crate::error::DeliveryError;

/// Configuration key holding the SMTP server address.
pub const SMTP_KEY: &str = "smtp";
pub const DEFAULT_SMTP_SERVER: &str = "smtp.example.com";

/// Email channel. A real deployment would hand off to an SMTP client; this one
/// reports to the outbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailNotification {
    smtp_server: String,
}

impl EmailNotification {
    pub fn new(smtp_server: impl Into<String>) -> Self {
        Self {
            smtp_server: smtp_server.into(),
        }
    }

    /// Reads `smtp`, defaulting to [`DEFAULT_SMTP_SERVER`].
    pub fn from_config(config: &Configuration) -> Self {
        Self::new(config.get_or(SMTP_KEY, DEFAULT_SMTP_SERVER))
    }

    pub fn smtp_server(&self) -> &str {
        &self.smtp_server
    }
}

impl Notification for EmailNotification {
    fn channel(&self) -> &str {
        "Email"
    }

    fn description(&self) -> String {
        format!("EmailNotification (SMTP: {})", self.smtp_server)
    }

    fn send(&self, recipient: &str, message: &str, outbox: &dyn Outbox) -> Result<(), DeliveryError> {
        outbox.record(Delivery::new(self.channel(), recipient, message).via(&self.smtp_server));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::outbox::MemoryOutbox;

    #[test]
    fn test_defaults_when_smtp_missing() {
        let email = EmailNotification::from_config(&Configuration::new());
        assert_eq!(email.smtp_server(), DEFAULT_SMTP_SERVER);
        assert_eq!(email.description(), "EmailNotification (SMTP: smtp.example.com)");
    }

    #[test]
    fn test_send_reports_server() {
        let email = EmailNotification::from_config(&Configuration::new().with("smtp", "smtp.mycompany.com"));
        let outbox = MemoryOutbox::new();
        email.send("jose@example.com", "Hello Jose!", &outbox).unwrap();

        let deliveries = outbox.deliveries();
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].route.as_deref(), Some("smtp.mycompany.com"));
        assert_eq!(
            deliveries[0].to_string(),
            "[Email -> jose@example.com] via smtp.mycompany.com: Hello Jose!"
        );
    }
}
