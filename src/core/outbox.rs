use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

/// A single recorded send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: Uuid,
    /// Display label of the channel, e.g. `Email` or `SMS`.
    pub channel: String,
    pub recipient: String,
    pub message: String,
    /// The channel's distinguishing attribute (server, provider, app id, webhook).
    pub route: Option<String>,
    pub sent_at: DateTime<Utc>,
}

impl Delivery {
    pub fn new(
        channel: impl Into<String>,
        recipient: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            channel: channel.into(),
            recipient: recipient.into(),
            message: message.into(),
            route: None,
            sent_at: Utc::now(),
        }
    }

    pub fn via(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.channel, self.recipient)?;
        if let Some(route) = &self.route {
            write!(f, " via {}", route)?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Sink that observes every delivery a notification performs.
pub trait Outbox: Send + Sync {
    fn record(&self, delivery: Delivery);
}

/// Simple in-memory collector for deliveries.
#[derive(Debug, Default)]
pub struct MemoryOutbox {
    deliveries: Mutex<Vec<Delivery>>,
}

impl MemoryOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Outbox for MemoryOutbox {
    fn record(&self, delivery: Delivery) {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(delivery);
    }
}

/// Emits each delivery through the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOutbox;

impl Outbox for LogOutbox {
    fn record(&self, delivery: Delivery) {
        log::info!(target: "notifactory::outbox", "{} (id: {})", delivery, delivery.id);
    }
}

/// Prints each delivery to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleOutbox;

impl Outbox for ConsoleOutbox {
    fn record(&self, delivery: Delivery) {
        println!("{}", delivery);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_route() {
        let delivery = Delivery::new("Email", "jose@example.com", "Hello Jose!")
            .via("smtp.mycompany.com");
        assert_eq!(
            delivery.to_string(),
            "[Email -> jose@example.com] via smtp.mycompany.com: Hello Jose!"
        );
    }

    #[test]
    fn test_display_without_route() {
        let delivery = Delivery::new("ConsoleLogger", "DevOps", "Deployment completed.");
        assert_eq!(
            delivery.to_string(),
            "[ConsoleLogger -> DevOps]: Deployment completed."
        );
    }

    #[test]
    fn test_memory_outbox_keeps_order() {
        let outbox = MemoryOutbox::new();
        assert!(outbox.is_empty());

        outbox.record(Delivery::new("SMS", "+1", "first"));
        outbox.record(Delivery::new("SMS", "+2", "second"));

        let deliveries = outbox.deliveries();
        assert_eq!(deliveries.len(), 2);
        assert_eq!(deliveries[0].message, "first");
        assert_eq!(deliveries[1].message, "second");
        assert_ne!(deliveries[0].id, deliveries[1].id);
    }

    #[test]
    fn test_sinks_accept_trait_objects() {
        let sinks: [&dyn Outbox; 2] = [&LogOutbox, &ConsoleOutbox];
        for sink in sinks {
            sink.record(Delivery::new("Email", "ops@example.com", "ping").via("smtp.example.com"));
        }
    }

    #[test]
    fn test_delivery_serializes() {
        let delivery = Delivery::new("Push", "user-123", "alert").via("com.example.app");
        let value = serde_json::to_value(&delivery).unwrap();
        assert_eq!(value["channel"], "Push");
        assert_eq!(value["route"], "com.example.app");

        let back: Delivery = serde_json::from_value(value).unwrap();
        assert_eq!(back, delivery);
    }
}
