//! Walkthrough of both factory designs.
//!
//! This demo shows:
//! - The closed factory building email, SMS and push channels from a kind and a config
//! - The open registry gaining a Slack webhook channel at runtime
//! - Adding yet another channel without touching any dispatch code
//!
//! Run with `cargo run --example factory_demo`.

use notifactory::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let outbox = ConsoleOutbox;

    // ========================================================================
    // Closed factory
    // ========================================================================

    println!("=== Simple Factory Demo ===");

    let email = NotificationFactory::create(
        NotificationKind::Email,
        &Configuration::new().with("smtp", "smtp.mycompany.com"),
    );
    println!("Created: {}", email.description());
    email.send("jose@example.com", "Hello Jose! This is an email notification.", &outbox)?;

    let sms = NotificationFactory::create(
        NotificationKind::Sms,
        &Configuration::new().with("provider", "Nexmo"),
    );
    println!("Created: {}", sms.description());
    sms.send("+919876543210", "This is an SMS notification.", &outbox)?;

    let push = NotificationFactory::create_by_name("push", &Configuration::new())?;
    println!("Created: {}", push.description());
    push.send("user-123", "You have a new alert!", &outbox)?;

    // ========================================================================
    // Open registry
    // ========================================================================

    println!("\n=== Extensible Factory Demo ===");
    let mut registry = NotificationRegistry::with_defaults();

    registry.register("slack", |config: &Configuration| {
        let hook = WebhookNotification::new(
            "Slack",
            config.get_or("webhook", "https://hooks.slack.com/default"),
        )?;
        Ok(Box::new(hook) as Box<dyn Notification>)
    });

    let slack = registry.create(
        "slack",
        &Configuration::new().with("webhook", "https://hooks.slack.com/services/ABC/DEF/XYZ"),
    )?;
    println!("Created (runtime): {}", slack.description());
    slack.send(
        "#general",
        "Hello team! This is a Slack notification created at runtime.",
        &outbox,
    )?;

    println!("\n=== Adding a new type (Demo) without modifying factory code ===");
    registry.register("console-logger", |_: &Configuration| {
        Ok(Box::new(CustomNotification::plain("ConsoleLogger", "ConsoleLoggerNotification"))
            as Box<dyn Notification>)
    });

    let logger = registry.create("Console-Logger", &Configuration::new())?;
    println!("Created (runtime): {}", logger.description());
    logger.send("DevOps", "Deployment completed successfully.", &outbox)?;

    if let Err(err) = registry.create("fax", &Configuration::new()) {
        println!("\nExpected failure: {}", err);
    }

    println!("\nRegistered kinds: {}", registry.kinds().join(", "));
    println!("Demo complete.");
    Ok(())
}
