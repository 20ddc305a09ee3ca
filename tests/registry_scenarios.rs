use notifactory::prelude::*;
use serde_json::json;

fn slack_constructor(config: &Configuration) -> Result<Box<dyn Notification>, FactoryError> {
    let hook = WebhookNotification::new(
        "Slack",
        config.get_or("webhook", "https://hooks.slack.com/default"),
    )?;
    Ok(Box::new(hook))
}

#[test]
fn test_email_defaults_and_override() {
    let registry = NotificationRegistry::with_defaults();

    let email = registry.create("email", &Configuration::new()).unwrap();
    assert!(email.description().contains("smtp.example.com"));

    let email = registry
        .create("email", &Configuration::new().with("smtp", "a.b.com"))
        .unwrap();
    assert!(email.description().contains("a.b.com"));
}

#[test]
fn test_sms_with_provider() {
    let registry = NotificationRegistry::with_defaults();
    let sms = registry
        .create("sms", &Configuration::new().with("provider", "Nexmo"))
        .unwrap();
    assert!(sms.description().contains("Nexmo"));
}

#[test]
fn test_runtime_slack_registration() {
    let mut registry = NotificationRegistry::with_defaults();
    registry.register("slack", slack_constructor);

    let slack = registry
        .create(
            "slack",
            &Configuration::new().with("webhook", "https://hooks.slack.com/services/ABC"),
        )
        .unwrap();
    assert!(slack.description().contains("https://hooks.slack.com/services/ABC"));

    let outbox = MemoryOutbox::new();
    slack.send("#general", "Hello team!", &outbox).unwrap();
    assert_eq!(
        outbox.deliveries()[0].to_string(),
        "[Slack -> #general] via https://hooks.slack.com/services/ABC: Hello team!"
    );
}

#[test]
fn test_unknown_kind() {
    let registry = NotificationRegistry::with_defaults();
    let err = registry.create("unknown-kind", &Configuration::new()).unwrap_err();
    assert_eq!(err, FactoryError::UnknownKind { key: "unknown-kind".to_string() });
    assert_eq!(err.to_string(), "No creator registered for key: unknown-kind");
}

#[test]
fn test_unknown_kind_for_any_config() {
    let registry = NotificationRegistry::new();
    let configs = [
        Configuration::new(),
        Configuration::new().with("smtp", "a.b.com"),
        Configuration::new().with("webhook", "https://x").with("label", "Teams"),
    ];
    for config in &configs {
        assert!(matches!(
            registry.create("teams", config),
            Err(FactoryError::UnknownKind { ref key }) if key == "teams"
        ));
    }
}

#[test]
fn test_webhook_failure_propagates_through_registry() {
    let mut registry = NotificationRegistry::new();
    registry.register("Slack", slack_constructor);

    let err = registry
        .create("SLACK", &Configuration::new().with("webhook", "hooks.slack.com/no-scheme"))
        .unwrap_err();
    assert!(matches!(err, FactoryError::InvalidConfig { ref key, .. } if key == "webhook"));
}

#[test]
fn test_closed_and_open_factories_agree() {
    let registry = NotificationRegistry::with_defaults();
    let config = Configuration::from_json(&json!({
        "smtp": "smtp.mycompany.com",
        "provider": "Nexmo",
        "appId": "com.acme.alerts"
    }))
    .unwrap();

    for kind in NotificationKind::ALL {
        let closed = NotificationFactory::create(kind, &config);
        let open = registry.create(kind.key(), &config).unwrap();
        assert_eq!(closed.description(), open.description());
        assert_eq!(closed.channel(), open.channel());
    }
}

#[test]
fn test_overriding_a_builtin_kind() {
    let mut registry = NotificationRegistry::with_defaults();
    registry.register("EMAIL", |_: &Configuration| {
        Ok(Box::new(CustomNotification::plain("Mailbox", "MailboxNotification")) as Box<dyn Notification>)
    });

    let email = registry.create("email", &Configuration::new()).unwrap();
    assert_eq!(email.description(), "MailboxNotification");
    assert!(email.downcast_ref::<EmailNotification>().is_none());
    assert_eq!(registry.len(), 3);
}
