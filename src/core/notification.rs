use crate::core::outbox::Outbox;
use crate::error::DeliveryError;
use std::any::Any;
use std::fmt;

/// A helper trait that just provides the `as_any` method,
/// so a `dyn Notification` can be downcast back to its concrete channel.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: 'static> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The capability contract every creatable channel satisfies.
///
/// Instances are immutable once constructed, so they can be shared across
/// threads freely.
pub trait Notification: AsAny + Send + Sync {
    /// Short display label of the channel, used to tag deliveries.
    fn channel(&self) -> &str;

    /// Human-readable summary including the channel's distinguishing attribute.
    fn description(&self) -> String;

    /// Sends `message` to `recipient`, reporting the delivery to `outbox`.
    fn send(&self, recipient: &str, message: &str, outbox: &dyn Outbox)
    -> Result<(), DeliveryError>;
}

impl dyn Notification {
    /// Returns the concrete channel if it is of type `T`.
    pub fn downcast_ref<T: Notification + 'static>(&self) -> Option<&T> {
        AsAny::as_any(self).downcast_ref::<T>()
    }
}

impl fmt::Debug for dyn Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("channel", &self.channel())
            .field("description", &self.description())
            .finish()
    }
}
