use crate::core::config::Configuration;
use crate::core::factory::{NotificationFactory, NotificationKind};
use crate::core::notification::Notification;
use crate::error::FactoryError;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Function that builds a notification from its configuration.
pub type Constructor =
    Arc<dyn Fn(&Configuration) -> Result<Box<dyn Notification>, FactoryError> + Send + Sync>;

/// Open factory: maps case-insensitive keys to constructors.
///
/// Keys are lower-cased on both [`register`](Self::register) and
/// [`create`](Self::create). Registering an existing key replaces its
/// constructor.
#[derive(Clone)]
pub struct NotificationRegistry {
    constructors: HashMap<String, Constructor>,
}

impl NotificationRegistry {
    /// Creates a registry with no constructors.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Creates a registry seeded with `email`, `sms` and `push`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in NotificationKind::ALL {
            registry.register(kind.key(), move |config: &Configuration| {
                Ok(NotificationFactory::create(kind, config))
            });
        }
        registry
    }

    /// Registers `constructor` under `key`, replacing any previous one.
    pub fn register<F>(&mut self, key: &str, constructor: F)
    where
        F: Fn(&Configuration) -> Result<Box<dyn Notification>, FactoryError>
            + Send
            + Sync
            + 'static,
    {
        self.register_constructor(key, Arc::new(constructor));
    }

    /// Same as [`register`](Self::register) for an already shared constructor.
    pub fn register_constructor(&mut self, key: &str, constructor: Constructor) {
        let normalized = key.to_lowercase();
        if self.constructors.contains_key(&normalized) {
            log::debug!("Constructor for '{}' already registered, overwriting.", normalized);
        } else {
            log::debug!("Registering constructor for '{}'.", normalized);
        }
        self.constructors.insert(normalized, constructor);
    }

    /// Builds the notification registered under `key`.
    ///
    /// Constructor failures are returned as-is.
    pub fn create(
        &self,
        key: &str,
        config: &Configuration,
    ) -> Result<Box<dyn Notification>, FactoryError> {
        let constructor = self.constructor(key)?;
        log::trace!("Creating '{}' notification.", key);
        constructor(config)
    }

    /// Looks up the constructor for `key`.
    pub fn constructor(&self, key: &str) -> Result<Constructor, FactoryError> {
        self.constructors
            .get(&key.to_lowercase())
            .cloned()
            .ok_or_else(|| {
                log::warn!("No creator registered for key: {}", key);
                FactoryError::unknown_kind(key)
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.constructors.contains_key(&key.to_lowercase())
    }

    /// Registered keys, sorted.
    pub fn kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = self.constructors.keys().cloned().collect();
        kinds.sort();
        kinds
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl Default for NotificationRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for NotificationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

/// A [`NotificationRegistry`] behind a read-write lock, for concurrent callers.
///
/// Cloning is cheap and every clone sees the same mapping.
#[derive(Clone, Debug, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<NotificationRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: NotificationRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Process-wide registry, seeded with the defaults on first use.
    pub fn global() -> &'static SharedRegistry {
        static GLOBAL: OnceLock<SharedRegistry> = OnceLock::new();
        GLOBAL.get_or_init(|| SharedRegistry::new(NotificationRegistry::with_defaults()))
    }

    pub fn register<F>(&self, key: &str, constructor: F)
    where
        F: Fn(&Configuration) -> Result<Box<dyn Notification>, FactoryError>
            + Send
            + Sync
            + 'static,
    {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| {
                log::warn!("Registry lock was poisoned, recovering.");
                PoisonError::into_inner(poisoned)
            })
            .register(key, constructor);
    }

    /// The constructor runs after the read lock is released, so it may use
    /// this registry itself.
    pub fn create(
        &self,
        key: &str,
        config: &Configuration,
    ) -> Result<Box<dyn Notification>, FactoryError> {
        let constructor = self.read().constructor(key)?;
        log::trace!("Creating '{}' notification.", key);
        constructor(config)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.read().contains(key)
    }

    pub fn kinds(&self) -> Vec<String> {
        self.read().kinds()
    }

    /// Copy of the current mapping.
    pub fn snapshot(&self) -> NotificationRegistry {
        self.read().clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, NotificationRegistry> {
        self.inner.read().unwrap_or_else(|poisoned| {
            log::warn!("Registry lock was poisoned, recovering.");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl From<NotificationRegistry> for SharedRegistry {
    fn from(registry: NotificationRegistry) -> Self {
        Self::new(registry)
    }
}
