//! Rule registry: named validation predicates with default messages.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use thiserror::Error;

use crate::adapter::{ControlDescriptor, ControlValue, FormSnapshot};
use crate::rules;

/// A validation predicate.
///
/// Receives the control's value, the raw rule parameter from the control's
/// annotation, the control itself, and the whole form (for group rules).
/// Returns true when the value passes.
pub type Predicate =
    Box<dyn Fn(&ControlValue, &str, &ControlDescriptor, &FormSnapshot) -> bool + Send + Sync>;

/// A named validation rule.
///
/// Rules are owned by the registry and immutable once registered;
/// registering the same name again replaces the whole rule.
pub struct Rule {
    name: String,
    predicate: Predicate,
    message: String,
}

impl Rule {
    /// Rule name (lowercased).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default failure message, used when the control carries no override.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn check(
        &self,
        value: &ControlValue,
        param: &str,
        control: &ControlDescriptor,
        form: &FormSnapshot,
    ) -> bool {
        (self.predicate)(value, param, control, form)
    }
}

/// Error returned by [`RuleRegistry::register`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// Rule names must be non-empty identifiers.
    #[error("rule name must not be empty")]
    EmptyName,
}

/// Mapping from rule name to rule.
///
/// Names are case-insensitive: they are lowercased on registration, so
/// registering `MOBILE` replaces `mobile` and both derive the same
/// annotation keys.
#[derive(Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Rule>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry preloaded with the built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        rules::install(&mut registry);
        registry
    }

    /// Register a rule, replacing any existing rule with the same name.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        predicate: F,
        message: impl Into<String>,
    ) -> Result<(), RegisterError>
    where
        F: Fn(&ControlValue, &str, &ControlDescriptor, &FormSnapshot) -> bool
            + Send
            + Sync
            + 'static,
    {
        let name = name.into().trim().to_ascii_lowercase();
        if name.is_empty() {
            return Err(RegisterError::EmptyName);
        }
        self.insert(name, Box::new(predicate), message.into());
        Ok(())
    }

    pub(crate) fn insert(&mut self, name: String, predicate: Predicate, message: String) {
        self.rules.insert(
            name.clone(),
            Rule {
                name,
                predicate,
                message,
            },
        );
    }

    /// Look up a rule by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(&name.to_ascii_lowercase())
    }

    /// Iterate over all rules. No order is guaranteed.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Wrap this registry for shared use across engines.
    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }
}

/// A registry shared between engines and registration sites.
///
/// Read-mostly: validation passes take the read lock, registration the
/// write lock, so rules may be added while other forms are being validated.
pub type SharedRegistry = Arc<RwLock<RuleRegistry>>;

static GLOBAL: LazyLock<SharedRegistry> =
    LazyLock::new(|| RuleRegistry::with_builtins().into_shared());

/// The process-wide default registry, preloaded with the built-in rules.
///
/// [`Engine::new`](crate::Engine::new) uses this; rules registered here are
/// visible to every engine constructed from it, including ones constructed
/// before the registration.
pub fn global_registry() -> SharedRegistry {
    Arc::clone(&GLOBAL)
}

pub(crate) fn read_registry(
    registry: &SharedRegistry,
) -> std::sync::RwLockReadGuard<'_, RuleRegistry> {
    registry.read().unwrap_or_else(PoisonError::into_inner)
}
