//! Rule registry
//!
//! Maps rule names to [`Rule`] behavior. Two ways to use it:
//!
//! - **Sealed**: build a registry with [`RegistryBuilder`], which hands back an
//!   immutable [`Checker`]. Nothing can be registered after `build()`.
//! - **Process-wide**: the registry behind [`register_rule`] and the free
//!   `validate_*` functions. It is seeded with the built-ins on first use.
//!   Register custom rules during start-up, before validation runs on other
//!   threads.
//!
//! Registration is last-write-wins in both cases; there is no removal.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use parking_lot::{RwLock, RwLockReadGuard};
use tracing::debug;

use crate::dispatch::Checker;
use crate::foundation::Rule;
use crate::rules;

// ==================== Rule Registry ====================

/// Name → rule map.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Arc<dyn Rule>>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in rule.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        rules::register_builtins(&mut registry);
        registry
    }

    /// Registers `rule` under `name`, replacing any previous rule of that name.
    pub fn register<R>(&mut self, name: impl Into<String>, rule: R)
    where
        R: Rule + 'static,
    {
        self.register_arc(name, Arc::new(rule));
    }

    /// Registers an already shared rule.
    pub fn register_arc(&mut self, name: impl Into<String>, rule: Arc<dyn Rule>) {
        let name = name.into();
        let replaced = self.rules.insert(name.clone(), rule).is_some();
        debug!(rule = %name, replaced, "registered rule");
    }

    /// Looks up a rule by exact name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&dyn Rule> {
        self.rules.get(name).map(|rule| &**rule)
    }

    /// Returns true if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}

// ==================== Registry Builder ====================

/// Builds a registry and seals it into a [`Checker`].
///
/// ```
/// use fieldcheck::foundation::{rule_fn, ValidationError};
/// use fieldcheck::registry::RegistryBuilder;
///
/// let checker = RegistryBuilder::new()
///     .with_builtins()
///     .rule("even", rule_fn(|field, _arg| {
///         if field.value().len() % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("even", "odd length").into())
///         }
///     }))
///     .build();
///
/// assert!(checker.registry().contains("even"));
/// assert!(checker.registry().contains("nonil"));
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: RuleRegistry,
}

impl RegistryBuilder {
    /// Starts from an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every built-in rule.
    pub fn with_builtins(mut self) -> Self {
        rules::register_builtins(&mut self.registry);
        self
    }

    /// Adds (or replaces) a rule.
    pub fn rule<R>(mut self, name: impl Into<String>, rule: R) -> Self
    where
        R: Rule + 'static,
    {
        self.registry.register(name, rule);
        self
    }

    /// Returns the registry without sealing it.
    pub fn into_registry(self) -> RuleRegistry {
        self.registry
    }

    /// Seals the registry.
    pub fn build(self) -> Checker {
        Checker::new(Arc::new(self.registry))
    }
}

// ==================== Process-wide Registry ====================

static GLOBAL: LazyLock<RwLock<RuleRegistry>> =
    LazyLock::new(|| RwLock::new(RuleRegistry::with_builtins()));

/// Registers a rule in the process-wide registry.
///
/// Call during start-up. A rule must not call this from inside its own
/// `check`: validation holds a read guard on the registry while rules run.
pub fn register_rule<R>(name: impl Into<String>, rule: R)
where
    R: Rule + 'static,
{
    GLOBAL.write().register(name, rule);
}

/// Names registered in the process-wide registry, sorted.
pub fn registered_rules() -> Vec<String> {
    GLOBAL.read().names().into_iter().map(str::to_owned).collect()
}

/// Copies the process-wide registry into a sealed [`Checker`].
///
/// Later calls to [`register_rule`] do not affect the returned checker.
pub fn snapshot() -> Checker {
    Checker::new(Arc::new(GLOBAL.read().clone()))
}

pub(crate) fn global() -> RwLockReadGuard<'static, RuleRegistry> {
    GLOBAL.read()
}
