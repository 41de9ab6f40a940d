//! Assurance contexts and the engine that evaluates checks against them.
//!
//! A context carries the factory that turns a failure message into an error
//! of the caller's chosen kind. A valued context additionally carries the
//! value under test and its diagnostic name. Contexts are never mutated:
//! every operation consumes the context and returns it (or a replacement),
//! so checks chain with `?`.

use super::environment::{file_system, Environment};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Builds an error of the chain's kind from a failure message.
pub type ErrorFactory<E> = Arc<dyn Fn(String) -> E + Send + Sync>;

/// Context holding only an error kind.
///
/// # Example
///
/// ```rust
/// use assurance::core::AssuranceContext;
///
/// let context = AssuranceContext::new(|message| format!("failed: {message}"));
///
/// let context = context.assure(false, "never raised").unwrap();
/// let error = context.assure(true, "limit reached").unwrap_err();
/// assert_eq!(error, "failed: limit reached");
/// ```
pub struct AssuranceContext<E> {
    error_factory: ErrorFactory<E>,
    environment: Arc<dyn Environment>,
}

impl<E> AssuranceContext<E> {
    /// Create a context raising errors built by `error_factory`.
    ///
    /// The context observes the real filesystem until
    /// [`with_environment`](Self::with_environment) says otherwise.
    pub fn new<F>(error_factory: F) -> Self
    where
        F: Fn(String) -> E + Send + Sync + 'static,
    {
        Self {
            error_factory: Arc::new(error_factory),
            environment: file_system(),
        }
    }

    /// Replace the environment consulted by rules further down the chain.
    pub fn with_environment(mut self, environment: Arc<dyn Environment>) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> &dyn Environment {
        self.environment.as_ref()
    }

    /// Fail with `message` when `failed` is true, otherwise hand the context back.
    pub fn assure(self, failed: bool, message: impl Into<String>) -> Result<Self, E> {
        if failed {
            return Err(self.fail(None, message.into()));
        }
        Ok(self)
    }

    /// Attach an unnamed value.
    pub fn with_value<V>(self, value: V) -> ValuedContext<E, V> {
        ValuedContext {
            context: self,
            value,
            name: None,
        }
    }

    /// Attach a value together with the name used in failure messages.
    pub fn with_named_value<V>(
        self,
        value: V,
        name: impl Into<Cow<'static, str>>,
    ) -> ValuedContext<E, V> {
        ValuedContext {
            context: self,
            value,
            name: Some(name.into()),
        }
    }

    /// Switch the error kind, keeping the environment.
    pub fn with_error_kind<K, F>(self, error_factory: F) -> AssuranceContext<K>
    where
        F: Fn(String) -> K + Send + Sync + 'static,
    {
        AssuranceContext {
            error_factory: Arc::new(error_factory),
            environment: self.environment,
        }
    }

    fn fail(&self, name: Option<&str>, message: String) -> E {
        log_failure(name, &message);
        (self.error_factory)(message)
    }
}

impl<E> Clone for AssuranceContext<E> {
    fn clone(&self) -> Self {
        Self {
            error_factory: Arc::clone(&self.error_factory),
            environment: Arc::clone(&self.environment),
        }
    }
}

impl<E> fmt::Debug for AssuranceContext<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssuranceContext").finish_non_exhaustive()
    }
}

/// Context holding an error kind, a value under test and an optional name.
///
/// # Example
///
/// ```rust
/// use assurance::Assure;
///
/// let port = Assure::argument()
///     .with_named_value(8080_u16, "port")
///     .assure(|port| *port < 1024, |port, name| {
///         format!("{} {port} is privileged", name.unwrap_or("port"))
///     })
///     .unwrap();
///
/// assert_eq!(*port.value(), 8080);
/// assert_eq!(port.name(), Some("port"));
/// ```
pub struct ValuedContext<E, V> {
    context: AssuranceContext<E>,
    value: V,
    name: Option<Cow<'static, str>>,
}

impl<E, V> ValuedContext<E, V> {
    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn into_value(self) -> V {
        self.value
    }

    pub fn environment(&self) -> &dyn Environment {
        self.context.environment()
    }

    /// Replace the environment consulted by rules further down the chain.
    pub fn with_environment(self, environment: Arc<dyn Environment>) -> Self {
        Self {
            context: self.context.with_environment(environment),
            ..self
        }
    }

    /// Replace the value under test with an unnamed one, keeping the error kind.
    pub fn with_value<W>(self, value: W) -> ValuedContext<E, W> {
        self.context.with_value(value)
    }

    /// Replace the value under test and its name, keeping the error kind.
    pub fn with_named_value<W>(
        self,
        value: W,
        name: impl Into<Cow<'static, str>>,
    ) -> ValuedContext<E, W> {
        self.context.with_named_value(value, name)
    }

    /// Drop the value, leaving a context with the same error kind.
    pub fn without_value(self) -> AssuranceContext<E> {
        self.context
    }

    /// Switch the error kind, keeping the value, name and environment.
    ///
    /// ```rust
    /// use assurance::{Assure, AssuranceError};
    ///
    /// let error = Assure::argument()
    ///     .with_named_value("", "title")
    ///     .with_error_kind(AssuranceError::InvalidOperation)
    ///     .not_white_space()
    ///     .unwrap_err();
    ///
    /// assert!(matches!(error, AssuranceError::InvalidOperation(_)));
    /// ```
    pub fn with_error_kind<K, F>(self, error_factory: F) -> ValuedContext<K, V>
    where
        F: Fn(String) -> K + Send + Sync + 'static,
    {
        ValuedContext {
            context: self.context.with_error_kind(error_factory),
            value: self.value,
            name: self.name,
        }
    }

    /// Fail when `failed` holds for the value.
    ///
    /// The predicate returns `true` when the check should fail. The message
    /// factory receives the value and the name and is only invoked on failure.
    pub fn assure<P, M>(self, failed: P, message: M) -> Result<Self, E>
    where
        P: FnOnce(&V) -> bool,
        M: FnOnce(&V, Option<&str>) -> String,
    {
        if failed(&self.value) {
            let message = message(&self.value, self.name());
            return Err(self.context.fail(self.name(), message));
        }
        Ok(self)
    }

    /// Like [`assure`](Self::assure) for messages that only mention the name.
    pub fn assure_named<P, M>(self, failed: P, message: M) -> Result<Self, E>
    where
        P: FnOnce(&V) -> bool,
        M: FnOnce(Option<&str>) -> String,
    {
        self.assure(failed, |_, name| message(name))
    }

    /// Evaluate one check under a different error kind.
    ///
    /// On failure the error is built by `kind` and converted into the chain's
    /// error type, bypassing the chain's own factory. On success the context
    /// comes back with its ambient kind.
    pub fn assure_as<K, F, P, M>(self, kind: F, failed: P, message: M) -> Result<Self, E>
    where
        E: From<K>,
        F: FnOnce(String) -> K,
        P: FnOnce(&V) -> bool,
        M: FnOnce(&V, Option<&str>) -> String,
    {
        if failed(&self.value) {
            let message = message(&self.value, self.name());
            log_failure(self.name(), &message);
            return Err(E::from(kind(message)));
        }
        Ok(self)
    }
}

impl<E, V: Clone> Clone for ValuedContext<E, V> {
    fn clone(&self) -> Self {
        Self {
            context: self.context.clone(),
            value: self.value.clone(),
            name: self.name.clone(),
        }
    }
}

impl<E, V: fmt::Debug> fmt::Debug for ValuedContext<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuedContext")
            .field("value", &self.value)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn log_failure(name: Option<&str>, message: &str) {
    debug!(name = name.unwrap_or("<unnamed>"), "{message}");
}
