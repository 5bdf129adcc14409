//! Key-value facade over a host-managed session store.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use period_session_core::{
    ExpiryInstruction, FacadeConfig, Result, SessionKey, SessionValue, StartOptions,
};

use crate::store::SessionStore;

/// Array-like, iterable and countable view over a session store.
///
/// The facade holds no session data of its own. Every operation forwards to
/// the injected store, which may be owned or borrowed (`&mut S` is a store
/// too). Operations are only meaningful between a successful [`start`] and
/// the following [`stop`]; outside that window the store decides what reads
/// and writes do.
///
/// [`start`]: SessionFacade::start
/// [`stop`]: SessionFacade::stop
#[derive(Debug)]
pub struct SessionFacade<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionFacade<S> {
    /// Wrap a store, optionally naming it and starting it.
    ///
    /// The name is applied before the store is started. A store that is
    /// already active keeps its name; the override is ignored. With
    /// `autostart` the store is started with no overrides and a failure is
    /// logged, not reported; call [`start`](Self::start) explicitly to check.
    pub fn new(store: S, name: Option<&str>, autostart: bool) -> Self {
        let mut facade = Self { store };
        if let Some(name) = name {
            facade.apply_name(name);
        }
        if autostart && !facade.start(&StartOptions::default()) {
            warn!("Session autostart failed: name='{}'", facade.store.name());
        }
        facade
    }

    /// Wrap a store using a validated configuration.
    pub fn from_config(store: S, config: &FacadeConfig) -> Result<Self> {
        config.validate()?;

        let mut facade = Self { store };
        if let Some(name) = &config.name {
            facade.apply_name(name);
        }
        if config.autostart && !facade.start(&config.options) {
            warn!("Session autostart failed: name='{}'", facade.store.name());
        }
        Ok(facade)
    }

    fn apply_name(&mut self, name: &str) {
        if name.is_empty() {
            return;
        }
        if self.store.is_active() {
            debug!(
                "Session already active, keeping name '{}' over '{}'",
                self.store.name(),
                name
            );
            return;
        }
        self.store.configure_name(name);
    }

    /// Start or resume the session.
    ///
    /// Returns false if the store cannot be initialized (already active,
    /// headers already sent, and so on).
    #[must_use]
    pub fn start(&mut self, overrides: &StartOptions) -> bool {
        let started = self.store.initialize(overrides);
        if started {
            info!("Session started: name='{}'", self.store.name());
        } else {
            warn!("Session could not be started: name='{}'", self.store.name());
        }
        started
    }

    /// Stop the session.
    ///
    /// Clears every key, asks the host to expire the client token (when one
    /// is used) with the live token's scope attributes, then destroys the
    /// store. Returns whether the destroy succeeded.
    #[must_use]
    pub fn stop(&mut self) -> bool {
        self.store.clear();

        if self.store.uses_cookies() {
            let instruction =
                ExpiryInstruction::new(self.store.name(), self.store.cookie_parameters());
            self.store.expire_client_token(&instruction);
        }

        let destroyed = self.store.destroy();
        if destroyed {
            info!("Session stopped: name='{}'", self.store.name());
        } else {
            warn!("Session could not be destroyed: name='{}'", self.store.name());
        }
        destroyed
    }

    /// Check if a session exists.
    ///
    /// Always false outside a request-serving context, whatever the store's
    /// state.
    pub fn exists(&self) -> bool {
        self.store.execution_context().is_interactive() && self.store.is_active()
    }

    /// Check if a key is present, including keys holding `null`.
    pub fn has<K: Into<SessionKey>>(&self, key: K) -> bool {
        self.store.contains(&key.into())
    }

    /// Get a value, or `None` if the key is absent.
    pub fn get<K: Into<SessionKey>>(&self, key: K) -> Option<SessionValue> {
        self.store.read(&key.into())
    }

    /// Get a value, or `default` if the key is absent.
    pub fn get_or<K, V>(&self, key: K, default: V) -> SessionValue
    where
        K: Into<SessionKey>,
        V: Into<SessionValue>,
    {
        self.get(key).unwrap_or_else(|| default.into())
    }

    /// Get a value deserialized into `T`.
    ///
    /// Absent keys give `Ok(None)`; a stored value of the wrong shape is a
    /// serialization error.
    pub fn get_as<K, T>(&self, key: K) -> Result<Option<T>>
    where
        K: Into<SessionKey>,
        T: DeserializeOwned,
    {
        match self.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Insert or overwrite a value.
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<SessionKey>,
        V: Into<SessionValue>,
    {
        self.store.write(key.into(), value.into());
    }

    /// Serialize `value` and store it.
    pub fn set_as<K, T>(&mut self, key: K, value: &T) -> Result<()>
    where
        K: Into<SessionKey>,
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value)?;
        self.set(key, value);
        Ok(())
    }

    /// Remove a key. Removing an absent key does nothing.
    pub fn delete<K: Into<SessionKey>>(&mut self, key: K) {
        self.store.remove(&key.into());
    }

    /// Read a value once: get it, then delete the key.
    ///
    /// The read and the delete are two store calls, not one atomic step.
    pub fn flash<K: Into<SessionKey>>(&mut self, key: K) -> Option<SessionValue> {
        let key = key.into();
        let value = self.store.read(&key);
        if value.is_some() {
            self.store.remove(&key);
        }
        value
    }

    /// Read a value once, or `default` if the key is absent.
    pub fn flash_or<K, V>(&mut self, key: K, default: V) -> SessionValue
    where
        K: Into<SessionKey>,
        V: Into<SessionValue>,
    {
        self.flash(key).unwrap_or_else(|| default.into())
    }

    /// Number of keys in the session.
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Alias for [`count`](Self::count).
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Check if the session holds no keys.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Iterate over a snapshot of the current entries.
    pub fn iter(&self) -> Iter {
        Iter {
            inner: self.store.snapshot().into_iter(),
        }
    }

    /// Keys of a snapshot of the current entries.
    pub fn keys(&self) -> impl Iterator<Item = SessionKey> {
        self.iter().map(|(key, _)| key)
    }

    /// Alias for [`has`](Self::has).
    pub fn contains_key<K: Into<SessionKey>>(&self, key: K) -> bool {
        self.has(key)
    }

    /// Alias for [`set`](Self::set).
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<SessionKey>,
        V: Into<SessionValue>,
    {
        self.set(key, value)
    }

    /// Alias for [`delete`](Self::delete).
    pub fn remove<K: Into<SessionKey>>(&mut self, key: K) {
        self.delete(key)
    }

    /// Get the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the underlying store mutably.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Release the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S, K, V> Extend<(K, V)> for SessionFacade<S>
where
    S: SessionStore,
    K: Into<SessionKey>,
    V: Into<SessionValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<'a, S: SessionStore> IntoIterator for &'a SessionFacade<S> {
    type Item = (SessionKey, SessionValue);
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a snapshot of session entries.
///
/// Entries are copied when iteration begins; later changes to the store do
/// not show up here.
#[derive(Debug)]
pub struct Iter {
    inner: std::vec::IntoIter<(SessionKey, SessionValue)>,
}

impl Iterator for Iter {
    type Item = (SessionKey, SessionValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter {}
