//! The lifecycle contract consumed from a host session subsystem.
//!
//! The facade owns no session state. Everything it does goes through this
//! trait: naming, starting, raw mapping access, client-token expiry and
//! destruction. Durability, locking and identifier handling stay with the
//! implementor.

use period_session_core::{
    CookieParams, ExecutionContext, ExpiryInstruction, SessionKey, SessionValue, StartOptions,
};

/// A host-managed, request-scoped session store.
pub trait SessionStore {
    /// Set the store's logical name. Only meaningful before `initialize`.
    fn configure_name(&mut self, name: &str);

    /// Current logical name, also the client token's name.
    fn name(&self) -> String;

    /// Start or resume the store. Returns false if it cannot be initialized.
    fn initialize(&mut self, overrides: &StartOptions) -> bool;

    /// Check if the store is currently active.
    fn is_active(&self) -> bool;

    /// How the current process was invoked.
    fn execution_context(&self) -> ExecutionContext;

    /// Read one entry.
    fn read(&self, key: &SessionKey) -> Option<SessionValue>;

    /// Insert or overwrite one entry.
    fn write(&mut self, key: SessionKey, value: SessionValue);

    /// Remove one entry. Absent keys are ignored.
    fn remove(&mut self, key: &SessionKey);

    /// Materialize the current contents in store order.
    fn snapshot(&self) -> Vec<(SessionKey, SessionValue)>;

    /// Whether requests are correlated through a client token.
    fn uses_cookies(&self) -> bool;

    /// Attributes of the live client token.
    fn cookie_parameters(&self) -> CookieParams;

    /// Emit a client-side invalidation for the correlating token.
    fn expire_client_token(&mut self, instruction: &ExpiryInstruction);

    /// Tear down the backing store. Returns false if it could not be destroyed.
    fn destroy(&mut self) -> bool;

    /// Check if a key is present, whatever its value.
    fn contains(&self, key: &SessionKey) -> bool {
        self.read(key).is_some()
    }

    /// Number of entries.
    fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Check if the store holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every entry.
    fn clear(&mut self) {
        for (key, _) in self.snapshot() {
            self.remove(&key);
        }
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &mut S {
    fn configure_name(&mut self, name: &str) {
        (**self).configure_name(name)
    }

    fn name(&self) -> String {
        (**self).name()
    }

    fn initialize(&mut self, overrides: &StartOptions) -> bool {
        (**self).initialize(overrides)
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }

    fn execution_context(&self) -> ExecutionContext {
        (**self).execution_context()
    }

    fn read(&self, key: &SessionKey) -> Option<SessionValue> {
        (**self).read(key)
    }

    fn write(&mut self, key: SessionKey, value: SessionValue) {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &SessionKey) {
        (**self).remove(key)
    }

    fn snapshot(&self) -> Vec<(SessionKey, SessionValue)> {
        (**self).snapshot()
    }

    fn uses_cookies(&self) -> bool {
        (**self).uses_cookies()
    }

    fn cookie_parameters(&self) -> CookieParams {
        (**self).cookie_parameters()
    }

    fn expire_client_token(&mut self, instruction: &ExpiryInstruction) {
        (**self).expire_client_token(instruction)
    }

    fn destroy(&mut self) -> bool {
        (**self).destroy()
    }

    fn contains(&self, key: &SessionKey) -> bool {
        (**self).contains(key)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn configure_name(&mut self, name: &str) {
        (**self).configure_name(name)
    }

    fn name(&self) -> String {
        (**self).name()
    }

    fn initialize(&mut self, overrides: &StartOptions) -> bool {
        (**self).initialize(overrides)
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }

    fn execution_context(&self) -> ExecutionContext {
        (**self).execution_context()
    }

    fn read(&self, key: &SessionKey) -> Option<SessionValue> {
        (**self).read(key)
    }

    fn write(&mut self, key: SessionKey, value: SessionValue) {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &SessionKey) {
        (**self).remove(key)
    }

    fn snapshot(&self) -> Vec<(SessionKey, SessionValue)> {
        (**self).snapshot()
    }

    fn uses_cookies(&self) -> bool {
        (**self).uses_cookies()
    }

    fn cookie_parameters(&self) -> CookieParams {
        (**self).cookie_parameters()
    }

    fn expire_client_token(&mut self, instruction: &ExpiryInstruction) {
        (**self).expire_client_token(instruction)
    }

    fn destroy(&mut self) -> bool {
        (**self).destroy()
    }

    fn contains(&self, key: &SessionKey) -> bool {
        (**self).contains(key)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}
