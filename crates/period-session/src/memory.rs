//! In-process session store.
//!
//! A complete host stand-in for embedders without a session runtime and for
//! tests. Entries keep insertion order; overwriting a key keeps its position.

use tracing::{debug, warn};

use period_session_core::{
    CookieParams, ExecutionContext, ExpiryInstruction, SessionKey, SessionValue, StartOptions,
};

use crate::store::SessionStore;

/// Session name used when none is configured.
pub const DEFAULT_SESSION_NAME: &str = "PERIODSESSID";

/// An in-memory session store.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    /// Logical store name
    name: String,

    /// Stored entries in insertion order
    entries: Vec<(SessionKey, SessionValue)>,

    /// Whether the store has been started and not yet destroyed
    active: bool,

    /// Reported execution context
    context: ExecutionContext,

    /// Whether response headers are already committed
    headers_sent: bool,

    /// Whether a client token correlates requests
    use_cookies: bool,

    /// Cookie parameters before any start overrides
    base_cookie_params: CookieParams,

    /// Cookie parameters of the live token
    cookie_params: CookieParams,

    /// Every name passed to `configure_name` that was applied
    name_history: Vec<String>,

    /// Options of every successful initialization
    initializations: Vec<StartOptions>,

    /// Every expiry instruction emitted
    expired_tokens: Vec<ExpiryInstruction>,

    /// Number of successful destroys
    destroy_count: usize,
}

impl InMemoryStore {
    /// Create an empty, unstarted store in the detected execution context.
    pub fn new() -> Self {
        Self {
            name: DEFAULT_SESSION_NAME.to_string(),
            entries: Vec::new(),
            active: false,
            context: ExecutionContext::detect(),
            headers_sent: false,
            use_cookies: true,
            base_cookie_params: CookieParams::default(),
            cookie_params: CookieParams::default(),
            name_history: Vec::new(),
            initializations: Vec::new(),
            expired_tokens: Vec::new(),
            destroy_count: 0,
        }
    }

    /// Create an unstarted store holding previously persisted data.
    pub fn with_data<I, K>(data: I) -> Self
    where
        I: IntoIterator<Item = (K, SessionValue)>,
        K: Into<SessionKey>,
    {
        let mut store = Self::new();
        for (key, value) in data {
            store.write(key.into(), value);
        }
        store
    }

    /// Set the reported execution context.
    pub fn with_context(mut self, context: ExecutionContext) -> Self {
        self.context = context;
        self
    }

    /// Set the cookie parameters used when no override is given.
    pub fn with_cookie_params(mut self, params: CookieParams) -> Self {
        self.base_cookie_params = params.clone();
        self.cookie_params = params;
        self
    }

    /// Enable or disable client token correlation.
    pub fn with_cookies(mut self, use_cookies: bool) -> Self {
        self.use_cookies = use_cookies;
        self
    }

    /// Mark response headers as committed (or not).
    pub fn set_headers_sent(&mut self, sent: bool) {
        self.headers_sent = sent;
    }

    /// Names applied through `configure_name`, oldest first.
    pub fn name_history(&self) -> &[String] {
        &self.name_history
    }

    /// Options of every successful initialization, oldest first.
    pub fn initializations(&self) -> &[StartOptions] {
        &self.initializations
    }

    /// Expiry instructions emitted so far, oldest first.
    pub fn expired_tokens(&self) -> &[ExpiryInstruction] {
        &self.expired_tokens
    }

    /// Number of successful destroys.
    pub fn destroy_count(&self) -> usize {
        self.destroy_count
    }

    fn position(&self, key: &SessionKey) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for InMemoryStore {
    fn configure_name(&mut self, name: &str) {
        if self.active {
            debug!("Ignoring session name change while active: name='{}'", name);
            return;
        }
        self.name = name.to_string();
        self.name_history.push(name.to_string());
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn initialize(&mut self, overrides: &StartOptions) -> bool {
        if self.active {
            warn!("Session already active: name='{}'", self.name);
            return false;
        }

        let use_cookies = overrides.use_cookies.unwrap_or(self.use_cookies);
        if use_cookies && self.headers_sent {
            warn!(
                "Cannot start session after headers have been sent: name='{}'",
                self.name
            );
            return false;
        }

        self.use_cookies = use_cookies;
        let mut params = self.base_cookie_params.clone();
        overrides.apply_to(&mut params);
        self.cookie_params = params;
        self.initializations.push(overrides.clone());

        // read_and_close loads the data but releases the store straight away
        self.active = !overrides.read_and_close.unwrap_or(false);

        debug!(
            "Session initialized: name='{}', entries={}, active={}",
            self.name,
            self.entries.len(),
            self.active
        );
        true
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn execution_context(&self) -> ExecutionContext {
        self.context
    }

    fn read(&self, key: &SessionKey) -> Option<SessionValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn write(&mut self, key: SessionKey, value: SessionValue) {
        match self.position(&key) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    fn remove(&mut self, key: &SessionKey) {
        if let Some(index) = self.position(key) {
            self.entries.remove(index);
        }
    }

    fn snapshot(&self) -> Vec<(SessionKey, SessionValue)> {
        self.entries.clone()
    }

    fn uses_cookies(&self) -> bool {
        self.use_cookies
    }

    fn cookie_parameters(&self) -> CookieParams {
        self.cookie_params.clone()
    }

    fn expire_client_token(&mut self, instruction: &ExpiryInstruction) {
        debug!(
            "Expiring client token: {}",
            instruction.to_header_value()
        );
        self.expired_tokens.push(instruction.clone());
    }

    fn destroy(&mut self) -> bool {
        if !self.active {
            warn!("Trying to destroy uninitialized session: name='{}'", self.name);
            return false;
        }
        self.entries.clear();
        self.active = false;
        self.destroy_count += 1;
        true
    }

    fn contains(&self, key: &SessionKey) -> bool {
        self.position(key).is_some()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
