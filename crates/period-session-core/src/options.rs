//! Start options passed to the host when a session is initialized.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cookie::{CookieParams, SameSite};

/// Configuration overrides applied when starting or resuming a session.
///
/// Recognized options are typed; anything else goes into `extra` and is passed
/// through to the host untouched. An unset option keeps the host's setting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct StartOptions {
    /// Client token lifetime in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_lifetime: Option<u64>,
    /// Client token path scope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_path: Option<String>,
    /// Client token domain scope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_domain: Option<String>,
    /// Only send the client token over secure connections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_secure: Option<bool>,
    /// Hide the client token from client-side scripts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_httponly: Option<bool>,
    /// SameSite policy of the client token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_samesite: Option<SameSite>,
    /// Correlate requests with a client token at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cookies: Option<bool>,
    /// Reject uninitialized session identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_strict_mode: Option<bool>,
    /// Seconds after which stored data counts as garbage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gc_maxlifetime: Option<u64>,
    /// Name of the host storage handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_handler: Option<String>,
    /// Read the data and release the store immediately
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_and_close: Option<bool>,
    /// Host-specific options not recognized here
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl StartOptions {
    /// Create an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no option is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Set a host-specific option.
    pub fn with_extra(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(name.into(), value);
        self
    }

    /// Overlay the cookie options onto a set of cookie parameters.
    pub fn apply_to(&self, params: &mut CookieParams) {
        if let Some(lifetime) = self.cookie_lifetime {
            params.lifetime = lifetime;
        }
        if let Some(path) = &self.cookie_path {
            params.path = path.clone();
        }
        if let Some(domain) = &self.cookie_domain {
            params.domain = domain.clone();
        }
        if let Some(secure) = self.cookie_secure {
            params.secure = secure;
        }
        if let Some(httponly) = self.cookie_httponly {
            params.httponly = httponly;
        }
        if let Some(samesite) = self.cookie_samesite {
            params.samesite = Some(samesite);
        }
    }
}
