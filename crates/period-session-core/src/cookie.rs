//! Client token (cookie) attributes and expiry instructions.

use chrono::{DateTime, Duration, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How far in the past an expiry instruction's timestamp is placed, in seconds.
pub const EXPIRY_OFFSET_SECS: i64 = 42_000;

/// SameSite attribute of the client token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SameSite {
    /// Sent only with same-site requests
    Strict,
    /// Sent with same-site requests and top-level navigations
    Lax,
    /// Sent with all requests (requires `Secure`)
    None,
}

impl SameSite {
    /// Attribute value as it appears in a `Set-Cookie` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

impl std::fmt::Display for SameSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Attributes of the client-held token correlating requests to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CookieParams {
    /// Lifetime in seconds (0 = until the client closes)
    pub lifetime: u64,
    /// Path scope
    pub path: String,
    /// Domain scope (empty = host only)
    pub domain: String,
    /// Only sent over secure connections
    pub secure: bool,
    /// Hidden from client-side scripts
    pub httponly: bool,
    /// SameSite policy, if any
    pub samesite: Option<SameSite>,
}

impl Default for CookieParams {
    fn default() -> Self {
        Self {
            lifetime: 0,
            path: "/".to_string(),
            domain: String::new(),
            secure: false,
            httponly: false,
            samesite: None,
        }
    }
}

/// Instruction for the host to invalidate a client-held token.
///
/// Built when a session is stopped: an empty token with the same scope
/// attributes as the live one and an expiry timestamp in the past.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryInstruction {
    /// Token name (the session name)
    pub name: String,
    /// Scope attributes copied from the live token
    pub params: CookieParams,
    /// Expiry timestamp, always in the past
    pub expires: DateTime<Utc>,
}

impl ExpiryInstruction {
    /// Create an instruction expiring relative to the current time.
    pub fn new(name: impl Into<String>, params: CookieParams) -> Self {
        Self::at(name, params, Utc::now())
    }

    /// Create an instruction expiring relative to `now`.
    pub fn at(name: impl Into<String>, params: CookieParams, now: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            params,
            expires: now - Duration::seconds(EXPIRY_OFFSET_SECS),
        }
    }

    /// Render as a `Set-Cookie` header value.
    pub fn to_header_value(&self) -> String {
        let mut header = format!(
            "{}=; Expires={}; Max-Age=0",
            self.name,
            self.expires.format("%a, %d %b %Y %H:%M:%S GMT")
        );

        if !self.params.path.is_empty() {
            header.push_str("; Path=");
            header.push_str(&self.params.path);
        }
        if !self.params.domain.is_empty() {
            header.push_str("; Domain=");
            header.push_str(&self.params.domain);
        }
        if self.params.secure {
            header.push_str("; Secure");
        }
        if self.params.httponly {
            header.push_str("; HttpOnly");
        }
        if let Some(samesite) = self.params.samesite {
            header.push_str("; SameSite=");
            header.push_str(samesite.as_str());
        }

        header
    }
}
