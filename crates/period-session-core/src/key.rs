//! Session key types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Key addressing one entry of a session store.
///
/// Keys are either strings or integers and are compared by exact identity:
/// `SessionKey::Str("1")` and `SessionKey::Int(1)` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SessionKey {
    /// Integer key
    Int(i64),
    /// String key
    Str(String),
}

impl SessionKey {
    /// Get the string form, if this is a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SessionKey::Str(s) => Some(s),
            SessionKey::Int(_) => None,
        }
    }

    /// Get the integer form, if this is an integer key.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SessionKey::Int(i) => Some(*i),
            SessionKey::Str(_) => None,
        }
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionKey::Int(i) => write!(f, "{i}"),
            SessionKey::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for SessionKey {
    fn from(s: &str) -> Self {
        SessionKey::Str(s.to_string())
    }
}

impl From<String> for SessionKey {
    fn from(s: String) -> Self {
        SessionKey::Str(s)
    }
}

impl From<&String> for SessionKey {
    fn from(s: &String) -> Self {
        SessionKey::Str(s.clone())
    }
}

impl From<&SessionKey> for SessionKey {
    fn from(key: &SessionKey) -> Self {
        key.clone()
    }
}

impl From<i64> for SessionKey {
    fn from(i: i64) -> Self {
        SessionKey::Int(i)
    }
}

impl From<i32> for SessionKey {
    fn from(i: i32) -> Self {
        SessionKey::Int(i64::from(i))
    }
}

impl From<u32> for SessionKey {
    fn from(i: u32) -> Self {
        SessionKey::Int(i64::from(i))
    }
}

impl TryFrom<usize> for SessionKey {
    type Error = Error;

    fn try_from(i: usize) -> Result<Self, Self::Error> {
        i64::try_from(i)
            .map(SessionKey::Int)
            .map_err(|_| Error::InvalidKey(i.to_string()))
    }
}

impl TryFrom<u64> for SessionKey {
    type Error = Error;

    fn try_from(i: u64) -> Result<Self, Self::Error> {
        i64::try_from(i)
            .map(SessionKey::Int)
            .map_err(|_| Error::InvalidKey(i.to_string()))
    }
}
