//! Session value type.
//!
//! Values are opaque to the facade. They are carried as JSON documents so any
//! serializable type can be stored and a host can persist them as it likes.

/// A value stored in a session.
pub type SessionValue = serde_json::Value;
