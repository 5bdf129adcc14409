//! # period-session-core
//!
//! Core types for Period sessions.
//!
//! This crate contains all fundamental types with **no internal dependencies**
//! on other period crates. It provides:
//!
//! - Session keys (string or integer, compared by exact identity)
//! - Session values (opaque JSON payloads)
//! - Execution context detection (interactive vs headless)
//! - Cookie parameters and client-token expiry instructions
//! - Start options and facade configuration
//! - Error types
//!
//! ## Architecture
//!
//! This is Layer 0 in the architecture - `period-session` depends on this one,
//! but this crate has no dependencies on other period crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod cookie;
pub mod error;
pub mod key;
pub mod options;
pub mod value;

// Re-export commonly used types
pub use config::{validate_name, FacadeConfig};
pub use context::ExecutionContext;
pub use cookie::{CookieParams, ExpiryInstruction, SameSite, EXPIRY_OFFSET_SECS};
pub use error::{Error, Result};
pub use key::SessionKey;
pub use options::StartOptions;
pub use value::SessionValue;
