//! # period-session
//!
//! Session facade for request-handling code.
//!
//! This crate provides:
//! - The [`SessionStore`] contract a host session subsystem implements
//! - [`SessionFacade`]: get/set/delete/has, read-once flash values,
//!   iteration, counting and the start/stop lifecycle
//! - [`InMemoryStore`]: an in-process store for embedders and tests
//!
//! ## Architecture
//!
//! This is Layer 1 in the architecture - it depends on period-session-core
//! for keys, values, cookie parameters and configuration.
//!
//! ## Example
//!
//! ```
//! use period_session::{InMemoryStore, SessionFacade};
//!
//! let mut session = SessionFacade::new(InMemoryStore::new(), Some("APPSESSID"), true);
//! session.set("notice", "Profile saved");
//!
//! assert_eq!(session.flash("notice"), Some("Profile saved".into()));
//! assert!(!session.has("notice"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod facade;
pub mod memory;
pub mod store;

// Re-export commonly used types
pub use facade::{Iter, SessionFacade};
pub use memory::{InMemoryStore, DEFAULT_SESSION_NAME};
pub use store::SessionStore;

pub use period_session_core::{
    CookieParams, Error, ExecutionContext, ExpiryInstruction, FacadeConfig, Result, SameSite,
    SessionKey, SessionValue, StartOptions,
};
