//! Execution context detection.
//!
//! Session semantics presume a client connection. A process that is not
//! serving a request (a CLI tool, a worker, a test harness) runs in a
//! headless context where no session is ever reported as existing.

use serde::{Deserialize, Serialize};

/// Environment variables whose presence marks a request-serving process.
const REQUEST_ENV_VARS: &[&str] = &["GATEWAY_INTERFACE", "REQUEST_METHOD"];

/// How the current process was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionContext {
    /// Serving a client request
    Interactive,
    /// Not serving a request (command line, background job)
    Headless,
}

impl ExecutionContext {
    /// Detect the current execution context at runtime.
    ///
    /// # Detection Logic
    ///
    /// - **Interactive**: a CGI-style `GATEWAY_INTERFACE` or `REQUEST_METHOD`
    ///   variable is present in the environment
    /// - **Headless**: anything else
    ///
    /// # Examples
    ///
    /// ```
    /// use period_session_core::ExecutionContext;
    ///
    /// let context = ExecutionContext::detect();
    /// println!("Running as: {}", context);
    /// ```
    pub fn detect() -> Self {
        Self::detect_with(|name| std::env::var_os(name).is_some())
    }

    /// Detect the context using a custom environment lookup.
    pub fn detect_with<F>(mut is_set: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        if REQUEST_ENV_VARS.iter().any(|name| is_set(*name)) {
            ExecutionContext::Interactive
        } else {
            ExecutionContext::Headless
        }
    }

    /// Check if this context serves a client request.
    pub fn is_interactive(&self) -> bool {
        matches!(self, ExecutionContext::Interactive)
    }

    /// Get the context name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ExecutionContext::Interactive => "interactive",
            ExecutionContext::Headless => "headless",
        }
    }
}

impl std::fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_returns_a_context() {
        let context = ExecutionContext::detect();
        assert!(matches!(
            context,
            ExecutionContext::Interactive | ExecutionContext::Headless
        ));
    }

    #[test]
    fn test_detect_with_gateway_interface() {
        let context = ExecutionContext::detect_with(|name| name == "GATEWAY_INTERFACE");
        assert_eq!(context, ExecutionContext::Interactive);
    }

    #[test]
    fn test_detect_with_request_method() {
        let context = ExecutionContext::detect_with(|name| name == "REQUEST_METHOD");
        assert_eq!(context, ExecutionContext::Interactive);
    }

    #[test]
    fn test_detect_with_empty_environment() {
        let context = ExecutionContext::detect_with(|_| false);
        assert_eq!(context, ExecutionContext::Headless);
    }

    #[test]
    fn test_is_interactive() {
        assert!(ExecutionContext::Interactive.is_interactive());
        assert!(!ExecutionContext::Headless.is_interactive());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ExecutionContext::Interactive), "interactive");
        assert_eq!(format!("{}", ExecutionContext::Headless), "headless");
    }
}
