//! Integration tests for the session lifecycle against a host store.
//!
//! `HostStore` records every contract call so the facade's use of the
//! store can be checked call by call.

use std::collections::BTreeMap;

use period_session::{
    CookieParams, ExecutionContext, ExpiryInstruction, FacadeConfig, InMemoryStore, SameSite,
    SessionFacade, SessionKey, SessionStore, SessionValue, StartOptions,
};
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    ConfigureName(String),
    Initialize(StartOptions),
    Clear,
    Expire(String),
    Destroy,
}

/// A host store backed by a sorted map that logs lifecycle calls.
#[derive(Debug, Default)]
struct HostStore {
    name: String,
    data: BTreeMap<SessionKey, SessionValue>,
    active: bool,
    interactive: bool,
    destroy_fails: bool,
    calls: Vec<Call>,
}

impl SessionStore for HostStore {
    fn configure_name(&mut self, name: &str) {
        self.calls.push(Call::ConfigureName(name.to_string()));
        self.name = name.to_string();
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn initialize(&mut self, overrides: &StartOptions) -> bool {
        self.calls.push(Call::Initialize(overrides.clone()));
        self.active = true;
        true
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn execution_context(&self) -> ExecutionContext {
        if self.interactive {
            ExecutionContext::Interactive
        } else {
            ExecutionContext::Headless
        }
    }

    fn read(&self, key: &SessionKey) -> Option<SessionValue> {
        self.data.get(key).cloned()
    }

    fn write(&mut self, key: SessionKey, value: SessionValue) {
        self.data.insert(key, value);
    }

    fn remove(&mut self, key: &SessionKey) {
        self.data.remove(key);
    }

    fn snapshot(&self) -> Vec<(SessionKey, SessionValue)> {
        self.data
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn uses_cookies(&self) -> bool {
        true
    }

    fn cookie_parameters(&self) -> CookieParams {
        CookieParams {
            path: "/".to_string(),
            secure: true,
            samesite: Some(SameSite::Strict),
            ..Default::default()
        }
    }

    fn expire_client_token(&mut self, instruction: &ExpiryInstruction) {
        self.calls.push(Call::Expire(instruction.to_header_value()));
    }

    fn destroy(&mut self) -> bool {
        self.calls.push(Call::Destroy);
        self.data.clear();
        self.active = false;
        !self.destroy_fails
    }

    fn clear(&mut self) {
        self.calls.push(Call::Clear);
        self.data.clear();
    }
}

#[test]
fn test_name_configured_before_initialize() {
    let mut host = HostStore::default();
    let facade = SessionFacade::new(&mut host, Some("APPSESSID"), true);
    drop(facade);

    assert_eq!(
        host.calls,
        vec![
            Call::ConfigureName("APPSESSID".to_string()),
            Call::Initialize(StartOptions::default()),
        ]
    );
    assert_eq!(host.name, "APPSESSID");
}

#[test]
fn test_stop_sequence() {
    let mut host = HostStore::default();
    {
        let mut facade = SessionFacade::new(&mut host, Some("sid"), true);
        facade.set("a", 1);
        facade.set("b", 2);
        assert!(facade.stop());
        assert_eq!(facade.iter().count(), 0);
    }

    let lifecycle: Vec<_> = host.calls.iter().skip(2).cloned().collect();
    assert_eq!(lifecycle.len(), 3);
    assert_eq!(lifecycle[0], Call::Clear);
    match &lifecycle[1] {
        Call::Expire(header) => {
            assert!(header.starts_with("sid=; Expires="));
            assert!(header.contains("; Secure"));
            assert!(header.ends_with("; SameSite=Strict"));
        }
        other => panic!("expected an expiry, got {other:?}"),
    }
    assert_eq!(lifecycle[2], Call::Destroy);
}

#[test]
fn test_stop_reports_destroy_failure() {
    let mut host = HostStore {
        destroy_fails: true,
        ..Default::default()
    };
    let mut facade = SessionFacade::new(&mut host, None, true);
    assert!(!facade.stop());
}

#[test]
fn test_exists_follows_execution_context() {
    let mut host = HostStore {
        interactive: true,
        ..Default::default()
    };
    assert!(SessionFacade::new(&mut host, None, true).exists());

    let mut host = HostStore::default();
    let facade = SessionFacade::new(&mut host, None, true);
    assert!(facade.store().is_active());
    assert!(!facade.exists());
}

#[test]
fn test_set_two_keys_iterates_both() {
    let mut host = HostStore::default();
    let mut facade = SessionFacade::new(&mut host, None, true);
    facade.set("a", 1);
    facade.set("b", 2);

    let pairs: Vec<_> = facade.iter().collect();
    assert_eq!(facade.count(), 2);
    assert_eq!(pairs.len(), 2);
    assert!(pairs.contains(&(SessionKey::from("a"), json!(1))));
    assert!(pairs.contains(&(SessionKey::from("b"), json!(2))));
}

#[test]
fn test_resumed_session_keeps_data() {
    let store = InMemoryStore::with_data([("user", json!({"id": 7}))])
        .with_context(ExecutionContext::Interactive);
    let facade = SessionFacade::new(store, None, true);

    assert!(facade.exists());
    assert_eq!(facade.get("user"), Some(json!({"id": 7})));
}

#[test]
fn test_boxed_store() {
    let store: Box<dyn SessionStore> = Box::new(InMemoryStore::new());
    let mut facade = SessionFacade::new(store, None, true);
    facade.set(3, "three");
    assert_eq!(facade.flash(3), Some(json!("three")));
    assert!(facade.is_empty());
}

#[test]
fn test_config_file_drives_construction() {
    let path = std::env::temp_dir().join(format!(
        "period-session-{}.yaml",
        std::process::id()
    ));
    std::fs::write(
        &path,
        "name: FILESESSID\nautostart: true\noptions:\n  cookie_domain: example.org\n",
    )
    .unwrap();

    let config = FacadeConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let mut facade = SessionFacade::from_config(InMemoryStore::new(), &config).unwrap();
    assert_eq!(facade.store().name(), "FILESESSID");
    assert_eq!(facade.store().cookie_parameters().domain, "example.org");

    assert!(facade.stop());
    let expired = &facade.store().expired_tokens()[0];
    assert_eq!(expired.name, "FILESESSID");
    assert_eq!(expired.params.domain, "example.org");
}
