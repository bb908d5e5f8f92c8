use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use leptos::prelude::Owner;

use super::*;
use crate::session::storage::{MemoryStorage, TokenStorage};

fn future_token() -> String {
    let exp = token::now_secs() + 3600.0;
    let payload = serde_json::json!({ "sub": "u9", "email": "x@y.com", "role": "FUNCIONARIO", "exp": exp });
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload.to_string()))
}

#[test]
fn handle_login_logout_round_trip() {
    Owner::new().with(|| {
        let storage = MemoryStorage::default();
        let handle = SessionHandle::new(SessionStore::new(Arc::new(storage.clone())));
        handle.initialize();
        assert!(!handle.is_loading());
        assert!(!handle.is_authenticated());

        let user = handle.login(&future_token()).unwrap();
        assert_eq!(user.role, Role::Staff);
        assert!(handle.is_authenticated());
        assert_eq!(handle.role(), Some(Role::Staff));

        handle.logout();
        assert!(!handle.is_authenticated());
        assert_eq!(handle.user(), None);
        assert_eq!(storage.load(), None);
    });
}

#[test]
fn handle_login_failure_keeps_anonymous_state() {
    Owner::new().with(|| {
        let handle = SessionHandle::new(SessionStore::new(Arc::new(MemoryStorage::default())));
        handle.initialize();
        assert!(handle.login("bad").is_err());
        assert_eq!(handle.state(), AuthState::Anonymous);
    });
}

#[test]
fn return_to_is_consumed_once() {
    Owner::new().with(|| {
        let handle = SessionHandle::new(SessionStore::new(Arc::new(MemoryStorage::default())));
        handle.remember_return_to("/history".to_owned());
        assert_eq!(handle.take_return_to().as_deref(), Some("/history"));
        assert_eq!(handle.take_return_to(), None);
    });
}

#[test]
fn browser_session_wires_gateway_listener() {
    Owner::new().with(|| {
        let api = ApiClient::new("http://api.test");
        let handle = SessionHandle::for_browser(&api);
        assert!(api.active_interceptor().is_none());
        handle.login(&future_token()).unwrap();
        assert!(api.active_interceptor().is_some());
        handle.logout();
        assert!(api.active_interceptor().is_none());
    });
}
