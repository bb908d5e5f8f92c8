use std::sync::Mutex;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::session::storage::MemoryStorage;
use crate::state::auth::Role;

const NOW: f64 = 1_700_000_000.0;

fn fixed_clock() -> f64 {
    NOW
}

fn token_for(sub: &str, role: &str, exp: f64) -> String {
    let payload = serde_json::json!({ "sub": sub, "email": format!("{sub}@b.com"), "role": role, "exp": exp });
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload.to_string()))
}

fn valid_token() -> String {
    token_for("u1", "ADMIN", NOW + 3600.0)
}

fn expired_token() -> String {
    token_for("u1", "ADMIN", NOW - 3600.0)
}

fn store_with(storage: &MemoryStorage) -> SessionStore {
    SessionStore::new(Arc::new(storage.clone())).with_clock(fixed_clock)
}

#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<Option<String>>>,
}

impl SessionListener for Recorder {
    fn token_changed(&self, token: Option<&str>) {
        self.seen.lock().unwrap().push(token.map(str::to_owned));
    }
}

// =============================================================
// initialize
// =============================================================

#[test]
fn new_store_is_uninitialized() {
    let store = store_with(&MemoryStorage::default());
    assert_eq!(store.state(), &AuthState::Uninitialized);
    assert!(store.state().is_loading());
}

#[test]
fn initialize_without_stored_token_is_anonymous() {
    let mut store = store_with(&MemoryStorage::default());
    assert_eq!(store.initialize(), &AuthState::Anonymous);
    assert!(!store.state().is_loading());
}

#[test]
fn initialize_restores_valid_stored_token_without_login() {
    let token = valid_token();
    let storage = MemoryStorage::with_token(&token);
    let mut store = store_with(&storage);
    store.initialize();
    assert!(!store.state().is_loading());
    assert!(store.state().is_authenticated());
    assert_eq!(store.state().token(), Some(token.as_str()));
    assert_eq!(store.state().user().map(|u| u.user_id.as_str()), Some("u1"));
    assert_eq!(storage.load(), Some(token));
}

#[test]
fn initialize_erases_expired_stored_token() {
    let storage = MemoryStorage::with_token(&expired_token());
    let mut store = store_with(&storage);
    assert_eq!(store.initialize(), &AuthState::Anonymous);
    assert_eq!(storage.load(), None);
}

#[test]
fn initialize_erases_undecodable_stored_token() {
    let storage = MemoryStorage::with_token(&token_for("u1", "GERENTE", NOW + 3600.0));
    let mut store = store_with(&storage);
    assert_eq!(store.initialize(), &AuthState::Anonymous);
    assert_eq!(storage.load(), None);
}

#[test]
fn initialize_erases_garbage_stored_token() {
    let storage = MemoryStorage::with_token("garbage");
    let mut store = store_with(&storage);
    assert_eq!(store.initialize(), &AuthState::Anonymous);
    assert_eq!(storage.load(), None);
}

#[test]
fn initialize_runs_only_once() {
    let storage = MemoryStorage::default();
    let mut store = store_with(&storage);
    store.initialize();
    storage.save(&valid_token());
    assert_eq!(store.initialize(), &AuthState::Anonymous);
}

// =============================================================
// login
// =============================================================

#[test]
fn login_with_valid_token_authenticates_and_persists() {
    let storage = MemoryStorage::default();
    let mut store = store_with(&storage);
    store.initialize();
    let token = valid_token();

    let user = store.login(&token).unwrap();

    assert_eq!(user.email, "u1@b.com");
    assert_eq!(user.role, Role::Admin);
    assert!(store.state().is_authenticated());
    assert_eq!(store.state().user(), Some(&user));
    assert_eq!(storage.load(), Some(token));
}

#[test]
fn login_with_expired_token_fails_and_leaves_state() {
    let storage = MemoryStorage::default();
    let mut store = store_with(&storage);
    store.initialize();

    assert_eq!(store.login(&expired_token()), Err(SessionError::Expired));
    assert_eq!(store.state(), &AuthState::Anonymous);
    assert_eq!(storage.load(), None);
}

#[test]
fn login_with_malformed_token_fails_and_keeps_prior_session() {
    let storage = MemoryStorage::default();
    let mut store = store_with(&storage);
    store.initialize();
    let token = valid_token();
    store.login(&token).unwrap();
    let before = store.state().clone();

    let err = store.login("not.a-token").unwrap_err();

    assert!(matches!(err, SessionError::Malformed(_)));
    assert_eq!(store.state(), &before);
    assert_eq!(storage.load(), Some(token));
}

#[test]
fn login_replaces_previous_session() {
    let storage = MemoryStorage::default();
    let mut store = store_with(&storage);
    store.login(&valid_token()).unwrap();
    let second = token_for("u2", "FUNCIONARIO", NOW + 60.0);

    store.login(&second).unwrap();

    assert_eq!(store.state().role(), Some(Role::Staff));
    assert_eq!(store.state().token(), Some(second.as_str()));
    assert_eq!(storage.load(), Some(second));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_memory_and_storage() {
    let storage = MemoryStorage::default();
    let mut store = store_with(&storage);
    store.login(&valid_token()).unwrap();

    store.logout();

    assert_eq!(store.state(), &AuthState::Anonymous);
    assert!(store.state().user().is_none());
    assert_eq!(storage.load(), None);
}

#[test]
fn logout_twice_is_harmless() {
    let storage = MemoryStorage::default();
    let mut store = store_with(&storage);
    store.login(&valid_token()).unwrap();
    store.logout();
    store.logout();
    assert!(!store.state().is_authenticated());
    assert_eq!(storage.load(), None);
}

// =============================================================
// listeners
// =============================================================

#[test]
fn subscribe_replays_current_token() {
    let storage = MemoryStorage::with_token(&valid_token());
    let mut store = store_with(&storage);
    store.initialize();
    let recorder = Arc::new(Recorder::default());

    store.subscribe(recorder.clone());

    assert_eq!(recorder.seen.lock().unwrap().as_slice(), &[Some(valid_token())]);
}

#[test]
fn listeners_follow_every_transition() {
    let mut store = store_with(&MemoryStorage::default());
    let recorder = Arc::new(Recorder::default());
    store.subscribe(recorder.clone());
    let token = valid_token();

    store.initialize();
    store.login(&token).unwrap();
    let _ = store.login(&expired_token());
    store.logout();

    assert_eq!(recorder.seen.lock().unwrap().as_slice(), &[None, None, Some(token), None]);
}
