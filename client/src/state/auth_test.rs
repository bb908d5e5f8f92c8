use super::*;

fn admin() -> User {
    User { user_id: "u1".to_owned(), email: "a@b.com".to_owned(), role: Role::Admin }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_from_claim_accepts_known_values() {
    assert_eq!(Role::from_claim("ADMIN"), Some(Role::Admin));
    assert_eq!(Role::from_claim("FUNCIONARIO"), Some(Role::Staff));
}

#[test]
fn role_from_claim_rejects_unknown_and_case_variants() {
    assert_eq!(Role::from_claim("admin"), None);
    assert_eq!(Role::from_claim("GERENTE"), None);
    assert_eq!(Role::from_claim(""), None);
}

#[test]
fn role_serde_uses_claim_values() {
    assert_eq!(serde_json::to_string(&Role::Staff).unwrap(), "\"FUNCIONARIO\"");
    let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
    assert_eq!(role, Role::Admin);
    assert_eq!(role.as_claim(), "ADMIN");
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_uninitialized_and_loading() {
    let state = AuthState::default();
    assert_eq!(state, AuthState::Uninitialized);
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
}

#[test]
fn loading_state_has_no_user() {
    let state = AuthState::Loading;
    assert!(state.is_loading());
    assert!(state.user().is_none());
    assert!(state.token().is_none());
}

#[test]
fn anonymous_is_neither_loading_nor_authenticated() {
    let state = AuthState::Anonymous;
    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
    assert_eq!(state.role(), None);
}

#[test]
fn authenticated_exposes_user_and_token_together() {
    let state = AuthState::Authenticated { user: admin(), token: "t".to_owned() };
    assert!(state.is_authenticated());
    assert!(!state.is_loading());
    assert_eq!(state.user(), Some(&admin()));
    assert_eq!(state.token(), Some("t"));
    assert_eq!(state.role(), Some(Role::Admin));
}
