use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

use super::*;

const NOW: f64 = 1_700_000_000.0;

fn token_with(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

fn admin_payload(exp: f64) -> serde_json::Value {
    serde_json::json!({ "sub": "u1", "email": "a@b.com", "role": "ADMIN", "exp": exp })
}

// =============================================================
// decode
// =============================================================

#[test]
fn decode_copies_claims_verbatim() {
    let token = token_with(&admin_payload(NOW + 3600.0));
    let user = decode(&token).unwrap();
    assert_eq!(user, User { user_id: "u1".to_owned(), email: "a@b.com".to_owned(), role: Role::Admin });
}

#[test]
fn decode_maps_staff_role() {
    let token = token_with(&serde_json::json!({
        "sub": "u2", "email": "staff@b.com", "role": "FUNCIONARIO", "exp": NOW + 60.0
    }));
    assert_eq!(decode(&token).unwrap().role, Role::Staff);
}

#[test]
fn decode_accepts_numeric_subject() {
    let token = token_with(&serde_json::json!({
        "sub": 42, "email": "a@b.com", "role": "ADMIN", "exp": NOW
    }));
    assert_eq!(decode(&token).unwrap().user_id, "42");
}

#[test]
fn decode_ignores_extra_claims() {
    let token = token_with(&serde_json::json!({
        "sub": "u1", "email": "a@b.com", "role": "ADMIN", "exp": NOW, "iat": NOW - 10.0, "name": "Ana"
    }));
    assert!(decode(&token).is_ok());
}

#[test]
fn decode_accepts_padded_standard_alphabet() {
    let header = STANDARD.encode(br#"{"alg":"HS256"}"#);
    let body = STANDARD.encode(admin_payload(NOW).to_string());
    let token = format!("{header}.{body}.sig");
    assert_eq!(decode(&token).unwrap().email, "a@b.com");
}

#[test]
fn decode_rejects_wrong_segment_count() {
    assert_eq!(decode("not-a-token"), Err(TokenError::Segments(1)));
    assert_eq!(decode("a.b"), Err(TokenError::Segments(2)));
    assert_eq!(decode("a.b.c.d"), Err(TokenError::Segments(4)));
    assert_eq!(decode(""), Err(TokenError::Segments(1)));
}

#[test]
fn decode_rejects_invalid_base64() {
    assert!(matches!(decode("h.!!!.s"), Err(TokenError::Base64(_))));
}

#[test]
fn decode_rejects_non_json_payload() {
    let body = URL_SAFE_NO_PAD.encode("definitely not json");
    assert!(matches!(decode(&format!("h.{body}.s")), Err(TokenError::Json(_))));
}

#[test]
fn decode_rejects_empty_payload_segment() {
    assert!(matches!(decode("h..s"), Err(TokenError::Json(_))));
}

#[test]
fn decode_reports_missing_claims() {
    let token = token_with(&serde_json::json!({ "sub": "u1", "role": "ADMIN", "exp": NOW }));
    assert_eq!(decode(&token), Err(TokenError::MissingClaim("email")));

    let token = token_with(&serde_json::json!({ "email": "a@b.com", "role": "ADMIN", "exp": NOW }));
    assert_eq!(decode(&token), Err(TokenError::MissingClaim("sub")));

    let token = token_with(&serde_json::json!({ "sub": "u1", "email": "a@b.com", "role": "ADMIN" }));
    assert_eq!(decode(&token), Err(TokenError::MissingClaim("exp")));
}

#[test]
fn decode_rejects_unknown_role() {
    let token = token_with(&serde_json::json!({
        "sub": "u1", "email": "a@b.com", "role": "GERENTE", "exp": NOW
    }));
    assert_eq!(decode(&token), Err(TokenError::UnknownRole("GERENTE".to_owned())));
}

#[test]
fn decode_claims_keeps_expiry() {
    let token = token_with(&admin_payload(NOW + 5.0));
    assert!((decode_claims(&token).unwrap().exp - (NOW + 5.0)).abs() < f64::EPSILON);
}

// =============================================================
// is_expired_at
// =============================================================

#[test]
fn future_expiry_is_not_expired() {
    let token = token_with(&admin_payload(NOW + 3600.0));
    assert!(!is_expired_at(&token, NOW));
}

#[test]
fn past_expiry_is_expired() {
    let token = token_with(&admin_payload(NOW - 1.0));
    assert!(is_expired_at(&token, NOW));
}

#[test]
fn expiry_equal_to_now_is_expired() {
    let token = token_with(&admin_payload(NOW));
    assert!(is_expired_at(&token, NOW));
}

#[test]
fn past_expiry_is_expired_even_with_invalid_other_claims() {
    let token = token_with(&serde_json::json!({ "role": 7, "exp": NOW - 100.0 }));
    assert!(is_expired_at(&token, NOW));
}

#[test]
fn fractional_expiry_is_compared_in_seconds() {
    let token = token_with(&serde_json::json!({ "exp": NOW + 0.5 }));
    assert!(!is_expired_at(&token, NOW));
    assert!(is_expired_at(&token, NOW + 1.0));
}

#[test]
fn undecodable_tokens_are_expired() {
    assert!(is_expired_at("garbage", NOW));
    assert!(is_expired_at("a.b", NOW));
    assert!(is_expired_at("h.!!!.s", NOW));
    let body = URL_SAFE_NO_PAD.encode("[1,2,3]");
    assert!(is_expired_at(&format!("h.{body}.s"), NOW));
}

#[test]
fn missing_expiry_is_expired() {
    let token = token_with(&serde_json::json!({ "sub": "u1", "email": "a@b.com", "role": "ADMIN" }));
    assert!(is_expired_at(&token, NOW));
}

#[test]
fn string_expiry_is_expired() {
    let token = token_with(&serde_json::json!({ "exp": "tomorrow" }));
    assert!(is_expired_at(&token, NOW));
}

#[test]
fn is_expired_uses_wall_clock() {
    let far_future = token_with(&admin_payload(now_secs() + 86_400.0));
    let long_ago = token_with(&admin_payload(1.0));
    assert!(!is_expired(&far_future));
    assert!(is_expired(&long_ago));
}
