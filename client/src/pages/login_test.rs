use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "secret"),
        Some(("user@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), None);
    assert_eq!(validate_login_input("a@b.com", ""), None);
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("a@b.com", " pass "),
        Some(("a@b.com".to_owned(), " pass ".to_owned()))
    );
}

#[test]
fn login_failure_message_matches_copy() {
    assert_eq!(LOGIN_FAILED_MESSAGE, "Erro ao fazer login. Verifique suas credenciais.");
}
