use super::*;

#[test]
fn submit_returns_trimmed_email() {
    assert_eq!(submit_forgot_password("  a@b.com "), Some("a@b.com".to_owned()));
}

#[test]
fn submit_with_blank_email_captures_nothing() {
    assert_eq!(submit_forgot_password("   "), None);
}
