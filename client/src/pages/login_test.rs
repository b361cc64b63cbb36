use super::*;

#[test]
fn input_class_switches_on_error() {
    assert_eq!(input_class(false), "auth-input");
    assert_eq!(input_class(true), "auth-input auth-input--error");
}

#[test]
fn submit_label_reflects_submitting() {
    assert_eq!(submit_label(false), "Sign In");
    assert_eq!(submit_label(true), "Signing In...");
}
