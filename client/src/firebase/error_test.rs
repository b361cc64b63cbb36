use super::*;

// =============================================================
// classify — REST dialect
// =============================================================

#[test]
fn rest_credential_codes_are_invalid_credential() {
    for code in ["INVALID_PASSWORD", "EMAIL_NOT_FOUND", "INVALID_LOGIN_CREDENTIALS", "USER_DISABLED"] {
        assert_eq!(classify(code), AuthErrorKind::InvalidCredential, "{code}");
    }
}

#[test]
fn rest_code_with_detail_suffix_matches_head() {
    assert_eq!(
        classify("TOO_MANY_ATTEMPTS_TRY_LATER : Access to this account has been temporarily disabled"),
        AuthErrorKind::RateLimited
    );
    assert_eq!(classify("INVALID_EMAIL : bad format"), AuthErrorKind::InvalidEmail);
}

#[test]
fn rest_api_key_message_is_misconfigured() {
    assert_eq!(
        classify("API key not valid. Please pass a valid API key."),
        AuthErrorKind::Misconfigured
    );
    assert_eq!(classify("CONFIGURATION_NOT_FOUND"), AuthErrorKind::Misconfigured);
    assert_eq!(classify("PROJECT_NOT_FOUND"), AuthErrorKind::Misconfigured);
}

// =============================================================
// classify — SDK dialect
// =============================================================

#[test]
fn sdk_credential_codes_are_invalid_credential() {
    for code in [
        "auth/wrong-password",
        "auth/user-not-found",
        "auth/invalid-credential",
        "auth/invalid-login-credentials",
        "auth/user-disabled",
    ] {
        assert_eq!(classify(code), AuthErrorKind::InvalidCredential, "{code}");
    }
}

#[test]
fn sdk_other_codes() {
    assert_eq!(classify("auth/invalid-email"), AuthErrorKind::InvalidEmail);
    assert_eq!(classify("auth/too-many-requests"), AuthErrorKind::RateLimited);
    assert_eq!(classify("auth/network-request-failed"), AuthErrorKind::Network);
    assert_eq!(classify("auth/invalid-api-key"), AuthErrorKind::Misconfigured);
    assert_eq!(classify("auth/configuration-not-found"), AuthErrorKind::Misconfigured);
}

#[test]
fn unknown_codes_are_generic() {
    assert_eq!(classify(""), AuthErrorKind::Generic);
    assert_eq!(classify("auth/internal-error"), AuthErrorKind::Generic);
    assert_eq!(classify("SOMETHING_NEW"), AuthErrorKind::Generic);
}

// =============================================================
// AuthError
// =============================================================

#[test]
fn auth_error_wrong_password_message() {
    let err = AuthError::new("auth/wrong-password");
    assert_eq!(err.code(), "auth/wrong-password");
    assert_eq!(err.message(), "Invalid email or password.");
}

#[test]
fn auth_error_network_constructor() {
    assert_eq!(AuthError::network().kind(), AuthErrorKind::Network);
}

// =============================================================
// ConfigError / InitError
// =============================================================

#[test]
fn config_error_names_missing_keys() {
    let err = ConfigError::Missing(vec!["FIREBASE_API_KEY", "FIREBASE_APP_ID"]);
    assert_eq!(
        err.to_string(),
        "missing required Firebase configuration: FIREBASE_API_KEY, FIREBASE_APP_ID"
    );
}

#[test]
fn init_error_wraps_config_error_transparently() {
    let err = InitError::from(ConfigError::Missing(vec!["FIREBASE_PROJECT_ID"]));
    assert_eq!(err.to_string(), "missing required Firebase configuration: FIREBASE_PROJECT_ID");
}
