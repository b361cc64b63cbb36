use super::*;

fn user() -> User {
    User {
        uid: "uid-1".to_owned(),
        email: "alice@example.com".to_owned(),
        display_name: Some("Alice".to_owned()),
        id_token: "id".to_owned(),
        refresh_token: "refresh".to_owned(),
        expires_in_secs: 3600,
    }
}

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_default_logged_out_without_user() {
    let state = SessionState::default();
    assert!(!state.is_logged_in);
    assert!(state.current_user.is_none());
}

// =============================================================
// SessionContext over RefCell
// =============================================================

#[test]
fn mark_logged_in_does_not_touch_user() {
    let session = RefCell::new(SessionState::default());
    session.mark_logged_in();
    assert!(session.is_logged_in());
    assert_eq!(session.current_user(), None);
}

#[test]
fn set_current_user_does_not_touch_flag() {
    let session = RefCell::new(SessionState::default());
    session.set_current_user(Some(user()));
    assert!(!session.is_logged_in());
    assert_eq!(session.current_user(), Some(user()));
}

#[test]
fn logout_clears_flag_and_user() {
    let session = RefCell::new(SessionState::default());
    session.set_current_user(Some(user()));
    session.mark_logged_in();
    session.logout();
    assert_eq!(*session.borrow(), SessionState::default());
}

// =============================================================
// SessionContext over RwSignal
// =============================================================

#[test]
fn signal_session_round_trips_operations() {
    Owner::new().with(|| {
        let session = RwSignal::new(SessionState::default());
        assert!(!SessionContext::is_logged_in(&session));

        session.set_current_user(Some(user()));
        session.mark_logged_in();
        assert!(SessionContext::is_logged_in(&session));
        assert_eq!(SessionContext::current_user(&session).map(|u| u.uid), Some("uid-1".to_owned()));

        session.logout();
        assert!(!SessionContext::is_logged_in(&session));
        assert!(SessionContext::current_user(&session).is_none());
    });
}
