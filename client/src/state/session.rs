//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once by the root component and handed to each page as a prop.
//! Pages mutate it only through [`SessionContext`], so the login flow can be
//! exercised against a plain `RefCell` in tests. Nothing is persisted; a full
//! reload starts logged out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use leptos::prelude::*;

use crate::net::types::User;

/// Whether someone is signed in, and who.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_logged_in: bool,
    pub current_user: Option<User>,
}

/// Read/write operations pages may perform on the session.
pub trait SessionContext {
    fn is_logged_in(&self) -> bool;

    fn current_user(&self) -> Option<User>;

    /// Flip the logged-in flag without touching the user.
    fn mark_logged_in(&self);

    fn set_current_user(&self, user: Option<User>);

    /// Clear both the flag and the user.
    fn logout(&self);
}

impl SessionContext for RwSignal<SessionState> {
    fn is_logged_in(&self) -> bool {
        self.with(|s| s.is_logged_in)
    }

    fn current_user(&self) -> Option<User> {
        self.with(|s| s.current_user.clone())
    }

    fn mark_logged_in(&self) {
        self.update(|s| s.is_logged_in = true);
    }

    fn set_current_user(&self, user: Option<User>) {
        self.update(|s| s.current_user = user);
    }

    fn logout(&self) {
        self.set(SessionState::default());
    }
}

impl SessionContext for RefCell<SessionState> {
    fn is_logged_in(&self) -> bool {
        self.borrow().is_logged_in
    }

    fn current_user(&self) -> Option<User> {
        self.borrow().current_user.clone()
    }

    fn mark_logged_in(&self) {
        self.borrow_mut().is_logged_in = true;
    }

    fn set_current_user(&self, user: Option<User>) {
        self.borrow_mut().current_user = user;
    }

    fn logout(&self) {
        *self.borrow_mut() = SessionState::default();
    }
}
