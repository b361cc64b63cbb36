//! Login form state and the submit flow.
//!
//! DESIGN
//! ======
//! `submit_login` owns the whole sequence (validate, call the authenticator,
//! update the session, navigate) and talks to the page only through
//! [`LoginSurface`]. The page implements it over signals; tests implement it
//! over a recorder.
//!
//! The submitting flag is held by a guard so it is released on every exit,
//! including a panic unwinding out of the authenticator call.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::firebase::{AuthErrorKind, Authenticator};
use crate::route::AppRoute;
use crate::state::session::SessionContext;
use crate::state::toast::ToastKind;

pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const FIELDS_REQUIRED: &str = "Please fill in the required fields.";
pub const SIGNED_IN: &str = "Signed in successfully.";

/// Per-field and form-level messages shown under the inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
    pub form: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.form.is_none()
    }
}

/// Credentials that passed local validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Check required fields. Email is trimmed; the password is taken verbatim.
///
/// # Errors
///
/// Returns the field errors for every missing value.
pub fn validate_login_input(email: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let email = email.trim();
    let mut errors = FieldErrors::default();
    if email.is_empty() {
        errors.email = Some(EMAIL_REQUIRED.to_owned());
    }
    if password.is_empty() {
        errors.password = Some(PASSWORD_REQUIRED.to_owned());
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Result of one submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A previous submit is still outstanding.
    Busy,
    /// Required fields missing; the authenticator was not called.
    Invalid,
    SignedIn,
    Failed(AuthErrorKind),
}

/// Page-side effects of the submit flow.
pub trait LoginSurface {
    fn is_submitting(&self) -> bool;

    fn set_submitting(&self, submitting: bool);

    fn set_errors(&self, errors: FieldErrors);

    /// Mark inputs with the error style after a failed attempt.
    fn set_failed(&self, failed: bool);

    fn show_toast(&self, message: &str, kind: ToastKind);

    fn navigate(&self, route: AppRoute);
}

struct SubmissionGuard<'a, S: LoginSurface + ?Sized> {
    surface: &'a S,
}

impl<'a, S: LoginSurface + ?Sized> SubmissionGuard<'a, S> {
    fn engage(surface: &'a S) -> Self {
        surface.set_submitting(true);
        Self { surface }
    }
}

impl<S: LoginSurface + ?Sized> Drop for SubmissionGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_submitting(false);
    }
}

/// Run one login attempt.
///
/// The session is written only after the authenticator affirms the
/// credential, and navigation to the dashboard happens at most once.
pub async fn submit_login<A, C, S>(
    email: &str,
    password: &str,
    authenticator: &A,
    session: &C,
    surface: &S,
) -> SubmitOutcome
where
    A: Authenticator + ?Sized,
    C: SessionContext + ?Sized,
    S: LoginSurface + ?Sized,
{
    if surface.is_submitting() {
        return SubmitOutcome::Busy;
    }

    log::info!("login submitted: email={} has_password={}", email.trim(), !password.is_empty());

    let credentials = match validate_login_input(email, password) {
        Ok(credentials) => credentials,
        Err(errors) => {
            surface.set_errors(errors);
            surface.set_failed(true);
            surface.show_toast(FIELDS_REQUIRED, ToastKind::Error);
            return SubmitOutcome::Invalid;
        }
    };

    let guard = SubmissionGuard::engage(surface);
    surface.set_errors(FieldErrors::default());

    match authenticator.sign_in(&credentials.email, &credentials.password).await {
        Ok(user) => {
            log::info!("signed in: uid={}", user.uid);
            session.set_current_user(Some(user));
            session.mark_logged_in();
            surface.set_failed(false);
            surface.show_toast(SIGNED_IN, ToastKind::Success);
            // Release before navigating; the page's signals go away with it.
            drop(guard);
            surface.navigate(AppRoute::Dashboard);
            SubmitOutcome::SignedIn
        }
        Err(err) => {
            let kind = err.kind();
            log::warn!("sign-in failed: code={} kind={kind:?}", err.code());
            let message = kind.message();
            surface.set_errors(FieldErrors { form: Some(message.to_owned()), ..FieldErrors::default() });
            surface.set_failed(true);
            surface.show_toast(message, ToastKind::Error);
            SubmitOutcome::Failed(kind)
        }
    }
}
