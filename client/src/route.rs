//! Page routes the app navigates between.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Signup,
    ForgotPassword,
    Dashboard,
}

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Signup => "/signup",
            Self::ForgotPassword => "/forgot-password",
            Self::Dashboard => "/dashboard",
        }
    }
}
