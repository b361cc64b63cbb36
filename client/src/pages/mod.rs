//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Session and Firebase handles arrive as props from the
//! root component.

pub mod dashboard;
pub mod forgot_password;
pub mod login;
