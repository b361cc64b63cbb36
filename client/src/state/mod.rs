//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `login`, `toast`) so pages depend on
//! small focused models. None of it is persisted.

pub mod login;
pub mod session;
pub mod toast;
