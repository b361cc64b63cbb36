//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing/session concerns from page rendering to
//! improve reuse and testability.

pub mod auth;
