//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome for the auth pages and read/write the page
//! state signals they are handed.

pub mod auth_card;
pub mod toast;
