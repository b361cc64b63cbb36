//! Networking modules for the identity platform.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST exchange and `types` defines the wire schema and the
//! resulting [`types::User`].

pub mod api;
pub mod types;
