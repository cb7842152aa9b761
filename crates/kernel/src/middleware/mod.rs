//! HTTP middleware components.
//!
//! Provides caller role resolution and permission guards.

pub mod access;

pub use access::{ROLE_HEADER, require_permission, resolve_role};
