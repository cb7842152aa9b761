//! Medequip Access Kernel Library
//!
//! Role permissions and per-role menu visibility for the medical-equipment
//! dashboard, plus the HTTP surface that serves them. The main entry point
//! for running the server is the `medequip` binary.

pub mod config;
pub mod error;
pub mod menu;
pub mod middleware;
pub mod models;
pub mod permissions;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{AccessError, AppError, AppResult};
pub use models::{Permission, Role};
pub use permissions::{AccessPolicy, PermissionSet, RolePermissionMap};
pub use state::AppState;
