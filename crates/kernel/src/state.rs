//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::menu::{MenuItem, menu_tree, validate_tree};
use crate::models::Role;
use crate::permissions::RolePermissionMap;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Role assumed when a request carries none.
    default_role: Role,

    /// Role → permission table.
    registry: &'static RolePermissionMap,

    /// Navigation tree served to the sidebar.
    menu: &'static [MenuItem],
}

impl AppState {
    /// Build state from configuration.
    ///
    /// Fails if the permission table and the menu tree disagree.
    pub fn new(config: &Config) -> Result<Self> {
        let registry = RolePermissionMap::global();
        registry
            .validate()
            .context("role permission table is inconsistent")?;

        let menu = menu_tree();
        validate_tree(menu, registry).context("menu tree is inconsistent")?;

        info!(
            roles = Role::ALL.len(),
            menu_items = menu.len(),
            default_role = %config.default_role,
            "access tables validated"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                default_role: config.default_role,
                registry,
                menu,
            }),
        })
    }

    pub fn default_role(&self) -> Role {
        self.inner.default_role
    }

    pub fn registry(&self) -> &'static RolePermissionMap {
        self.inner.registry
    }

    pub fn menu(&self) -> &'static [MenuItem] {
        self.inner.menu
    }
}
