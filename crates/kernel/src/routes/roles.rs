//! Role listing for user administration.
//!
//! Both routes sit behind the `user_management` guard.

use axum::extract::{Path, Request, State};
use axum::middleware::{Next, from_fn};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::require_permission;
use crate::models::{Permission, Role};
use crate::permissions::RolePermissionMap;
use crate::state::AppState;

#[derive(Serialize)]
struct RoleSummary {
    role: Role,
    name: &'static str,
    permissions: Vec<Permission>,
}

impl RoleSummary {
    fn new(registry: &RolePermissionMap, role: Role) -> Self {
        let mut permissions: Vec<_> = registry.permissions(role).into_iter().collect();
        permissions.sort();

        Self {
            role,
            name: role.display_name(),
            permissions,
        }
    }
}

async fn list_roles(State(state): State<AppState>) -> Json<Vec<RoleSummary>> {
    let roles = Role::ALL
        .iter()
        .map(|&role| RoleSummary::new(state.registry(), role))
        .collect();

    Json(roles)
}

async fn get_role(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<RoleSummary>> {
    let role: Role = name.parse().map_err(|_| AppError::NotFound)?;
    Ok(Json(RoleSummary::new(state.registry(), role)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/roles", get(list_roles))
        .route("/api/roles/{role}", get(get_role))
        .route_layer(from_fn(|request: Request, next: Next| {
            require_permission(Permission::UserManagement, request, next)
        }))
}
