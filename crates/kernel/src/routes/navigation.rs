//! Sidebar navigation endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Serialize;

use crate::menu::{NavItem, resolve_navigation};
use crate::models::Role;
use crate::permissions::AccessPolicy;
use crate::state::AppState;

#[derive(Serialize)]
struct NavigationResponse {
    role: Role,
    role_name: &'static str,
    items: Vec<NavItem>,
}

/// The caller's filtered menu tree.
async fn navigation(
    State(state): State<AppState>,
    Extension(policy): Extension<AccessPolicy>,
) -> Json<NavigationResponse> {
    let items = resolve_navigation(&policy, state.menu());

    Json(NavigationResponse {
        role: policy.role(),
        role_name: policy.role().display_name(),
        items,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/navigation", get(navigation))
}
