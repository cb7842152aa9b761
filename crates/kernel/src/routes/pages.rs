//! Page guard endpoint.
//!
//! The dashboard asks before rendering a page. The page's permission comes
//! from the menu tree node routing to it.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::menu::find_by_path;
use crate::models::Permission;
use crate::permissions::AccessPolicy;
use crate::state::AppState;

#[derive(Deserialize)]
struct PageQuery {
    path: String,
}

#[derive(Serialize)]
struct PageResponse {
    path: String,
    label: String,
    permission: Permission,
}

async fn page_access(
    State(state): State<AppState>,
    Extension(policy): Extension<AccessPolicy>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PageResponse>> {
    let item = find_by_path(state.menu(), &query.path).ok_or(AppError::NotFound)?;

    if !policy.permits(item.permission) {
        debug!(role = %policy.role(), path = %query.path, "page access denied");
        return Err(AppError::Forbidden);
    }

    Ok(Json(PageResponse {
        path: item.path.clone(),
        label: item.label.clone(),
        permission: item.permission,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/pages", get(page_access))
}
