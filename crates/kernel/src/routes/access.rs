//! Action gate endpoint.
//!
//! Row and button level gates ask whether the caller may use an action that
//! requires a given permission (approve, edit, delete, ...).

use axum::extract::Path;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Serialize;

use crate::error::AppResult;
use crate::models::{Permission, Role};
use crate::permissions::AccessPolicy;
use crate::state::AppState;

#[derive(Serialize)]
struct AccessResponse {
    role: Role,
    permission: Permission,
    allowed: bool,
}

async fn check_access(
    Extension(policy): Extension<AccessPolicy>,
    Path(permission): Path<String>,
) -> AppResult<Json<AccessResponse>> {
    let permission: Permission = permission.parse()?;

    Ok(Json(AccessResponse {
        role: policy.role(),
        permission,
        allowed: policy.permits(permission),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/access/{permission}", get(check_access))
}
