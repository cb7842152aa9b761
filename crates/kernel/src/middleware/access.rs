//! Caller role resolution and page guards.
//!
//! Authentication happens upstream; by the time a request reaches the kernel
//! the caller's role is in the `X-User-Role` header. [`resolve_role`] turns it
//! into an [`AccessPolicy`] request extension and [`require_permission`] gates
//! routes on that policy.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::models::{Permission, Role};
use crate::permissions::AccessPolicy;
use crate::state::AppState;

/// Header carrying the caller's role machine name.
pub const ROLE_HEADER: &str = "x-user-role";

/// Middleware that resolves the caller's [`AccessPolicy`].
///
/// - No header -> the configured default role
/// - Known role -> that role
/// - Anything else -> 400
pub async fn resolve_role(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let role = match request.headers().get(ROLE_HEADER) {
        None => state.default_role(),
        Some(value) => match value.to_str().map(str::trim) {
            Ok(name) => match name.parse::<Role>() {
                Ok(role) => role,
                Err(e) => {
                    warn!(error = %e, "rejecting request with unknown role");
                    return AppError::from(e).into_response();
                }
            },
            Err(_) => {
                return AppError::BadRequest("role header is not valid UTF-8".to_string())
                    .into_response();
            }
        },
    };

    request.extensions_mut().insert(AccessPolicy::for_role(role));
    next.run(request).await
}

/// Guard that rejects callers whose policy does not permit `permission`.
///
/// Install with a closure so the permission is fixed per route:
///
/// ```ignore
/// .route_layer(axum::middleware::from_fn(|req, next| {
///     require_permission(Permission::UserManagement, req, next)
/// }))
/// ```
pub async fn require_permission(
    permission: Permission,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(policy) = request.extensions().get::<AccessPolicy>() else {
        return AppError::Internal(anyhow::anyhow!("access policy not resolved")).into_response();
    };

    if !policy.permits(permission) {
        debug!(role = %policy.role(), %permission, "access denied");
        return AppError::Forbidden.into_response();
    }

    next.run(request).await
}
