//! HTTP route handlers.

pub mod access;
pub mod health;
pub mod navigation;
pub mod pages;
pub mod roles;

use axum::Router;

use crate::state::AppState;

/// Build the kernel router with role resolution applied.
///
/// `/health` is merged after the role layer and never looks at the caller.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(navigation::router())
        .merge(access::router())
        .merge(pages::router())
        .merge(roles::router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::resolve_role,
        ))
        .merge(health::router())
        .with_state(state)
}
