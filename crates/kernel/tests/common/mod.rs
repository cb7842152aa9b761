#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! [`TestApp`] wraps the REAL kernel router, built from the same
//! [`AppState`] the binary uses, so requests go through role resolution and
//! guards exactly as in production.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use medequip_kernel::middleware::ROLE_HEADER;
use medequip_kernel::{AppState, Config, Role, routes};

/// Test application wrapping the kernel router.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Build an app with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Build an app with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        let state = AppState::new(&config).expect("Failed to build app state");
        Self {
            router: routes::router(state),
        }
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    /// GET `uri` as `role`.
    pub async fn get_as(&self, role: Role, uri: &str) -> Response {
        self.get_with_header(uri, Some(role.as_str())).await
    }

    /// GET `uri` with an arbitrary role header, or none.
    pub async fn get_with_header(&self, uri: &str, role: Option<&str>) -> Response {
        let mut builder = Request::get(uri);
        if let Some(role) = role {
            builder = builder.header(ROLE_HEADER, role);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }
}

/// Parse a response body as JSON.
pub async fn response_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        let text = String::from_utf8_lossy(&body);
        panic!("Failed to parse JSON: {text}");
    })
}

/// Labels of a JSON array of nav items.
pub fn labels(items: &Value) -> Vec<String> {
    items
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["label"].as_str().expect("label").to_string())
        .collect()
}
