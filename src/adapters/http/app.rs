//! Application router assembly.
//!
//! Mounts the feature routers and wraps them in the shared tower-http
//! middleware stack (request ids, tracing, CORS).

use axum::routing::get;
use axum::{Json, Router};
use http::{HeaderValue, Method};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::messages::{messages_router, MessagesAppState};

/// GET /health - Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Create the API router without middleware.
///
/// # Routes
/// - `GET /health`
/// - `GET /api/v1/messages`
pub fn api_router(state: MessagesAppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", messages_router())
        .with_state(state)
}

/// Create the full application: API routes plus middleware.
pub fn build_app(state: MessagesAppState, config: &ServerConfig) -> Router {
    let mut app = api_router(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    if let Some(cors) = cors_layer(&config.cors_origins_list()) {
        app = app.layer(cors);
    }

    app
}

/// Build a CORS layer for the given origins, or `None` if none are usable.
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET]),
    )
}
