//! Router assembly.

mod common;
mod customer;
mod docs;

pub use common::common_routes_with_ready;
pub use customer::{customer_routes, CUSTOMER_PATH};
pub use docs::{docs_routes, ApiDoc, OPENAPI_PATH, SWAGGER_UI_PATH};

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application: operational routes, API docs and customer CRUD, with request
/// tracing and a body size limit. Oversized bodies fail JSON extraction and come back
/// as 400 problem bodies.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(docs_routes())
        .merge(customer_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit_bytes)),
        )
}
