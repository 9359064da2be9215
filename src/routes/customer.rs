//! Customer CRUD routes under `/customer`.

use crate::handlers::customer::{
    create, delete as delete_handler, list, patch as patch_handler, put as put_handler, read,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const CUSTOMER_PATH: &str = "/customer";

pub fn customer_routes(state: AppState) -> Router {
    Router::new()
        .route(CUSTOMER_PATH, get(list).post(create))
        .route(
            "/customer/:id",
            get(read)
                .put(put_handler)
                .patch(patch_handler)
                .delete(delete_handler),
        )
        .with_state(state)
}
