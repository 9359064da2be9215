//! Shared application state for all routes.

use crate::repository::CustomerRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn CustomerRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        AppState { repo }
    }
}
