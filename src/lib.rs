//! Customer service: CRUD over `customer_tb` with declarative validation and problem-style errors.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, StoreKind};
pub use error::{AppError, ConfigError};
pub use model::{Customer, CustomerDto};
pub use repository::{CustomerRepository, InMemoryCustomerRepository, PgCustomerRepository};
pub use response::ProblemDetail;
pub use routes::{app, common_routes_with_ready, customer_routes, docs_routes, ApiDoc};
pub use service::{CustomerService, RequestValidator, NOT_FOUND_MESSAGE};
pub use state::AppState;
pub use store::{ensure_customer_table, ensure_database_exists};
