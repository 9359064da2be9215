//! Record store interface for customers and its implementations.

mod memory;
mod postgres;

pub use memory::InMemoryCustomerRepository;
pub use postgres::PgCustomerRepository;

use crate::error::AppError;
use crate::model::Customer;
use async_trait::async_trait;

/// Persistence for `customer_tb`. Each call is a single statement; callers get no
/// isolation across calls.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Customer>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError>;

    /// Insert when `id` is `None` (the store assigns it), otherwise upsert by `id`.
    /// Returns the row as stored.
    async fn save(&self, customer: Customer) -> Result<Customer, AppError>;

    /// Remove the row with the customer's id. Unsaved customers are a no-op.
    async fn delete(&self, customer: &Customer) -> Result<(), AppError>;

    /// Cheap liveness check used by the readiness route.
    async fn ping(&self) -> Result<(), AppError>;
}
