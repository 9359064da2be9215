use super::CustomerRepository;
use crate::error::AppError;
use crate::model::Customer;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Map-backed store with identity ids starting at 1. Iterates in id order.
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    table: RwLock<Table>,
}

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Customer>,
    last_id: i64,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, mut customer: Customer) -> Result<Customer, AppError> {
        let mut table = self.table.write().await;
        let id = match customer.id {
            Some(id) => {
                table.last_id = table.last_id.max(id);
                id
            }
            None => {
                table.last_id += 1;
                table.last_id
            }
        };
        customer.id = Some(id);
        table.rows.insert(id, customer.clone());
        Ok(customer)
    }

    async fn delete(&self, customer: &Customer) -> Result<(), AppError> {
        if let Some(id) = customer.id {
            self.table.write().await.rows.remove(&id);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn assigns_fresh_ids_and_never_reuses_them() {
        let repo = InMemoryCustomerRepository::new();
        let a = repo.save(Customer::new("Park", "010")).await.unwrap();
        let b = repo.save(Customer::new("Kim", "011")).await.unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));

        repo.delete(&b).await.unwrap();
        let c = repo.save(Customer::new("Lee", "012")).await.unwrap();
        assert_eq!(c.id, Some(3));
    }

    #[tokio::test]
    async fn save_with_id_overwrites_row() {
        let repo = InMemoryCustomerRepository::new();
        let mut a = repo.save(Customer::new("Park", "010")).await.unwrap();
        a.tel = "01040234503".into();
        repo.save(a.clone()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![a]);
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let repo = InMemoryCustomerRepository::new();
        let a = repo.save(Customer::new("Park", "010")).await.unwrap();
        repo.delete(&a).await.unwrap();
        assert!(repo.find_by_id(1).await.unwrap().is_none());
        // deleting an unsaved record is a no-op
        repo.delete(&Customer::new("Kim", "011")).await.unwrap();
    }
}
