use super::CustomerRepository;
use crate::error::AppError;
use crate::model::Customer;
use crate::store::CUSTOMER_TABLE;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        PgCustomerRepository { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        let sql = format!("SELECT id, name, tel FROM {} ORDER BY id", CUSTOMER_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Customer>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let sql = format!("SELECT id, name, tel FROM {} WHERE id = $1", CUSTOMER_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, customer: Customer) -> Result<Customer, AppError> {
        let row = match customer.id {
            None => {
                let sql = format!(
                    "INSERT INTO {} (name, tel) VALUES ($1, $2) RETURNING id, name, tel",
                    CUSTOMER_TABLE
                );
                tracing::debug!(sql = %sql, "query");
                sqlx::query_as::<_, Customer>(&sql)
                    .bind(&customer.name)
                    .bind(&customer.tel)
                    .fetch_one(&self.pool)
                    .await?
            }
            Some(id) => {
                let sql = format!(
                    "INSERT INTO {} (id, name, tel) VALUES ($1, $2, $3) \
                     ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, tel = EXCLUDED.tel \
                     RETURNING id, name, tel",
                    CUSTOMER_TABLE
                );
                tracing::debug!(sql = %sql, id, "query");
                sqlx::query_as::<_, Customer>(&sql)
                    .bind(id)
                    .bind(&customer.name)
                    .bind(&customer.tel)
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(row)
    }

    async fn delete(&self, customer: &Customer) -> Result<(), AppError> {
        let Some(id) = customer.id else {
            return Ok(());
        };
        let sql = format!("DELETE FROM {} WHERE id = $1", CUSTOMER_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ensure_customer_table;

    async fn setup_repo() -> PgCustomerRepository {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/customer".into());
        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to connect to Postgres");
        ensure_customer_table(&pool).await.expect("create customer_tb");
        PgCustomerRepository::new(pool)
    }

    #[tokio::test]
    #[ignore]
    async fn save_find_update_delete() -> Result<(), AppError> {
        let repo = setup_repo().await;

        let saved = repo.save(Customer::new("박진희", "01040234504")).await?;
        assert!(saved.id.is_some());
        assert_eq!(saved.name, "박진희");
        assert_eq!(saved.tel, "01040234504");

        assert!(repo.find_by_id(saved.id.unwrap()).await?.is_some());
        assert!(repo.find_all().await?.iter().any(|c| c.id == saved.id));

        let mut changed = saved.clone();
        changed.tel = "01040234503".into();
        let updated = repo.save(changed).await?;
        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.tel, "01040234503");

        repo.delete(&updated).await?;
        assert!(repo.find_by_id(saved.id.unwrap()).await?.is_none());
        Ok(())
    }
}
