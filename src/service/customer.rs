//! Customer workflow: validate, look up, merge, persist.
//!
//! Lookup and write are separate store calls. Two requests racing on the same id
//! both succeed and the later write wins.

use crate::error::AppError;
use crate::model::{
    Customer, CustomerDto, CustomerInsertRequest, CustomerPatchUpdateRequest,
    CustomerPutUpdateRequest,
};
use crate::repository::CustomerRepository;
use crate::service::RequestValidator;

pub const NOT_FOUND_MESSAGE: &str = "해당 고객이 존재하지 않습니다.";

pub struct CustomerService;

impl CustomerService {
    /// All customers in store order.
    pub async fn list(repo: &dyn CustomerRepository) -> Result<Vec<CustomerDto>, AppError> {
        repo.find_all().await?.iter().map(Customer::to_dto).collect()
    }

    pub async fn read(repo: &dyn CustomerRepository, id: i64) -> Result<CustomerDto, AppError> {
        Self::find_existing(repo, id).await?.to_dto()
    }

    pub async fn create(
        repo: &dyn CustomerRepository,
        req: CustomerInsertRequest,
    ) -> Result<CustomerDto, AppError> {
        RequestValidator::validate_insert(&req)?;
        let saved = repo.save(req.into_entity()).await?;
        tracing::info!(id = ?saved.id, "customer created");
        saved.to_dto()
    }

    /// Replace both name and tel.
    pub async fn put(
        repo: &dyn CustomerRepository,
        id: i64,
        req: CustomerPutUpdateRequest,
    ) -> Result<CustomerDto, AppError> {
        RequestValidator::validate_put(&req)?;
        let mut customer = Self::find_existing(repo, id).await?;
        req.apply(&mut customer);
        let saved = repo.save(customer).await?;
        tracing::info!(id, "customer replaced");
        saved.to_dto()
    }

    /// Replace name only; tel is left as stored.
    pub async fn patch(
        repo: &dyn CustomerRepository,
        id: i64,
        req: CustomerPatchUpdateRequest,
    ) -> Result<CustomerDto, AppError> {
        RequestValidator::validate_patch(&req)?;
        let mut customer = Self::find_existing(repo, id).await?;
        req.apply(&mut customer);
        let saved = repo.save(customer).await?;
        tracing::info!(id, "customer renamed");
        saved.to_dto()
    }

    pub async fn delete(repo: &dyn CustomerRepository, id: i64) -> Result<(), AppError> {
        let customer = Self::find_existing(repo, id).await?;
        repo.delete(&customer).await?;
        tracing::info!(id, "customer deleted");
        Ok(())
    }

    async fn find_existing(repo: &dyn CustomerRepository, id: i64) -> Result<Customer, AppError> {
        tracing::debug!(id, "looking up customer");
        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryCustomerRepository;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and fails every one of them.
    #[derive(Default)]
    struct BrokenRepository {
        calls: AtomicUsize,
    }

    impl BrokenRepository {
        fn fail(&self) -> AppError {
            self.calls.fetch_add(1, Ordering::SeqCst);
            AppError::Db(sqlx::Error::PoolTimedOut)
        }
    }

    #[async_trait]
    impl CustomerRepository for BrokenRepository {
        async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
            Err(self.fail())
        }
        async fn find_by_id(&self, _id: i64) -> Result<Option<Customer>, AppError> {
            Err(self.fail())
        }
        async fn save(&self, _customer: Customer) -> Result<Customer, AppError> {
            Err(self.fail())
        }
        async fn delete(&self, _customer: &Customer) -> Result<(), AppError> {
            Err(self.fail())
        }
        async fn ping(&self) -> Result<(), AppError> {
            Err(self.fail())
        }
    }

    fn insert(name: &str, tel: &str) -> CustomerInsertRequest {
        CustomerInsertRequest {
            name: Some(name.into()),
            tel: Some(tel.into()),
        }
    }

    #[tokio::test]
    async fn create_returns_request_fields_and_fresh_id() {
        let repo = InMemoryCustomerRepository::new();
        let a = CustomerService::create(&repo, insert("Park", "01040234504")).await.unwrap();
        let b = CustomerService::create(&repo, insert("Kim", "01012345678")).await.unwrap();
        assert_eq!(a.name, "Park");
        assert_eq!(a.tel, "01040234504");
        assert_ne!(a.id, b.id);
        assert_eq!(CustomerService::list(&repo).await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let repo = InMemoryCustomerRepository::new();
        let err = CustomerService::read(&repo, 1000).await.unwrap_err();
        assert!(matches!(&err, AppError::NotFound(m) if m == NOT_FOUND_MESSAGE));

        let err = CustomerService::put(
            &repo,
            1000,
            CustomerPutUpdateRequest {
                name: Some("박진희".into()),
                tel: Some("01012345678".into()),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = CustomerService::patch(&repo, 1000, CustomerPatchUpdateRequest { name: Some("유광열".into()) })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = CustomerService::delete(&repo, 1000).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn put_replaces_both_fields_patch_only_name() {
        let repo = InMemoryCustomerRepository::new();
        let created = CustomerService::create(&repo, insert("Park", "01040234504")).await.unwrap();

        let put = CustomerService::put(
            &repo,
            created.id,
            CustomerPutUpdateRequest {
                name: Some("Lee".into()),
                tel: Some("01099998888".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(put, CustomerDto { id: created.id, name: "Lee".into(), tel: "01099998888".into() });

        let patched = CustomerService::patch(&repo, created.id, CustomerPatchUpdateRequest { name: Some("Kim".into()) })
            .await
            .unwrap();
        assert_eq!(patched, CustomerDto { id: created.id, name: "Kim".into(), tel: "01099998888".into() });
        assert_eq!(CustomerService::read(&repo, created.id).await.unwrap(), patched);
    }

    #[tokio::test]
    async fn validation_runs_before_store_access() {
        let repo = BrokenRepository::default();
        let err = CustomerService::create(&repo, insert("", "010")).await.unwrap_err();
        assert!(matches!(&err, AppError::Validation(m) if m == "이름을 입력해주세요."));

        let err = CustomerService::patch(&repo, 1, CustomerPatchUpdateRequest { name: None })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn invalid_tel_is_not_persisted() {
        let repo = InMemoryCustomerRepository::new();
        let err = CustomerService::create(&repo, insert("Park", "010-4023")).await.unwrap_err();
        assert!(matches!(&err, AppError::Validation(m) if m == "휴대폰번호는 숫자로만 입력해주세요."));
        assert!(CustomerService::list(&repo).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_then_read_is_not_found() {
        let repo = InMemoryCustomerRepository::new();
        let created = CustomerService::create(&repo, insert("Park", "01040234504")).await.unwrap();
        CustomerService::delete(&repo, created.id).await.unwrap();
        let err = CustomerService::read(&repo, created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_server_error() {
        let repo = BrokenRepository::default();
        let err = CustomerService::list(&repo).await.unwrap_err();
        assert!(err.status().is_server_error());
        let err = CustomerService::read(&repo, 1).await.unwrap_err();
        assert!(err.status().is_server_error());
    }
}
