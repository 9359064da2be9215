//! Customer record, its outward projection, and the three request shapes.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Row of `customer_tb`. `id` is `None` until the store assigns one.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Customer {
    pub id: Option<i64>,
    pub name: String,
    pub tel: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, tel: impl Into<String>) -> Self {
        Customer {
            id: None,
            name: name.into(),
            tel: tel.into(),
        }
    }

    pub fn to_dto(&self) -> Result<CustomerDto, AppError> {
        let id = self
            .id
            .ok_or_else(|| AppError::Internal("customer has no id".into()))?;
        Ok(CustomerDto {
            id,
            name: self.name.clone(),
            tel: self.tel.clone(),
        })
    }
}

/// 고객 정보
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct CustomerDto {
    /// 고객 ID
    pub id: i64,
    /// 고객 이름
    #[schema(example = "박진희")]
    pub name: String,
    /// 고객 전화번호
    #[schema(example = "01040234504")]
    pub tel: String,
}

/// 고객 저장 정보
///
/// Fields are optional on the wire so a missing field is reported by validation
/// rather than by JSON decoding.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
#[serde(default)]
pub struct CustomerInsertRequest {
    /// 고객 이름
    #[schema(example = "박진희", max_length = 5, min_length = 1)]
    pub name: Option<String>,
    /// 휴대폰 번호
    #[schema(example = "01040234504", max_length = 11, min_length = 1, pattern = "^[0-9]+$")]
    pub tel: Option<String>,
}

impl CustomerInsertRequest {
    /// Unsaved record built from a validated request.
    pub fn into_entity(self) -> Customer {
        Customer::new(self.name.unwrap_or_default(), self.tel.unwrap_or_default())
    }
}

/// 고객 전체 수정 정보
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
#[serde(default)]
pub struct CustomerPutUpdateRequest {
    /// 고객 이름
    #[schema(example = "박진희", max_length = 5, min_length = 1)]
    pub name: Option<String>,
    /// 휴대폰 번호
    #[schema(example = "01040234504", max_length = 11, min_length = 1, pattern = "^[0-9]+$")]
    pub tel: Option<String>,
}

impl CustomerPutUpdateRequest {
    pub fn apply(self, customer: &mut Customer) {
        customer.name = self.name.unwrap_or_default();
        customer.tel = self.tel.unwrap_or_default();
    }
}

/// 고객 일부 수정 정보
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
#[serde(default)]
pub struct CustomerPatchUpdateRequest {
    /// 고객 이름
    #[schema(example = "유광열", max_length = 5, min_length = 1)]
    pub name: Option<String>,
}

impl CustomerPatchUpdateRequest {
    pub fn apply(self, customer: &mut Customer) {
        customer.name = self.name.unwrap_or_default();
    }
}
