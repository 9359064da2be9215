//! Customer CRUD handlers: list, read, create, put, patch, delete.

use crate::error::AppError;
use crate::model::{
    CustomerDto, CustomerInsertRequest, CustomerPatchUpdateRequest, CustomerPutUpdateRequest,
};
use crate::response::{success_many, success_one, ProblemDetail};
use crate::service::CustomerService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

/// 고객 리스트 조회
///
/// 고객 리스트를 조회합니다.
#[utoipa::path(
    get,
    path = "/customer",
    tag = "customer",
    responses(
        (status = 200, description = "OK", body = Vec<CustomerDto>),
        (status = 500, description = "INTERNAL SERVER ERROR", body = ProblemDetail),
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CustomerService::list(state.repo.as_ref()).await?;
    Ok(success_many(rows))
}

/// 고객 조회
///
/// 고객 정보를 조회합니다.
#[utoipa::path(
    get,
    path = "/customer/{id}",
    tag = "customer",
    params(("id" = i64, Path, description = "고객의 id")),
    responses(
        (status = 200, description = "OK", body = CustomerDto),
        (status = 400, description = "BAD REQUEST", body = ProblemDetail),
        (status = 500, description = "INTERNAL SERVER ERROR", body = ProblemDetail),
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = CustomerService::read(state.repo.as_ref(), id).await?;
    Ok(success_one(row))
}

/// 고객 저장
///
/// 고객을 저장합니다.
#[utoipa::path(
    post,
    path = "/customer",
    tag = "customer",
    request_body = CustomerInsertRequest,
    responses(
        (status = 200, description = "OK", body = CustomerDto),
        (status = 400, description = "BAD REQUEST", body = ProblemDetail),
        (status = 500, description = "INTERNAL SERVER ERROR", body = ProblemDetail),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CustomerInsertRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = payload?;
    let row = CustomerService::create(state.repo.as_ref(), body).await?;
    Ok(success_one(row))
}

/// 고객 전체 수정
///
/// 고객 정보를 전체 수정합니다.
#[utoipa::path(
    put,
    path = "/customer/{id}",
    tag = "customer",
    params(("id" = i64, Path, description = "고객의 id")),
    request_body = CustomerPutUpdateRequest,
    responses(
        (status = 200, description = "OK", body = CustomerDto),
        (status = 400, description = "BAD REQUEST", body = ProblemDetail),
        (status = 500, description = "INTERNAL SERVER ERROR", body = ProblemDetail),
    )
)]
pub async fn put(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<CustomerPutUpdateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let Json(body) = payload?;
    let row = CustomerService::put(state.repo.as_ref(), id, body).await?;
    Ok(success_one(row))
}

/// 고객 일부 수정
///
/// 고객 정보를 일부 수정합니다.
#[utoipa::path(
    patch,
    path = "/customer/{id}",
    tag = "customer",
    params(("id" = i64, Path, description = "고객의 id")),
    request_body = CustomerPatchUpdateRequest,
    responses(
        (status = 200, description = "OK", body = CustomerDto),
        (status = 400, description = "BAD REQUEST", body = ProblemDetail),
        (status = 500, description = "INTERNAL SERVER ERROR", body = ProblemDetail),
    )
)]
pub async fn patch(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<CustomerPatchUpdateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let Json(body) = payload?;
    let row = CustomerService::patch(state.repo.as_ref(), id, body).await?;
    Ok(success_one(row))
}

/// 고객 삭제
///
/// 고객 정보가 삭제됩니다.
#[utoipa::path(
    delete,
    path = "/customer/{id}",
    tag = "customer",
    params(("id" = i64, Path, description = "고객의 id")),
    responses(
        (status = 200, description = "OK"),
        (status = 400, description = "BAD REQUEST", body = ProblemDetail),
        (status = 500, description = "INTERNAL SERVER ERROR", body = ProblemDetail),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    CustomerService::delete(state.repo.as_ref(), id).await?;
    Ok(StatusCode::OK)
}
