//! Typed errors and HTTP mapping.
//!
//! Validation failures and missing records surface as 400 problem bodies; everything
//! else (store failures, unexpected states) is a 500.

use crate::response::ProblemDetail;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidVar { var: &'static str, value: String },
    #[error("unknown store kind: {0} (expected postgres or memory)")]
    UnknownStore(String),
}

pub const DB_UNAVAILABLE: &str = "database: unavailable";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::Validation(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Db(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Problem body sent to the caller. Database errors are reported generically;
    /// the full text is only logged.
    pub fn to_problem(&self) -> ProblemDetail {
        let detail = match self {
            AppError::Db(_) => DB_UNAVAILABLE.to_string(),
            _ => self.to_string(),
        };
        ProblemDetail {
            status: self.status().as_u16(),
            detail,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(detail = %self, "request rejected");
        }
        (status, Json(self.to_problem())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_and_validation_map_to_400_with_bare_message() {
        let e = AppError::NotFound("해당 고객이 존재하지 않습니다.".into());
        let p = e.to_problem();
        assert_eq!(p.status, 400);
        assert_eq!(p.detail, "해당 고객이 존재하지 않습니다.");

        let e = AppError::Validation("이름을 입력해주세요.".into());
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
        assert_eq!(e.to_problem().detail, "이름을 입력해주세요.");
    }

    #[test]
    fn store_failures_map_to_500() {
        let e = AppError::Db(sqlx::Error::PoolTimedOut);
        let p = e.to_problem();
        assert_eq!(p.status, 500);
        assert_eq!(p.detail, DB_UNAVAILABLE);
    }

    #[test]
    fn database_detail_does_not_leak_schema_names() {
        let e = AppError::Db(sqlx::Error::Protocol(
            "relation \"customer_tb\" does not exist".into(),
        ));
        assert!(e.to_string().contains("customer_tb"));
        let p = e.to_problem();
        assert_eq!(p.status, 500);
        assert_eq!(p.detail, "database: unavailable");
        assert!(!p.detail.contains("customer_tb"));
    }

    #[test]
    fn problem_body_has_only_status_and_detail() {
        let body = serde_json::to_value(AppError::Internal("boom".into()).to_problem()).unwrap();
        assert_eq!(body, serde_json::json!({ "status": 500, "detail": "internal: boom" }));
    }
}
