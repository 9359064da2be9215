//! Request validation: ordered per-field rules, first violation wins.

use crate::error::AppError;
use crate::model::{CustomerInsertRequest, CustomerPatchUpdateRequest, CustomerPutUpdateRequest};
use regex::Regex;

/// Checks for one field, applied in order: required, pattern, max length.
/// Each check carries the message reported when it fails.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRule {
    pub required: Option<&'static str>,
    pub pattern: Option<(&'static str, &'static str)>,
    pub max_length: Option<(usize, &'static str)>,
}

pub const NAME_RULE: ValidationRule = ValidationRule {
    required: Some("이름을 입력해주세요."),
    pattern: None,
    max_length: Some((5, "이름은 5자리 이내로 입력해주세요.")),
};

pub const TEL_RULE: ValidationRule = ValidationRule {
    required: Some("휴대폰 번호를 입력해주세요."),
    pattern: Some(("^[0-9]+$", "휴대폰번호는 숫자로만 입력해주세요.")),
    max_length: Some((11, "휴대폰 번호는 12자리 이내로 입력해주세요.")),
};

pub struct RequestValidator;

impl RequestValidator {
    pub fn validate_insert(req: &CustomerInsertRequest) -> Result<(), AppError> {
        validate_field(req.name.as_deref(), &NAME_RULE)?;
        validate_field(req.tel.as_deref(), &TEL_RULE)
    }

    pub fn validate_put(req: &CustomerPutUpdateRequest) -> Result<(), AppError> {
        validate_field(req.name.as_deref(), &NAME_RULE)?;
        validate_field(req.tel.as_deref(), &TEL_RULE)
    }

    pub fn validate_patch(req: &CustomerPatchUpdateRequest) -> Result<(), AppError> {
        validate_field(req.name.as_deref(), &NAME_RULE)
    }
}

/// Blank is absent, empty or whitespace-only. Lengths are counted in characters.
pub fn validate_field(value: Option<&str>, rule: &ValidationRule) -> Result<(), AppError> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            return match rule.required {
                Some(msg) => Err(AppError::Validation(msg.into())),
                None => Ok(()),
            }
        }
    };
    if let Some((pattern, msg)) = rule.pattern {
        let re = Regex::new(pattern)
            .map_err(|_| AppError::Internal(format!("invalid pattern: {}", pattern)))?;
        if !re.is_match(value) {
            return Err(AppError::Validation(msg.into()));
        }
    }
    if let Some((max, msg)) = rule.max_length {
        if value.chars().count() > max {
            return Err(AppError::Validation(msg.into()));
        }
    }
    Ok(())
}
