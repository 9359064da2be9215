//! CustomerService: the customer workflow over a record store.

mod customer;
mod validation;
pub use customer::{CustomerService, NOT_FOUND_MESSAGE};
pub use validation::{validate_field, RequestValidator, ValidationRule, NAME_RULE, TEL_RULE};
