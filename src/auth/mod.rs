//! The login endpoint: request body, validation rules and handler.

mod dto;
mod handler;
mod validation;

pub use dto::LoginRequest;
pub use handler::{login, login_message};
pub use validation::{
    validate, validate_with, Field, FieldError, Rule, RuleKind, LOGIN_RULES, PASSWORD_MAX_LENGTH,
    PASSWORD_MIN_LENGTH,
};
