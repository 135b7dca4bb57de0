//! Form definitions backing the routes.

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

pub mod lead;
pub mod plan;
pub mod post;
pub mod settings;

#[derive(Deserialize, Validate)]
/// Status dropdown submission on the admin tables.
pub struct ChangeStatusForm {
    #[validate(length(min = 1))]
    pub status: String,
}

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid slug")]
    InvalidSlug,

    #[error("invalid date")]
    InvalidDate,

    #[error("invalid price")]
    InvalidPrice,

    #[error("invalid content")]
    InvalidContent,
}
