//! Form definitions backing the admin routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod product;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("title cannot be empty")]
    MissingTitle,

    #[error("at least one image is required")]
    NoImages,
}
