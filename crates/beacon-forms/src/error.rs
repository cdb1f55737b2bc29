//! Form error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("No such element: {0}")]
    UnknownElement(String),

    #[error("Form already populated: {0}")]
    AlreadyPopulated(String),
}
