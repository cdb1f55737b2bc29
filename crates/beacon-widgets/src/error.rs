//! Widget error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Cannot create a nameless tab")]
    MissingName,

    #[error("Invalid widget configuration: {0}")]
    Configuration(String),
}
