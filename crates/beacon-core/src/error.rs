//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Widget error: {0}")]
    Widget(#[from] beacon_widgets::WidgetError),

    #[error("Form error: {0}")]
    Form(#[from] beacon_forms::FormError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
