//! Beacon Form Composition
//!
//! Form-element model and the setup-wizard pages that assemble their
//! fields from reusable configuration sub-forms.

mod application;
mod catalog;
mod element;
mod error;
mod form;
mod general_config;
mod logging;

pub use application::ApplicationConfigForm;
pub use catalog::translate;
pub use element::{Element, ElementKind};
pub use error::FormError;
pub use form::{Form, FormData, FormPage};
pub use general_config::GeneralConfigPage;
pub use logging::LoggingConfigForm;

pub type Result<T> = std::result::Result<T, FormError>;
