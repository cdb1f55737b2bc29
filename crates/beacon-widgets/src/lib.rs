//! Beacon Navigation Widgets
//!
//! Server-rendered navigation widgets. A widget turns its own state into
//! an HTML fragment through the [`ViewRenderer`] supplied by the
//! surrounding page, so pages keep control over base paths and escaping.

mod error;
mod tab;
mod view;

pub use error::WidgetError;
pub use tab::{CaptionDecoration, Tab, TabConfig};
pub use view::{html_escape, HtmlRenderer, UrlParams, ViewRenderer};

pub type Result<T> = std::result::Result<T, WidgetError>;
