//! Beacon Core
//!
//! Facade over the console UI crates: one error type, one logging entry
//! point, and re-exports of the widget and form APIs.

mod error;

pub use error::CoreError;

// Re-export core components
pub use beacon_forms::{
    translate, ApplicationConfigForm, Element, ElementKind, Form, FormData, FormError, FormPage,
    GeneralConfigPage, LoggingConfigForm,
};
pub use beacon_widgets::{
    html_escape, CaptionDecoration, HtmlRenderer, Tab, TabConfig, UrlParams, ViewRenderer,
    WidgetError,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_wizard_navigation_and_page() {
        let view = HtmlRenderer::new();

        let mut tab = Tab::from_value(json!({
            "name": "setup_general_config",
            "title": "General",
            "url": "setup/index",
            "urlParams": { "page": "general" }
        }))
        .unwrap();
        tab.set_active(true);

        let markup = tab.render(&view);
        assert!(markup.starts_with("<li class=\"active\">"));
        assert!(markup.contains("href=\"setup/index?page=general\""));

        let mut page = GeneralConfigPage::new();
        page.init();
        page.create_elements(&FormData::new()).unwrap();

        let form = page.form().render();
        assert!(form.starts_with("<form name=\"setup_general_config\">"));
        assert!(form.contains("global_filemode"));
        assert!(form.contains("logging_level"));
    }

    #[test]
    fn test_errors_convert_into_core_error() {
        let widget_err = Tab::from_value(json!({})).unwrap_err();
        let core_err: CoreError = widget_err.into();
        assert!(matches!(core_err, CoreError::Widget(_)));
    }
}
