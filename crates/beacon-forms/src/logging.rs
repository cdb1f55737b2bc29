//! Logging settings sub-form

use crate::catalog::translate;
use crate::element::Element;
use crate::form::{Form, FormData};
use crate::Result;

const DEFAULT_LOG_TYPE: &str = "syslog";

/// Reusable sub-form for the logging configuration.
///
/// The element set depends on the submitted values: disabling logging
/// drops everything but the enable checkbox, and the chosen log type
/// decides between a syslog prefix and a file target.
#[derive(Debug, Default)]
pub struct LoggingConfigForm {
    form: Form,
}

impl LoggingConfigForm {
    pub fn new() -> Self {
        let mut form = Form::new();
        form.set_name("config_logging");
        Self { form }
    }

    /// Populate the sub-form, submitted values overriding the defaults.
    pub fn create_elements(&mut self, form_data: &FormData) -> Result<&mut Self> {
        let enabled = form_data
            .get("logging_enable")
            .map_or(true, |v| v == "1" || v == "on");
        self.form.add_element(
            Element::checkbox("logging_enable", translate("config", "logging_enable"))
                .with_value(if enabled { "1" } else { "" }),
        );
        if !enabled {
            return Ok(self);
        }

        self.form.add_element(
            Element::select(
                "logging_level",
                translate("config", "logging_level"),
                vec![
                    ("error", "Error"),
                    ("warning", "Warning"),
                    ("information", "Information"),
                    ("debug", "Debug"),
                ],
            )
            .with_value(form_data.get("logging_level").unwrap_or("error")),
        );

        let log_type = form_data.get("logging_type").unwrap_or(DEFAULT_LOG_TYPE);
        self.form.add_element(
            Element::select(
                "logging_type",
                translate("config", "logging_type"),
                vec![("syslog", "Syslog"), ("file", "File")],
            )
            .with_value(log_type),
        );

        if log_type == "file" {
            self.form.add_element(
                Element::text("logging_target", translate("config", "logging_target"))
                    .with_value(
                        form_data
                            .get("logging_target")
                            .unwrap_or("/var/log/console/console.log"),
                    )
                    .required(),
            );
        } else {
            self.form.add_element(
                Element::text(
                    "logging_application",
                    translate("config", "logging_application"),
                )
                .with_value(form_data.get("logging_application").unwrap_or("console")),
            );
        }

        Ok(self)
    }

    pub fn element(&self, name: &str) -> Option<&Element> {
        self.form.element(name)
    }

    pub fn elements(&self) -> &[Element] {
        self.form.elements()
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn into_form(self) -> Form {
        self.form
    }
}
