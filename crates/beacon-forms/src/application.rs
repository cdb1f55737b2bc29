//! Application settings sub-form

use crate::catalog::translate;
use crate::element::Element;
use crate::form::{Form, FormData};
use crate::Result;

/// Reusable sub-form for application-level settings.
///
/// Shared between the configuration section and the setup wizard; the
/// wizard keeps only the file-mode field out of it.
#[derive(Debug, Default)]
pub struct ApplicationConfigForm {
    form: Form,
}

impl ApplicationConfigForm {
    pub fn new() -> Self {
        let mut form = Form::new();
        form.set_name("config_application");
        Self { form }
    }

    /// Populate the sub-form, submitted values overriding the defaults.
    pub fn create_elements(&mut self, form_data: &FormData) -> Result<&mut Self> {
        let stacktraces = form_data
            .get("global_show_stacktraces")
            .map_or(true, |v| v == "1" || v == "on");
        self.form.add_element(
            Element::checkbox(
                "global_show_stacktraces",
                translate("config", "show_stacktraces"),
            )
            .with_value(if stacktraces { "1" } else { "" }),
        );

        self.form.add_element(
            Element::text("global_filemode", translate("config", "filemode"))
                .with_value(form_data.get("global_filemode").unwrap_or("2664"))
                .required(),
        );

        self.form.add_element(
            Element::text("global_module_path", translate("config", "module_path")).with_value(
                form_data
                    .get("global_module_path")
                    .unwrap_or("/usr/share/console/modules"),
            ),
        );

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_elements() {
        let mut form = ApplicationConfigForm::new();
        form.create_elements(&FormData::new()).unwrap();

        let names: Vec<&str> = form.elements().iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec![
                "global_show_stacktraces",
                "global_filemode",
                "global_module_path"
            ]
        );

        let filemode = form.element("global_filemode").unwrap();
        assert_eq!(filemode.value(), "2664");
        assert!(filemode.is_required());
    }

    #[test]
    fn test_submitted_values_override_defaults() {
        let data: FormData = [("global_filemode", "0664"), ("global_show_stacktraces", "0")]
            .into_iter()
            .collect();

        let mut form = ApplicationConfigForm::new();
        form.create_elements(&data).unwrap();

        assert_eq!(form.element("global_filemode").unwrap().value(), "0664");
        assert!(!form.element("global_show_stacktraces").unwrap().is_checked());
    }
}
