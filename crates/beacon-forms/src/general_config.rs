//! General configuration wizard page

use crate::application::ApplicationConfigForm;
use crate::catalog::translate;
use crate::element::Element;
use crate::error::FormError;
use crate::form::{Form, FormData, FormPage};
use crate::logging::LoggingConfigForm;
use crate::Result;

/// Wizard page covering the application and logging configuration.
#[derive(Debug, Default)]
pub struct GeneralConfigPage {
    form: Form,
    populated: bool,
}

impl GeneralConfigPage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormPage for GeneralConfigPage {
    fn init(&mut self) {
        self.form.set_name("setup_general_config");
    }

    fn create_elements(&mut self, form_data: &FormData) -> Result<()> {
        if self.populated {
            return Err(FormError::AlreadyPopulated(self.form.name().to_string()));
        }
        self.populated = true;

        self.form.add_element(Element::note(
            "description",
            translate("setup", "general_config_hint"),
        ));

        // Only the file mode belongs on this page; the rest of the
        // application settings are configured elsewhere.
        let mut app_form = ApplicationConfigForm::new();
        app_form.create_elements(form_data)?;
        self.form
            .adopt_named(app_form.into_form(), &["global_filemode"])?;

        let mut logging_form = LoggingConfigForm::new();
        logging_form.create_elements(form_data)?;
        self.form.adopt_all(logging_form.into_form());

        tracing::debug!(
            page = self.form.name(),
            elements = self.form.elements().len(),
            "Populated wizard page"
        );

        Ok(())
    }

    fn form(&self) -> &Form {
        &self.form
    }

    fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }
}
