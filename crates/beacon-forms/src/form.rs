//! Form container and wizard-page contract

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use beacon_widgets::html_escape;

use crate::element::Element;
use crate::error::FormError;
use crate::Result;

/// Submitted request values, as a wizard page receives them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<String, String>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether a checkbox named `name` was submitted as checked.
    pub fn is_checked(&self, name: &str) -> bool {
        matches!(self.get(name), Some("1") | Some("on"))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A named, ordered sequence of form elements.
#[derive(Debug, Clone, Default)]
pub struct Form {
    name: String,
    elements: Vec<Element>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn add_elements(&mut self, elements: Vec<Element>) {
        self.elements.extend(elements);
    }

    pub fn element(&self, name: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.name() == name)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }

    /// Move only the named elements out of `source`, in the order given.
    ///
    /// Fails without touching this form when a name has no match.
    pub fn adopt_named(&mut self, mut source: Form, names: &[&str]) -> Result<()> {
        let mut picked = Vec::with_capacity(names.len());
        for &name in names {
            let index = source
                .elements
                .iter()
                .position(|e| e.name() == name)
                .ok_or_else(|| FormError::UnknownElement(name.to_string()))?;
            picked.push(source.elements.remove(index));
        }
        self.elements.extend(picked);
        Ok(())
    }

    /// Append every element of `source` to this form.
    pub fn adopt_all(&mut self, source: Form) {
        self.elements.extend(source.into_elements());
    }

    /// Render the whole form, one element per line.
    pub fn render(&self) -> String {
        let mut out = format!("<form name=\"{}\">\n", html_escape(&self.name));
        for element in &self.elements {
            out.push_str(&element.render());
            out.push('\n');
        }
        out.push_str("</form>\n");
        out
    }
}

/// One page of a setup wizard.
///
/// Pages are request-scoped: construct, [`init`](FormPage::init),
/// populate once with [`create_elements`](FormPage::create_elements),
/// render, discard.
pub trait FormPage {
    /// Assign the page's fixed name. Idempotent.
    fn init(&mut self);

    /// Populate the underlying form from the submitted values.
    fn create_elements(&mut self, form_data: &FormData) -> Result<()>;

    fn form(&self) -> &Form;

    fn form_mut(&mut self) -> &mut Form;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> Form {
        let mut form = Form::new();
        form.add_element(Element::text("first", "First"));
        form.add_element(Element::text("second", "Second"));
        form.add_element(Element::text("third", "Third"));
        form
    }

    #[test]
    fn test_elements_keep_insertion_order() {
        let form = sample_form();
        let names: Vec<&str> = form.elements().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert!(form.element("second").is_some());
        assert!(form.element("missing").is_none());
    }

    #[test]
    fn test_adopt_named_picks_only_requested() {
        let mut target = Form::new();
        target.adopt_named(sample_form(), &["third", "first"]).unwrap();

        let names: Vec<&str> = target.elements().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["third", "first"]);
    }

    #[test]
    fn test_adopt_named_unknown_element_leaves_target_unchanged() {
        let mut target = Form::new();
        target.add_element(Element::text("existing", "Existing"));

        let result = target.adopt_named(sample_form(), &["first", "missing"]);
        assert!(matches!(result, Err(FormError::UnknownElement(ref name)) if name == "missing"));
        assert_eq!(target.elements().len(), 1);
    }

    #[test]
    fn test_adopt_all_appends_everything() {
        let mut target = Form::new();
        target.add_element(Element::note("description", "A note"));
        target.adopt_all(sample_form());
        assert_eq!(target.elements().len(), 4);
    }

    #[test]
    fn test_form_data_lookup() {
        let data: FormData = [("logging_enable", "1"), ("logging_type", "file")]
            .into_iter()
            .collect();
        assert!(data.is_checked("logging_enable"));
        assert!(!data.is_checked("logging_level"));
        assert_eq!(data.get("logging_type"), Some("file"));
    }

    #[test]
    fn test_render_wraps_elements() {
        let mut form = Form::new();
        form.set_name("setup_general_config");
        form.add_element(Element::note("description", "Hello"));

        assert_eq!(
            form.render(),
            "<form name=\"setup_general_config\">\n<p class=\"note\">Hello</p>\n</form>\n"
        );
    }
}
