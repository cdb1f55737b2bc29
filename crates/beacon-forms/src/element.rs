//! Form-element model

use beacon_widgets::html_escape;

/// What kind of control an element renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// Static descriptive text, no input control
    Note,
    Text,
    Checkbox,
    /// Drop-down over (value, label) pairs
    Select { options: Vec<(String, String)> },
}

/// One form field with its current value.
///
/// For notes the value carries the display text, for checkboxes the
/// value `"1"` means checked.
#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    label: String,
    value: String,
    required: bool,
    kind: ElementKind,
}

impl Element {
    /// A static descriptive note.
    pub fn note(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            value: text.into(),
            required: false,
            kind: ElementKind::Note,
        }
    }

    /// A single-line text input.
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            value: String::new(),
            required: false,
            kind: ElementKind::Text,
        }
    }

    /// A checkbox, unchecked until a value of `"1"` is set.
    pub fn checkbox(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            value: String::new(),
            required: false,
            kind: ElementKind::Checkbox,
        }
    }

    /// A drop-down over (value, label) pairs.
    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<(&str, &str)>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            value: String::new(),
            required: false,
            kind: ElementKind::Select {
                options: options
                    .into_iter()
                    .map(|(value, label)| (value.to_string(), label.to_string()))
                    .collect(),
            },
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn is_checked(&self) -> bool {
        self.value == "1"
    }

    /// Render this element as an HTML fragment.
    pub fn render(&self) -> String {
        match &self.kind {
            ElementKind::Note => {
                format!("<p class=\"note\">{}</p>", html_escape(&self.value))
            }
            ElementKind::Text => {
                format!(
                    "{}<input type=\"text\" name=\"{name}\" id=\"{name}\" value=\"{}\"{}>",
                    self.render_label(),
                    html_escape(&self.value),
                    if self.required { " required" } else { "" },
                    name = html_escape(&self.name),
                )
            }
            ElementKind::Checkbox => {
                format!(
                    "{}<input type=\"checkbox\" name=\"{name}\" id=\"{name}\" value=\"1\"{}>",
                    self.render_label(),
                    if self.is_checked() { " checked" } else { "" },
                    name = html_escape(&self.name),
                )
            }
            ElementKind::Select { options } => {
                let mut out = format!(
                    "{}<select name=\"{name}\" id=\"{name}\">",
                    self.render_label(),
                    name = html_escape(&self.name),
                );
                for (value, label) in options {
                    let selected = if *value == self.value { " selected" } else { "" };
                    out.push_str(&format!(
                        "<option value=\"{}\"{}>{}</option>",
                        html_escape(value),
                        selected,
                        html_escape(label)
                    ));
                }
                out.push_str("</select>");
                out
            }
        }
    }

    fn render_label(&self) -> String {
        if self.label.is_empty() {
            String::new()
        } else {
            format!(
                "<label for=\"{}\">{}</label>",
                html_escape(&self.name),
                html_escape(&self.label)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_renders_escaped_text() {
        let note = Element::note("description", "Adjust <all> options");
        assert_eq!(
            note.render(),
            "<p class=\"note\">Adjust &lt;all&gt; options</p>"
        );
    }

    #[test]
    fn test_text_render() {
        let element = Element::text("global_filemode", "File Mode")
            .with_value("2664")
            .required();
        assert_eq!(
            element.render(),
            "<label for=\"global_filemode\">File Mode</label>\
             <input type=\"text\" name=\"global_filemode\" id=\"global_filemode\" \
             value=\"2664\" required>"
        );
    }

    #[test]
    fn test_checkbox_render() {
        let unchecked = Element::checkbox("logging_enable", "Logging Enabled");
        assert!(!unchecked.is_checked());
        assert!(!unchecked.render().contains(" checked"));

        let checked = unchecked.with_value("1");
        assert!(checked.is_checked());
        assert!(checked.render().contains(" checked"));
    }

    #[test]
    fn test_select_marks_current_value() {
        let element = Element::select(
            "logging_level",
            "Logging Level",
            vec![("error", "Error"), ("debug", "Debug")],
        )
        .with_value("debug");

        let markup = element.render();
        assert!(markup.contains("<option value=\"debug\" selected>Debug</option>"));
        assert!(markup.contains("<option value=\"error\">Error</option>"));
    }
}
