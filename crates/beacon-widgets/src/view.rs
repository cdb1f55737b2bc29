//! HTML view rendering
//!
//! Widgets never concatenate their own anchor or image markup. They go
//! through a [`ViewRenderer`] handed in at render time, so the page that
//! owns them decides about base paths and caption escaping.

use std::collections::BTreeMap;

/// Query parameters for a generated link, ordered by name.
pub type UrlParams = BTreeMap<String, String>;

/// Markup-building capabilities available to widgets at render time.
pub trait ViewRenderer {
    /// Build an image tag for `src` with fixed pixel dimensions.
    fn img(&self, src: &str, width: u32, height: u32) -> String;

    /// Build a link tag around `caption`.
    ///
    /// The caption is HTML-escaped only when `escape_caption` is set.
    /// Callers that embed markup in the caption pass `false`.
    fn qlink(
        &self,
        caption: &str,
        target: &str,
        params: &UrlParams,
        escape_caption: bool,
    ) -> String;
}

/// Default renderer producing plain HTML, optionally below a base path.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    /// Prefix for image sources and link targets, empty for none
    base_path: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve all image sources and link targets below `base_path`.
    pub fn with_base_path(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, target: &str) -> String {
        if self.base_path.is_empty() {
            target.to_string()
        } else {
            format!(
                "{}/{}",
                self.base_path.trim_end_matches('/'),
                target.trim_start_matches('/')
            )
        }
    }
}

impl ViewRenderer for HtmlRenderer {
    fn img(&self, src: &str, width: u32, height: u32) -> String {
        format!(
            "<img src=\"{}\" width=\"{}\" height=\"{}\">",
            html_escape(&self.resolve(src)),
            width,
            height
        )
    }

    fn qlink(
        &self,
        caption: &str,
        target: &str,
        params: &UrlParams,
        escape_caption: bool,
    ) -> String {
        let mut href = self.resolve(target);
        if !params.is_empty() {
            let query: Vec<String> = params
                .iter()
                .map(|(name, value)| {
                    format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
                })
                .collect();
            href.push('?');
            href.push_str(&query.join("&"));
        }

        let caption = if escape_caption {
            html_escape(caption)
        } else {
            caption.to_string()
        };

        format!("<a href=\"{}\">{}</a>", html_escape(&href), caption)
    }
}

/// Simple HTML escape
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
