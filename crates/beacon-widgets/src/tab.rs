//! Tab widget
//!
//! A single tab, usually owned by a navigation bar. Renders to one
//! `<li>` list item with an optional link and icon.

use serde::Deserialize;

use crate::error::WidgetError;
use crate::view::{UrlParams, ViewRenderer};
use crate::Result;

/// Construction-time properties for a [`Tab`].
///
/// Deserializes from a JSON property mapping as delivered by dashboards
/// or module manifests; unrecognized keys are silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabConfig {
    /// Tab identifier, required
    pub name: Option<String>,
    /// The title displayed for this tab
    pub title: Option<String>,
    /// The url this tab points to, relative to the console base
    pub url: Option<String>,
    /// Parameters appended to this tab's url
    pub url_params: UrlParams,
    /// Icon image for this tab
    pub icon: Option<String>,
    /// Icon class, used only when no icon image is set
    pub icon_cls: Option<String>,
}

/// How a tab caption is decorated. An icon image wins over an icon class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptionDecoration {
    /// A 16x16 image in front of the title
    Image(String),
    /// An `<i class="icon-…">` fragment in front of the title
    IconClass(String),
    /// The bare title
    Plain,
}

#[derive(Debug, Clone)]
pub struct Tab {
    /// Tab identifier, unique within the owning bar
    name: String,
    /// The title displayed for this tab
    title: String,
    /// The url this tab points to
    url: Option<String>,
    /// Parameters for this tab's url
    url_params: UrlParams,
    /// Icon image for this tab
    icon: Option<String>,
    /// Icon class used when no icon image is set
    icon_cls: Option<String>,
    /// Whether this tab is currently active
    active: bool,
}

impl Tab {
    /// Create a new tab from its configuration.
    pub fn new(config: TabConfig) -> Result<Self> {
        let name = match config.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(WidgetError::MissingName),
        };

        Ok(Self {
            name,
            title: config.title.unwrap_or_default(),
            url: config.url,
            url_params: config.url_params,
            icon: config.icon,
            icon_cls: config.icon_cls,
            active: false,
        })
    }

    /// Create a tab from a JSON property mapping.
    ///
    /// Unrecognized keys are ignored; mistyped values fail construction.
    pub fn from_value(properties: serde_json::Value) -> Result<Self> {
        let config: TabConfig = serde_json::from_value(properties)
            .map_err(|e| WidgetError::Configuration(e.to_string()))?;
        Self::new(config)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Update the displayed title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set the url this tab points to
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
    }

    /// Set the parameters for this tab's url
    pub fn set_url_params(&mut self, url_params: UrlParams) {
        self.url_params = url_params;
    }

    /// Set an icon image for this tab
    pub fn set_icon(&mut self, icon: impl Into<String>) {
        self.icon = Some(icon.into());
    }

    /// Set an icon class, used in an `<i>` tag when no icon image is set
    pub fn set_icon_cls(&mut self, icon_cls: impl Into<String>) {
        self.icon_cls = Some(icon_cls.into());
    }

    /// Set this tab active or inactive.
    ///
    /// This is usually done through the owning navigation bar, so calling
    /// it directly is rarely a good idea.
    pub fn set_active(&mut self, active: bool) -> &mut Self {
        tracing::debug!(tab = %self.name, active, "Tab render state changed");
        self.active = active;
        self
    }

    /// Resolve which decoration the caption carries.
    pub fn decoration(&self) -> CaptionDecoration {
        if let Some(icon) = &self.icon {
            CaptionDecoration::Image(icon.clone())
        } else if let Some(cls) = &self.icon_cls {
            CaptionDecoration::IconClass(cls.clone())
        } else {
            CaptionDecoration::Plain
        }
    }

    /// Render this tab as an `<li>` list item.
    ///
    /// The caption may contain markup produced by the view, so it is
    /// passed to the link builder with escaping disabled.
    pub fn render(&self, view: &dyn ViewRenderer) -> String {
        let class = if self.active { "class=\"active\"" } else { "" };

        let caption = match self.decoration() {
            CaptionDecoration::Image(icon) => {
                format!("{} {}", view.img(&icon, 16, 16), self.title)
            }
            CaptionDecoration::IconClass(cls) => {
                format!("<i class=\"icon-{}\"></i> {}", cls, self.title)
            }
            CaptionDecoration::Plain => self.title.clone(),
        };

        let body = match &self.url {
            Some(url) => view.qlink(&caption, url, &self.url_params, false),
            None => caption,
        };

        format!("<li {}>{}</li>\n", class, body)
    }
}
