//! Message catalog lookup
//!
//! Localization proper lives outside this crate. Pages only need a
//! domain + key lookup that falls back to the key itself, so translated
//! catalogs can be swapped in without touching the forms.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static MESSAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "setup.general_config_hint",
            "Now please adjust all application and logging related configuration options to fit your needs.",
        ),
        ("config.show_stacktraces", "Show Stacktraces"),
        ("config.filemode", "File Mode"),
        ("config.module_path", "Module Path"),
        ("config.logging_enable", "Logging Enabled"),
        ("config.logging_level", "Logging Level"),
        ("config.logging_type", "Logging Type"),
        ("config.logging_application", "Application Prefix"),
        ("config.logging_target", "File Path"),
    ])
});

/// Look up a display string, falling back to the key itself.
pub fn translate(domain: &str, key: &str) -> String {
    let qualified = format!("{}.{}", domain, key);
    match MESSAGES.get(qualified.as_str()) {
        Some(message) => (*message).to_string(),
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_message() {
        assert_eq!(translate("config", "filemode"), "File Mode");
    }

    #[test]
    fn test_unknown_message_falls_back_to_key() {
        assert_eq!(translate("config", "no_such_key"), "no_such_key");
        assert_eq!(translate("no_such_domain", "filemode"), "filemode");
    }
}
