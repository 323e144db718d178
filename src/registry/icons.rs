// SPDX-License-Identifier: MPL-2.0
//! Severity icon table.

use crate::alert::{AlertOptions, Severity};
use std::collections::HashMap;

/// Resolved icon of an alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// Text glyph (usually an emoji).
    Glyph(String),
    /// Image source (a URL or an absolute path).
    Image(String),
}

impl Icon {
    /// Classifies a raw icon value. Empty values yield `None`.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else if value.starts_with("http") || value.starts_with('/') {
            Some(Icon::Image(value.to_string()))
        } else {
            Some(Icon::Glyph(value.to_string()))
        }
    }
}

/// Icons registered per severity.
#[derive(Debug, Clone)]
pub struct IconSet {
    icons: HashMap<Severity, String>,
}

impl Default for IconSet {
    fn default() -> Self {
        let icons = [
            (Severity::Success, "✅"),
            (Severity::Error, "❌"),
            (Severity::Warning, "⚠️"),
            (Severity::Info, "ℹ️"),
            (Severity::Question, "❓"),
            (Severity::Loading, "⏳"),
            (Severity::Primary, "🔵"),
            (Severity::Secondary, "⚪"),
        ]
        .into_iter()
        .map(|(severity, icon)| (severity, icon.to_string()))
        .collect();
        Self { icons }
    }
}

impl IconSet {
    /// Registered icon for a severity, empty when none is registered.
    #[must_use]
    pub fn get(&self, severity: &Severity) -> &str {
        self.icons.get(severity).map_or("", String::as_str)
    }

    /// Registers or replaces icons; keys are severity names.
    pub fn extend<I, K, V>(&mut self, icons: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, icon) in icons {
            self.icons
                .insert(Severity::from_key(key.as_ref()), icon.into());
        }
    }

    /// Picks the icon for an alert: `custom_icon`, then `icon`, then the
    /// severity table.
    #[must_use]
    pub fn resolve(&self, options: &AlertOptions) -> Option<Icon> {
        let value = options
            .custom_icon
            .as_deref()
            .or(options.icon.as_deref())
            .unwrap_or_else(|| self.get(&options.severity));
        Icon::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::Overrides;

    #[test]
    fn every_builtin_severity_has_an_icon() {
        let icons = IconSet::default();
        for severity in Severity::BUILTIN {
            assert!(!icons.get(&severity).is_empty(), "missing icon for {severity}");
        }
    }

    #[test]
    fn unknown_severity_falls_back_to_no_icon() {
        let icons = IconSet::default();
        let options = Overrides::new()
            .severity("celebration")
            .resolve(&AlertOptions::default());
        assert_eq!(icons.resolve(&options), None);
    }

    #[test]
    fn custom_icon_wins_over_icon_and_table() {
        let icons = IconSet::default();
        let options = Overrides::new()
            .icon("*")
            .custom_icon("https://example.org/ok.png")
            .resolve(&AlertOptions::default());
        assert_eq!(
            icons.resolve(&options),
            Some(Icon::Image("https://example.org/ok.png".into()))
        );

        let options = Overrides::new().icon("*").resolve(&AlertOptions::default());
        assert_eq!(icons.resolve(&options), Some(Icon::Glyph("*".into())));
    }

    #[test]
    fn extend_registers_custom_keys() {
        let mut icons = IconSet::default();
        icons.extend([("success", "👍"), ("celebration", "🎉")]);

        assert_eq!(icons.get(&Severity::Success), "👍");
        assert_eq!(icons.get(&Severity::Custom("celebration".into())), "🎉");
    }

    #[test]
    fn paths_are_images() {
        assert_eq!(
            Icon::from_value("/icons/warn.svg"),
            Some(Icon::Image("/icons/warn.svg".into()))
        );
        assert_eq!(Icon::from_value(""), None);
    }
}
