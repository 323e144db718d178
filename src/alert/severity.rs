// SPDX-License-Identifier: MPL-2.0
//! Severity keys and container positions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity level of an alert.
///
/// Selects the accent color, icon and sound. Keys that are not built in are
/// kept as [`Severity::Custom`] so hosts can register their own icons and
/// colors for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Primary,
    Secondary,
    Success,
    Error,
    Warning,
    Info,
    Question,
    Loading,
    Custom(String),
}

impl Severity {
    /// Every built-in severity, in declaration order.
    pub const BUILTIN: [Severity; 8] = [
        Severity::Primary,
        Severity::Secondary,
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Question,
        Severity::Loading,
    ];

    /// Parses a severity key. Unknown keys become [`Severity::Custom`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "primary" => Severity::Primary,
            "secondary" => Severity::Secondary,
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            "info" => Severity::Info,
            "question" => Severity::Question,
            "loading" => Severity::Loading,
            other => Severity::Custom(other.to_string()),
        }
    }

    /// Returns the key this severity is registered under.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Severity::Primary => "primary",
            Severity::Secondary => "secondary",
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Question => "question",
            Severity::Loading => "loading",
            Severity::Custom(key) => key,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl From<&str> for Severity {
    fn from(key: &str) -> Self {
        Severity::from_key(key)
    }
}

/// Screen anchor of the alert container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// Returns true when alerts stack from the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-left" => Ok(Position::TopLeft),
            "top-center" => Ok(Position::TopCenter),
            "top-right" => Ok(Position::TopRight),
            "bottom-left" => Ok(Position::BottomLeft),
            "bottom-center" => Ok(Position::BottomCenter),
            "bottom-right" => Ok(Position::BottomRight),
            other => Err(format!("unknown position: {other}")),
        }
    }
}
