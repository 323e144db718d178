// SPDX-License-Identifier: MPL-2.0
//! Action buttons rendered inside an alert.

use super::callback::Callback;

/// An action button shown below the alert message.
#[derive(Debug, Clone, Default)]
pub struct Button {
    /// Label of the button.
    pub text: String,
    /// Extra style class handed to the surface.
    pub class: Option<String>,
    /// Inline style handed to the surface.
    pub style: Option<String>,
    /// Whether pressing the button dismisses the alert. Only an explicit
    /// `Some(false)` keeps the alert open.
    pub close_on_click: Option<bool>,
    /// Invoked when the button is pressed.
    pub action: Option<Callback>,
}

impl Button {
    /// Creates a button with the given label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Sets the style class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the inline style.
    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Sets whether the alert closes when this button is pressed.
    #[must_use]
    pub fn close_on_click(mut self, close: bool) -> Self {
        self.close_on_click = Some(close);
        self
    }

    /// Sets the action invoked on press.
    #[must_use]
    pub fn on_press(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.action = Some(Callback::new(move |()| action()));
        self
    }

    /// Returns whether pressing this button starts the dismissal.
    #[must_use]
    pub fn closes_alert(&self) -> bool {
        self.close_on_click != Some(false)
    }
}
