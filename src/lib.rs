// SPDX-License-Identifier: MPL-2.0
//! `iced_alerts` shows queued, pausable toast alerts.
//!
//! The lifecycle core ([`controller`], [`alert`]) is independent of any
//! toolkit: it drives a [`Surface`](surface::Surface) with an explicit clock.
//! The [`ui`] module renders that surface with Iced, and [`Alerts`] bundles
//! both behind severity-named entry points.

#![doc(html_root_url = "https://docs.rs/iced_alerts/0.1.0")]

pub mod alert;
pub mod config;
pub mod controller;
pub mod error;
pub mod facade;
pub mod registry;
pub mod surface;
pub mod theme;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;

pub use alert::{
    AlertId, AlertOptions, Button, Completion, DismissReason, Outcome, Overrides, Phase, Position,
    Severity,
};
pub use controller::Controller;
pub use facade::Alerts;
pub use surface::HeadlessSurface;
pub use theme::ThemeMode;
pub use ui::IcedSurface;
