// SPDX-License-Identifier: MPL-2.0
//! Alert data model and per-alert lifecycle.
//!
//! # Components
//!
//! - [`options`] - `AlertOptions` and the shallow-merged `Overrides`
//! - [`countdown`] - Pausable countdown behind auto-dismiss and progress
//! - [`instance`] - `AlertInstance` phase machine
//! - [`completion`] - One-shot `Completion` handed back to callers

mod button;
mod callback;
pub mod completion;
pub mod countdown;
pub mod instance;
pub mod options;
mod severity;

pub use button::Button;
pub use callback::Callback;
pub use completion::{Completion, DismissReason, Outcome};
pub use countdown::Countdown;
pub use instance::{AlertId, AlertInstance, AnimationTiming, ClickTarget, Phase};
pub use options::{AlertOptions, Overrides};
pub use severity::{Position, Severity};
