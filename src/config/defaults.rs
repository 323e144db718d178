// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Alert**: Per-alert defaults (timeout, stacking order, animations)
//! - **Animation**: Fixed enter/exit windows of the lifecycle
//! - **Frame**: Cadence of the progress refresh tick

// ==========================================================================
// Alert Defaults
// ==========================================================================

/// Default auto-dismiss timeout (in milliseconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default stacking order of the alert container.
pub const DEFAULT_Z_INDEX: i32 = 999_999;

/// Default enter animation key.
pub const DEFAULT_ANIMATION_IN: &str = "fadeIn";

/// Default exit animation key.
pub const DEFAULT_ANIMATION_OUT: &str = "fadeOut";

/// Default opacity of the shared overlay backdrop (black).
pub const DEFAULT_OVERLAY_ALPHA: f32 = 0.5;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Time an alert spends in the enter animation before becoming interactive.
pub const DEFAULT_ENTER_WINDOW_MS: u64 = 300;

/// Pause between a dismissal trigger and the start of the fade.
pub const DEFAULT_EXIT_DELAY_MS: u64 = 100;

/// Duration of the exit fade before the element is detached.
pub const DEFAULT_EXIT_FADE_MS: u64 = 300;

/// Upper bound accepted for any configured animation window.
pub const MAX_ANIMATION_WINDOW_MS: u64 = 10_000;

// ==========================================================================
// Frame Defaults
// ==========================================================================

/// Interval of the progress refresh tick (~60 frames per second).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 16;
