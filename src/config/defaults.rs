// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Viewer scale bounds and step sizes
//! - **Cues**: Audio feedback volumes
//! - **Ads**: Interstitial carousel timings
//! - **Catalog**: Categorization thresholds

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale applied every time the viewer opens.
pub const BASE_SCALE: f32 = 1.0;

/// Lower bound shared by every zoom path.
pub const MIN_SCALE: f32 = 1.0;

/// Upper bound for mouse-wheel zoom.
pub const WHEEL_MAX_SCALE: f32 = 4.0;

/// Upper bound for the zoom-in button.
pub const BUTTON_MAX_SCALE: f32 = 3.0;

/// Scale change per wheel tick.
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// Scale increase per zoom-in button press.
pub const BUTTON_ZOOM_IN_STEP: f32 = 0.2;

/// Scale decrease per zoom-out button press.
pub const BUTTON_ZOOM_OUT_STEP: f32 = 0.3;

/// Transient preview scale a viewer carries before its first open.
/// Double-clicking at exactly this scale zooms in instead of resetting.
pub const PEEK_SCALE: f32 = 1.5;

/// Duration of the ease-out transform transition (milliseconds).
pub const TRANSFORM_TRANSITION_MS: u64 = 200;

/// Fraction of the window the fitted image may occupy on each axis.
pub const VIEWER_FIT_FRACTION: f32 = 0.9;

// ==========================================================================
// Cue Defaults
// ==========================================================================

/// Volume used when a cue is played without an explicit level.
pub const DEFAULT_CUE_VOLUME: f32 = 0.4;

/// Volume of the hover cue played on each wheel tick in the viewer.
pub const WHEEL_CUE_VOLUME: f32 = 0.3;

/// Volume of the zoom cue played by the zoom buttons.
pub const ZOOM_CUE_VOLUME: f32 = 0.2;

/// Default master volume applied on top of every cue (0.0 to 1.0).
pub const DEFAULT_MASTER_VOLUME: f32 = 0.8;

/// Minimum master volume.
pub const MIN_MASTER_VOLUME: f32 = 0.0;

/// Maximum master volume.
pub const MAX_MASTER_VOLUME: f32 = 1.0;

// ==========================================================================
// Ad Carousel Defaults
// ==========================================================================

/// How long an image advertisement stays on screen (seconds).
pub const DEFAULT_AD_IMAGE_SECS: u64 = 5;

/// How long a video advertisement stays on screen (seconds).
pub const DEFAULT_AD_VIDEO_SECS: u64 = 15;

/// Minimum slide duration accepted from the config file (seconds).
pub const MIN_AD_SECS: u64 = 1;

/// Maximum slide duration accepted from the config file (seconds).
pub const MAX_AD_SECS: u64 = 120;

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Products priced at or below this amount (and above zero) without a
/// dedicated GPU are filed under the student category.
pub const DEFAULT_STUDENT_PRICE_CEILING: f64 = 300.0;

/// Products added within this many months appear under new arrivals.
pub const DEFAULT_NEW_ARRIVAL_MONTHS: u32 = 1;

/// Number of thumbnails shown in the detail view.
pub const MAX_DETAIL_THUMBNAILS: usize = 8;

/// Number of features shown on an item card.
pub const CARD_FEATURE_COUNT: usize = 2;

const _: () = {
    assert!(MIN_SCALE <= BASE_SCALE);
    assert!(BUTTON_MAX_SCALE < WHEEL_MAX_SCALE);
    assert!(PEEK_SCALE > MIN_SCALE && PEEK_SCALE < BUTTON_MAX_SCALE);
    assert!(MIN_AD_SECS <= DEFAULT_AD_IMAGE_SECS);
    assert!(DEFAULT_AD_VIDEO_SECS <= MAX_AD_SECS);
    assert!(MIN_MASTER_VOLUME < MAX_MASTER_VOLUME);
};
