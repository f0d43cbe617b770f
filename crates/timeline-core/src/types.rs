// File: crates/timeline-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, render options).

use serde::Deserialize;

use crate::theme::PALETTE;

/// Default svg width in pixels.
pub const WIDTH: u32 = 850;
/// Default svg height in pixels.
pub const HEIGHT: u32 = 300;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

/// Layout and styling knobs for a stacked timeline.
///
/// The left margin is not part of the options: it comes from the page
/// (`TimelineContext::max_margin_left`) so that every timeline on a page
/// lines up with the widest one.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TimelineOptions {
    pub width: u32,
    pub height: u32,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    /// Inner and outer band padding, as a fraction of a band step.
    pub band_padding: f64,
    /// Horizontal inset of the band range inside the plot area.
    pub band_inset: f64,
    pub y_ticks: usize,
    pub unit_label: String,
    pub palette: Vec<String>,
    /// Use `AxisBounds::{min_y, max_y}` as the y domain instead of the stacked maximum.
    pub honor_y_bounds: bool,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margin_top: 20.0,
            margin_right: 40.0,
            margin_bottom: 30.0,
            band_padding: 0.02,
            band_inset: 10.0,
            y_ticks: 7,
            unit_label: "ms".to_string(),
            palette: PALETTE.iter().map(|c| c.to_string()).collect(),
            honor_y_bounds: false,
        }
    }
}

impl TimelineOptions {
    pub fn insets(&self, margin_left: f64) -> Insets {
        Insets::new(margin_left, self.margin_right, self.margin_top, self.margin_bottom)
    }

    /// Plot area (width, height) inside the margins.
    pub fn plot_size(&self, margin_left: f64) -> (f64, f64) {
        let insets = self.insets(margin_left);
        (self.width as f64 - insets.hsum(), self.height as f64 - insets.vsum())
    }
}

/// Axis bounds handed in by the page. Ignored unless `honor_y_bounds` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct AxisBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl AxisBounds {
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }
}
