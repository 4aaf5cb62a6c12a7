// File: crates/price-chart/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

use crate::geometry::RectI32;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Plot area inside a `width` x `height` surface. Never narrower than one pixel.
    pub fn plot_rect(&self, width: i32, height: i32) -> RectI32 {
        let w = (width - self.hsum() as i32).max(1);
        let h = (height - self.vsum() as i32).max(1);
        RectI32::from_ltwh(self.left as i32, self.top as i32, w, h)
    }
}

impl Default for Insets {
    /// Wide left margin leaves room for currency tick labels.
    fn default() -> Self {
        Self::new(96, 32, 48, 64)
    }
}
