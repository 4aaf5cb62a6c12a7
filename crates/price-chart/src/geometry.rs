// File: crates/price-chart/src/geometry.rs
// Summary: Plot-area rectangle and pixel clamping helpers.

/// Integer pixel rectangle of the plot area (right/bottom exclusive edges).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Whether a window-space pointer position lies over the plot (edges included).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.left as f64..=self.right as f64).contains(&x) && (self.top as f64..=self.bottom as f64).contains(&y)
    }
}

/// Like `Ord::clamp` but never panics: when `lo > hi`, `lo` wins.
/// Label placement in very small surfaces can produce inverted bounds.
#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v > hi && hi >= lo { hi } else if v < lo || hi < lo { lo } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_tolerates_inverted_bounds() {
        assert_eq!(clamp(5.0, 0.0, 3.0), 3.0);
        assert_eq!(clamp(-1.0, 0.0, 3.0), 0.0);
        assert_eq!(clamp(2.0, 4.0, 3.0), 4.0);
    }

    #[test]
    fn contains_includes_edges() {
        let r = RectI32::from_ltwh(10, 10, 20, 20);
        assert!(r.contains(10.0, 30.0));
        assert!(!r.contains(9.9, 15.0));
        assert_eq!((r.width(), r.height()), (20, 20));
    }
}
