// File: crates/price-chart/src/scale.rs
// Summary: Linear value-to-pixel transforms for the X (group size) and Y (price) axes.

use crate::axis::Axis;
use crate::geometry::RectI32;

/// Maps a value range onto a pixel range. `px_start` corresponds to `v_min`, so the
/// Y scale is built with the bottom pixel as start to keep values growing upwards.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_start: f32,
    pub px_end: f32,
    pub v_min: f64,
    pub v_max: f64,
}

impl LinearScale {
    pub fn new(px_start: f32, px_end: f32, v_min: f64, v_max: f64) -> Self {
        let mut s = Self { px_start, px_end, v_min, v_max };
        if (s.v_max - s.v_min).abs() < 1e-12 { s.v_max = s.v_min + 1.0; }
        s
    }

    pub fn horizontal(rect: &RectI32, axis: &Axis) -> Self {
        Self::new(rect.left as f32, rect.right as f32, axis.min, axis.max)
    }

    pub fn vertical(rect: &RectI32, axis: &Axis) -> Self {
        Self::new(rect.bottom as f32, rect.top as f32, axis.min, axis.max)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.v_min) / (self.v_max - self.v_min);
        self.px_start + t as f32 * (self.px_end - self.px_start)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.px_end - self.px_start;
        if span.abs() < f32::EPSILON { return self.v_min; }
        self.v_min + ((px - self.px_start) / span) as f64 * (self.v_max - self.v_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_pixels() {
        let s = LinearScale::new(100.0, 500.0, 20.0, 100.0);
        assert_eq!(s.to_px(20.0), 100.0);
        assert_eq!(s.to_px(100.0), 500.0);
        assert!((s.from_px(300.0) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn vertical_scale_grows_upwards() {
        let s = LinearScale::new(400.0, 0.0, 0.0, 10.0);
        assert!(s.to_px(10.0) < s.to_px(0.0));
    }
}
