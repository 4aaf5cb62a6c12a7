// File: crates/price-chart/src/view.rs
// View state: visible ranges derived from chart data, with vertical padding.

use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Fit all series (and the marker) with `margin` of the Y span added above and below.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            if let Some((a, b, c, d)) = s.extents() {
                x_min = x_min.min(a);
                x_max = x_max.max(b);
                y_min = y_min.min(c);
                y_max = y_max.max(d);
            }
        }
        if let Some(m) = &chart.marker {
            x_min = x_min.min(m.x);
            x_max = x_max.max(m.x);
            y_min = y_min.min(m.y);
            y_max = y_max.max(m.y);
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        (x_min, x_max) = widen_flat(x_min, x_max);
        (y_min, y_max) = widen_flat(y_min, y_max);
        let ym = (y_max - y_min) * margin.max(0.0);
        Self { x_min, x_max, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}

/// Give a flat range a span proportional to its magnitude so it stays
/// representable next to values beyond 2^53.
fn widen_flat(lo: f64, hi: f64) -> (f64, f64) {
    let pad = (lo.abs().max(hi.abs()) * 1e-6).max(0.5);
    if hi - lo < pad {
        let mid = lo + (hi - lo) * 0.5;
        (mid - pad, mid + pad)
    } else {
        (lo, hi)
    }
}
