// File: crates/price-chart/src/series.rs
// Summary: Drawable series (line curve) and the highlighted marker.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { series_type, data_xy: data }
    }

    /// (x_min, x_max, y_min, y_max) over finite points.
    pub fn extents(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = it.next()?;
        Some(it.fold((x0, x0, y0, y0), |(a, b, c, d), &(x, y)| (a.min(x), b.max(x), c.min(y), d.max(y))))
    }
}

/// A single emphasized point with an optional caption drawn next to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub label: Option<String>,
    /// Draw dashed guide lines from the point to both axes.
    pub guides: bool,
}

impl Marker {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: None, guides: true }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
