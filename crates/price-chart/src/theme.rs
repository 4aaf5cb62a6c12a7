// File: crates/price-chart/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;
use tracing::warn;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub line_stroke: skia::Color,
    pub marker: skia::Color,
    pub marker_ring: skia::Color,
    pub guide: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            marker: skia::Color::from_argb(255, 255, 230, 70),
            marker_ring: skia::Color::from_argb(255, 18, 18, 20),
            guide: skia::Color::from_argb(160, 255, 230, 70),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            line_stroke: skia::Color::from_argb(255, 32, 120, 200),
            marker: skia::Color::from_argb(255, 220, 60, 60),
            marker_ring: skia::Color::from_argb(255, 250, 250, 252),
            guide: skia::Color::from_argb(140, 220, 60, 60),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            line_stroke: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            marker: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            marker_ring: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            guide: skia::Color::from_argb(200, 0xff, 0xff, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    lookup(name).unwrap_or_else(|| {
        warn!(theme = name, "unknown theme; using dark");
        Theme::dark()
    })
}

/// Exact (case-insensitive) preset match.
pub fn lookup(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
