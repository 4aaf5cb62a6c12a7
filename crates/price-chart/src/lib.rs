// File: crates/price-chart/src/lib.rs
// Summary: Chart library entry point; exports chart construction, rendering and the price-curve sink.

pub mod axis;
pub mod chart;
pub mod geometry;
pub mod grid;
pub mod overlay;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{Axis, TickFormat};
pub use chart::{Chart, RenderOptions, RgbaFrame};
pub use overlay::PriceChart;
pub use series::{Marker, Series, SeriesType};
pub use text::TextShaper;
pub use theme::Theme;
pub use view::ViewState;
