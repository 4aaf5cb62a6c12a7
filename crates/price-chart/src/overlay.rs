// File: crates/price-chart/src/overlay.rs
// Summary: Price chart: base curve drawn once, highlight overlay replaced on every selection.

use pricing_core::presentation::tooltip;
use pricing_core::{ChartLabels, PriceSeries, RenderInstruction, RenderSink};

use crate::axis::{Axis, TickFormat};
use crate::chart::{Chart, RenderOptions, RgbaFrame};
use crate::series::{Marker, Series, SeriesType};

/// Headroom above and below the curve, as a fraction of its price span.
const Y_MARGIN: f64 = 0.06;

/// A `Chart` wired as a `RenderSink`. The base series is only touched by
/// `draw_base_curve`; `apply` swaps the marker and the headline.
#[derive(Clone, Debug, Default)]
pub struct PriceChart {
    chart: Chart,
    last: Option<RenderInstruction>,
}

impl PriceChart {
    pub fn new() -> Self { Self::default() }

    pub fn chart(&self) -> &Chart { &self.chart }

    pub fn last_instruction(&self) -> Option<&RenderInstruction> { self.last.as_ref() }

    pub fn render_to_png(&self, opts: &RenderOptions, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        self.chart.render_to_png(opts, path)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> anyhow::Result<Vec<u8>> {
        self.chart.render_to_png_bytes(opts)
    }

    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> anyhow::Result<RgbaFrame> {
        self.chart.render_to_rgba8(opts)
    }
}

impl RenderSink for PriceChart {
    fn draw_base_curve(&mut self, series: &PriceSeries, labels: &ChartLabels) {
        self.chart.series = vec![Series::with_data(SeriesType::Line, series.xy())];
        self.chart.x_axis = Axis::new(labels.x_axis.clone(), 0.0, 1.0);
        self.chart.y_axis = Axis::new(labels.y_axis.clone(), 0.0, 1.0).with_ticks(TickFormat::Usd);
        // fit to the curve only so the axes stay put while the marker moves
        let marker = self.chart.marker.take();
        self.chart.autoscale_axes(Y_MARGIN);
        self.chart.marker = marker;
    }

    fn apply(&mut self, instruction: &RenderInstruction) {
        let p = instruction.highlight_point;
        self.chart.set_marker(Some(Marker::new(p.x, p.y).with_label(tooltip(p.x, p.y))));
        self.chart.title = Some(format!(
            "{} people · {} per person · {} total",
            instruction.selected_group_size, instruction.formatted_price_per_person, instruction.formatted_total_cost
        ));
        self.last = Some(instruction.clone());
    }
}
