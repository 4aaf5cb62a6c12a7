// File: crates/pricing-core/src/presentation.rs
// Summary: Presentation adapter turning selection events into immutable render instructions.
// Notes:
// - The adapter owns the only mutable state (the selection). Rendering backends only
//   ever see `RenderInstruction` values through the `RenderSink` seam.

use serde::Serialize;
use tracing::debug;

use crate::cost::{CostModel, CostParameters, PricePoint};
use crate::domain::{GroupDomain, SelectionState};
use crate::error::Result;
use crate::format::format_usd;
use crate::series::{PriceSeries, SeriesGenerator};

/// Marker position in chart coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HighlightPoint {
    pub x: f64,
    pub y: f64,
}

/// Everything a display needs after one selection change. Labels and marker are
/// produced together so consumers update them atomically.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderInstruction {
    pub selected_group_size: u32,
    pub formatted_price_per_person: String,
    pub formatted_total_cost: String,
    pub highlight_point: HighlightPoint,
}

impl RenderInstruction {
    pub fn from_point(point: &PricePoint) -> Self {
        Self {
            selected_group_size: point.group_size,
            formatted_price_per_person: format_usd(point.price_per_person),
            formatted_total_cost: format_usd(point.total_cost),
            highlight_point: HighlightPoint { x: point.group_size as f64, y: point.price_per_person },
        }
    }
}

/// Axis captions handed to the renderer alongside the base curve.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartLabels {
    pub x_axis: String,
    pub y_axis: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self { x_axis: "Group size".into(), y_axis: "Price per person (USD)".into() }
    }
}

/// Tooltip text for a point on the curve, e.g. `40 people: $747.50`.
pub fn tooltip(x: f64, y: f64) -> String {
    let n = x.round() as i64;
    let noun = if n == 1 { "person" } else { "people" };
    format!("{n} {noun}: {}", format_usd(y))
}

/// Rendering capability: draws a static curve once, then applies highlight updates.
pub trait RenderSink {
    fn draw_base_curve(&mut self, series: &PriceSeries, labels: &ChartLabels);
    fn apply(&mut self, instruction: &RenderInstruction);
}

pub struct PresentationAdapter {
    model: CostModel,
    domain: GroupDomain,
    series: PriceSeries,
    labels: ChartLabels,
    selection: SelectionState,
}

impl PresentationAdapter {
    /// Build the base series once and start at `initial` (clamped).
    pub fn new(params: CostParameters, domain: GroupDomain, initial: i64) -> Result<Self> {
        let series = SeriesGenerator::generate(domain.min(), domain.max(), &params)?;
        let selection = SelectionState::new(initial, &domain);
        debug!(points = series.len(), selected = selection.group_size(), "base series generated");
        Ok(Self { model: CostModel::new(params), domain, series, labels: ChartLabels::default(), selection })
    }

    pub fn with_labels(mut self, labels: ChartLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn series(&self) -> &PriceSeries { &self.series }
    pub fn domain(&self) -> &GroupDomain { &self.domain }
    pub fn labels(&self) -> &ChartLabels { &self.labels }
    pub fn selection(&self) -> SelectionState { self.selection }

    /// Instruction for the current selection.
    pub fn instruction(&self) -> RenderInstruction {
        RenderInstruction::from_point(&self.model.price_for(self.selection.group_size()))
    }

    /// Handle raw text from the input control.
    ///
    /// Returns `None` when the text is not numeric; the previous selection is kept
    /// and nothing should be re-rendered.
    pub fn on_selection_changed(&mut self, raw: &str) -> Option<RenderInstruction> {
        let Ok(group_size) = self.domain.parse_clamped(raw) else {
            debug!(raw, "ignoring non-numeric selection input");
            return None;
        };
        self.selection = SelectionState::new(group_size as i64, &self.domain);
        debug!(selected = group_size, "selection changed");
        Some(self.instruction())
    }

    /// Handle a numeric control (slider drag, arrow keys). Always renders.
    pub fn on_group_size(&mut self, n: i64) -> RenderInstruction {
        self.selection = SelectionState::new(n, &self.domain);
        self.instruction()
    }

    /// Step the selection by `delta`, saturating at the domain bounds.
    pub fn step(&mut self, delta: i64) -> RenderInstruction {
        self.on_group_size(self.selection.group_size() as i64 + delta)
    }

    /// Draw the base curve and the current highlight into `sink`.
    pub fn attach(&self, sink: &mut impl RenderSink) {
        sink.draw_base_curve(&self.series, &self.labels);
        sink.apply(&self.instruction());
    }
}
