// File: crates/price-window/src/slider.rs
// Summary: Window-independent slider state: maps pointer and key input to selection changes.

use price_chart::{PriceChart, RenderOptions};
use pricing_core::{PresentationAdapter, RenderInstruction, RenderSink};

/// Discrete keyboard steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Back,
    Forward,
    PageBack,
    PageForward,
}

impl Step {
    fn delta(self) -> i64 {
        match self {
            Step::Back => -1,
            Step::Forward => 1,
            Step::PageBack => -5,
            Step::PageForward => 5,
        }
    }
}

pub struct Slider {
    adapter: PresentationAdapter,
    chart: PriceChart,
    pub opts: RenderOptions,
    dragging: bool,
    cursor: Option<(f64, f64)>,
}

impl Slider {
    pub fn new(adapter: PresentationAdapter, opts: RenderOptions) -> Self {
        let mut chart = PriceChart::new();
        adapter.attach(&mut chart);
        Self { adapter, chart, opts, dragging: false, cursor: None }
    }

    pub fn chart(&self) -> &PriceChart { &self.chart }

    pub fn instruction(&self) -> RenderInstruction { self.adapter.instruction() }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.opts.width = width.max(1) as i32;
        self.opts.height = height.max(1) as i32;
    }

    /// Returns a new instruction when the pointer drags to a different group size.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> Option<RenderInstruction> {
        self.cursor = Some((x, y));
        if self.dragging { self.select_at(x) } else { None }
    }

    /// Pressing inside the plot starts a drag and selects under the pointer.
    pub fn pointer_button(&mut self, pressed: bool) -> Option<RenderInstruction> {
        if !pressed {
            self.dragging = false;
            return None;
        }
        let (x, y) = self.cursor?;
        if !self.opts.plot_rect().contains(x, y) {
            return None;
        }
        self.dragging = true;
        self.select_at(x)
    }

    pub fn key(&mut self, step: Step) -> Option<RenderInstruction> {
        let before = self.adapter.selection();
        let ins = self.adapter.step(step.delta());
        self.publish(before, ins)
    }

    fn select_at(&mut self, x: f64) -> Option<RenderInstruction> {
        let before = self.adapter.selection();
        let size = self.chart.chart().x_at_pixel(&self.opts, x).round() as i64;
        let ins = self.adapter.on_group_size(size);
        self.publish(before, ins)
    }

    fn publish(&mut self, before: pricing_core::SelectionState, ins: RenderInstruction) -> Option<RenderInstruction> {
        if self.adapter.selection() == before {
            return None;
        }
        self.chart.apply(&ins);
        Some(ins)
    }
}
