// File: crates/pricing-core/src/lib.rs
// Summary: Library entry point; exports the cost model, series generator and presentation adapter.

pub mod config;
pub mod cost;
pub mod domain;
pub mod error;
pub mod format;
pub mod presentation;
pub mod series;
pub mod venue;

pub use config::PricingConfig;
pub use cost::{price_for, CostModel, CostParameters, PricePoint};
pub use domain::{GroupDomain, SelectionState};
pub use error::{PricingError, Result};
pub use format::format_usd;
pub use presentation::{ChartLabels, HighlightPoint, PresentationAdapter, RenderInstruction, RenderSink};
pub use series::{PriceSeries, SeriesGenerator};
pub use venue::{CostBreakdown, RoomAllocation, StayPlan, VenueConfig};
