// File: crates/pricing-core/src/error.rs
// Summary: Error taxonomy for pricing operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PricingError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Domain bounds are zero or inverted; there is no series to render.
    #[error("invalid group size range [{min}, {max}]: bounds must be positive and min <= max")]
    InvalidRange { min: u32, max: u32 },

    #[error("invalid cost parameters (fixed {fixed_cost}, variable {variable_cost_per_unit}): both must be finite and non-negative")]
    InvalidParameters { fixed_cost: f64, variable_cost_per_unit: f64 },

    /// Raw selection input that does not parse as a number.
    #[error("selection input {0:?} is not numeric")]
    NonNumericInput(String),

    #[error("group of {requested} exceeds capacity of {capacity} at {venue}")]
    CapacityExceeded { venue: String, requested: u32, capacity: u32 },

    /// A venue breakdown was requested for nobody.
    #[error("group at {venue} must have at least one person")]
    EmptyGroup { venue: String },

    #[error("unknown venue: {0}")]
    UnknownVenue(String),

    #[error("config parse error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for PricingError {
    fn from(e: toml::de::Error) -> Self {
        PricingError::Config(e.to_string())
    }
}
