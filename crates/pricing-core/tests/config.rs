// File: crates/pricing-core/tests/config.rs
// Purpose: Validate TOML configuration defaults, overrides and validation.

use pricing_core::{PricingConfig, PricingError};

#[test]
fn empty_config_uses_defaults() {
    let cfg = PricingConfig::from_toml("").unwrap();
    assert_eq!(cfg, PricingConfig::default());
    let (params, domain) = cfg.validate().unwrap();
    assert_eq!(params.fixed_cost(), 10_100.0);
    assert_eq!((domain.min(), domain.max()), (20, 100));
    assert_eq!(cfg.domain.default, 40);
    assert_eq!(cfg.chart.theme, "dark");
}

#[test]
fn partial_sections_override() {
    let cfg = PricingConfig::from_toml(
        r#"
        [cost]
        fixed_cost = 500.0

        [domain]
        max = 60

        [[venues]]
        key = "barn"
        name = "Old Barn"
        coffee_break_cost = 3.0
        meeting_room_cost = 0.0
        inventory = { standard = 5, superior = 0 }
        rates = { standard = { shared = 90.0, single = 70.0 }, superior = { shared = 0.0, single = 0.0 } }
        "#,
    )
    .unwrap();
    assert_eq!(cfg.cost.fixed_cost, 500.0);
    assert_eq!(cfg.cost.variable_cost_per_unit, 495.0);
    assert_eq!(cfg.domain.min, 20);
    assert_eq!(cfg.domain.max, 60);
    assert_eq!(cfg.all_venues().len(), 3);
    assert_eq!(cfg.all_venues()[2].max_capacity(), 10);
}

#[test]
fn invalid_values_fail_validation() {
    let cfg = PricingConfig::from_toml("[domain]\nmin = 50\nmax = 10\n").unwrap();
    assert_eq!(cfg.validate().unwrap_err(), PricingError::InvalidRange { min: 50, max: 10 });
    let cfg = PricingConfig::from_toml("[cost]\nvariable_cost_per_unit = -1.0\n").unwrap();
    assert!(matches!(cfg.validate(), Err(PricingError::InvalidParameters { .. })));
}

#[test]
fn malformed_toml_is_a_config_error() {
    assert!(matches!(PricingConfig::from_toml("[cost\n"), Err(PricingError::Config(_))));
    assert!(matches!(PricingConfig::load("definitely/missing.toml"), Err(PricingError::Config(_))));
}
