// File: crates/pricing-core/tests/presentation.rs
// Purpose: Validate the selection-to-render-instruction contract and currency formatting.

use pricing_core::presentation::tooltip;
use pricing_core::{
    format_usd, ChartLabels, CostParameters, GroupDomain, HighlightPoint, PresentationAdapter, PriceSeries,
    RenderInstruction, RenderSink, SelectionState,
};
use rstest::rstest;

fn adapter() -> PresentationAdapter {
    PresentationAdapter::new(CostParameters::default(), GroupDomain::default(), 40).expect("adapter")
}

#[rstest]
#[case(1234.5, "$1,234.50")]
#[case(0.0, "$0.00")]
#[case(831.666_666, "$831.67")]
#[case(24_950.0, "$24,950.00")]
#[case(1_000_000.0, "$1,000,000.00")]
#[case(999.999, "$1,000.00")]
#[case(-12.5, "-$12.50")]
#[case(f64::NAN, "n/a")]
fn usd_formatting(#[case] amount: f64, #[case] want: &str) {
    assert_eq!(format_usd(amount), want);
}

#[test]
fn initial_instruction_uses_default_selection() {
    let ins = adapter().instruction();
    assert_eq!(
        ins,
        RenderInstruction {
            selected_group_size: 40,
            formatted_price_per_person: "$747.50".into(),
            formatted_total_cost: "$29,900.00".into(),
            highlight_point: HighlightPoint { x: 40.0, y: 747.5 },
        }
    );
}

#[test]
fn selection_of_thirty() {
    let mut a = adapter();
    let ins = a.on_selection_changed("30").expect("numeric");
    assert_eq!(ins.selected_group_size, 30);
    assert_eq!(ins.formatted_price_per_person, "$831.67");
    assert_eq!(ins.formatted_total_cost, "$24,950.00");
    assert_eq!(ins.highlight_point.x, 30.0);
}

#[test]
fn out_of_domain_input_is_clamped() {
    let mut a = adapter();
    assert_eq!(a.on_selection_changed("150").unwrap().selected_group_size, 100);
    assert_eq!(a.on_selection_changed("3").unwrap().selected_group_size, 20);
    assert_eq!(a.on_selection_changed("-40").unwrap().selected_group_size, 20);
}

#[test]
fn non_numeric_input_keeps_previous_state() {
    let mut a = adapter();
    a.on_selection_changed("55").unwrap();
    assert!(a.on_selection_changed("abc").is_none());
    assert_eq!(a.selection().group_size(), 55);
    assert_eq!(a.instruction().selected_group_size, 55);
}

#[rstest]
#[case("41.6")]
#[case("1e2")]
#[case("40.0")]
#[case("")]
#[case("forty")]
fn only_integer_text_is_a_selection(#[case] raw: &str) {
    let mut a = adapter();
    a.on_selection_changed("55").unwrap();
    assert_eq!(a.on_selection_changed(raw), None);
    assert_eq!(a.selection().group_size(), 55);
}

#[test]
fn overflowing_integer_text_clamps() {
    let mut a = adapter();
    assert_eq!(a.on_selection_changed("99999999999999999999").unwrap().selected_group_size, 100);
}

#[test]
fn selection_state_transition_is_explicit() {
    let domain = GroupDomain::default();
    let s = SelectionState::new(40, &domain);
    assert_eq!(s.next("150", &domain).group_size(), 100);
    assert_eq!(s.next("abc", &domain), s);
    assert_eq!(SelectionState::new(500, &domain).group_size(), 100);
}

#[test]
fn selection_changes_do_not_touch_the_base_series() {
    let mut a = adapter();
    let before = a.series().clone();
    a.on_selection_changed("77");
    a.on_group_size(21);
    a.step(-5);
    assert_eq!(a.series(), &before);
    assert_eq!(a.selection().group_size(), 20);
}

#[test]
fn step_saturates_at_bounds() {
    let mut a = adapter();
    assert_eq!(a.step(1000).selected_group_size, 100);
    assert_eq!(a.step(-1).selected_group_size, 99);
}

#[test]
fn invalid_domain_refuses_to_start() {
    assert!(GroupDomain::new(100, 20).is_err());
    let bad = CostParameters::new(-5.0, 1.0);
    assert!(bad.is_err());
}

#[test]
fn tooltip_formats_usd() {
    assert_eq!(tooltip(40.0, 747.5), "40 people: $747.50");
    assert_eq!(tooltip(1.0, 10.0), "1 person: $10.00");
}

#[derive(Default)]
struct Recorder {
    base: Option<(usize, String)>,
    applied: Vec<u32>,
}

impl RenderSink for Recorder {
    fn draw_base_curve(&mut self, series: &PriceSeries, labels: &ChartLabels) {
        self.base = Some((series.len(), labels.x_axis.clone()));
    }
    fn apply(&mut self, instruction: &RenderInstruction) {
        self.applied.push(instruction.selected_group_size);
    }
}

#[test]
fn attach_draws_curve_once_then_highlights() {
    let mut a = adapter();
    let mut sink = Recorder::default();
    a.attach(&mut sink);
    if let Some(ins) = a.on_selection_changed("60") { sink.apply(&ins); }
    if let Some(ins) = a.on_selection_changed("x") { sink.apply(&ins); }
    assert_eq!(sink.base, Some((81, "Group size".to_string())));
    assert_eq!(sink.applied, vec![40, 60]);
}
