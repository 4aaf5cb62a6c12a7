// File: crates/price-curve/tests/commands.rs
// Purpose: Drive the subcommands through in-memory readers and writers.

use price_curve::commands::{self, RenderArgs};
use price_curve::build_adapter;
use pricing_core::PricingConfig;
use rstest::rstest;

fn run_interactive(input: &str, json: bool) -> Vec<String> {
    let mut adapter = build_adapter(&PricingConfig::default()).unwrap();
    let opts = commands::render_options("dark", 320, 200);
    let mut out = Vec::new();
    commands::interactive(&mut adapter, input.as_bytes(), &mut out, None, &opts, json).unwrap();
    String::from_utf8(out).unwrap().lines().map(str::to_owned).collect()
}

#[test]
fn interactive_prints_initial_then_each_accepted_selection() {
    let lines = run_interactive("30\nabc\n150\n\n", false);
    assert_eq!(
        lines,
        vec![
            "group size: 40 | price per person: $747.50 | total cost: $29,900.00",
            "group size: 30 | price per person: $831.67 | total cost: $24,950.00",
            "group size: 100 | price per person: $596.00 | total cost: $59,600.00",
        ]
    );
}

#[test]
fn interactive_skips_decimal_selections() {
    let lines = run_interactive("41.6\n1e2\n30\n", false);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("group size: 30 "));
}

#[test]
fn interactive_stops_on_quit() {
    let lines = run_interactive("25\nquit\n90\n", false);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("group size: 25 "));
}

#[test]
fn interactive_json_lines() {
    let lines = run_interactive("30\n", true);
    let v: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
    assert_eq!(v["selected_group_size"], 30);
    assert_eq!(v["formatted_price_per_person"], "$831.67");
    assert_eq!(v["formatted_total_cost"], "$24,950.00");
    assert_eq!(v["highlight_point"]["x"], 30.0);
}

#[test]
fn series_csv_has_header_and_81_rows() {
    let adapter = build_adapter(&PricingConfig::default()).unwrap();
    let mut buf = Vec::new();
    commands::export_series(&adapter, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 82);
    assert_eq!(rows[0], "group_size,price_per_person,total_cost");
    assert_eq!(rows[1], "20,1000.00,20000.00");
    assert_eq!(rows[21], "40,747.50,29900.00");
    assert_eq!(rows[81], "100,596.00,59600.00");
}

#[rstest]
#[case(None, 2)]
#[case(Some("la-palma"), 1)]
fn compare_lists_each_venue(#[case] venue: Option<&str>, #[case] tables: usize) {
    let mut buf = Vec::new();
    commands::compare(&PricingConfig::default(), &[30, 40, 200], venue, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.matches("Per Person").count(), tables);
    assert_eq!(text.matches("n/a (group of 200 exceeds capacity").count(), tables);
}

#[test]
fn compare_el_hierro_totals() {
    let mut buf = Vec::new();
    commands::compare(&PricingConfig::default(), &[30], Some("el-hierro"), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("Parador de El Hierro"));
    assert!(text.contains("$25,850.00"), "{text}");
    assert!(text.contains("$418.00"));
}

#[test]
fn compare_reports_empty_group() {
    let mut buf = Vec::new();
    commands::compare(&PricingConfig::default(), &[0], Some("la-palma"), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("n/a (group at Parador de La Palma must have at least one person)"), "{text}");
}

#[test]
fn compare_unknown_venue_fails() {
    let mut buf = Vec::new();
    assert!(commands::compare(&PricingConfig::default(), &[30], Some("atlantis"), &mut buf).is_err());
}

#[test]
fn invalid_config_refuses_to_start() {
    let cfg = PricingConfig::from_toml("[domain]\nmin = 0\n").unwrap();
    let err = build_adapter(&cfg).err().expect("should fail");
    assert!(format!("{err:#}").contains("invalid group size range"));
}

#[test]
fn render_writes_png_and_labels() {
    let mut adapter = build_adapter(&PricingConfig::default()).unwrap();
    let args = RenderArgs {
        size: Some("150".into()),
        path: "target/test_out/cli_render.png".into(),
        theme: "light".into(),
        width: 400,
        height: 260,
    };
    let mut out = Vec::new();
    commands::render(&mut adapter, &args, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("group size: 100 | price per person: $596.00"));
    let bytes = std::fs::read(&args.path).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
