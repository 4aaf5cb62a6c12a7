// File: crates/price-curve/src/commands.rs
// Summary: Subcommand implementations over generic readers/writers.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use price_chart::{theme, PriceChart, RenderOptions};
use pricing_core::venue::VenueConfig;
use pricing_core::{format_usd, PresentationAdapter, PricingConfig, RenderInstruction, RenderSink};
use tracing::warn;

#[derive(Clone, Debug)]
pub struct RenderArgs {
    pub size: Option<String>,
    pub path: PathBuf,
    pub theme: String,
    pub width: i32,
    pub height: i32,
}

pub fn render_options(theme_name: &str, width: i32, height: i32) -> RenderOptions {
    RenderOptions { width, height, theme: theme::find(theme_name), ..RenderOptions::default() }
}

/// Three display values on one line.
pub fn format_labels(ins: &RenderInstruction) -> String {
    format!(
        "group size: {} | price per person: {} | total cost: {}",
        ins.selected_group_size, ins.formatted_price_per_person, ins.formatted_total_cost
    )
}

fn write_instruction(out: &mut impl Write, ins: &RenderInstruction, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(ins)?)?;
    } else {
        writeln!(out, "{}", format_labels(ins))?;
    }
    Ok(())
}

/// Render one PNG for the requested selection and print its labels.
pub fn render(adapter: &mut PresentationAdapter, args: &RenderArgs, out: &mut impl Write) -> Result<()> {
    if let Some(raw) = &args.size {
        if adapter.on_selection_changed(raw).is_none() {
            warn!(raw = raw.as_str(), "size is not numeric; keeping default selection");
        }
    }
    let mut chart = PriceChart::new();
    adapter.attach(&mut chart);

    let opts = render_options(&args.theme, args.width, args.height);
    chart.render_to_png(&opts, &args.path)?;
    write_instruction(out, &adapter.instruction(), false)?;
    writeln!(out, "wrote {}", args.path.display())?;
    Ok(())
}

/// Replay stdin lines as selection events. `quit`/`exit` stops early.
///
/// The initial state is emitted first. Non-numeric lines produce no output and
/// leave both the selection and the rendered PNG untouched.
pub fn interactive(
    adapter: &mut PresentationAdapter,
    input: impl BufRead,
    out: &mut impl Write,
    png: Option<&Path>,
    opts: &RenderOptions,
    json: bool,
) -> Result<()> {
    let mut chart = PriceChart::new();
    adapter.attach(&mut chart);
    if let Some(path) = png {
        chart.render_to_png(opts, path)?;
    }
    write_instruction(out, &adapter.instruction(), json)?;

    for line in input.lines() {
        let line = line.context("reading selection input")?;
        let raw = line.trim();
        if raw.eq_ignore_ascii_case("quit") || raw.eq_ignore_ascii_case("exit") {
            break;
        }
        let Some(ins) = adapter.on_selection_changed(raw) else {
            warn!(raw, "selection is not an integer; ignored");
            continue;
        };
        chart.apply(&ins);
        if let Some(path) = png {
            chart.render_to_png(opts, path)?;
        }
        write_instruction(out, &ins, json)?;
        out.flush()?;
    }
    Ok(())
}

/// Write `group_size,price_per_person,total_cost` rows for the whole series.
pub fn export_series(adapter: &PresentationAdapter, out: impl Write) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["group_size", "price_per_person", "total_cost"])?;
    for p in adapter.series().points() {
        wtr.write_record([
            p.group_size.to_string(),
            format!("{:.2}", p.price_per_person),
            format!("{:.2}", p.total_cost),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Print an itemized per-person table for each venue and group size.
/// Sizes a venue cannot host are listed with the reason instead of amounts.
pub fn compare(config: &PricingConfig, sizes: &[u32], venue: Option<&str>, out: &mut impl Write) -> Result<()> {
    let all = config.all_venues();
    let venues: Vec<&VenueConfig> = match venue {
        Some(key) => vec![VenueConfig::find(&all, key)?],
        None => all.iter().collect(),
    };
    let plan = &config.stay;
    let rule = "=".repeat(112);

    for v in venues {
        writeln!(out, "{rule}")?;
        writeln!(out, "{}", v.name)?;
        writeln!(out, "{rule}")?;
        writeln!(
            out,
            "{} nights, {} meals at {} each, {} coffee breaks at {} each, meeting room {} for {} days",
            plan.nights,
            plan.meals_per_person(),
            format_usd(plan.meal_cost),
            plan.coffee_breaks_per_person(),
            format_usd(v.coffee_break_cost),
            format_usd(v.meeting_room_cost),
            plan.meeting_room_days,
        )?;
        writeln!(
            out,
            "capacity {} people ({} standard, {} superior rooms)",
            v.max_capacity(),
            v.inventory.standard,
            v.inventory.superior
        )?;
        writeln!(
            out,
            "{:>6} {:>16} {:>12} {:>12} {:>12} {:>14} {:>16}",
            "Size", "Rooms/Person", "Meals", "Coffee", "Meeting", "Per Person", "Total"
        )?;
        writeln!(out, "{}", "-".repeat(112))?;

        for &n in sizes {
            match v.breakdown(n, plan) {
                Ok(b) => writeln!(
                    out,
                    "{:>6} {:>16} {:>12} {:>12} {:>12} {:>14} {:>16}",
                    n,
                    format_usd(b.accommodation),
                    format_usd(b.meals),
                    format_usd(b.coffee),
                    format_usd(b.meeting_room),
                    format_usd(b.per_person),
                    format_usd(b.total),
                )?,
                Err(e) => writeln!(out, "{:>6} n/a ({e})", n)?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
