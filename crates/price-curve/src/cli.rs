// File: crates/price-curve/src/cli.rs
// Summary: Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "price-curve", version, about = "Price per person across group sizes", long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true, env = "PRICE_CURVE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the curve with one group size highlighted to a PNG.
    Render {
        /// Selected group size (clamped into the configured range).
        #[arg(short, long)]
        size: Option<String>,
        #[arg(short, long, default_value = "target/out/price_curve.png")]
        out: PathBuf,
        /// Theme preset: dark, light, high-contrast-dark.
        #[arg(long)]
        theme: Option<String>,
        #[arg(long)]
        width: Option<i32>,
        #[arg(long)]
        height: Option<i32>,
    },
    /// Read one selection per stdin line and print the updated labels.
    Interactive {
        /// Re-render this PNG after every accepted selection.
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Emit one JSON object per update instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Export the full series as CSV.
    Series {
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Itemized venue comparison (rooms, meals, coffee, meeting room).
    Compare {
        /// Group sizes to compare.
        #[arg(long, value_delimiter = ',', default_values_t = [30u32, 40, 50])]
        sizes: Vec<u32>,
        /// Only this venue key (e.g. el-hierro).
        #[arg(long)]
        venue: Option<String>,
    },
}
