// File: crates/price-curve/src/main.rs
// Summary: Entry point; sets up logging, loads config and dispatches subcommands.

use anyhow::Result;
use clap::Parser;
use price_curve::commands::{self, RenderArgs};
use price_curve::{build_adapter, load_config, Cli, Command};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for CSV/JSON output.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut adapter = build_adapter(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Render { size, out: path, theme, width, height } => {
            let args = RenderArgs {
                size,
                path,
                theme: theme.unwrap_or_else(|| config.chart.theme.clone()),
                width: width.unwrap_or(config.chart.width),
                height: height.unwrap_or(config.chart.height),
            };
            commands::render(&mut adapter, &args, &mut out)
        }
        Command::Interactive { out: path, json } => {
            let opts = commands::render_options(&config.chart.theme, config.chart.width, config.chart.height);
            let stdin = std::io::stdin();
            commands::interactive(&mut adapter, stdin.lock(), &mut out, path.as_deref(), &opts, json)
        }
        Command::Series { out: path } => match path {
            Some(p) => {
                let file = std::fs::File::create(&p)?;
                commands::export_series(&adapter, file)?;
                tracing::info!(path = %p.display(), "wrote series");
                Ok(())
            }
            None => commands::export_series(&adapter, &mut out),
        },
        Command::Compare { sizes, venue } => {
            commands::compare(&config, &sizes, venue.as_deref(), &mut out)
        }
    }
}
