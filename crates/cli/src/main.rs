mod config;

use anyhow::{Context, Result};
use optsift::{Args, Snapshot};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::OutputFormat;

fn main() -> Result<()> {
    init_tracing();
    let format = OutputFormat::from_env()?;

    let args = Args::from_env().context("failed to tokenize command line")?;
    tracing::debug!(?format, "rendering argument stores");

    print!("{}", render(&args.snapshot(), format)?);
    Ok(())
}

fn render(snapshot: &Snapshot, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(snapshot.to_string()),
        OutputFormat::Json => {
            let mut out =
                serde_json::to_string_pretty(snapshot).context("failed to encode snapshot")?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
