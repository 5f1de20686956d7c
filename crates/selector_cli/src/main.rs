//! # selector
//!
//! Renders JSON selector documents as command selector strings, one per
//! line.
//!
//! ```text
//! $ echo '{"target":"a","arguments":{"tag":{"vip":true},"limit":1}}' | selector
//! @a[tag=vip,limit=1]
//! ```

mod config;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::CliConfig;
use selector_format::selectors_from_json_str;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = CliConfig::parse();

    let input = config.read_input()?;
    let selectors = selectors_from_json_str(&input).context("failed to load selector documents")?;
    info!(count = selectors.len(), source = %config.source_name(), "selectors loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, selector) in selectors.iter().enumerate() {
        if config.stream {
            debug!(index, "streaming selector");
            selector
                .write_to(&mut out)
                .with_context(|| format!("failed to format selector #{index}"))?;
        } else {
            let line = selector
                .format()
                .with_context(|| format!("failed to format selector #{index}"))?;
            out.write_all(line.as_bytes())?;
        }
        out.write_all(b"\n")?;
    }
    out.flush()?;

    Ok(())
}
