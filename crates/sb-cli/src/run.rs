//! The conversion command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use sb_core::{ConvertConfig, convert};

/// Runs the conversion and returns the path that was written.
pub fn run(config: &ConvertConfig) -> Result<PathBuf> {
    tracing::debug!(?config, "starting conversion");

    let conversion = convert(config).context("failed to build events table")?;

    tracing::info!(
        path = %conversion.path.display(),
        rows = conversion.table.len(),
        "wrote BIDS events table"
    );
    Ok(conversion.path)
}
