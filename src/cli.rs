use crate::app::dto::EdgeBatch;
use crate::app::service::EdgeService;
use anyhow::{Context as _, Result};
use serde::Serialize;
use std::path::Path;

/// Read an edge batch from a JSON file.
pub fn load_batch(json_path: &Path) -> Result<EdgeBatch> {
    let json_content = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read batch file: {}", json_path.display()))?;
    serde_json::from_str(&json_content).context("Failed to parse edge batch JSON")
}

/// Print the resolved selector configuration and strategy.
pub fn display_check(service: &EdgeService) -> Result<()> {
    let report = service.check();
    println!("Selector configuration:");
    println!("  use_native:    {}", report.use_native);
    println!("  debug_enabled: {}", report.debug_enabled);
    println!("  strategy:      {}", report.strategy);
    Ok(())
}

/// Connect every pair in the batch file and print the JSON report.
pub fn connect_batch(service: &EdgeService, json_path: &Path, pretty: bool) -> Result<()> {
    let batch = load_batch(json_path)?;
    let report = service.connect(&batch)?;
    print_json(&report, pretty)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", output);
    Ok(())
}
