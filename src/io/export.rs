//! CSV export for computed simulation series.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::engine::SimulationOutputs;
use crate::sim::types::SLOTS;

/// Column header for the series CSV export.
const HEADER: &str = "slot,day_time,night_time,panel_w,charging_pct,\
                      consumption_w,discharge_pct,charge_pct";

/// Exports the computed series to a CSV file at the given path.
///
/// Writes a header row followed by one row per hourly slot. Produces
/// deterministic output for identical inputs.
///
/// # Arguments
///
/// * `outputs` - Complete simulation outputs
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(outputs: &SimulationOutputs, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(outputs, buf)
}

/// Writes the computed series as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(outputs: &SimulationOutputs, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(',').map(str::trim))?;

    // One row per hourly slot
    for slot in 0..SLOTS {
        wtr.write_record(&[
            slot.to_string(),
            outputs.panel_output_w.labels[slot].to_string(),
            outputs.consumption_w.labels[slot].to_string(),
            format!("{:.4}", outputs.panel_output_w.values[slot]),
            format!("{:.4}", outputs.charging_level_pct.values[slot]),
            format!("{:.4}", outputs.consumption_w.values[slot]),
            format!("{:.4}", outputs.discharge_level_pct.values[slot]),
            format!("{:.4}", outputs.charge_level_pct.values[slot]),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
