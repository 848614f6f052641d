use anyhow::Context;
use csv::Writer;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::geometry::GeometryResponse;
use crate::io::input::SimulationTable;

/// Writes a table in the layout the simulator exports: a `time` column
/// followed by one column per measured depth.
pub fn write_simulation_table_csv<P: AsRef<Path>>(
    path: P,
    table: &SimulationTable,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut wtr = Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let header = std::iter::once("time".to_string())
        .chain(table.depths.iter().map(|d| d.to_string()));
    wtr.write_record(header)?;

    for (t, row) in table.time.iter().zip(&table.values) {
        let record = std::iter::once(t.to_string()).chain(row.iter().map(|v| v.to_string()));
        wtr.write_record(record)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_geometry_json<P: AsRef<Path>>(
    path: P,
    response: &GeometryResponse,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), response)
        .with_context(|| format!("Failed to write geometry to {}", path.display()))?;
    Ok(())
}
