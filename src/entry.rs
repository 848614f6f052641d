use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::config::RenderConfig;
use crate::geometry::{assemble_geometry_response, GeometryResponse};
use crate::io::input::SimulationTable;
use crate::io::SimulationDir;
use crate::pressure::{relative_field, SimulationKind};

/// Builds the drawable well for one simulation directory.
///
/// The texture axis and time range come from the pipe pressure output.
pub fn run_well_geometry<P: AsRef<Path>>(
    simulation_dir: P,
    config: &RenderConfig,
) -> Result<GeometryResponse> {
    let dir = SimulationDir::new(&simulation_dir);
    let survey = dir.well_path()?;
    let geometry = dir.geometry_definition()?;
    let simulation = dir.simulation(SimulationKind::PipePressure)?;

    let response = assemble_geometry_response(
        &survey,
        &geometry,
        geometry.terminal_depth(),
        &simulation,
        config.radius_scaling,
    )
    .with_context(|| {
        format!(
            "Failed to assemble geometry for {}",
            simulation_dir.as_ref().display()
        )
    })?;

    info!(
        dir = %simulation_dir.as_ref().display(),
        segments = response.path_segments.len(),
        "well geometry ready"
    );
    Ok(response)
}

/// Gravity corrected heatmap values of one simulator output.
pub fn run_relative_field<P: AsRef<Path>>(
    simulation_dir: P,
    kind: SimulationKind,
    config: &RenderConfig,
) -> Result<SimulationTable> {
    let dir = SimulationDir::new(&simulation_dir);
    let survey = dir.well_path()?;
    let simulation = dir.simulation(kind)?;

    let mud_density = match kind {
        SimulationKind::PipeStress => 0.0,
        _ => dir.mud_density()?,
    };
    let gradient = kind.gradient(mud_density, config);

    let relative = relative_field(&survey, &simulation, gradient).with_context(|| {
        format!(
            "Failed to project {} for {}",
            kind,
            simulation_dir.as_ref().display()
        )
    })?;

    info!(
        dir = %simulation_dir.as_ref().display(),
        kind = %kind,
        gradient,
        "relative field ready"
    );
    Ok(relative)
}
