//! Turns directional well surveys and simulator output into things a web
//! client can draw: a chain of oriented cylinders with casing shoe markers,
//! and gravity corrected pressure/stress fields for the heatmap texture.
//!
//! ```no_run
//! use wellvizrs::{run_well_geometry, RenderConfig};
//!
//! let geometry = run_well_geometry("data/well-a/connection-1", &RenderConfig::default())?;
//! println!("{}", serde_json::to_string(&geometry)?);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod geometry;
pub mod io;
pub mod pressure;
pub mod utils;

#[cfg(feature = "python")]
mod python_bind;

pub use config::RenderConfig;
pub use entry::{run_relative_field, run_well_geometry};
pub use error::WellGeometryError;
pub use geometry::{
    assemble_geometry_response, build_path_segments, center_geometry, locate_casing_shoes,
    resolve_geometry_zones, GeometryResponse,
};
pub use io::input::{GeometryDefinition, SimulationTable, SurveyStation};
pub use io::SimulationDir;
pub use pressure::{relative_field, SimulationKind};
