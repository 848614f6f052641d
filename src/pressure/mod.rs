use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::config::{pressure_gradient, RenderConfig};
use crate::error::{Result, WellGeometryError};
use crate::io::input::{SimulationTable, SurveyStation};
use crate::utils::interpolation::LinearInterpolator;

/// The simulator outputs that can be rendered as a heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationKind {
    PipePressure,
    AnnulusPressure,
    PipeStress,
}

impl SimulationKind {
    pub const ALL: [SimulationKind; 3] = [
        SimulationKind::PipePressure,
        SimulationKind::AnnulusPressure,
        SimulationKind::PipeStress,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SimulationKind::PipePressure => "pipepressure",
            SimulationKind::AnnulusPressure => "annuluspressure",
            SimulationKind::PipeStress => "pipestress",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Change per meter of true vertical depth. Pressures follow the mud
    /// column (bar per meter); stress uses the configured constant.
    pub fn gradient(&self, mud_density: f64, config: &RenderConfig) -> f64 {
        match self {
            SimulationKind::PipePressure | SimulationKind::AnnulusPressure => {
                pressure_gradient(mud_density)
            }
            SimulationKind::PipeStress => config.stress_gradient,
        }
    }
}

impl fmt::Display for SimulationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `gradient * tvd(md)` for each measured depth, with tvd interpolated
/// linearly from the survey. Depths outside the survey are rejected.
pub fn hydrostatic_terms(
    survey: &[SurveyStation],
    depths: &[f64],
    gradient: f64,
) -> Result<Vec<f64>> {
    let vertical_depth = LinearInterpolator::new(
        survey.iter().map(|s| s.md).collect(),
        survey.iter().map(|s| s.tvd).collect(),
    )
    .map_err(|e| WellGeometryError::InvalidSurvey(e.to_string()))?;

    depths
        .iter()
        .map(|&md| {
            vertical_depth
                .eval(md)
                .map(|tvd| gradient * tvd)
                .map_err(|e| WellGeometryError::InvalidSurvey(e.to_string()))
        })
        .collect()
}

/// Removes the depth dependent baseline from every column, leaving the
/// variation that is interesting to look at. Shape and time index are kept.
pub fn relative_field(
    survey: &[SurveyStation],
    simulation: &SimulationTable,
    gradient: f64,
) -> Result<SimulationTable> {
    let terms = hydrostatic_terms(survey, &simulation.depths, gradient)?;
    debug!(
        rows = simulation.n_rows(),
        cols = simulation.n_cols(),
        gradient,
        "projecting relative field"
    );

    let values = simulation
        .values
        .iter()
        .map(|row| row.iter().zip(&terms).map(|(value, term)| value - term).collect())
        .collect();

    SimulationTable::new(simulation.time.clone(), simulation.depths.clone(), values)
}
