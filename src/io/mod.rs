pub mod input;
pub mod output;

use anyhow::Context;
use input::{read_mud_density, GeometryDefinition, SimulationTable, SurveyStation};
use std::path::{Path, PathBuf};

use crate::pressure::SimulationKind;

/// The files one simulation run leaves in its directory.
#[derive(Debug, Clone)]
pub struct SimulationDir {
    dir: PathBuf,
}

impl SimulationDir {
    pub const WELL_PATH: &'static str = "well_path.csv";
    pub const GEOMETRY_DEF: &'static str = "geometrydef.txt";
    pub const FLUID_DEF: &'static str = "fluiddef.txt";

    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    pub fn well_path(&self) -> anyhow::Result<Vec<SurveyStation>> {
        let path = self.path(Self::WELL_PATH);
        SurveyStation::read_well_path(&path)
            .with_context(|| format!("Failed to load well path from {}", path.display()))
    }

    pub fn geometry_definition(&self) -> anyhow::Result<GeometryDefinition> {
        let path = self.path(Self::GEOMETRY_DEF);
        GeometryDefinition::read_geometrydef(&path)
            .with_context(|| format!("Failed to load geometry from {}", path.display()))
    }

    pub fn mud_density(&self) -> anyhow::Result<f64> {
        let path = self.path(Self::FLUID_DEF);
        read_mud_density(&path)
            .with_context(|| format!("Failed to load mud density from {}", path.display()))
    }

    pub fn simulation(&self, kind: SimulationKind) -> anyhow::Result<SimulationTable> {
        let path = self.path(&kind.file_name());
        SimulationTable::read_csv(&path)
            .with_context(|| format!("Failed to load {} from {}", kind, path.display()))
    }
}
