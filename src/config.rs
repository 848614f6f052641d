use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Inches to meters.
pub const METERS_PER_INCH: f64 = 0.0254;

/// Gravitational acceleration in m/s^2.
pub const GRAVITY: f64 = 9.81;

/// Pascal to bar.
pub const BAR_PER_PASCAL: f64 = 1e-5;

/// Empirical stress change per meter of true vertical depth used for the
/// pipe stress heatmap.
pub const PIPE_STRESS_GRADIENT: f64 = -0.75;

/// Radius scaling applied by the geometry endpoint when the caller gives none.
/// Real bore radii are tiny compared to the well length, so they are blown up
/// to stay visible.
pub const DEFAULT_RADIUS_SCALING: f64 = 100.0;

/// Environment variable naming a TOML file with a [`RenderConfig`].
pub const CONFIG_ENV_VAR: &str = "WELLVIZ_CONFIG";

/// Converts an inner diameter in inches into a radius in meters.
pub fn inches_to_radius(diameter_inches: f64) -> f64 {
    0.5 * METERS_PER_INCH * diameter_inches
}

/// Hydrostatic pressure gradient (bar per meter) of a fluid column with the
/// given density in kg/m^3.
pub fn pressure_gradient(mud_density: f64) -> f64 {
    mud_density * GRAVITY * BAR_PER_PASCAL
}

/// Tunables of the rendering pipelines.
///
/// Every field has a default, so an empty TOML file (or none at all) yields
/// the served behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_radius_scaling")]
    pub radius_scaling: f64,

    #[serde(default = "default_stress_gradient")]
    pub stress_gradient: f64,
}

fn default_radius_scaling() -> f64 {
    DEFAULT_RADIUS_SCALING
}

fn default_stress_gradient() -> f64 {
    PIPE_STRESS_GRADIENT
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            radius_scaling: DEFAULT_RADIUS_SCALING,
            stress_gradient: PIPE_STRESS_GRADIENT,
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Failed to parse render config")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read render config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid render config {}", path.display()))?;
        info!(path = %path.display(), "loaded render config");
        Ok(config)
    }

    /// Loads the file named by `WELLVIZ_CONFIG`, or the defaults when the
    /// variable is unset.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::load(path),
            Err(_) => {
                debug!("{} not set, using default render config", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }
}
