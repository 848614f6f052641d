// File: src/python_bind.rs
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::config::RenderConfig;
use crate::entry::{run_relative_field, run_well_geometry};
use crate::geometry::{CasingShoeRecord, GeometryResponse, PathSegmentRecord};
use crate::pressure::SimulationKind;

#[pyclass]
#[derive(Debug, Clone)]
pub struct PyPathSegment {
    #[pyo3(get)]
    pub posx: f64,
    #[pyo3(get)]
    pub posy: f64,
    #[pyo3(get)]
    pub posz: f64,
    #[pyo3(get)]
    pub rotx: f64,
    #[pyo3(get)]
    pub roty: f64,
    #[pyo3(get)]
    pub rotz: f64,
    #[pyo3(get)]
    pub length: f64,
    #[pyo3(get)]
    pub radius: f64,
    #[pyo3(get)]
    pub texture_coordinate: f64,
}

#[pymethods]
impl PyPathSegment {
    fn __repr__(&self) -> String {
        format!(
            "PathSegment(pos=({:.2}, {:.2}, {:.2}), length={:.2}, radius={:.3}, tex={:.3})",
            self.posx, self.posy, self.posz, self.length, self.radius, self.texture_coordinate
        )
    }
}

impl From<&PathSegmentRecord> for PyPathSegment {
    fn from(segment: &PathSegmentRecord) -> Self {
        Self {
            posx: segment.posx,
            posy: segment.posy,
            posz: segment.posz,
            rotx: segment.rotx,
            roty: segment.roty,
            rotz: segment.rotz,
            length: segment.length,
            radius: segment.radius,
            texture_coordinate: segment.texture_coordinate,
        }
    }
}

#[pyclass]
#[derive(Debug, Clone)]
pub struct PyCasingShoe {
    #[pyo3(get)]
    pub label: String,
    #[pyo3(get)]
    pub posx: f64,
    #[pyo3(get)]
    pub posy: f64,
    #[pyo3(get)]
    pub posz: f64,
    #[pyo3(get)]
    pub rotx: f64,
    #[pyo3(get)]
    pub roty: f64,
    #[pyo3(get)]
    pub rotz: f64,
    #[pyo3(get)]
    pub radius: f64,
}

#[pymethods]
impl PyCasingShoe {
    fn __repr__(&self) -> String {
        format!(
            "CasingShoe('{}', pos=({:.2}, {:.2}, {:.2}), radius={:.3})",
            self.label, self.posx, self.posy, self.posz, self.radius
        )
    }
}

impl From<&CasingShoeRecord> for PyCasingShoe {
    fn from(shoe: &CasingShoeRecord) -> Self {
        Self {
            label: shoe.label.clone(),
            posx: shoe.posx,
            posy: shoe.posy,
            posz: shoe.posz,
            rotx: shoe.rotx,
            roty: shoe.roty,
            rotz: shoe.rotz,
            radius: shoe.radius,
        }
    }
}

#[pyclass]
#[derive(Debug, Clone)]
pub struct PyGeometryResponse {
    /// (min, max, step)
    #[pyo3(get)]
    pub time: (f64, f64, f64),
    #[pyo3(get)]
    pub casing_shoes: Vec<PyCasingShoe>,
    #[pyo3(get)]
    pub path_segments: Vec<PyPathSegment>,
    json: String,
}

#[pymethods]
impl PyGeometryResponse {
    /// The response as served to the web client.
    fn to_json(&self) -> String {
        self.json.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "GeometryResponse(time=({:.2}, {:.2}, {:.2}), casing_shoes={}, path_segments={})",
            self.time.0,
            self.time.1,
            self.time.2,
            self.casing_shoes.len(),
            self.path_segments.len()
        )
    }
}

impl TryFrom<&GeometryResponse> for PyGeometryResponse {
    type Error = PyErr;

    fn try_from(response: &GeometryResponse) -> PyResult<Self> {
        let json = serde_json::to_string(response)
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
        Ok(Self {
            time: (response.time.min, response.time.max, response.time.step),
            casing_shoes: response.casing_shoes.iter().map(Into::into).collect(),
            path_segments: response.path_segments.iter().map(Into::into).collect(),
            json,
        })
    }
}

fn render_config(radius_scaling: Option<f64>) -> PyResult<RenderConfig> {
    let mut config = RenderConfig::from_env().map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
    if let Some(scaling) = radius_scaling {
        config.radius_scaling = scaling;
    }
    Ok(config)
}

/// Drawable well geometry for a simulation directory.
#[pyfunction]
#[pyo3(signature = (simulation_dir, radius_scaling = None))]
fn well_geometry_py(
    simulation_dir: &str,
    radius_scaling: Option<f64>,
) -> PyResult<PyGeometryResponse> {
    let config = render_config(radius_scaling)?;
    let response = run_well_geometry(simulation_dir, &config)
        .map_err(|e| PyRuntimeError::new_err(format!("{:#}", e)))?;
    PyGeometryResponse::try_from(&response)
}

/// Gravity corrected values of one simulator output as
/// `(time, depths, values)`, `values` indexed `[time][depth]`.
#[pyfunction]
#[pyo3(signature = (simulation_dir, kind = "pipepressure"))]
fn relative_field_py(
    simulation_dir: &str,
    kind: &str,
) -> PyResult<(Vec<f64>, Vec<f64>, Vec<Vec<f64>>)> {
    let kind = SimulationKind::from_name(kind)
        .ok_or_else(|| PyValueError::new_err(format!("unknown simulation kind '{}'", kind)))?;
    let config = render_config(None)?;
    let table = run_relative_field(simulation_dir, kind, &config)
        .map_err(|e| PyRuntimeError::new_err(format!("{:#}", e)))?;
    Ok((table.time, table.depths, table.values))
}

/// This is the module importable from Python:
///
/// ```python
/// import wellvizrs as wv
/// geometry = wv.well_geometry_py("data/well-a/connection-1", radius_scaling=50.0)
/// time, depths, values = wv.relative_field_py("data/well-a/connection-1", "annuluspressure")
/// ```
#[pymodule]
fn wellvizrs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(well_geometry_py, m)?)?;
    m.add_function(wrap_pyfunction!(relative_field_py, m)?)?;

    m.add_class::<PyPathSegment>()?;
    m.add_class::<PyCasingShoe>()?;
    m.add_class::<PyGeometryResponse>()?;
    Ok(())
}
