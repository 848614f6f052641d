use anyhow::{anyhow, bail, Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::WellGeometryError;

/// One row of a directional survey.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurveyStation {
    /// Measured depth in meters.
    pub md: f64,
    /// Degrees from vertical.
    pub inclination: f64,
    /// Degrees from north.
    pub azimuth: f64,
    /// True vertical depth in meters.
    pub tvd: f64,
}

impl SurveyStation {
    pub fn new(md: f64, inclination: f64, azimuth: f64, tvd: f64) -> Self {
        Self {
            md,
            inclination,
            azimuth,
            tvd,
        }
    }

    /// Reads a `;`-separated well path export.
    ///
    /// Columns are looked up by header (`Md`, `Inc`, `Azi` and `Tvd` or
    /// `TVD(m)`), anything else in the file is ignored.
    pub fn read_well_path<P: AsRef<Path>>(path: P) -> Result<Vec<SurveyStation>> {
        let path = path.as_ref();
        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .trim(Trim::All)
            .from_path(path)
            .with_context(|| format!("failed to open well path {}", path.display()))?;

        let headers = reader.headers()?.clone();
        let md_idx = find_column(&headers, &["Md"])?;
        let inc_idx = find_column(&headers, &["Inc"])?;
        let azi_idx = find_column(&headers, &["Azi"])?;
        let tvd_idx = find_column(&headers, &["Tvd", "TVD(m)"])?;

        let mut stations = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let record =
                result.with_context(|| format!("failed to read row {} of well path", row + 1))?;
            let field = |idx: usize| -> Result<f64> {
                let raw = record
                    .get(idx)
                    .ok_or_else(|| anyhow!("row {} has no column {}", row + 1, idx))?;
                raw.parse::<f64>()
                    .with_context(|| format!("row {}: '{}' is not a number", row + 1, raw))
            };
            stations.push(SurveyStation {
                md: field(md_idx)?,
                inclination: field(inc_idx)?,
                azimuth: field(azi_idx)?,
                tvd: field(tvd_idx)?,
            });
        }

        if stations.is_empty() {
            bail!("well path {} has no stations", path.display());
        }
        Ok(stations)
    }
}

fn find_column(headers: &StringRecord, names: &[&str]) -> Result<usize> {
    headers
        .iter()
        .position(|h| names.contains(&h))
        .ok_or_else(|| anyhow!("missing column {:?} in header {:?}", names, headers))
}

/// The radial layout of the well as exported by the simulator.
///
/// Diameters are inner diameters in inches, depths and lengths in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryDefinition {
    pub open_hole_diameter: f64,
    pub riser_inner_diameter: f64,
    /// Measured depth where the riser ends.
    pub riser_end: f64,
    pub casing_inner_diameter: f64,
    /// Measured depth where the cased section ends.
    pub cased_section_end: f64,
    pub liner_inner_diameter: f64,
    pub liner_length: f64,
    pub pipe_length: f64,
    pub heavy_weight_pipe_length: f64,
    pub bha_length: f64,
    /// Total well length, when the export carries it.
    pub total_well_length: Option<f64>,
}

impl GeometryDefinition {
    /// Minimum number of leading values needed to build a definition.
    pub const REQUIRED_FIELDS: usize = 10;

    /// Builds a definition from the positional values of a geometry export.
    /// Values past the total well length (pipe dimensions, material
    /// properties, ...) are ignored.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if values.len() < Self::REQUIRED_FIELDS {
            bail!(
                "geometry definition needs at least {} values, got {}",
                Self::REQUIRED_FIELDS,
                values.len()
            );
        }
        Ok(Self {
            open_hole_diameter: values[0],
            riser_inner_diameter: values[1],
            riser_end: values[2],
            casing_inner_diameter: values[3],
            cased_section_end: values[4],
            liner_inner_diameter: values[5],
            liner_length: values[6],
            pipe_length: values[7],
            heavy_weight_pipe_length: values[8],
            bha_length: values[9],
            total_well_length: values.get(10).copied(),
        })
    }

    /// Measured depth where the open hole ends: the explicit total well
    /// length if present, otherwise the length of the drill string.
    pub fn terminal_depth(&self) -> f64 {
        self.total_well_length.unwrap_or_else(|| self.string_length())
    }

    pub fn string_length(&self) -> f64 {
        self.pipe_length + self.heavy_weight_pipe_length + self.bha_length
    }

    pub fn read_geometrydef<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let values = read_value_lines(path)?;
        Self::from_values(&values)
            .with_context(|| format!("invalid geometry definition {}", path.display()))
    }
}

/// Reads the mud density (kg/m^3) from the first line of a fluid definition.
pub fn read_mud_density<P: AsRef<Path>>(path: P) -> Result<f64> {
    let path = path.as_ref();
    read_value_lines(path)?
        .first()
        .copied()
        .ok_or_else(|| anyhow!("fluid definition {} is empty", path.display()))
}

/// Parses `value # description` lines, skipping blank ones.
fn read_value_lines(path: &Path) -> Result<Vec<f64>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        let value = line.split('#').next().unwrap_or("").trim();
        if value.is_empty() {
            continue;
        }
        let parsed = value.parse::<f64>().with_context(|| {
            format!(
                "{} line {}: '{}' is not a number",
                path.display(),
                line_no + 1,
                value
            )
        })?;
        values.push(parsed);
    }
    Ok(values)
}

/// Time-indexed simulation output. Rows are time samples, columns are keyed
/// by measured depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationTable {
    pub time: Vec<f64>,
    pub depths: Vec<f64>,
    pub values: Vec<Vec<f64>>,
}

impl SimulationTable {
    pub fn new(
        time: Vec<f64>,
        depths: Vec<f64>,
        values: Vec<Vec<f64>>,
    ) -> Result<Self, WellGeometryError> {
        if values.len() != time.len() {
            return Err(WellGeometryError::InvalidTable(format!(
                "{} time samples but {} rows",
                time.len(),
                values.len()
            )));
        }
        if let Some(row) = values.iter().position(|r| r.len() != depths.len()) {
            return Err(WellGeometryError::InvalidTable(format!(
                "row {} has {} values, expected {}",
                row,
                values[row].len(),
                depths.len()
            )));
        }
        Ok(Self {
            time,
            depths,
            values,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.time.len()
    }

    pub fn n_cols(&self) -> usize {
        self.depths.len()
    }

    /// Reads a simulator CSV export: first column is the time index, the
    /// remaining headers are measured depths.
    pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_path(path)
            .with_context(|| format!("failed to open simulation table {}", path.display()))?;

        let depths = reader
            .headers()?
            .iter()
            .skip(1)
            .map(|h| {
                h.parse::<f64>()
                    .with_context(|| format!("column header '{}' is not a depth", h))
            })
            .collect::<Result<Vec<f64>>>()?;

        let mut time = Vec::new();
        let mut values = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let record = result
                .with_context(|| format!("failed to read row {} of {}", row + 1, path.display()))?;
            let mut fields = record.iter().map(|v| {
                v.parse::<f64>()
                    .with_context(|| format!("row {}: '{}' is not a number", row + 1, v))
            });
            let t = fields
                .next()
                .ok_or_else(|| anyhow!("row {} is empty", row + 1))??;
            time.push(t);
            values.push(fields.collect::<Result<Vec<f64>>>()?);
        }

        Ok(Self::new(time, depths, values)?)
    }
}

#[cfg(test)]
mod input_tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_well_path_by_header() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "well_path.csv",
            "Md;Inc;Azi;TVD(m);Dls\n0;0;0;0;0\n100; 10 ;45;99.5;1\n200;20;90;196.0;1\n",
        );

        let stations = SurveyStation::read_well_path(&path).unwrap();
        assert_eq!(stations.len(), 3);
        assert_eq!(stations[1], SurveyStation::new(100.0, 10.0, 45.0, 99.5));
        assert_eq!(stations[2].tvd, 196.0);
    }

    #[test]
    fn test_read_well_path_missing_column() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "well_path.csv", "Md;Inc;Azi\n0;0;0\n");
        assert!(SurveyStation::read_well_path(&path).is_err());
    }

    #[test]
    fn test_read_geometrydef_with_comments() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "geometrydef.txt",
            "8.5 # open hole\n19.5 # riser id\n373.2 # riser length\n9.625\n1930 # casing\n\
             8.88\n0.0 # liner\n4597\n100\n42\n5192 # total\n4.276 # pipe id\n",
        );

        let def = GeometryDefinition::read_geometrydef(&path).unwrap();
        assert_eq!(def.open_hole_diameter, 8.5);
        assert_eq!(def.riser_end, 373.2);
        assert_eq!(def.liner_length, 0.0);
        assert_eq!(def.total_well_length, Some(5192.0));
        assert_eq!(def.terminal_depth(), 5192.0);
    }

    #[test]
    fn test_terminal_depth_falls_back_to_string_length() {
        let values = [8.5, 19.5, 373.2, 9.625, 1930.0, 8.88, 0.0, 4597.0, 100.0, 42.0];
        let def = GeometryDefinition::from_values(&values).unwrap();
        assert_eq!(def.total_well_length, None);
        assert_relative_eq!(def.terminal_depth(), 4739.0);
    }

    #[test]
    fn test_geometrydef_too_short() {
        assert!(GeometryDefinition::from_values(&[1.0; 9]).is_err());
    }

    #[test]
    fn test_read_mud_density() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "fluiddef.txt", "1250 # density kg/m3\n0.02 # viscosity\n");
        assert_eq!(read_mud_density(&path).unwrap(), 1250.0);
    }

    #[test]
    fn test_read_simulation_table() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "pipepressure.csv",
            "time, 0.0, 10.5, 21\n0.0,1,2,3\n0.5,4,5,6\n",
        );

        let table = SimulationTable::read_csv(&path).unwrap();
        assert_eq!(table.depths, vec![0.0, 10.5, 21.0]);
        assert_eq!(table.time, vec![0.0, 0.5]);
        assert_eq!(table.values[1], vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_ragged_table_is_rejected() {
        let values = vec![vec![1.0, 2.0], vec![3.0]];
        let result = SimulationTable::new(vec![0.0, 1.0], vec![0.0, 1.0], values);
        assert!(matches!(result, Err(WellGeometryError::InvalidTable(_))));
    }
}
