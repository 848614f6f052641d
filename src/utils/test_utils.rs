use rand::Rng;

use crate::io::input::{GeometryDefinition, SimulationTable, SurveyStation};

/// Stations along a straight bore with constant inclination and azimuth.
pub fn straight_survey(mds: &[f64], inclination: f64, azimuth: f64) -> Vec<SurveyStation> {
    let cos_inc = inclination.to_radians().cos();
    mds.iter()
        .map(|&md| SurveyStation::new(md, inclination, azimuth, md * cos_inc))
        .collect()
}

/// A survey starting at the surface with random step lengths and angles.
pub fn random_survey<R: Rng>(rng: &mut R, n: usize) -> Vec<SurveyStation> {
    let mut md = 0.0;
    let mut tvd = 0.0;
    let mut stations = vec![SurveyStation::new(0.0, 0.0, 0.0, 0.0)];
    for _ in 1..n {
        let step = rng.random_range(10.0..80.0);
        let inclination: f64 = rng.random_range(0.0..95.0);
        let azimuth = rng.random_range(0.0..360.0);
        md += step;
        tvd += step * inclination.to_radians().cos();
        stations.push(SurveyStation::new(md, inclination, azimuth, tvd));
    }
    stations
}

/// Geometry with typical diameters and the given depths.
pub fn geometry_definition(
    riser_end: f64,
    cased_section_end: f64,
    liner_length: f64,
    total_well_length: Option<f64>,
) -> GeometryDefinition {
    GeometryDefinition {
        open_hole_diameter: 8.5,
        riser_inner_diameter: 19.5,
        riser_end,
        casing_inner_diameter: 9.625,
        cased_section_end,
        liner_inner_diameter: 8.88,
        liner_length,
        pipe_length: 4597.0,
        heavy_weight_pipe_length: 100.0,
        bha_length: 42.0,
        total_well_length,
    }
}

/// Table whose cell `(row, col)` holds `value(row, col)`.
pub fn simulation_table(
    time: &[f64],
    depths: &[f64],
    value: impl Fn(usize, usize) -> f64,
) -> SimulationTable {
    let values = (0..time.len())
        .map(|row| (0..depths.len()).map(|col| value(row, col)).collect())
        .collect();
    SimulationTable::new(time.to_vec(), depths.to_vec(), values)
        .expect("test table is rectangular")
}
