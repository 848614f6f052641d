use serde::{Deserialize, Serialize};
use tracing::info;

use super::casing_shoes::{locate_casing_shoes, CasingShoe};
use super::centroid::center_geometry;
use super::segments::{build_path_segments, PathSegment};
use super::zones::resolve_geometry_zones;
use crate::error::{Result, WellGeometryError};
use crate::io::input::{GeometryDefinition, SimulationTable, SurveyStation};

/// Time range covered by the simulation. Samples are assumed evenly spaced,
/// the step is taken from the first two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeDomain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl TimeDomain {
    pub fn from_time_index(time: &[f64]) -> Result<Self> {
        match time {
            [first, second, ..] => Ok(Self {
                min: *first,
                max: time[time.len() - 1],
                step: second - first,
            }),
            _ => Err(WellGeometryError::InvalidTable(format!(
                "need at least 2 time samples, got {}",
                time.len()
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasingShoeRecord {
    pub label: String,
    pub posx: f64,
    pub posy: f64,
    pub posz: f64,
    pub rotx: f64,
    pub roty: f64,
    pub rotz: f64,
    pub radius: f64,
}

impl From<&CasingShoe> for CasingShoeRecord {
    fn from(shoe: &CasingShoe) -> Self {
        Self {
            label: shoe.label.clone(),
            posx: shoe.position.x,
            posy: shoe.position.y,
            posz: shoe.position.z,
            rotx: shoe.rotation.rotx,
            roty: shoe.rotation.roty,
            rotz: shoe.rotation.rotz,
            radius: shoe.radius,
        }
    }
}

/// What the client needs to draw one cylinder; the displacement vector is
/// left behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegmentRecord {
    pub posx: f64,
    pub posy: f64,
    pub posz: f64,
    pub rotx: f64,
    pub roty: f64,
    pub rotz: f64,
    pub length: f64,
    pub radius: f64,
    pub texture_coordinate: f64,
}

impl From<&PathSegment> for PathSegmentRecord {
    fn from(segment: &PathSegment) -> Self {
        Self {
            posx: segment.position.x,
            posy: segment.position.y,
            posz: segment.position.z,
            rotx: segment.rotation.rotx,
            roty: segment.rotation.roty,
            rotz: segment.rotation.rotz,
            length: segment.length,
            radius: segment.radius,
            texture_coordinate: segment.texture_coordinate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryResponse {
    pub time: TimeDomain,
    pub casing_shoes: Vec<CasingShoeRecord>,
    pub path_segments: Vec<PathSegmentRecord>,
}

/// Measured depths may repeat (those segments have no length and are not
/// drawn) but must never go back up the well.
fn check_survey_order(survey: &[SurveyStation]) -> Result<()> {
    // written as !(a <= b) so NaN depths are rejected too
    match survey.windows(2).position(|w| !(w[0].md <= w[1].md)) {
        Some(i) => Err(WellGeometryError::InvalidSurvey(format!(
            "measured depth decreases from {} to {} at station {}",
            survey[i].md,
            survey[i + 1].md,
            i + 1
        ))),
        None => Ok(()),
    }
}

/// Zones, segments, shoes and centering in one go.
///
/// `max_measured_depth` closes the open hole, `radius_scaling` enlarges
/// every radius. `simulation` only contributes its time index and its depth
/// columns (the texture axis).
pub fn assemble_geometry_response(
    survey: &[SurveyStation],
    geometry: &GeometryDefinition,
    max_measured_depth: f64,
    simulation: &SimulationTable,
    radius_scaling: f64,
) -> Result<GeometryResponse> {
    check_survey_order(survey)?;
    let time = TimeDomain::from_time_index(&simulation.time)?;

    let zones = resolve_geometry_zones(geometry, max_measured_depth);
    if zones.is_empty() {
        return Err(WellGeometryError::DegenerateGeometry(format!(
            "no zone has positive length (terminal depth {})",
            max_measured_depth
        )));
    }

    let segments = build_path_segments(survey, &zones, &simulation.depths, radius_scaling)?;
    let shoes = locate_casing_shoes(&segments, &zones)?;
    let centered = center_geometry(&segments, &shoes)?;

    info!(
        zones = zones.len(),
        stations = survey.len(),
        visible = centered.segments.len(),
        "assembled well geometry"
    );

    Ok(GeometryResponse {
        time,
        casing_shoes: centered.casing_shoes.iter().map(CasingShoeRecord::from).collect(),
        path_segments: centered.segments.iter().map(PathSegmentRecord::from).collect(),
    })
}

#[cfg(test)]
mod response_tests {
    use super::*;
    use crate::utils::test_utils::{geometry_definition, simulation_table, straight_survey};
    use approx::assert_relative_eq;

    fn sample_response() -> GeometryResponse {
        let def = geometry_definition(10.0, 50.0, 20.0, Some(100.0));
        let survey = straight_survey(&[0.0, 10.0, 30.0, 50.0, 70.0, 100.0], 0.0, 0.0);
        let table = simulation_table(&[0.0, 0.5, 1.0, 1.5], &[0.0, 50.0, 100.0], |_, _| 1.0);
        assemble_geometry_response(&survey, &def, def.terminal_depth(), &table, 100.0).unwrap()
    }

    #[test]
    fn test_time_domain() {
        let time = TimeDomain::from_time_index(&[2.0, 2.5, 3.0, 3.5]).unwrap();
        assert_eq!(time, TimeDomain { min: 2.0, max: 3.5, step: 0.5 });
        assert!(TimeDomain::from_time_index(&[1.0]).is_err());
    }

    #[test]
    fn test_response_contents() {
        let response = sample_response();

        assert_eq!(response.time, TimeDomain { min: 0.0, max: 1.5, step: 0.5 });
        assert_eq!(response.casing_shoes.len(), 4);
        // the md 0 station has no length and no zone
        assert_eq!(response.path_segments.len(), 5);

        let riser = &response.path_segments[0];
        assert_relative_eq!(riser.radius, 0.5 * 0.0254 * 19.5 * 100.0, epsilon = 1e-12);
        assert_relative_eq!(riser.texture_coordinate, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_response_is_centered() {
        let response = sample_response();
        // visible centers -5..-85 with ±vectors give y in [-115, 5]
        let top = response.casing_shoes.first().unwrap();
        let bottom = response.casing_shoes.last().unwrap();
        assert_relative_eq!(top.posy, -10.0 + 55.0, epsilon = 1e-9);
        assert_relative_eq!(bottom.posy, -100.0 + 55.0, epsilon = 1e-9);
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(sample_response()).unwrap();

        assert!(json["time"]["step"].is_number());
        let shoe = &json["casingShoes"][0];
        for key in ["label", "posx", "posy", "posz", "rotx", "roty", "rotz", "radius"] {
            assert!(shoe.get(key).is_some(), "casing shoe is missing {}", key);
        }
        let segment = json["pathSegments"][0].as_object().unwrap();
        assert_eq!(segment.len(), 9);
        assert!(segment.contains_key("texture_coordinate"));
        assert!(!segment.contains_key("vecx"));
    }

    #[test]
    fn test_decreasing_measured_depth_is_invalid_survey() {
        let def = geometry_definition(10.0, 50.0, 20.0, Some(100.0));
        let survey = straight_survey(&[0.0, 80.0, 30.0, 100.0], 0.0, 0.0);
        let table = simulation_table(&[0.0, 1.0], &[0.0, 100.0], |_, _| 0.0);

        let err = assemble_geometry_response(&survey, &def, def.terminal_depth(), &table, 1.0)
            .unwrap_err();
        assert!(matches!(err, WellGeometryError::InvalidSurvey(_)));
    }

    #[test]
    fn test_repeated_measured_depth_is_accepted() {
        let def = geometry_definition(10.0, 50.0, 20.0, Some(100.0));
        let survey = straight_survey(&[0.0, 30.0, 30.0, 100.0], 0.0, 0.0);
        let table = simulation_table(&[0.0, 1.0], &[0.0, 100.0], |_, _| 0.0);

        let response =
            assemble_geometry_response(&survey, &def, def.terminal_depth(), &table, 1.0).unwrap();
        // the zero length repeat is not drawn
        assert_eq!(response.path_segments.len(), 2);
    }

    #[test]
    fn test_no_zones_is_degenerate() {
        let def = geometry_definition(0.0, 0.0, 0.0, Some(0.0));
        let survey = straight_survey(&[0.0, 10.0], 0.0, 0.0);
        let table = simulation_table(&[0.0, 1.0], &[0.0, 10.0], |_, _| 0.0);
        assert!(matches!(
            assemble_geometry_response(&survey, &def, 0.0, &table, 1.0),
            Err(WellGeometryError::DegenerateGeometry(_))
        ));
    }
}
