use nalgebra::Vector3;
use tracing::debug;

use super::rotation::Rotation;
use super::zones::GeometryZone;
use crate::error::{Result, WellGeometryError};
use crate::io::input::SurveyStation;
use crate::utils::interpolation::{linspace, LinearInterpolator};

/// A cylinder between two consecutive survey stations, ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    /// Measured depth of the station closing this segment.
    pub md: f64,
    pub length: f64,
    pub rotation: Rotation,
    /// Displacement from the segment's start to its end.
    pub vector: Vector3<f64>,
    /// Center of the cylinder.
    pub position: Vector3<f64>,
    pub radius: f64,
    /// Where along the simulation texture this segment samples, 0 at the
    /// shallowest simulated depth and 1 at the deepest.
    pub texture_coordinate: f64,
}

impl PathSegment {
    /// Segments without a zone or with zero length are not drawn.
    pub fn is_visible(&self) -> bool {
        self.radius > 0.0 && self.length > 0.0
    }

    pub fn end_point(&self) -> Vector3<f64> {
        self.position + 0.5 * self.vector
    }
}

/// Turns a survey into one path segment per station, in input order.
///
/// Radii come from the zone covering each station's measured depth and are
/// multiplied by `radius_scaling`; stations outside every zone get radius 0.
/// `simulation_mds` are the depth columns of the simulation output and define
/// the texture axis.
pub fn build_path_segments(
    survey: &[SurveyStation],
    zones: &[GeometryZone],
    simulation_mds: &[f64],
    radius_scaling: f64,
) -> Result<Vec<PathSegment>> {
    let texture_axis = texture_axis(simulation_mds)?;

    let mut cumulative = Vector3::zeros();
    let mut previous_md = 0.0;
    let mut uncovered = 0usize;

    let segments: Vec<PathSegment> = survey
        .iter()
        .map(|station| {
            let length = station.md - previous_md;
            previous_md = station.md;

            let rotation = segment_rotation(station);
            let vector = segment_vector(length, &rotation);
            cumulative += vector;
            let position = cumulative - 0.5 * vector;

            let radius = match zone_radius(zones, station.md) {
                Some(radius) => radius * radius_scaling,
                None => {
                    uncovered += 1;
                    0.0
                }
            };

            PathSegment {
                md: station.md,
                length,
                rotation,
                vector,
                position,
                radius,
                texture_coordinate: texture_axis.eval_extrapolate(station.md),
            }
        })
        .collect();

    debug!(segments = segments.len(), uncovered, "built path segments");
    Ok(segments)
}

pub fn segment_rotation(station: &SurveyStation) -> Rotation {
    Rotation {
        rotx: 0.0,
        roty: station.azimuth.to_radians(),
        rotz: station.inclination.to_radians(),
    }
}

/// `Ry(roty) · Rz(rotz) · (0, -length, 0)`, multiplied out. An unrotated
/// segment points straight down.
pub fn segment_vector(length: f64, rotation: &Rotation) -> Vector3<f64> {
    let (sin_y, cos_y) = rotation.roty.sin_cos();
    let (sin_z, cos_z) = rotation.rotz.sin_cos();
    Vector3::new(
        length * cos_y * sin_z,
        -length * cos_z,
        -length * sin_y * sin_z,
    )
}

fn zone_radius(zones: &[GeometryZone], md: f64) -> Option<f64> {
    zones.iter().find(|z| z.contains(md)).map(|z| z.radius)
}

/// Maps the sorted simulation depths onto evenly spaced texture rows in
/// [0, 1]. Evaluation extrapolates past both ends.
pub fn texture_axis(simulation_mds: &[f64]) -> Result<LinearInterpolator> {
    let mut depths = simulation_mds.to_vec();
    depths.sort_by(f64::total_cmp);
    let rows = linspace(0.0, 1.0, depths.len());
    LinearInterpolator::new(depths, rows)
        .map_err(|e| WellGeometryError::InvalidTable(format!("texture axis: {}", e)))
}
