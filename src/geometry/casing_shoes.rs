use nalgebra::Vector3;

use super::rotation::{euler_zyx_extrinsic, shoe_rotation_matrix, Rotation};
use super::segments::PathSegment;
use super::zones::GeometryZone;
use crate::error::{Result, WellGeometryError};

/// Disc marking where a zone ends.
#[derive(Debug, Clone, PartialEq)]
pub struct CasingShoe {
    pub label: String,
    pub position: Vector3<f64>,
    pub rotation: Rotation,
    pub radius: f64,
}

/// Places a shoe at the end of the last segment that reaches no deeper than
/// `zone.md_stop`.
pub fn casing_shoe(segments: &[PathSegment], zone: &GeometryZone) -> Result<CasingShoe> {
    let last_segment = segments
        .iter()
        .filter(|s| s.md <= zone.md_stop)
        .last()
        .ok_or_else(|| WellGeometryError::EmptySelection {
            zone: zone.kind.name().to_string(),
            md_stop: zone.md_stop,
        })?;

    Ok(CasingShoe {
        label: format!("end of {}", zone.kind),
        position: last_segment.end_point(),
        rotation: euler_zyx_extrinsic(&shoe_rotation_matrix(&last_segment.rotation)),
        radius: last_segment.radius,
    })
}

/// One shoe per zone, in zone order.
pub fn locate_casing_shoes(
    segments: &[PathSegment],
    zones: &[GeometryZone],
) -> Result<Vec<CasingShoe>> {
    zones.iter().map(|zone| casing_shoe(segments, zone)).collect()
}
