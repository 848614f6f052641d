use nalgebra::Vector3;
use tracing::debug;

use super::casing_shoes::CasingShoe;
use super::segments::PathSegment;
use crate::error::{Result, WellGeometryError};

/// Visible segments and shoes shifted so the drawn well is centered on the
/// origin.
#[derive(Debug, Clone, PartialEq)]
pub struct CenteredGeometry {
    pub centroid: Vector3<f64>,
    pub segments: Vec<PathSegment>,
    pub casing_shoes: Vec<CasingShoe>,
}

/// Midpoint of the axis-aligned box around `position ± vector` of every
/// visible segment.
pub fn find_centroid(segments: &[PathSegment]) -> Result<Vector3<f64>> {
    let mut ends = segments
        .iter()
        .filter(|s| s.is_visible())
        .flat_map(|s| [s.position - s.vector, s.position + s.vector]);

    let first = ends.next().ok_or_else(|| {
        WellGeometryError::DegenerateGeometry("no visible path segments".to_string())
    })?;
    let (min, max) = ends.fold((first, first), |(min, max), p| (min.inf(&p), max.sup(&p)));

    Ok(0.5 * (min + max))
}

/// Drops invisible segments and recenters the rest, together with the shoes.
pub fn center_geometry(
    segments: &[PathSegment],
    casing_shoes: &[CasingShoe],
) -> Result<CenteredGeometry> {
    let centroid = find_centroid(segments)?;
    debug!(x = centroid.x, y = centroid.y, z = centroid.z, "geometry centroid");

    let segments = segments
        .iter()
        .filter(|s| s.is_visible())
        .map(|s| PathSegment {
            position: s.position - centroid,
            ..s.clone()
        })
        .collect();

    let casing_shoes = casing_shoes
        .iter()
        .map(|shoe| CasingShoe {
            position: shoe.position - centroid,
            ..shoe.clone()
        })
        .collect();

    Ok(CenteredGeometry {
        centroid,
        segments,
        casing_shoes,
    })
}
