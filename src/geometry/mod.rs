pub mod casing_shoes;
pub mod centroid;
pub mod response;
pub mod rotation;
pub mod segments;
pub mod zones;

pub use casing_shoes::{casing_shoe, locate_casing_shoes, CasingShoe};
pub use centroid::{center_geometry, find_centroid, CenteredGeometry};
pub use response::{
    assemble_geometry_response, CasingShoeRecord, GeometryResponse, PathSegmentRecord, TimeDomain,
};
pub use rotation::Rotation;
pub use segments::{build_path_segments, PathSegment};
pub use zones::{resolve_geometry_zones, GeometryZone, ZoneKind};
