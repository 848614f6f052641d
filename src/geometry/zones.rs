use std::fmt;

use crate::config::inches_to_radius;
use crate::io::input::GeometryDefinition;

/// Radial section of the bore, in the order they appear going down the well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    Riser,
    CasedSection,
    Liner,
    OpenHole,
}

impl ZoneKind {
    pub const ALL: [ZoneKind; 4] = [
        ZoneKind::Riser,
        ZoneKind::CasedSection,
        ZoneKind::Liner,
        ZoneKind::OpenHole,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ZoneKind::Riser => "riser",
            ZoneKind::CasedSection => "cased section",
            ZoneKind::Liner => "liner",
            ZoneKind::OpenHole => "open hole",
        }
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A measured-depth interval `(md_start, md_stop]` with a constant radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryZone {
    pub kind: ZoneKind,
    /// Meters.
    pub radius: f64,
    pub md_start: f64,
    pub md_stop: f64,
}

impl GeometryZone {
    pub fn length(&self) -> f64 {
        self.md_stop - self.md_start
    }

    pub fn contains(&self, md: f64) -> bool {
        md > self.md_start && md <= self.md_stop
    }
}

/// Splits the well into riser, cased section, liner and open hole.
///
/// The zones share their boundaries, so the result is contiguous. A zone
/// whose stop does not come after its start (zero length liner, missing
/// riser, ...) is left out entirely. Input values are not validated.
pub fn resolve_geometry_zones(
    geometry: &GeometryDefinition,
    max_measured_depth: f64,
) -> Vec<GeometryZone> {
    let radii = [
        inches_to_radius(geometry.riser_inner_diameter),
        inches_to_radius(geometry.casing_inner_diameter),
        inches_to_radius(geometry.liner_inner_diameter),
        inches_to_radius(geometry.open_hole_diameter),
    ];
    let boundaries = [
        0.0,
        geometry.riser_end,
        geometry.cased_section_end,
        geometry.cased_section_end + geometry.liner_length,
        max_measured_depth,
    ];

    ZoneKind::ALL
        .iter()
        .zip(radii)
        .zip(boundaries.windows(2))
        .map(|((&kind, radius), bounds)| GeometryZone {
            kind,
            radius,
            md_start: bounds[0],
            md_stop: bounds[1],
        })
        .filter(|zone| zone.md_stop > zone.md_start)
        .collect()
}

#[cfg(test)]
mod zone_tests {
    use super::*;
    use crate::utils::test_utils::geometry_definition;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_four_zones() {
        let def = geometry_definition(10.0, 50.0, 20.0, Some(100.0));
        let zones = resolve_geometry_zones(&def, def.terminal_depth());

        let summary: Vec<(ZoneKind, f64, f64)> = zones
            .iter()
            .map(|z| (z.kind, z.md_start, z.md_stop))
            .collect();
        assert_eq!(
            summary,
            vec![
                (ZoneKind::Riser, 0.0, 10.0),
                (ZoneKind::CasedSection, 10.0, 50.0),
                (ZoneKind::Liner, 50.0, 70.0),
                (ZoneKind::OpenHole, 70.0, 100.0),
            ]
        );
    }

    #[test]
    fn test_zones_are_contiguous() {
        let def = geometry_definition(373.2, 1930.0, 120.0, Some(5192.0));
        let zones = resolve_geometry_zones(&def, def.terminal_depth());
        for pair in zones.windows(2) {
            assert_eq!(pair[0].md_stop, pair[1].md_start);
        }
    }

    #[test]
    fn test_zero_length_riser_is_dropped() {
        let def = geometry_definition(0.0, 50.0, 20.0, Some(100.0));
        let zones = resolve_geometry_zones(&def, def.terminal_depth());
        assert_eq!(zones.len(), 3);
        assert_eq!(zones[0].kind, ZoneKind::CasedSection);
        assert_eq!(zones[0].md_start, 0.0);
    }

    #[test]
    fn test_zero_length_liner_is_dropped() {
        let def = geometry_definition(10.0, 50.0, 0.0, Some(100.0));
        let zones = resolve_geometry_zones(&def, def.terminal_depth());
        let kinds: Vec<ZoneKind> = zones.iter().map(|z| z.kind).collect();
        assert_eq!(
            kinds,
            vec![ZoneKind::Riser, ZoneKind::CasedSection, ZoneKind::OpenHole]
        );
        assert_eq!(zones[2].md_start, 50.0);
    }

    #[test]
    fn test_terminal_depth_before_liner_end_drops_open_hole() {
        let def = geometry_definition(10.0, 50.0, 20.0, None);
        let zones = resolve_geometry_zones(&def, 60.0);
        assert_eq!(zones.last().map(|z| z.kind), Some(ZoneKind::Liner));
    }

    #[test]
    fn test_radii_are_converted_from_inches() {
        let def = geometry_definition(10.0, 50.0, 20.0, Some(100.0));
        let zones = resolve_geometry_zones(&def, def.terminal_depth());
        assert_relative_eq!(zones[0].radius, 0.5 * 0.0254 * def.riser_inner_diameter);
        assert_relative_eq!(zones[1].radius, 0.5 * 0.0254 * def.casing_inner_diameter);
        assert_relative_eq!(zones[2].radius, 0.5 * 0.0254 * def.liner_inner_diameter);
        assert_relative_eq!(zones[3].radius, 0.5 * 0.0254 * def.open_hole_diameter);
    }

    #[test]
    fn test_contains_is_half_open() {
        let zone = GeometryZone {
            kind: ZoneKind::Liner,
            radius: 0.1,
            md_start: 50.0,
            md_stop: 70.0,
        };
        assert!(!zone.contains(50.0));
        assert!(zone.contains(50.1));
        assert!(zone.contains(70.0));
        assert!(!zone.contains(70.1));
        assert_eq!(zone.length(), 20.0);
    }
}
