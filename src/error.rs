use thiserror::Error;

/// Failures of the geometry and pressure pipelines.
///
/// All computations are pure, so none of these are worth retrying.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WellGeometryError {
    /// Measured depths are not strictly increasing, there are too few of
    /// them, or a lookup falls outside the surveyed range.
    #[error("invalid survey: {0}")]
    InvalidSurvey(String),

    /// No path segment lies at or before the end of a zone.
    #[error("no path segment at or before md {md_stop} for zone '{zone}'")]
    EmptySelection { zone: String, md_stop: f64 },

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("invalid simulation table: {0}")]
    InvalidTable(String),
}

pub type Result<T> = std::result::Result<T, WellGeometryError>;
