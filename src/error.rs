use thiserror::Error;

use crate::window::WindowRegion;

/// Top-level error type for window geometry construction.
///
/// Every variant is fatal for the affected window instance; callers decide
/// whether to skip the window or abort the surrounding building.
#[derive(Debug, Error)]
pub enum FenestraError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Offset(#[from] OffsetError),
}

/// Parameter combinations the engine does not support.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("region composition is only supported for CENTER+TOP, got {0:?}")]
    UnsupportedRegions(Vec<WindowRegion>),

    #[error("region map is non-empty but does not define CENTER")]
    MissingCenterRegion,

    #[error("shape {0} cannot be anchored on a region border")]
    UnsupportedRegionShape(&'static str),

    #[error("pane count must be at least 1 (horizontal = {horizontal}, vertical = {vertical})")]
    InvalidPaneCount { horizontal: u32, vertical: u32 },

    #[error("window size must be positive (width = {width}, height = {height})")]
    InvalidSize { width: f64, height: f64 },

    #[error("unrecognized {kind}: {value:?}")]
    Parse { kind: &'static str, value: String },
}

/// Degenerate input or violated geometric invariants.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("ray from the region centroid does not cross the outline")]
    RayMiss,

    #[error("{0} outline is not counter-clockwise")]
    Orientation(&'static str),

    #[error("divider line at {position} crosses the pane outline {hits} time(s), expected at least 2")]
    DividerMiss { position: f64, hits: usize },

    #[error("spoke at {angle_degrees} degrees does not reach the pane outline")]
    SpokeMiss { angle_degrees: f64 },
}

/// Errors related to triangulation and sweeping.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation input: {0}")]
    InvalidInput(String),

    #[error("triangulation failed: {0}")]
    Failed(String),
}

/// Errors related to polygon buffering.
#[derive(Debug, Error)]
pub enum OffsetError {
    #[error("invalid offset input: {0}")]
    InvalidInput(String),

    #[error("inward buffer by {distance} collapsed to zero loops")]
    Collapsed { distance: f64 },
}

/// Convenience type alias for results using [`FenestraError`].
pub type Result<T> = std::result::Result<T, FenestraError>;
