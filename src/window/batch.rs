use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::math::Point2;
use crate::render::{DrawCall, WallSurface};
use crate::tessellation::GeometryKernel;

use super::{GeometryWindow, WindowParameters};

/// Where to place one window of a shared type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowPlacement {
    /// Bottom-center of the window in wall-local coordinates.
    pub position: Point2,
    pub transparent: bool,
}

impl WindowPlacement {
    #[must_use]
    pub fn new(position: Point2, transparent: bool) -> Self {
        Self { position, transparent }
    }
}

/// Builds windows for many placements in parallel.
///
/// Results keep the order of `placements`; a failing window does not affect
/// the others.
#[must_use]
pub fn build_windows<'a>(
    params: &'a WindowParameters,
    placements: &[WindowPlacement],
) -> Vec<Result<GeometryWindow<'a>>> {
    debug!(count = placements.len(), "building windows");
    placements
        .par_iter()
        .map(|p| GeometryWindow::new(p.position, params, p.transparent))
        .collect()
}

/// Computes the draw calls of many windows on one wall in parallel.
#[must_use]
pub fn render_windows(
    windows: &[GeometryWindow<'_>],
    surface: &(dyn WallSurface + Sync),
    kernel: &dyn GeometryKernel,
) -> Vec<Result<Vec<DrawCall>>> {
    windows
        .par_iter()
        .map(|w| w.draw_calls(surface, kernel))
        .collect()
}
