//! Window facade: parameters, regions and the geometry window itself.

mod batch;
mod params;
mod region;

pub use batch::{build_windows, render_windows, WindowPlacement};
pub use params::{FrameDimensions, PaneLayout, RegionProperties, WindowParameters};
pub use region::{RegionComposition, WindowRegion};

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::{FramePath, LineSegment2, Outline, WindowShape};
use crate::math::Point2;
use crate::operations::{layout_panes, ComposeOutline, DerivePaneOutline, LiftWindow};
use crate::render::{DrawCall, Material, Target, WallSurface};
use crate::tessellation::{CdtKernel, GeometryKernel};

/// An element set into a wall opening.
pub trait Window {
    /// The opening cut into the wall, in wall-local coordinates.
    fn outline(&self) -> &Outline;

    /// How far the window sits behind the wall surface.
    fn inset_distance(&self) -> f64;

    /// Draws the window onto `surface`.
    ///
    /// # Errors
    ///
    /// Fails without drawing anything if any part of the window cannot be
    /// built, or propagates the target's error.
    fn render_to(&self, target: &mut dyn Target, surface: &dyn WallSurface) -> Result<()>;
}

/// A window with a procedurally built outline, glass pane and frame bars.
#[derive(Debug, Clone)]
pub struct GeometryWindow<'a> {
    position: Point2,
    params: &'a WindowParameters,
    transparent: bool,
    outline: Outline,
    pane_outline: Outline,
    region_outlines: BTreeMap<WindowRegion, Outline>,
    region_borders: BTreeMap<WindowRegion, LineSegment2>,
    frame_paths: Vec<FramePath>,
}

impl<'a> GeometryWindow<'a> {
    /// Builds the 2D geometry of a window whose bottom-center is at `position`.
    ///
    /// Panes configured for the whole window take precedence over per-region
    /// panes. With per-region panes, region borders become frame bars too.
    ///
    /// # Errors
    ///
    /// - `ConfigurationError` for unsupported region setups
    /// - `GeometryError` if the outline or a frame bar cannot be built
    pub fn new(position: Point2, params: &'a WindowParameters, transparent: bool) -> Result<Self> {
        let composed = ComposeOutline::new(position, params).execute()?;
        let derive = DerivePaneOutline::from_dimensions(&params.dimensions);
        let pane_outline = derive.execute(&composed.outline);

        let frame_paths = if let Some(layout) = params.overall.panes {
            checked_layout(&pane_outline, &layout, None)?
        } else if composed.regions.is_empty() {
            Vec::new()
        } else {
            let mut paths = Vec::new();
            for (region, properties) in &params.regions {
                let (Some(layout), Some(region_outline)) = (properties.panes, composed.regions.get(region))
                else {
                    continue;
                };
                let region_pane = derive.execute(region_outline);
                paths.extend(checked_layout(&region_pane, &layout, composed.borders.get(region))?);
            }
            paths.extend(composed.borders.values().copied().map(FramePath::from));
            paths
        };

        debug!(
            x = position.x,
            y = position.y,
            outline_vertices = composed.outline.len(),
            regions = composed.regions.len(),
            frame_paths = frame_paths.len(),
            "built geometry window"
        );

        Ok(Self {
            position,
            params,
            transparent,
            outline: composed.outline,
            pane_outline,
            region_outlines: composed.regions,
            region_borders: composed.borders,
            frame_paths,
        })
    }

    #[must_use]
    pub fn position(&self) -> Point2 {
        self.position
    }

    #[must_use]
    pub fn params(&self) -> &WindowParameters {
        self.params
    }

    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    #[must_use]
    pub fn pane_outline(&self) -> &Outline {
        &self.pane_outline
    }

    #[must_use]
    pub fn frame_paths(&self) -> &[FramePath] {
        &self.frame_paths
    }

    #[must_use]
    pub fn region_outlines(&self) -> &BTreeMap<WindowRegion, Outline> {
        &self.region_outlines
    }

    #[must_use]
    pub fn region_borders(&self) -> &BTreeMap<WindowRegion, LineSegment2> {
        &self.region_borders
    }

    /// Material of the glass pane, depending on transparency.
    #[must_use]
    pub fn pane_material(&self) -> &Material {
        if self.transparent {
            &self.params.transparent_material
        } else {
            &self.params.opaque_material
        }
    }

    /// Computes every draw call of this window without emitting any.
    ///
    /// # Errors
    ///
    /// Propagates triangulation and buffering failures.
    pub fn draw_calls(&self, surface: &dyn WallSurface, kernel: &dyn GeometryKernel) -> Result<Vec<DrawCall>> {
        LiftWindow::new(
            &self.outline,
            &self.pane_outline,
            &self.frame_paths,
            &self.params.dimensions,
            self.pane_material(),
            &self.params.frame_material,
        )
        .with_smooth_sides(self.params.overall.shape == WindowShape::Circle)
        .execute(surface, kernel)
    }

    /// Renders with an explicit geometry kernel.
    ///
    /// # Errors
    ///
    /// See [`Window::render_to`].
    pub fn render_with(
        &self,
        target: &mut dyn Target,
        surface: &dyn WallSurface,
        kernel: &dyn GeometryKernel,
    ) -> Result<()> {
        let calls = self.draw_calls(surface, kernel)?;
        for call in &calls {
            call.emit(target)?;
        }
        Ok(())
    }
}

impl Window for GeometryWindow<'_> {
    fn outline(&self) -> &Outline {
        &self.outline
    }

    fn inset_distance(&self) -> f64 {
        self.params.dimensions.depth - self.params.dimensions.outer_frame_thickness
    }

    fn render_to(&self, target: &mut dyn Target, surface: &dyn WallSurface) -> Result<()> {
        self.render_with(target, surface, &CdtKernel)
    }
}

/// Runs the layout and rejects a subdivided layout that yields no bars.
fn checked_layout(
    pane: &Outline,
    layout: &PaneLayout,
    border: Option<&LineSegment2>,
) -> Result<Vec<FramePath>> {
    let paths = layout_panes(pane, layout, border)?;
    // A partial radial layout with one pane legitimately has no spokes.
    if paths.is_empty() && layout.is_subdivided() {
        return Err(GeometryError::Degenerate(format!(
            "{}x{} pane layout produced no frame bars",
            layout.horizontal, layout.vertical
        ))
        .into());
    }
    Ok(paths)
}
