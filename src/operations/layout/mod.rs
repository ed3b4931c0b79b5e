mod grid;
mod radial;

pub use grid::GridLayout;
pub use radial::RadialLayout;

use crate::error::Result;
use crate::geometry::{FramePath, LineSegment2, Outline};
use crate::window::PaneLayout;

/// Generates the frame bar centerlines for one pane outline.
///
/// `border` scopes a radial layout to a partial region (e.g. a TOP arch);
/// it is ignored for grid layouts.
///
/// # Errors
///
/// Propagates the geometry errors of [`GridLayout`] and [`RadialLayout`].
pub fn layout_panes(
    pane: &Outline,
    layout: &PaneLayout,
    border: Option<&LineSegment2>,
) -> Result<Vec<FramePath>> {
    if layout.radial {
        let mut radial = RadialLayout::new(pane, layout.horizontal, layout.vertical);
        if let Some(border) = border {
            radial = radial.with_border(*border);
        }
        radial.execute()
    } else {
        GridLayout::new(pane, layout.horizontal, layout.vertical).execute()
    }
}
