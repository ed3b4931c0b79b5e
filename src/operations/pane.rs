use crate::geometry::Outline;
use crate::window::FrameDimensions;

/// Derives the glass pane outline by shrinking a window outline.
///
/// The outline is scaled uniformly about its centroid by
/// `max(minimum_scale, 1 - inner_frame_width / diameter)`. This approximates
/// an inward offset by the inner frame width; the error grows with the
/// outline's aspect ratio but stays small for thin frames.
#[derive(Debug, Clone, Copy)]
pub struct DerivePaneOutline {
    inner_frame_width: f64,
    minimum_scale: f64,
}

impl DerivePaneOutline {
    #[must_use]
    pub fn new(inner_frame_width: f64, minimum_scale: f64) -> Self {
        Self {
            inner_frame_width,
            minimum_scale,
        }
    }

    #[must_use]
    pub fn from_dimensions(dimensions: &FrameDimensions) -> Self {
        Self::new(dimensions.inner_frame_width, dimensions.minimum_pane_scale)
    }

    /// Scale factor applied to `outline`.
    #[must_use]
    pub fn scale_factor(&self, outline: &Outline) -> f64 {
        self.minimum_scale.max(1.0 - self.inner_frame_width / outline.diameter())
    }

    #[must_use]
    pub fn execute(&self, outline: &Outline) -> Outline {
        outline.scale(self.scale_factor(outline))
    }
}
