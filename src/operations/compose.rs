use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::geometry::{LineSegment2, Outline};
use crate::math::{Point2, Vector2, TOLERANCE};
use crate::window::{RegionComposition, WindowParameters, WindowRegion};

/// Result of outline composition.
#[derive(Debug, Clone)]
pub struct ComposedOutline {
    /// The overall window outline, simple and counter-clockwise.
    pub outline: Outline,
    /// Outlines of the individual regions (empty for single-shape windows).
    pub regions: BTreeMap<WindowRegion, Outline>,
    /// Border segment shared by each attached region and its neighbour.
    pub borders: BTreeMap<WindowRegion, LineSegment2>,
}

/// Builds a window's outline, merging CENTER and TOP regions when both are
/// configured.
#[derive(Debug)]
pub struct ComposeOutline<'a> {
    position: Point2,
    params: &'a WindowParameters,
}

impl<'a> ComposeOutline<'a> {
    /// Creates a composition for a window placed with its bottom-center at `position`.
    #[must_use]
    pub fn new(position: Point2, params: &'a WindowParameters) -> Self {
        Self { position, params }
    }

    /// Executes the composition.
    ///
    /// # Errors
    ///
    /// - `ConfigurationError` for unsupported region combinations or shapes
    /// - [`GeometryError::RayMiss`] if the CENTER outline has no upper border
    /// - [`GeometryError::Orientation`] if a region outline is clockwise
    /// - [`GeometryError::Degenerate`] if the merged outline is not simple
    pub fn execute(&self) -> Result<ComposedOutline> {
        let params = self.params;
        match RegionComposition::from_regions(&params.regions)? {
            RegionComposition::Single => {
                let outline = params.overall.shape.build(self.position, params.width, params.height)?;
                trace!(shape = %params.overall.shape, vertices = outline.len(), "built single-shape outline");
                Ok(ComposedOutline {
                    outline,
                    regions: BTreeMap::new(),
                    borders: BTreeMap::new(),
                })
            }
            RegionComposition::CenterTop => self.compose_center_top(),
        }
    }

    fn compose_center_top(&self) -> Result<ComposedOutline> {
        let params = self.params;
        let region_shape =
            |region: WindowRegion| params.regions.get(&region).map(|p| p.shape).unwrap_or_default();

        let center = region_shape(WindowRegion::Center).build(self.position, params.width, params.height)?;
        let border = top_border(&center)?;
        let top =
            region_shape(WindowRegion::Top).build_on_segment(&border, params.dimensions.top_region_height)?;

        if !center.is_counter_clockwise() {
            return Err(GeometryError::Orientation("CENTER").into());
        }
        if !top.is_counter_clockwise() {
            return Err(GeometryError::Orientation("TOP").into());
        }

        let outline = merge_along_border(&center, &top, &border)?;
        debug!(
            center_vertices = center.len(),
            top_vertices = top.len(),
            merged_vertices = outline.len(),
            "composed CENTER+TOP outline"
        );

        let mut regions = BTreeMap::new();
        regions.insert(WindowRegion::Center, center);
        regions.insert(WindowRegion::Top, top);
        let mut borders = BTreeMap::new();
        borders.insert(WindowRegion::Top, border);

        Ok(ComposedOutline {
            outline,
            regions,
            borders,
        })
    }
}

/// Finds the edge of `center` crossed by an upward ray from its centroid.
///
/// When a non-convex outline is crossed several times, the topmost crossing wins.
fn top_border(center: &Outline) -> Result<LineSegment2> {
    let origin = center.centroid();
    // Every vertex is within one diameter of the centroid.
    let ray = LineSegment2::new(origin, origin + Vector2::new(0.0, 2.0 * center.diameter()));
    center
        .intersection_segments(&ray)
        .into_iter()
        .filter_map(|edge| {
            let hit = crossing_height(&edge, origin.x)?;
            Some((edge, hit))
        })
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(edge, _)| edge)
        .ok_or_else(|| GeometryError::RayMiss.into())
}

/// Height at which `edge` crosses the vertical line through `x`.
fn crossing_height(edge: &LineSegment2, x: f64) -> Option<f64> {
    let dx = edge.p2.x - edge.p1.x;
    if dx.abs() < TOLERANCE {
        return ((edge.p1.x - x).abs() < TOLERANCE).then(|| edge.p1.y.max(edge.p2.y));
    }
    let t = (x - edge.p1.x) / dx;
    Some(edge.p1.y + t * (edge.p2.y - edge.p1.y))
}

/// Joins two counter-clockwise outlines that share `border`.
///
/// Walks `center` from `border.p2` forward to just before `border.p1`, then
/// `top` from its vertex nearest `border.p1` forward to just before its vertex
/// nearest `border.p2`.
fn merge_along_border(center: &Outline, top: &Outline, border: &LineSegment2) -> Result<Outline> {
    let missing =
        || GeometryError::Degenerate("region border is not an edge of the CENTER outline".to_owned());
    let cv = center.vertices();
    let start = center.index_of(&border.p2).ok_or_else(missing)?;
    let stop = center.index_of(&border.p1).ok_or_else(missing)?;

    let mut merged = Vec::with_capacity(cv.len() + top.len());
    let mut i = start;
    while i != stop {
        merged.push(cv[i]);
        i = (i + 1) % cv.len();
    }

    let tv = top.vertices();
    let top_start = top.closest_vertex_index(&border.p1);
    let top_stop = top.closest_vertex_index(&border.p2);
    let mut j = top_start;
    while j != top_stop {
        merged.push(tv[j]);
        j = (j + 1) % tv.len();
    }

    merged.push(merged[0]);
    let outline = Outline::new(merged)?;

    if !outline.is_counter_clockwise() {
        return Err(GeometryError::Orientation("merged").into());
    }
    if !outline.is_simple() {
        return Err(GeometryError::Degenerate("merged outline self-intersects".to_owned()).into());
    }
    Ok(outline)
}
