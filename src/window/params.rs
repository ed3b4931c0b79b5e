use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{ConfigurationError, Result};
use crate::geometry::WindowShape;
use crate::render::Material;

use super::WindowRegion;

/// How a pane is subdivided by interior frame bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    /// Number of panes side by side (grid columns, or spokes in radial mode).
    pub horizontal: u32,
    /// Number of panes stacked vertically (grid rows; unused in radial mode).
    pub vertical: u32,
    pub radial: bool,
}

impl PaneLayout {
    /// Creates a grid layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidPaneCount`] if either count is zero.
    pub fn new(horizontal: u32, vertical: u32) -> Result<Self> {
        if horizontal == 0 || vertical == 0 {
            return Err(ConfigurationError::InvalidPaneCount { horizontal, vertical }.into());
        }
        Ok(Self {
            horizontal,
            vertical,
            radial: false,
        })
    }

    /// Switches to radial (spoke) layout.
    #[must_use]
    pub fn radial(mut self) -> Self {
        self.radial = true;
        self
    }

    /// Whether this layout produces any frame bars at all.
    #[must_use]
    pub fn is_subdivided(&self) -> bool {
        if self.radial {
            self.horizontal > 1
        } else {
            self.horizontal > 1 || self.vertical > 1
        }
    }
}

impl FromStr for PaneLayout {
    type Err = ConfigurationError;

    /// Parses `"HxV"` (grid) or `"radial:H"` / `"radial:HxV"`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parse_err = || ConfigurationError::Parse {
            kind: "pane layout",
            value: s.to_owned(),
        };
        let trimmed = s.trim();
        let (radial, counts) = match trimmed.strip_prefix("radial:") {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (h, v) = match counts.split_once('x') {
            Some((h, v)) => (h.trim(), v.trim()),
            None if radial => (counts.trim(), "1"),
            None => return Err(parse_err()),
        };
        let horizontal: u32 = h.parse().map_err(|_| parse_err())?;
        let vertical: u32 = v.parse().map_err(|_| parse_err())?;
        if horizontal == 0 || vertical == 0 {
            return Err(ConfigurationError::InvalidPaneCount { horizontal, vertical });
        }
        Ok(Self {
            horizontal,
            vertical,
            radial,
        })
    }
}

/// Shape and pane layout of the whole window or of one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionProperties {
    pub shape: WindowShape,
    pub panes: Option<PaneLayout>,
}

impl RegionProperties {
    #[must_use]
    pub fn new(shape: WindowShape) -> Self {
        Self { shape, panes: None }
    }

    #[must_use]
    pub fn with_panes(mut self, panes: PaneLayout) -> Self {
        self.panes = Some(panes);
        self
    }
}

/// Fixed frame measurements for geometry windows, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameDimensions {
    /// Recess of the pane behind the wall surface.
    pub depth: f64,
    pub outer_frame_width: f64,
    pub inner_frame_width: f64,
    pub outer_frame_thickness: f64,
    pub inner_frame_thickness: f64,
    /// Height of a TOP region above its border with CENTER.
    pub top_region_height: f64,
    /// Lower bound for the pane inset scale factor.
    pub minimum_pane_scale: f64,
}

impl Default for FrameDimensions {
    fn default() -> Self {
        Self {
            depth: 0.10,
            outer_frame_width: 0.1,
            inner_frame_width: 0.05,
            outer_frame_thickness: 0.05,
            inner_frame_thickness: 0.03,
            top_region_height: 1.0,
            minimum_pane_scale: 0.1,
        }
    }
}

/// Immutable configuration of one window type.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowParameters {
    pub width: f64,
    pub height: f64,
    pub overall: RegionProperties,
    /// Per-region properties. When non-empty it must define CENTER.
    pub regions: BTreeMap<WindowRegion, RegionProperties>,
    pub frame_material: Material,
    pub transparent_material: Material,
    pub opaque_material: Material,
    pub dimensions: FrameDimensions,
}

impl WindowParameters {
    /// Creates parameters for a single-shape window with default materials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidSize`] for non-positive or
    /// non-finite sizes.
    pub fn new(width: f64, height: f64, shape: WindowShape) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigurationError::InvalidSize { width, height }.into());
        }
        Ok(Self {
            width,
            height,
            overall: RegionProperties::new(shape),
            regions: BTreeMap::new(),
            frame_material: Material::new("window_frame", [0.9, 0.9, 0.9, 1.0]),
            transparent_material: Material::new("glass", [0.7, 0.8, 0.9, 0.3]),
            opaque_material: Material::new("glass_opaque", [0.2, 0.25, 0.3, 1.0]),
            dimensions: FrameDimensions::default(),
        })
    }

    /// Sets the pane layout for the whole window.
    #[must_use]
    pub fn with_panes(mut self, panes: PaneLayout) -> Self {
        self.overall.panes = Some(panes);
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: WindowRegion, properties: RegionProperties) -> Self {
        self.regions.insert(region, properties);
        self
    }

    #[must_use]
    pub fn with_materials(mut self, frame: Material, transparent: Material, opaque: Material) -> Self {
        self.frame_material = frame;
        self.transparent_material = transparent;
        self.opaque_material = opaque;
        self
    }

    #[must_use]
    pub fn with_dimensions(mut self, dimensions: FrameDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }
}
