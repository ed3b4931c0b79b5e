use std::collections::BTreeMap;

use crate::error::{ConfigurationError, Result};

/// Named sub-area of a composed window outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WindowRegion {
    Center,
    Top,
    Left,
    Right,
    Bottom,
}

/// How a window outline is assembled from its regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionComposition {
    /// One shape from the overall properties.
    Single,
    /// A CENTER body with a TOP region attached to its upper border.
    CenterTop,
}

impl RegionComposition {
    /// Picks the composition for a region map.
    ///
    /// An empty map or a lone CENTER yields [`RegionComposition::Single`].
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::MissingCenterRegion`] if regions are given without CENTER
    /// - [`ConfigurationError::UnsupportedRegions`] if LEFT, RIGHT or BOTTOM is present
    pub fn from_regions<V>(regions: &BTreeMap<WindowRegion, V>) -> Result<Self> {
        if regions.is_empty() {
            return Ok(Self::Single);
        }
        if !regions.contains_key(&WindowRegion::Center) {
            return Err(ConfigurationError::MissingCenterRegion.into());
        }
        let unsupported: Vec<WindowRegion> = regions
            .keys()
            .copied()
            .filter(|r| !matches!(r, WindowRegion::Center | WindowRegion::Top))
            .collect();
        if !unsupported.is_empty() {
            return Err(ConfigurationError::UnsupportedRegions(unsupported).into());
        }
        if regions.contains_key(&WindowRegion::Top) {
            Ok(Self::CenterTop)
        } else {
            Ok(Self::Single)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FenestraError;

    fn map(regions: &[WindowRegion]) -> BTreeMap<WindowRegion, ()> {
        regions.iter().map(|r| (*r, ())).collect()
    }

    #[test]
    fn empty_and_center_only_are_single() {
        assert_eq!(RegionComposition::from_regions(&map(&[])).unwrap(), RegionComposition::Single);
        assert_eq!(
            RegionComposition::from_regions(&map(&[WindowRegion::Center])).unwrap(),
            RegionComposition::Single
        );
    }

    #[test]
    fn center_top_is_composed() {
        let c = RegionComposition::from_regions(&map(&[WindowRegion::Top, WindowRegion::Center])).unwrap();
        assert_eq!(c, RegionComposition::CenterTop);
    }

    #[test]
    fn top_without_center_is_rejected() {
        let err = RegionComposition::from_regions(&map(&[WindowRegion::Top])).unwrap_err();
        assert!(matches!(
            err,
            FenestraError::Configuration(ConfigurationError::MissingCenterRegion)
        ));
    }

    #[test]
    fn side_regions_are_rejected() {
        for extra in [WindowRegion::Left, WindowRegion::Right, WindowRegion::Bottom] {
            let err = RegionComposition::from_regions(&map(&[WindowRegion::Center, WindowRegion::Top, extra]))
                .unwrap_err();
            assert!(matches!(
                err,
                FenestraError::Configuration(ConfigurationError::UnsupportedRegions(_))
            ));
        }
    }

    #[test]
    fn rejection_names_only_unsupported_regions() {
        let err = RegionComposition::from_regions(&map(&[
            WindowRegion::Center,
            WindowRegion::Top,
            WindowRegion::Left,
            WindowRegion::Bottom,
        ]))
        .unwrap_err();
        let FenestraError::Configuration(ConfigurationError::UnsupportedRegions(regions)) = err else {
            panic!("unexpected error: {err:?}");
        };
        assert_eq!(regions, vec![WindowRegion::Left, WindowRegion::Bottom]);
    }
}
