//! Spawn region value object
//!
//! Map coordinates are bytes, so every region already lies inside the
//! 256x256 grid. The only thing left to check is that the corners are
//! ordered.

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigurationError;

/// Inclusive rectangle of map cells. A point is the case `x1 == x2, y1 == y2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnRegion {
    x1: u8,
    y1: u8,
    x2: u8,
    y2: u8,
}

impl SpawnRegion {
    /// Create a rectangular region, rejecting inverted corners
    pub fn new(x1: u8, x2: u8, y1: u8, y2: u8) -> Result<Self, ConfigurationError> {
        if x1 > x2 || y1 > y2 {
            return Err(ConfigurationError::InvalidCoordinate { x1, y1, x2, y2 });
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Create a single-cell region
    pub fn point(x: u8, y: u8) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x,
            y2: y,
        }
    }

    pub fn x1(&self) -> u8 {
        self.x1
    }

    pub fn y1(&self) -> u8 {
        self.y1
    }

    pub fn x2(&self) -> u8 {
        self.x2
    }

    pub fn y2(&self) -> u8 {
        self.y2
    }

    pub fn is_point(&self) -> bool {
        self.x1 == self.x2 && self.y1 == self.y2
    }

    pub fn width(&self) -> u16 {
        u16::from(self.x2 - self.x1) + 1
    }

    pub fn height(&self) -> u16 {
        u16::from(self.y2 - self.y1) + 1
    }

    /// Number of cells covered by the region
    pub fn cell_count(&self) -> u32 {
        u32::from(self.width()) * u32::from(self.height())
    }

    /// Check if a map cell is within this region
    pub fn contains(&self, x: u8, y: u8) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

impl std::fmt::Display for SpawnRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_point() {
            write!(f, "({},{})", self.x1, self.y1)
        } else {
            write!(f, "({},{})-({},{})", self.x1, self.y1, self.x2, self.y2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_is_degenerate_rectangle() {
        let point = SpawnRegion::point(50, 50);
        assert!(point.is_point());
        assert_eq!(point.cell_count(), 1);
        assert_eq!(point, SpawnRegion::new(50, 50, 50, 50).expect("ordered corners"));
        assert_eq!(point.to_string(), "(50,50)");
    }

    #[test]
    fn test_inverted_corners_are_rejected() {
        assert_eq!(
            SpawnRegion::new(120, 100, 10, 20),
            Err(ConfigurationError::InvalidCoordinate {
                x1: 120,
                y1: 10,
                x2: 100,
                y2: 20
            })
        );
        assert!(SpawnRegion::new(10, 20, 30, 29).is_err());
    }

    #[test]
    fn test_full_map_region() {
        let region = SpawnRegion::new(0, 255, 0, 255).expect("whole map is valid");
        assert_eq!(region.width(), 256);
        assert_eq!(region.cell_count(), 65_536);
        assert!(region.contains(0, 255));
        assert_eq!(region.to_string(), "(0,0)-(255,255)");
    }

    #[test]
    fn test_contains_is_inclusive() {
        let region = SpawnRegion::new(10, 20, 30, 40).expect("ordered corners");
        assert!(region.contains(10, 30));
        assert!(region.contains(20, 40));
        assert!(!region.contains(21, 40));
        assert!(!region.contains(15, 29));
    }

    proptest! {
        #[test]
        fn prop_accepted_regions_are_ordered(x1: u8, x2: u8, y1: u8, y2: u8) {
            match SpawnRegion::new(x1, x2, y1, y2) {
                Ok(region) => {
                    prop_assert!(region.x1() <= region.x2());
                    prop_assert!(region.y1() <= region.y2());
                    prop_assert!(region.contains(x1, y1));
                    prop_assert!(region.contains(x2, y2));
                }
                Err(_) => prop_assert!(x1 > x2 || y1 > y2),
            }
        }
    }
}
