//! Placed furniture

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::color::{palette, Rgba};
use crate::math::Vec3;

/// Furniture archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FurnitureKind {
    Chair,
    Table,
    Sofa,
}

impl FurnitureKind {
    pub const ALL: [FurnitureKind; 3] = [FurnitureKind::Chair, FurnitureKind::Table, FurnitureKind::Sofa];

    /// Name used by menus and commands
    pub fn name(&self) -> &'static str {
        match self {
            FurnitureKind::Chair => "chair",
            FurnitureKind::Table => "table",
            FurnitureKind::Sofa => "sofa",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FurnitureKind::Chair => "Chair",
            FurnitureKind::Table => "Table",
            FurnitureKind::Sofa => "Sofa",
        }
    }

    /// Edge of the square hit box a new item of this kind gets
    pub fn default_size(&self) -> f32 {
        match self {
            FurnitureKind::Chair => 1.0,
            FurnitureKind::Table => 1.5,
            FurnitureKind::Sofa => 2.0,
        }
    }
}

impl fmt::Display for FurnitureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown furniture type: {0:?}")]
pub struct UnknownFurniture(pub String);

impl FromStr for FurnitureKind {
    type Err = UnknownFurniture;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FurnitureKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownFurniture(s.to_string()))
    }
}

/// Session-unique identity of a placed item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FurnitureId(pub u32);

/// One placed piece of furniture
#[derive(Debug, Clone, PartialEq)]
pub struct FurnitureItem {
    pub id: FurnitureId,
    pub kind: FurnitureKind,
    /// Floor-level anchor (y = 0)
    pub position: Vec3,
    /// Edge of the square hit box
    pub size: f32,
    pub selected: bool,
    /// Yaw in radians
    pub rotation: f32,
    pub color: Rgba,
}

impl FurnitureItem {
    pub fn new(id: FurnitureId, kind: FurnitureKind, position: Vec3) -> Self {
        Self {
            id,
            kind,
            position,
            size: kind.default_size(),
            selected: false,
            rotation: 0.0,
            color: palette::FURNITURE,
        }
    }

    /// Axis-aligned footprint test on the floor plane
    pub fn contains(&self, x: f32, z: f32) -> bool {
        let half = self.size * 0.5;
        (x - self.position.x).abs() < half && (z - self.position.z).abs() < half
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!("chair".parse::<FurnitureKind>(), Ok(FurnitureKind::Chair));
        assert_eq!("table".parse::<FurnitureKind>(), Ok(FurnitureKind::Table));
        assert_eq!("sofa".parse::<FurnitureKind>(), Ok(FurnitureKind::Sofa));
        assert_eq!(
            "lamp".parse::<FurnitureKind>(),
            Err(UnknownFurniture("lamp".to_string()))
        );
    }

    #[test]
    fn test_default_sizes() {
        assert_eq!(FurnitureKind::Chair.default_size(), 1.0);
        assert_eq!(FurnitureKind::Table.default_size(), 1.5);
        assert_eq!(FurnitureKind::Sofa.default_size(), 2.0);
    }

    #[test]
    fn test_footprint_is_open_box() {
        let item = FurnitureItem::new(FurnitureId(0), FurnitureKind::Chair, Vec3::new(2.0, 0.0, 2.0));
        assert!(item.contains(2.49, 1.51));
        // Boundary is exclusive
        assert!(!item.contains(2.5, 2.0));
        assert!(!item.contains(2.0, 1.5));
    }
}
