//! Furniture archetypes
//!
//! Each archetype is a fixed list of boxes in local space: origin at the
//! center of the footprint on the floor, +y up, backrests on the -z side.
//! Geometry depends only on the kind; the renderer scales it by
//! `item.size / kind.default_size()`.

use super::{box_mesh, MeshData};
use crate::math::Vec3;
use crate::world::FurnitureKind;

/// Chair dimensions
pub mod chair {
    pub const HALF_WIDTH: f32 = 0.5;
    pub const SEAT_HEIGHT: f32 = 0.5;
    pub const BACK_HEIGHT: f32 = 1.0;
    pub const BACK_DEPTH: f32 = 0.1;
}

/// Table dimensions
pub mod table {
    pub const HALF_WIDTH: f32 = 0.75;
    /// Underside of the top slab, also the leg height
    pub const TOP_Y: f32 = 0.75;
    pub const TOP_HEIGHT: f32 = 0.1;
    pub const LEG_WIDTH: f32 = 0.1;
}

/// Sofa dimensions
pub mod sofa {
    pub const HALF_WIDTH: f32 = 1.5;
    pub const HALF_DEPTH: f32 = 0.5;
    pub const SEAT_HEIGHT: f32 = 0.45;
    pub const BACK_HEIGHT: f32 = 0.9;
    pub const BACK_DEPTH: f32 = 0.25;
}

/// Local-space box parts `(min, max)` for an archetype
pub fn furniture_parts(kind: FurnitureKind) -> Vec<(Vec3, Vec3)> {
    match kind {
        FurnitureKind::Chair => {
            use self::chair::*;
            vec![
                (
                    Vec3::new(-HALF_WIDTH, 0.0, -HALF_WIDTH),
                    Vec3::new(HALF_WIDTH, SEAT_HEIGHT, HALF_WIDTH),
                ),
                (
                    Vec3::new(-HALF_WIDTH, SEAT_HEIGHT, -HALF_WIDTH),
                    Vec3::new(HALF_WIDTH, BACK_HEIGHT, -HALF_WIDTH + BACK_DEPTH),
                ),
            ]
        }
        FurnitureKind::Table => {
            use self::table::*;
            let mut parts = vec![(
                Vec3::new(-HALF_WIDTH, TOP_Y, -HALF_WIDTH),
                Vec3::new(HALF_WIDTH, TOP_Y + TOP_HEIGHT, HALF_WIDTH),
            )];
            for (sx, sz) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                // Leg flush with the slab's outer corner
                let outer_x = sx * HALF_WIDTH;
                let outer_z = sz * HALF_WIDTH;
                let inner_x = outer_x - sx * LEG_WIDTH;
                let inner_z = outer_z - sz * LEG_WIDTH;
                parts.push((
                    Vec3::new(outer_x.min(inner_x), 0.0, outer_z.min(inner_z)),
                    Vec3::new(outer_x.max(inner_x), TOP_Y, outer_z.max(inner_z)),
                ));
            }
            parts
        }
        FurnitureKind::Sofa => {
            use self::sofa::*;
            vec![
                (
                    Vec3::new(-HALF_WIDTH, 0.0, -HALF_DEPTH),
                    Vec3::new(HALF_WIDTH, SEAT_HEIGHT, HALF_DEPTH),
                ),
                (
                    Vec3::new(-HALF_WIDTH, SEAT_HEIGHT, -HALF_DEPTH),
                    Vec3::new(HALF_WIDTH, BACK_HEIGHT, -HALF_DEPTH + BACK_DEPTH),
                ),
            ]
        }
    }
}

/// Build the archetype mesh for `kind`
pub fn furniture_mesh(kind: FurnitureKind) -> MeshData {
    let mut mesh = MeshData::new();
    for (min, max) in furniture_parts(kind) {
        mesh.append(&box_mesh(min, max));
    }
    mesh
}
