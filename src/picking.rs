//! Screen-to-world picking for the floor view
//!
//! The floor view is an orthographic top-down projection that stretches the
//! room over the whole canvas, so a pointer maps to the floor plane with a
//! plain affine transform. Hits are resolved furniture first, then tiles,
//! each by an open axis-aligned box test in insertion order.

use crate::ui::Rect;
use crate::world::{FurnitureId, FurnitureItem, Grid};

/// A point on the floor plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    pub x: f32,
    pub z: f32,
}

impl WorldPoint {
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    pub fn offset(self, dx: f32, dz: f32) -> Self {
        Self::new(self.x + dx, self.z + dz)
    }
}

/// What a pointer landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Furniture(FurnitureId),
    /// Index into the grid's tiles
    Tile(usize),
}

/// Map a pointer position (screen pixels) to the floor plane.
///
/// Canvas left/top edges map to `-room_size/2`, right/bottom to `+room_size/2`.
pub fn pick(pointer_x: f32, pointer_y: f32, canvas: &Rect, room_size: f32) -> WorldPoint {
    let u = (pointer_x - canvas.x) / canvas.w;
    let v = (pointer_y - canvas.y) / canvas.h;
    WorldPoint::new(u * room_size - room_size * 0.5, v * room_size - room_size * 0.5)
}

/// First furniture item (placement order) whose footprint contains `point`
pub fn hit_furniture(point: WorldPoint, furniture: &[FurnitureItem]) -> Option<FurnitureId> {
    furniture
        .iter()
        .find(|item| item.contains(point.x, point.z))
        .map(|item| item.id)
}

/// First tile whose cell contains `point`
pub fn hit_tile(point: WorldPoint, grid: &Grid) -> Option<usize> {
    let half = grid.geometry().tile_size * 0.5;
    grid.tiles().iter().position(|tile| {
        (point.x - tile.position.x).abs() < half && (point.z - tile.position.z).abs() < half
    })
}

/// Resolve a floor point: furniture always wins over the tile beneath it
pub fn hit_test(point: WorldPoint, furniture: &[FurnitureItem], grid: &Grid) -> Option<Hit> {
    hit_furniture(point, furniture)
        .map(Hit::Furniture)
        .or_else(|| hit_tile(point, grid).map(Hit::Tile))
}
