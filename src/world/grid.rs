//! Room geometry and the floor tile lattice
//!
//! The lattice is built once per session and never resized. Tile centers are
//! offset by half a tile so the grid is centered on the room origin:
//! `x = -room_size/2 + i*tile_size + tile_size/2` (same for z with j).

use crate::config::{ConfigError, RoomConfig};
use crate::math::Vec3;

/// Fixed dimensions of the room, decided at session start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomGeometry {
    pub room_size: f32,
    pub tile_count: u32,
    pub tile_size: f32,
    pub wall_height: f32,
}

impl RoomGeometry {
    pub fn new(room_size: f32, tile_count: u32, wall_height: f32) -> Result<Self, ConfigError> {
        if !room_size.is_finite() || room_size <= 0.0 {
            return Err(ConfigError::Validation(format!("room_size must be positive, got {}", room_size)));
        }
        if tile_count == 0 {
            return Err(ConfigError::Validation("tile_count must be at least 1".to_string()));
        }
        Ok(Self {
            room_size,
            tile_count,
            tile_size: room_size / tile_count as f32,
            wall_height,
        })
    }

    pub fn from_config(config: &RoomConfig) -> Result<Self, ConfigError> {
        Self::new(config.room_size, config.tile_count, config.wall_height)
    }

    /// Half the room edge (the room spans `[-half_extent, half_extent]` on X and Z)
    pub fn half_extent(&self) -> f32 {
        self.room_size * 0.5
    }

    /// Floor-level corners of the room, counter-clockwise seen from above
    pub fn corners(&self) -> [Vec3; 4] {
        let h = self.half_extent();
        [
            Vec3::new(-h, 0.0, -h),
            Vec3::new(-h, 0.0, h),
            Vec3::new(h, 0.0, h),
            Vec3::new(h, 0.0, -h),
        ]
    }

    /// Center of lattice cell (i, j)
    pub fn tile_center(&self, i: u32, j: u32) -> Vec3 {
        let half = self.half_extent();
        let half_tile = self.tile_size * 0.5;
        Vec3::new(
            -half + i as f32 * self.tile_size + half_tile,
            0.0,
            -half + j as f32 * self.tile_size + half_tile,
        )
    }
}

/// One floor cell
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub i: u32,
    pub j: u32,
    /// Center on the floor plane (y = 0)
    pub position: Vec3,
    /// Pointer is over this tile (highlight only)
    pub hovered: bool,
    /// Tile menu is anchored to this tile
    pub is_menu_target: bool,
}

/// Build the `tile_count²` tiles of a room, `i` outer and `j` inner.
///
/// Panics on `tile_count == 0`; callers go through [`RoomGeometry::new`].
pub fn build_grid(room_size: f32, tile_count: u32) -> Vec<Tile> {
    assert!(tile_count > 0, "tile_count must be positive");
    let tile_size = room_size / tile_count as f32;
    let half = room_size * 0.5;

    let mut tiles = Vec::with_capacity((tile_count * tile_count) as usize);
    for i in 0..tile_count {
        for j in 0..tile_count {
            tiles.push(Tile {
                i,
                j,
                position: Vec3::new(
                    -half + i as f32 * tile_size + tile_size * 0.5,
                    0.0,
                    -half + j as f32 * tile_size + tile_size * 0.5,
                ),
                hovered: false,
                is_menu_target: false,
            });
        }
    }
    tiles
}

/// The room's tile lattice plus its highlight/menu-target flags
#[derive(Debug, Clone)]
pub struct Grid {
    geometry: RoomGeometry,
    tiles: Vec<Tile>,
}

impl Grid {
    pub fn new(geometry: RoomGeometry) -> Self {
        Self {
            tiles: build_grid(geometry.room_size, geometry.tile_count),
            geometry,
        }
    }

    pub fn geometry(&self) -> &RoomGeometry {
        &self.geometry
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Flat index of lattice cell (i, j)
    pub fn index_of(&self, i: u32, j: u32) -> Option<usize> {
        let n = self.geometry.tile_count;
        (i < n && j < n).then(|| (i * n + j) as usize)
    }

    pub fn tile_at(&self, i: u32, j: u32) -> Option<&Tile> {
        self.index_of(i, j).and_then(|idx| self.tiles.get(idx))
    }

    pub fn hovered(&self) -> Option<usize> {
        self.tiles.iter().position(|t| t.hovered)
    }

    pub fn menu_target(&self) -> Option<usize> {
        self.tiles.iter().position(|t| t.is_menu_target)
    }

    /// Highlight exactly one tile (or none)
    pub fn set_hovered(&mut self, index: Option<usize>) {
        for (idx, tile) in self.tiles.iter_mut().enumerate() {
            tile.hovered = Some(idx) == index;
        }
    }

    pub fn clear_hover(&mut self) {
        self.set_hovered(None);
    }

    /// Anchor the tile menu to exactly one tile (or none)
    pub fn set_menu_target(&mut self, index: Option<usize>) {
        for (idx, tile) in self.tiles.iter_mut().enumerate() {
            tile.is_menu_target = Some(idx) == index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 0.0001;

    #[test]
    fn test_tile_count() {
        for n in [1u32, 2, 7, 15, 32] {
            assert_eq!(build_grid(20.0, n).len(), (n * n) as usize);
        }
    }

    #[test]
    fn test_tiles_partition_room() {
        let room_size = 20.0;
        let n = 15;
        let tile_size = room_size / n as f32;
        let tiles = build_grid(room_size, n);

        // Along each axis the boxes must chain edge to edge from -10 to 10
        for axis_j in 0..n {
            let mut row: Vec<&Tile> = tiles.iter().filter(|t| t.j == axis_j).collect();
            row.sort_by(|a, b| a.position.x.partial_cmp(&b.position.x).unwrap());
            let mut edge = -room_size / 2.0;
            for tile in row {
                let min = tile.position.x - tile_size / 2.0;
                let max = tile.position.x + tile_size / 2.0;
                assert!((min - edge).abs() < EPS, "gap or overlap at x={}", edge);
                edge = max;
            }
            assert!((edge - room_size / 2.0).abs() < EPS);
        }

        for axis_i in 0..n {
            let mut col: Vec<&Tile> = tiles.iter().filter(|t| t.i == axis_i).collect();
            col.sort_by(|a, b| a.position.z.partial_cmp(&b.position.z).unwrap());
            let mut edge = -room_size / 2.0;
            for tile in col {
                let min = tile.position.z - tile_size / 2.0;
                assert!((min - edge).abs() < EPS, "gap or overlap at z={}", edge);
                edge = tile.position.z + tile_size / 2.0;
            }
            assert!((edge - room_size / 2.0).abs() < EPS);
        }
    }

    #[test]
    fn test_first_tile_center() {
        let geometry = RoomGeometry::new(20.0, 15, 3.0).unwrap();
        assert!((geometry.tile_size - 1.3333).abs() < 0.001);

        let grid = Grid::new(geometry);
        let first = grid.tile_at(0, 0).unwrap();
        assert!((first.position.x - -9.3333).abs() < 0.001);
        assert!((first.position.z - -9.3333).abs() < 0.001);
        assert_eq!(first.position.y, 0.0);
        assert_eq!(geometry.tile_center(0, 0), first.position);
    }

    #[test]
    fn test_grid_is_centered() {
        let tiles = build_grid(8.0, 4);
        let sum = tiles.iter().fold(Vec3::ZERO, |acc, t| acc + t.position);
        assert!(sum.len() < EPS);
    }

    #[test]
    fn test_geometry_rejects_bad_input() {
        assert!(RoomGeometry::new(20.0, 0, 3.0).is_err());
        assert!(RoomGeometry::new(0.0, 4, 3.0).is_err());
        assert!(RoomGeometry::new(f32::NAN, 4, 3.0).is_err());
    }

    #[test]
    #[should_panic]
    fn test_build_grid_zero_tiles_panics() {
        build_grid(10.0, 0);
    }

    #[test]
    fn test_single_hover() {
        let mut grid = Grid::new(RoomGeometry::new(4.0, 4, 3.0).unwrap());
        grid.set_hovered(Some(3));
        grid.set_hovered(Some(5));
        assert_eq!(grid.tiles().iter().filter(|t| t.hovered).count(), 1);
        assert_eq!(grid.hovered(), Some(5));

        grid.clear_hover();
        assert_eq!(grid.hovered(), None);
    }

    #[test]
    fn test_index_of_bounds() {
        let grid = Grid::new(RoomGeometry::new(4.0, 4, 3.0).unwrap());
        assert_eq!(grid.index_of(1, 2), Some(6));
        assert_eq!(grid.index_of(4, 0), None);
        assert_eq!(grid.tile_at(1, 2).map(|t| (t.i, t.j)), Some((1, 2)));
    }
}
