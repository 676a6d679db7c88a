//! Mesh generator
//!
//! Pure functions from shape parameters to `(vertices, indices)`. Positions are
//! homogeneous (`w = 1`), indices are `u16` triangle lists with
//! counter-clockwise winding seen from the visible side. Multi-part meshes
//! are concatenated without welding: each part's indices are offset by the
//! number of vertices already in the mesh.
//!
//! # Module Organization
//!
//! - `furniture` - chair, table and sofa archetypes built from box parts
//!
//! Note: `cube` is the placeholder shape from before the archetypes and is
//! kept for callers that want a plain block.

#![allow(dead_code)]

mod furniture;

pub use furniture::*;

use crate::math::{Vec3, Vec4};

/// Triangle-list geometry handed to the renderer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vec4>,
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as vertex positions
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            [
                self.vertices[tri[0] as usize].truncate(),
                self.vertices[tri[1] as usize].truncate(),
                self.vertices[tri[2] as usize].truncate(),
            ]
        })
    }

    /// Append `part`, offsetting its indices by the current vertex count
    pub fn append(&mut self, part: &MeshData) {
        debug_assert!(self.vertices.len() + part.vertices.len() <= u16::MAX as usize);
        let base = self.vertices.len() as u16;
        self.vertices.extend_from_slice(&part.vertices);
        self.indices.extend(part.indices.iter().map(|i| i + base));
    }

    /// Add a quad `a b c d` (counter-clockwise from the visible side) as two triangles
    fn push_quad(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3) {
        let base = self.vertices.len() as u16;
        self.vertices.extend([a.extend(), b.extend(), c.extend(), d.extend()]);
        self.indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Face table for [`box_mesh`], outward winding. Corners 0-3 walk the min-z
/// face (x0y0, x1y0, x1y1, x0y1), corners 4-7 repeat that walk at max z.
const BOX_INDICES: [u16; 36] = [
    0, 3, 2, 0, 2, 1, // -z
    4, 5, 6, 4, 6, 7, // +z
    0, 4, 7, 0, 7, 3, // -x
    1, 2, 6, 1, 6, 5, // +x
    0, 1, 5, 0, 5, 4, // -y
    3, 7, 6, 3, 6, 2, // +y
];

/// Axis-aligned box between `min` and `max`: 8 vertices, 12 triangles
pub fn box_mesh(min: Vec3, max: Vec3) -> MeshData {
    let vertices = vec![
        Vec4::new(min.x, min.y, min.z, 1.0),
        Vec4::new(max.x, min.y, min.z, 1.0),
        Vec4::new(max.x, max.y, min.z, 1.0),
        Vec4::new(min.x, max.y, min.z, 1.0),
        Vec4::new(min.x, min.y, max.z, 1.0),
        Vec4::new(max.x, min.y, max.z, 1.0),
        Vec4::new(max.x, max.y, max.z, 1.0),
        Vec4::new(min.x, max.y, max.z, 1.0),
    ];
    MeshData {
        vertices,
        indices: BOX_INDICES.to_vec(),
    }
}

/// Flat square on y = 0 centered at the origin, facing +y
pub fn quad(size: f32) -> MeshData {
    let h = size * 0.5;
    let mut mesh = MeshData::new();
    mesh.push_quad(
        Vec3::new(-h, 0.0, -h),
        Vec3::new(-h, 0.0, h),
        Vec3::new(h, 0.0, h),
        Vec3::new(h, 0.0, -h),
    );
    mesh
}

/// Room perimeter: one vertical quad per consecutive corner pair, facing the
/// enclosed area. Corner order may be either orientation.
pub fn walls(corners: [Vec3; 4], height: f32) -> MeshData {
    let center = corners.iter().fold(Vec3::ZERO, |acc, c| acc + *c).scale(0.25);
    let up = Vec3::new(0.0, height, 0.0);

    let mut mesh = MeshData::new();
    for k in 0..corners.len() {
        let a = corners[k];
        let b = corners[(k + 1) % corners.len()];
        let normal = (b - a).cross(up);
        if normal.dot(center - a) >= 0.0 {
            mesh.push_quad(a, b, b + up, a + up);
        } else {
            mesh.push_quad(b, a, a + up, b + up);
        }
    }
    mesh
}

/// Unit cube scaled by `size`, resting on y = 0 (pre-archetype placeholder)
pub fn cube(size: f32) -> MeshData {
    let h = size * 0.5;
    box_mesh(Vec3::new(-h, 0.0, -h), Vec3::new(h, size, h))
}

/// Face normal of a triangle (not normalized)
pub fn triangle_normal(tri: &[Vec3; 3]) -> Vec3 {
    (tri[1] - tri[0]).cross(tri[2] - tri[0])
}
