//! Render loop helpers: mesh upload, cameras and the status line
//!
//! Geometry is generated once as [`MeshData`] and re-posed every frame by
//! baking the model transform on the CPU. Each triangle gets a single flat
//! shade from a fixed directional light, so the un-textured boxes still read
//! as solids.

use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::{
    draw_rectangle, draw_text, set_camera, set_default_camera, vec3, Camera3D, Color, Projection,
};

use crate::camera::{CameraController, ViewMode, FAR, NEAR, WALK_FOV_DEG};
use crate::editor::{Interaction, RoomSession};
use crate::math::{mat4_model, mat4_transform_point, Mat4, Vec3};
use crate::mesh::{furniture_mesh, quad, triangle_normal, walls, MeshData};
use crate::ui::{MenuSurface, Rect, FONT_SIZE_CONTENT, HEADER_COLOR, TEXT_COLOR, TEXT_DIM};
use crate::world::{palette, ColorSource, FurnitureKind, Rgba, RoomGeometry, Tile};

/// Direction the light travels (pointing down into the room)
const LIGHT_DIR: Vec3 = Vec3::new(-0.3, -1.0, -0.5);
const AMBIENT: f32 = 0.45;

/// Lift tile quads off the floor plane so highlights never z-fight
const TILE_LIFT: f32 = 0.002;

/// Alternate tiles are darkened slightly so the lattice stays visible
const CHECKER_SHADE: f32 = 0.92;

/// Shading intensity for a face normal (need not be normalized)
pub fn shade_intensity(normal: Vec3, light_dir: Vec3, ambient: f32) -> f32 {
    let neg_light_dir = light_dir.normalize().scale(-1.0);
    let diffuse = normal.normalize().dot(neg_light_dir).max(0.0);
    (ambient + (1.0 - ambient) * diffuse).clamp(0.0, 1.0)
}

pub fn to_color(c: Rgba) -> Color {
    Color::new(c.r, c.g, c.b, c.a)
}

/// Draw a mesh posed by `model`, flat shaded in a single base color
pub fn draw_mesh_data(mesh: &MeshData, color: Rgba, model: &Mat4) {
    let mut vertices = Vec::with_capacity(mesh.triangle_count() * 3);
    let mut indices = Vec::with_capacity(mesh.triangle_count() * 3);

    // Un-weld so every triangle can carry its own shade
    for tri in mesh.triangles() {
        let world = tri.map(|v| mat4_transform_point(model, v));
        let shade = shade_intensity(triangle_normal(&world), LIGHT_DIR, AMBIENT);
        let c = to_color(color.shade(shade));
        for p in world {
            indices.push(vertices.len() as u16);
            vertices.push(Vertex::new(p.x, p.y, p.z, 0.0, 0.0, c));
        }
    }

    draw_mesh(&Mesh { vertices, indices, texture: None });
}

/// Base color of a tile: menu target wins over hover
pub fn tile_color(tile: &Tile, floor: Rgba) -> Rgba {
    if tile.is_menu_target {
        palette::TILE_MENU_TARGET
    } else if tile.hovered {
        palette::TILE_HOVER
    } else if (tile.i + tile.j) % 2 == 1 {
        floor.shade(CHECKER_SHADE)
    } else {
        floor
    }
}

/// Build the macroquad camera for the active preset, drawing into `canvas`
pub fn scene_camera(camera: &CameraController, canvas: &Rect, screen_h: f32) -> Camera3D {
    let view = camera.active();
    let (projection, fovy, aspect) = match camera.mode() {
        ViewMode::Floor => (Projection::Orthographics, camera.room_size, 1.0),
        ViewMode::Walk => (Projection::Perspective, WALK_FOV_DEG.to_radians(), canvas.w / canvas.h.max(1.0)),
    };

    Camera3D {
        position: vec3(view.eye.x, view.eye.y, view.eye.z),
        target: vec3(view.at.x, view.at.y, view.at.z),
        up: vec3(view.up.x, view.up.y, view.up.z),
        fovy,
        aspect: Some(aspect),
        projection,
        // GL viewport origin is bottom-left
        viewport: Some((
            canvas.x as i32,
            (screen_h - canvas.bottom()) as i32,
            canvas.w as i32,
            canvas.h as i32,
        )),
        z_near: NEAR,
        z_far: FAR.max(camera.room_size * 2.0),
        ..Default::default()
    }
}

/// Meshes that never change during a session
pub struct SceneMeshes {
    tile: MeshData,
    walls: MeshData,
    furniture: Vec<(FurnitureKind, MeshData)>,
}

impl SceneMeshes {
    pub fn new(geometry: &RoomGeometry) -> Self {
        Self {
            tile: quad(geometry.tile_size),
            walls: walls(geometry.corners(), geometry.wall_height),
            furniture: FurnitureKind::ALL
                .iter()
                .map(|&kind| (kind, furniture_mesh(kind)))
                .collect(),
        }
    }

    fn furniture(&self, kind: FurnitureKind) -> Option<&MeshData> {
        self.furniture.iter().find(|(k, _)| *k == kind).map(|(_, mesh)| mesh)
    }
}

/// Draw the room, its tiles and furniture under the session's camera
pub fn draw_room<M: MenuSurface, C: ColorSource>(
    session: &RoomSession<M, C>,
    meshes: &SceneMeshes,
    canvas: &Rect,
    screen_h: f32,
) {
    set_camera(&scene_camera(session.camera(), canvas, screen_h));

    for tile in session.grid().tiles() {
        let position = tile.position + Vec3::new(0.0, TILE_LIFT, 0.0);
        draw_mesh_data(&meshes.tile, tile_color(tile, session.floor_color), &mat4_model(position, 0.0, 1.0));
    }

    draw_mesh_data(&meshes.walls, session.wall_color, &mat4_model(Vec3::ZERO, 0.0, 1.0));

    for item in session.furniture() {
        let Some(mesh) = meshes.furniture(item.kind) else {
            continue;
        };
        let color = if item.selected { palette::FURNITURE_SELECTED } else { item.color };
        let scale = item.size / item.kind.default_size();
        draw_mesh_data(mesh, color, &mat4_model(item.position, item.rotation, scale));
    }

    set_default_camera();
}

/// One-line summary of the session for the status bar
pub fn status_line<M: MenuSurface, C: ColorSource>(session: &RoomSession<M, C>) -> String {
    let view = match session.camera().mode() {
        ViewMode::Floor => "Floor plan",
        ViewMode::Walk => "Walk view",
    };
    let state = match session.interaction() {
        Interaction::Idle => match session.camera().mode() {
            ViewMode::Floor => "click a tile to place furniture".to_string(),
            ViewMode::Walk => "press V to return to the floor plan".to_string(),
        },
        Interaction::TileMenuOpen(_) => "choose a piece to place (Esc to cancel)".to_string(),
        Interaction::FurnitureMenuOpen(id) => {
            let kind = session.selected_furniture().map_or("item", |item| item.kind.name());
            format!("{} #{} selected (Del to remove, Esc to close)", kind, id.0)
        }
    };
    format!("{} | {} items | {}", view, session.furniture().len(), state)
}

pub fn draw_status_bar(rect: &Rect, text: &str, hint: &str) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, HEADER_COLOR);
    let baseline = rect.y + rect.h * 0.7;
    draw_text(text, rect.x + 8.0, baseline, FONT_SIZE_CONTENT, TEXT_COLOR);
    if !hint.is_empty() {
        let x = rect.right() - 8.0 - hint.len() as f32 * FONT_SIZE_CONTENT * 0.45;
        draw_text(hint, x.max(rect.x + rect.w * 0.5), baseline, FONT_SIZE_CONTENT, TEXT_DIM);
    }
}
