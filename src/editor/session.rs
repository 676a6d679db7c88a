//! Editor session: selection, menus and the furniture collection
//!
//! The session is the only writer of the furniture list and the tile flags.
//! Every transition runs to completion inside one call, so the frame that
//! follows always sees a consistent state:
//!
//! ```text
//! Idle --click furniture--> FurnitureMenuOpen(id) --recolor--> FurnitureMenuOpen(id)
//!                                                 --delete---> Idle
//! Idle --click tile-------> TileMenuOpen(tile)    --place----> Idle
//! any  --toggle view / cancel----------------------------------> Idle
//! ```
//!
//! Rejected commands (wrong state, unknown furniture) change nothing and are
//! logged at warn level.

use tracing::{debug, info, warn};

use crate::camera::{CameraController, PanDirection, ViewMode};
use crate::picking::{self, Hit, WorldPoint};
use crate::ui::{MenuItem, MenuSurface, Rect};
use crate::world::{
    palette, ColorSource, FurnitureId, FurnitureItem, FurnitureKind, Grid, Rgba, RoomGeometry,
    UnknownFurniture,
};

/// Which menu (if any) is open, and what it is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Idle,
    /// Tile menu open for the tile at this grid index
    TileMenuOpen(usize),
    FurnitureMenuOpen(FurnitureId),
}

/// Why a command was ignored
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    UnknownFurniture(#[from] UnknownFurniture),

    #[error("no tile is selected")]
    NoTileSelected,

    #[error("no furniture is selected")]
    NoFurnitureSelected,

    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
}

/// Menu command ids for the furniture menu
pub mod commands {
    pub const RECOLOR: &str = "recolor";
    pub const DELETE: &str = "delete";
}

/// Items of the tile menu, one per archetype (id = furniture name)
pub fn tile_menu_items() -> Vec<MenuItem> {
    FurnitureKind::ALL
        .iter()
        .map(|kind| MenuItem::new(kind.name(), kind.label()))
        .collect()
}

/// Items of the furniture menu
pub fn furniture_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new(commands::RECOLOR, "Recolor"),
        MenuItem::new(commands::DELETE, "Delete"),
    ]
}

pub struct RoomSession<M: MenuSurface, C: ColorSource> {
    grid: Grid,
    furniture: Vec<FurnitureItem>,
    camera: CameraController,
    interaction: Interaction,
    tile_menu: M,
    furniture_menu: M,
    colors: C,
    next_id: u32,
    pan_speed: f32,
    pub floor_color: Rgba,
    pub wall_color: Rgba,
}

impl<M: MenuSurface, C: ColorSource> RoomSession<M, C> {
    pub fn new(geometry: RoomGeometry, pan_speed: f32, tile_menu: M, furniture_menu: M, colors: C) -> Self {
        info!(
            room_size = geometry.room_size,
            tile_count = geometry.tile_count,
            "starting room session"
        );
        Self {
            camera: CameraController::new(geometry.room_size),
            grid: Grid::new(geometry),
            furniture: Vec::new(),
            interaction: Interaction::Idle,
            tile_menu,
            furniture_menu,
            colors,
            next_id: 0,
            pan_speed,
            floor_color: palette::FLOOR,
            wall_color: palette::WALL,
        }
    }

    // ========================================================================
    // Read access (render loop)
    // ========================================================================

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn geometry(&self) -> &RoomGeometry {
        self.grid.geometry()
    }

    pub fn furniture(&self) -> &[FurnitureItem] {
        &self.furniture
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn tile_menu(&self) -> &M {
        &self.tile_menu
    }

    pub fn furniture_menu(&self) -> &M {
        &self.furniture_menu
    }

    pub fn menu_open(&self) -> bool {
        self.interaction != Interaction::Idle
    }

    pub fn selected_furniture(&self) -> Option<&FurnitureItem> {
        self.furniture.iter().find(|item| item.selected)
    }

    pub fn has_selected_furniture(&self) -> bool {
        self.furniture.iter().any(|item| item.selected)
    }

    /// Floor point under a pointer, following any floor-view pan
    pub fn world_point(&self, x: f32, y: f32, canvas: &Rect) -> WorldPoint {
        let (dx, dz) = self.camera.floor_pan_offset();
        picking::pick(x, y, canvas, self.geometry().room_size).offset(dx, dz)
    }

    // ========================================================================
    // Pointer input
    // ========================================================================

    /// Hover highlight follows the pointer while idle in the floor view
    pub fn pointer_moved(&mut self, x: f32, y: f32, canvas: &Rect) {
        if !self.camera.is_floor_view() || self.menu_open() {
            return;
        }
        let point = self.world_point(x, y, canvas);
        let hovered = picking::hit_tile(point, &self.grid);
        self.grid.set_hovered(hovered);
    }

    /// Click on the canvas. Only acts while idle in the floor view.
    pub fn pointer_clicked(&mut self, x: f32, y: f32, canvas: &Rect) -> Option<Hit> {
        if !self.camera.is_floor_view() {
            debug!("click ignored outside floor view");
            return None;
        }
        if self.menu_open() {
            debug!(state = ?self.interaction, "click ignored while a menu is open");
            return None;
        }

        let point = self.world_point(x, y, canvas);
        let hit = picking::hit_test(point, &self.furniture, &self.grid)?;
        match hit {
            Hit::Furniture(id) => self.open_furniture_menu(id, x, y),
            Hit::Tile(index) => self.open_tile_menu(index, x, y),
        }
        Some(hit)
    }

    fn open_furniture_menu(&mut self, id: FurnitureId, x: f32, y: f32) {
        for item in &mut self.furniture {
            item.selected = item.id == id;
        }
        self.grid.clear_hover();
        self.furniture_menu.show_at(x, y);
        self.interaction = Interaction::FurnitureMenuOpen(id);
        debug!(?id, "furniture menu opened");
    }

    fn open_tile_menu(&mut self, index: usize, x: f32, y: f32) {
        self.grid.clear_hover();
        self.grid.set_menu_target(Some(index));
        self.tile_menu.show_at(x, y);
        self.interaction = Interaction::TileMenuOpen(index);
        debug!(tile = index, "tile menu opened");
    }

    // ========================================================================
    // Menu commands
    // ========================================================================

    /// Place a new item of the named kind on the tile menu's tile
    pub fn place_furniture(&mut self, name: &str) -> Result<FurnitureId, CommandError> {
        let result = self.try_place_furniture(name);
        if let Err(ref e) = result {
            warn!(error = %e, name, "place_furniture rejected");
        }
        result
    }

    fn try_place_furniture(&mut self, name: &str) -> Result<FurnitureId, CommandError> {
        let Interaction::TileMenuOpen(index) = self.interaction else {
            return Err(CommandError::NoTileSelected);
        };
        let kind: FurnitureKind = name.parse()?;
        let tile = self.grid.get(index).ok_or(CommandError::NoTileSelected)?;

        let id = FurnitureId(self.next_id);
        self.next_id += 1;
        let position = tile.position;
        self.furniture.push(FurnitureItem::new(id, kind, position));

        self.grid.set_menu_target(None);
        self.tile_menu.hide();
        self.interaction = Interaction::Idle;
        info!(?id, %kind, x = position.x, z = position.z, "furniture placed");
        Ok(id)
    }

    /// Give the selected item a new random color; its menu stays open
    pub fn recolor_selected_furniture(&mut self) -> Result<Rgba, CommandError> {
        let Some(item) = self.furniture.iter_mut().find(|item| item.selected) else {
            warn!("recolor rejected: no furniture selected");
            return Err(CommandError::NoFurnitureSelected);
        };
        item.color = self.colors.next_color();
        debug!(id = ?item.id, "furniture recolored");
        Ok(item.color)
    }

    /// Remove the selected item and close its menu
    pub fn delete_selected_furniture(&mut self) -> Result<FurnitureItem, CommandError> {
        let Some(pos) = self.furniture.iter().position(|item| item.selected) else {
            warn!("delete rejected: no furniture selected");
            return Err(CommandError::NoFurnitureSelected);
        };
        let removed = self.furniture.remove(pos);
        self.furniture_menu.hide();
        self.interaction = Interaction::Idle;
        info!(id = ?removed.id, kind = %removed.kind, "furniture deleted");
        Ok(removed)
    }

    /// Dispatch a clicked menu item id
    pub fn run_menu_command(&mut self, id: &str) -> Result<(), CommandError> {
        match id {
            commands::RECOLOR => self.recolor_selected_furniture().map(|_| ()),
            commands::DELETE => self.delete_selected_furniture().map(|_| ()),
            name => self.place_furniture(name).map(|_| ()),
        }
    }

    // ========================================================================
    // View and room commands
    // ========================================================================

    /// Drop every selection flag and close both menus
    pub fn cancel(&mut self) {
        self.grid.clear_hover();
        self.grid.set_menu_target(None);
        for item in &mut self.furniture {
            item.selected = false;
        }
        self.tile_menu.hide();
        self.furniture_menu.hide();
        self.interaction = Interaction::Idle;
    }

    /// Switch camera preset. Leaves any in-progress interaction.
    pub fn toggle_view(&mut self) -> ViewMode {
        self.cancel();
        let mode = self.camera.toggle_view();
        info!(?mode, "view toggled");
        mode
    }

    pub fn pan(&mut self, direction: PanDirection) {
        self.camera.pan(direction, self.pan_speed);
    }

    pub fn randomize_floor_color(&mut self) -> Rgba {
        self.floor_color = self.colors.next_color();
        self.floor_color
    }

    pub fn randomize_wall_color(&mut self) -> Rgba {
        self.wall_color = self.colors.next_color();
        self.wall_color
    }

    /// Dispatch a keyboard action id (see `editor::actions`)
    pub fn apply_action(&mut self, id: &str) -> Result<(), CommandError> {
        match id {
            "view.pan_forward" => self.pan(PanDirection::Forward),
            "view.pan_back" => self.pan(PanDirection::Back),
            "view.pan_left" => self.pan(PanDirection::Left),
            "view.pan_right" => self.pan(PanDirection::Right),
            "view.toggle" => {
                self.toggle_view();
            }
            "room.floor_color" => {
                self.randomize_floor_color();
            }
            "room.wall_color" => {
                self.randomize_wall_color();
            }
            "menu.cancel" => self.cancel(),
            "furniture.delete" => {
                self.delete_selected_furniture()?;
            }
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::ViewPreset;
    use crate::math::Vec3;
    use crate::world::FixedColors;

    /// Records show/hide calls
    #[derive(Debug, Default)]
    struct RecordingMenu {
        shown_at: Option<(f32, f32)>,
        visible: bool,
        show_calls: usize,
    }

    impl MenuSurface for RecordingMenu {
        fn show_at(&mut self, x: f32, y: f32) {
            self.shown_at = Some((x, y));
            self.visible = true;
            self.show_calls += 1;
        }

        fn hide(&mut self) {
            self.visible = false;
        }
    }

    const RED: Rgba = Rgba::rgb(1.0, 0.0, 0.0);
    const GREEN: Rgba = Rgba::rgb(0.0, 1.0, 0.0);

    /// 800x800 canvas over a 20x20 room: 40 px per world unit
    const CANVAS: Rect = Rect::new(0.0, 0.0, 800.0, 800.0);

    type Session = RoomSession<RecordingMenu, FixedColors>;

    fn session() -> Session {
        RoomSession::new(
            RoomGeometry::new(20.0, 15, 3.0).unwrap(),
            0.3,
            RecordingMenu::default(),
            RecordingMenu::default(),
            FixedColors::new(vec![RED, GREEN]),
        )
    }

    /// Screen position of a world point on CANVAS
    fn screen(x: f32, z: f32) -> (f32, f32) {
        ((x + 10.0) * 40.0, (z + 10.0) * 40.0)
    }

    fn click_tile(s: &mut Session, i: u32, j: u32) -> usize {
        let index = s.grid().index_of(i, j).unwrap();
        let p = s.grid().tiles()[index].position;
        let (x, y) = screen(p.x, p.z);
        assert_eq!(s.pointer_clicked(x, y, &CANVAS), Some(Hit::Tile(index)));
        index
    }

    fn place_at(s: &mut Session, i: u32, j: u32, name: &str) -> FurnitureId {
        click_tile(s, i, j);
        s.place_furniture(name).unwrap()
    }

    fn click_furniture(s: &mut Session, id: FurnitureId) {
        let p = s.furniture().iter().find(|f| f.id == id).unwrap().position;
        let (x, y) = screen(p.x, p.z);
        assert_eq!(s.pointer_clicked(x, y, &CANVAS), Some(Hit::Furniture(id)));
    }

    fn assert_invariants(s: &Session) {
        let targets = s.grid().tiles().iter().filter(|t| t.is_menu_target).count();
        let selected: Vec<_> = s.furniture().iter().filter(|f| f.selected).map(|f| f.id).collect();
        assert!(s.grid().tiles().iter().filter(|t| t.hovered).count() <= 1);
        match s.interaction() {
            Interaction::Idle => {
                assert_eq!(targets, 0);
                assert!(selected.is_empty());
                assert!(!s.tile_menu().visible && !s.furniture_menu().visible);
            }
            Interaction::TileMenuOpen(index) => {
                assert_eq!(s.grid().menu_target(), Some(index));
                assert_eq!(targets, 1);
                assert!(s.tile_menu().visible && !s.furniture_menu().visible);
            }
            Interaction::FurnitureMenuOpen(id) => {
                assert_eq!(selected, vec![id]);
                assert_eq!(targets, 0);
                assert!(s.furniture_menu().visible && !s.tile_menu().visible);
            }
        }
    }

    #[test]
    fn test_click_tile_opens_menu() {
        let mut s = session();
        let index = click_tile(&mut s, 3, 4);

        assert_eq!(s.interaction(), Interaction::TileMenuOpen(index));
        assert!(s.furniture().is_empty());
        let (x, y) = screen(s.grid().tiles()[index].position.x, s.grid().tiles()[index].position.z);
        assert_eq!(s.tile_menu().shown_at, Some((x, y)));
        assert_invariants(&s);
    }

    #[test]
    fn test_place_table() {
        let mut s = session();
        let index = click_tile(&mut s, 2, 5);
        let tile = s.grid().tiles()[index].position;

        let id = s.place_furniture("table").unwrap();

        assert_eq!(s.furniture().len(), 1);
        let item = &s.furniture()[0];
        assert_eq!(item.id, id);
        assert_eq!(item.kind, FurnitureKind::Table);
        assert_eq!(item.size, 1.5);
        assert_eq!(item.position, Vec3::new(tile.x, 0.0, tile.z));
        assert!(!item.selected);
        assert_eq!(item.color, palette::FURNITURE);
        assert!(!s.grid().tiles()[index].is_menu_target);
        assert_eq!(s.interaction(), Interaction::Idle);
        assert_invariants(&s);
    }

    #[test]
    fn test_place_unknown_type() {
        let mut s = session();
        let index = click_tile(&mut s, 1, 1);

        let result = s.place_furniture("lamp");
        assert_eq!(result, Err(CommandError::UnknownFurniture(UnknownFurniture("lamp".to_string()))));
        assert!(s.furniture().is_empty());
        assert_eq!(s.interaction(), Interaction::TileMenuOpen(index));
        assert!(s.tile_menu().visible);
        assert_invariants(&s);

        // A valid choice afterwards still works
        assert!(s.place_furniture("chair").is_ok());
        assert_eq!(s.furniture().len(), 1);
    }

    #[test]
    fn test_place_without_tile() {
        let mut s = session();
        assert_eq!(s.place_furniture("chair"), Err(CommandError::NoTileSelected));
        assert!(s.furniture().is_empty());
        assert_invariants(&s);
    }

    #[test]
    fn test_click_furniture_selects_it() {
        let mut s = session();
        let a = place_at(&mut s, 2, 2, "chair");
        let b = place_at(&mut s, 10, 10, "sofa");

        click_furniture(&mut s, b);
        assert_eq!(s.interaction(), Interaction::FurnitureMenuOpen(b));
        assert_eq!(s.selected_furniture().map(|f| f.id), Some(b));
        assert_invariants(&s);

        // Selection only moves after the menu is dismissed
        s.cancel();
        click_furniture(&mut s, a);
        assert_eq!(s.selected_furniture().map(|f| f.id), Some(a));
        assert_invariants(&s);
    }

    #[test]
    fn test_furniture_wins_over_tile() {
        let mut s = session();
        let id = place_at(&mut s, 7, 7, "chair");
        let tile = s.grid().tile_at(7, 7).unwrap().position;
        let (x, y) = screen(tile.x, tile.z);

        assert_eq!(s.pointer_clicked(x, y, &CANVAS), Some(Hit::Furniture(id)));
    }

    #[test]
    fn test_recolor_keeps_menu_open() {
        let mut s = session();
        let id = place_at(&mut s, 4, 4, "chair");
        click_furniture(&mut s, id);

        assert_eq!(s.recolor_selected_furniture(), Ok(RED));
        assert_eq!(s.recolor_selected_furniture(), Ok(GREEN));
        assert_eq!(s.furniture()[0].color, GREEN);
        assert_eq!(s.interaction(), Interaction::FurnitureMenuOpen(id));
        assert_invariants(&s);
    }

    #[test]
    fn test_recolor_without_selection() {
        let mut s = session();
        place_at(&mut s, 4, 4, "chair");
        assert_eq!(s.recolor_selected_furniture(), Err(CommandError::NoFurnitureSelected));
        assert_eq!(s.furniture()[0].color, palette::FURNITURE);
    }

    #[test]
    fn test_delete_selected() {
        let mut s = session();
        let a = place_at(&mut s, 1, 1, "chair");
        let b = place_at(&mut s, 5, 5, "table");
        let c = place_at(&mut s, 9, 9, "sofa");

        click_furniture(&mut s, b);
        let removed = s.delete_selected_furniture().unwrap();

        assert_eq!(removed.id, b);
        let ids: Vec<_> = s.furniture().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert_eq!(s.interaction(), Interaction::Idle);
        assert_invariants(&s);
    }

    #[test]
    fn test_delete_without_selection() {
        let mut s = session();
        place_at(&mut s, 1, 1, "chair");
        assert_eq!(s.delete_selected_furniture(), Err(CommandError::NoFurnitureSelected));
        assert_eq!(s.furniture().len(), 1);
    }

    #[test]
    fn test_ids_not_reused() {
        let mut s = session();
        let a = place_at(&mut s, 1, 1, "chair");
        click_furniture(&mut s, a);
        s.delete_selected_furniture().unwrap();
        let b = place_at(&mut s, 1, 1, "chair");
        assert_ne!(a, b);
    }

    #[test]
    fn test_clicks_ignored_while_menu_open() {
        let mut s = session();
        let index = click_tile(&mut s, 3, 3);
        let (x, y) = screen(5.0, 5.0);
        assert_eq!(s.pointer_clicked(x, y, &CANVAS), None);
        assert_eq!(s.interaction(), Interaction::TileMenuOpen(index));
        assert_eq!(s.tile_menu().show_calls, 1);
    }

    #[test]
    fn test_toggle_view_clears_everything() {
        let mut s = session();
        let id = place_at(&mut s, 6, 6, "table");
        click_furniture(&mut s, id);
        let floor = *s.camera().active();

        assert_eq!(s.toggle_view(), ViewMode::Walk);
        assert_eq!(s.interaction(), Interaction::Idle);
        assert!(!s.has_selected_furniture());
        assert_eq!(*s.camera().active(), ViewPreset::walk());
        assert_invariants(&s);

        assert_walk_view_ignores_pointer(&mut s);

        assert_eq!(s.toggle_view(), ViewMode::Floor);
        assert_eq!(*s.camera().active(), floor);
        assert_eq!(s.interaction(), Interaction::Idle);
        assert_invariants(&s);
    }

    fn assert_walk_view_ignores_pointer(s: &mut Session) {
        let (x, y) = screen(0.0, 0.0);
        assert_eq!(s.pointer_clicked(x, y, &CANVAS), None);
        s.pointer_moved(x, y, &CANVAS);
        assert_eq!(s.grid().hovered(), None);
        assert_eq!(s.interaction(), Interaction::Idle);
    }

    #[test]
    fn test_toggle_view_closes_tile_menu() {
        let mut s = session();
        click_tile(&mut s, 0, 0);
        s.toggle_view();
        assert_eq!(s.grid().menu_target(), None);
        assert!(!s.tile_menu().visible);
        assert_eq!(s.place_furniture("chair"), Err(CommandError::NoTileSelected));
    }

    #[test]
    fn test_hover_follows_pointer() {
        let mut s = session();
        let a = s.grid().tile_at(0, 0).unwrap().position;
        let b = s.grid().tile_at(14, 14).unwrap().position;

        let (x, y) = screen(a.x, a.z);
        s.pointer_moved(x, y, &CANVAS);
        assert_eq!(s.grid().hovered(), s.grid().index_of(0, 0));

        let (x, y) = screen(b.x, b.z);
        s.pointer_moved(x, y, &CANVAS);
        assert_eq!(s.grid().hovered(), s.grid().index_of(14, 14));
        assert_invariants(&s);

        // Off the canvas: nothing hovered
        s.pointer_moved(-50.0, -50.0, &CANVAS);
        assert_eq!(s.grid().hovered(), None);
    }

    #[test]
    fn test_hover_suppressed_while_menu_open() {
        let mut s = session();
        let target = click_tile(&mut s, 2, 2);
        assert_eq!(s.grid().hovered(), None);

        let other = s.grid().tile_at(9, 9).unwrap().position;
        let (x, y) = screen(other.x, other.z);
        s.pointer_moved(x, y, &CANVAS);

        assert_eq!(s.grid().hovered(), None);
        assert_eq!(s.grid().menu_target(), Some(target));
    }

    #[test]
    fn test_pick_follows_floor_pan() {
        let mut s = session();
        // Pan the floor view one tile-ish to the right
        for _ in 0..5 {
            s.pan(PanDirection::Right);
        }
        let center = s.world_point(400.0, 400.0, &CANVAS);
        assert!((center.x - 1.5).abs() < 0.0001);
        assert!(center.z.abs() < 0.0001);
    }

    #[test]
    fn test_cancel_closes_menu() {
        let mut s = session();
        click_tile(&mut s, 2, 2);
        s.apply_action("menu.cancel").unwrap();
        assert_eq!(s.interaction(), Interaction::Idle);
        assert_invariants(&s);
    }

    #[test]
    fn test_room_colors() {
        let mut s = session();
        s.apply_action("room.floor_color").unwrap();
        s.apply_action("room.wall_color").unwrap();
        assert_eq!(s.floor_color, RED);
        assert_eq!(s.wall_color, GREEN);
    }

    #[test]
    fn test_menu_commands_dispatch() {
        let mut s = session();
        click_tile(&mut s, 3, 3);
        s.run_menu_command("sofa").unwrap();
        let id = s.furniture()[0].id;
        assert_eq!(s.furniture()[0].size, 2.0);

        click_furniture(&mut s, id);
        s.run_menu_command(commands::RECOLOR).unwrap();
        s.run_menu_command(commands::DELETE).unwrap();
        assert!(s.furniture().is_empty());
        assert_eq!(s.apply_action("no.such"), Err(CommandError::UnknownCommand("no.such".to_string())));
    }

    #[test]
    fn test_menu_items_match_commands() {
        let ids: Vec<_> = tile_menu_items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["chair", "table", "sofa"]);
        for item in tile_menu_items() {
            assert!(item.id.parse::<FurnitureKind>().is_ok());
        }
        let ids: Vec<_> = furniture_menu_items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![commands::RECOLOR, commands::DELETE]);
    }
}
