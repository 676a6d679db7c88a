//! Room Editor Action Definitions
//!
//! Keyboard actions for the room editor, with their shortcuts and enable
//! conditions. Ids are dispatched by `RoomSession::apply_action`.

use macroquad::prelude::KeyCode;

use super::RoomSession;
use crate::ui::{Action, ActionContext, ActionRegistry, MenuSurface, Shortcut};
use crate::world::ColorSource;

/// Create the action registry for the room editor
pub fn create_room_actions() -> ActionRegistry {
    let mut registry = ActionRegistry::new();

    // ========================================================================
    // View Actions
    // ========================================================================
    registry.register(
        Action::new("view.pan_forward")
            .label("Pan Forward")
            .shortcut(Shortcut::key(KeyCode::W))
            .status_tip("Move the camera toward the far wall"),
    );

    registry.register(
        Action::new("view.pan_back")
            .label("Pan Back")
            .shortcut(Shortcut::key(KeyCode::S))
            .status_tip("Move the camera toward the near wall"),
    );

    registry.register(
        Action::new("view.pan_left")
            .label("Pan Left")
            .shortcut(Shortcut::key(KeyCode::A)),
    );

    registry.register(
        Action::new("view.pan_right")
            .label("Pan Right")
            .shortcut(Shortcut::key(KeyCode::D)),
    );

    registry.register(
        Action::new("view.toggle")
            .label("Toggle View")
            .shortcut(Shortcut::key(KeyCode::V))
            .status_tip("Switch between floor plan and walk view"),
    );

    // ========================================================================
    // Room Actions
    // ========================================================================
    registry.register(
        Action::new("room.floor_color")
            .label("Floor Color")
            .shortcut(Shortcut::key(KeyCode::F))
            .status_tip("Pick a random floor color"),
    );

    registry.register(
        Action::new("room.wall_color")
            .label("Wall Color")
            .shortcut(Shortcut::key(KeyCode::C))
            .status_tip("Pick a random wall color"),
    );

    // ========================================================================
    // Menu / Furniture Actions
    // ========================================================================
    registry.register(
        Action::new("menu.cancel")
            .label("Close Menu")
            .shortcut(Shortcut::key(KeyCode::Escape))
            .enabled_when(|ctx| ctx.menu_open),
    );

    registry.register(
        Action::new("furniture.delete")
            .label("Delete Furniture")
            .shortcut(Shortcut::key(KeyCode::Delete))
            .status_tip("Delete the selected furniture")
            .enabled_when(|ctx| ctx.has_selection),
    );

    registry
}

/// Build an ActionContext from the current session
pub fn build_context<M: MenuSurface, C: ColorSource>(session: &RoomSession<M, C>) -> ActionContext {
    ActionContext {
        menu_open: session.menu_open(),
        has_selection: session.has_selected_furniture(),
    }
}
