//! roomplan: a top-down room layout editor
//!
//! Lay furniture out on a tiled floor, then walk the room in 3D:
//! - Floor plan view (orthographic, click tiles to place furniture)
//! - Walk view (perspective, WASD to move)
//! - Context menus for placing, recoloring and deleting furniture

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod camera;
mod config;
mod editor;
mod math;
mod mesh;
mod picking;
mod render;
mod ui;
mod world;

use std::sync::OnceLock;

use macroquad::prelude::{clear_background, next_frame, screen_height, screen_width, Conf};
use tracing::{debug, error, info};

use config::RoomConfig;
use editor::{build_context, create_room_actions, furniture_menu_items, tile_menu_items, RoomSession};
use render::{draw_room, draw_status_bar, status_line, SceneMeshes};
use ui::{draw_context_menu, ContextMenu, MouseState, Rect, BG_COLOR, STATUS_BAR_HEIGHT};
use world::{RoomGeometry, SeededColors};

/// Gap between the window edge and the square canvas
const CANVAS_PADDING: f32 = 8.0;

/// wasm32-unknown-unknown has no system clock; `SystemTime::now` panics there
const LOG_TIMESTAMPS: bool = cfg!(not(target_arch = "wasm32"));

/// Formatting subscriber, with or without timestamps
fn log_subscriber(timestamps: bool) -> Box<dyn tracing::Subscriber + Send + Sync> {
    if timestamps {
        Box::new(tracing_subscriber::fmt().finish())
    } else {
        Box::new(tracing_subscriber::fmt().without_time().finish())
    }
}

fn init_logging() {
    if let Err(e) = tracing::subscriber::set_global_default(log_subscriber(LOG_TIMESTAMPS)) {
        eprintln!("logging already initialized: {}", e);
    }
}

/// Config is needed by `window_conf` before `main` runs, so load it once here.
/// Logging is initialized first so config diagnostics are not lost.
fn app_config() -> &'static RoomConfig {
    static CONFIG: OnceLock<RoomConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        init_logging();
        RoomConfig::load_or_default()
    })
}

fn window_conf() -> Conf {
    let config = app_config();
    Conf {
        window_title: format!("roomplan v{}", VERSION),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: true,
        ..Default::default()
    }
}

/// Seed for color randomization when the config does not pin one
fn clock_seed() -> u64 {
    (macroquad::miniquad::date::now() * 1000.0) as u64
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = app_config();

    let geometry = match RoomGeometry::from_config(config) {
        Ok(geometry) => geometry,
        Err(e) => {
            error!(error = %e, "cannot build room");
            return;
        }
    };

    let seed = config.color_seed.unwrap_or_else(clock_seed);
    info!(seed, version = VERSION, "roomplan starting");

    let mut session = RoomSession::new(
        geometry,
        config.pan_speed,
        ContextMenu::new("Place", tile_menu_items()),
        ContextMenu::new("Furniture", furniture_menu_items()),
        SeededColors::new(seed),
    );
    let meshes = SceneMeshes::new(session.geometry());
    let actions = create_room_actions();
    let hint = actions.tooltip("view.toggle");
    let mut mouse = MouseState::default();

    loop {
        let screen = Rect::screen(screen_width(), screen_height());
        let status_rect = screen.slice_bottom(STATUS_BAR_HEIGHT);
        let canvas = screen
            .remaining_after_bottom(STATUS_BAR_HEIGHT)
            .pad(CANVAS_PADDING)
            .centered_square();

        mouse = MouseState::poll(&mouse);

        // Keyboard
        let ctx = build_context(&session);
        for id in actions.process_triggers(&ctx) {
            if let Err(e) = session.apply_action(id) {
                debug!(action = id, error = %e, "action ignored");
            }
        }

        // Open menus take the click before the canvas does
        if mouse.left_pressed {
            let over_menu = session.tile_menu().contains(mouse.x, mouse.y, &canvas)
                || session.furniture_menu().contains(mouse.x, mouse.y, &canvas);
            let item = session
                .tile_menu()
                .item_at(mouse.x, mouse.y, &canvas)
                .or_else(|| session.furniture_menu().item_at(mouse.x, mouse.y, &canvas));

            if let Some(id) = item {
                if let Err(e) = session.run_menu_command(id) {
                    debug!(command = id, error = %e, "menu command ignored");
                }
            } else if !over_menu && canvas.contains(mouse.x, mouse.y) {
                session.pointer_clicked(mouse.x, mouse.y, &canvas);
            }
        }
        if mouse.moved {
            session.pointer_moved(mouse.x, mouse.y, &canvas);
        }

        // Draw
        clear_background(BG_COLOR);
        draw_room(&session, &meshes, &canvas, screen.h);
        draw_context_menu(session.tile_menu(), &mouse, &canvas);
        draw_context_menu(session.furniture_menu(), &mouse, &canvas);
        draw_status_bar(&status_rect, &status_line(&session), &hint);

        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untimed_subscriber_logs() {
        // The wasm configuration must format events without reading the clock
        tracing::subscriber::with_default(log_subscriber(false), || {
            tracing::info!(room_size = 20.0, "untimed event");
        });
    }

    #[test]
    fn test_native_logs_have_timestamps() {
        assert!(LOG_TIMESTAMPS);
    }
}
