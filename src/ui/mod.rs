//! Immediate-mode UI pieces for the room editor
//!
//! - Rectangle layout for the canvas and menus
//! - Per-frame pointer sampling
//! - Keyboard action registry
//! - Context menus drawn with macroquad

mod actions;
mod input;
mod menu;
mod rect;
mod theme;

pub use actions::*;
pub use input::*;
pub use menu::*;
pub use rect::*;
pub use theme::*;
