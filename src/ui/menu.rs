//! Context menus anchored to a screen position
//!
//! The editor session only ever asks a menu to appear at a point or to go
//! away ([`MenuSurface`]). [`ContextMenu`] is the on-screen implementation:
//! a titled column of items, kept inside the canvas, reporting which item
//! was clicked.

use macroquad::prelude::*;

use super::theme::*;
use super::{MouseState, Rect};

/// What the editor needs from a menu widget
pub trait MenuSurface {
    fn show_at(&mut self, x: f32, y: f32);
    fn hide(&mut self);
}

/// A single entry in a context menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    /// Command id reported on click
    pub id: &'static str,
    pub label: &'static str,
}

impl MenuItem {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Popup menu state
#[derive(Debug, Clone)]
pub struct ContextMenu {
    pub title: &'static str,
    pub items: Vec<MenuItem>,
    /// Is the menu currently shown?
    pub is_open: bool,
    /// Requested top-left corner (screen pixels)
    pub anchor: (f32, f32),
}

impl ContextMenu {
    pub fn new(title: &'static str, items: Vec<MenuItem>) -> Self {
        Self {
            title,
            items,
            is_open: false,
            anchor: (0.0, 0.0),
        }
    }

    /// Menu frame, moved inside `bounds` when the anchor is near an edge
    pub fn frame(&self, bounds: &Rect) -> Rect {
        let height = MENU_ROW_HEIGHT * (self.items.len() + 1) as f32;
        Rect::new(self.anchor.0, self.anchor.1, MENU_WIDTH, height).clamp_within(bounds)
    }

    /// Row rectangle of each item (below the title row)
    pub fn item_rects(&self, bounds: &Rect) -> Vec<Rect> {
        let frame = self.frame(bounds);
        (0..self.items.len())
            .map(|i| Rect::new(frame.x, frame.y + MENU_ROW_HEIGHT * (i + 1) as f32, frame.w, MENU_ROW_HEIGHT))
            .collect()
    }

    /// Is the point over the open menu?
    pub fn contains(&self, x: f32, y: f32, bounds: &Rect) -> bool {
        self.is_open && self.frame(bounds).contains(x, y)
    }

    /// Item under the point, if the menu is open
    pub fn item_at(&self, x: f32, y: f32, bounds: &Rect) -> Option<&'static str> {
        if !self.is_open {
            return None;
        }
        self.item_rects(bounds)
            .iter()
            .zip(&self.items)
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, item)| item.id)
    }
}

impl MenuSurface for ContextMenu {
    fn show_at(&mut self, x: f32, y: f32) {
        self.anchor = (x, y);
        self.is_open = true;
    }

    fn hide(&mut self) {
        self.is_open = false;
    }
}

/// Draw an open menu, highlighting the row under the pointer.
/// Clicks are resolved separately with [`ContextMenu::item_at`].
pub fn draw_context_menu(menu: &ContextMenu, mouse: &MouseState, bounds: &Rect) {
    if !menu.is_open {
        return;
    }

    let frame = menu.frame(bounds);
    draw_rectangle(frame.x, frame.y, frame.w, frame.h, MENU_BG);
    draw_rectangle_lines(frame.x, frame.y, frame.w, frame.h, 1.0, MENU_BORDER);
    draw_text(menu.title, frame.x + 8.0, frame.y + MENU_ROW_HEIGHT * 0.7, FONT_SIZE_CONTENT, MENU_TITLE);

    for (rect, item) in menu.item_rects(bounds).iter().zip(&menu.items) {
        if mouse.inside(rect) {
            draw_rectangle(rect.x + 1.0, rect.y, rect.w - 2.0, rect.h, MENU_HOVER);
        }
        draw_text(item.label, rect.x + 16.0, rect.y + rect.h * 0.7, FONT_SIZE_CONTENT, TEXT_COLOR);
    }
}
