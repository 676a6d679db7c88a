//! Pointer state sampled once per frame

use macroquad::prelude::{is_mouse_button_pressed, mouse_position, MouseButton};

use super::Rect;

/// Mouse state for the current frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_pressed: bool, // Just pressed this frame
    pub moved: bool,        // Position differs from last frame
}

impl MouseState {
    /// Sample macroquad's pointer, comparing against last frame's sample
    pub fn poll(previous: &MouseState) -> Self {
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            moved: x != previous.x || y != previous.y,
        }
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }
}
