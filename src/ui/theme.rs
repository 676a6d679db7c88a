//! UI Theme - Shared colors and styling constants

use macroquad::prelude::Color;

/// Dark background color
pub const BG_COLOR: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Status bar background
pub const HEADER_COLOR: Color = Color::new(0.15, 0.15, 0.18, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.45, 1.0);

/// Standard content text size
pub const FONT_SIZE_CONTENT: f32 = 16.0;

/// Menu background
pub const MENU_BG: Color = Color::new(0.176, 0.176, 0.196, 0.96);

/// Menu border
pub const MENU_BORDER: Color = Color::new(0.314, 0.314, 0.314, 1.0);

/// Menu item hover background
pub const MENU_HOVER: Color = Color::new(0.235, 0.314, 0.392, 1.0);

/// Menu title text
pub const MENU_TITLE: Color = Color::new(0.55, 0.6, 0.7, 1.0);

/// Height of a menu row (title and items)
pub const MENU_ROW_HEIGHT: f32 = 26.0;

/// Width of a context menu
pub const MENU_WIDTH: f32 = 140.0;

/// Status bar height
pub const STATUS_BAR_HEIGHT: f32 = 24.0;
