//! Camera controller
//!
//! Two named view presets, the overhead floor view used for planning and the
//! eye-level walk view. Only one is active; panning moves the active preset's
//! eye and look-at point together so the view direction never changes.

#![allow(dead_code)]

use crate::math::Vec3;

/// Walk view defaults (eye height 1, five units back from the origin)
pub const WALK_EYE: Vec3 = Vec3::new(0.0, 1.0, 5.0);
pub const WALK_AT: Vec3 = Vec3::new(0.0, 1.0, 0.0);
/// Vertical field of view of the walk view, degrees
pub const WALK_FOV_DEG: f32 = 60.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 100.0;

/// World units per pan keypress
pub const DEFAULT_PAN_SPEED: f32 = 0.3;

/// Eye/look-at/up triple for one view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPreset {
    pub eye: Vec3,
    pub at: Vec3,
    pub up: Vec3,
}

impl ViewPreset {
    /// Straight down onto the floor, screen-up = -Z, screen-right = +X
    pub fn floor(room_size: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, room_size, 0.0),
            at: Vec3::ZERO,
            up: Vec3::new(0.0, 0.0, -1.0),
        }
    }

    pub fn walk() -> Self {
        Self {
            eye: WALK_EYE,
            at: WALK_AT,
            up: Vec3::UP,
        }
    }

    /// Normalized look direction
    pub fn forward(&self) -> Vec3 {
        (self.at - self.eye).normalize()
    }

    fn translate(&mut self, delta: Vec3) {
        self.eye = self.eye + delta;
        self.at = self.at + delta;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Floor,
    Walk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Forward,
    Back,
    Left,
    Right,
}

impl PanDirection {
    /// World-space offset for one step of `speed`
    pub fn delta(self, speed: f32) -> Vec3 {
        match self {
            PanDirection::Forward => Vec3::new(0.0, 0.0, -speed),
            PanDirection::Back => Vec3::new(0.0, 0.0, speed),
            PanDirection::Left => Vec3::new(-speed, 0.0, 0.0),
            PanDirection::Right => Vec3::new(speed, 0.0, 0.0),
        }
    }
}

/// Owns both presets and which one is active
#[derive(Debug, Clone)]
pub struct CameraController {
    floor_view: ViewPreset,
    walk_view: ViewPreset,
    floor_home: ViewPreset,
    is_floor_view: bool,
    /// Vertical extent of the orthographic floor view
    pub room_size: f32,
}

impl CameraController {
    /// Starts in the floor view
    pub fn new(room_size: f32) -> Self {
        let floor_view = ViewPreset::floor(room_size);
        Self {
            floor_view,
            walk_view: ViewPreset::walk(),
            floor_home: floor_view,
            is_floor_view: true,
            room_size,
        }
    }

    pub fn is_floor_view(&self) -> bool {
        self.is_floor_view
    }

    pub fn mode(&self) -> ViewMode {
        if self.is_floor_view {
            ViewMode::Floor
        } else {
            ViewMode::Walk
        }
    }

    pub fn active(&self) -> &ViewPreset {
        if self.is_floor_view {
            &self.floor_view
        } else {
            &self.walk_view
        }
    }

    pub fn preset(&self, mode: ViewMode) -> &ViewPreset {
        match mode {
            ViewMode::Floor => &self.floor_view,
            ViewMode::Walk => &self.walk_view,
        }
    }

    /// Switch to the other preset. Returns the new mode.
    pub fn toggle_view(&mut self) -> ViewMode {
        self.is_floor_view = !self.is_floor_view;
        self.mode()
    }

    /// Translate the active preset's eye and look-at point by the same offset
    pub fn pan(&mut self, direction: PanDirection, speed: f32) {
        let delta = direction.delta(speed);
        if self.is_floor_view {
            self.floor_view.translate(delta);
        } else {
            self.walk_view.translate(delta);
        }
    }

    /// How far the floor view has been panned from where it started (XZ only)
    pub fn floor_pan_offset(&self) -> (f32, f32) {
        (
            self.floor_view.at.x - self.floor_home.at.x,
            self.floor_view.at.z - self.floor_home.at.z,
        )
    }
}
