//! Keyboard action registry
//!
//! Maps keyboard shortcuts to named actions with enable conditions, so the
//! frame loop can ask "which actions fired this frame" instead of polling
//! individual keys.
//!
//! # Example
//! ```ignore
//! let mut registry = ActionRegistry::new();
//!
//! registry.register(Action::new("view.toggle")
//!     .label("Toggle View")
//!     .shortcut(Shortcut::key(KeyCode::V))
//!     .status_tip("Switch between floor and walk view"));
//!
//! // In your update loop:
//! for id in registry.process_triggers(&ctx) {
//!     session.apply_action(id)?;
//! }
//! ```

use macroquad::prelude::{is_key_down, is_key_pressed, KeyCode};
use std::collections::HashMap;

/// A keyboard shortcut (key + modifiers)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub key: KeyCode,
    pub ctrl: bool, // Cmd on Mac
    pub shift: bool,
}

impl Shortcut {
    /// Create a shortcut with just a key (no modifiers)
    pub fn key(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    /// Check if this shortcut is currently pressed
    pub fn is_pressed(&self) -> bool {
        if !is_key_pressed(self.key) {
            return false;
        }

        let ctrl_down = is_key_down(KeyCode::LeftControl)
            || is_key_down(KeyCode::RightControl)
            || is_key_down(KeyCode::LeftSuper)
            || is_key_down(KeyCode::RightSuper);
        let shift_down = is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift);

        self.ctrl == ctrl_down && self.shift == shift_down
    }

    /// Format shortcut for display (e.g., "Shift+V")
    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl+");
        }
        if self.shift {
            parts.push("Shift+");
        }
        parts.push(key_name(self.key));
        parts.join("")
    }
}

/// Get a human-readable name for a key
fn key_name(key: KeyCode) -> &'static str {
    match key {
        KeyCode::A => "A",
        KeyCode::C => "C",
        KeyCode::D => "D",
        KeyCode::F => "F",
        KeyCode::S => "S",
        KeyCode::V => "V",
        KeyCode::W => "W",
        KeyCode::Escape => "Esc",
        KeyCode::Delete => "Del",
        KeyCode::Backspace => "Backspace",
        KeyCode::Up => "↑",
        KeyCode::Down => "↓",
        KeyCode::Left => "←",
        KeyCode::Right => "→",
        _ => "?",
    }
}

/// Context for checking action enable/disable conditions
#[derive(Debug, Clone, Default)]
pub struct ActionContext {
    /// A context menu is open
    pub menu_open: bool,
    /// A furniture item is selected
    pub has_selection: bool,
}

/// Type alias for enable condition functions
type EnableFn = fn(&ActionContext) -> bool;

/// Always enabled
fn always_enabled(_: &ActionContext) -> bool {
    true
}

/// A registered action
#[derive(Clone)]
pub struct Action {
    /// Unique identifier (e.g., "view.toggle", "room.floor_color")
    pub id: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Current keyboard shortcut
    pub shortcut: Option<Shortcut>,
    /// Status line tip
    pub status_tip: &'static str,
    /// Function to check if action is enabled
    enabled_fn: EnableFn,
}

impl Action {
    /// Create a new action with the given ID
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            label: "",
            shortcut: None,
            status_tip: "",
            enabled_fn: always_enabled,
        }
    }

    /// Set the display label
    pub fn label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    /// Set the keyboard shortcut
    pub fn shortcut(mut self, shortcut: Shortcut) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    /// Set the status tip
    pub fn status_tip(mut self, tip: &'static str) -> Self {
        self.status_tip = tip;
        self
    }

    /// Set the enable condition
    pub fn enabled_when(mut self, f: EnableFn) -> Self {
        self.enabled_fn = f;
        self
    }

    /// Check if this action is enabled in the given context
    pub fn is_enabled(&self, ctx: &ActionContext) -> bool {
        (self.enabled_fn)(ctx)
    }

    /// Check if this action's shortcut is pressed and action is enabled
    pub fn is_triggered(&self, ctx: &ActionContext) -> bool {
        if !self.is_enabled(ctx) {
            return false;
        }
        self.shortcut.as_ref().map_or(false, |s| s.is_pressed())
    }

    /// Get tooltip with shortcut hint
    pub fn tooltip(&self) -> String {
        let text = if self.status_tip.is_empty() { self.label } else { self.status_tip };
        match self.shortcut {
            Some(ref shortcut) => format!("{} ({})", text, shortcut.display()),
            None => text.to_string(),
        }
    }
}

/// Central registry for all actions
pub struct ActionRegistry {
    actions: HashMap<&'static str, Action>,
    /// Registration order, so triggers fire deterministically
    order: Vec<&'static str>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register an action (re-registering an id replaces it)
    pub fn register(&mut self, action: Action) {
        if !self.actions.contains_key(action.id) {
            self.order.push(action.id);
        }
        self.actions.insert(action.id, action);
    }

    /// Get tooltip for an action
    pub fn tooltip(&self, id: &str) -> String {
        self.actions.get(id).map_or_else(String::new, |a| a.tooltip())
    }

    /// All actions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Action> + '_ {
        self.order.iter().filter_map(|id| self.actions.get(id))
    }

    /// Process all triggered actions this frame, returning their IDs in registration order
    pub fn process_triggers(&self, ctx: &ActionContext) -> Vec<&'static str> {
        self.iter()
            .filter(|a| a.is_triggered(ctx))
            .map(|a| a.id)
            .collect()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
