//! RGBA colors and the randomness behind recoloring
//!
//! Recolor and the floor/wall color keys draw from a [`ColorSource`] owned by
//! the session, so tests can substitute a fixed sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Linear RGBA, each channel in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Scale RGB (alpha untouched), used for highlight shading
    pub fn shade(self, factor: f32) -> Self {
        Self::new(
            (self.r * factor).clamp(0.0, 1.0),
            (self.g * factor).clamp(0.0, 1.0),
            (self.b * factor).clamp(0.0, 1.0),
            self.a,
        )
    }
}

/// Default colors for a fresh session
pub mod palette {
    use super::Rgba;

    pub const FURNITURE: Rgba = Rgba::rgb(0.55, 0.35, 0.2);
    pub const FLOOR: Rgba = Rgba::rgb(0.8, 0.8, 0.75);
    pub const WALL: Rgba = Rgba::rgb(0.65, 0.7, 0.8);
    pub const TILE_HOVER: Rgba = Rgba::rgb(0.95, 0.85, 0.4);
    pub const TILE_MENU_TARGET: Rgba = Rgba::rgb(0.4, 0.8, 0.45);
    pub const FURNITURE_SELECTED: Rgba = Rgba::rgb(1.0, 0.95, 0.3);
}

/// Source of pseudo-random colors
pub trait ColorSource {
    fn next_color(&mut self) -> Rgba;
}

/// Seeded color source backed by `StdRng`
pub struct SeededColors {
    rng: StdRng,
}

impl SeededColors {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl ColorSource for SeededColors {
    /// Opaque color with uniformly random RGB
    fn next_color(&mut self) -> Rgba {
        Rgba::rgb(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }
}

/// Cycles through a fixed list
#[cfg(test)]
pub struct FixedColors {
    colors: Vec<Rgba>,
    next: usize,
}

#[cfg(test)]
impl FixedColors {
    pub fn new(colors: Vec<Rgba>) -> Self {
        assert!(!colors.is_empty(), "FixedColors needs at least one color");
        Self { colors, next: 0 }
    }
}

#[cfg(test)]
impl ColorSource for FixedColors {
    fn next_color(&mut self) -> Rgba {
        let color = self.colors[self.next % self.colors.len()];
        self.next += 1;
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_colors_repeat() {
        let mut a = SeededColors::new(42);
        let mut b = SeededColors::new(42);
        for _ in 0..8 {
            assert_eq!(a.next_color(), b.next_color());
        }
    }

    #[test]
    fn test_seeded_colors_in_range() {
        let mut colors = SeededColors::new(1);
        for _ in 0..64 {
            let c = colors.next_color();
            for ch in [c.r, c.g, c.b] {
                assert!((0.0..1.0).contains(&ch));
            }
            assert_eq!(c.a, 1.0);
        }
    }

    #[test]
    fn test_fixed_colors_cycle() {
        let red = Rgba::rgb(1.0, 0.0, 0.0);
        let blue = Rgba::rgb(0.0, 0.0, 1.0);
        let mut colors = FixedColors::new(vec![red, blue]);
        assert_eq!(colors.next_color(), red);
        assert_eq!(colors.next_color(), blue);
        assert_eq!(colors.next_color(), red);
    }
}
