//! World module - the room being furnished
//!
//! - Room geometry and the floor tile lattice
//! - Placed furniture items
//! - RGBA colors and the injectable color source
//!
//! Note: the grid's lattice queries are used by tests and picking helpers,
//! not all of them by the frame loop.

#![allow(dead_code)]

mod color;
mod furniture;
mod grid;

pub use color::*;
pub use furniture::*;
pub use grid::*;
