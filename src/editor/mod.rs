//! Room Editor
//!
//! - Session state: grid, furniture, camera and the open menu
//! - Keyboard actions dispatched into the session

mod actions;
mod session;

pub use actions::*;
pub use session::*;
