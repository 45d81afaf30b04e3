//! Game rules for tic-tac-toe.
//!
//! Pure predicates over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the engine and the search share one definition of a line.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, has_line, has_line_through};
