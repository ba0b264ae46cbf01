//! Output layer — colours, terminal size, and grid rendering.
//!
//! Takes the *core* data structures and turns them into text on stdout.
//! No filesystem I/O happens here.

pub mod grid;
pub mod terminal;
pub mod theme;
