//! Core algorithms – entry model, hidden-entry recolouring, column packing.
//!
//! Nothing in this module spawns processes or writes to the terminal.

pub mod entry;
pub mod layout;
pub mod recolor;
