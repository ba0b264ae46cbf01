//! The external listing source.
//!
//! Everything that touches a child process lives here; the rest of the crate
//! only sees the lines it produced.

pub mod listing;
