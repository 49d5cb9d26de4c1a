//! Systems - pure rules applied to the piece records
//!
//! - collision: clamp-to-board and square overlap tests
//! - movement:  per-event transaction (commit or revert)

pub mod collision;
pub mod movement;
