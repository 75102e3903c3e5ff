//! Per-frame systems run by the arena and the engine.
//!
//! Systems are functions over the world and the frame's collaborators; they
//! keep no state of their own.

pub mod bullets;
pub mod lasers;
pub mod snapshot;
