//! ROBOWAVE headless runner.
//!
//! Drives the simulation with a scripted player, either as fast as possible
//! or on a real-time frame loop thread.

pub mod autopilot;
pub mod game_loop;
pub mod session;
pub mod state;

pub use robowave_core as core;
