//! Simulation engine for ROBOWAVE.
//!
//! Owns the hecs world of enemy robots, the spawn zones and their squads,
//! the laser gun, time dilation and scoring. Completely headless: the
//! renderer consumes `GameStateSnapshot`s, which keeps the whole game
//! testable frame by frame.

pub mod arena;
pub mod commando;
pub mod context;
pub mod enemy;
pub mod engine;
pub mod gun;
pub mod leaderboard;
pub mod levels;
pub mod projectile;
pub mod score;
pub mod shield;
pub mod spatial;
pub mod states;
pub mod systems;
pub mod time_control;
pub mod zone;

pub use engine::{SimConfig, SimulationEngine};
pub use robowave_core as core;
