//! Robot steering for ROBOWAVE.
//!
//! Movement strategies, neighbor repulsion and head aiming. Pure functions
//! over plain data; no ECS dependency.

pub mod aim;
pub mod movement;

pub use robowave_core as core;

#[cfg(test)]
mod tests;
