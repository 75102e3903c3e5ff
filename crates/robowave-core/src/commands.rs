//! Player input sent from the XR input layer to the simulation.
//!
//! Inputs are queued and processed at the next frame boundary.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerInput {
    // --- Gun hand ---
    /// Trigger pulled with analog pressure (0–1).
    TriggerPressed { force: f32 },
    /// Analog pressure changed while held.
    TriggerChanged { force: f32 },
    TriggerReleased,
    /// Gun barrel pose.
    AimGun { origin: Vec3, direction: Vec3 },

    // --- Time control hand ---
    /// Squeeze pressure (0–1); time scale becomes `1.03 - force`.
    SqueezeChanged { force: f32 },
    /// Squeeze released; time scale back to 1.
    SqueezeReleased,

    // --- Head ---
    /// Head position; robots aim at it and bullets fly toward it.
    MoveHead { position: Vec3 },

    // --- Flow ---
    StartTutorial,
    StartLevel { level: u32 },
    Pause,
    Resume,
    ReturnToMenu,
}
