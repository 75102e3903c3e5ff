//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Playing,
    Paused,
    LevelComplete,
    GameOver,
}

/// Enemy robot lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyPhase {
    #[default]
    Alive,
    /// Health reached 0; the death effect is playing.
    Dying,
    /// Visual released; waiting to be swept out of its commando.
    Disposed,
}

/// Spawn zone lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePhase {
    /// Robot budget remaining.
    #[default]
    Spawning,
    /// Budget exhausted, robots still around.
    Draining,
    /// Budget exhausted and every robot disposed. The zone can be retired.
    Finished,
}

/// Laser gun state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GunPhase {
    #[default]
    Idle,
    /// A shot left the barrel this frame.
    Firing,
    /// Locked out until the lockout expires and heat is back to 0.
    Overheated,
}

/// Direction in which a clip is played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackDirection {
    #[default]
    Forward,
    Reverse,
}

/// Controller hand, for haptic feedback routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hand {
    /// Shield hand.
    Left,
    /// Gun hand.
    Right,
}

/// Tutorial progression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TutorialStep {
    /// Shoot a few harmless orbiting robots.
    #[default]
    ShootTargets,
    /// Hold the trigger until the gun overheats.
    Overheat,
    /// Squeeze to slow time down.
    SlowTime,
    /// One small wave of robots that shoot back.
    Skirmish,
    Done,
}

impl PlaybackDirection {
    pub fn sign(self) -> f32 {
        match self {
            PlaybackDirection::Forward => 1.0,
            PlaybackDirection::Reverse => -1.0,
        }
    }
}
