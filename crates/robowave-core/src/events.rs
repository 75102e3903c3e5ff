//! Events emitted by the simulation for rendering, audio and haptic feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Feedback events drained into each frame's snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    // --- Robots ---
    /// A robot was instanced.
    EnemySpawned { id: u64, position: Vec3 },
    /// A laser touched a robot that survived.
    EnemyHit { id: u64, health: i32 },
    /// A laser brought a robot's health to 0.
    EnemyKilled { id: u64, score: u32 },
    /// The death effect starts (explosion particles).
    EnemyDeathEffect { id: u64, position: Vec3 },
    /// The robot's visual can be released.
    EnemyDisposed { id: u64 },

    // --- Gun ---
    /// A laser bolt left the barrel.
    ShotFired { origin: Vec3, direction: Vec3 },
    /// Heat reached the maximum; the gun is locked.
    GunOverheated,
    /// The gun is usable again.
    GunCooled,
    /// Play the overheat clips (back and front of the gun) at the given signed ratio.
    OverheatAnimation { speed_ratio: f32 },
    /// Controller vibration.
    Haptic {
        hand: Hand,
        intensity: f32,
        duration_ms: u32,
    },

    // --- Enemy fire / player ---
    /// A robot fired at the player.
    BulletFired { origin: Vec3, velocity: Vec3 },
    /// A bullet reached the player.
    PlayerHit { damage: f32, absorbed: f32 },

    // --- Time ---
    /// Time scale changed; renderers update animation and particle rates.
    TimeScaleChanged {
        scale: f32,
        animation_speed_ratio: f32,
        particle_emit_rate: f32,
    },

    // --- Progression ---
    WaveStarted { level: u32, wave: usize },
    TutorialStepChanged { step: TutorialStep },
    LevelComplete { level: u32, score: u32, rank: Option<usize> },
    GameOver { level: u32, score: u32, rank: Option<usize> },
}
