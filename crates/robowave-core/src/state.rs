//! Game state snapshot: the complete visible state handed to the renderer each frame.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Name of the active stage ("tutorial", "level-2", ...).
    pub stage: Option<String>,
    pub time_scale: TimeScaleView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<Vec3>,
    pub bullets: Vec<Vec3>,
    pub gun: GunView,
    pub player: PlayerView,
    pub score: ScoreView,
    pub progress: ProgressView,
    pub events: Vec<GameEvent>,
}

/// Time dilation values renderers apply to animations and particles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeScaleView {
    pub scale: f32,
    pub animation_speed_ratio: f32,
    pub particle_emit_rate: f32,
}

/// A robot on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub zone: usize,
    pub position: Vec3,
    pub rotation: Quat,
    pub health: i32,
    pub phase: EnemyPhase,
}

/// Gun heat bar.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GunView {
    pub phase: GunPhase,
    /// `heat / max_heat`.
    pub heat_fraction: f32,
    pub overheated: bool,
    pub gauge_color: [f32; 3],
    pub gauge_scale: f32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub head: Vec3,
    pub health: f32,
    pub shield_energy: f32,
    pub shield_fraction: f32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub shots_fired: u32,
    pub hits: u32,
    pub kills: u32,
}

/// Wave/tutorial progress for the HUD.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProgressView {
    pub level: Option<u32>,
    pub wave: usize,
    pub wave_count: usize,
    pub zones_active: usize,
    pub robots_remaining: u32,
    pub tutorial_step: Option<TutorialStep>,
}

impl Default for TimeScaleView {
    fn default() -> Self {
        Self {
            scale: crate::constants::NORMAL_TIME_SCALE,
            animation_speed_ratio: crate::constants::NORMAL_TIME_SCALE,
            particle_emit_rate: crate::constants::BASE_PARTICLE_EMIT_RATE,
        }
    }
}
