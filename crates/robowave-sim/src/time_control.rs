//! Time dilation shared by every animated subsystem.
//!
//! One `TimeControl` per run, owned by the `GameContext`. The player sets a
//! base scale by squeezing; bullets close to the player ask for extra
//! slowdown every frame. `animate` resolves the frame's requests and must run
//! after every ask of that frame.

use log::debug;

use robowave_core::constants::*;
use robowave_core::enums::PlaybackDirection;
use robowave_core::events::GameEvent;
use robowave_core::state::TimeScaleView;

#[derive(Debug, Clone)]
pub struct TimeControl {
    /// Applied scale.
    scale: f32,
    /// Scale chosen by the player (squeeze), restored when nothing asks for slowdown.
    base_scale: f32,
    /// Strongest slowdown asked this frame.
    slow_request: Option<f32>,
    animation_speed_ratio: f32,
    particle_emit_rate: f32,
    /// Set when the applied scale changed and renderers have not been told yet.
    pending_change: bool,
}

impl TimeControl {
    pub fn new() -> Self {
        Self {
            scale: NORMAL_TIME_SCALE,
            base_scale: NORMAL_TIME_SCALE,
            slow_request: None,
            animation_speed_ratio: NORMAL_TIME_SCALE,
            particle_emit_rate: BASE_PARTICLE_EMIT_RATE,
            pending_change: false,
        }
    }

    /// Store `scale` and propagate it to animation and particle rates.
    pub fn set_time_scale(&mut self, scale: f32) {
        let scale = if scale.is_finite() { scale.max(0.0) } else { NORMAL_TIME_SCALE };
        if scale == self.scale {
            return;
        }
        self.scale = scale;
        self.animation_speed_ratio = self.signed_ratio(PlaybackDirection::Forward);
        self.particle_emit_rate = BASE_PARTICLE_EMIT_RATE * self.animation_speed_ratio;
        self.pending_change = true;
        debug!("time scale set to {scale:.3}");
    }

    pub fn get_time_scale(&self) -> f32 {
        self.scale
    }

    /// Ask for slowdown this frame. Several asks per frame resolve to the smallest factor.
    pub fn ask_slow_time(&mut self, factor: f32) {
        if !factor.is_finite() {
            return;
        }
        let factor = factor.max(0.0);
        self.slow_request = Some(match self.slow_request {
            Some(current) => current.min(factor),
            None => factor,
        });
    }

    /// Resolve this frame's asks. With no ask the base scale comes back.
    pub fn animate(&mut self) {
        let target = match self.slow_request.take() {
            Some(factor) => factor.min(self.base_scale),
            None => self.base_scale,
        };
        self.set_time_scale(target);
    }

    /// Squeeze held with analog `force` (0–1).
    pub fn set_squeeze(&mut self, force: f32) {
        let force = if force.is_finite() { force.clamp(0.0, 1.0) } else { 0.0 };
        self.base_scale = SQUEEZE_SCALE_OFFSET - force;
        self.set_time_scale(self.base_scale);
    }

    pub fn release_squeeze(&mut self) {
        self.base_scale = NORMAL_TIME_SCALE;
        self.set_time_scale(self.base_scale);
    }

    /// Scale as a playback rate for clips running in `direction`.
    /// Never exactly 0: animation drivers freeze on a zero ratio.
    pub fn signed_ratio(&self, direction: PlaybackDirection) -> f32 {
        let magnitude = if self.scale == 0.0 { TIME_SCALE_EPSILON } else { self.scale };
        magnitude * direction.sign()
    }

    pub fn animation_speed_ratio(&self) -> f32 {
        self.animation_speed_ratio
    }

    pub fn particle_emit_rate(&self) -> f32 {
        self.particle_emit_rate
    }

    /// The change event for renderers, once per change.
    pub fn take_change(&mut self) -> Option<GameEvent> {
        if !self.pending_change {
            return None;
        }
        self.pending_change = false;
        Some(GameEvent::TimeScaleChanged {
            scale: self.scale,
            animation_speed_ratio: self.animation_speed_ratio,
            particle_emit_rate: self.particle_emit_rate,
        })
    }

    pub fn view(&self) -> TimeScaleView {
        TimeScaleView {
            scale: self.scale,
            animation_speed_ratio: self.animation_speed_ratio,
            particle_emit_rate: self.particle_emit_rate,
        }
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new()
    }
}
