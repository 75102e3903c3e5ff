//! Laser gun with a heat gauge.
//!
//! Shots add heat, heat decays continuously. Reaching the maximum locks the
//! gun until the lockout has elapsed and the heat is fully gone.

use glam::Vec3;
use log::{debug, info};

use robowave_core::config::GunConfig;
use robowave_core::constants::*;
use robowave_core::enums::{GunPhase, Hand, PlaybackDirection};
use robowave_core::events::GameEvent;
use robowave_core::state::GunView;
use robowave_core::types::{lerp_color, sanitize_dt};

use crate::time_control::TimeControl;

/// A laser bolt leaving the barrel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub origin: Vec3,
    pub direction: Vec3,
}

#[derive(Debug, Clone)]
pub struct LaserGun {
    config: GunConfig,
    heat: f32,
    overheated: bool,
    overheat_remaining: f32,
    time_since_last_shot: f32,
    phase: GunPhase,
    origin: Vec3,
    direction: Vec3,
    hand: Hand,
}

impl LaserGun {
    pub fn new(config: GunConfig) -> Self {
        Self {
            config,
            heat: 0.0,
            overheated: false,
            overheat_remaining: 0.0,
            // A fresh gun can fire at any trigger force.
            time_since_last_shot: f32::MAX,
            phase: GunPhase::Idle,
            origin: Vec3::ZERO,
            direction: Vec3::Z,
            hand: Hand::Right,
        }
    }

    /// Barrel pose from the controller. A zero direction keeps the previous one.
    pub fn aim(&mut self, origin: Vec3, direction: Vec3) {
        if origin.is_finite() {
            self.origin = origin;
        }
        let direction = direction.normalize_or_zero();
        if direction != Vec3::ZERO {
            self.direction = direction;
        }
    }

    /// Try to fire with trigger `force` (0–1). A lighter pull needs more
    /// time between shots.
    pub fn fire(
        &mut self,
        force: f32,
        time: &TimeControl,
        events: &mut Vec<GameEvent>,
    ) -> Option<Shot> {
        let force = if force.is_finite() { force.clamp(0.0, 1.0) } else { 0.0 };
        if self.overheated || self.time_since_last_shot * force < self.config.shot_cooldown {
            return None;
        }

        self.time_since_last_shot = 0.0;
        self.heat = (self.heat + self.config.heat_per_shot).min(self.config.max_heat);
        self.phase = GunPhase::Firing;

        let shot = Shot {
            origin: self.origin,
            direction: self.direction,
        };
        events.push(GameEvent::ShotFired {
            origin: shot.origin,
            direction: shot.direction,
        });
        events.push(haptic(self.hand, HAPTIC_SHOT));

        if self.heat >= self.config.max_heat {
            self.overheat(time, events);
        }
        Some(shot)
    }

    fn overheat(&mut self, time: &TimeControl, events: &mut Vec<GameEvent>) {
        self.overheated = true;
        self.overheat_remaining = self.config.overheat_lockout;
        self.phase = GunPhase::Overheated;
        events.push(GameEvent::GunOverheated);
        events.push(GameEvent::OverheatAnimation {
            speed_ratio: time.signed_ratio(PlaybackDirection::Forward),
        });
        events.push(haptic(self.hand, HAPTIC_OVERHEAT));
        info!("gun overheated, locked for {:.1}s", self.config.overheat_lockout);
    }

    /// Cool down by `dt` seconds.
    pub fn animate(&mut self, dt: f32, time: &TimeControl, events: &mut Vec<GameEvent>) {
        let dt = sanitize_dt(dt);

        self.time_since_last_shot += dt;
        self.heat = (self.heat - self.config.cooling_rate * dt).max(0.0);
        self.overheat_remaining = (self.overheat_remaining - dt).max(0.0);

        if self.overheated {
            if self.overheat_remaining <= 0.0 && self.heat <= 0.0 {
                self.overheated = false;
                self.phase = GunPhase::Idle;
                events.push(GameEvent::GunCooled);
                events.push(GameEvent::OverheatAnimation {
                    speed_ratio: time.signed_ratio(PlaybackDirection::Reverse),
                });
                debug!("gun cooled");
            }
        } else if self.phase == GunPhase::Firing {
            self.phase = GunPhase::Idle;
        }
    }

    pub fn heat(&self) -> f32 {
        self.heat
    }

    pub fn heat_fraction(&self) -> f32 {
        if self.config.max_heat > 0.0 {
            (self.heat / self.config.max_heat).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Gauge color and scale for the heat bar.
    pub fn heat_gauge(&self) -> ([f32; 3], f32) {
        let t = self.heat_fraction();
        let color = lerp_color(GUN_COLD_COLOR, GUN_HOT_COLOR, t);
        let scale = GUN_GAUGE_MIN_SCALE + (GUN_GAUGE_MAX_SCALE - GUN_GAUGE_MIN_SCALE) * t;
        (color, scale)
    }

    pub fn is_overheated(&self) -> bool {
        self.overheated
    }

    pub fn overheat_remaining(&self) -> f32 {
        self.overheat_remaining
    }

    pub fn phase(&self) -> GunPhase {
        self.phase
    }

    pub fn config(&self) -> &GunConfig {
        &self.config
    }

    pub fn view(&self) -> GunView {
        let (gauge_color, gauge_scale) = self.heat_gauge();
        GunView {
            phase: self.phase,
            heat_fraction: self.heat_fraction(),
            overheated: self.overheated,
            gauge_color,
            gauge_scale,
        }
    }
}

fn haptic(hand: Hand, (intensity, duration_ms): (f32, u32)) -> GameEvent {
    GameEvent::Haptic {
        hand,
        intensity,
        duration_ms,
    }
}
