//! Player health and the regenerating shield in front of it.

use robowave_core::constants::*;
use robowave_core::types::sanitize_dt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shield {
    energy: f32,
    since_hit: f32,
}

impl Shield {
    pub fn new() -> Self {
        Self {
            energy: SHIELD_MAX_ENERGY,
            since_hit: SHIELD_REGEN_DELAY_SECS,
        }
    }

    /// Soak up to `damage`; returns the absorbed amount.
    pub fn absorb(&mut self, damage: f32) -> f32 {
        let damage = if damage.is_finite() { damage.max(0.0) } else { 0.0 };
        let absorbed = damage.min(self.energy);
        self.energy -= absorbed;
        self.since_hit = 0.0;
        absorbed
    }

    /// Regenerates after a quiet delay.
    pub fn animate(&mut self, dt: f32) {
        let dt = sanitize_dt(dt);
        self.since_hit += dt;
        if self.since_hit >= SHIELD_REGEN_DELAY_SECS {
            self.energy = (self.energy + SHIELD_REGEN_RATE * dt).min(SHIELD_MAX_ENERGY);
        }
    }

    pub fn energy(&self) -> f32 {
        self.energy
    }

    pub fn fraction(&self) -> f32 {
        self.energy / SHIELD_MAX_ENERGY
    }
}

impl Default for Shield {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    health: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            health: PLAYER_MAX_HEALTH,
        }
    }

    pub fn take_damage(&mut self, amount: f32) {
        if amount.is_finite() && amount > 0.0 {
            self.health = (self.health - amount).max(0.0);
        }
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
