//! A level: waves of zones played one after the other.

use log::{error, info};

use robowave_core::config::LevelDefinition;
use robowave_core::error::ConfigError;
use robowave_core::events::GameEvent;
use robowave_core::state::ProgressView;

use crate::arena::Arena;
use crate::context::GameContext;
use crate::zone::Zone;

use super::{GameState, StateOutcome};

pub struct Level {
    definition: LevelDefinition,
    wave: usize,
    arena: Arena,
    paused: bool,
}

impl Level {
    pub fn new(definition: LevelDefinition) -> Self {
        Self {
            definition,
            wave: 0,
            arena: Arena::new(),
            paused: false,
        }
    }

    /// Build every zone of wave `index`.
    fn build_wave(&self, index: usize) -> Result<Vec<Zone>, ConfigError> {
        let Some(wave) = self.definition.waves.get(index) else {
            return Err(ConfigError::EmptyLevel(self.definition.id));
        };
        wave.zones
            .iter()
            .enumerate()
            .map(|(i, definition)| {
                let points = self.definition.resolve_spawn_points(i, definition)?;
                Zone::new(i, definition, points)
            })
            .collect()
    }

    fn start_wave(&mut self, ctx: &mut GameContext, index: usize) -> Result<(), ConfigError> {
        let zones = self.build_wave(index)?;
        for zone in zones {
            self.arena.add_zone(zone);
        }
        self.wave = index;
        ctx.events.push(GameEvent::WaveStarted {
            level: self.definition.id,
            wave: index,
        });
        info!(
            "level {}: wave {}/{} started",
            self.definition.id,
            index + 1,
            self.definition.waves.len()
        );
        Ok(())
    }

    pub fn wave(&self) -> usize {
        self.wave
    }
}

impl GameState for Level {
    fn name(&self) -> String {
        self.definition.name.clone()
    }

    fn load(&mut self, ctx: &mut GameContext) -> Result<(), ConfigError> {
        if self.definition.waves.is_empty() {
            return Err(ConfigError::EmptyLevel(self.definition.id));
        }
        // Reject bad content in any wave before the first robot spawns.
        for index in 0..self.definition.waves.len() {
            if let Err(e) = self.build_wave(index) {
                error!("level {} wave {index}: {e}", self.definition.id);
                return Err(e);
            }
        }
        self.start_wave(ctx, 0)
    }

    fn dispose(&mut self, ctx: &mut GameContext) {
        self.arena.dispose(ctx);
    }

    fn animate(&mut self, ctx: &mut GameContext, dt: f32) -> StateOutcome {
        if self.paused {
            return StateOutcome::Running;
        }

        self.arena.animate(ctx, dt);

        if ctx.player.is_dead() {
            info!("level {}: player down", self.definition.id);
            return StateOutcome::Failed;
        }
        if !self.arena.is_clear() {
            return StateOutcome::Running;
        }

        let next = self.wave + 1;
        if next >= self.definition.waves.len() {
            info!("level {}: all waves cleared", self.definition.id);
            return StateOutcome::Completed;
        }
        match self.start_wave(ctx, next) {
            Ok(()) => StateOutcome::Running,
            Err(e) => {
                error!("level {} wave {next}: {e}", self.definition.id);
                StateOutcome::Failed
            }
        }
    }

    fn fire(&mut self, ctx: &mut GameContext, force: f32) {
        if !self.paused {
            self.arena.fire(ctx, force);
        }
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn arena(&self) -> &Arena {
        &self.arena
    }

    fn progress(&self) -> ProgressView {
        ProgressView {
            level: Some(self.definition.id),
            wave: self.wave,
            wave_count: self.definition.waves.len(),
            zones_active: self.arena.zones().len(),
            robots_remaining: self.arena.robots_remaining(),
            tutorial_step: None,
        }
    }

    fn level_id(&self) -> Option<u32> {
        Some(self.definition.id)
    }
}
