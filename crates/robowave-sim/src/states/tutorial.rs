//! Guided first run. Each step waits for the player to do one thing.

use log::info;

use robowave_core::constants::TUTORIAL_SLOW_TIME_THRESHOLD;
use robowave_core::enums::TutorialStep;
use robowave_core::error::ConfigError;
use robowave_core::events::GameEvent;
use robowave_core::state::ProgressView;

use crate::arena::Arena;
use crate::context::GameContext;
use crate::levels::{tutorial_skirmish, tutorial_targets};
use crate::zone::Zone;

use super::{GameState, StateOutcome};

pub struct Tutorial {
    step: TutorialStep,
    arena: Arena,
    paused: bool,
}

impl Tutorial {
    pub fn new() -> Self {
        Self {
            step: TutorialStep::ShootTargets,
            arena: Arena::new(),
            paused: false,
        }
    }

    pub fn step(&self) -> TutorialStep {
        self.step
    }

    fn enter(&mut self, ctx: &mut GameContext, step: TutorialStep) -> Result<(), ConfigError> {
        match step {
            TutorialStep::ShootTargets => {
                let (definition, points) = tutorial_targets();
                self.arena.add_zone(Zone::new(0, &definition, points)?);
            }
            TutorialStep::Skirmish => {
                let (definition, points) = tutorial_skirmish();
                self.arena.add_zone(Zone::new(0, &definition, points)?);
            }
            TutorialStep::Overheat | TutorialStep::SlowTime | TutorialStep::Done => {}
        }
        self.step = step;
        ctx.events.push(GameEvent::TutorialStepChanged { step });
        info!("tutorial: {step:?}");
        Ok(())
    }

    /// Next step once the current one is satisfied.
    fn next_step(&self, ctx: &GameContext) -> Option<TutorialStep> {
        match self.step {
            TutorialStep::ShootTargets if self.arena.is_clear() => Some(TutorialStep::Overheat),
            TutorialStep::Overheat if ctx.gun.is_overheated() => Some(TutorialStep::SlowTime),
            TutorialStep::SlowTime if ctx.time.get_time_scale() < TUTORIAL_SLOW_TIME_THRESHOLD => {
                Some(TutorialStep::Skirmish)
            }
            TutorialStep::Skirmish if self.arena.is_clear() => Some(TutorialStep::Done),
            _ => None,
        }
    }
}

impl Default for Tutorial {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for Tutorial {
    fn name(&self) -> String {
        "tutorial".to_string()
    }

    fn load(&mut self, ctx: &mut GameContext) -> Result<(), ConfigError> {
        self.enter(ctx, TutorialStep::ShootTargets)
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
            return StateOutcome::Failed;
        }

        if let Some(step) = self.next_step(ctx) {
            if self.enter(ctx, step).is_err() {
                return StateOutcome::Failed;
            }
        }
        if self.step == TutorialStep::Done {
            StateOutcome::Completed
        } else {
            StateOutcome::Running
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
            level: None,
            wave: 0,
            wave_count: 0,
            zones_active: self.arena.zones().len(),
            robots_remaining: self.arena.robots_remaining(),
            tutorial_step: Some(self.step),
        }
    }

    fn level_id(&self) -> Option<u32> {
        None
    }
}
