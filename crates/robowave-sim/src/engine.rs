//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the game context (hecs world, rng, time control,
//! equipment), the active stage and the leaderboard. It processes player
//! inputs, runs one frame per `tick` and produces `GameStateSnapshot`s.
//! Completely headless, so whole runs can be tested deterministically.

use std::collections::{BTreeMap, VecDeque};

use log::{error, info};

use robowave_core::commands::PlayerInput;
use robowave_core::config::{GunConfig, LevelDefinition};
use robowave_core::enums::GamePhase;
use robowave_core::error::ConfigError;
use robowave_core::events::GameEvent;
use robowave_core::state::GameStateSnapshot;
use robowave_core::types::{sanitize_dt, SimTime};

use crate::context::GameContext;
use crate::leaderboard::{now_timestamp, Leaderboard, ScoreEntry};
use crate::levels::builtin_level;
use crate::states::{GameState, Level, StateOutcome, Tutorial};
use crate::systems;

/// Configuration for a new engine.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed. Same seed and inputs = same game.
    pub seed: u64,
    pub gun: GunConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            gun: GunConfig::default(),
        }
    }
}

pub struct SimulationEngine {
    ctx: GameContext,
    time: SimTime,
    phase: GamePhase,
    state: Option<Box<dyn GameState>>,
    leaderboard: Leaderboard,
    /// Levels loaded from files; take precedence over the built-in catalog.
    custom_levels: BTreeMap<u32, LevelDefinition>,
    input_queue: VecDeque<PlayerInput>,
    /// Trigger force while held.
    trigger: Option<f32>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig, leaderboard: Leaderboard) -> Self {
        Self {
            ctx: GameContext::new(config.seed, config.gun),
            time: SimTime::default(),
            phase: GamePhase::default(),
            state: None,
            leaderboard,
            custom_levels: BTreeMap::new(),
            input_queue: VecDeque::new(),
            trigger: None,
        }
    }

    /// Engine whose leaderboard lives in memory only.
    pub fn in_memory(config: SimConfig) -> Self {
        Self::new(config, Leaderboard::in_memory())
    }

    /// Make `definition` playable under its id.
    pub fn register_level(&mut self, definition: LevelDefinition) {
        info!("level {} `{}` registered", definition.id, definition.name);
        self.custom_levels.insert(definition.id, definition);
    }

    /// Queue an input for processing at the next tick boundary.
    pub fn queue_input(&mut self, input: PlayerInput) {
        self.input_queue.push_back(input);
    }

    pub fn queue_inputs(&mut self, inputs: impl IntoIterator<Item = PlayerInput>) {
        self.input_queue.extend(inputs);
    }

    /// Advance one frame of `dt` real seconds and return the resulting snapshot.
    pub fn tick(&mut self, dt: f32) -> GameStateSnapshot {
        let dt = sanitize_dt(dt);
        self.process_inputs();

        let mut scaled_dt = 0.0;
        if self.phase == GamePhase::Playing {
            scaled_dt = dt * self.ctx.time.get_time_scale();
            self.run_state(scaled_dt);
        }

        // Every slow-time ask of the frame is in; resolve them.
        self.ctx.time.animate();
        if let Some(change) = self.ctx.time.take_change() {
            self.ctx.events.push(change);
        }
        self.time.advance(dt, scaled_dt);

        let events = std::mem::take(&mut self.ctx.events);
        systems::snapshot::build_snapshot(
            &self.ctx,
            &self.time,
            self.phase,
            self.state.as_deref(),
            events,
        )
    }

    fn run_state(&mut self, dt: f32) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let outcome = state.animate(&mut self.ctx, dt);
        match outcome {
            StateOutcome::Running => {
                if let Some(force) = self.trigger {
                    state.fire(&mut self.ctx, force);
                }
            }
            StateOutcome::Completed | StateOutcome::Failed => self.finish(outcome),
        }
    }

    /// Close the active stage and record the run.
    fn finish(&mut self, outcome: StateOutcome) {
        let Some(mut state) = self.state.take() else {
            return;
        };
        let score = self.ctx.score.score();

        if let Some(level) = state.level_id() {
            let rank = self.leaderboard.save_top_score(level, score, now_timestamp());
            let event = if outcome == StateOutcome::Completed {
                GameEvent::LevelComplete { level, score, rank }
            } else {
                GameEvent::GameOver { level, score, rank }
            };
            self.ctx.events.push(event);
            info!(
                "{}: {:?} with {score} points (rank {rank:?})",
                state.name(),
                outcome
            );
        }

        state.dispose(&mut self.ctx);
        self.trigger = None;
        self.phase = if outcome == StateOutcome::Completed {
            GamePhase::LevelComplete
        } else {
            GamePhase::GameOver
        };
    }

    /// Start level `level` from the registered or built-in levels.
    pub fn start_level(&mut self, level: u32) -> Result<(), ConfigError> {
        let definition = match self.custom_levels.get(&level) {
            Some(definition) => definition.clone(),
            None => builtin_level(level)?,
        };
        self.start_state(Box::new(Level::new(definition)))
    }

    pub fn start_tutorial(&mut self) -> Result<(), ConfigError> {
        self.start_state(Box::new(Tutorial::new()))
    }

    fn start_state(&mut self, mut state: Box<dyn GameState>) -> Result<(), ConfigError> {
        self.close_state();
        self.ctx.reset_run();
        if let Err(e) = state.load(&mut self.ctx) {
            state.dispose(&mut self.ctx);
            self.phase = GamePhase::MainMenu;
            return Err(e);
        }
        info!("{} started", state.name());
        self.state = Some(state);
        self.phase = GamePhase::Playing;
        Ok(())
    }

    fn close_state(&mut self) {
        if let Some(mut state) = self.state.take() {
            state.dispose(&mut self.ctx);
        }
        self.trigger = None;
    }

    fn process_inputs(&mut self) {
        while let Some(input) = self.input_queue.pop_front() {
            self.handle_input(input);
        }
    }

    fn handle_input(&mut self, input: PlayerInput) {
        match input {
            PlayerInput::TriggerPressed { force } => {
                if self.phase == GamePhase::Playing {
                    self.trigger = Some(force);
                }
            }
            PlayerInput::TriggerChanged { force } => {
                if self.trigger.is_some() {
                    self.trigger = Some(force);
                }
            }
            PlayerInput::TriggerReleased => self.trigger = None,
            PlayerInput::AimGun { origin, direction } => self.ctx.gun.aim(origin, direction),
            PlayerInput::SqueezeChanged { force } => self.ctx.time.set_squeeze(force),
            PlayerInput::SqueezeReleased => self.ctx.time.release_squeeze(),
            PlayerInput::MoveHead { position } => {
                if position.is_finite() {
                    self.ctx.head = position;
                }
            }
            PlayerInput::StartTutorial => {
                if self.can_start() {
                    if let Err(e) = self.start_tutorial() {
                        error!("tutorial failed to load: {e}");
                    }
                }
            }
            PlayerInput::StartLevel { level } => {
                if self.can_start() {
                    if let Err(e) = self.start_level(level) {
                        error!("level {level} failed to load: {e}");
                    }
                }
            }
            PlayerInput::Pause => {
                if self.phase == GamePhase::Playing {
                    if let Some(state) = self.state.as_mut() {
                        state.pause();
                    }
                    self.trigger = None;
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerInput::Resume => {
                if self.phase == GamePhase::Paused {
                    if let Some(state) = self.state.as_mut() {
                        state.resume();
                    }
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerInput::ReturnToMenu => {
                self.close_state();
                self.phase = GamePhase::MainMenu;
            }
        }
    }

    fn can_start(&self) -> bool {
        matches!(
            self.phase,
            GamePhase::MainMenu | GamePhase::LevelComplete | GamePhase::GameOver
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f32 {
        self.ctx.time.get_time_scale()
    }

    pub fn context(&self) -> &GameContext {
        &self.ctx
    }

    pub fn state(&self) -> Option<&dyn GameState> {
        self.state.as_deref()
    }

    pub fn top_scores(&self, level: u32) -> Vec<ScoreEntry> {
        self.leaderboard.load_top_scores(level)
    }

    #[cfg(test)]
    pub(crate) fn context_mut(&mut self) -> &mut GameContext {
        &mut self.ctx
    }
}
