//! Game stages driven by the engine: built-in or loaded levels, and the tutorial.

pub mod level;
pub mod tutorial;

use robowave_core::error::ConfigError;
use robowave_core::state::ProgressView;

use crate::arena::Arena;
use crate::context::GameContext;

pub use level::Level;
pub use tutorial::Tutorial;

/// What a stage reports after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateOutcome {
    Running,
    Completed,
    /// The player died.
    Failed,
}

pub trait GameState {
    fn name(&self) -> String;

    /// Build the stage's content. Malformed configuration fails here, before
    /// anything runs.
    fn load(&mut self, ctx: &mut GameContext) -> Result<(), ConfigError>;

    /// Despawn everything the stage created.
    fn dispose(&mut self, ctx: &mut GameContext);

    fn animate(&mut self, ctx: &mut GameContext, dt: f32) -> StateOutcome;

    fn fire(&mut self, ctx: &mut GameContext, force: f32);

    fn pause(&mut self);

    fn resume(&mut self);

    fn arena(&self) -> &Arena;

    fn progress(&self) -> ProgressView;

    /// Leaderboard the stage records into, if any.
    fn level_id(&self) -> Option<u32>;
}
