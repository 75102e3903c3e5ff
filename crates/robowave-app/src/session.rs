//! One autopiloted run, headless or on the real-time loop.

use log::info;

use robowave_core::commands::PlayerInput;
use robowave_core::constants::FRAME_DT;
use robowave_core::enums::GamePhase;
use robowave_core::state::{GameStateSnapshot, ScoreView};
use robowave_sim::engine::SimulationEngine;

use crate::autopilot::Autopilot;
use crate::game_loop::FRAME_DURATION;
use crate::state::LoopHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Tutorial,
    Level(u32),
}

impl Stage {
    pub fn start_input(self) -> PlayerInput {
        match self {
            Stage::Tutorial => PlayerInput::StartTutorial,
            Stage::Level(level) => PlayerInput::StartLevel { level },
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub frames: u64,
    pub phase: GamePhase,
    pub stage: Option<String>,
    pub score: ScoreView,
    pub health: f32,
    pub simulated_secs: f64,
}

impl RunSummary {
    fn from_snapshot(snapshot: &GameStateSnapshot, stage: Option<String>) -> Self {
        Self {
            frames: snapshot.time.frame,
            phase: snapshot.phase,
            stage,
            score: snapshot.score,
            health: snapshot.player.health,
            simulated_secs: snapshot.time.scaled_secs,
        }
    }
}

fn is_over(phase: GamePhase) -> bool {
    matches!(phase, GamePhase::LevelComplete | GamePhase::GameOver)
}

/// Play `stage` with the autopilot for at most `max_frames` fixed frames,
/// as fast as the machine allows.
pub fn run_headless(engine: &mut SimulationEngine, stage: Stage, max_frames: u64) -> RunSummary {
    let mut pilot = Autopilot::new();
    engine.queue_input(stage.start_input());

    let mut snapshot = engine.tick(FRAME_DT);
    let mut stage_name = snapshot.stage.clone();
    for _ in 1..max_frames {
        if is_over(snapshot.phase) || snapshot.phase == GamePhase::MainMenu {
            break;
        }
        engine.queue_inputs(pilot.react(&snapshot));
        snapshot = engine.tick(FRAME_DT);
        if snapshot.stage.is_some() {
            stage_name = snapshot.stage.clone();
        }
    }

    let summary = RunSummary::from_snapshot(&snapshot, stage_name);
    info!("run ended after {} frames: {:?}", summary.frames, summary.phase);
    summary
}

/// Same as `run_headless`, against a real-time frame loop.
pub fn run_realtime(handle: LoopHandle, stage: Stage, max_frames: u64) -> Option<RunSummary> {
    let mut pilot = Autopilot::new();
    handle.send(stage.start_input());

    let mut last: Option<GameStateSnapshot> = None;
    let mut stage_name = None;
    loop {
        std::thread::sleep(FRAME_DURATION);
        let Some(snapshot) = handle.latest() else {
            continue;
        };
        if snapshot.stage.is_some() {
            stage_name = snapshot.stage.clone();
        }
        // Still in the menu after the start input was handled: the stage failed to load.
        let failed_start = snapshot.phase == GamePhase::MainMenu && snapshot.time.frame > 1;
        let done = is_over(snapshot.phase) || failed_start || snapshot.time.frame >= max_frames;
        if !done {
            for input in pilot.react(&snapshot) {
                if !handle.send(input) {
                    break;
                }
            }
        }
        last = Some(snapshot);
        if done {
            break;
        }
    }

    handle.shutdown();
    last.map(|snapshot| RunSummary::from_snapshot(&snapshot, stage_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use robowave_sim::engine::SimConfig;

    #[test]
    fn test_headless_run_stops_at_frame_limit() {
        let mut engine = SimulationEngine::in_memory(SimConfig::default());
        let summary = run_headless(&mut engine, Stage::Level(1), 300);

        assert!(summary.frames <= 300);
        assert_eq!(summary.stage.as_deref(), Some("level-1"));
        assert!(summary.score.shots_fired > 0, "autopilot never fired");
    }

    #[test]
    fn test_headless_unknown_level_returns_to_menu() {
        let mut engine = SimulationEngine::in_memory(SimConfig::default());
        let summary = run_headless(&mut engine, Stage::Level(404), 300);
        assert_eq!(summary.phase, GamePhase::MainMenu);
        assert_eq!(summary.frames, 1);
    }
}
