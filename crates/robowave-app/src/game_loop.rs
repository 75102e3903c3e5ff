//! Frame loop thread: runs the simulation at the headset frame rate.
//!
//! The engine is created inside the thread so it never has to be `Send`.
//! Inputs arrive over an `mpsc` channel; the latest snapshot is stored in
//! shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::debug;

use robowave_core::constants::{FRAME_DT, FRAME_RATE};
use robowave_core::state::GameStateSnapshot;
use robowave_sim::engine::SimulationEngine;

use crate::state::{GameLoopCommand, LoopHandle};

/// Wall-clock duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawn the frame loop with the engine built by `build`.
pub fn spawn_game_loop<F>(build: F) -> io::Result<LoopHandle>
where
    F: FnOnce() -> SimulationEngine + Send + 'static,
{
    let (command_tx, command_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("robowave-frame-loop".into())
        .spawn(move || {
            let mut engine = build();
            run_game_loop(&mut engine, command_rx, &shared);
        })?;

    Ok(LoopHandle {
        command_tx,
        latest_snapshot,
        thread,
    })
}

/// Runs until a Shutdown command or channel disconnect.
fn run_game_loop(
    engine: &mut SimulationEngine,
    command_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut next_frame_time = Instant::now();
    let mut last_frame = Instant::now();

    loop {
        if !drain_commands(engine, &command_rx) {
            debug!("frame loop stopped");
            return;
        }

        // Real elapsed time, so slow frames do not slow the game down.
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32().min(FRAME_DT * 4.0);
        last_frame = now;

        let snapshot = engine.tick(dt);
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind; reset instead of catching up.
            next_frame_time = now;
        }
    }
}

/// Forward pending inputs. Returns false when the loop must stop.
fn drain_commands(
    engine: &mut SimulationEngine,
    command_rx: &mpsc::Receiver<GameLoopCommand>,
) -> bool {
    loop {
        match command_rx.try_recv() {
            Ok(GameLoopCommand::Input(input)) => engine.queue_input(input),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robowave_core::commands::PlayerInput;
    use robowave_core::enums::GamePhase;
    use robowave_sim::engine::SimConfig;

    #[test]
    fn test_drain_forwards_inputs_until_shutdown() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        let mut engine = SimulationEngine::in_memory(SimConfig::default());

        tx.send(GameLoopCommand::Input(PlayerInput::StartLevel { level: 1 }))
            .unwrap();
        assert!(drain_commands(&mut engine, &rx));
        assert_eq!(engine.tick(FRAME_DT).phase, GamePhase::Playing);

        tx.send(GameLoopCommand::Input(PlayerInput::Pause)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&mut engine, &rx));

        drop(tx);
        assert!(!drain_commands(&mut engine, &rx));
    }

    #[test]
    fn test_loop_publishes_snapshots() {
        let handle = spawn_game_loop(|| SimulationEngine::in_memory(SimConfig::default())).unwrap();
        assert!(handle.send(PlayerInput::StartLevel { level: 1 }));

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut playing = false;
        while Instant::now() < deadline {
            if let Some(snapshot) = handle.latest() {
                if snapshot.phase == GamePhase::Playing && snapshot.time.frame > 2 {
                    playing = true;
                    break;
                }
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        handle.shutdown();
        assert!(playing, "loop never reported a running level");
    }

    #[test]
    fn test_frame_duration_constant() {
        // 72 Hz = 13.888ms per frame
        assert_eq!(FRAME_DURATION.as_nanos(), (1_000_000_000u64 / 72) as u128);
    }
}
