//! State shared between the frame loop thread and its driver.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use robowave_core::commands::PlayerInput;
use robowave_core::state::GameStateSnapshot;

/// Messages sent to the frame loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Forwarded to the engine's input queue.
    Input(PlayerInput),
    /// Stop the loop after the current frame.
    Shutdown,
}

/// Driver side of a running frame loop.
pub struct LoopHandle {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    /// Snapshot of the most recent frame, `None` before the first one.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub thread: JoinHandle<()>,
}

impl LoopHandle {
    /// Queue an input. Returns false once the loop has stopped.
    pub fn send(&self, input: PlayerInput) -> bool {
        self.command_tx.send(GameLoopCommand::Input(input)).is_ok()
    }

    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }

    /// Ask the loop to stop and wait for it.
    pub fn shutdown(self) {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        let _ = self.thread.join();
    }
}
