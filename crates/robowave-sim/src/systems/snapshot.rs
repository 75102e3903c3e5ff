//! Snapshot system: reads the world and the active stage into a
//! `GameStateSnapshot`. Never mutates anything.

use hecs::World;

use robowave_core::components::{Robot, Transform};
use robowave_core::enums::GamePhase;
use robowave_core::events::GameEvent;
use robowave_core::state::*;
use robowave_core::types::SimTime;

use crate::context::{entity_id, GameContext};
use crate::enemy::Enemy;
use crate::states::GameState;

pub fn build_snapshot(
    ctx: &GameContext,
    time: &SimTime,
    phase: GamePhase,
    state: Option<&dyn GameState>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let (projectiles, bullets) = match state {
        Some(state) => (
            state.arena().projectiles().iter().map(|p| p.position).collect(),
            state.arena().bullets().iter().map(|b| b.position).collect(),
        ),
        None => (Vec::new(), Vec::new()),
    };

    GameStateSnapshot {
        time: *time,
        phase,
        stage: state.map(|s| s.name()),
        time_scale: ctx.time.view(),
        enemies: build_enemies(&ctx.world),
        projectiles,
        bullets,
        gun: ctx.gun.view(),
        player: ctx.player_view(),
        score: ctx.score.view(),
        progress: state.map(|s| s.progress()).unwrap_or_default(),
        events,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Transform, &Enemy, &Robot)>()
        .iter()
        .map(|(entity, (transform, enemy, robot))| EnemyView {
            id: entity_id(entity),
            zone: robot.zone,
            position: transform.position,
            rotation: transform.rotation,
            health: enemy.health(),
            phase: enemy.phase(),
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}
