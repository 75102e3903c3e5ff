//! Per-run collaborators handed to game states.

use glam::Vec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use robowave_core::config::GunConfig;
use robowave_core::events::GameEvent;
use robowave_core::state::PlayerView;

use crate::gun::LaserGun;
use crate::score::ScoreLedger;
use crate::shield::{Player, Shield};
use crate::time_control::TimeControl;

/// Default head position: standing player at the platform origin.
pub const DEFAULT_HEAD: Vec3 = Vec3::new(0.0, 1.7, 0.0);

/// Stable numeric id of an entity, as reported in events and snapshots.
pub fn entity_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

/// Everything a state needs besides its own data. One per engine, passed
/// down explicitly instead of living in globals.
pub struct GameContext {
    pub world: World,
    pub rng: ChaCha8Rng,
    pub time: TimeControl,
    pub score: ScoreLedger,
    pub gun: LaserGun,
    pub shield: Shield,
    pub player: Player,
    /// Where robots aim and bullets fly.
    pub head: Vec3,
    /// Feedback drained into the next snapshot.
    pub events: Vec<GameEvent>,
    gun_config: GunConfig,
}

impl GameContext {
    pub fn new(seed: u64, gun_config: GunConfig) -> Self {
        Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            time: TimeControl::new(),
            score: ScoreLedger::default(),
            gun: LaserGun::new(gun_config),
            shield: Shield::new(),
            player: Player::new(),
            head: DEFAULT_HEAD,
            events: Vec::new(),
            gun_config,
        }
    }

    /// Fresh world and equipment for a new stage. The rng stream continues.
    pub fn reset_run(&mut self) {
        self.world.clear();
        self.time = TimeControl::new();
        self.score.reset();
        self.gun = LaserGun::new(self.gun_config);
        self.shield = Shield::new();
        self.player = Player::new();
    }

    pub fn player_view(&self) -> PlayerView {
        PlayerView {
            head: self.head,
            health: self.player.health(),
            shield_energy: self.shield.energy(),
            shield_fraction: self.shield.fraction(),
        }
    }
}
