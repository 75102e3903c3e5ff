//! Simulation constants and tuning parameters.
//!
//! Distances are in world units (the platform is roughly 2 units across),
//! durations in seconds.

/// Nominal display rate used by the headless runner (Hz).
pub const FRAME_RATE: u32 = 72;

/// Seconds per frame at the nominal display rate.
pub const FRAME_DT: f32 = 1.0 / FRAME_RATE as f32;

// --- Time control ---

/// Normal playback speed.
pub const NORMAL_TIME_SCALE: f32 = 1.0;

/// Squeeze mapping: time scale while held is `SQUEEZE_SCALE_OFFSET - force`.
pub const SQUEEZE_SCALE_OFFSET: f32 = 1.03;

/// Smallest magnitude a rate ratio may take. A ratio of exactly 0 freezes
/// animation drivers unrecoverably.
pub const TIME_SCALE_EPSILON: f32 = 0.001;

/// Particle emission rate at normal speed (particles per second).
pub const BASE_PARTICLE_EMIT_RATE: f32 = 300.0;

// --- Movement ---

/// Attraction gain of the gravity movement.
pub const GRAVITY_ATTRACTION_GAIN: f32 = 0.1;

/// Velocity damping of the gravity movement (applied every step).
pub const GRAVITY_DAMPING: f32 = 0.99;

/// Numerator of the inverse-distance repulsion between robots.
pub const REPULSION_STRENGTH: f32 = 50.0;

/// Vertical amplitude of the sinusoidal movement.
pub const SINUSOIDAL_AMPLITUDE: f32 = 0.1;

// --- Enemy ---

/// Head-aim turn rate (slerp fraction per second).
pub const ENEMY_TURN_RATE: f32 = 4.0;

/// Time between death and disposal, while the death effect plays.
pub const ENEMY_DISPOSE_DELAY_SECS: f32 = 1.2;

/// Radius of the spherical hit-box around a robot.
pub const ENEMY_HITBOX_RADIUS: f32 = 0.8;

// --- Commando ---

/// A squad is re-targeted once any member gets closer than this to the shared destination.
pub const COMMANDO_RETARGET_DISTANCE: f32 = 10.0;

/// Per-axis spawn jitter around the spawn point.
pub const COMMANDO_SPAWN_JITTER: f32 = 1.0;

// --- Gun ---

/// Heat at which the gun overheats.
pub const GUN_MAX_HEAT: f32 = 1.0;

/// Heat added per shot.
pub const GUN_HEAT_PER_SHOT: f32 = 0.08;

/// Heat removed per second.
pub const GUN_COOLING_RATE: f32 = 0.35;

/// Minimum effective time between two shots.
pub const GUN_SHOT_COOLDOWN: f32 = 0.1;

/// Lockout after an overheat.
pub const GUN_OVERHEAT_LOCKOUT_SECS: f32 = 2.0;

/// Heat bar color when cold (RGB).
pub const GUN_COLD_COLOR: [f32; 3] = [0.1, 0.6, 1.0];

/// Heat bar color at max heat (RGB).
pub const GUN_HOT_COLOR: [f32; 3] = [1.0, 0.15, 0.05];

/// Heat bar length when cold.
pub const GUN_GAUGE_MIN_SCALE: f32 = 0.05;

/// Heat bar length at max heat.
pub const GUN_GAUGE_MAX_SCALE: f32 = 1.0;

/// Haptic pulse for a regular shot: (intensity, milliseconds).
pub const HAPTIC_SHOT: (f32, u32) = (0.3, 40);

/// Haptic pulse when the gun overheats.
pub const HAPTIC_OVERHEAT: (f32, u32) = (1.0, 400);

/// Haptic pulse when a bullet hits the player.
pub const HAPTIC_PLAYER_HIT: (f32, u32) = (0.8, 150);

// --- Laser projectile ---

/// Laser bolt speed (units per second).
pub const LASER_SPEED: f32 = 60.0;

/// Distance after which a laser bolt fizzles out.
pub const LASER_MAX_RANGE: f32 = 150.0;

// --- Enemy bullets ---

/// Distance to the player's head under which a bullet asks for slow motion.
pub const BULLET_DANGER_RADIUS: f32 = 3.0;

/// Strongest slowdown a single bullet may request.
pub const BULLET_MIN_SLOW_FACTOR: f32 = 0.2;

/// Distance to the player's head under which a bullet hits.
pub const BULLET_HIT_RADIUS: f32 = 0.35;

/// Bullets older than this are discarded.
pub const BULLET_LIFETIME_SECS: f32 = 12.0;

// --- Player / shield ---

/// Player health at the start of a run.
pub const PLAYER_MAX_HEALTH: f32 = 100.0;

/// Shield energy capacity.
pub const SHIELD_MAX_ENERGY: f32 = 60.0;

/// Shield regeneration (energy per second).
pub const SHIELD_REGEN_RATE: f32 = 12.0;

/// Time without hits before the shield starts regenerating.
pub const SHIELD_REGEN_DELAY_SECS: f32 = 2.5;

// --- Score ---

/// Entries kept per level leaderboard.
pub const LEADERBOARD_CAPACITY: usize = 100;

// --- Tutorial ---

/// Time scale under which the slow-time tutorial step counts as done.
pub const TUTORIAL_SLOW_TIME_THRESHOLD: f32 = 0.5;
