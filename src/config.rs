//! Tuning constants. Distances are in virtual pixels, speeds in pixels per
//! second, timers in milliseconds of simulation clock.

// ── Playfield ─────────────────────────────────────────────────────────────────

pub const VIRTUAL_WIDTH: f32 = 960.0;
pub const VIRTUAL_HEIGHT: f32 = 576.0;
pub const TILE_SIZE: f32 = 32.0;

/// Upper bound on a single frame's `dt`, in seconds. A stalled frontend would
/// otherwise teleport entities through walls.
pub const MAX_FRAME_DT: f32 = 0.1;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 30.0;
pub const PLAYER_HEIGHT: f32 = 30.0;
pub const PLAYER_SPEED: f32 = 230.0;
pub const PLAYER_MAX_HEALTH: u32 = 50;
pub const PLAYER_FIRE_RATE: u64 = 100;

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulletSpec {
    pub width: f32,
    pub height: f32,
    pub damage: u32,
    pub speed: f32,
}

pub const PLAYER_BULLET: BulletSpec = BulletSpec { width: 8.0, height: 8.0, damage: 1, speed: 500.0 };
pub const SHOOTING_ENEMY_BULLET: BulletSpec =
    BulletSpec { width: 8.0, height: 8.0, damage: 2, speed: 400.0 };
pub const BOUNCING_ENEMY_BULLET: BulletSpec =
    BulletSpec { width: 20.0, height: 20.0, damage: 6, speed: 200.0 };

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Minimum time between two contact-damage events caused by the same enemy.
/// The same timer throttles the enemy's damage to destructible walls.
pub const COLLISION_DAMAGE_INTERVAL: u64 = 1000;

/// Plain enemies never spawn closer than this to the player's centre.
pub const MIN_SPAWN_DISTANCE: f32 = 100.0;

/// Extra gap left when an enemy is shoved out of a destructible wall.
pub const WALL_SHOVE_MARGIN: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyStats {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub health: u32,
    /// `None` for enemies that never shoot.
    pub fire_rate: Option<u64>,
}

pub const ENEMY: EnemyStats =
    EnemyStats { width: 28.0, height: 28.0, speed: 150.0, health: 3, fire_rate: None };
pub const SHOOTING_ENEMY: EnemyStats =
    EnemyStats { width: 32.0, height: 32.0, speed: 120.0, health: 6, fire_rate: Some(1000) };
pub const BOUNCING_ENEMY: EnemyStats =
    EnemyStats { width: 32.0, height: 32.0, speed: 150.0, health: 18, fire_rate: Some(3000) };

// ── Walls ─────────────────────────────────────────────────────────────────────

pub const DESTRUCTIBLE_WALL_HEALTH: u32 = 3;

// ── Animation (cosmetic) ──────────────────────────────────────────────────────

/// Frames per row and milliseconds per frame of each sprite sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Animation {
    pub frames: u32,
    pub frame_ms: u64,
}

pub const PLAYER_ANIMATION: Animation = Animation { frames: 2, frame_ms: 300 };
pub const ENEMY_ANIMATION: Animation = Animation { frames: 2, frame_ms: 200 };
pub const SHOOTING_ENEMY_ANIMATION: Animation = Animation { frames: 4, frame_ms: 200 };
pub const BOUNCING_ENEMY_ANIMATION: Animation = Animation { frames: 2, frame_ms: 300 };
