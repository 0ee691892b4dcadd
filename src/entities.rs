//! All game entity types: pure data plus constructors. Behaviour lives in
//! `compute`.

use std::sync::Arc;

use glam::Vec2;

use crate::config::{
    self, Animation, BulletSpec, EnemyStats, DESTRUCTIBLE_WALL_HEALTH, PLAYER_HEIGHT,
    PLAYER_MAX_HEALTH, PLAYER_SPEED, PLAYER_WIDTH, VIRTUAL_HEIGHT, VIRTUAL_WIDTH,
};
use crate::geometry::Rect;
use crate::level::Level;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    /// Chases the player; contact damage only.
    Basic,
    /// Chases the player and fires aimed shots.
    Shooting,
    /// Travels on a fixed heading, reflects off walls, fires aimed shots.
    Bouncing,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Basic, EnemyKind::Shooting, EnemyKind::Bouncing];

    pub fn stats(self) -> EnemyStats {
        match self {
            EnemyKind::Basic => config::ENEMY,
            EnemyKind::Shooting => config::SHOOTING_ENEMY,
            EnemyKind::Bouncing => config::BOUNCING_ENEMY,
        }
    }

    pub fn bullet(self) -> Option<BulletSpec> {
        match self {
            EnemyKind::Basic => None,
            EnemyKind::Shooting => Some(config::SHOOTING_ENEMY_BULLET),
            EnemyKind::Bouncing => Some(config::BOUNCING_ENEMY_BULLET),
        }
    }

    pub fn animation(self) -> Animation {
        match self {
            EnemyKind::Basic => config::ENEMY_ANIMATION,
            EnemyKind::Shooting => config::SHOOTING_ENEMY_ANIMATION,
            EnemyKind::Bouncing => config::BOUNCING_ENEMY_ANIMATION,
        }
    }

    pub fn shot_sound(self) -> Option<Sound> {
        match self {
            EnemyKind::Basic => None,
            EnemyKind::Shooting => Some(Sound::ShootingEnemyShoot),
            EnemyKind::Bouncing => Some(Sound::BouncingEnemyShoot),
        }
    }

    pub fn death_sound(self) -> Sound {
        match self {
            EnemyKind::Basic => Sound::EnemyDeath,
            EnemyKind::Shooting => Sound::ShootingEnemyDeath,
            EnemyKind::Bouncing => Sound::BouncingEnemyDeath,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Start,
    Playing,
    GameOver,
    Win,
}

/// Which way a sprite faces. Display-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

// ── Audio cues ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    PlayerShoot,
    PlayerDamage,
    ShootingEnemyShoot,
    BouncingEnemyShoot,
    EnemyHitWall,
    EnemyDeath,
    ShootingEnemyDeath,
    BouncingEnemyDeath,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Music {
    /// Zero-based level index.
    Level(usize),
    GameOver,
    GameWin,
}

/// A fire-and-forget request for the audio collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Sound(Sound),
    Music(Music),
    StopAllMusic,
    SetMute(bool),
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A straight-line projectile. `remove` always implies `!active`.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub rect: Rect,
    /// Unit vector.
    pub direction: Vec2,
    pub speed: f32,
    pub damage: u32,
    pub active: bool,
    pub remove: bool,
}

impl Bullet {
    /// A bullet of `spec` centred on `origin`, travelling along `direction`.
    pub fn fired(spec: &BulletSpec, origin: Vec2, direction: Vec2) -> Self {
        Bullet {
            rect: Rect::centered_at(origin, spec.width, spec.height),
            direction,
            speed: spec.speed,
            damage: spec.damage,
            active: true,
            remove: false,
        }
    }
}

// ── Walls ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Wall {
    pub rect: Rect,
    pub destructible: bool,
    /// `u32::MAX` for indestructible walls.
    pub health: u32,
    pub remove: bool,
}

impl Wall {
    pub fn solid(rect: Rect) -> Self {
        Wall { rect, destructible: false, health: u32::MAX, remove: false }
    }

    pub fn destructible(rect: Rect) -> Self {
        Wall { rect, destructible: true, health: DESTRUCTIBLE_WALL_HEALTH, remove: false }
    }
}

// ── Player & enemies ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub speed: f32,
    pub health: u32,
    pub facing: Facing,
    /// Clock time of the last shot, `None` before the first one.
    pub last_shot: Option<u64>,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Player {
            rect: Rect::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: PLAYER_SPEED,
            health: PLAYER_MAX_HEALTH,
            facing: Facing::Right,
            last_shot: None,
        }
    }

    /// A player standing in the middle of the playfield.
    pub fn centered() -> Self {
        let (x, y) = Player::spawn_point();
        Player::new(x, y)
    }

    pub fn spawn_point() -> (f32, f32) {
        (VIRTUAL_WIDTH / 2.0 - PLAYER_WIDTH / 2.0, VIRTUAL_HEIGHT / 2.0 - PLAYER_HEIGHT / 2.0)
    }
}

/// How an enemy moves each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Movement {
    /// Steer straight at the player, sliding along walls per axis.
    Pursue,
    /// Travel along `heading`; negate it on any wall contact.
    Reflect { heading: Vec2 },
}

/// Rate-limited aimed shot at the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weapon {
    pub fire_rate: u64,
    pub last_shot: u64,
    pub bullet: BulletSpec,
}

/// The combatant record shared by every enemy kind. Kinds differ only in
/// their `movement` strategy and whether they carry a `weapon`.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub rect: Rect,
    pub speed: f32,
    pub health: u32,
    /// Set once health reaches zero; never cleared.
    pub remove: bool,
    /// Throttles both contact damage to the player and damage to walls.
    pub last_collision_damage: Option<u64>,
    pub facing: Facing,
    pub movement: Movement,
    pub weapon: Option<Weapon>,
    /// Bullets this enemy fired that are still in flight.
    pub bullets: Vec<Bullet>,
}

impl Enemy {
    /// Build an enemy of `kind` at `(x, y)`. `heading` only matters for
    /// bouncing enemies; `now` starts the weapon's fire timer.
    pub fn new(kind: EnemyKind, x: f32, y: f32, heading: Vec2, now: u64) -> Self {
        let stats = kind.stats();
        let movement = match kind {
            EnemyKind::Bouncing => Movement::Reflect { heading },
            EnemyKind::Basic | EnemyKind::Shooting => Movement::Pursue,
        };
        let weapon = stats
            .fire_rate
            .zip(kind.bullet())
            .map(|(fire_rate, bullet)| Weapon { fire_rate, last_shot: now, bullet });
        Enemy {
            kind,
            rect: Rect::new(x, y, stats.width, stats.height),
            speed: stats.speed,
            health: stats.health,
            remove: false,
            last_collision_damage: None,
            facing: Facing::Left,
            movement,
            weapon,
            bullets: Vec::new(),
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so `compute::tick` can return a new copy
/// without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub status: GameStatus,
    pub player: Player,
    pub walls: Vec<Wall>,
    pub enemies: Vec<Enemy>,
    pub shooting_enemies: Vec<Enemy>,
    pub bouncing_enemies: Vec<Enemy>,
    /// Bullets fired by the player.
    pub bullets: Vec<Bullet>,
    pub levels: Arc<[Level]>,
    pub level_index: usize,
    pub muted: bool,
    /// Previous frame's key state, for edge-triggered actions.
    pub mute_was_down: bool,
    pub confirm_was_down: bool,
    /// Clock time of the previous tick.
    pub last_time: Option<u64>,
    pub frame: u64,
    /// Cues emitted by the most recent tick.
    pub cues: Vec<Cue>,
}

impl GameState {
    pub fn enemy_count(&self) -> usize {
        self.enemies.len() + self.shooting_enemies.len() + self.bouncing_enemies.len()
    }

    pub fn all_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().chain(&self.shooting_enemies).chain(&self.bouncing_enemies)
    }

    pub fn current_level(&self) -> Option<&Level> {
        self.levels.get(self.level_index)
    }
}
