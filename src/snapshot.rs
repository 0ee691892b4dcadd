//! Read-only view of a frame for whatever draws it. Renderers never touch
//! `GameState` directly.

use crate::config::{Animation, PLAYER_ANIMATION, PLAYER_MAX_HEALTH};
use crate::entities::{Bullet, EnemyKind, Facing, GameState, GameStatus};
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteKind {
    Player,
    Enemy(EnemyKind),
    Wall,
    DestructibleWall,
    PlayerBullet,
    /// Tagged with the kind that fired it.
    EnemyBullet(EnemyKind),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub rect: Rect,
    /// Column in the sprite sheet; for destructible walls, the damage state.
    pub frame: u32,
    pub facing: Facing,
    pub alive: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub status: GameStatus,
    /// Zero-based.
    pub level: usize,
    pub level_count: usize,
    pub level_name: String,
    pub health: u32,
    pub max_health: u32,
    pub muted: bool,
    /// Back to front: walls, player, enemies with their bullets, player
    /// bullets.
    pub sprites: Vec<Sprite>,
}

pub fn capture(state: &GameState, now: u64) -> FrameSnapshot {
    let mut sprites = Vec::with_capacity(state.walls.len() + state.enemy_count() + state.bullets.len() + 1);

    for wall in &state.walls {
        let kind = if wall.destructible { SpriteKind::DestructibleWall } else { SpriteKind::Wall };
        sprites.push(Sprite {
            kind,
            rect: wall.rect,
            frame: wall.damage_frame(),
            facing: Facing::Right,
            alive: !wall.remove,
        });
    }

    sprites.push(Sprite {
        kind: SpriteKind::Player,
        rect: state.player.rect,
        frame: animation_frame(PLAYER_ANIMATION, now),
        facing: state.player.facing,
        alive: !state.player.is_dead(),
    });

    for enemy in state.all_enemies() {
        sprites.push(Sprite {
            kind: SpriteKind::Enemy(enemy.kind),
            rect: enemy.rect,
            frame: animation_frame(enemy.kind.animation(), now),
            facing: enemy.facing,
            alive: !enemy.remove,
        });
        sprites.extend(enemy.bullets.iter().map(|b| bullet_sprite(b, SpriteKind::EnemyBullet(enemy.kind))));
    }

    sprites.extend(state.bullets.iter().map(|b| bullet_sprite(b, SpriteKind::PlayerBullet)));

    FrameSnapshot {
        status: state.status,
        level: state.level_index,
        level_count: state.levels.len(),
        level_name: state.current_level().map(|l| l.name.clone()).unwrap_or_default(),
        health: state.player.health,
        max_health: PLAYER_MAX_HEALTH,
        muted: state.muted,
        sprites,
    }
}

fn bullet_sprite(bullet: &Bullet, kind: SpriteKind) -> Sprite {
    Sprite { kind, rect: bullet.rect, frame: 0, facing: Facing::Right, alive: bullet.active }
}

/// Time-driven animation: which frame of `animation` is showing at `now`.
pub fn animation_frame(animation: Animation, now: u64) -> u32 {
    ((now / animation.frame_ms) % u64::from(animation.frames)) as u32
}
