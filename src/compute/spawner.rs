//! Enemy placement on open floor tiles.

use std::collections::HashSet;
use std::f32::consts::TAU;

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{MIN_SPAWN_DISTANCE, TILE_SIZE};
use crate::entities::{Enemy, EnemyKind};
use crate::geometry::{playfield, Rect};
use crate::level::{Level, Tile};

/// A tile coordinate, `(row, col)`.
pub type TilePos = (usize, usize);

/// Floor tiles where an enemy of `kind` fits inside the playfield. When
/// `player` is given, tiles whose spawn centre is closer than
/// `MIN_SPAWN_DISTANCE` to the player's centre are skipped.
pub fn valid_spawn_tiles(level: &Level, kind: EnemyKind, player: Option<&Rect>) -> Vec<TilePos> {
    let stats = kind.stats();
    let bounds = playfield();
    level
        .iter_tiles()
        .filter(|&(_, _, tile)| tile == Tile::Floor)
        .filter_map(|(row, col, _)| {
            let rect = Rect::new(col as f32 * TILE_SIZE, row as f32 * TILE_SIZE, stats.width, stats.height);
            if !rect.is_within(&bounds) {
                return None;
            }
            if let Some(player) = player {
                if rect.center().distance(player.center()) < MIN_SPAWN_DISTANCE {
                    return None;
                }
            }
            Some((row, col))
        })
        .collect()
}

/// Spawn up to `count` enemies of `kind` on distinct, shuffled open tiles.
///
/// Tiles in `occupied` are skipped and every tile used is added to it, so
/// successive calls during one level load never stack two enemies. Only
/// basic enemies keep their distance from the player. If there are not
/// enough tiles, as many as possible are spawned and a warning is logged.
pub fn spawn_enemies<R: Rng + ?Sized>(
    kind: EnemyKind,
    count: usize,
    level: &Level,
    player: &Rect,
    occupied: &mut HashSet<TilePos>,
    now: u64,
    rng: &mut R,
) -> Vec<Enemy> {
    let avoid = (kind == EnemyKind::Basic).then_some(player);
    let mut candidates: Vec<TilePos> = valid_spawn_tiles(level, kind, avoid)
        .into_iter()
        .filter(|pos| !occupied.contains(pos))
        .collect();

    if candidates.len() < count {
        tracing::warn!(
            ?kind,
            requested = count,
            available = candidates.len(),
            "Not enough open tiles to spawn every enemy"
        );
    }

    candidates.shuffle(rng);
    candidates.truncate(count);

    candidates
        .into_iter()
        .map(|(row, col)| {
            occupied.insert((row, col));
            let heading = if kind == EnemyKind::Bouncing { random_heading(rng) } else { Vec2::ZERO };
            Enemy::new(kind, col as f32 * TILE_SIZE, row as f32 * TILE_SIZE, heading, now)
        })
        .collect()
}

/// Spawn the level's full roster, one list per kind.
pub fn spawn_level<R: Rng + ?Sized>(
    level: &Level,
    player: &Rect,
    now: u64,
    rng: &mut R,
) -> [Vec<Enemy>; 3] {
    let mut occupied = HashSet::new();
    EnemyKind::ALL.map(|kind| {
        spawn_enemies(kind, level.spawns.of(kind), level, player, &mut occupied, now, rng)
    })
}

/// A uniformly random unit vector.
pub fn random_heading<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let angle = rng.gen::<f32>() * TAU;
    Vec2::new(angle.cos(), angle.sin())
}
