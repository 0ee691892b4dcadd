//! The per-frame collision passes. `compute::tick` runs them in the order they
//! appear here; each only flags entities, compaction happens afterwards.

use crate::entities::{Bullet, Cue, Enemy, Player, Sound, Wall};
use crate::geometry::{intersects, push_out, Rect};

/// Player bullets against one enemy list. Each active bullet that overlaps
/// an enemy deals its damage and is spent, so it can hit at most once.
pub fn resolve_bullet_hits(bullets: &mut [Bullet], enemies: &mut [Enemy]) {
    for enemy in enemies.iter_mut().rev() {
        for bullet in bullets.iter_mut().rev().filter(|b| b.active) {
            if intersects(&bullet.rect, &enemy.rect) {
                enemy.take_damage(bullet.damage);
                bullet.expire();
            }
        }
        enemy.mark_if_dead();
    }
}

/// Live enemies touching the player deal 1 damage, throttled per enemy.
pub fn resolve_contact_damage(
    player: &mut Player,
    enemies: &mut [&mut Enemy],
    now: u64,
    cues: &mut Vec<Cue>,
) {
    for enemy in enemies.iter_mut() {
        if enemy.remove || !intersects(&player.rect, &enemy.rect) {
            continue;
        }
        if enemy.contact_ready(now) {
            player.take_damage(1);
            enemy.last_collision_damage = Some(now);
            cues.push(Cue::Sound(Sound::PlayerDamage));
        }
    }
}

/// Push every enemy out of any wall it ended up inside.
pub fn resolve_enemy_walls(enemies: &mut [&mut Enemy], walls: &[Wall], cues: &mut Vec<Cue>) {
    for enemy in enemies.iter_mut() {
        for wall in walls {
            if intersects(&enemy.rect, &wall.rect) {
                push_out(&mut enemy.rect, &wall.rect);
                cues.push(Cue::Sound(Sound::EnemyHitWall));
            }
        }
    }
}

/// Enemy bullets against the player, using the circular test.
pub fn resolve_enemy_bullets(player: &mut Player, enemies: &mut [&mut Enemy], cues: &mut Vec<Cue>) {
    for enemy in enemies.iter_mut() {
        for bullet in enemy.bullets.iter_mut().filter(|b| b.active) {
            if bullet.check_collision(&player.rect) {
                bullet.expire();
                player.take_damage(bullet.damage);
                cues.push(Cue::Sound(Sound::PlayerDamage));
            }
        }
    }
}

/// Keep enemies off the player, out of indestructible walls and off each
/// other. Every push is followed by one more pass against all walls.
pub fn prevent_overlaps(enemies: &mut [&mut Enemy], player: &Rect, walls: &[Wall]) {
    for i in 0..enemies.len() {
        if intersects(&enemies[i].rect, player) {
            separate(&mut enemies[i].rect, player, walls);
        }

        for wall in walls.iter().filter(|w| !w.destructible) {
            if intersects(&enemies[i].rect, &wall.rect) {
                separate(&mut enemies[i].rect, &wall.rect, walls);
            }
        }

        for j in 0..enemies.len() {
            if i == j {
                continue;
            }
            let other = enemies[j].rect;
            if intersects(&enemies[i].rect, &other) {
                separate(&mut enemies[i].rect, &other, walls);
            }
        }
    }
}

fn separate(rect: &mut Rect, other: &Rect, walls: &[Wall]) {
    push_out(rect, other);
    for wall in walls {
        push_out(rect, &wall.rect);
    }
}
