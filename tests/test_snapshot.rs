use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tile_shooter::compute::init_state;
use tile_shooter::config::{
    PLAYER_ANIMATION, PLAYER_BULLET, SHOOTING_ENEMY_ANIMATION, SHOOTING_ENEMY_BULLET,
};
use tile_shooter::entities::*;
use tile_shooter::level::builtin_levels;
use tile_shooter::snapshot::*;

fn first_level() -> GameState {
    init_state(builtin_levels().unwrap(), &mut StdRng::seed_from_u64(42)).unwrap()
}

// ── capture ───────────────────────────────────────────────────────────────────

#[test]
fn snapshot_lists_everything_back_to_front() {
    let mut s = first_level();
    s.bullets.push(Bullet::fired(&PLAYER_BULLET, Vec2::new(480.0, 200.0), Vec2::Y));
    let snap = capture(&s, 0);

    assert_eq!(snap.sprites.len(), s.walls.len() + 1 + s.enemy_count() + 1);
    assert!(snap.sprites[..s.walls.len()]
        .iter()
        .all(|sp| matches!(sp.kind, SpriteKind::Wall | SpriteKind::DestructibleWall)));
    assert_eq!(snap.sprites[s.walls.len()].kind, SpriteKind::Player);
    assert_eq!(snap.sprites.last().map(|sp| sp.kind), Some(SpriteKind::PlayerBullet));
}

#[test]
fn snapshot_carries_hud_fields() {
    let mut s = first_level();
    s.player.health = 17;
    s.muted = true;
    let snap = capture(&s, 0);
    assert_eq!(snap.status, GameStatus::Start);
    assert_eq!(snap.level, 0);
    assert_eq!(snap.level_count, 3);
    assert_eq!(snap.level_name, "Level 1");
    assert_eq!(snap.health, 17);
    assert_eq!(snap.max_health, 50);
    assert!(snap.muted);
}

#[test]
fn enemy_bullets_follow_their_owner() {
    let mut s = first_level();
    let origin = s.shooting_enemies[0].rect.center();
    s.shooting_enemies[0]
        .bullets
        .push(Bullet::fired(&SHOOTING_ENEMY_BULLET, origin, Vec2::X));
    let snap = capture(&s, 0);

    let owner = snap
        .sprites
        .iter()
        .position(|sp| sp.kind == SpriteKind::Enemy(EnemyKind::Shooting))
        .unwrap();
    assert_eq!(snap.sprites[owner + 1].kind, SpriteKind::EnemyBullet(EnemyKind::Shooting));
}

#[test]
fn flagged_entities_are_not_alive() {
    let mut s = first_level();
    s.enemies[0].remove = true;
    let snap = capture(&s, 0);
    let sprite = snap.sprites.iter().find(|sp| sp.rect == s.enemies[0].rect).unwrap();
    assert!(!sprite.alive);
}

#[test]
fn animation_cycles_with_time() {
    assert_eq!(animation_frame(PLAYER_ANIMATION, 0), 0);
    assert_eq!(animation_frame(PLAYER_ANIMATION, 299), 0);
    assert_eq!(animation_frame(PLAYER_ANIMATION, 300), 1);
    assert_eq!(animation_frame(PLAYER_ANIMATION, 600), 0);
    assert_eq!(animation_frame(SHOOTING_ENEMY_ANIMATION, 600), 3);
}
