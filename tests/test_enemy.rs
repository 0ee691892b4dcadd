use glam::Vec2;
use tile_shooter::compute::Clock;
use tile_shooter::entities::*;
use tile_shooter::geometry::{intersects, Rect};

fn clock(now: u64, dt: f32) -> Clock {
    Clock { now, dt }
}

/// Player parked in the middle of the field, below and right of the enemies
/// these tests build near the top-left corner.
fn player() -> Player {
    Player::centered()
}

// ── Pursuit ───────────────────────────────────────────────────────────────────

#[test]
fn basic_enemy_closes_on_player() {
    let mut enemy = Enemy::new(EnemyKind::Basic, 100.0, 100.0, Vec2::ZERO, 0);
    let mut cues = Vec::new();
    enemy.update(&player(), &[], &mut [], clock(100, 0.1), &mut cues);
    assert!(enemy.rect.x > 100.0);
    assert!(enemy.rect.y > 100.0);
    assert_eq!(enemy.facing, Facing::Right);
    assert!(cues.is_empty());
}

#[test]
fn pursuit_slides_along_solid_wall() {
    let mut enemy = Enemy::new(EnemyKind::Basic, 100.0, 100.0, Vec2::ZERO, 0);
    let mut walls = [Wall::solid(Rect::new(129.0, 0.0, 32.0, 576.0))];
    let mut cues = Vec::new();
    enemy.update(&player(), &[], &mut walls, clock(100, 0.1), &mut cues);
    assert_eq!(enemy.rect.x, 100.0);
    assert!(enemy.rect.y > 100.0);
    assert!(cues.is_empty());
}

#[test]
fn pursuit_chips_destructible_wall_once_per_interval() {
    let mut enemy = Enemy::new(EnemyKind::Basic, 100.0, 100.0, Vec2::ZERO, 0);
    let mut walls = [Wall::destructible(Rect::new(129.0, 100.0, 32.0, 32.0))];
    let mut cues = Vec::new();

    enemy.update(&player(), &[], &mut walls, clock(1000, 0.1), &mut cues);
    assert_eq!(walls[0].health, 2);
    // Shoved clear of the wall with a small margin.
    assert_eq!(enemy.rect.x, 129.0 - 28.0 - 5.0);
    assert_eq!(cues, vec![Cue::Sound(Sound::EnemyHitWall)]);
    assert_eq!(enemy.last_collision_damage, Some(1000));

    cues.clear();
    enemy.update(&player(), &[], &mut walls, clock(1500, 0.1), &mut cues);
    assert_eq!(walls[0].health, 2);
    assert!(cues.is_empty());

    enemy.update(&player(), &[], &mut walls, clock(2000, 0.1), &mut cues);
    assert_eq!(walls[0].health, 1);
}

#[test]
fn pursuit_stays_inside_playfield() {
    let mut enemy = Enemy::new(EnemyKind::Basic, 0.0, 0.0, Vec2::ZERO, 0);
    let mut target = player();
    target.rect = target.rect.at(-200.0, -200.0);
    enemy.update(&target, &[], &mut [], clock(100, 0.1), &mut Vec::new());
    assert_eq!(enemy.rect.x, 0.0);
    assert_eq!(enemy.rect.y, 0.0);
}

// ── Reflection ────────────────────────────────────────────────────────────────

#[test]
fn bouncer_reverses_on_wall_contact() {
    let mut enemy = Enemy::new(EnemyKind::Bouncing, 100.0, 100.0, Vec2::X, 0);
    let mut walls = [Wall::solid(Rect::new(140.0, 100.0, 32.0, 32.0))];
    let mut cues = Vec::new();

    enemy.update(&player(), &[], &mut walls, clock(100, 0.1), &mut cues);
    assert_eq!(enemy.rect.x, 100.0, "the blocked move is cancelled");
    assert_eq!(enemy.movement, Movement::Reflect { heading: -Vec2::X });

    enemy.update(&player(), &[], &mut walls, clock(200, 0.1), &mut cues);
    assert!((enemy.rect.x - 85.0).abs() < 1e-3);
    assert_eq!(enemy.rect.y, 100.0);
}

#[test]
fn bouncer_reverses_at_playfield_edge() {
    let mut enemy = Enemy::new(EnemyKind::Bouncing, 925.0, 100.0, Vec2::X, 0);
    enemy.update(&player(), &[], &mut [], clock(100, 0.1), &mut Vec::new());
    assert_eq!(enemy.rect.x, 925.0);
    assert_eq!(enemy.movement, Movement::Reflect { heading: -Vec2::X });
}

// ── Weapons ───────────────────────────────────────────────────────────────────

#[test]
fn shooter_fires_after_fire_rate() {
    let mut enemy = Enemy::new(EnemyKind::Shooting, 100.0, 100.0, Vec2::ZERO, 0);
    let mut cues = Vec::new();

    enemy.update(&player(), &[], &mut [], clock(999, 0.0), &mut cues);
    assert!(enemy.bullets.is_empty());

    enemy.update(&player(), &[], &mut [], clock(1000, 0.0), &mut cues);
    assert_eq!(enemy.bullets.len(), 1);
    assert_eq!(cues, vec![Cue::Sound(Sound::ShootingEnemyShoot)]);

    let shot = &enemy.bullets[0];
    assert_eq!(shot.damage, 2);
    assert_eq!(shot.rect.center(), enemy.rect.center());
    let aim = (player().rect.center() - enemy.rect.center()).normalize();
    assert!((shot.direction - aim).length() < 1e-4);

    enemy.update(&player(), &[], &mut [], clock(1500, 0.0), &mut cues);
    assert_eq!(enemy.bullets.len(), 1);
}

#[test]
fn bouncer_fires_heavy_shots() {
    let mut enemy = Enemy::new(EnemyKind::Bouncing, 100.0, 100.0, Vec2::Y, 0);
    let mut cues = Vec::new();
    enemy.update(&player(), &[], &mut [], clock(3000, 0.0), &mut cues);
    assert_eq!(enemy.bullets.len(), 1);
    assert_eq!(enemy.bullets[0].damage, 6);
    assert_eq!(enemy.bullets[0].rect.width, 20.0);
    assert_eq!(cues, vec![Cue::Sound(Sound::BouncingEnemyShoot)]);
}

#[test]
fn owned_bullets_advance_with_owner() {
    let mut enemy = Enemy::new(EnemyKind::Shooting, 100.0, 100.0, Vec2::ZERO, 0);
    enemy.update(&player(), &[], &mut [], clock(1000, 0.0), &mut Vec::new());
    let start = enemy.bullets[0].rect;
    enemy.update(&player(), &[], &mut [], clock(1050, 0.05), &mut Vec::new());
    assert_ne!(enemy.bullets[0].rect, start);
}

// ── Health ────────────────────────────────────────────────────────────────────

#[test]
fn enemy_marked_once_health_is_gone() {
    let mut enemy = Enemy::new(EnemyKind::Basic, 100.0, 100.0, Vec2::ZERO, 0);
    enemy.take_damage(2);
    enemy.mark_if_dead();
    assert!(!enemy.remove);

    enemy.take_damage(5);
    assert_eq!(enemy.health, 0);
    enemy.mark_if_dead();
    assert!(enemy.remove);

    enemy.mark_if_dead();
    assert!(enemy.remove);
    enemy.update(&player(), &[], &mut [], clock(100, 0.1), &mut Vec::new());
    assert!(enemy.remove, "remove never clears once set");
}

#[test]
fn contact_ready_respects_interval() {
    let mut enemy = Enemy::new(EnemyKind::Basic, 0.0, 0.0, Vec2::ZERO, 0);
    assert!(enemy.contact_ready(0));
    enemy.last_collision_damage = Some(500);
    assert!(!enemy.contact_ready(1499));
    assert!(enemy.contact_ready(1500));
}

#[test]
fn stacked_pursuer_does_not_walk_into_wall() {
    let mut enemy = Enemy::new(EnemyKind::Basic, 100.0, 100.0, Vec2::ZERO, 0);
    let mut walls = [Wall::solid(Rect::new(129.0, 0.0, 32.0, 576.0))];
    let peer = enemy.rect;
    enemy.update(&player(), &[peer], &mut walls, clock(100, 0.1), &mut Vec::new());
    assert!(!intersects(&enemy.rect, &walls[0].rect));
}
