use std::collections::HashSet;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tile_shooter::compute::spawner::*;
use tile_shooter::config::MIN_SPAWN_DISTANCE;
use tile_shooter::entities::*;
use tile_shooter::level::{Level, SpawnCounts};

fn open_level(spawns: SpawnCounts) -> Level {
    Level::new("open", vec![vec![0; 30]; 18], spawns).unwrap()
}

fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// ── valid_spawn_tiles ─────────────────────────────────────────────────────────

#[test]
fn every_floor_tile_is_valid_without_player() {
    let level = open_level(SpawnCounts::default());
    assert_eq!(valid_spawn_tiles(&level, EnemyKind::Bouncing, None).len(), 18 * 30);
}

#[test]
fn wall_tiles_are_never_valid() {
    let level = Level::parse("walled", "111\n101\n111", SpawnCounts::default()).unwrap();
    assert_eq!(valid_spawn_tiles(&level, EnemyKind::Shooting, None), vec![(1, 1)]);
}

#[test]
fn player_exclusion_zone() {
    let level = open_level(SpawnCounts::default());
    let player = Player::centered();
    let near = (8, 14);
    assert!(valid_spawn_tiles(&level, EnemyKind::Basic, None).contains(&near));
    assert!(!valid_spawn_tiles(&level, EnemyKind::Basic, Some(&player.rect)).contains(&near));
}

// ── spawn_enemies ─────────────────────────────────────────────────────────────

#[test]
fn basic_enemy_spawns_away_from_player() {
    let level = open_level(SpawnCounts::new(1, 0, 0));
    let player = Player::centered();
    for seed in 0..32 {
        let mut occupied = HashSet::new();
        let enemies = spawn_enemies(
            EnemyKind::Basic,
            1,
            &level,
            &player.rect,
            &mut occupied,
            0,
            &mut seeded_rng(seed),
        );
        assert_eq!(enemies.len(), 1);
        let distance = enemies[0].rect.center().distance(player.rect.center());
        assert!(distance >= MIN_SPAWN_DISTANCE, "seed {seed}: {distance}");
    }
}

#[test]
fn spawns_on_tile_grid() {
    let level = open_level(SpawnCounts::default());
    let player = Player::centered();
    let enemies = spawn_enemies(
        EnemyKind::Shooting,
        4,
        &level,
        &player.rect,
        &mut HashSet::new(),
        0,
        &mut seeded_rng(1),
    );
    assert_eq!(enemies.len(), 4);
    for enemy in &enemies {
        assert_eq!(enemy.rect.x % 32.0, 0.0);
        assert_eq!(enemy.rect.y % 32.0, 0.0);
        assert_eq!(enemy.movement, Movement::Pursue);
    }
}

#[test]
fn short_supply_spawns_what_fits() {
    let level = Level::parse("cell", "111\n101\n111", SpawnCounts::default()).unwrap();
    let player = Player::centered();
    let enemies = spawn_enemies(
        EnemyKind::Basic,
        3,
        &level,
        &player.rect,
        &mut HashSet::new(),
        0,
        &mut seeded_rng(3),
    );
    assert_eq!(enemies.len(), 1);
    assert_eq!(enemies[0].rect.position(), Vec2::new(32.0, 32.0));
}

#[test]
fn occupied_tiles_are_skipped() {
    let level = Level::parse("cell", "111\n101\n111", SpawnCounts::default()).unwrap();
    let player = Player::centered();
    let mut occupied = HashSet::from([(1, 1)]);
    let enemies = spawn_enemies(
        EnemyKind::Shooting,
        1,
        &level,
        &player.rect,
        &mut occupied,
        0,
        &mut seeded_rng(3),
    );
    assert!(enemies.is_empty());
}

// ── spawn_level ───────────────────────────────────────────────────────────────

#[test]
fn spawn_level_fills_each_roster_on_distinct_tiles() {
    let level = open_level(SpawnCounts::new(10, 5, 5));
    let player = Player::centered();
    let [basic, shooting, bouncing] = spawn_level(&level, &player.rect, 0, &mut seeded_rng(9));
    assert_eq!(basic.len(), 10);
    assert_eq!(shooting.len(), 5);
    assert_eq!(bouncing.len(), 5);
    assert!(basic.iter().all(|e| e.kind == EnemyKind::Basic));
    assert!(shooting.iter().all(|e| e.kind == EnemyKind::Shooting));

    let tiles: HashSet<(i32, i32)> = basic
        .iter()
        .chain(&shooting)
        .chain(&bouncing)
        .map(|e| (e.rect.x as i32, e.rect.y as i32))
        .collect();
    assert_eq!(tiles.len(), 20);
}

#[test]
fn bouncers_get_unit_headings() {
    let level = open_level(SpawnCounts::new(0, 0, 6));
    let player = Player::centered();
    let [_, _, bouncing] = spawn_level(&level, &player.rect, 0, &mut seeded_rng(4));
    for enemy in &bouncing {
        match enemy.movement {
            Movement::Reflect { heading } => assert!((heading.length() - 1.0).abs() < 1e-4),
            Movement::Pursue => panic!("bouncer spawned with pursuit"),
        }
    }
}

#[test]
fn same_seed_same_layout() {
    let level = open_level(SpawnCounts::new(4, 2, 2));
    let player = Player::centered();
    let first = spawn_level(&level, &player.rect, 0, &mut seeded_rng(11));
    let second = spawn_level(&level, &player.rect, 0, &mut seeded_rng(11));
    assert_eq!(first, second);
}

#[test]
fn random_heading_is_unit_length() {
    let mut rng = seeded_rng(5);
    for _ in 0..50 {
        assert!((random_heading(&mut rng).length() - 1.0).abs() < 1e-4);
    }
}
