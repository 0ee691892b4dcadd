//! Game-logic functions.
//!
//! `tick` takes an immutable reference to the current `GameState` (plus the
//! polled input, the simulation clock and an RNG handle) and returns a
//! brand-new `GameState`. Side effects are limited to the injected RNG, and
//! audio leaves only as `Cue`s on the returned state.

mod bullet;
pub mod collisions;
mod enemy;
mod player;
pub mod spawner;
mod wall;

use std::sync::Arc;

use rand::Rng;

use crate::config::{MAX_FRAME_DT, PLAYER_BULLET, PLAYER_FIRE_RATE};
use crate::entities::{Bullet, Cue, Enemy, GameState, GameStatus, Music, Player, Sound};
use crate::error::{GameError, GameResult};
use crate::geometry::Rect;
use crate::input::{InputSource, Key};
use crate::level::Level;

/// Simulation time for one frame: the clock reading in milliseconds and the
/// seconds elapsed since the previous frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clock {
    pub now: u64,
    pub dt: f32,
}

/// Seconds between two clock readings, clamped to `MAX_FRAME_DT`. The very
/// first frame has no predecessor and gets zero.
pub fn frame_dt(last: Option<u64>, now: u64) -> f32 {
    last.map_or(0.0, |last| now.saturating_sub(last) as f32 / 1000.0)
        .min(MAX_FRAME_DT)
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial state on the start screen with the first level loaded.
///
/// # Errors
///
/// Returns `GameError::NoLevels` if `levels` is empty.
pub fn init_state<R: Rng + ?Sized>(levels: Vec<Level>, rng: &mut R) -> GameResult<GameState> {
    if levels.is_empty() {
        return Err(GameError::NoLevels);
    }
    let mut state = GameState {
        status: GameStatus::Start,
        player: Player::centered(),
        walls: Vec::new(),
        enemies: Vec::new(),
        shooting_enemies: Vec::new(),
        bouncing_enemies: Vec::new(),
        bullets: Vec::new(),
        levels: levels.into(),
        level_index: 0,
        muted: false,
        mute_was_down: false,
        confirm_was_down: false,
        last_time: None,
        frame: 0,
        cues: Vec::new(),
    };
    load_level(&mut state, 0, 0, rng);
    Ok(state)
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the game by one frame at clock time `now` (milliseconds).
///
/// Only `Playing` runs the simulation; the other states wait for a fresh
/// confirm press. Mute toggles on a fresh press in any state.
pub fn tick<I, R>(state: &GameState, input: &I, now: u64, rng: &mut R) -> GameState
where
    I: InputSource + ?Sized,
    R: Rng + ?Sized,
{
    let mut next = state.clone();
    next.cues.clear();
    next.frame += 1;
    next.last_time = Some(now);
    let clock = Clock { now, dt: frame_dt(state.last_time, now) };

    let confirm = input.is_key_down(Key::Confirm) || input.is_key_down(Key::Shoot);
    let confirm_pressed = confirm && !state.confirm_was_down;

    match next.status {
        GameStatus::Start => {
            if confirm_pressed {
                start_playing(&mut next);
            }
        }
        GameStatus::Playing => play_frame(&mut next, input, clock, rng),
        GameStatus::GameOver | GameStatus::Win => {
            if confirm_pressed {
                restart(&mut next, now, rng);
            }
        }
    }
    next.confirm_was_down = confirm;

    let mute = input.is_key_down(Key::Mute);
    if mute && !state.mute_was_down {
        next.muted = !next.muted;
        next.cues.push(Cue::SetMute(next.muted));
    }
    next.mute_was_down = mute;

    next
}

/// One frame of play: movement, shooting, enemy AI, collision passes,
/// compaction, then the game-over / level-complete check.
fn play_frame<I, R>(state: &mut GameState, input: &I, clock: Clock, rng: &mut R)
where
    I: InputSource + ?Sized,
    R: Rng + ?Sized,
{
    state.player.update(input, clock.dt, &state.walls);
    handle_shooting(state, input, clock.now);
    for bullet in &mut state.bullets {
        bullet.update(clock.dt, &state.walls);
    }

    update_enemies(state, clock);
    run_collisions(state, clock.now);
    compact(state);

    if state.player.is_dead() {
        game_over(state);
    } else if state.enemy_count() == 0 {
        complete_level(state, clock.now, rng);
    }
}

fn handle_shooting<I: InputSource + ?Sized>(state: &mut GameState, input: &I, now: u64) {
    let wants_fire = input.is_pointer_down() || input.is_key_down(Key::Shoot);
    let ready = state
        .player
        .last_shot
        .map_or(true, |last| now.saturating_sub(last) >= PLAYER_FIRE_RATE);
    if !wants_fire || !ready {
        return;
    }

    let pointer = input.pointer();
    let origin = state.player.rect.center();
    let direction = state.player.aim_direction(pointer);
    state.bullets.push(Bullet::fired(&PLAYER_BULLET, origin, direction));
    state.player.face_towards(pointer.x);
    state.player.last_shot = Some(now);
    state.cues.push(Cue::Sound(Sound::PlayerShoot));
}

fn update_enemies(state: &mut GameState, clock: Clock) {
    let GameState { player, walls, enemies, shooting_enemies, bouncing_enemies, cues, .. } = state;
    for list in [enemies, shooting_enemies, bouncing_enemies] {
        for i in 0..list.len() {
            let peers = peer_rects(list, i);
            list[i].update(player, &peers, walls, clock, cues);
        }
    }
}

fn peer_rects(list: &[Enemy], skip: usize) -> Vec<Rect> {
    list.iter()
        .enumerate()
        .filter(|&(i, _)| i != skip)
        .map(|(_, enemy)| enemy.rect)
        .collect()
}

fn run_collisions(state: &mut GameState, now: u64) {
    let GameState { player, walls, enemies, shooting_enemies, bouncing_enemies, bullets, cues, .. } =
        state;

    for list in [&mut *enemies, &mut *shooting_enemies, &mut *bouncing_enemies] {
        collisions::resolve_bullet_hits(bullets, list);
    }

    let mut pool: Vec<&mut Enemy> = enemies
        .iter_mut()
        .chain(shooting_enemies.iter_mut())
        .chain(bouncing_enemies.iter_mut())
        .collect();
    collisions::resolve_contact_damage(player, &mut pool, now, cues);
    collisions::resolve_enemy_walls(&mut pool, walls, cues);
    collisions::resolve_enemy_bullets(player, &mut pool, cues);
    collisions::prevent_overlaps(&mut pool, &player.rect, walls);
}

/// Drop everything flagged for removal this frame. Each dead enemy plays its
/// death sound here, exactly once.
fn compact(state: &mut GameState) {
    state.walls.retain(|wall| !wall.remove);
    state.bullets.retain(|bullet| !bullet.remove);

    let GameState { enemies, shooting_enemies, bouncing_enemies, cues, .. } = state;
    for list in [enemies, shooting_enemies, bouncing_enemies] {
        for enemy in list.iter_mut() {
            enemy.bullets.retain(|bullet| !bullet.remove);
        }
        list.retain(|enemy| {
            if enemy.remove {
                cues.push(Cue::Sound(enemy.kind.death_sound()));
            }
            !enemy.remove
        });
    }
}

// ── Level flow & state transitions ───────────────────────────────────────────

/// Reset the arena for level `index`: recentre and heal the player, clear
/// bullets, rebuild walls and spawn the roster.
fn load_level<R: Rng + ?Sized>(state: &mut GameState, index: usize, now: u64, rng: &mut R) {
    let levels = Arc::clone(&state.levels);
    let Some(level) = levels.get(index) else {
        return;
    };

    state.level_index = index;
    let (x, y) = Player::spawn_point();
    state.player.rect = state.player.rect.at(x, y);
    state.player.restore_health();
    state.bullets.clear();
    state.walls = level.build_walls();

    let [enemies, shooting_enemies, bouncing_enemies] =
        spawner::spawn_level(level, &state.player.rect, now, rng);
    state.enemies = enemies;
    state.shooting_enemies = shooting_enemies;
    state.bouncing_enemies = bouncing_enemies;

    tracing::info!(
        level = %level.name,
        walls = state.walls.len(),
        enemies = state.enemy_count(),
        "Level loaded"
    );
}

fn play_level_music(state: &mut GameState) {
    state.cues.push(Cue::StopAllMusic);
    play_music(state, Music::Level(state.level_index));
}

fn play_music(state: &mut GameState, music: Music) {
    if !state.muted {
        state.cues.push(Cue::Music(music));
    }
}

fn start_playing(state: &mut GameState) {
    tracing::info!("Game started");
    state.status = GameStatus::Playing;
    state.player.restore_health();
    play_level_music(state);
}

fn restart<R: Rng + ?Sized>(state: &mut GameState, now: u64, rng: &mut R) {
    tracing::info!("Game restarted");
    state.status = GameStatus::Playing;
    load_level(state, 0, now, rng);
    play_level_music(state);
}

fn complete_level<R: Rng + ?Sized>(state: &mut GameState, now: u64, rng: &mut R) {
    let next = state.level_index + 1;
    if next >= state.levels.len() {
        win(state);
        return;
    }
    tracing::info!(completed = state.level_index + 1, "Level complete");
    load_level(state, next, now, rng);
    play_level_music(state);
}

fn game_over(state: &mut GameState) {
    tracing::info!(level = state.level_index + 1, "Game over");
    state.status = GameStatus::GameOver;
    state.cues.push(Cue::StopAllMusic);
    play_music(state, Music::GameOver);
}

fn win(state: &mut GameState) {
    tracing::info!("All levels cleared");
    state.status = GameStatus::Win;
    state.cues.push(Cue::StopAllMusic);
    play_music(state, Music::GameWin);
}
