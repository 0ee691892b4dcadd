use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec2;

use crate::config::PLAYER_MAX_HEALTH;
use crate::entities::{Facing, Player, Wall};
use crate::geometry::{heading_towards, intersects, playfield, Rect};
use crate::input::{InputSource, Key};

impl Player {
    /// Move according to the held direction keys.
    ///
    /// The full move is tried first; if a wall blocks it, each axis is tried
    /// on its own so the player slides along wall faces.
    pub fn update<I: InputSource + ?Sized>(&mut self, input: &I, dt: f32, walls: &[Wall]) {
        let velocity = self.velocity(input, dt);
        if velocity.x < 0.0 {
            self.facing = Facing::Left;
        } else if velocity.x > 0.0 {
            self.facing = Facing::Right;
        }

        if !self.try_move(velocity, walls) {
            self.try_move(Vec2::new(velocity.x, 0.0), walls);
            self.try_move(Vec2::new(0.0, velocity.y), walls);
        }
        self.rect.clamp_within(&playfield());

        if input.is_pointer_down() {
            self.face_towards(input.pointer().x);
        }
    }

    /// This frame's displacement. Diagonals are scaled by 1/√2 so they are
    /// no faster than straight moves.
    pub fn velocity<I: InputSource + ?Sized>(&self, input: &I, dt: f32) -> Vec2 {
        let step = self.speed * dt;
        let mut velocity = Vec2::ZERO;
        if input.is_key_down(Key::Up) {
            velocity.y -= step;
        }
        if input.is_key_down(Key::Down) {
            velocity.y += step;
        }
        if input.is_key_down(Key::Left) {
            velocity.x -= step;
        }
        if input.is_key_down(Key::Right) {
            velocity.x += step;
        }
        if velocity.x != 0.0 && velocity.y != 0.0 {
            velocity *= FRAC_1_SQRT_2;
        }
        velocity
    }

    fn try_move(&mut self, offset: Vec2, walls: &[Wall]) -> bool {
        let moved = self.rect.translated(offset);
        if blocked(&moved, walls) {
            return false;
        }
        self.rect = moved;
        true
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        tracing::debug!(amount, health = self.health, "Player took damage");
    }

    pub fn restore_health(&mut self) {
        self.health = PLAYER_MAX_HEALTH;
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Unit vector from the player's centre toward `target`.
    pub fn aim_direction(&self, target: Vec2) -> Vec2 {
        heading_towards(self.rect.center(), target)
    }

    pub fn face_towards(&mut self, x: f32) {
        self.facing = if x < self.rect.center().x { Facing::Left } else { Facing::Right };
    }
}

fn blocked(rect: &Rect, walls: &[Wall]) -> bool {
    walls.iter().any(|wall| intersects(rect, &wall.rect))
}
