use glam::Vec2;

use crate::compute::Clock;
use crate::config::{COLLISION_DAMAGE_INTERVAL, WALL_SHOVE_MARGIN};
use crate::entities::{Bullet, Cue, Enemy, Facing, Movement, Player, Sound, Wall};
use crate::geometry::{heading_towards, intersects, playfield, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Enemy {
    /// One frame of AI: move by the kind's strategy, fire if armed, advance
    /// owned bullets, then check for death.
    ///
    /// `peers` are the other enemies this one should not stack onto.
    pub fn update(
        &mut self,
        player: &Player,
        peers: &[Rect],
        walls: &mut [Wall],
        clock: Clock,
        cues: &mut Vec<Cue>,
    ) {
        let player_center = player.rect.center();
        self.facing = if player_center.x < self.rect.center().x { Facing::Left } else { Facing::Right };

        match self.movement {
            Movement::Pursue => self.pursue(player, peers, walls, clock, cues),
            Movement::Reflect { heading } => self.reflect(heading, walls, clock.dt),
        }

        self.fire(player_center, clock.now, cues);
        for bullet in &mut self.bullets {
            bullet.update(clock.dt, walls);
        }
        self.mark_if_dead();
    }

    /// Direct pursuit toward the player, resolved per axis against walls.
    fn pursue(
        &mut self,
        player: &Player,
        peers: &[Rect],
        walls: &mut [Wall],
        clock: Clock,
        cues: &mut Vec<Cue>,
    ) {
        let heading = heading_towards(self.rect.position(), player.rect.position());
        let velocity = heading * self.speed * clock.dt;

        let probe_x = self.rect.translated(Vec2::new(velocity.x, 0.0));
        let probe_y = self.rect.translated(Vec2::new(0.0, velocity.y));
        let blocked_x = self.probe_walls(&probe_x, Axis::X, walls, clock.now, cues);
        let blocked_y = self.probe_walls(&probe_y, Axis::Y, walls, clock.now, cues);

        if !blocked_x {
            self.rect.x = probe_x.x;
        }
        if !blocked_y {
            self.rect.y = probe_y.y;
        }

        // Stacked on a peer: back off along the axes a wall stopped.
        if peers.iter().any(|peer| intersects(&self.rect, peer)) {
            if blocked_x {
                self.rect.x -= velocity.x;
            }
            if blocked_y {
                self.rect.y -= velocity.y;
            }
        }

        self.rect.clamp_within(&playfield());
    }

    /// Returns whether `probe` hits a wall. The first wall hit wins; if it
    /// is destructible the enemy is shoved clear of it and chips it, at most
    /// once per contact interval.
    fn probe_walls(
        &mut self,
        probe: &Rect,
        axis: Axis,
        walls: &mut [Wall],
        now: u64,
        cues: &mut Vec<Cue>,
    ) -> bool {
        let Some(wall) = walls.iter_mut().find(|wall| intersects(probe, &wall.rect)) else {
            return false;
        };
        if wall.destructible {
            self.shove_out_of(&wall.rect, axis);
            if self.contact_ready(now) {
                if wall.take_damage(1) {
                    cues.push(Cue::Sound(Sound::EnemyHitWall));
                }
                self.last_collision_damage = Some(now);
            }
        }
        true
    }

    fn shove_out_of(&mut self, wall: &Rect, axis: Axis) {
        match axis {
            Axis::X => {
                self.rect.x = if self.rect.x < wall.x {
                    wall.x - self.rect.width - WALL_SHOVE_MARGIN
                } else {
                    wall.right() + WALL_SHOVE_MARGIN
                };
            }
            Axis::Y => {
                self.rect.y = if self.rect.y < wall.y {
                    wall.y - self.rect.height - WALL_SHOVE_MARGIN
                } else {
                    wall.bottom() + WALL_SHOVE_MARGIN
                };
            }
        }
    }

    /// Straight-line travel. Any wall (or the playfield edge) in the way
    /// flips the heading and cancels this frame's move.
    fn reflect(&mut self, heading: Vec2, walls: &[Wall], dt: f32) {
        let prospective = self.rect.translated(heading * self.speed * dt);
        let hit_wall = walls.iter().any(|wall| intersects(&prospective, &wall.rect));
        if hit_wall || !prospective.is_within(&playfield()) {
            self.movement = Movement::Reflect { heading: -heading };
        } else {
            self.rect = prospective;
        }
    }

    /// Fire an aimed shot at `target` if the weapon has cooled down.
    fn fire(&mut self, target: Vec2, now: u64, cues: &mut Vec<Cue>) {
        let Some(weapon) = self.weapon.as_mut() else {
            return;
        };
        if now.saturating_sub(weapon.last_shot) < weapon.fire_rate {
            return;
        }
        let origin = self.rect.center();
        self.bullets.push(Bullet::fired(&weapon.bullet, origin, heading_towards(origin, target)));
        weapon.last_shot = now;
        if let Some(sound) = self.kind.shot_sound() {
            cues.push(Cue::Sound(sound));
        }
    }

    /// Whether enough time has passed since this enemy last dealt contact
    /// damage (to the player or a wall).
    pub fn contact_ready(&self, now: u64) -> bool {
        self.last_collision_damage
            .map_or(true, |last| now.saturating_sub(last) >= COLLISION_DAMAGE_INTERVAL)
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Latch `remove` once health is gone.
    pub fn mark_if_dead(&mut self) {
        if self.health == 0 && !self.remove {
            tracing::debug!(kind = ?self.kind, "Enemy killed");
            self.remove = true;
        }
    }
}
