use crate::entities::{Bullet, Wall};
use crate::geometry::{intersects, playfield, Rect};

impl Bullet {
    /// Advance one frame. A bullet that ends up inside a wall or entirely off
    /// the playfield is retired; inactive bullets do nothing.
    pub fn update(&mut self, dt: f32, walls: &[Wall]) {
        if !self.active {
            return;
        }
        self.rect = self.rect.translated(self.direction * self.speed * dt);

        if walls.iter().any(|wall| intersects(&self.rect, &wall.rect)) {
            self.expire();
            return;
        }
        if self.rect.is_fully_outside(&playfield()) {
            self.expire();
        }
    }

    /// Stop colliding and queue for removal at the next compaction.
    pub fn expire(&mut self) {
        self.active = false;
        self.remove = true;
    }

    /// Circular hit test against `target`, used for enemy shots at the
    /// player. The bullet's radius is half its width; the target's is half
    /// its smaller side. Player shots at enemies use the rectangle test
    /// instead, so corner grazes register differently for the two.
    pub fn check_collision(&self, target: &Rect) -> bool {
        let distance = self.rect.center().distance(target.center());
        let radius = self.rect.width / 2.0;
        let target_radius = target.width.min(target.height) / 2.0;
        distance < radius + target_radius
    }
}
