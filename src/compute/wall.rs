use crate::config::DESTRUCTIBLE_WALL_HEALTH;
use crate::entities::Wall;

impl Wall {
    /// Chip a destructible wall. Returns `true` when the hit landed so the
    /// caller can play the impact sound; indestructible and already
    /// destroyed walls ignore it.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        if !self.destructible || self.remove {
            return false;
        }
        self.health = self.health.saturating_sub(amount);
        self.remove = self.health == 0;
        if self.remove {
            tracing::debug!(x = self.rect.x, y = self.rect.y, "Destructible wall destroyed");
        }
        true
    }

    /// Sprite column for the wall's damage state: 0 when intact, growing as
    /// health drops.
    pub fn damage_frame(&self) -> u32 {
        if !self.destructible {
            return 0;
        }
        DESTRUCTIBLE_WALL_HEALTH - self.health.clamp(1, DESTRUCTIBLE_WALL_HEALTH)
    }
}
