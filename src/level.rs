//! Level data: a validated tile grid plus how many of each enemy kind to
//! spawn. Levels are static descriptions; walls and enemies are built fresh
//! from them on every load.

use crate::config::{TILE_SIZE, VIRTUAL_HEIGHT, VIRTUAL_WIDTH};
use crate::entities::{EnemyKind, Wall};
use crate::error::LevelError;
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Floor,
    Wall,
    DestructibleWall,
}

impl TryFrom<u32> for Tile {
    type Error = u32;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Tile::Floor),
            1 => Ok(Tile::Wall),
            2 => Ok(Tile::DestructibleWall),
            other => Err(other),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpawnCounts {
    pub enemies: usize,
    pub shooting_enemies: usize,
    pub bouncing_enemies: usize,
}

impl SpawnCounts {
    pub const fn new(enemies: usize, shooting_enemies: usize, bouncing_enemies: usize) -> Self {
        SpawnCounts { enemies, shooting_enemies, bouncing_enemies }
    }

    pub fn of(&self, kind: EnemyKind) -> usize {
        match kind {
            EnemyKind::Basic => self.enemies,
            EnemyKind::Shooting => self.shooting_enemies,
            EnemyKind::Bouncing => self.bouncing_enemies,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub name: String,
    tiles: Vec<Vec<Tile>>,
    pub spawns: SpawnCounts,
}

impl Level {
    /// Build a level from numeric tile ids (0 floor, 1 wall, 2 destructible).
    ///
    /// # Errors
    ///
    /// Rejects empty or ragged grids, unknown tile ids, and grids that do not
    /// fit inside the playfield.
    pub fn new(
        name: impl Into<String>,
        rows: Vec<Vec<u32>>,
        spawns: SpawnCounts,
    ) -> Result<Level, LevelError> {
        let name = name.into();
        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(LevelError::Empty(name)),
        };

        let mut tiles = Vec::with_capacity(rows.len());
        for (row, ids) in rows.iter().enumerate() {
            if ids.len() != expected {
                return Err(LevelError::Ragged { row, expected, found: ids.len() });
            }
            let parsed = ids
                .iter()
                .enumerate()
                .map(|(col, &id)| {
                    Tile::try_from(id).map_err(|value| LevelError::UnknownTile { row, col, value })
                })
                .collect::<Result<Vec<_>, _>>()?;
            tiles.push(parsed);
        }

        let (cols, rows) = (expected, tiles.len());
        if cols as f32 * TILE_SIZE > VIRTUAL_WIDTH || rows as f32 * TILE_SIZE > VIRTUAL_HEIGHT {
            return Err(LevelError::TooLarge { cols, rows });
        }

        Ok(Level { name, tiles, spawns })
    }

    /// Parse a level drawn as lines of digits. Blank lines, spaces and
    /// commas are ignored.
    pub fn parse(name: impl Into<String>, text: &str, spawns: SpawnCounts) -> Result<Level, LevelError> {
        let mut rows = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = rows.len();
            let ids = line
                .chars()
                .filter(|c| !c.is_whitespace() && *c != ',')
                .enumerate()
                .map(|(col, c)| {
                    c.to_digit(10).ok_or(LevelError::UnknownTile { row, col, value: c as u32 })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(ids);
        }
        Level::new(name, rows, spawns)
    }

    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    pub fn cols(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.tiles.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Every tile with its `(row, col)`.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .flat_map(|(row, tiles)| tiles.iter().enumerate().map(move |(col, &t)| (row, col, t)))
    }

    /// Materialise the wall tiles as fresh, undamaged walls.
    pub fn build_walls(&self) -> Vec<Wall> {
        self.iter_tiles()
            .filter_map(|(row, col, tile)| {
                let rect = tile_rect(row, col);
                match tile {
                    Tile::Floor => None,
                    Tile::Wall => Some(Wall::solid(rect)),
                    Tile::DestructibleWall => Some(Wall::destructible(rect)),
                }
            })
            .collect()
    }
}

/// The playfield rectangle covered by tile `(row, col)`.
pub fn tile_rect(row: usize, col: usize) -> Rect {
    Rect::new(col as f32 * TILE_SIZE, row as f32 * TILE_SIZE, TILE_SIZE, TILE_SIZE)
}

// ── Built-in campaign ─────────────────────────────────────────────────────────

const LEVEL_1: &str = "
    111111111111111111111111111111
    100000000000000000000000000001
    100000000000000000000000000001
    100222220000000000222200000001
    100010000000000000200000222221
    100010000000000000200000200001
    100010000000022222200000000001
    100010000000000000200000000001
    100010000000000000200000200001
    100000022200000000000000220221
    100000000200000000000000000001
    100000000200000000000000000001
    100000000200022222222222200001
    100000022200000000000000200001
    100000020000000000000000200001
    100000000000000200000000200001
    100000000000000200000000000001
    111111111111111111111111111111
";

const LEVEL_2: &str = "
    111111111111111111111111111111
    100000000000000000000000000001
    100000000000000000000000000001
    100111100000000000000001111001
    100100000000222222000000001001
    100100000000000000000000001001
    100000002000000000000200000001
    100000002000000000000200000001
    100000002000000000000200000001
    122220000000000000000000022221
    100000002000000000000200000001
    100000002000000000000200000001
    100100000000000000000000001001
    100100000000222222000000001001
    100111100000000000000001111001
    100000000000000000000000000001
    100000000000000000000000000001
    111111111111111111111111111111
";

const LEVEL_3: &str = "
    111111111111111111111111111111
    100000000000000000000000000001
    102220000000001100000000022201
    102000000000000000000000000201
    102000011110000000011110000201
    100000010000000000000010000001
    100000010000000000000010000001
    100022000000000000000000220001
    100000000022000000220000000001
    111000000000000000000000000111
    100000000022000000220000000001
    100022000000000000000000220001
    100000010000000000000010000001
    100000010000000000000010000001
    102000011110000000011110000201
    102000000000000000000000000201
    102220000000001100000000022201
    111111111111111111111111111111
";

/// The three-level campaign shipped with the game.
pub fn builtin_levels() -> Result<Vec<Level>, LevelError> {
    Ok(vec![
        Level::parse("Level 1", LEVEL_1, SpawnCounts::new(5, 3, 0))?,
        Level::parse("Level 2", LEVEL_2, SpawnCounts::new(6, 3, 2))?,
        Level::parse("Level 3", LEVEL_3, SpawnCounts::new(8, 4, 3))?,
    ])
}
