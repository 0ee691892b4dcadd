//! Error types. The simulation itself has no failure paths; errors only come
//! from loading level data and from the frontend's I/O.

use std::io;

/// Top-level error for building a game or running the frontend.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Level error: {0}")]
    Level(#[from] LevelError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No levels to play")]
    NoLevels,
}

/// Rejected level data.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LevelError {
    #[error("Level '{0}' has no tiles")]
    Empty(String),

    #[error("Row {row} has {found} tiles, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("Unknown tile id {value} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, value: u32 },

    #[error("Grid of {cols}x{rows} tiles does not fit the playfield")]
    TooLarge { cols: usize, rows: usize },
}

pub type GameResult<T> = Result<T, GameError>;
