//! Simulation core for a tile-based top-down arena shooter.
//!
//! The core is a pure per-frame `compute::tick` over `entities::GameState`.
//! Rendering, input and audio are collaborators: the core reads an
//! `input::InputSource`, emits `entities::Cue`s for an `audio::AudioSink`,
//! and exposes `snapshot::capture` for whatever draws the frame.

pub mod audio;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod input;
pub mod level;
pub mod snapshot;
