//! Simulation core of a single-player fleet shooter.
//!
//! The library is pure game logic: entity geometry, the formation, collision
//! tests, score/lives bookkeeping and the phase state machine.  Drawing and
//! input acquisition live behind [`render::Renderer`] and
//! [`input::InputEvent`]; the binary supplies terminal versions of both.

pub mod collision;
pub mod config;
pub mod entities;
pub mod fleet;
pub mod game;
pub mod input;
pub mod progress;
pub mod registry;
pub mod render;
