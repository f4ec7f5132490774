//! Terminal memory match game.
//!
//! The `core` and `engine` modules form a pure, presentation-free game-state
//! engine: deck generation, the reveal/match/mismatch turn state machine,
//! move counting, and win detection. The `term` and `input` modules are the
//! bundled terminal presentation layer, driving the engine through its public
//! snapshot API.

pub mod core;
pub mod engine;
pub mod input;
pub mod term;
pub mod types;

pub use engine::{GameEngine, GameError};
pub use types::{GameConfig, Outcome, Symbol};
