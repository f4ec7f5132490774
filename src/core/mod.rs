//! Core module - pure game logic with no I/O dependencies
//!
//! Deck generation, the turn state machine, and read-only snapshots.
//! Everything here is deterministic under a fixed seed and unit-testable.

pub mod deck;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use deck::{generate_deck, Deck, Tile, TileId};
pub use game_state::GameState;
pub use rng::DeckRng;
pub use snapshot::{GameSnapshot, TileFace, TileView};
