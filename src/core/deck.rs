//! Deck generation - paired tiles in a uniformly random order.
//!
//! A deck holds exactly two tiles per symbol. Tiles are immutable once
//! created; their position in the deck identifies them on the board for the
//! life of one game.

use crate::core::rng::DeckRng;
use crate::types::Symbol;

/// Unique per-tile identifier.
///
/// Distinguishes the two tiles that share a symbol. Fresh ids are assigned on
/// every generation; they carry no meaning across games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(pub u32);

/// One board tile: an id and the symbol it bears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub symbol: Symbol,
}

/// An ordered, shuffled sequence of paired tiles.
pub type Deck = Vec<Tile>;

/// Build a shuffled deck with two tiles per symbol.
///
/// The caller guarantees `symbols` is non-empty and duplicate-free; the
/// engine validates this at configuration time.
pub fn generate_deck(symbols: &[Symbol], rng: &mut DeckRng) -> Deck {
    debug_assert!(!symbols.is_empty());

    let mut deck: Deck = symbols
        .iter()
        .chain(symbols.iter())
        .enumerate()
        .map(|(i, &symbol)| Tile {
            id: TileId(i as u32),
            symbol,
        })
        .collect();

    rng.shuffle(&mut deck);
    deck
}
