//! Read-only snapshot of a game state.
//!
//! The presentation layer renders from these; it never touches the engine's
//! mutable state directly.

use crate::types::{Outcome, Symbol};

/// Visual state of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileFace {
    Hidden,
    Revealed,
    Matched,
}

/// One tile as the presentation layer sees it.
///
/// The symbol is always present; renderers must only show it when the face is
/// not `Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub symbol: Symbol,
    pub face: TileFace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Tiles in deck order; index is the board position.
    pub tiles: Vec<TileView>,
    pub move_count: u32,
    pub outcome: Outcome,
    pub locked: bool,
    pub episode_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    /// Whether the player can currently make a reveal.
    pub fn playable(&self) -> bool {
        !self.locked && self.outcome == Outcome::InProgress
    }

    pub fn won(&self) -> bool {
        self.outcome == Outcome::Won
    }

    /// Number of matched pairs so far.
    pub fn pairs_matched(&self) -> usize {
        self.tiles.iter().filter(|t| t.face == TileFace::Matched).count() / 2
    }

    pub fn pairs_total(&self) -> usize {
        self.tiles.len() / 2
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            tiles: Vec::new(),
            move_count: 0,
            outcome: Outcome::InProgress,
            locked: false,
            episode_id: 0,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(face: TileFace) -> TileView {
        TileView {
            symbol: Symbol::Apple,
            face,
        }
    }

    #[test]
    fn test_playable() {
        let mut snap = GameSnapshot::default();
        assert!(snap.playable());

        snap.locked = true;
        assert!(!snap.playable());

        snap.locked = false;
        snap.outcome = Outcome::Won;
        assert!(!snap.playable());
    }

    #[test]
    fn test_pair_counts() {
        let snap = GameSnapshot {
            tiles: vec![
                tile(TileFace::Matched),
                tile(TileFace::Matched),
                tile(TileFace::Hidden),
                tile(TileFace::Revealed),
            ],
            ..GameSnapshot::default()
        };
        assert_eq!(snap.pairs_matched(), 1);
        assert_eq!(snap.pairs_total(), 2);
    }
}
