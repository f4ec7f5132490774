//! GameEngine - the public API the presentation layer talks to.
//!
//! Wraps `core::GameState` with validated construction, snapshot access, and
//! change notification. The engine is the single writer of game state;
//! callers only ever receive `GameSnapshot` values.

use thiserror::Error;

use crate::core::{DeckRng, GameSnapshot, GameState};
use crate::types::{GameConfig, Symbol};

/// Configuration errors, rejected synchronously at `GameEngine::new`.
///
/// Guard violations during play are deliberately not errors - they are
/// defined no-ops, since a UI is expected to issue stale reveals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("pair count must be at least 1")]
    PairCountZero,
    #[error("pair count {requested} exceeds the {available} available symbols")]
    NotEnoughSymbols { requested: usize, available: usize },
    #[error("duplicate symbol {0:?} in the selected alphabet")]
    DuplicateSymbol(Symbol),
}

type Listener = Box<dyn FnMut(&GameSnapshot)>;

/// Owns one game and notifies subscribers on every observable state change.
pub struct GameEngine {
    state: GameState,
    listeners: Vec<Listener>,
    /// Reusable snapshot buffer, refreshed on every mutating call.
    snapshot: GameSnapshot,
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("snapshot", &self.snapshot)
            .finish()
    }
}

impl GameEngine {
    /// Start a new game over the first `config.pair_count` symbols of
    /// `symbols`, with a randomly chosen shuffle seed.
    pub fn new(symbols: &[Symbol], config: GameConfig) -> Result<Self, GameError> {
        Self::build(symbols, config, DeckRng::new(None))
    }

    /// Like [`GameEngine::new`] but with a fixed seed, for reproducible
    /// games and tests.
    pub fn with_seed(symbols: &[Symbol], config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::build(symbols, config, DeckRng::new(Some(seed)))
    }

    fn build(symbols: &[Symbol], config: GameConfig, rng: DeckRng) -> Result<Self, GameError> {
        let alphabet = Self::select_alphabet(symbols, config.pair_count)?;
        let state = GameState::new(alphabet, config, rng);
        let snapshot = state.snapshot();
        Ok(Self {
            state,
            listeners: Vec::new(),
            snapshot,
        })
    }

    /// Validate and select the game's symbol alphabet. No partial state is
    /// created on failure.
    fn select_alphabet(symbols: &[Symbol], pair_count: usize) -> Result<Vec<Symbol>, GameError> {
        if pair_count == 0 {
            return Err(GameError::PairCountZero);
        }
        if pair_count > symbols.len() {
            return Err(GameError::NotEnoughSymbols {
                requested: pair_count,
                available: symbols.len(),
            });
        }

        let selected = &symbols[..pair_count];
        for (i, &symbol) in selected.iter().enumerate() {
            if selected[..i].contains(&symbol) {
                return Err(GameError::DuplicateSymbol(symbol));
            }
        }
        Ok(selected.to_vec())
    }

    /// Register a callback invoked with a fresh snapshot after every
    /// observable state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Attempt to reveal the tile at `pos`.
    ///
    /// Returns the current snapshot whether or not the call was accepted;
    /// guard violations leave the state untouched.
    pub fn reveal(&mut self, pos: usize) -> &GameSnapshot {
        let changed = self.state.reveal(pos);
        self.refresh(changed)
    }

    /// Advance the resolution countdown by `elapsed_ms` of host time.
    ///
    /// Call this from the host loop at whatever cadence it runs; nothing
    /// happens unless a pair comparison is pending.
    pub fn tick(&mut self, elapsed_ms: u32) -> &GameSnapshot {
        let changed = self.state.tick(elapsed_ms);
        self.refresh(changed)
    }

    /// Start a new game with a fresh shuffle. Valid in every state.
    pub fn reset(&mut self) -> &GameSnapshot {
        self.state.reset();
        self.refresh(true)
    }

    /// The current read-only snapshot.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Direct read access to the underlying state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn refresh(&mut self, changed: bool) -> &GameSnapshot {
        if changed {
            self.state.snapshot_into(&mut self.snapshot);
            for listener in &mut self.listeners {
                listener(&self.snapshot);
            }
        }
        &self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileFace;
    use crate::types::Outcome;
    use std::cell::Cell;
    use std::rc::Rc;

    fn config(pairs: usize) -> GameConfig {
        GameConfig {
            pair_count: pairs,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_rejects_zero_pair_count() {
        let err = GameEngine::new(&Symbol::ALL, config(0)).unwrap_err();
        assert_eq!(err, GameError::PairCountZero);
    }

    #[test]
    fn test_rejects_insufficient_symbols() {
        let err = GameEngine::new(&Symbol::ALL[..3], config(5)).unwrap_err();
        assert_eq!(
            err,
            GameError::NotEnoughSymbols {
                requested: 5,
                available: 3
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_symbols() {
        let symbols = [Symbol::Apple, Symbol::Star, Symbol::Apple];
        let err = GameEngine::new(&symbols, config(3)).unwrap_err();
        assert_eq!(err, GameError::DuplicateSymbol(Symbol::Apple));
    }

    #[test]
    fn test_new_game_snapshot() {
        let engine = GameEngine::with_seed(&Symbol::ALL, config(8), 1).unwrap();
        let snap = engine.snapshot();

        assert_eq!(snap.tiles.len(), 16);
        assert!(snap.tiles.iter().all(|t| t.face == TileFace::Hidden));
        assert_eq!(snap.move_count, 0);
        assert_eq!(snap.outcome, Outcome::InProgress);
        assert!(snap.playable());
    }

    #[test]
    fn test_noop_reveal_returns_unchanged_snapshot() {
        let mut engine = GameEngine::with_seed(&Symbol::ALL, config(8), 1).unwrap();
        let before = engine.snapshot().clone();

        let after = engine.reveal(99).clone();
        assert_eq!(before, after);
    }

    #[test]
    fn test_subscribers_fire_on_change_only() {
        let mut engine = GameEngine::with_seed(&Symbol::ALL, config(8), 1).unwrap();
        let calls = Rc::new(Cell::new(0u32));
        let calls_seen = Rc::clone(&calls);
        engine.subscribe(move |_| calls_seen.set(calls_seen.get() + 1));

        engine.reveal(0);
        assert_eq!(calls.get(), 1);

        // Guard violation: no state change, no notification.
        engine.reveal(0);
        assert_eq!(calls.get(), 1);

        // Idle tick: nothing pending, no notification.
        engine.tick(16);
        assert_eq!(calls.get(), 1);

        engine.reset();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_subscriber_sees_current_state() {
        let mut engine = GameEngine::with_seed(&Symbol::ALL, config(8), 1).unwrap();
        let seen = Rc::new(Cell::new(0usize));
        let seen_inner = Rc::clone(&seen);
        engine.subscribe(move |snap| {
            seen_inner.set(snap.tiles.iter().filter(|t| t.face != TileFace::Hidden).count());
        });

        engine.reveal(4);
        assert_eq!(seen.get(), 1);
    }
}
