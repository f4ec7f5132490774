//! Game state module - the turn state machine for one memory game.
//!
//! Owns the deck, the revealed and matched sets, the move counter, and the
//! pending pair-resolution countdown. All mutation goes through `reveal`,
//! `tick`, and `reset`; everything else is read-only accessors.

use crate::core::deck::{generate_deck, Deck};
use crate::core::rng::DeckRng;
use crate::core::snapshot::{GameSnapshot, TileFace, TileView};
use crate::types::{GameConfig, Outcome, Symbol};

/// A completed two-tile comparison waiting out its resolution delay.
///
/// While one of these is pending the engine is locked: every `reveal` call is
/// dropped until `tick` has consumed the remaining milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingResolution {
    first: usize,
    second: usize,
    is_match: bool,
    remaining_ms: u32,
}

/// Complete state of one memory game.
#[derive(Debug, Clone)]
pub struct GameState {
    deck: Deck,
    /// Symbol alphabet the deck is drawn from (validated by the engine).
    symbols: Vec<Symbol>,
    /// Positions currently face-up but not yet confirmed matched (size 0-2).
    revealed: Vec<usize>,
    /// Positions permanently face-up. Grows two at a time, never shrinks.
    matched: Vec<usize>,
    move_count: u32,
    pending: Option<PendingResolution>,
    /// Monotonic game generation (increments on reset). Stale timers from a
    /// previous game carry an older episode id and can be ignored by hosts.
    episode_id: u32,
    config: GameConfig,
    rng: DeckRng,
}

impl GameState {
    /// Deal a fresh game. `symbols` must be non-empty and duplicate-free;
    /// the engine checks this before constructing a state.
    pub fn new(symbols: Vec<Symbol>, config: GameConfig, mut rng: DeckRng) -> Self {
        let deck = generate_deck(&symbols, &mut rng);
        Self {
            deck,
            symbols,
            revealed: Vec::with_capacity(2),
            matched: Vec::new(),
            move_count: 0,
            pending: None,
            episode_id: 0,
            config,
            rng,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn revealed(&self) -> &[usize] {
        &self.revealed
    }

    pub fn matched(&self) -> &[usize] {
        &self.matched
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// True while a pair comparison is waiting out its resolution delay.
    pub fn locked(&self) -> bool {
        self.pending.is_some()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Derived outcome: won exactly when every deck position is matched.
    pub fn outcome(&self) -> Outcome {
        if !self.deck.is_empty() && self.matched.len() == self.deck.len() {
            Outcome::Won
        } else {
            Outcome::InProgress
        }
    }

    pub fn is_matched(&self, pos: usize) -> bool {
        self.matched.contains(&pos)
    }

    pub fn is_revealed(&self, pos: usize) -> bool {
        self.revealed.contains(&pos)
    }

    /// Attempt to reveal the tile at `pos`.
    ///
    /// Returns whether the state changed. Guard violations (locked engine,
    /// game already won, position out of range, already revealed or matched,
    /// two tiles already up) are silent no-ops.
    pub fn reveal(&mut self, pos: usize) -> bool {
        if self.locked()
            || self.outcome() == Outcome::Won
            || pos >= self.deck.len()
            || self.revealed.len() == 2
            || self.is_revealed(pos)
            || self.is_matched(pos)
        {
            return false;
        }

        self.revealed.push(pos);
        if self.revealed.len() < 2 {
            // First tile of the pair: no move counted yet.
            return true;
        }

        // Second tile: this completes one move and starts the resolution
        // countdown. The lock holds until the delay has fully elapsed.
        let (first, second) = (self.revealed[0], self.revealed[1]);
        let is_match = self.deck[first].symbol == self.deck[second].symbol;
        self.move_count += 1;
        self.pending = Some(PendingResolution {
            first,
            second,
            is_match,
            remaining_ms: if is_match {
                self.config.match_delay_ms
            } else {
                self.config.mismatch_delay_ms
            },
        });

        true
    }

    /// Advance the resolution countdown by `elapsed_ms`.
    ///
    /// Returns whether a pending comparison resolved on this tick. A tick
    /// with nothing pending is a no-op.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let Some(mut pending) = self.pending else {
            return false;
        };

        pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
        if pending.remaining_ms > 0 {
            self.pending = Some(pending);
            return false;
        }

        // Delay elapsed: resolve and release the lock. Both positions move
        // together, so observers never see a half-resolved pair.
        self.revealed.clear();
        self.pending = None;
        if pending.is_match {
            self.matched.push(pending.first);
            self.matched.push(pending.second);
        }

        true
    }

    /// Start a new game: fresh shuffle, cleared sets, zeroed move counter.
    ///
    /// Valid in every state including `Won`. Dropping `pending` cancels any
    /// in-flight resolution, and the episode bump marks external timers from
    /// the previous game as stale.
    pub fn reset(&mut self) {
        self.deck = generate_deck(&self.symbols, &mut self.rng);
        self.revealed.clear();
        self.matched.clear();
        self.move_count = 0;
        self.pending = None;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.tiles.clear();
        out.tiles.extend(self.deck.iter().enumerate().map(|(pos, tile)| {
            let face = if self.is_matched(pos) {
                TileFace::Matched
            } else if self.is_revealed(pos) {
                TileFace::Revealed
            } else {
                TileFace::Hidden
            };
            TileView {
                symbol: tile.symbol,
                face,
            }
        }));

        out.move_count = self.move_count;
        out.outcome = self.outcome();
        out.locked = self.locked();
        out.episode_id = self.episode_id;
        out.seed = self.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
