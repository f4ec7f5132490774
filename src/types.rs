//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board layout: tiles are laid out in rows of this many columns.
pub const BOARD_COLUMNS: usize = 4;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const MATCH_DELAY_MS: u32 = 600;
pub const MISMATCH_DELAY_MS: u32 = 950;

/// Default number of symbol pairs (4x4 board).
pub const DEFAULT_PAIR_COUNT: usize = 8;

/// Tile symbols — the matching key. Exactly two tiles per symbol in a deck.
///
/// Equality is the only semantics; the ordering of variants carries no
/// meaning beyond giving `Symbol::ALL` a stable iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Apple,
    Rocket,
    Star,
    Moon,
    Heart,
    Clover,
    Bell,
    Gem,
}

impl Symbol {
    /// The full symbol alphabet, in declaration order.
    pub const ALL: [Symbol; 8] = [
        Symbol::Apple,
        Symbol::Rocket,
        Symbol::Star,
        Symbol::Moon,
        Symbol::Heart,
        Symbol::Clover,
        Symbol::Bell,
        Symbol::Gem,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Apple => "apple",
            Symbol::Rocket => "rocket",
            Symbol::Star => "star",
            Symbol::Moon => "moon",
            Symbol::Heart => "heart",
            Symbol::Clover => "clover",
            Symbol::Bell => "bell",
            Symbol::Gem => "gem",
        }
    }

    /// One-letter face glyph for terminal rendering.
    pub fn letter(&self) -> char {
        match self {
            Symbol::Apple => 'A',
            Symbol::Rocket => 'R',
            Symbol::Star => 'S',
            Symbol::Moon => 'M',
            Symbol::Heart => 'H',
            Symbol::Clover => 'C',
            Symbol::Bell => 'B',
            Symbol::Gem => 'G',
        }
    }
}

/// Game outcome. `Won` is terminal; it is derived from the matched set,
/// never tracked independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
}

/// Engine configuration: pair count and resolution delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of symbol pairs in the deck (deck size is twice this).
    pub pair_count: usize,
    /// Delay before a confirmed match locks in.
    pub match_delay_ms: u32,
    /// Delay before a mismatched pair flips back.
    pub mismatch_delay_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            match_delay_ms: MATCH_DELAY_MS,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
        }
    }
}
