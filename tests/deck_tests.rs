//! Deck generation properties: validity of every generated deck, and a basic
//! statistical uniformity check on the shuffle.

use std::collections::HashMap;

use tui_memory::core::{generate_deck, DeckRng};
use tui_memory::types::Symbol;

#[test]
fn test_deck_length_is_twice_pair_count() {
    for pairs in 1..=Symbol::ALL.len() {
        let deck = generate_deck(&Symbol::ALL[..pairs], &mut DeckRng::new(Some(1)));
        assert_eq!(deck.len(), pairs * 2);
    }
}

#[test]
fn test_every_symbol_appears_exactly_twice() {
    let deck = generate_deck(&Symbol::ALL, &mut DeckRng::new(Some(99)));

    let mut counts: HashMap<Symbol, usize> = HashMap::new();
    for tile in &deck {
        *counts.entry(tile.symbol).or_default() += 1;
    }

    assert_eq!(counts.len(), Symbol::ALL.len());
    for (symbol, count) in counts {
        assert_eq!(count, 2, "{:?} appears {} times", symbol, count);
    }
}

#[test]
fn test_no_duplicate_tile_ids() {
    let deck = generate_deck(&Symbol::ALL, &mut DeckRng::new(Some(7)));

    let mut ids: Vec<u32> = deck.iter().map(|t| t.id.0).collect();
    ids.sort_unstable();
    let before = ids.len();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

/// With 2 pairs (4 tiles) there are C(4,2) = 6 distinguishable symbol
/// layouts. A uniform shuffle should hit each roughly equally often.
#[test]
fn test_shuffle_layout_coverage_is_roughly_uniform() {
    const RUNS: usize = 3000;
    let symbols = &Symbol::ALL[..2];

    let mut counts: HashMap<[bool; 4], usize> = HashMap::new();
    for seed in 0..RUNS as u64 {
        let deck = generate_deck(symbols, &mut DeckRng::new(Some(seed)));
        let mut layout = [false; 4];
        for (pos, tile) in deck.iter().enumerate() {
            layout[pos] = tile.symbol == symbols[0];
        }
        *counts.entry(layout).or_default() += 1;
    }

    assert_eq!(counts.len(), 6, "some layouts never occurred: {:?}", counts);

    // Expected 500 per layout; allow +-30%.
    for (layout, count) in counts {
        assert!(
            (350..=650).contains(&count),
            "layout {:?} occurred {} times (expected ~500)",
            layout,
            count
        );
    }
}

#[test]
fn test_consecutive_generations_differ() {
    let mut rng = DeckRng::new(Some(5));
    let first = generate_deck(&Symbol::ALL, &mut rng);
    let second = generate_deck(&Symbol::ALL, &mut rng);

    // Same RNG stream, fresh permutation each draw.
    assert_ne!(first, second);
}
