use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_memory::core::{generate_deck, DeckRng};
use tui_memory::engine::GameEngine;
use tui_memory::types::{GameConfig, Symbol};

fn bench_deck_generation(c: &mut Criterion) {
    c.bench_function("generate_deck_8_pairs", |b| {
        let mut rng = DeckRng::new(Some(12345));
        b.iter(|| generate_deck(black_box(&Symbol::ALL), &mut rng))
    });
}

fn bench_reveal_cycle(c: &mut Criterion) {
    let mut engine = GameEngine::with_seed(&Symbol::ALL, GameConfig::default(), 12345).unwrap();

    c.bench_function("reveal_tick_cycle", |b| {
        b.iter(|| {
            engine.reveal(black_box(0));
            engine.reveal(black_box(1));
            engine.tick(black_box(1000));
            engine.reset();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = GameEngine::with_seed(&Symbol::ALL, GameConfig::default(), 12345).unwrap();

    c.bench_function("state_snapshot", |b| b.iter(|| engine.state().snapshot()));
}

fn bench_idle_tick(c: &mut Criterion) {
    let mut engine = GameEngine::with_seed(&Symbol::ALL, GameConfig::default(), 12345).unwrap();

    c.bench_function("idle_tick_16ms", |b| {
        b.iter(|| {
            engine.tick(black_box(16));
        })
    });
}

criterion_group!(
    benches,
    bench_deck_generation,
    bench_reveal_cycle,
    bench_snapshot,
    bench_idle_tick
);
criterion_main!(benches);
