//! Benchmarks for snapshotting and stepping a game.
//!
//! Every accepted action clones the state for undo, so clone cost and a
//! single step are the hot paths.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use kill_the_royals::{Action, EngineConfig, GameState};

/// A game some way into play, with a populated undo history.
fn mid_game(seed: u64) -> GameState {
    let mut state = GameState::new(&EngineConfig::default().with_seed(seed));
    for _ in 0..60 {
        let actions = state.legal_actions();
        let Some(action) = actions.iter().find(|a| {
            !matches!(
                a,
                Action::Undo | Action::ActivateAce(_) | Action::ActivateJoker(_)
            )
        }) else {
            break;
        };
        state = state.apply(action);
    }
    state
}

fn bench_clone(c: &mut Criterion) {
    let state = mid_game(42);
    c.bench_function("state_clone", |b| b.iter(|| black_box(state.clone())));
}

fn bench_legal_actions(c: &mut Criterion) {
    let state = mid_game(42);
    c.bench_function("legal_actions", |b| b.iter(|| black_box(state.legal_actions())));
}

fn bench_step(c: &mut Criterion) {
    let state = mid_game(7);
    let actions = state.legal_actions();
    let action = actions.first().copied().unwrap_or(Action::Undo);

    c.bench_function("apply_step", |b| {
        b.iter(|| black_box(state.apply(black_box(&action))));
    });
}

fn bench_new_game(c: &mut Criterion) {
    let config = EngineConfig::default().with_seed(1);
    c.bench_function("new_game", |b| b.iter(|| black_box(GameState::new(black_box(&config)))));
}

fn bench_checkpoint(c: &mut Criterion) {
    let state = mid_game(42);
    c.bench_function("checkpoint_encode", |b| b.iter(|| black_box(state.to_bytes())));
}

criterion_group!(
    benches,
    bench_clone,
    bench_legal_actions,
    bench_step,
    bench_new_game,
    bench_checkpoint
);
criterion_main!(benches);
