//! Performance benchmarks for bracket construction and full-tournament
//! scoring across a range of participant counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tourney_core::{tournament, Elimination, Rules};

fn play_to_completion(mut t: tourney_core::Tournament) -> tourney_core::Tournament {
    loop {
        let next_match = t.keys().find(|&id| {
            let m = t.match_at(id).unwrap();
            m.is_scorable() && m.scores.is_none()
        });
        let Some(id) = next_match else { break };
        t = t.score(id, vec![1, 0]).unwrap();
    }
    t
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("bracket_build");
    for &np in &[8u32, 32, 128, 512, 2048] {
        group.bench_with_input(BenchmarkId::new("single", np), &np, |b, &np| {
            b.iter(|| black_box(tournament(Rules::Duel(Elimination::Single), np).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("double", np), &np, |b, &np| {
            b.iter(|| black_box(tournament(Rules::Duel(Elimination::Double), np).unwrap()));
        });
    }
    group.finish();
}

fn bench_full_tournament(c: &mut Criterion) {
    let mut group = c.benchmark_group("bracket_play_to_completion");
    for &np in &[8u32, 32, 128, 512] {
        group.bench_with_input(BenchmarkId::new("single", np), &np, |b, &np| {
            b.iter(|| {
                let t = tournament(Rules::Duel(Elimination::Single), np).unwrap();
                black_box(play_to_completion(t))
            });
        });
        group.bench_with_input(BenchmarkId::new("double", np), &np, |b, &np| {
            b.iter(|| {
                let t = tournament(Rules::Duel(Elimination::Double), np).unwrap();
                black_box(play_to_completion(t))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_full_tournament);
criterion_main!(benches);
