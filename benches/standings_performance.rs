//! Performance benchmarks for the standings derivation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mus_tracker::standings::derive_standings;
use mus_tracker::types::{Match, Player, Team};
use mus_tracker::utils;

fn build_corpus(player_count: usize, match_count: usize) -> (Vec<Player>, Vec<Match>) {
    let players: Vec<Player> = (0..player_count)
        .map(|i| Player::new(format!("player_{i}")))
        .collect();

    let matches: Vec<Match> = (0..match_count)
        .map(|i| Match {
            id: utils::generate_match_id(),
            date: utils::current_timestamp(),
            team1: Team {
                players: [
                    players[i % player_count].id,
                    players[(i + 1) % player_count].id,
                ],
                score: (i % 40) as u32,
            },
            team2: Team {
                players: [
                    players[(i + 2) % player_count].id,
                    players[(i + 3) % player_count].id,
                ],
                score: ((i * 7) % 40) as u32,
            },
            completed: true,
        })
        .collect();

    (players, matches)
}

fn bench_derive_standings(c: &mut Criterion) {
    let (small_players, small_matches) = build_corpus(8, 50);
    c.bench_function("derive_standings_8_players_50_matches", |b| {
        b.iter(|| black_box(derive_standings(&small_players, &small_matches)))
    });

    let (large_players, large_matches) = build_corpus(40, 1000);
    c.bench_function("derive_standings_40_players_1000_matches", |b| {
        b.iter(|| black_box(derive_standings(&large_players, &large_matches)))
    });
}

fn bench_summary_sort(c: &mut Criterion) {
    let (players, matches) = build_corpus(40, 1000);

    c.bench_function("summarize_40_players_1000_matches", |b| {
        b.iter(|| {
            black_box(mus_tracker::standings::summarize(
                &players, &matches, 3,
            ))
        })
    });
}

criterion_group!(benches, bench_derive_standings, bench_summary_sort);
criterion_main!(benches);
