use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::path::PathBuf;

use rust_carc::core::{Coord, PlayerId, TableConfig};
use rust_carc::frontier::FrontierList;
use rust_carc::table::Table;
use rust_carc::tiles::Rotation;

fn base_table(seed: u64) -> Table {
    let tileset = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tilesets/base.carc");
    let config = TableConfig::new()
        .with_player("Ada")
        .with_player("Grace")
        .with_seed(seed)
        .with_tileset(tileset);
    Table::new(config).unwrap()
}

/// Draw every tile and place it at its first legal spot.
fn play_out(table: &mut Table) -> usize {
    let mut placed = 0;
    let mut turn = 0u8;
    while let Ok(tile) = table.draw() {
        let Some(&(at, turns)) = table.legal_placements(tile).unwrap().first() else {
            continue;
        };
        for _ in 0..turns {
            table.rotate(tile, Rotation::Clockwise).unwrap();
        }
        table.place(tile, PlayerId::new(turn % 2), at).unwrap();
        placed += 1;
        turn = turn.wrapping_add(1);
    }
    placed
}

fn bench_play_out_base(c: &mut Criterion) {
    c.bench_function("play_out_base_set", |b| {
        b.iter_batched(
            || base_table(7),
            |mut table| play_out(black_box(&mut table)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_legal_placements(c: &mut Criterion) {
    let mut table = base_table(11);
    for _ in 0..36 {
        let Ok(tile) = table.draw() else { break };
        if let Some(&(at, turns)) = table.legal_placements(tile).unwrap().first() {
            for _ in 0..turns {
                table.rotate(tile, Rotation::Clockwise).unwrap();
            }
            table.place(tile, PlayerId::new(0), at).unwrap();
        }
    }
    let probe = table.draw().unwrap();

    c.bench_function("legal_placements_mid_game", |b| {
        b.iter(|| table.legal_placements(black_box(probe)))
    });
}

fn bench_take_back(c: &mut Criterion) {
    c.bench_function("take_back_full_board", |b| {
        b.iter_batched(
            || {
                let mut table = base_table(3);
                play_out(&mut table);
                table
            },
            |mut table| while table.take_back().is_ok() {},
            BatchSize::SmallInput,
        )
    });
}

fn bench_frontier_ring(c: &mut Criterion) {
    let ring: Vec<Coord> = (-20..=20)
        .flat_map(|y| [Coord::new(y, -20), Coord::new(y, 20)])
        .chain((-19..20).flat_map(|x| [Coord::new(-20, x), Coord::new(20, x)]))
        .collect();

    c.bench_function("frontier_insert_ring_160", |b| {
        b.iter(|| {
            let mut frontier = FrontierList::new();
            for &at in &ring {
                frontier.insert(black_box(at));
            }
            frontier
        })
    });
}

criterion_group!(
    benches,
    bench_play_out_base,
    bench_legal_placements,
    bench_take_back,
    bench_frontier_ring,
);
criterion_main!(benches);
