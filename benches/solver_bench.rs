use criterion::{black_box, criterion_group, criterion_main, Criterion};

use linesman::lineup::{
    branch_and_bound, greedy_assign, parse_positions, slots_by_scarcity, Candidate, PoolEntry,
    Score, SearchBudget, ROSTER_SLOTS,
};

fn roster(size: usize) -> Vec<Candidate> {
    // Alternating dual-eligible skaters plus one goalie, ratings close
    // enough that the greedy result is rarely provably optimal.
    let shapes = ["LW,C", "C,RW", "RW,D", "D", "LW", "C"];
    let mut candidates: Vec<Candidate> = (0..size.saturating_sub(1))
        .map(|i| Candidate {
            id: format!("p{i}"),
            name: String::new(),
            positions: parse_positions(shapes[i % shapes.len()]),
            group: None,
            rating: 5.0 + ((i * 7) % 13) as f64 * 0.25,
            played: true,
            started: false,
            active: i % 3 == 0,
            injured_reserve: false,
            injured_reserve_plus: false,
        })
        .collect();
    candidates.push(Candidate {
        id: "goalie".to_string(),
        name: String::new(),
        positions: parse_positions("G"),
        group: None,
        rating: 6.0,
        played: true,
        started: false,
        active: true,
        injured_reserve: false,
        injured_reserve_plus: false,
    });
    candidates
}

fn bench_greedy(c: &mut Criterion) {
    let candidates = roster(20);
    let pool: Vec<PoolEntry<'_>> = candidates
        .iter()
        .map(|candidate| PoolEntry { candidate, score: Score::single(0, candidate.rating) })
        .collect();
    let slots = slots_by_scarcity(ROSTER_SLOTS);

    c.bench_function("greedy_assign_20_players", |b| {
        b.iter(|| greedy_assign(black_box(&pool), black_box(&slots)))
    });
}

fn bench_branch_and_bound(c: &mut Criterion) {
    let candidates = roster(20);
    let pool: Vec<PoolEntry<'_>> = candidates
        .iter()
        .map(|candidate| PoolEntry { candidate, score: Score::single(0, candidate.rating) })
        .collect();
    let slots = slots_by_scarcity(ROSTER_SLOTS);
    let budget = SearchBudget::default();

    c.bench_function("branch_and_bound_20_players", |b| {
        b.iter(|| {
            let greedy = greedy_assign(black_box(&pool), &slots);
            branch_and_bound(black_box(&pool), &slots, greedy, &budget)
        })
    });
}

criterion_group!(benches, bench_greedy, bench_branch_and_bound);
criterion_main!(benches);
