use risk_odds_core as core;

// Hard-code seeds for deterministic results
const BATTLE_SEED: u64 = 11237964071758638171;

fn cold_fill_small() {
    let mut resolver = core::Resolver::new();
    iai::black_box(resolver.win_probability(iai::black_box(30), iai::black_box(30)));
}

fn cold_fill_large() {
    let mut resolver = core::Resolver::new();
    iai::black_box(resolver.win_probability(iai::black_box(300), iai::black_box(200)));
}

fn warm_queries() {
    let mut resolver = core::Resolver::new();
    resolver.win_probability(50, 50);
    for a in 1..=50 {
        for d in 1..=50 {
            iai::black_box(resolver.win_probability(a, d));
        }
    }
}

fn simulate_battles() {
    let mut rng = core::Rng::with_seed(BATTLE_SEED);
    for _ in 0..100 {
        iai::black_box(core::simulate_battle(50, 50, &mut rng).unwrap());
    }
}

iai::main!(cold_fill_small, cold_fill_large, warm_queries, simulate_battles);
