criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        dealing_classic_round,
        dealing_sports_round,
        sampling_catalog_everything,
        revealing_every_seat,
        summarizing_full_table,
}

fn roster(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Player {}", i)).collect()
}

fn dealing_classic_round(c: &mut criterion::Criterion) {
    let config = Config::default().with_players(20).with_imposters(5);
    let names = roster(20);
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("deal a 20-seat classic Round", |b| {
        b.iter(|| Round::deal(&config, &names, &Catalog, rng))
    });
}

fn dealing_sports_round(c: &mut criterion::Criterion) {
    let config = Config::sports();
    let names = roster(config.players());
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("deal a sports Round", |b| {
        b.iter(|| Round::deal(&config, &names, &Catalog, rng))
    });
}

fn sampling_catalog_everything(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("sample an Entry from every category", |b| {
        b.iter(|| Catalog.sample(&Restriction::Everything, rng))
    });
}

fn revealing_every_seat(c: &mut criterion::Criterion) {
    let settings = Settings {
        allies: true,
        length: true,
        ..Settings::default()
    };
    let config = Config::default()
        .with_players(20)
        .with_imposters(6)
        .with_settings(settings);
    let ref mut rng = SmallRng::seed_from_u64(0);
    let round = Round::deal(&config, &roster(20), &Catalog, rng).expect("deal");
    c.bench_function("reveal a View for all 20 seats", |b| {
        b.iter(|| {
            (0..20)
                .map(|i| round.reveal(&config, i))
                .collect::<Vec<_>>()
        })
    });
}

fn summarizing_full_table(c: &mut criterion::Criterion) {
    let config = Config::default().with_players(20).with_imposters(6);
    let ref mut rng = SmallRng::seed_from_u64(0);
    let mut round = Round::deal(&config, &roster(20), &Catalog, rng).expect("deal");
    for i in 0..20 {
        round.acknowledge(i).expect("acknowledge");
    }
    c.bench_function("summarize a completed Round", |b| {
        b.iter(|| round.summarize(&config))
    });
}

use imposter::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
