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
        building_standard_deck,
        dealing_five_from_deck,
        dealing_four_hands,
        removing_pile_batch,
        scoring_blackjack_hands,
}

use cardhand::cards::*;
use cardhand::play::*;

fn building_standard_deck(c: &mut criterion::Criterion) {
    c.bench_function("build a 52-card deck Hand", |b| b.iter(|| Hand::deck("deck")));
}

fn dealing_five_from_deck(c: &mut criterion::Criterion) {
    c.bench_function("deal 5 cards from a full deck", |b| {
        b.iter(|| {
            let mut deck = Hand::deck("deck");
            let mut hand = Hand::player("player", vec![]).unwrap();
            deal_hand(&mut deck, &mut hand, 5).unwrap();
            hand
        })
    });
}

fn dealing_four_hands(c: &mut criterion::Criterion) {
    c.bench_function("deal 4 hands of 13 cards", |b| {
        b.iter(|| {
            let mut deck = Hand::deck("deck");
            let mut hands = (0..4)
                .map(|i| Hand::player(format!("p{}", i), vec![]).unwrap())
                .collect::<Vec<_>>();
            deal_hands(&mut deck, &mut hands, 13).unwrap();
            hands
        })
    });
}

fn removing_pile_batch(c: &mut criterion::Criterion) {
    c.bench_function("remove 26 cards from a face-up pile", |b| {
        b.iter(|| {
            let mut deck = Hand::deck("deck");
            deck.show_top(true).unwrap();
            deck.remove_all((0usize..52).step_by(2)).unwrap()
        })
    });
}

fn scoring_blackjack_hands(c: &mut criterion::Criterion) {
    let a = Hand::player("alice", Card::parse("Ah 7c 2d").unwrap()).unwrap();
    let b = Hand::player("bob", Card::parse("Kh Qs").unwrap()).unwrap();
    c.bench_function("compare two Blackjack hands", |bench| {
        bench.iter(|| compare_blackjack(&a, &b))
    });
}
