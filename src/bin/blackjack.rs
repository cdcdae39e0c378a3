//! Blackjack Binary
//!
//! Deals two hands from a fresh deck, lets each draw up to the stand
//! threshold, and reports the showdown.
//!
//! Options: --left, --right, --cards, --stand, --target, --seed, --verbose

use cardhand::cards::Hand;
use cardhand::play;
use cardhand::*;
use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "alice")]
    left: String,
    #[arg(long, default_value = "bob")]
    right: String,
    /// cards dealt to each hand before drawing
    #[arg(long, default_value_t = 2)]
    cards: usize,
    /// stop drawing at or above this total
    #[arg(long, default_value_t = STAND)]
    stand: Score,
    /// bust above this total
    #[arg(long, default_value_t = BLACKJACK)]
    target: Score,
    /// seed for a reproducible deal
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    })?;
    let ref mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let mut deck = Hand::deck("deck");
    let mut hands = [
        Hand::player(args.left.as_str(), vec![])?,
        Hand::player(args.right.as_str(), vec![])?,
    ];
    play::deal_hands_with(rng, &mut deck, &mut hands, args.cards)?;
    for hand in hands.iter_mut() {
        if !hand.is_empty() {
            hand.reveal(0usize)?;
        }
        while play::Tally::of(hand, args.target, play::blackjack).total < args.stand
            && !deck.is_empty()
        {
            play::deal_hand_with(rng, &mut deck, hand, 1)?;
            if let Some(card) = hand.top() {
                log::info!("{} draws {}", hand.name(), card);
            }
        }
    }
    for view in play::visible(&deck, &hands) {
        log::debug!("{}", view);
    }
    let [left, right] = &hands;
    let verdict = play::score_hands(left, right, args.target, play::blackjack);
    println!("{}  [{}]", left, verdict.left.1.total);
    println!("{}  [{}]", right, verdict.right.1.total);
    match verdict.winner() {
        Some(_) => println!("{}", verdict.to_string().green().bold()),
        None => println!("{}", verdict.to_string().yellow()),
    }
    Ok(())
}
