use super::card::Card;
use crate::RANKS;
use crate::SUITS;

/// A fresh standard deck: every rank of every suit, sorted by suit then rank.
///
/// Each call mints new card identities, so two decks never share a card.
pub fn standard() -> Vec<Card> {
    SUITS
        .iter()
        .flat_map(|suit| (1..=RANKS).map(move |value| Card::new(value, *suit, None)))
        .collect()
}
