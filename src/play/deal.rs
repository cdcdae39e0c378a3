use crate::cards::HandError;
use crate::cards::Hand;
use crate::cards::Selector;

/// Deals `quantity` random cards from `deck` onto `hand`.
///
/// The cards are drawn at `quantity` distinct positions sampled uniformly
/// without replacement from the deck's current extent. They leave the deck
/// through [`Hand::remove_all`] and join the hand through [`Hand::add_all`],
/// so both hands apply their own visibility rules. Nothing moves if the deck
/// is too small.
pub fn deal_hand(deck: &mut Hand, hand: &mut Hand, quantity: usize) -> Result<(), HandError> {
    deal_hand_with(&mut rand::rng(), deck, hand, quantity)
}

/// [`deal_hand`] with a caller-supplied source of randomness.
pub fn deal_hand_with<R>(
    rng: &mut R,
    deck: &mut Hand,
    hand: &mut Hand,
    quantity: usize,
) -> Result<(), HandError>
where
    R: rand::Rng + ?Sized,
{
    if quantity > deck.size() {
        return Err(HandError::InsufficientCards {
            requested: quantity,
            available: deck.size(),
        });
    }
    let positions = rand::seq::index::sample(rng, deck.size(), quantity).into_vec();
    if let Some(card) = positions
        .iter()
        .map(|&i| &deck.cards()[i])
        .find(|card| hand.contains(card))
    {
        return Err(HandError::DuplicateCard(card.id()));
    }
    let cards = deck.remove_all(positions.into_iter().map(Selector::from))?;
    log::debug!(
        "dealt {} cards from {} to {} ({} left)",
        cards.len(),
        deck.name(),
        hand.name(),
        deck.size()
    );
    hand.add_all(cards)
}

/// Deals `quantity` cards to each hand, in order.
///
/// Hands share the deck progressively: the second hand draws from whatever
/// the first one left behind. The total demand is checked before the first
/// card moves.
pub fn deal_hands(deck: &mut Hand, hands: &mut [Hand], quantity: usize) -> Result<(), HandError> {
    deal_hands_with(&mut rand::rng(), deck, hands, quantity)
}

/// [`deal_hands`] with a caller-supplied source of randomness.
pub fn deal_hands_with<R>(
    rng: &mut R,
    deck: &mut Hand,
    hands: &mut [Hand],
    quantity: usize,
) -> Result<(), HandError>
where
    R: rand::Rng + ?Sized,
{
    match quantity.checked_mul(hands.len()) {
        Some(total) if total <= deck.size() => hands
            .iter_mut()
            .try_for_each(|hand| deal_hand_with(rng, deck, hand, quantity)),
        total => Err(HandError::InsufficientCards {
            requested: total.unwrap_or(usize::MAX),
            available: deck.size(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DECK_SIZE;
    use crate::ID;
    use crate::cards::Card;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    fn ids(hand: &Hand) -> HashSet<ID<Card>> {
        hand.cards().iter().map(Card::id).collect()
    }

    #[test]
    fn five_from_fifty_two() {
        let mut deck = Hand::deck("deck");
        let mut player = Hand::player("player", vec![]).unwrap();
        let before = ids(&deck);
        deal_hand(&mut deck, &mut player, 5).unwrap();
        assert_eq!(player.size(), 5);
        assert_eq!(deck.size(), DECK_SIZE - 5);
        let dealt = ids(&player);
        assert_eq!(dealt.len(), 5);
        assert!(dealt.is_subset(&before));
        assert!(dealt.is_disjoint(&ids(&deck)));
    }

    #[test]
    fn too_many_leaves_everything_alone() {
        let mut deck = Hand::pile("deck", Card::parse("Ah 2h 3h").unwrap(), true).unwrap();
        let mut player = Hand::player("player", Card::parse("Kc").unwrap()).unwrap();
        let err = deal_hand(&mut deck, &mut player, 4).unwrap_err();
        assert_eq!(
            err,
            HandError::InsufficientCards {
                requested: 4,
                available: 3
            }
        );
        assert_eq!(deck.size(), 3);
        assert_eq!(player.size(), 1);
        assert_eq!(deck.visible().len(), 1);
    }

    #[test]
    fn whole_deck_can_be_dealt() {
        let mut deck = Hand::pile("deck", Card::parse("Ah 2h 3h").unwrap(), true).unwrap();
        let mut table = Hand::table("table", vec![]).unwrap();
        deal_hand(&mut deck, &mut table, 3).unwrap();
        assert!(deck.is_empty());
        assert!(deck.visible().is_empty());
        assert_eq!(table.visible().len(), 3);
    }

    #[test]
    fn destination_rules_apply() {
        let mut deck = Hand::deck("deck");
        let mut discard = Hand::pile("discard", Card::parse("9s").unwrap(), true).unwrap();
        deal_hand(&mut deck, &mut discard, 3).unwrap();
        assert_eq!(discard.visible().len(), 1);
        assert_eq!(discard.visible()[0].id(), discard.top().unwrap().id());
        let mut player = Hand::player("player", vec![]).unwrap();
        deal_hand(&mut deck, &mut player, 3).unwrap();
        assert!(player.visible().is_empty());
    }

    #[test]
    fn source_pile_keeps_showing_top() {
        let mut deck = Hand::deck("deck");
        deck.show_top(true).unwrap();
        let mut player = Hand::player("player", vec![]).unwrap();
        deal_hand(&mut deck, &mut player, 10).unwrap();
        assert_eq!(deck.visible().len(), 1);
        assert_eq!(deck.visible()[0].id(), deck.top().unwrap().id());
    }

    #[test]
    fn many_hands_drain_in_order() {
        let mut deck = Hand::deck("deck");
        let mut hands = ["a", "b", "c"]
            .into_iter()
            .map(|name| Hand::player(name, vec![]).unwrap())
            .collect::<Vec<_>>();
        deal_hands(&mut deck, &mut hands, 4).unwrap();
        assert_eq!(deck.size(), DECK_SIZE - 12);
        assert!(hands.iter().all(|h| h.size() == 4));
        let all = hands.iter().flat_map(ids).collect::<HashSet<_>>();
        assert_eq!(all.len(), 12);
    }

    #[test]
    fn many_hands_checked_up_front() {
        let mut deck = Hand::pile("deck", Card::parse("Ah 2h 3h 4h 5h").unwrap(), false).unwrap();
        let mut hands = vec![
            Hand::player("a", vec![]).unwrap(),
            Hand::player("b", vec![]).unwrap(),
        ];
        let err = deal_hands(&mut deck, &mut hands, 3).unwrap_err();
        assert!(matches!(err, HandError::InsufficientCards { requested: 6, .. }));
        assert_eq!(deck.size(), 5);
        assert!(hands.iter().all(Hand::is_empty));
        let err = deal_hands(&mut deck, &mut hands, usize::MAX).unwrap_err();
        assert!(matches!(err, HandError::InsufficientCards { .. }));
    }

    #[test]
    fn seeded_deals_repeat() {
        let faces = |seed: u64| {
            let mut deck = Hand::deck("deck");
            let mut player = Hand::player("player", vec![]).unwrap();
            let ref mut rng = SmallRng::seed_from_u64(seed);
            deal_hand_with(rng, &mut deck, &mut player, 7).unwrap();
            player
                .cards()
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(faces(42), faces(42));
    }

    #[test]
    fn draws_are_roughly_uniform() {
        let mut counts = [0usize; 4];
        let ref mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..4000 {
            let mut deck = Hand::pile("deck", Card::parse("Ac Ad Ah As").unwrap(), false).unwrap();
            let mut player = Hand::player("player", vec![]).unwrap();
            deal_hand_with(rng, &mut deck, &mut player, 1).unwrap();
            let suit = player.card(0usize).unwrap().suit().to_string();
            counts[crate::SUITS.iter().position(|s| *s == suit).unwrap()] += 1;
        }
        assert!(counts.iter().all(|&n| n > 850 && n < 1150));
    }
}
