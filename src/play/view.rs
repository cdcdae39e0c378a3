use crate::cards::Card;
use crate::cards::Hand;

/// What one hand currently shows to everyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a> {
    pub name: &'a str,
    pub cards: Vec<&'a Card>,
}

impl<'a> From<&'a Hand> for View<'a> {
    fn from(hand: &'a Hand) -> Self {
        Self {
            name: hand.name(),
            cards: hand.visible(),
        }
    }
}

/// The face-up cards visible from `active`'s seat.
///
/// The active hand always comes first, even with nothing showing; the other
/// hands follow in order and only when they show at least one card.
pub fn visible<'a>(active: &'a Hand, others: &'a [Hand]) -> Vec<View<'a>> {
    std::iter::once(View::from(active))
        .chain(
            others
                .iter()
                .map(View::from)
                .filter(|view| !view.cards.is_empty()),
        )
        .collect()
}

impl std::fmt::Display for View<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:", self.name)?;
        for card in self.cards.iter() {
            write!(f, " {}", card)?;
        }
        Ok(())
    }
}
