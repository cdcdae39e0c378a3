use super::card::Card;
use super::error::HandError;
use crate::ID;

/// Points at one card of a hand, either by position or by identity.
///
/// Positions are signed so that text like "-1" still reads as an index;
/// the hand reports anything outside `[0, size)` as out of range.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Selector {
    Index(i64),
    Card(ID<Card>),
}

impl From<usize> for Selector {
    fn from(index: usize) -> Self {
        Self::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}
impl From<ID<Card>> for Selector {
    fn from(id: ID<Card>) -> Self {
        Self::Card(id)
    }
}
impl From<&Card> for Selector {
    fn from(card: &Card) -> Self {
        Self::Card(card.id())
    }
}

/// str isomorphism
/// "3"                                    -> Index(3)
/// "-1"                                   -> Index(-1)
/// "0190a1b2-...-..."                     -> Card(id)
impl TryFrom<&str> for Selector {
    type Error = HandError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        s.parse::<i64>()
            .map(Self::Index)
            .or_else(|_| ID::try_from(s).map(Self::Card))
            .map_err(|_| HandError::TypeMismatch(s.to_string()))
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Index(i) => write!(f, "#{}", i),
            Self::Card(id) => write!(f, "{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_index() {
        assert_eq!(Selector::try_from(" 4 "), Ok(Selector::Index(4)));
    }

    #[test]
    fn parse_card_id() {
        let card = Card::new(5, "d", None);
        let text = card.id().to_string();
        assert_eq!(Selector::try_from(text.as_str()), Ok(Selector::from(&card)));
    }

    #[test]
    fn parse_negative_index() {
        assert_eq!(Selector::try_from("-1"), Ok(Selector::Index(-1)));
    }

    #[test]
    fn parse_neither() {
        assert!(matches!(
            Selector::try_from("1.5"),
            Err(HandError::TypeMismatch(_))
        ));
        assert!(matches!(
            Selector::try_from("queen"),
            Err(HandError::TypeMismatch(_))
        ));
    }
}
