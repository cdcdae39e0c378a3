use super::error::HandError;
use crate::Arbitrary;
use crate::ID;
use crate::RANKS;
use crate::SUITS;

/// A playing card with an identity.
///
/// Value and suit are fixed at construction; only the display reference
/// (a route to an image or SVG) may change afterwards. Equality is by
/// [`ID`], never by value: two Queens of hearts are two different cards.
///
/// Cards are intentionally neither `Clone` nor `Copy`. A card lives in
/// exactly one [`Hand`] at a time and moves between hands by value, so
/// callers that need to point at a card hold on to its [`ID`] instead.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    id: ID<Card>,
    value: i64,
    suit: String,
    display: Option<String>,
}

impl Card {
    pub fn new(value: i64, suit: impl Into<String>, display: Option<String>) -> Self {
        Self {
            id: ID::default(),
            value,
            suit: suit.into(),
            display,
        }
    }
    pub fn id(&self) -> ID<Card> {
        self.id
    }
    pub fn value(&self) -> i64 {
        self.value
    }
    pub fn suit(&self) -> &str {
        &self.suit
    }
    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }
    pub fn set_display(&mut self, display: Option<String>) {
        self.display = display;
    }

    /// Reads a card value from its textual form.
    ///
    /// Decimal integers pass through. Face names and their one-letter
    /// abbreviations map onto the standard ranks (ace low).
    pub fn rank(s: &str) -> Result<i64, HandError> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "a" | "ace" => Ok(1),
            "t" | "ten" => Ok(10),
            "j" | "jack" => Ok(11),
            "q" | "queen" => Ok(12),
            "k" | "king" => Ok(13),
            other => other
                .parse::<i64>()
                .map_err(|_| HandError::InvalidValue(s.to_string())),
        }
    }

    /// Parses whitespace-separated card notations into fresh cards.
    pub fn parse(s: &str) -> Result<Vec<Self>, HandError> {
        s.split_whitespace().map(Self::try_from).collect()
    }
}

#[cfg(test)]
impl Card {
    /// a second instance sharing this card's identity
    pub(crate) fn forge(&self) -> Self {
        Self {
            id: self.id,
            value: self.value,
            suit: self.suit.clone(),
            display: self.display.clone(),
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Card {}

/// (value, suit) text pair, e.g. ("queen", "h") or ("7", "c")
impl TryFrom<(&str, &str)> for Card {
    type Error = HandError;
    fn try_from((value, suit): (&str, &str)) -> Result<Self, Self::Error> {
        Ok(Self::new(Self::rank(value)?, suit.trim(), None))
    }
}

/// compact notation: everything but the last char is the value
/// Ts  -> (10, s)
/// 10h -> (10, h)
impl TryFrom<&str> for Card {
    type Error = HandError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.char_indices().last() {
            Some((i, _)) if i > 0 => Self::try_from((&s[..i], &s[i..])),
            _ => Err(HandError::InvalidValue(s.to_string())),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.value {
            1 => write!(f, "A{}", self.suit),
            10 => write!(f, "T{}", self.suit),
            11 => write!(f, "J{}", self.suit),
            12 => write!(f, "Q{}", self.suit),
            13 => write!(f, "K{}", self.suit),
            n => write!(f, "{}{}", n, self.suit),
        }
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        let value = rand::Rng::random_range(rng, 1..=RANKS);
        let suit = SUITS.choose(rng).copied().unwrap_or(SUITS[0]);
        Self::new(value, suit, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_not_value() {
        let a = Card::new(12, "h", None);
        let b = Card::new(12, "h", None);
        assert!(a != b);
        assert_eq!(a.value(), b.value());
        assert_eq!(a.suit(), b.suit());
    }

    #[test]
    fn display_is_mutable() {
        let mut card = Card::new(1, "s", None);
        let id = card.id();
        assert_eq!(card.display(), None);
        card.set_display(Some("img/as.svg".into()));
        assert_eq!(card.display(), Some("img/as.svg"));
        assert_eq!(card.id(), id);
    }

    #[test]
    fn parse_face_names() {
        let queen = Card::try_from(("queen", "h")).unwrap();
        assert_eq!(queen.value(), 12);
        assert_eq!(queen.suit(), "h");
        let seven = Card::try_from(("7", "c")).unwrap();
        assert_eq!(seven.value(), 7);
        let ace = Card::try_from(("ACE", "d")).unwrap();
        assert_eq!(ace.value(), 1);
    }

    #[test]
    fn parse_rejects_non_integer() {
        assert!(matches!(
            Card::try_from(("seven", "c")),
            Err(HandError::InvalidValue(_))
        ));
        assert!(matches!(
            Card::try_from(("7.5", "c")),
            Err(HandError::InvalidValue(_))
        ));
        assert!(matches!(Card::try_from("x"), Err(HandError::InvalidValue(_))));
        assert!(matches!(Card::try_from(""), Err(HandError::InvalidValue(_))));
    }

    #[test]
    fn compact_notation() {
        let cards = Card::parse("Ts 10h Ac 2d Kc").unwrap();
        let shown = cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(shown, vec!["Ts", "Th", "Ac", "2d", "Kc"]);
        assert_eq!(cards[1].value(), 10);
    }

    #[test]
    fn random_cards_are_in_range() {
        for _ in 0..64 {
            let card = Card::random();
            assert!((1..=RANKS).contains(&card.value()));
            assert!(SUITS.contains(&card.suit()));
        }
    }
}
