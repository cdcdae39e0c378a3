use super::card::Card;
use super::deck;
use super::error::HandError;
use super::kind::Kind;
use super::selector::Selector;
use super::visibility::Visibility;
use crate::ID;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// An ordered collection of cards plus the subset currently face-up.
///
/// Order is stack order: index 0 is the bottom, the last index is the top.
/// The face-up subset is kept as a set of card [`ID`]s, and every public
/// mutator re-establishes two invariants before returning:
///
/// - every shown id belongs to a card currently in the hand;
/// - a pile showing its top card keeps showing its current top (or
///   nothing, once empty) across adds and removes.
///
/// How adds and removes touch visibility depends on [`Kind`]:
///
/// | kind   | on add                        | reveal | show_top |
/// |--------|-------------------------------|--------|----------|
/// | player | nothing                       | yes    | no       |
/// | table  | new cards are shown           | yes    | no       |
/// | pile   | shown top follows the new top | no     | yes      |
///
/// [`toggle`](Hand::toggle) is a low-level primitive available on every kind.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "client", serde(try_from = "Stored"))]
pub struct Hand {
    name: String,
    kind: Kind,
    cards: Vec<Card>,
    shown: BTreeSet<ID<Card>>,
}

/// Serialized form of a [`Hand`], validated on the way back in.
#[cfg(feature = "client")]
#[derive(serde::Deserialize)]
struct Stored {
    name: String,
    kind: Kind,
    cards: Vec<Card>,
    shown: BTreeSet<ID<Card>>,
}

#[cfg(feature = "client")]
impl TryFrom<Stored> for Hand {
    type Error = HandError;
    fn try_from(stored: Stored) -> Result<Self, Self::Error> {
        let mut hand = Self::new(stored.name, stored.cards, stored.kind, Some(false))?;
        match stored.shown.iter().find(|id| hand.index_of(**id).is_none()) {
            Some(&id) => Err(HandError::CardNotFound(id)),
            None => {
                hand.shown = stored.shown;
                Ok(hand)
            }
        }
    }
}

impl Hand {
    /// `top` decides whether a pile starts with its top card face-up. It is
    /// required for piles and ignored for other kinds.
    pub fn new(
        name: impl Into<String>,
        cards: Vec<Card>,
        kind: Kind,
        top: Option<bool>,
    ) -> Result<Self, HandError> {
        let mut seen = BTreeSet::new();
        for (position, card) in cards.iter().enumerate() {
            if !seen.insert(card.id()) {
                return Err(HandError::at(position, HandError::DuplicateCard(card.id())));
            }
        }
        let shown = match (kind, top) {
            (Kind::Player, _) => BTreeSet::new(),
            (Kind::Table, _) => seen,
            (Kind::Pile, Some(true)) => cards.last().map(Card::id).into_iter().collect(),
            (Kind::Pile, Some(false)) => BTreeSet::new(),
            (Kind::Pile, None) => {
                return Err(HandError::InvalidArgument(
                    "pile hands need to know whether the top card is visible".into(),
                ));
            }
        };
        Ok(Self {
            name: name.into(),
            kind,
            cards,
            shown,
        })
    }
    pub fn player(name: impl Into<String>, cards: Vec<Card>) -> Result<Self, HandError> {
        Self::new(name, cards, Kind::Player, None)
    }
    pub fn table(name: impl Into<String>, cards: Vec<Card>) -> Result<Self, HandError> {
        Self::new(name, cards, Kind::Table, None)
    }
    pub fn pile(name: impl Into<String>, cards: Vec<Card>, top: bool) -> Result<Self, HandError> {
        Self::new(name, cards, Kind::Pile, Some(top))
    }
    /// A face-down pile holding a fresh standard deck.
    pub fn deck(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: Kind::Pile,
            cards: deck::standard(),
            shown: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn size(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.index_of(card.id()).is_some()
    }
    /// Face-up cards, in hand order.
    pub fn visible(&self) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|c| self.shown.contains(&c.id()))
            .collect()
    }

    /// Resolves a selector to a position in the hand.
    pub fn position(&self, selector: impl Into<Selector>) -> Result<usize, HandError> {
        match selector.into() {
            Selector::Index(index) => usize::try_from(index)
                .ok()
                .filter(|&i| i < self.size())
                .ok_or(HandError::IndexOutOfRange {
                    index,
                    size: self.size(),
                }),
            Selector::Card(id) => self.index_of(id).ok_or(HandError::CardNotFound(id)),
        }
    }
    pub fn card(&self, selector: impl Into<Selector>) -> Result<&Card, HandError> {
        let i = self.position(selector)?;
        Ok(&self.cards[i])
    }
    /// Mutable access, e.g. to update a card's display reference.
    pub fn card_mut(&mut self, selector: impl Into<Selector>) -> Result<&mut Card, HandError> {
        let i = self.position(selector)?;
        Ok(&mut self.cards[i])
    }
    pub fn is_visible(&self, selector: impl Into<Selector>) -> Result<bool, HandError> {
        let card = self.card(selector)?;
        Ok(self.shown.contains(&card.id()))
    }

    /// Turns one card face-up. Already visible cards are left alone.
    pub fn reveal(&mut self, selector: impl Into<Selector>) -> Result<(), HandError> {
        self.permits("reveal", self.kind.reveals())?;
        let id = self.card(selector)?.id();
        if !self.shown.insert(id) {
            log::trace!("{}: card {} already visible", self.name, id);
        }
        Ok(())
    }
    /// Turns several cards face-up. Nothing changes unless every selector
    /// resolves to a card of this hand.
    pub fn reveal_all<S>(&mut self, selectors: impl IntoIterator<Item = S>) -> Result<(), HandError>
    where
        S: Into<Selector>,
    {
        self.permits("reveal", self.kind.reveals())?;
        let ids = self
            .resolve(selectors)?
            .into_iter()
            .map(|i| self.cards[i].id())
            .collect::<Vec<_>>();
        self.shown.extend(ids);
        Ok(())
    }
    /// Shows exactly the top card of a pile, or hides it.
    pub fn show_top(&mut self, visible: bool) -> Result<(), HandError> {
        self.permits("show_top", self.kind == Kind::Pile)?;
        self.shown.clear();
        if visible {
            self.point_top();
        }
        Ok(())
    }
    /// Flips one card and reports where it ended up.
    pub fn toggle(&mut self, selector: impl Into<Selector>) -> Result<Visibility, HandError> {
        let id = self.card(selector)?.id();
        let visibility = if self.shown.remove(&id) {
            Visibility::Hidden
        } else {
            self.shown.insert(id);
            Visibility::Visible
        };
        log::trace!("{}: card {} toggled {}", self.name, id, visibility);
        Ok(visibility)
    }

    /// Appends a card on top.
    pub fn add(&mut self, card: Card) -> Result<(), HandError> {
        if self.index_of(card.id()).is_some() {
            return Err(HandError::DuplicateCard(card.id()));
        }
        let tracking = self.tracks_top();
        let id = card.id();
        self.cards.push(card);
        match self.kind {
            Kind::Table => {
                self.shown.insert(id);
            }
            Kind::Pile if tracking => self.point_top(),
            _ => {}
        }
        Ok(())
    }
    /// Appends several cards on top, in order. The batch is checked for
    /// cards already in the hand (or repeated within itself) before
    /// anything is added.
    pub fn add_all(&mut self, cards: Vec<Card>) -> Result<(), HandError> {
        let mut incoming = BTreeSet::new();
        for (position, card) in cards.iter().enumerate() {
            if self.index_of(card.id()).is_some() || !incoming.insert(card.id()) {
                log::trace!("{}: rejected batch add at element {}", self.name, position);
                return Err(HandError::at(position, HandError::DuplicateCard(card.id())));
            }
        }
        if cards.is_empty() {
            return Ok(());
        }
        let tracking = self.tracks_top();
        self.cards.extend(cards);
        match self.kind {
            Kind::Table => self.shown.extend(incoming),
            Kind::Pile if tracking => self.point_top(),
            _ => {}
        }
        Ok(())
    }

    /// Takes a card out of the hand and hands it back to the caller.
    pub fn remove(&mut self, selector: impl Into<Selector>) -> Result<Card, HandError> {
        let i = self.position(selector)?;
        let tracking = self.tracks_top();
        let was_top = i + 1 == self.size();
        let card = self.cards.remove(i);
        self.shown.remove(&card.id());
        if tracking && was_top {
            self.point_top();
        }
        Ok(card)
    }
    /// Takes several cards out at once, returned in selector order.
    /// Nothing is removed unless every selector resolves, and no card is
    /// selected twice.
    pub fn remove_all<S>(
        &mut self,
        selectors: impl IntoIterator<Item = S>,
    ) -> Result<Vec<Card>, HandError>
    where
        S: Into<Selector>,
    {
        let positions = self.resolve(selectors)?;
        let tracking = self.tracks_top() && !positions.is_empty();
        let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.cards)
            .into_iter()
            .enumerate()
            .partition(|(i, _)| positions.contains(i));
        self.cards = kept.into_iter().map(|(_, card)| card).collect();
        let mut taken = taken.into_iter().collect::<BTreeMap<usize, Card>>();
        for card in taken.values() {
            self.shown.remove(&card.id());
        }
        if tracking {
            self.point_top();
        }
        Ok(positions.iter().filter_map(|i| taken.remove(i)).collect())
    }
}

impl Hand {
    fn index_of(&self, id: ID<Card>) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }
    /// a pile showing exactly one card keeps that slot on its top
    fn tracks_top(&self) -> bool {
        self.kind == Kind::Pile && self.shown.len() == 1
    }
    fn point_top(&mut self) {
        self.shown.clear();
        if let Some(top) = self.cards.last() {
            self.shown.insert(top.id());
        }
    }
    fn permits(&self, operation: &'static str, allowed: bool) -> Result<(), HandError> {
        match allowed {
            true => Ok(()),
            false => Err(HandError::OperationNotSupported {
                operation,
                kind: self.kind,
            }),
        }
    }
    /// Resolves a batch of selectors up front, tagging the first failure
    /// with its position in the batch.
    fn resolve<S>(&self, selectors: impl IntoIterator<Item = S>) -> Result<Vec<usize>, HandError>
    where
        S: Into<Selector>,
    {
        let mut positions = Vec::new();
        for (position, selector) in selectors.into_iter().enumerate() {
            let i = self
                .position(selector)
                .map_err(|e| HandError::at(position, e))?;
            if positions.contains(&i) {
                let id = self.cards[i].id();
                return Err(HandError::at(position, HandError::DuplicateCard(id)));
            }
            positions.push(i);
        }
        Ok(positions)
    }
}

/// Parses the textual visibility flag a pile is built with.
pub fn flag(s: &str) -> Result<bool, HandError> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(HandError::InvalidArgument(format!(
            "{} is not a boolean visibility flag",
            s
        ))),
    }
}

/// face-down cards in parentheses
/// dealer (pile): (Kd) (3c) 9h
impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({}):", self.name, self.kind)?;
        for card in self.cards.iter() {
            match self.shown.contains(&card.id()) {
                true => write!(f, " {}", card)?,
                false => write!(f, " ({})", card)?,
            }
        }
        Ok(())
    }
}
