use crate::BLACKJACK;
use crate::Score;
use crate::cards::Card;
use crate::cards::Hand;

/// Which side of a two-hand showdown came out ahead.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Left,
    Right,
    Draw,
    /// both hands went over the target
    Nobody,
}

/// One hand's total under a scoring function.
///
/// The total saturates at the bounds of [`Score`]; a sum past the upper
/// bound is still busted against any target.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    pub total: Score,
    pub busted: bool,
}

impl Tally {
    pub fn of<F>(hand: &Hand, target: Score, mapper: F) -> Self
    where
        F: Fn(&Card) -> Score,
    {
        let exact = hand
            .cards()
            .iter()
            .map(mapper)
            .map(i128::from)
            .sum::<i128>();
        let total = exact.clamp(i128::from(Score::MIN), i128::from(Score::MAX)) as Score;
        Self {
            total,
            busted: exact > i128::from(target),
        }
    }
    fn distance(&self, target: Score) -> i128 {
        i128::from(target) - i128::from(self.total)
    }
}

/// The result of comparing two hands against a target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Verdict {
    pub left: (String, Tally),
    pub right: (String, Tally),
    pub outcome: Outcome,
}

impl Verdict {
    /// Name of the winning hand, if any.
    pub fn winner(&self) -> Option<&str> {
        match self.outcome {
            Outcome::Left => Some(&self.left.0),
            Outcome::Right => Some(&self.right.0),
            Outcome::Draw | Outcome::Nobody => None,
        }
    }
}

/// Closest to `target` without going over.
///
/// Each card is scored through `mapper` and every card in a hand counts,
/// face-up or not. Over the target is busted; if both bust nobody wins, if
/// one busts the other wins, otherwise the smaller distance wins and equal
/// distances draw.
pub fn score_hands<F>(a: &Hand, b: &Hand, target: Score, mapper: F) -> Verdict
where
    F: Fn(&Card) -> Score,
{
    let left = Tally::of(a, target, &mapper);
    let right = Tally::of(b, target, &mapper);
    let outcome = match (left.busted, right.busted) {
        (true, true) => Outcome::Nobody,
        (true, false) => Outcome::Right,
        (false, true) => Outcome::Left,
        (false, false) => match left.distance(target).cmp(&right.distance(target)) {
            std::cmp::Ordering::Less => Outcome::Left,
            std::cmp::Ordering::Greater => Outcome::Right,
            std::cmp::Ordering::Equal => Outcome::Draw,
        },
    };
    log::debug!(
        "{} {} vs {} {} to {}: {:?}",
        a.name(),
        left.total,
        b.name(),
        right.total,
        target,
        outcome
    );
    Verdict {
        left: (a.name().to_string(), left),
        right: (b.name().to_string(), right),
        outcome,
    }
}

/// Blackjack card values: aces count 11, faces count 10.
pub fn blackjack(card: &Card) -> Score {
    match card.value() {
        1 => 11,
        11..=13 => 10,
        n => n,
    }
}

/// [`score_hands`] under Blackjack values against 21.
pub fn compare_blackjack(a: &Hand, b: &Hand) -> Verdict {
    score_hands(a, b, BLACKJACK, blackjack)
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.outcome {
            Outcome::Left => write!(f, "{} wins", self.left.0),
            Outcome::Right => write!(f, "{} wins", self.right.0),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Nobody => write!(f, "Nobody wins"),
        }
    }
}
