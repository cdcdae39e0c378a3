//! Card-game hands with per-card visibility.
//!
//! A [`Hand`](cards::Hand) is an ordered collection of identity-bearing
//! [`Card`](cards::Card)s plus the subset of them that is currently face-up.
//! Its [`Kind`](cards::Kind) decides how that subset reacts to cards coming
//! and going: player hands stay hidden until revealed, table hands are always
//! face-up, and piles show at most their top card.
//!
//! On top of the hand sit the [`play`] utilities: uniform dealing without
//! replacement from a deck into hands, a view of what every seat can see,
//! and a closest-to-target showdown in the style of Blackjack.

pub mod cards;
pub mod play;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Totals and per-card values produced by a scoring function.
pub type Score = i64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
/// Typed identity handle over a v7 uuid.
///
/// Every card gets a fresh one at construction, so two cards with the same
/// value and suit are still different cards.
pub struct ID<T> {
    uuid: uuid::Uuid,
    marker: std::marker::PhantomData<T>,
}

impl<T> ID<T> {
    fn new(uuid: uuid::Uuid) -> Self {
        Self {
            uuid,
            marker: std::marker::PhantomData,
        }
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self::new(uuid::Uuid::now_v7())
    }
}

/// str isomorphism
impl<T> TryFrom<&str> for ID<T> {
    type Error = uuid::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        uuid::Uuid::parse_str(s.trim()).map(Self::new)
    }
}

// no bounds on T
impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}
impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.uuid.cmp(&other.uuid)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> std::hash::Hash for ID<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl<T> std::fmt::Debug for ID<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID({})", self.uuid)
    }
}
impl<T> std::fmt::Display for ID<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uuid)
    }
}

#[cfg(feature = "client")]
impl<T> serde::Serialize for ID<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.uuid.serialize(serializer)
    }
}
#[cfg(feature = "client")]
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        uuid::Uuid::deserialize(deserializer).map(Self::new)
    }
}

// ============================================================================
// DECK PARAMETERS
// ============================================================================
/// Suit symbols of the standard deck, in canonical order.
pub const SUITS: [&str; 4] = ["c", "d", "h", "s"];
/// Number of ranks per suit. Ace is 1, King is 13.
pub const RANKS: i64 = 13;
/// Size of the standard deck.
pub const DECK_SIZE: usize = SUITS.len() * RANKS as usize;

// ============================================================================
// BLACKJACK PARAMETERS
// ============================================================================
/// Ceiling above which a Blackjack hand is busted.
pub const BLACKJACK: Score = 21;
/// Total at which the demo players stop drawing.
pub const STAND: Score = 17;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Directory for timestamped log files.
pub const LOG_DIRECTORY: &str = "logs";

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Writes DEBUG level to file, `level` to terminal.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    std::fs::create_dir_all(LOG_DIRECTORY)?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("{}/{}.log", LOG_DIRECTORY, time))?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
