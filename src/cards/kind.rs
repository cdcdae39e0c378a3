use super::error::HandError;
use crate::Arbitrary;

/// How a hand treats the visibility of its cards.
///
/// - `Player`: private until explicitly revealed.
/// - `Table`: always face-up.
/// - `Pile`: a stack where at most the top card shows.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Player,
    Table,
    Pile,
}

impl Kind {
    pub const fn all() -> [Kind; 3] {
        [Kind::Player, Kind::Table, Kind::Pile]
    }
    /// whether the generic reveal operations apply
    pub fn reveals(&self) -> bool {
        !matches!(self, Kind::Pile)
    }
}

/// str isomorphism
impl TryFrom<&str> for Kind {
    type Error = HandError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "player" => Ok(Kind::Player),
            "table" => Ok(Kind::Table),
            "pile" => Ok(Kind::Pile),
            _ => Err(HandError::InvalidKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Kind::Player => write!(f, "player"),
            Kind::Table => write!(f, "table"),
            Kind::Pile => write!(f, "pile"),
        }
    }
}

impl Arbitrary for Kind {
    fn random() -> Self {
        Self::all()[rand::random_range(0..Self::all().len())]
    }
}
