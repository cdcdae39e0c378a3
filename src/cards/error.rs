use super::card::Card;
use super::kind::Kind;
use crate::ID;

/// Errors that can occur while building or mutating hands.
///
/// Every failure is constructed fresh at the call site with whatever context
/// it has: the offending index, card, or batch position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    /// a card value that is not an integer
    InvalidValue(String),
    /// a hand kind other than player, table, or pile
    InvalidKind(String),
    /// a missing or malformed constructor argument
    InvalidArgument(String),
    /// text that is neither an index nor a card reference
    TypeMismatch(String),
    IndexOutOfRange { index: i64, size: usize },
    CardNotFound(ID<Card>),
    /// card instances are unique within a hand
    DuplicateCard(ID<Card>),
    OperationNotSupported { operation: &'static str, kind: Kind },
    InsufficientCards { requested: usize, available: usize },
    /// the element at `position` of a batch failed validation
    Element {
        position: usize,
        source: Box<HandError>,
    },
}

impl HandError {
    /// Unwraps batch context down to the underlying failure.
    pub fn root(&self) -> &HandError {
        match self {
            Self::Element { source, .. } => source.root(),
            other => other,
        }
    }
    pub(crate) fn at(position: usize, source: HandError) -> Self {
        Self::Element {
            position,
            source: Box::new(source),
        }
    }
}

impl std::fmt::Display for HandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue(s) => write!(f, "invalid card value: {} is not an integer", s),
            Self::InvalidKind(s) => {
                write!(f, "invalid kind: {} (expected player, table or pile)", s)
            }
            Self::InvalidArgument(s) => write!(f, "invalid argument: {}", s),
            Self::TypeMismatch(s) => {
                write!(f, "type mismatch: {} is neither an index nor a card", s)
            }
            Self::IndexOutOfRange { index, size } => {
                write!(f, "index {} out of range for hand of {} cards", index, size)
            }
            Self::CardNotFound(id) => write!(f, "card {} is not in this hand", id),
            Self::DuplicateCard(id) => write!(f, "card {} is already in this hand", id),
            Self::OperationNotSupported { operation, kind } => {
                write!(f, "{} is not supported on {} hands", operation, kind)
            }
            Self::InsufficientCards {
                requested,
                available,
            } => write!(
                f,
                "cannot deal {} cards from a deck of {}",
                requested, available
            ),
            Self::Element { position, source } => {
                write!(f, "error at element {}: {}", position, source)
            }
        }
    }
}

impl std::error::Error for HandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Element { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
