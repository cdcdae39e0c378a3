pub mod card;
pub use card::*;

pub mod deck;

pub mod error;
pub use error::*;

pub mod hand;
pub use hand::*;

pub mod kind;
pub use kind::*;

pub mod selector;
pub use selector::*;

pub mod visibility;
pub use visibility::*;
