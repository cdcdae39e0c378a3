pub mod deal;
pub use deal::*;

pub mod showdown;
pub use showdown::*;

pub mod view;
pub use view::*;
