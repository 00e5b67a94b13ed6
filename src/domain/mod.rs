pub mod filter;
pub mod flags;
pub mod player;
pub mod team;

pub use filter::*;
pub use player::*;
pub use team::*;
