pub mod pitch;
pub mod player;

pub use pitch::*;
pub use player::*;
