//! Core game state: constants, the savable aggregate, and story flags.

pub mod constants;
pub mod events;
pub mod game_state;

pub use constants::*;
pub use events::*;
pub use game_state::*;
