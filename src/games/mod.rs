//! The three game modes.
//!
//! - `dealer`: builds the started state for each mode
//! - `classic`: top-card battles, winner takes both cards
//! - `gamble`: higher/lower predictions over two decks
//! - `pit`: higher/lower predictions over hands, wrong calls lose the card
//!
//! Gamble and pit plug a `PredictRules` strategy into the shared
//! `PredictGame` skeleton; classic has no predictions and runs on its own.

pub mod classic;
pub mod dealer;
pub mod gamble;
pub mod pit;

pub use dealer::{new_classic_game, new_gamble_game, new_pit_game};
pub use gamble::{GambleGame, GambleRules};
pub use pit::{PitGame, PitRules};
