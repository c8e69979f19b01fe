//! Round rules for the higher/lower modes.
//!
//! - `PredictRules`: per-mode decisions (CPU choices, card source,
//!   pit consequences, victory)
//! - `PredictGame`: the shared phase machine driven by the UI layer
//! - `judge`: prediction evaluation with the both-correct tie-break
//!
//! The skeleton never interprets a mode directly; it only calls into
//! `PredictRules`.

pub mod engine;
pub mod predict;

pub use engine::{judge, CardSource, Judgement, PredictRules};
pub use predict::PredictGame;
