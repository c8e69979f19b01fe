//! Card system: traits, templates, cards and the catalog.
//!
//! ## Key Types
//!
//! - `Trait`: The four comparable stats (speed, power, grip, weight)
//! - `CardTemplate`: Static catalog entry with base stats
//! - `Card`: Immutable card value with clamped, varied stats
//! - `CardCatalog`: Template lookup, single-card creation and unique set draws

mod builtin;
pub mod catalog;
pub mod definition;
pub mod instance;
pub mod traits;

pub use catalog::CardCatalog;
pub use definition::{CardId, CardTemplate, Category, Rarity};
pub use instance::{Card, Variation, GRIP_RANGE, POWER_RANGE, SPEED_RANGE, WEIGHT_RANGE};
pub use traits::{Prediction, Trait};
