//! Card templates - static catalog entries.
//!
//! A `CardTemplate` holds the base stats of a car. Concrete `Card`s are
//! produced from it by the catalog, with per-card variation applied.

use serde::{Deserialize, Serialize};

/// Stable card identity: the 1-based position of the template in the
/// catalog. Every card created from the same template shares it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Catalog grouping by what the car is good at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Speed,
    Power,
    Balanced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Static card template.
///
/// ## Example
///
/// ```
/// use compare_engine::cards::{CardTemplate, Category, Rarity};
///
/// let template = CardTemplate::new("Speedster", [90, 60, 70, 1200])
///     .with_image("car00")
///     .with_category(Category::Speed)
///     .with_rarity(Rarity::Common);
///
/// assert_eq!(template.base_speed, 90);
/// assert_eq!(template.image_key, "car00");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    pub name: String,
    pub base_speed: i32,
    pub base_power: i32,
    pub base_grip: i32,
    pub base_weight: i32,

    /// Opaque artwork handle, passed through to cards untouched.
    pub image_key: String,

    pub category: Category,
    pub rarity: Rarity,
}

impl CardTemplate {
    /// Create a template from `[speed, power, grip, weight]` base stats.
    ///
    /// Defaults to a common balanced car with no artwork.
    #[must_use]
    pub fn new(name: impl Into<String>, stats: [i32; 4]) -> Self {
        let [base_speed, base_power, base_grip, base_weight] = stats;
        Self {
            name: name.into(),
            base_speed,
            base_power,
            base_grip,
            base_weight,
            image_key: String::new(),
            category: Category::Balanced,
            rarity: Rarity::Common,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image_key: impl Into<String>) -> Self {
        self.image_key = image_key.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }
}
