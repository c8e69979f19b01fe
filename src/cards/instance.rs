//! Concrete cards dealt into games.
//!
//! A `Card` is an immutable value built from a `CardTemplate` plus a
//! `Variation`. Stats are clamped into their legal ranges at creation,
//! so every card in play satisfies:
//!
//! - speed in `[30, 100]`
//! - power in `[50, 100]`
//! - grip in `[40, 95]`
//! - weight in `[1000, 3000]`

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::definition::{CardId, CardTemplate, Category, Rarity};
use super::traits::Trait;
use crate::core::RandomSource;

pub const SPEED_RANGE: RangeInclusive<i32> = 30..=100;
pub const POWER_RANGE: RangeInclusive<i32> = 50..=100;
pub const GRIP_RANGE: RangeInclusive<i32> = 40..=95;
pub const WEIGHT_RANGE: RangeInclusive<i32> = 1000..=3000;

fn clamp(value: i32, range: &RangeInclusive<i32>) -> i32 {
    value.clamp(*range.start(), *range.end())
}

/// Additive per-trait deltas applied to template stats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    pub speed: i32,
    pub power: i32,
    pub grip: i32,
    pub weight: i32,
}

impl Variation {
    /// Small random deltas: `[-5, 4]` for speed, power and grip,
    /// `[-100, 99]` for weight.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        Self {
            speed: rng.gen_range(-5..5),
            power: rng.gen_range(-5..5),
            grip: rng.gen_range(-5..5),
            weight: rng.gen_range(-100..100),
        }
    }
}

/// A card in play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub speed: i32,
    pub power: i32,
    pub grip: i32,
    pub weight: i32,

    /// Artwork handle copied from the template. The engine never reads it.
    pub image_key: String,

    pub category: Category,
    pub rarity: Rarity,
}

impl Card {
    /// Build a card from a template, apply the variation and clamp.
    #[must_use]
    pub fn from_template(id: CardId, template: &CardTemplate, variation: Variation) -> Self {
        Self {
            id,
            name: template.name.clone(),
            speed: clamp(template.base_speed + variation.speed, &SPEED_RANGE),
            power: clamp(template.base_power + variation.power, &POWER_RANGE),
            grip: clamp(template.base_grip + variation.grip, &GRIP_RANGE),
            weight: clamp(template.base_weight + variation.weight, &WEIGHT_RANGE),
            image_key: template.image_key.clone(),
            category: template.category,
            rarity: template.rarity,
        }
    }

    /// The card's value for a trait.
    #[must_use]
    pub const fn value(&self, t: Trait) -> i32 {
        match t {
            Trait::Speed => self.speed,
            Trait::Power => self.power,
            Trait::Grip => self.grip,
            Trait::Weight => self.weight,
        }
    }

    /// Whether every stat is inside its legal range.
    #[must_use]
    pub fn in_bounds(&self) -> bool {
        SPEED_RANGE.contains(&self.speed)
            && POWER_RANGE.contains(&self.power)
            && GRIP_RANGE.contains(&self.grip)
            && WEIGHT_RANGE.contains(&self.weight)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.id.raw())
    }
}
