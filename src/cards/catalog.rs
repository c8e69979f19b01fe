//! Card catalog: template lookup and card creation.
//!
//! The `CardCatalog` owns the ordered template list. A card's `id` is the
//! 1-based position of its template, so it is stable across games and
//! repeated creation of the same template yields the same id.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use super::builtin;
use super::definition::{CardId, CardTemplate, Category, Rarity};
use super::instance::{Card, Variation};
use crate::core::{EngineError, RandomSource, Result};

/// Ordered collection of card templates.
///
/// ## Example
///
/// ```
/// use compare_engine::cards::{CardCatalog, CardId};
///
/// let catalog = CardCatalog::builtin();
///
/// let tank = catalog.create_card("Tank", None).unwrap();
/// assert_eq!(tank.id, CardId::new(3));
/// assert_eq!(tank.power, 95);
///
/// assert!(catalog.create_card("Batmobile", None).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    templates: Vec<CardTemplate>,
    /// Name to the first template index carrying it.
    by_name: FxHashMap<String, usize>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipped car catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for template in builtin::templates() {
            catalog.add_template(template);
        }
        catalog
    }

    /// Append a template. Its id is its new 1-based position.
    ///
    /// A template reusing an existing name is kept (it can still be drawn
    /// into sets) but name lookups keep resolving to the earlier one.
    pub fn add_template(&mut self, template: CardTemplate) -> CardId {
        let index = self.templates.len();
        self.by_name.entry(template.name.clone()).or_insert(index);
        self.templates.push(template);
        Self::id_for(index)
    }

    /// All templates in catalog order.
    #[must_use]
    pub fn templates(&self) -> &[CardTemplate] {
        &self.templates
    }

    /// Look up a template by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardTemplate> {
        self.by_name.get(name).map(|&i| &self.templates[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Create a card from a named template.
    ///
    /// Fails with `TemplateNotFound` for unknown names; there is no
    /// default card.
    pub fn create_card(&self, name: &str, variation: Option<Variation>) -> Result<Card> {
        let index = *self
            .by_name
            .get(name)
            .ok_or_else(|| EngineError::TemplateNotFound(name.to_string()))?;
        Ok(self.card_at(index, variation.unwrap_or_default()))
    }

    /// Draw `count` randomly varied cards from distinct templates.
    ///
    /// Once every template has been used, tracking is reset and templates
    /// start repeating. An empty catalog yields an empty set.
    pub fn create_card_set<R>(&self, count: usize, rng: &mut R) -> Vec<Card>
    where
        R: RandomSource + ?Sized,
    {
        if self.templates.is_empty() {
            warn!(count, "card set requested from an empty catalog");
            return Vec::new();
        }

        let mut cards = Vec::with_capacity(count);
        let mut used: FxHashSet<usize> = FxHashSet::default();

        while cards.len() < count {
            let available: Vec<usize> = (0..self.templates.len())
                .filter(|i| !used.contains(i))
                .collect();

            if available.is_empty() {
                warn!(drawn = cards.len(), count, "template pool exhausted, resetting tracking");
                used.clear();
                continue;
            }

            let index = available[rng.gen_range_usize(0..available.len())];
            let card = self.card_at(index, Variation::random(rng));
            debug!(card = %card, n = cards.len() + 1, count, "drew card");
            cards.push(card);
            used.insert(index);
        }

        cards
    }

    /// A single randomly varied card from any template.
    pub fn create_random_card<R>(&self, rng: &mut R) -> Option<Card>
    where
        R: RandomSource + ?Sized,
    {
        if self.templates.is_empty() {
            return None;
        }
        let index = rng.gen_range_usize(0..self.templates.len());
        Some(self.card_at(index, Variation::random(rng)))
    }

    /// One unvaried card per template in the category.
    #[must_use]
    pub fn cards_by_category(&self, category: Category) -> Vec<Card> {
        self.cards_where(|t| t.category == category)
    }

    /// One unvaried card per template of the rarity.
    #[must_use]
    pub fn cards_by_rarity(&self, rarity: Rarity) -> Vec<Card> {
        self.cards_where(|t| t.rarity == rarity)
    }

    fn cards_where(&self, predicate: impl Fn(&CardTemplate) -> bool) -> Vec<Card> {
        self.templates
            .iter()
            .enumerate()
            .filter(|(_, t)| predicate(t))
            .map(|(i, _)| self.card_at(i, Variation::default()))
            .collect()
    }

    fn card_at(&self, index: usize, variation: Variation) -> Card {
        Card::from_template(Self::id_for(index), &self.templates[index], variation)
    }

    fn id_for(index: usize) -> CardId {
        CardId::new(index as u32 + 1)
    }
}
