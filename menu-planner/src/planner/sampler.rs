//! Menu Sampler - random dish selection
//!
//! Both samplers draw without replacement and shuffle the result, so slot
//! order says nothing about catalog order or category. Neither validates its
//! input: asking for more than the catalog holds yields a shorter list, and
//! callers detect the shortfall by comparing lengths.

use rand::Rng;
use rand::seq::SliceRandom;
use shared::models::{Dish, DishCategory};
use std::collections::BTreeMap;

/// Requested number of dishes per category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: BTreeMap<DishCategory, usize>,
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, category: DishCategory, count: usize) -> Self {
        self.set(category, count);
        self
    }

    pub fn set(&mut self, category: DishCategory, count: usize) {
        self.counts.insert(category, count);
    }

    pub fn get(&self, category: DishCategory) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Sum over all categories, saturating at `usize::MAX`
    pub fn total(&self) -> usize {
        self.counts
            .values()
            .fold(0usize, |sum, n| sum.saturating_add(*n))
    }

    pub fn iter(&self) -> impl Iterator<Item = (DishCategory, usize)> + '_ {
        self.counts.iter().map(|(c, n)| (*c, *n))
    }
}

impl FromIterator<(DishCategory, usize)> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = (DishCategory, usize)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Draw `count` distinct catalog entries uniformly at random
///
/// Returns fewer than `count` dishes when the catalog is smaller, and an
/// empty list for an empty catalog.
pub fn sample_menu<R: Rng + ?Sized>(catalog: &[Dish], count: usize, rng: &mut R) -> Vec<Dish> {
    let mut picked: Vec<Dish> = catalog.choose_multiple(rng, count).cloned().collect();
    picked.shuffle(rng);
    picked
}

/// Draw the requested number of dishes from each category, then shuffle
///
/// A category with fewer dishes than requested contributes all it has.
pub fn sample_menu_by_category<R: Rng + ?Sized>(
    catalog: &[Dish],
    counts: &CategoryCounts,
    rng: &mut R,
) -> Vec<Dish> {
    let mut picked = Vec::with_capacity(counts.total().min(catalog.len()));

    for (category, count) in counts.iter().filter(|(_, n)| *n > 0) {
        let pool: Vec<&Dish> = catalog.iter().filter(|d| d.category == category).collect();
        if pool.len() < count {
            tracing::warn!(
                category = %category,
                requested = count,
                available = pool.len(),
                "Not enough dishes in category"
            );
        }
        picked.extend(pool.choose_multiple(rng, count).map(|d| (*d).clone()));
    }

    picked.shuffle(rng);
    picked
}
