//! Dish Catalog - in-memory cache of every known dish
//!
//! Loaded once from the store at startup and reloaded after a dish is
//! added. The sampler and the editor draw their candidates from here.

use shared::models::{Dish, DishId};

use crate::db::{MenuStore, StoreResult};

#[derive(Debug, Clone, Default)]
pub struct DishCatalog {
    dishes: Vec<Dish>,
}

impl DishCatalog {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }

    /// Build the cache from the store
    pub fn load<S: MenuStore + ?Sized>(store: &S) -> StoreResult<Self> {
        let dishes = store.load_all_dishes()?;
        tracing::debug!(count = dishes.len(), "Dish catalog loaded");
        Ok(Self { dishes })
    }

    /// Replace the cache with the store's current contents
    pub fn reload<S: MenuStore + ?Sized>(&mut self, store: &S) -> StoreResult<()> {
        self.dishes = store.load_all_dishes()?;
        Ok(())
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn get(&self, id: DishId) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }
}
