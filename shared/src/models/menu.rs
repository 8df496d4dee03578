//! Menu Model

use serde::{Deserialize, Serialize};

use super::dish::Dish;
use crate::weekday::{Weekday, weekday_for};

/// Menu identity, assigned by the store
pub type MenuId = i64;

/// Longest menu the planner will generate (one dish per day of a month)
pub const MAX_MENU_LEN: usize = 31;

/// Menu entity with its dish references resolved
///
/// Slot order is day order; the same dish may appear in several slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub dishes: Vec<Dish>,
}

impl Menu {
    pub fn new(id: MenuId, dishes: Vec<Dish>) -> Self {
        Self { id, dishes }
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn dish_at(&self, index: usize) -> Option<&Dish> {
        self.dishes.get(index)
    }

    /// Slots in day order with their weekday
    pub fn slots(&self) -> impl Iterator<Item = (usize, Weekday, &Dish)> {
        self.dishes
            .iter()
            .enumerate()
            .map(|(index, dish)| (index, weekday_for(index), dish))
    }
}

/// Create menu payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCreate {
    pub dishes: Vec<Dish>,
}

impl MenuCreate {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }
}
