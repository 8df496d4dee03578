//! Stored record shapes
//!
//! Dishes are stored as-is. Menus are stored by reference: the dish
//! identities in slot order, resolved against the dish table on load.

use serde::{Deserialize, Serialize};
use shared::models::{DishId, Menu, MenuId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub id: MenuId,
    pub dish_ids: Vec<DishId>,
}

impl From<&Menu> for MenuRecord {
    fn from(menu: &Menu) -> Self {
        Self {
            id: menu.id,
            dish_ids: menu.dishes.iter().map(|d| d.id).collect(),
        }
    }
}
