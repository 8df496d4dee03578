//! Dish Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dish identity, assigned by the store
pub type DishId = i64;

/// Fixed dish classification
///
/// The serialized form is the label itself (`"Meat"`, `"Fish"`, ...) so
/// stored and exported data round-trips unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DishCategory {
    Meat,
    Fish,
    Chicken,
    Vegetarian,
    Soup,
}

impl DishCategory {
    /// All categories in prompt order
    pub const ALL: [DishCategory; 5] = [
        DishCategory::Meat,
        DishCategory::Fish,
        DishCategory::Chicken,
        DishCategory::Vegetarian,
        DishCategory::Soup,
    ];

    /// User-facing label
    pub const fn label(&self) -> &'static str {
        match self {
            DishCategory::Meat => "Meat",
            DishCategory::Fish => "Fish",
            DishCategory::Chicken => "Chicken",
            DishCategory::Vegetarian => "Vegetarian",
            DishCategory::Soup => "Soup",
        }
    }
}

impl fmt::Display for DishCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a label names no category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dish category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for DishCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        DishCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}

/// Dish entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub category: DishCategory,
}

impl Dish {
    pub fn new(id: DishId, name: impl Into<String>, category: DishCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
        }
    }
}

/// Create dish payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishCreate {
    pub name: String,
    pub category: DishCategory,
}

impl DishCreate {
    pub fn new(name: impl Into<String>, category: DishCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    /// Attach the identity handed out by the store
    pub fn into_dish(self, id: DishId) -> Dish {
        Dish {
            id,
            name: self.name,
            category: self.category,
        }
    }
}
