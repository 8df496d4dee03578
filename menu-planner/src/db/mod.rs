//! Database layer
//!
//! [`MenuStore`] is the seam between the planner logic and persistence.
//! [`MenuStorage`] implements it on top of an embedded redb file; tests can
//! wrap or replace it with anything implementing the same contract.

pub mod models;
pub mod storage;

pub use models::MenuRecord;
pub use storage::MenuStorage;

use shared::error::AppError;
use shared::models::{Dish, DishCreate, DishId, Menu, MenuCreate, MenuId};
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Menu not found in storage: {0}")]
    MenuNotFound(MenuId),

    #[error("Dish not found in storage: {0}")]
    DishNotFound(DishId),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let app = AppError::storage(err.to_string());
        match err {
            StoreError::MenuNotFound(id) => app.with_detail("menu_id", id),
            StoreError::DishNotFound(id) => app.with_detail("dish_id", id),
            _ => app,
        }
    }
}

/// Persistence contract the planner depends on
///
/// Every write is committed before the call returns.
pub trait MenuStore {
    /// All dishes, ordered by identity
    fn load_all_dishes(&self) -> StoreResult<Vec<Dish>>;

    /// All menus with their dish references resolved, ordered by identity
    fn load_all_menus(&self) -> StoreResult<Vec<Menu>>;

    fn find_dish_by_id(&self, id: DishId) -> StoreResult<Option<Dish>>;

    fn find_menu_by_id(&self, id: MenuId) -> StoreResult<Option<Menu>>;

    /// Insert one dish and hand back its assigned identity
    fn insert_dish(&self, dish: DishCreate) -> StoreResult<Dish>;

    /// Insert many dishes in a single transaction
    fn insert_dishes(&self, dishes: Vec<DishCreate>) -> StoreResult<Vec<Dish>>;

    fn insert_menu(&self, menu: MenuCreate) -> StoreResult<Menu>;

    /// Replace the dish sequence of an existing menu
    ///
    /// Fails with [`StoreError::MenuNotFound`] when the identity is unknown.
    fn update_menu(&self, menu: &Menu) -> StoreResult<()>;

    /// Returns `false` when no menu had that identity
    fn delete_menu(&self, id: MenuId) -> StoreResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_store_error_maps_to_storage_failure() {
        let err: AppError = StoreError::MenuNotFound(9).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.is_storage());
        assert_eq!(err.details.unwrap().get("menu_id").unwrap(), 9);
    }
}
