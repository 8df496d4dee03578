//! redb-based storage for dishes and menus
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `dishes` | `dish_id` | `Dish` (JSON) | Dish catalog |
//! | `menus` | `menu_id` | `MenuRecord` (JSON) | Menus by dish reference |
//! | `sequences` | `"dish"` / `"menu"` | `i64` | Last identity handed out |
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate`: once a write method returns,
//! the change survives a crash. Identities are never reused, even after a
//! menu is deleted.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition, WriteTransaction};
use shared::models::{Dish, DishCreate, DishId, Menu, MenuCreate, MenuId};
use std::path::Path;
use std::sync::Arc;

use super::models::MenuRecord;
use super::{MenuStore, StoreError, StoreResult};

/// Dish table: key = dish_id, value = JSON-serialized Dish
const DISHES_TABLE: TableDefinition<i64, &[u8]> = TableDefinition::new("dishes");

/// Menu table: key = menu_id, value = JSON-serialized MenuRecord
const MENUS_TABLE: TableDefinition<i64, &[u8]> = TableDefinition::new("menus");

/// Identity counters: key = entity name, value = last assigned id
const SEQUENCE_TABLE: TableDefinition<&str, i64> = TableDefinition::new("sequences");

const DISH_SEQUENCE_KEY: &str = "dish";
const MENU_SEQUENCE_KEY: &str = "menu";

/// Dish and menu storage backed by redb
#[derive(Clone)]
pub struct MenuStorage {
    db: Arc<Database>,
}

impl MenuStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::init_tables(&db)?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init_tables(&db)?;
        Ok(Self { db: Arc::new(db) })
    }

    fn init_tables(db: &Database) -> StoreResult<()> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(DISHES_TABLE)?;
            let _ = write_txn.open_table(MENUS_TABLE)?;

            let mut seq_table = write_txn.open_table(SEQUENCE_TABLE)?;
            for key in [DISH_SEQUENCE_KEY, MENU_SEQUENCE_KEY] {
                if seq_table.get(key)?.is_none() {
                    seq_table.insert(key, 0i64)?;
                }
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    // ========== Sequence Operations ==========

    /// Increment and return the counter for `key` (within transaction)
    fn next_id(txn: &WriteTransaction, key: &str) -> StoreResult<i64> {
        let mut table = txn.open_table(SEQUENCE_TABLE)?;
        let current = table.get(key)?.map(|guard| guard.value()).unwrap_or(0);
        let next = current + 1;
        table.insert(key, next)?;
        Ok(next)
    }

    // ========== Record Helpers ==========

    fn read_dish<T>(table: &T, id: DishId) -> StoreResult<Option<Dish>>
    where
        T: ReadableTable<i64, &'static [u8]>,
    {
        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    fn resolve_menu<T>(dishes: &T, record: MenuRecord) -> StoreResult<Menu>
    where
        T: ReadableTable<i64, &'static [u8]>,
    {
        let mut resolved = Vec::with_capacity(record.dish_ids.len());
        for dish_id in record.dish_ids {
            let dish = Self::read_dish(dishes, dish_id)?.ok_or(StoreError::DishNotFound(dish_id))?;
            resolved.push(dish);
        }
        Ok(Menu::new(record.id, resolved))
    }

    /// Every slot must reference a stored dish
    fn check_references<T>(dishes: &T, menu: &[Dish]) -> StoreResult<()>
    where
        T: ReadableTable<i64, &'static [u8]>,
    {
        for dish in menu {
            if dishes.get(dish.id)?.is_none() {
                return Err(StoreError::DishNotFound(dish.id));
            }
        }
        Ok(())
    }
}

impl MenuStore for MenuStorage {
    fn load_all_dishes(&self) -> StoreResult<Vec<Dish>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DISHES_TABLE)?;

        let mut dishes = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            let dish: Dish = serde_json::from_slice(value.value())?;
            dishes.push(dish);
        }

        Ok(dishes)
    }

    fn load_all_menus(&self) -> StoreResult<Vec<Menu>> {
        let read_txn = self.db.begin_read()?;
        let dishes = read_txn.open_table(DISHES_TABLE)?;
        let menus = read_txn.open_table(MENUS_TABLE)?;

        let mut loaded = Vec::new();
        for result in menus.iter()? {
            let (_key, value) = result?;
            let record: MenuRecord = serde_json::from_slice(value.value())?;
            loaded.push(Self::resolve_menu(&dishes, record)?);
        }

        Ok(loaded)
    }

    fn find_dish_by_id(&self, id: DishId) -> StoreResult<Option<Dish>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DISHES_TABLE)?;
        Self::read_dish(&table, id)
    }

    fn find_menu_by_id(&self, id: MenuId) -> StoreResult<Option<Menu>> {
        let read_txn = self.db.begin_read()?;
        let dishes = read_txn.open_table(DISHES_TABLE)?;
        let menus = read_txn.open_table(MENUS_TABLE)?;

        let record: MenuRecord = match menus.get(id)? {
            Some(value) => serde_json::from_slice(value.value())?,
            None => return Ok(None),
        };

        Ok(Some(Self::resolve_menu(&dishes, record)?))
    }

    fn insert_dish(&self, dish: DishCreate) -> StoreResult<Dish> {
        let mut inserted = self.insert_dishes(vec![dish])?;
        // one payload in, one dish out
        Ok(inserted.remove(0))
    }

    fn insert_dishes(&self, dishes: Vec<DishCreate>) -> StoreResult<Vec<Dish>> {
        let txn = self.db.begin_write()?;
        let mut inserted = Vec::with_capacity(dishes.len());
        for payload in dishes {
            let id = Self::next_id(&txn, DISH_SEQUENCE_KEY)?;
            let dish = payload.into_dish(id);
            let value = serde_json::to_vec(&dish)?;
            let mut table = txn.open_table(DISHES_TABLE)?;
            table.insert(id, value.as_slice())?;
            inserted.push(dish);
        }
        txn.commit()?;

        tracing::debug!(count = inserted.len(), "Dishes stored");
        Ok(inserted)
    }

    fn insert_menu(&self, menu: MenuCreate) -> StoreResult<Menu> {
        let txn = self.db.begin_write()?;
        let id = Self::next_id(&txn, MENU_SEQUENCE_KEY)?;
        let menu = Menu::new(id, menu.dishes);
        {
            let dishes = txn.open_table(DISHES_TABLE)?;
            Self::check_references(&dishes, &menu.dishes)?;

            let value = serde_json::to_vec(&MenuRecord::from(&menu))?;
            let mut table = txn.open_table(MENUS_TABLE)?;
            table.insert(id, value.as_slice())?;
        }
        txn.commit()?;

        tracing::debug!(menu_id = id, slots = menu.len(), "Menu stored");
        Ok(menu)
    }

    fn update_menu(&self, menu: &Menu) -> StoreResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(MENUS_TABLE)?;
            if table.get(menu.id)?.is_none() {
                return Err(StoreError::MenuNotFound(menu.id));
            }

            let dishes = txn.open_table(DISHES_TABLE)?;
            Self::check_references(&dishes, &menu.dishes)?;

            let value = serde_json::to_vec(&MenuRecord::from(menu))?;
            table.insert(menu.id, value.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    fn delete_menu(&self, id: MenuId) -> StoreResult<bool> {
        let txn = self.db.begin_write()?;
        let removed = {
            let mut table = txn.open_table(MENUS_TABLE)?;
            table.remove(id)?.is_some()
        };
        txn.commit()?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::DishCategory;

    fn seeded() -> (MenuStorage, Vec<Dish>) {
        let storage = MenuStorage::open_in_memory().unwrap();
        let dishes = storage
            .insert_dishes(vec![
                DishCreate::new("Meatballs", DishCategory::Meat),
                DishCreate::new("Baked salmon", DishCategory::Fish),
                DishCreate::new("Chicken curry", DishCategory::Chicken),
            ])
            .unwrap();
        (storage, dishes)
    }

    #[test]
    fn test_dish_ids_are_monotonic() {
        let (storage, dishes) = seeded();
        let ids: Vec<DishId> = dishes.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let next = storage
            .insert_dish(DishCreate::new("Lentil soup", DishCategory::Soup))
            .unwrap();
        assert_eq!(next.id, 4);
        assert_eq!(storage.load_all_dishes().unwrap().len(), 4);
    }

    #[test]
    fn test_load_all_dishes() {
        let (storage, dishes) = seeded();
        assert_eq!(storage.load_all_dishes().unwrap(), dishes);
        assert_eq!(
            storage.find_dish_by_id(2).unwrap().map(|d| d.name),
            Some("Baked salmon".to_string())
        );
        assert!(storage.find_dish_by_id(99).unwrap().is_none());
    }

    #[test]
    fn test_menu_resolves_dishes() {
        let (storage, dishes) = seeded();
        let menu = storage
            .insert_menu(MenuCreate::new(vec![
                dishes[2].clone(),
                dishes[0].clone(),
                dishes[2].clone(),
            ]))
            .unwrap();
        assert_eq!(menu.id, 1);

        let found = storage.find_menu_by_id(menu.id).unwrap().unwrap();
        assert_eq!(found, menu);
        assert_eq!(storage.load_all_menus().unwrap(), vec![menu]);
    }

    #[test]
    fn test_insert_menu_rejects_unknown_dish() {
        let (storage, _) = seeded();
        let ghost = Dish::new(42, "Ghost", DishCategory::Soup);
        let result = storage.insert_menu(MenuCreate::new(vec![ghost]));
        assert!(matches!(result, Err(StoreError::DishNotFound(42))));
        assert!(storage.load_all_menus().unwrap().is_empty());
    }

    #[test]
    fn test_update_menu() {
        let (storage, dishes) = seeded();
        let mut menu = storage
            .insert_menu(MenuCreate::new(vec![dishes[0].clone(), dishes[1].clone()]))
            .unwrap();

        menu.dishes[1] = dishes[2].clone();
        storage.update_menu(&menu).unwrap();

        let reloaded = storage.find_menu_by_id(menu.id).unwrap().unwrap();
        assert_eq!(reloaded.dishes[1].id, dishes[2].id);
    }

    #[test]
    fn test_update_unknown_menu_fails() {
        let (storage, dishes) = seeded();
        let menu = Menu::new(77, vec![dishes[0].clone()]);
        assert!(matches!(
            storage.update_menu(&menu),
            Err(StoreError::MenuNotFound(77))
        ));
    }

    #[test]
    fn test_delete_menu() {
        let (storage, dishes) = seeded();
        let menu = storage
            .insert_menu(MenuCreate::new(vec![dishes[0].clone()]))
            .unwrap();

        assert!(storage.delete_menu(menu.id).unwrap());
        assert!(!storage.delete_menu(menu.id).unwrap());
        assert!(storage.find_menu_by_id(menu.id).unwrap().is_none());

        // Deleted identities are not handed out again
        let next = storage
            .insert_menu(MenuCreate::new(vec![dishes[1].clone()]))
            .unwrap();
        assert_eq!(next.id, menu.id + 1);
    }
}
