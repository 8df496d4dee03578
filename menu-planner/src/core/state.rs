use rand::Rng;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Dish, DishCreate, Menu, MenuCreate, MenuId};
use std::path::Path;

use crate::db::MenuStore;
use crate::planner::{CategoryCounts, MenuEditor, sample_menu, sample_menu_by_category};
use crate::services::{DishCatalog, ImportOutcome, import_if_empty};
use crate::utils::validation::{
    MAX_NAME_LEN, validate_category_total, validate_menu_length, validate_required_text,
};

/// How a new menu should be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuRequest {
    /// Any dishes, uniformly
    Random { length: usize },
    /// Exact number per category; the counts must add up to `length`
    ByCategory {
        length: usize,
        counts: CategoryCounts,
    },
}

impl MenuRequest {
    pub fn length(&self) -> usize {
        match self {
            MenuRequest::Random { length } | MenuRequest::ByCategory { length, .. } => *length,
        }
    }
}

/// A freshly persisted menu plus the number of dishes asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMenu {
    pub menu: Menu,
    pub requested: usize,
}

impl GeneratedMenu {
    /// The catalog could not supply every requested dish
    pub fn is_short(&self) -> bool {
        self.menu.len() < self.requested
    }
}

/// Planner state - owns the store and the in-memory views built from it
///
/// | Field | Meaning |
/// |-------|---------|
/// | store | persistence collaborator |
/// | catalog | every known dish, reloaded after `add_dish` |
/// | menus | every stored menu, reloaded after each menu mutation |
///
/// Constructed once at startup by [`PlannerState::initialize`] and passed by
/// reference to the console.
pub struct PlannerState<S: MenuStore> {
    store: S,
    catalog: DishCatalog,
    menus: Vec<Menu>,
}

impl<S: MenuStore> PlannerState<S> {
    /// Load caches from `store`, importing the seed file into an empty catalog
    pub fn initialize(store: S, seed_path: &Path) -> AppResult<Self> {
        let mut catalog = DishCatalog::load(&store)?;

        if catalog.is_empty() {
            match import_if_empty(&store, seed_path)? {
                ImportOutcome::Imported(count) => {
                    catalog.reload(&store)?;
                    tracing::info!(count, "Catalog seeded");
                }
                outcome => tracing::warn!(?outcome, "Catalog is empty after startup"),
            }
        }

        let menus = store.load_all_menus()?;
        tracing::info!(
            dishes = catalog.len(),
            menus = menus.len(),
            "Planner state initialized"
        );

        Ok(Self {
            store,
            catalog,
            menus,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> &DishCatalog {
        &self.catalog
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn reload_menus(&mut self) -> AppResult<()> {
        self.menus = self.store.load_all_menus()?;
        Ok(())
    }

    pub fn generate_menu(&mut self, request: MenuRequest) -> AppResult<GeneratedMenu> {
        self.generate_menu_with_rng(request, &mut rand::thread_rng())
    }

    /// Validate, sample and persist a new menu
    ///
    /// A sample with no dishes at all is not stored and fails with
    /// `CatalogEmpty`. A sample shorter than requested is stored; check
    /// [`GeneratedMenu::is_short`].
    pub fn generate_menu_with_rng<R: Rng + ?Sized>(
        &mut self,
        request: MenuRequest,
        rng: &mut R,
    ) -> AppResult<GeneratedMenu> {
        let requested = request.length();
        validate_menu_length(requested)?;

        let dishes = match &request {
            MenuRequest::Random { length } => sample_menu(self.catalog.dishes(), *length, rng),
            MenuRequest::ByCategory { length, counts } => {
                validate_category_total(counts.total(), *length)?;
                sample_menu_by_category(self.catalog.dishes(), counts, rng)
            }
        };

        if dishes.is_empty() {
            tracing::warn!(requested, "No dishes available for a new menu");
            return Err(AppError::new(ErrorCode::CatalogEmpty).with_detail("requested", requested));
        }
        if dishes.len() < requested {
            tracing::warn!(
                requested,
                produced = dishes.len(),
                "Catalog could not fill the menu"
            );
        }

        let menu = self.store.insert_menu(MenuCreate::new(dishes))?;
        tracing::info!(menu_id = menu.id, slots = menu.len(), "Menu created");
        self.reload_menus()?;

        Ok(GeneratedMenu { menu, requested })
    }

    /// Add a dish to the catalog
    pub fn add_dish(&mut self, payload: DishCreate) -> AppResult<Dish> {
        if payload.name.trim().is_empty() {
            return Err(AppError::new(ErrorCode::DishNameEmpty));
        }
        validate_required_text(&payload.name, "Dish name", MAX_NAME_LEN)?;

        let payload = DishCreate::new(payload.name.trim(), payload.category);
        let dish = self.store.insert_dish(payload)?;
        tracing::info!(dish_id = dish.id, name = %dish.name, category = %dish.category, "Dish added");
        self.catalog.reload(&self.store)?;
        Ok(dish)
    }

    /// Returns `false` when no menu had that identity
    pub fn delete_menu(&mut self, id: MenuId) -> AppResult<bool> {
        let deleted = self.store.delete_menu(id)?;
        if deleted {
            tracing::info!(menu_id = id, "Menu deleted");
            self.reload_menus()?;
        } else {
            tracing::warn!(menu_id = id, "Delete requested for unknown menu");
        }
        Ok(deleted)
    }

    pub fn find_menu(&self, id: MenuId) -> AppResult<Menu> {
        self.store
            .find_menu_by_id(id)?
            .ok_or_else(|| AppError::menu_not_found(id))
    }

    /// Open an editing session on a stored menu
    ///
    /// Call [`PlannerState::reload_menus`] once the session is over.
    pub fn edit_menu(&self, id: MenuId) -> AppResult<MenuEditor<'_, S>> {
        let menu = self.find_menu(id)?;
        MenuEditor::start(&self.store, &self.catalog, menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MenuStorage;
    use crate::planner::{EditorCommand, EditorEvent};
    use shared::models::DishCategory;
    use std::collections::HashSet;

    fn state_with(dishes: &[(&str, DishCategory)]) -> PlannerState<MenuStorage> {
        let storage = MenuStorage::open_in_memory().unwrap();
        storage
            .insert_dishes(dishes.iter().map(|(n, c)| DishCreate::new(*n, *c)).collect())
            .unwrap();
        PlannerState::initialize(storage, Path::new("does-not-exist.json")).unwrap()
    }

    fn week() -> PlannerState<MenuStorage> {
        state_with(&[
            ("Meatloaf", DishCategory::Meat),
            ("Pork chops", DishCategory::Meat),
            ("Salmon", DishCategory::Fish),
            ("Cod", DishCategory::Fish),
            ("Chicken curry", DishCategory::Chicken),
            ("Falafel", DishCategory::Vegetarian),
            ("Pea soup", DishCategory::Soup),
            ("Nettle soup", DishCategory::Soup),
        ])
    }

    #[test]
    fn test_initialize_seeds_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let seed = dir.path().join("dishes.json");
        std::fs::write(
            &seed,
            r#"[{"name": "Kroppkakor", "category": "Meat"}, {"name": "Fish soup", "category": "Soup"}]"#,
        )
        .unwrap();

        let state = PlannerState::initialize(MenuStorage::open_in_memory().unwrap(), &seed).unwrap();
        assert_eq!(state.catalog().len(), 2);
        assert!(state.menus().is_empty());
    }

    #[test]
    fn test_initialize_without_seed_file() {
        let state = PlannerState::initialize(
            MenuStorage::open_in_memory().unwrap(),
            Path::new("missing.json"),
        )
        .unwrap();
        assert!(state.catalog().is_empty());
    }

    #[test]
    fn test_generate_random_menu() {
        let mut state = week();
        let generated = state.generate_menu(MenuRequest::Random { length: 7 }).unwrap();

        assert!(!generated.is_short());
        assert_eq!(generated.menu.len(), 7);
        let ids: HashSet<_> = generated.menu.dishes.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), 7);
        assert_eq!(state.menus().len(), 1);
        assert_eq!(state.find_menu(generated.menu.id).unwrap(), generated.menu);
    }

    #[test]
    fn test_generate_short_menu_is_stored() {
        let mut state = week();
        let generated = state.generate_menu(MenuRequest::Random { length: 20 }).unwrap();
        assert!(generated.is_short());
        assert_eq!(generated.menu.len(), 8);
        assert_eq!(generated.requested, 20);
        assert_eq!(state.menus().len(), 1);
    }

    #[test]
    fn test_generate_from_empty_catalog_is_refused() {
        let mut state = state_with(&[]);
        let err = state
            .generate_menu(MenuRequest::Random { length: 5 })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogEmpty);
        assert!(state.menus().is_empty());
    }

    #[test]
    fn test_generate_rejects_bad_length() {
        let mut state = week();
        for length in [0, 32] {
            let err = state
                .generate_menu(MenuRequest::Random { length })
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::MenuLengthOutOfRange);
        }
        assert!(state.menus().is_empty());
    }

    #[test]
    fn test_generate_by_category() {
        let mut state = week();
        let counts = CategoryCounts::new()
            .with(DishCategory::Meat, 2)
            .with(DishCategory::Fish, 1)
            .with(DishCategory::Soup, 2);
        let generated = state
            .generate_menu(MenuRequest::ByCategory { length: 5, counts })
            .unwrap();

        let menu = &generated.menu;
        assert_eq!(menu.len(), 5);
        let count = |c: DishCategory| menu.dishes.iter().filter(|d| d.category == c).count();
        assert_eq!(count(DishCategory::Meat), 2);
        assert_eq!(count(DishCategory::Fish), 1);
        assert_eq!(count(DishCategory::Soup), 2);
    }

    #[test]
    fn test_generate_by_category_sum_mismatch() {
        let mut state = week();
        let too_many = CategoryCounts::new().with(DishCategory::Meat, 4);
        let too_few = CategoryCounts::new().with(DishCategory::Meat, 2);

        for counts in [too_many, too_few] {
            let err = state
                .generate_menu(MenuRequest::ByCategory { length: 3, counts })
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::CategoryCountMismatch);
            assert!(err.is_validation());
        }
        assert!(state.menus().is_empty());
    }

    #[test]
    fn test_generate_by_category_overflowing_counts() {
        let mut state = week();
        let counts = CategoryCounts::new()
            .with(DishCategory::Meat, usize::MAX)
            .with(DishCategory::Fish, 4);

        let err = state
            .generate_menu(MenuRequest::ByCategory { length: 3, counts })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryCountMismatch);
        assert!(err.message.contains("exceeds"));
        assert!(state.menus().is_empty());
    }

    #[test]
    fn test_add_dish_reloads_catalog() {
        let mut state = week();
        let dish = state
            .add_dish(DishCreate::new("  Wallenbergare ", DishCategory::Meat))
            .unwrap();
        assert_eq!(dish.name, "Wallenbergare");
        assert_eq!(state.catalog().len(), 9);
        assert_eq!(state.catalog().get(dish.id), Some(&dish));

        let err = state
            .add_dish(DishCreate::new("   ", DishCategory::Fish))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DishNameEmpty);
        assert_eq!(state.catalog().len(), 9);
    }

    #[test]
    fn test_delete_menu() {
        let mut state = week();
        let menu = state
            .generate_menu(MenuRequest::Random { length: 3 })
            .unwrap()
            .menu;

        assert!(state.delete_menu(menu.id).unwrap());
        assert!(state.menus().is_empty());
        assert!(!state.delete_menu(menu.id).unwrap());

        let err = state.find_menu(menu.id).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_edit_menu_round_trip() {
        let mut state = week();
        let menu = state
            .generate_menu(MenuRequest::Random { length: 4 })
            .unwrap()
            .menu;

        let edited = {
            let mut editor = state.edit_menu(menu.id).unwrap();
            editor.handle(EditorCommand::MoveDown).unwrap();
            let event = editor.handle(EditorCommand::Reroll).unwrap();
            assert!(matches!(event, EditorEvent::Rerolled { index: 1, .. }));
            editor.handle(EditorCommand::Exit).unwrap();
            editor.into_menu()
        };
        assert_ne!(edited.dishes[1].id, menu.dishes[1].id);

        state.reload_menus().unwrap();
        assert_eq!(state.menus()[0], edited);
    }

    #[test]
    fn test_edit_unknown_menu() {
        let state = week();
        let err = state.edit_menu(42).err().unwrap();
        assert_eq!(err.code, ErrorCode::MenuNotFound);
    }
}
