//! Menu Planner - random weekly meal menus from a dish catalog
//!
//! # Module layout
//!
//! ```text
//! menu-planner/src/
//! ├── core/          # configuration, planner state
//! ├── db/            # MenuStore trait + redb storage
//! ├── services/      # dish catalog cache, seed import
//! ├── planner/       # sampler, editor
//! ├── printing/      # text rendering and export
//! ├── console/       # interactive shell
//! └── utils/         # logging, validation
//! ```

pub mod console;
pub mod core;
pub mod db;
pub mod planner;
pub mod printing;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::{Config, GeneratedMenu, MenuRequest, PlannerState};
pub use db::{MenuStorage, MenuStore, StoreError, StoreResult};
pub use planner::{CategoryCounts, EditorCommand, EditorEvent, EditorState, MenuEditor};
pub use services::DishCatalog;

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

pub fn print_banner() {
    println!(
        r#"
  __  __                    ____  _
 |  \/  | ___ _ __  _   _  |  _ \| | __ _ _ __  _ __   ___ _ __
 | |\/| |/ _ \ '_ \| | | | | |_) | |/ _` | '_ \| '_ \ / _ \ '__|
 | |  | |  __/ | | | |_| | |  __/| | (_| | | | | | | |  __/ |
 |_|  |_|\___|_| |_|\__,_| |_|   |_|\__,_|_| |_|_| |_|\___|_|
    "#
    );
}
