use anyhow::Context;
use menu_planner::{Config, MenuStorage, PlannerState, console, init_logger_with_file, print_banner};

fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, work directory, logging)
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    config
        .ensure_dirs()
        .with_context(|| format!("Cannot create {}", config.work_dir.display()))?;
    init_logger_with_file(Some(&config.log_level), config.log_dir().as_deref());

    if !config.is_production() {
        print_banner();
    }
    tracing::info!(env = %config.environment, "Menu planner starting");

    // 2. Storage, opened once for the whole run
    let storage = MenuStorage::open(config.database_path())
        .with_context(|| format!("Cannot open {}", config.database_path().display()))?;

    // 3. Catalog and menus
    let mut state = PlannerState::initialize(storage, &config.seed_file)?;
    if state.catalog().is_empty() {
        println!(
            "The dish catalog is empty. Put a dish list in {} or add dishes from the menu.",
            config.seed_file.display()
        );
    }

    // 4. Interactive loop
    console::run(&mut state, &config)?;

    tracing::info!("Menu planner stopped");
    Ok(())
}
