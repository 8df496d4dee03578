use std::path::PathBuf;

/// Planner configuration
///
/// # Environment variables
///
/// All values can be overridden from the environment (or a `.env` file):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | data | database and log directory |
/// | DATABASE_FILE | menus.redb | database file name inside WORK_DIR |
/// | SEED_FILE | WORK_DIR/dishes.json | dish catalog imported on first run |
/// | EXPORT_DIR | . | where exported menus are written |
/// | LOG_LEVEL | info | trace, debug, info, warn, error |
/// | LOG_TO_FILE | true | log to WORK_DIR/logs instead of stderr |
/// | ENVIRONMENT | development | development or production |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/srv/meals LOG_LEVEL=debug cargo run -p menu-planner
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: PathBuf,
    pub database_file: String,
    pub seed_file: PathBuf,
    pub export_dir: PathBuf,
    pub log_level: String,
    pub log_to_file: bool,
    /// development | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        let work_dir: PathBuf = std::env::var("WORK_DIR")
            .unwrap_or_else(|_| "data".into())
            .into();

        Self {
            seed_file: std::env::var("SEED_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| work_dir.join("dishes.json")),
            database_file: std::env::var("DATABASE_FILE").unwrap_or_else(|_| "menus.redb".into()),
            export_dir: std::env::var("EXPORT_DIR")
                .unwrap_or_else(|_| ".".into())
                .into(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_to_file: std::env::var("LOG_TO_FILE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            work_dir,
        }
    }

    /// Point every path at `work_dir`
    ///
    /// Used by tests to keep all files inside a temporary directory.
    pub fn with_overrides(work_dir: impl Into<PathBuf>) -> Self {
        let work_dir = work_dir.into();
        Self {
            seed_file: work_dir.join("dishes.json"),
            database_file: "menus.redb".into(),
            export_dir: work_dir.join("export"),
            log_level: "info".into(),
            log_to_file: false,
            environment: "development".into(),
            work_dir,
        }
    }

    pub fn database_path(&self) -> PathBuf {
        self.work_dir.join(&self.database_file)
    }

    /// Log directory, if logging to file is enabled
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log_to_file.then(|| self.work_dir.join("logs"))
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Create the work and export directories if missing
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)?;
        std::fs::create_dir_all(&self.export_dir)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_keep_paths_inside_work_dir() {
        let config = Config::with_overrides("/tmp/planner");
        assert_eq!(config.database_path(), PathBuf::from("/tmp/planner/menus.redb"));
        assert_eq!(config.seed_file, PathBuf::from("/tmp/planner/dishes.json"));
        assert!(config.log_dir().is_none());
        assert!(!config.is_production());
    }

    #[test]
    fn test_log_dir_under_work_dir() {
        let mut config = Config::with_overrides("w");
        config.log_to_file = true;
        assert_eq!(config.log_dir(), Some(PathBuf::from("w/logs")));
    }

    #[test]
    fn test_ensure_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::with_overrides(tmp.path().join("nested"));
        config.ensure_dirs().unwrap();
        assert!(config.work_dir.is_dir());
        assert!(config.export_dir.is_dir());
    }
}
