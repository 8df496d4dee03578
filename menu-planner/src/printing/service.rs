//! Menu export service - writes rendered menus to text files

use shared::error::{AppError, ErrorCode};
use shared::models::Menu;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::renderer::MenuTextRenderer;

/// File written for a single menu
pub const SINGLE_MENU_FILE: &str = "weekly_menu.txt";

/// File written for every stored menu
pub const ALL_MENUS_FILE: &str = "all_weekly_menus.txt";

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No menus to export")]
    NothingToExport,
}

pub type PrintResult<T> = Result<T, PrintError>;

impl From<PrintError> for AppError {
    fn from(err: PrintError) -> Self {
        match err {
            PrintError::Io { ref path, .. } => {
                let path = path.display().to_string();
                AppError::with_message(ErrorCode::ExportFailed, err.to_string())
                    .with_detail("path", path)
            }
            PrintError::NothingToExport => AppError::validation(err.to_string()),
        }
    }
}

/// Writes menus into an export directory
pub struct MenuExporter {
    dir: PathBuf,
}

impl MenuExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one menu to `weekly_menu.txt`, replacing any previous export
    pub fn export_menu(&self, menu: &Menu) -> PrintResult<PathBuf> {
        let path = self.write(SINGLE_MENU_FILE, &MenuTextRenderer::render(menu))?;
        tracing::info!(menu_id = menu.id, path = %path.display(), "Menu exported");
        Ok(path)
    }

    /// Write every menu to `all_weekly_menus.txt`
    pub fn export_all(&self, menus: &[Menu]) -> PrintResult<PathBuf> {
        if menus.is_empty() {
            return Err(PrintError::NothingToExport);
        }
        let path = self.write(ALL_MENUS_FILE, &MenuTextRenderer::render_all(menus))?;
        tracing::info!(count = menus.len(), path = %path.display(), "Menus exported");
        Ok(path)
    }

    fn write(&self, file_name: &str, contents: &str) -> PrintResult<PathBuf> {
        let path = self.dir.join(file_name);
        let io_err = |source| PrintError::Io {
            path: path.clone(),
            source,
        };
        std::fs::create_dir_all(&self.dir).map_err(io_err)?;
        std::fs::write(&path, contents).map_err(io_err)?;
        Ok(path)
    }
}
