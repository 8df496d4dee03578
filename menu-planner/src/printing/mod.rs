//! Menu export
//!
//! - [`renderer`] - menu to text
//! - [`service`] - text to files in the export directory

pub mod renderer;
pub mod service;

pub use renderer::{MENU_SEPARATOR, MenuTextRenderer};
pub use service::{ALL_MENUS_FILE, MenuExporter, PrintError, PrintResult, SINGLE_MENU_FILE};
