//! Menu generation and editing
//!
//! - [`sampler`] - random selection, unconstrained or per category
//! - [`editor`] - slot-by-slot rerolls on an existing menu

pub mod editor;
pub mod sampler;

pub use editor::{EditorCommand, EditorEvent, EditorState, MenuEditor};
pub use sampler::{CategoryCounts, sample_menu, sample_menu_by_category};
