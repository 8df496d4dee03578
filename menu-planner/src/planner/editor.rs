//! Menu Editor - interactive single-slot rerolls on a stored menu
//!
//! # State machine
//!
//! ```text
//!            MoveUp / MoveDown / Reroll
//!              ┌──────────────┐
//!              ▼              │
//!  start ──▶ Browsing ────────┘
//!              │
//!              │ Exit
//!              ▼
//!          Terminated
//! ```
//!
//! A reroll is written through the store before the editor accepts the next
//! command. If the write fails the in-memory menu is left as it was.

use rand::Rng;
use rand::seq::SliceRandom;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Dish, Menu};
use shared::weekday::{Weekday, weekday_for};

use crate::db::MenuStore;
use crate::services::DishCatalog;

/// Discrete input from the surrounding shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    MoveUp,
    MoveDown,
    Reroll,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Browsing,
    Terminated,
}

/// What a command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Cursor position after a move (unchanged at either end)
    Moved { index: usize },
    /// Slot now holds a different dish, already persisted
    Rerolled {
        index: usize,
        weekday: Weekday,
        previous: Dish,
        current: Dish,
    },
    /// The catalog holds no dish other than the current one
    NoAlternative { index: usize },
    Terminated,
}

pub struct MenuEditor<'a, S: MenuStore + ?Sized> {
    store: &'a S,
    catalog: &'a DishCatalog,
    menu: Menu,
    current: usize,
    state: EditorState,
}

impl<'a, S: MenuStore + ?Sized> MenuEditor<'a, S> {
    /// Open a session on `menu`, cursor on the first slot
    ///
    /// A menu without slots has no valid cursor position and is refused.
    pub fn start(store: &'a S, catalog: &'a DishCatalog, menu: Menu) -> AppResult<Self> {
        if menu.is_empty() {
            return Err(AppError::new(ErrorCode::MenuEmpty).with_detail("menu_id", menu.id));
        }
        tracing::debug!(menu_id = menu.id, slots = menu.len(), "Editor session started");
        Ok(Self {
            store,
            catalog,
            menu,
            current: 0,
            state: EditorState::Browsing,
        })
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_dish(&self) -> &Dish {
        &self.menu.dishes[self.current]
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == EditorState::Terminated
    }

    /// Hand the (possibly edited) menu back to the caller
    pub fn into_menu(self) -> Menu {
        self.menu
    }

    pub fn handle(&mut self, command: EditorCommand) -> AppResult<EditorEvent> {
        self.handle_with_rng(command, &mut rand::thread_rng())
    }

    pub fn handle_with_rng<R: Rng + ?Sized>(
        &mut self,
        command: EditorCommand,
        rng: &mut R,
    ) -> AppResult<EditorEvent> {
        if self.is_terminated() {
            return Err(AppError::new(ErrorCode::SessionEnded));
        }

        match command {
            EditorCommand::MoveUp => {
                self.current = self.current.saturating_sub(1);
                Ok(EditorEvent::Moved {
                    index: self.current,
                })
            }
            EditorCommand::MoveDown => {
                if self.current + 1 < self.menu.len() {
                    self.current += 1;
                }
                Ok(EditorEvent::Moved {
                    index: self.current,
                })
            }
            EditorCommand::Reroll => self.reroll(rng),
            EditorCommand::Exit => {
                self.state = EditorState::Terminated;
                tracing::debug!(menu_id = self.menu.id, "Editor session ended");
                Ok(EditorEvent::Terminated)
            }
        }
    }

    fn reroll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> AppResult<EditorEvent> {
        let index = self.current;
        let previous = self.menu.dishes[index].clone();

        let candidates: Vec<&Dish> = self
            .catalog
            .dishes()
            .iter()
            .filter(|d| d.id != previous.id)
            .collect();

        let Some(replacement) = candidates.choose(rng).map(|d| (*d).clone()) else {
            tracing::warn!(menu_id = self.menu.id, index, "No alternative dish to reroll to");
            return Ok(EditorEvent::NoAlternative { index });
        };

        let mut updated = self.menu.clone();
        updated.dishes[index] = replacement.clone();
        self.store.update_menu(&updated)?;
        self.menu = updated;

        let weekday = weekday_for(index);
        tracing::info!(
            menu_id = self.menu.id,
            day = %weekday,
            from = %previous.name,
            to = %replacement.name,
            "Dish rerolled"
        );

        Ok(EditorEvent::Rerolled {
            index,
            weekday,
            previous,
            current: replacement,
        })
    }
}
