//! Full-screen editor view
//!
//! Reads single key presses in raw mode: Up/Down move the cursor, Enter
//! rerolls the highlighted slot, Esc leaves.

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::queue;
use crossterm::style::{Color, Stylize, style};
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, Write};

use crate::db::MenuStore;
use crate::planner::{EditorCommand, EditorEvent, MenuEditor};
use crate::printing::MenuTextRenderer;

/// Restores cooked mode when dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

pub fn command_for(code: KeyCode) -> Option<EditorCommand> {
    match code {
        KeyCode::Up => Some(EditorCommand::MoveUp),
        KeyCode::Down => Some(EditorCommand::MoveDown),
        KeyCode::Enter => Some(EditorCommand::Reroll),
        KeyCode::Esc => Some(EditorCommand::Exit),
        _ => None,
    }
}

/// Status line for an event, if it warrants one
pub fn describe(event: &EditorEvent) -> Option<String> {
    match event {
        EditorEvent::Rerolled {
            weekday, current, ..
        } => Some(format!(
            "The dish for {weekday} was changed to: {} ({})",
            current.name, current.category
        )),
        EditorEvent::NoAlternative { .. } => {
            Some("There is no other dish to switch to.".to_string())
        }
        EditorEvent::Moved { .. } | EditorEvent::Terminated => None,
    }
}

/// Drive `editor` from the keyboard until Esc
pub fn run<S: MenuStore + ?Sized>(editor: &mut MenuEditor<'_, S>) -> io::Result<()> {
    let mut stdout = io::stdout();
    let _raw = RawModeGuard::enable()?;
    let mut status: Option<String> = None;

    while !editor.is_terminated() {
        draw(&mut stdout, editor, status.as_deref())?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(command) = command_for(key.code) else {
            continue;
        };

        status = match editor.handle(command) {
            Ok(event) => describe(&event),
            Err(err) => {
                tracing::error!(code = %err.code, "Editor command failed: {}", err.message);
                Some(format!("Error: {}", err.message))
            }
        };
    }

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    stdout.flush()
}

/// Paint the menu with the cursor row marked
///
/// Raw mode does not translate `\n`, so every line ends in `\r\n`.
pub fn draw<S: MenuStore + ?Sized, W: Write>(
    out: &mut W,
    editor: &MenuEditor<'_, S>,
    status: Option<&str>,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    write!(out, "Editing menu ID: {}\r\n\r\n", editor.menu().id)?;

    for (index, weekday, dish) in editor.menu().slots() {
        let marker = if index == editor.current_index() { ">" } else { " " };
        let line = format!(
            "{marker} {}",
            MenuTextRenderer::slot_line(weekday.label(), &dish.name, dish.category.label())
        );
        if weekday.is_sunday() {
            write!(out, "{}\r\n", style(line).with(Color::Red))?;
        } else {
            write!(out, "{line}\r\n")?;
        }
    }

    write!(
        out,
        "\r\nUse the up/down arrow keys to move and press Enter to reroll the dish.\r\nPress Esc to finish.\r\n"
    )?;
    if let Some(status) = status {
        write!(out, "\r\n{status}\r\n")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MenuStorage;
    use crate::services::DishCatalog;
    use shared::models::{Dish, DishCategory, DishCreate, MenuCreate};
    use shared::weekday::Weekday;

    #[test]
    fn test_key_mapping() {
        assert_eq!(command_for(KeyCode::Up), Some(EditorCommand::MoveUp));
        assert_eq!(command_for(KeyCode::Down), Some(EditorCommand::MoveDown));
        assert_eq!(command_for(KeyCode::Enter), Some(EditorCommand::Reroll));
        assert_eq!(command_for(KeyCode::Esc), Some(EditorCommand::Exit));
        assert_eq!(command_for(KeyCode::Char('q')), None);
    }

    #[test]
    fn test_describe() {
        let event = EditorEvent::Rerolled {
            index: 6,
            weekday: Weekday::Sunday,
            previous: Dish::new(1, "A", DishCategory::Meat),
            current: Dish::new(2, "Roast", DishCategory::Meat),
        };
        assert_eq!(
            describe(&event).unwrap(),
            "The dish for Sunday was changed to: Roast (Meat)"
        );
        assert!(describe(&EditorEvent::NoAlternative { index: 0 }).is_some());
        assert!(describe(&EditorEvent::Moved { index: 1 }).is_none());
    }

    #[test]
    fn test_draw_marks_cursor_row() {
        let storage = MenuStorage::open_in_memory().unwrap();
        let dishes = storage
            .insert_dishes(vec![
                DishCreate::new("Tacos", DishCategory::Meat),
                DishCreate::new("Sushi", DishCategory::Fish),
            ])
            .unwrap();
        let catalog = DishCatalog::load(&storage).unwrap();
        let menu = storage.insert_menu(MenuCreate::new(dishes)).unwrap();

        let mut editor = MenuEditor::start(&storage, &catalog, menu).unwrap();
        editor.handle(EditorCommand::MoveDown).unwrap();

        let mut out = Vec::new();
        draw(&mut out, &editor, Some("hello")).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("  Monday: Tacos (Meat)\r\n"));
        assert!(text.contains("> Tuesday: Sushi (Fish)\r\n"));
        assert!(text.contains("hello"));
    }
}
