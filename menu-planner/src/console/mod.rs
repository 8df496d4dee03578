//! Interactive console
//!
//! The main menu loop. Every failure inside an option is reported and the
//! loop goes on; only terminal I/O errors end it.
//!
//! ```text
//! 1. Generate a weekly menu
//! 2. Reroll a dish in a weekly menu
//! 3. Add a dish to the catalog
//! 4. Show all weekly menus
//! 5. Delete a weekly menu
//! 6. Export weekly menus to a text file
//! X. Exit
//! ```

pub mod editor_view;
pub mod prompt;

pub use prompt::Prompt;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Stylize, style};
use crossterm::terminal::{Clear, ClearType};
use shared::error::AppError;
use shared::models::{DishCreate, Menu, MenuId};
use std::io::{self, BufRead, Write};

use crate::core::{Config, MenuRequest, PlannerState};
use crate::db::MenuStore;
use crate::printing::{MENU_SEPARATOR, MenuExporter, MenuTextRenderer};

/// Main menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainOption {
    Generate,
    Reroll,
    AddDish,
    List,
    Delete,
    Export,
    Exit,
}

impl MainOption {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" => Some(Self::Generate),
            "2" => Some(Self::Reroll),
            "3" => Some(Self::AddDish),
            "4" => Some(Self::List),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Export),
            "x" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the console on stdin/stdout until the user exits
pub fn run<S: MenuStore>(state: &mut PlannerState<S>, config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(
        state,
        MenuExporter::new(&config.export_dir),
        Prompt::new(stdin.lock(), io::stdout()),
    );
    console.run()
}

pub struct Console<'a, S: MenuStore, R, W> {
    state: &'a mut PlannerState<S>,
    exporter: MenuExporter,
    prompt: Prompt<R, W>,
    clear_screen: bool,
}

impl<'a, S: MenuStore, R: BufRead, W: Write> Console<'a, S, R, W> {
    pub fn new(state: &'a mut PlannerState<S>, exporter: MenuExporter, prompt: Prompt<R, W>) -> Self {
        Self {
            state,
            exporter,
            prompt,
            clear_screen: true,
        }
    }

    /// Do not clear the terminal between screens
    pub fn without_clearing(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    /// Main loop; returns on `X` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_main_menu()?;
            let Some(answer) = self.prompt.ask("\nChoice:")? else {
                break;
            };

            match MainOption::parse(&answer) {
                Some(MainOption::Generate) => self.generate()?,
                Some(MainOption::Reroll) => self.reroll()?,
                Some(MainOption::AddDish) => self.add_dish()?,
                Some(MainOption::List) => {
                    self.list_menus()?;
                    self.prompt.pause()?;
                }
                Some(MainOption::Delete) => self.delete()?,
                Some(MainOption::Export) => self.export()?,
                Some(MainOption::Exit) => break,
                None => {
                    self.prompt.say("\nPlease choose a valid option.")?;
                    self.prompt.pause()?;
                }
            }
        }
        tracing::info!("Console closed");
        Ok(())
    }

    fn print_main_menu(&mut self) -> io::Result<()> {
        let out = self.prompt.output();
        if self.clear_screen {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        writeln!(out, "\nGenerate this week's menu")?;
        writeln!(out, "\n[ MENU ]")?;
        writeln!(out, "\n1. Generate a weekly menu")?;
        writeln!(out, "2. Reroll a dish in a weekly menu")?;
        writeln!(out, "3. Add a dish to the catalog")?;
        writeln!(out, "4. Show all weekly menus")?;
        writeln!(out, "5. Delete a weekly menu")?;
        writeln!(out, "6. Export weekly menus to a text file")?;
        writeln!(out, "\nX. Exit")?;
        writeln!(out, "{MENU_SEPARATOR}")
    }

    /// Report an operation failure and wait for acknowledgement
    fn report(&mut self, err: &AppError) -> io::Result<()> {
        tracing::debug!(
            code = %err.code,
            category = err.code.category().name(),
            "{}",
            err.message
        );
        self.prompt.say(&format!("\nError: {}", err.message))?;
        self.prompt.pause()
    }

    fn ask_menu_id(&mut self, question: &str) -> io::Result<Option<MenuId>> {
        let id = self.prompt.ask_parsed(question)?;
        if id.is_none() {
            self.prompt.say("Invalid menu ID.")?;
        }
        Ok(id)
    }

    // ========== 1. Generate ==========

    fn generate(&mut self) -> io::Result<()> {
        let Some(length) = self
            .prompt
            .ask_parsed::<usize>("\nHow many dishes should the menu have? (1 dish per day)")?
        else {
            self.prompt.say("Please enter a number between 1 and 31.")?;
            return self.prompt.pause();
        };

        let Some(mode) = self.prompt.ask(
            "\nDraw from all categories [1] or choose the distribution yourself [2]?",
        )?
        else {
            return Ok(());
        };

        let request = match mode.as_str() {
            "1" => MenuRequest::Random { length },
            "2" => match self.prompt.ask_category_counts()? {
                Some(counts) => MenuRequest::ByCategory { length, counts },
                None => {
                    self.prompt.say("Cancelled.")?;
                    return self.prompt.pause();
                }
            },
            _ => {
                self.prompt.say("Invalid choice.")?;
                return self.prompt.pause();
            }
        };

        match self.state.generate_menu(request) {
            Ok(generated) => {
                let out = self.prompt.output();
                writeln!(
                    out,
                    "\nHere is your weekly menu (Menu ID: {}):\n",
                    generated.menu.id
                )?;
                write_menu_rows(out, &generated.menu)?;
                if generated.is_short() {
                    writeln!(
                        out,
                        "\nOnly {} of {} requested dishes were available.",
                        generated.menu.len(),
                        generated.requested
                    )?;
                }
                self.prompt.pause()
            }
            Err(err) => self.report(&err),
        }
    }

    // ========== 2. Reroll ==========

    fn reroll(&mut self) -> io::Result<()> {
        if !self.list_menus()? {
            return self.prompt.pause();
        }
        let Some(id) = self.ask_menu_id("\nEnter the ID of the menu you want to edit:")? else {
            return self.prompt.pause();
        };

        let session = match self.state.edit_menu(id) {
            Ok(mut editor) => editor_view::run(&mut editor),
            Err(err) => return self.report(&err),
        };
        session?;

        if let Err(err) = self.state.reload_menus() {
            return self.report(&err);
        }
        Ok(())
    }

    // ========== 3. Add dish ==========

    fn add_dish(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt.ask("\nEnter the name of the dish:")? else {
            return Ok(());
        };
        if name.is_empty() {
            self.prompt.say("The name must not be empty.")?;
            return self.prompt.pause();
        }
        let Some(category) = self.prompt.ask_category()? else {
            self.prompt.say("Invalid choice.")?;
            return self.prompt.pause();
        };

        match self.state.add_dish(DishCreate::new(name, category)) {
            Ok(dish) => {
                self.prompt
                    .say(&format!("\nDish added: {} ({})", dish.name, dish.category))?;
                self.prompt.pause()
            }
            Err(err) => self.report(&err),
        }
    }

    // ========== 4. List ==========

    /// Print every stored menu; returns `false` when there are none
    fn list_menus(&mut self) -> io::Result<bool> {
        let menus = self.state.menus();
        let out = self.prompt.output();
        if menus.is_empty() {
            writeln!(out, "\n[ There are no saved menus. ]")?;
            return Ok(false);
        }
        for menu in menus {
            writeln!(out, "\nMenu ID: {}", menu.id)?;
            write_menu_rows(out, menu)?;
            writeln!(out, "{MENU_SEPARATOR}")?;
        }
        Ok(true)
    }

    // ========== 5. Delete ==========

    fn delete(&mut self) -> io::Result<()> {
        self.prompt.say("\nDelete a menu")?;
        if !self.list_menus()? {
            return self.prompt.pause();
        }

        let Some(answer) = self
            .prompt
            .ask("\nEnter the ID of the menu to delete, or X to cancel:")?
        else {
            return Ok(());
        };
        if answer.eq_ignore_ascii_case(prompt::CANCEL) {
            self.prompt.say("Cancelled.")?;
            return self.prompt.pause();
        }
        let Ok(id) = answer.parse::<MenuId>() else {
            self.prompt.say("Invalid menu ID.")?;
            return self.prompt.pause();
        };

        match self.state.delete_menu(id) {
            Ok(true) => {
                self.prompt.say(&format!("\nMenu {id} has been deleted."))?;
                self.prompt.pause()
            }
            Ok(false) => self.report(&AppError::menu_not_found(id)),
            Err(err) => self.report(&err),
        }
    }

    // ========== 6. Export ==========

    fn export(&mut self) -> io::Result<()> {
        if !self.list_menus()? {
            return self.prompt.pause();
        }
        let choice: Option<u8> = self
            .prompt
            .ask_parsed("\nExport [1] one weekly menu or [2] all weekly menus?")?;

        let result = match choice {
            Some(1) => {
                let Some(id) = self.ask_menu_id("\nEnter the ID of the menu to export:")? else {
                    return self.prompt.pause();
                };
                self.state
                    .find_menu(id)
                    .and_then(|menu| self.exporter.export_menu(&menu).map_err(AppError::from))
            }
            Some(2) => self
                .exporter
                .export_all(self.state.menus())
                .map_err(AppError::from),
            _ => {
                self.prompt.say("Invalid choice.")?;
                return self.prompt.pause();
            }
        };

        match result {
            Ok(path) => {
                self.prompt
                    .say(&format!("\nWritten to {}.", path.display()))?;
                self.prompt.pause()
            }
            Err(err) => self.report(&err),
        }
    }
}

/// One line per slot, Sunday in red
fn write_menu_rows<W: Write>(out: &mut W, menu: &Menu) -> io::Result<()> {
    for (_, weekday, dish) in menu.slots() {
        let line = MenuTextRenderer::slot_line(weekday.label(), &dish.name, dish.category.label());
        if weekday.is_sunday() {
            writeln!(out, "{}", style(line).with(Color::Red))?;
        } else {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
