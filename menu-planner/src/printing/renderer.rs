//! Menu text renderer
//!
//! Renders menus as plain text, one `<Weekday>: <Dish> (<Category>)` line
//! per slot.

use shared::models::Menu;

/// Separator between menus in a multi-menu export
pub const MENU_SEPARATOR: &str = "------------------------------";

/// Line-oriented text buffer
#[derive(Debug, Default)]
pub struct TextBuilder {
    buf: String,
}

impl TextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self.buf.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    pub fn build(self) -> String {
        self.buf
    }
}

/// Menu text renderer
pub struct MenuTextRenderer;

impl MenuTextRenderer {
    /// Render a single menu
    pub fn render(menu: &Menu) -> String {
        let mut b = TextBuilder::new();
        Self::render_menu(&mut b, menu);
        b.build()
    }

    /// Render several menus separated by a dashed line
    pub fn render_all(menus: &[Menu]) -> String {
        let mut b = TextBuilder::new();
        for menu in menus {
            Self::render_menu(&mut b, menu);
            b.line(MENU_SEPARATOR);
        }
        b.build()
    }

    fn render_menu(b: &mut TextBuilder, menu: &Menu) {
        b.line(&format!("Menu ID: {}", menu.id)).blank();
        for (_, weekday, dish) in menu.slots() {
            b.line(&Self::slot_line(weekday.label(), &dish.name, dish.category.label()));
        }
    }

    /// `Monday: Meatballs (Meat)`
    pub fn slot_line(weekday: &str, dish: &str, category: &str) -> String {
        format!("{weekday}: {dish} ({category})")
    }
}
