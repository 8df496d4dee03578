//! Line-oriented prompts
//!
//! Generic over the reader and writer so the console can be driven by a
//! script in tests.

use shared::models::{DishCategory, MAX_MENU_LEN};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::planner::CategoryCounts;

/// Invalid answers tolerated per category before the prompt gives up
pub const MAX_ATTEMPTS: usize = 3;

/// Answer that aborts a multi-step prompt
pub const CANCEL: &str = "x";

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `question` and read one trimmed line; `None` at end of input
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Ask until the line parses as `T`; `None` on a bad answer or end of input
    pub fn ask_parsed<T: FromStr>(&mut self, question: &str) -> io::Result<Option<T>> {
        Ok(self.ask(question)?.and_then(|answer| answer.parse().ok()))
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Wait for Enter
    pub fn pause(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    /// Ask how many dishes each category should contribute
    ///
    /// Each answer must be a whole number up to [`MAX_MENU_LEN`], and each
    /// category gets [`MAX_ATTEMPTS`] tries. Returns `None` when the user
    /// answers [`CANCEL`], runs out of attempts, or input ends.
    pub fn ask_category_counts(&mut self) -> io::Result<Option<CategoryCounts>> {
        let mut counts = CategoryCounts::new();
        for category in DishCategory::ALL {
            match self.ask_category_count(category)? {
                Some(count) => counts.set(category, count),
                None => return Ok(None),
            }
        }
        Ok(Some(counts))
    }

    fn ask_category_count(&mut self, category: DishCategory) -> io::Result<Option<usize>> {
        let question = format!(
            "\nHow many of the dishes should be {}? ({CANCEL} to cancel)",
            category.label().to_lowercase()
        );

        for attempt in 1..=MAX_ATTEMPTS {
            let Some(answer) = self.ask(&question)? else {
                return Ok(None);
            };
            if answer.eq_ignore_ascii_case(CANCEL) {
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(count) if count <= MAX_MENU_LEN => return Ok(Some(count)),
                _ => {
                    let left = MAX_ATTEMPTS - attempt;
                    if left > 0 {
                        writeln!(self.output, "Invalid number, try again ({left} left).")?;
                    }
                }
            }
        }

        writeln!(self.output, "Too many invalid answers.")?;
        tracing::warn!(category = %category, "Category count prompt exhausted");
        Ok(None)
    }

    /// Numbered category picker, 1-based in `DishCategory::ALL` order
    pub fn ask_category(&mut self) -> io::Result<Option<DishCategory>> {
        writeln!(self.output, "\nChoose a category (enter a number):")?;
        for (n, category) in DishCategory::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {category}", n + 1)?;
        }
        let choice: Option<usize> = self.ask_parsed("\nChoice:")?;
        Ok(choice
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| DishCategory::ALL.get(i).copied()))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(script: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_ask_trims_and_detects_eof() {
        let mut p = prompt("  hello \n");
        assert_eq!(p.ask("Say:").unwrap().as_deref(), Some("hello"));
        assert_eq!(p.ask("Again:").unwrap(), None);
        assert!(output(p).starts_with("Say:\n"));
    }

    #[test]
    fn test_ask_parsed() {
        let mut p = prompt("7\nseven\n");
        assert_eq!(p.ask_parsed::<usize>("n").unwrap(), Some(7));
        assert_eq!(p.ask_parsed::<usize>("n").unwrap(), None);
    }

    #[test]
    fn test_category_counts_in_order() {
        let mut p = prompt("2\n1\n0\n3\n1\n");
        let counts = p.ask_category_counts().unwrap().unwrap();
        assert_eq!(counts.get(DishCategory::Meat), 2);
        assert_eq!(counts.get(DishCategory::Fish), 1);
        assert_eq!(counts.get(DishCategory::Chicken), 0);
        assert_eq!(counts.get(DishCategory::Vegetarian), 3);
        assert_eq!(counts.get(DishCategory::Soup), 1);
        assert_eq!(counts.total(), 7);
    }

    #[test]
    fn test_category_counts_retry_then_succeed() {
        let mut p = prompt("abc\n-1\n2\n0\n0\n0\n0\n");
        let counts = p.ask_category_counts().unwrap().unwrap();
        assert_eq!(counts.get(DishCategory::Meat), 2);
        assert!(output(p).contains("Invalid number, try again (1 left)."));
    }

    #[test]
    fn test_category_counts_above_menu_limit_are_invalid() {
        let mut p = prompt("32\n18446744073709551615\n31\n0\n0\n0\n0\n");
        let counts = p.ask_category_counts().unwrap().unwrap();
        assert_eq!(counts.get(DishCategory::Meat), 31);
        assert_eq!(counts.total(), 31);
        let text = output(p);
        assert!(text.contains("Invalid number, try again (2 left)."));
        assert!(text.contains("Invalid number, try again (1 left)."));
    }

    #[test]
    fn test_category_counts_exhausted() {
        let mut p = prompt("a\nb\nc\n5\n");
        assert_eq!(p.ask_category_counts().unwrap(), None);
        assert!(output(p).contains("Too many invalid answers."));
    }

    #[test]
    fn test_category_counts_cancel() {
        let mut p = prompt("1\nX\n");
        assert_eq!(p.ask_category_counts().unwrap(), None);
    }

    #[test]
    fn test_category_counts_eof_cancels() {
        let mut p = prompt("1\n");
        assert_eq!(p.ask_category_counts().unwrap(), None);
    }

    #[test]
    fn test_ask_category() {
        let mut p = prompt("3\n0\n6\n");
        assert_eq!(p.ask_category().unwrap(), Some(DishCategory::Chicken));
        assert_eq!(p.ask_category().unwrap(), None);
        assert_eq!(p.ask_category().unwrap(), None);
    }
}
