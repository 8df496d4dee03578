//! Weekday assignment for menu slots
//!
//! Slot `i` of a menu is served on `WEEKDAYS[i % 7]`. Generation, editing
//! and export all go through [`weekday_for`] so they agree on which slot is
//! Sunday.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Week order, Monday first
///
/// English labels, to match the English category labels.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// Weekday for a zero-based menu slot, cycling every seven slots
#[inline]
pub fn weekday_for(index: usize) -> Weekday {
    WEEKDAYS[index % WEEKDAYS.len()]
}

impl Weekday {
    pub const fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub const fn is_sunday(&self) -> bool {
        matches!(self, Weekday::Sunday)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_seventh() {
        assert_eq!(weekday_for(0), Weekday::Monday);
        assert_eq!(weekday_for(6), Weekday::Sunday);
        assert!(weekday_for(6).is_sunday());
    }

    #[test]
    fn test_cycles_every_seven() {
        for i in 0..100 {
            assert_eq!(weekday_for(i), weekday_for(i + 7));
        }
    }

    #[test]
    fn test_month_long_menu() {
        // 31 slots: the last one lands on a Wednesday
        assert_eq!(weekday_for(30), Weekday::Wednesday);
        assert_eq!(weekday_for(27).label(), "Sunday");
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = WEEKDAYS.iter().map(|d| d.label()).collect();
        assert_eq!(
            labels,
            [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
    }
}
