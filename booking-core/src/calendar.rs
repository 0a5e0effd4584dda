//! Month grid with demo availability.
//!
//! Availability is not real scheduling data: weekdays are always open and a
//! weekend day is open unless its day number is divisible by three.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The month currently shown in the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCursor {
    year: i32,
    month: u32,
}

impl CalendarCursor {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Cursor for the month that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Moves the cursor by `delta` months, carrying into the year.
    pub fn advance(&mut self, delta: i32) {
        let total = self.year * 12 + (self.month as i32 - 1) + delta;
        self.year = total.div_euclid(12);
        self.month = total.rem_euclid(12) as u32 + 1;
    }

    /// The calendar date for `day` in this month, if it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub day: u32,
    pub is_available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayCell {
    /// Padding before the first of the month.
    Blank,
    Day(DayAvailability),
}

/// Declarative description of one rendered month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub cursor: CalendarCursor,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| matches!(cell, DayCell::Blank))
            .count()
    }

    pub fn days(&self) -> impl Iterator<Item = DayAvailability> + '_ {
        self.cells.iter().filter_map(|cell| match cell {
            DayCell::Day(day) => Some(*day),
            DayCell::Blank => None,
        })
    }

    pub fn day(&self, day: u32) -> Option<DayAvailability> {
        self.days().find(|d| d.day == day)
    }
}

pub fn render_month(cursor: CalendarCursor) -> MonthGrid {
    let (year, month) = (cursor.year, cursor.month);
    let blanks = first_weekday(year, month) as usize;

    let mut cells = Vec::with_capacity(blanks + 31);
    cells.extend(std::iter::repeat(DayCell::Blank).take(blanks));

    cells.extend((1..=days_in_month(year, month)).filter_map(|day| {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        Some(DayCell::Day(DayAvailability {
            day,
            is_available: is_day_available(date),
        }))
    }));

    MonthGrid { cursor, cells }
}

pub fn is_day_available(date: NaiveDate) -> bool {
    let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
    !weekend || date.day() % 3 != 0
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Weekday of the first of the month, 0 = Sunday.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
