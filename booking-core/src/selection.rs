use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{is_day_available, render_month, CalendarCursor, MonthGrid};
use crate::error::SelectionError;
use crate::slots::{find_slot, render_slots, SlotAvailability};

/// The user's calendar pick. Changing the date always drops the slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    date: Option<NaiveDate>,
    slot: Option<String>,
}

impl Selection {
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    /// `YYYY-MM-DD` of the picked calendar day.
    pub fn iso_date(&self) -> Option<String> {
        self.date.map(|date| date.format("%Y-%m-%d").to_string())
    }

    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.slot.is_some()
    }
}

/// Owns the calendar cursor and the selection made on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduler {
    cursor: CalendarCursor,
    selection: Selection,
}

impl Scheduler {
    pub fn new(cursor: CalendarCursor) -> Self {
        Self {
            cursor,
            selection: Selection::default(),
        }
    }

    /// Starts on the month containing `today`.
    pub fn starting_at(today: NaiveDate) -> Self {
        Self::new(CalendarCursor::containing(today))
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn month_grid(&self) -> MonthGrid {
        render_month(self.cursor)
    }

    pub fn slots(&self) -> Vec<SlotAvailability> {
        render_slots(self.selection.date)
    }

    /// Month navigation never touches the selection.
    pub fn advance_month(&mut self, delta: i32) {
        self.cursor.advance(delta);
        tracing::debug!(cursor = %self.cursor.label(), "calendar moved");
    }

    pub fn select_day(&mut self, day: u32) -> Result<NaiveDate, SelectionError> {
        let date = self
            .cursor
            .date(day)
            .ok_or(SelectionError::DayOutOfMonth {
                year: self.cursor.year(),
                month: self.cursor.month(),
                day,
            })?;

        if !is_day_available(date) {
            return Err(SelectionError::DayUnavailable(date.to_string()));
        }

        self.selection.date = Some(date);
        self.selection.slot = None;
        tracing::debug!(%date, "day selected");
        Ok(date)
    }

    pub fn select_slot(&mut self, label: &str) -> Result<(), SelectionError> {
        if self.selection.date.is_none() {
            return Err(SelectionError::NoDateSelected);
        }
        let slot = find_slot(label).ok_or_else(|| SelectionError::UnknownSlot(label.to_string()))?;
        if !slot.is_available {
            return Err(SelectionError::SlotUnavailable(slot.label.to_string()));
        }

        self.selection.slot = Some(slot.label.to_string());
        tracing::debug!(slot = slot.label, "slot selected");
        Ok(())
    }

    /// Whether `day` of the displayed month carries the selected state.
    pub fn is_selected(&self, day: u32) -> bool {
        match (self.selection.date, self.cursor.date(day)) {
            (Some(selected), Some(date)) => selected == date,
            _ => false,
        }
    }

    pub fn is_slot_selected(&self, label: &str) -> bool {
        self.selection.slot() == Some(label)
    }
}
