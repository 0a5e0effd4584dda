use thiserror::Error;

use crate::form::Step;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid month {0} (must be 1-12)")]
    InvalidMonth(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("day {day} does not exist in {year}-{month:02}")]
    DayOutOfMonth { year: i32, month: u32, day: u32 },
    #[error("{0} is not available")]
    DayUnavailable(String),
    #[error("no date selected")]
    NoDateSelected,
    #[error("unknown time slot {0:?}")]
    UnknownSlot(String),
    #[error("time slot {0} is not available")]
    SlotUnavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("step {step} has invalid fields: {}", fields.join(", "))]
    ValidationFailed { step: Step, fields: Vec<String> },
    #[error("step number {0} is out of range (must be 1-4)")]
    StepOutOfRange(u8),
    #[error("a submission is already in progress")]
    SubmissionInFlight,
    #[error("no submission is in progress")]
    NotSubmitting,
    #[error("a date and time slot must be selected before submitting")]
    ScheduleIncomplete,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromoError {
    #[error("promo code {0:?} is not recognized")]
    Unrecognized(String),
}

#[derive(Debug, Error)]
pub enum DetailsError {
    #[error("malformed workshop details: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("workshop details are missing a title")]
    MissingTitle,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key}: expected a boolean, got {value:?}")]
    InvalidBool { key: &'static str, value: String },
    #[error("{key}: expected a whole number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key}: expected one of `ignore` or `reapply`, got {value:?}")]
    InvalidPromoRepeat { key: &'static str, value: String },
}
