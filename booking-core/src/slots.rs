use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Bookable times, identical for every date.
pub const SLOT_LABELS: [&str; 8] = [
    "09:00", "10:00", "11:00", "12:00", "14:00", "15:00", "16:00", "17:00",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAvailability {
    pub label: &'static str,
    pub is_available: bool,
}

pub fn slot_is_available(index: usize) -> bool {
    index % 4 != 1
}

/// Slots for the selected date; nothing until a date is picked.
pub fn render_slots(date: Option<NaiveDate>) -> Vec<SlotAvailability> {
    if date.is_none() {
        return Vec::new();
    }

    SLOT_LABELS
        .iter()
        .enumerate()
        .map(|(index, label)| SlotAvailability {
            label,
            is_available: slot_is_available(index),
        })
        .collect()
}

pub fn find_slot(label: &str) -> Option<SlotAvailability> {
    SLOT_LABELS
        .iter()
        .position(|candidate| *candidate == label)
        .map(|index| SlotAvailability {
            label: SLOT_LABELS[index],
            is_available: slot_is_available(index),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_slots_without_a_date() {
        assert!(render_slots(None).is_empty());
    }

    #[test]
    fn fixed_pattern_regardless_of_date() {
        let a = render_slots(NaiveDate::from_ymd_opt(2026, 6, 3));
        let b = render_slots(NaiveDate::from_ymd_opt(2027, 1, 18));
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);

        let closed: Vec<_> = a.iter().filter(|s| !s.is_available).map(|s| s.label).collect();
        assert_eq!(closed, vec!["10:00", "15:00"]);
    }

    #[test]
    fn lookup_by_label() {
        assert_eq!(find_slot("09:00").map(|s| s.is_available), Some(true));
        assert_eq!(find_slot("10:00").map(|s| s.is_available), Some(false));
        assert!(find_slot("13:00").is_none());
    }
}
