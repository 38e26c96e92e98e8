use crate::db::models::WorkoutHistoryEntry;
use crate::weekday::{weekday_slot_for_date, weekday_slot_for_label};

/// Slot of an entry: its date when that parses, otherwise its stored day label.
pub fn weekday_slot(date: &str, day_label: &str) -> Option<usize> {
    weekday_slot_for_date(date).or_else(|| weekday_slot_for_label(day_label))
}

/// Number of history entries per weekday, Sunday first. Entries whose
/// weekday cannot be worked out are left out.
pub fn weekday_frequency<'a, I>(entries: I) -> [u32; 7]
where
    I: IntoIterator<Item = &'a WorkoutHistoryEntry>,
{
    let mut counts = [0u32; 7];
    for entry in entries {
        if let Some(slot) = weekday_slot(&entry.date, &entry.day) {
            counts[slot] += 1;
        }
    }
    counts
}
