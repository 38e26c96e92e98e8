pub mod errors;
pub mod logging;
pub mod objects;
pub mod workout_log;

use crate::{frequency, report, weekday};
use errors::LiftlogError;
use objects::{NewWorkoutEntry, WorkoutHistoryEntry, WorkoutReport};

/// Weekday abbreviation ("Qua") for `dd/mm/yyyy` or `yyyy-mm-dd`.
#[uniffi::export]
pub fn weekday_for_date(date: String) -> Option<String> {
    weekday::weekday_for_date(&date).map(str::to_string)
}

#[uniffi::export]
pub fn weekday_frequency(entries: Vec<WorkoutHistoryEntry>) -> Vec<u32> {
    let entries: Vec<crate::db::models::WorkoutHistoryEntry> =
        entries.into_iter().map(Into::into).collect();
    frequency::weekday_frequency(&entries).to_vec()
}

/// Validates a report without saving it.
#[uniffi::export]
pub fn build_workout_entry(
    report: WorkoutReport,
    expected_sets: Option<i32>,
) -> Result<NewWorkoutEntry, LiftlogError> {
    let entry = report::WorkoutReport::from(report).into_entry(expected_sets)?;
    Ok(entry.into())
}

#[uniffi::export]
pub fn today() -> String {
    report::today()
}
