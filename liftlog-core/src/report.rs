//! Turns what the user typed on the log screen into a history entry.
//!
//! All input checks live here; the persistence layer stores what it is
//! given without validating it again.

use chrono::Local;
use thiserror::Error;

use crate::db::models::{Exercise, NewWorkoutEntry, NewWorkoutSet};

pub const DEFAULT_NOTE: &str = "Consistência! Continue evoluindo com qualidade.";
pub const NOTE_PREFIX: &str = "Relatório anotado: ";

#[derive(Debug, Error, PartialEq)]
pub enum ReportError {
    #[error("weight must be a positive number, got {0}")]
    InvalidWeight(f64),
    #[error("fill in all {expected} sets with a positive number of reps")]
    IncompleteReps { expected: usize },
    #[error("exercise name must not be empty")]
    MissingExercise,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutReport {
    pub date: String,
    pub day: String,
    pub exercise_id: Option<i32>,
    pub exercise_name: String,
    pub weight: f64,
    /// Reps performed, one value per set.
    pub reps: Vec<i32>,
    pub note: String,
}

impl WorkoutReport {
    /// Report for a catalog exercise, dated today.
    pub fn for_exercise(exercise: &Exercise, weight: f64, reps: Vec<i32>, note: &str) -> Self {
        Self {
            date: today(),
            day: exercise.day.clone(),
            exercise_id: Some(exercise.id),
            exercise_name: exercise.name.clone(),
            weight,
            reps,
            note: note.to_string(),
        }
    }

    /// Validates the report and builds the entry to save. `expected_sets` is
    /// the exercise's target set count when it comes from the catalog.
    pub fn into_entry(self, expected_sets: Option<i32>) -> Result<NewWorkoutEntry, ReportError> {
        if self.exercise_name.trim().is_empty() {
            return Err(ReportError::MissingExercise);
        }

        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(ReportError::InvalidWeight(self.weight));
        }

        let expected = expected_sets
            .and_then(|n| usize::try_from(n).ok())
            .filter(|n| *n > 0)
            .unwrap_or_else(|| self.reps.len().max(1));
        if self.reps.len() != expected || self.reps.iter().any(|r| *r <= 0) {
            return Err(ReportError::IncompleteReps { expected });
        }

        let sets = self
            .reps
            .iter()
            .zip(1..)
            .map(|(reps, set_number)| NewWorkoutSet {
                set_number,
                reps: *reps,
                weight: self.weight,
            })
            .collect();

        let sets_detail = self
            .reps
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let note = match self.note.trim() {
            "" => DEFAULT_NOTE.to_string(),
            text => format!("{}{}", NOTE_PREFIX, text),
        };

        Ok(NewWorkoutEntry {
            date: self.date,
            day: self.day,
            exercise_id: self.exercise_id,
            exercise_name: self.exercise_name,
            weight: self.weight,
            sets_detail,
            note,
            sets,
        })
    }
}

/// Today's local date as `dd/mm/yyyy`.
pub fn today() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}
