use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::db::schema;

// Catalog models
#[derive(Queryable, Selectable, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = schema::exercises)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Exercise {
    pub id: i32,
    pub name: String,
    /// Target number of sets.
    pub sets: i32,
    /// Target rep range, kept as text ("8-12").
    pub reps: String,
    /// Weekday label the exercise is trained on.
    pub day: String,
    pub created_at: i64,
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} x {} ({})", self.name, self.sets, self.reps, self.day)
    }
}

/// A user-authored catalog entry.
#[derive(Deserialize, Debug, Clone)]
pub struct NewExercise {
    pub name: String,
    pub sets: i32,
    pub reps: String,
    pub day: String,
}

#[derive(Insertable)]
#[diesel(table_name = schema::exercises)]
pub(crate) struct ExerciseRow<'a> {
    pub name: &'a str,
    pub sets: i32,
    pub reps: &'a str,
    pub day: &'a str,
    pub created_at: i64,
}

// History models
#[derive(Queryable, Selectable, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = schema::workout_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WorkoutHistoryEntry {
    pub id: i32,
    /// User-facing date, `dd/mm/yyyy` or `yyyy-mm-dd`.
    pub date: String,
    pub day: String,
    pub exercise_id: Option<i32>,
    /// Copied from the catalog at save time so history survives catalog edits.
    pub exercise_name: String,
    pub weight: f64,
    /// Reps per set as text, e.g. "10, 10, 8".
    pub sets_detail: String,
    pub note: String,
    pub created_at: i64,
}

impl fmt::Display for WorkoutHistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}) {}: {:.1}kg x [{}]",
            self.id, self.date, self.day, self.exercise_name, self.weight, self.sets_detail
        )
    }
}

#[derive(Queryable, Selectable, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = schema::workout_sets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WorkoutSet {
    pub id: i32,
    pub workout_history_id: i32,
    /// 1-based position within the history entry.
    pub set_number: i32,
    pub reps: i32,
    pub weight: f64,
    pub created_at: i64,
}

impl fmt::Display for WorkoutSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Set {}: {:.1}kg x {} reps",
            self.set_number, self.weight, self.reps
        )
    }
}

/// One set as submitted with a new history entry.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NewWorkoutSet {
    pub set_number: i32,
    pub reps: i32,
    pub weight: f64,
}

/// Everything needed to save one history entry together with its sets.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NewWorkoutEntry {
    pub date: String,
    pub day: String,
    pub exercise_id: Option<i32>,
    pub exercise_name: String,
    pub weight: f64,
    pub sets_detail: String,
    pub note: String,
    pub sets: Vec<NewWorkoutSet>,
}

#[derive(Insertable)]
#[diesel(table_name = schema::workout_history)]
pub(crate) struct WorkoutHistoryRow<'a> {
    pub date: &'a str,
    pub day: &'a str,
    pub exercise_id: Option<i32>,
    pub exercise_name: &'a str,
    pub weight: f64,
    pub sets_detail: &'a str,
    pub note: &'a str,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = schema::workout_sets)]
pub(crate) struct WorkoutSetRow {
    pub workout_history_id: i32,
    pub set_number: i32,
    pub reps: i32,
    pub weight: f64,
    pub created_at: i64,
}

/// Aggregate counts shown on the profile screen.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct WorkoutStats {
    pub total_workouts: i64,
    pub total_exercises: i64,
    pub last_workout_date: Option<String>,
}
