use crate::db::models;
use crate::report;

#[derive(Debug, Clone, uniffi::Record)]
pub struct Exercise {
    pub id: i32,
    pub name: String,
    pub sets: i32,
    pub reps: String,
    pub day: String,
}

impl From<models::Exercise> for Exercise {
    fn from(e: models::Exercise) -> Self {
        Exercise {
            id: e.id,
            name: e.name,
            sets: e.sets,
            reps: e.reps,
            day: e.day,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct WorkoutHistoryEntry {
    pub id: i32,
    pub date: String,
    pub day: String,
    pub exercise_id: Option<i32>,
    pub exercise_name: String,
    pub weight: f64,
    pub sets_detail: String,
    pub note: String,
    pub created_at: i64,
}

impl From<models::WorkoutHistoryEntry> for WorkoutHistoryEntry {
    fn from(h: models::WorkoutHistoryEntry) -> Self {
        WorkoutHistoryEntry {
            id: h.id,
            date: h.date,
            day: h.day,
            exercise_id: h.exercise_id,
            exercise_name: h.exercise_name,
            weight: h.weight,
            sets_detail: h.sets_detail,
            note: h.note,
            created_at: h.created_at,
        }
    }
}

impl From<WorkoutHistoryEntry> for models::WorkoutHistoryEntry {
    fn from(h: WorkoutHistoryEntry) -> Self {
        models::WorkoutHistoryEntry {
            id: h.id,
            date: h.date,
            day: h.day,
            exercise_id: h.exercise_id,
            exercise_name: h.exercise_name,
            weight: h.weight,
            sets_detail: h.sets_detail,
            note: h.note,
            created_at: h.created_at,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct WorkoutSet {
    pub id: i32,
    pub workout_history_id: i32,
    pub set_number: i32,
    pub reps: i32,
    pub weight: f64,
}

impl From<models::WorkoutSet> for WorkoutSet {
    fn from(s: models::WorkoutSet) -> Self {
        WorkoutSet {
            id: s.id,
            workout_history_id: s.workout_history_id,
            set_number: s.set_number,
            reps: s.reps,
            weight: s.weight,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct NewWorkoutSet {
    pub set_number: i32,
    pub reps: i32,
    pub weight: f64,
}

#[derive(Debug, Clone, uniffi::Record)]
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

impl From<NewWorkoutEntry> for models::NewWorkoutEntry {
    fn from(e: NewWorkoutEntry) -> Self {
        models::NewWorkoutEntry {
            date: e.date,
            day: e.day,
            exercise_id: e.exercise_id,
            exercise_name: e.exercise_name,
            weight: e.weight,
            sets_detail: e.sets_detail,
            note: e.note,
            sets: e
                .sets
                .into_iter()
                .map(|s| models::NewWorkoutSet {
                    set_number: s.set_number,
                    reps: s.reps,
                    weight: s.weight,
                })
                .collect(),
        }
    }
}

impl From<models::NewWorkoutEntry> for NewWorkoutEntry {
    fn from(e: models::NewWorkoutEntry) -> Self {
        NewWorkoutEntry {
            date: e.date,
            day: e.day,
            exercise_id: e.exercise_id,
            exercise_name: e.exercise_name,
            weight: e.weight,
            sets_detail: e.sets_detail,
            note: e.note,
            sets: e
                .sets
                .into_iter()
                .map(|s| NewWorkoutSet {
                    set_number: s.set_number,
                    reps: s.reps,
                    weight: s.weight,
                })
                .collect(),
        }
    }
}

/// What the user filled in on the log screen, before validation.
#[derive(Debug, Clone, uniffi::Record)]
pub struct WorkoutReport {
    pub date: String,
    pub day: String,
    pub exercise_id: Option<i32>,
    pub exercise_name: String,
    pub weight: f64,
    pub reps: Vec<i32>,
    pub note: String,
}

impl From<WorkoutReport> for report::WorkoutReport {
    fn from(r: WorkoutReport) -> Self {
        report::WorkoutReport {
            date: r.date,
            day: r.day,
            exercise_id: r.exercise_id,
            exercise_name: r.exercise_name,
            weight: r.weight,
            reps: r.reps,
            note: r.note,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct WorkoutStats {
    pub total_workouts: i64,
    pub total_exercises: i64,
    pub last_workout_date: Option<String>,
}

impl From<models::WorkoutStats> for WorkoutStats {
    fn from(s: models::WorkoutStats) -> Self {
        WorkoutStats {
            total_workouts: s.total_workouts,
            total_exercises: s.total_exercises,
            last_workout_date: s.last_workout_date,
        }
    }
}
