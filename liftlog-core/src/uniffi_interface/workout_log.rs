use log::debug;
use std::sync::Arc;

use crate::config::StoreConfig;
use crate::db::models;
use crate::report;
use crate::runtime::global_runtime;
use crate::store::Store;
use crate::uniffi_interface::errors::LiftlogError;
use crate::uniffi_interface::objects::{
    Exercise, NewWorkoutEntry, WorkoutHistoryEntry, WorkoutReport, WorkoutSet, WorkoutStats,
};

/// The store as seen from the app. One instance per database, created at
/// launch; `initialize` must succeed before anything is written.
#[derive(uniffi::Object)]
pub struct WorkoutLog {
    store: Store,
}

#[uniffi::export]
impl WorkoutLog {
    #[uniffi::constructor]
    pub fn new(db_path: String) -> Arc<Self> {
        Arc::new(Self {
            store: Store::new(StoreConfig::new(db_path)),
        })
    }

    pub fn initialize(&self) -> Result<(), LiftlogError> {
        global_runtime().block_on(self.store.initialize())?;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.store.is_initialized()
    }

    pub fn exercises_by_day(&self, day: String) -> Vec<Exercise> {
        global_runtime()
            .block_on(self.store.get_exercises_by_day(&day))
            .into_iter()
            .map(Exercise::from)
            .collect()
    }

    pub fn all_exercises(&self) -> Vec<Exercise> {
        global_runtime()
            .block_on(self.store.get_all_exercises())
            .into_iter()
            .map(Exercise::from)
            .collect()
    }

    pub fn exercise_by_name(&self, name: String, day: String) -> Option<Exercise> {
        global_runtime()
            .block_on(self.store.get_exercise_by_name(&name, &day))
            .map(Exercise::from)
    }

    pub fn add_exercise(
        &self,
        name: String,
        sets: i32,
        reps: String,
        day: String,
    ) -> Result<Exercise, LiftlogError> {
        let created = global_runtime().block_on(self.store.add_exercise(models::NewExercise {
            name,
            sets,
            reps,
            day,
        }))?;
        Ok(created.into())
    }

    pub fn remove_exercise(&self, exercise_id: i32) -> Result<u64, LiftlogError> {
        let removed = global_runtime().block_on(self.store.remove_exercise(exercise_id))?;
        Ok(removed as u64)
    }

    pub fn remove_day(&self, day: String) -> Result<u64, LiftlogError> {
        let removed = global_runtime().block_on(self.store.remove_day(&day))?;
        Ok(removed as u64)
    }

    pub fn clear_all_days(&self) -> Result<u64, LiftlogError> {
        let removed = global_runtime().block_on(self.store.clear_all_days())?;
        Ok(removed as u64)
    }

    pub fn save_workout_entry(&self, entry: NewWorkoutEntry) -> Result<i32, LiftlogError> {
        let id = global_runtime().block_on(self.store.save_workout_entry(entry.into()))?;
        Ok(id)
    }

    /// Validates a report against the exercise's target sets and saves it.
    pub fn save_report(
        &self,
        report: WorkoutReport,
        expected_sets: Option<i32>,
    ) -> Result<i32, LiftlogError> {
        let entry = report::WorkoutReport::from(report).into_entry(expected_sets)?;
        debug!("Saving report for {}", entry.exercise_name);
        let id = global_runtime().block_on(self.store.save_workout_entry(entry))?;
        Ok(id)
    }

    pub fn workout_history(&self) -> Vec<WorkoutHistoryEntry> {
        global_runtime()
            .block_on(self.store.get_workout_history())
            .into_iter()
            .map(WorkoutHistoryEntry::from)
            .collect()
    }

    pub fn workout_history_by_exercise(&self, exercise_name: String) -> Vec<WorkoutHistoryEntry> {
        global_runtime()
            .block_on(self.store.get_workout_history_by_exercise(&exercise_name))
            .into_iter()
            .map(WorkoutHistoryEntry::from)
            .collect()
    }

    pub fn last_workout_for_exercise(&self, exercise_name: String) -> Option<WorkoutHistoryEntry> {
        global_runtime()
            .block_on(self.store.get_last_workout_for_exercise(&exercise_name))
            .map(WorkoutHistoryEntry::from)
    }

    pub fn workout_sets(&self, workout_history_id: i32) -> Vec<WorkoutSet> {
        global_runtime()
            .block_on(self.store.get_workout_sets(workout_history_id))
            .into_iter()
            .map(WorkoutSet::from)
            .collect()
    }

    pub fn clear_workout_history(&self) -> Result<u64, LiftlogError> {
        let removed = global_runtime().block_on(self.store.clear_workout_history())?;
        Ok(removed as u64)
    }

    pub fn workout_stats(&self) -> WorkoutStats {
        global_runtime()
            .block_on(self.store.get_workout_stats())
            .into()
    }

    /// Entries per weekday, Sunday first, for the profile chart.
    pub fn weekday_frequency(&self) -> Vec<u32> {
        global_runtime()
            .block_on(self.store.get_weekday_frequency())
            .to_vec()
    }
}
