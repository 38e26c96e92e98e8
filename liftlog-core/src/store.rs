//! The workout store handed to every screen.
//!
//! A `Store` is built once at start-up, initialised once, then shared.
//! Reads never fail from the caller's point of view: before initialisation
//! or on a database error they log and return an empty value. Writes return
//! the error so the caller can tell the user nothing was saved.

use anyhow::{Result, anyhow};
use diesel::sqlite::SqliteConnection;
use log::{debug, info, warn};
use tokio::sync::OnceCell;

use crate::config::StoreConfig;
use crate::db::{
    self, DbPool,
    models::{
        Exercise, NewExercise, NewWorkoutEntry, WorkoutHistoryEntry, WorkoutSet, WorkoutStats,
    },
    operations,
};
use crate::frequency::weekday_frequency;

pub struct Store {
    config: StoreConfig,
    pool: OnceCell<DbPool>,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.pool.initialized()
    }

    /// Opens the database, creates missing tables and seeds the catalog.
    ///
    /// Safe to call any number of times. Callers that arrive while the first
    /// attempt is running wait for it instead of starting their own; a
    /// failed attempt leaves the store uninitialised so the next call tries
    /// again.
    pub async fn initialize(&self) -> Result<()> {
        self.pool
            .get_or_try_init(|| async {
                let config = self.config.clone();
                debug!("Initializing workout store at {}", config.database_url);
                let pool = tokio::task::spawn_blocking(move || db::open(&config)).await??;
                Ok::<DbPool, anyhow::Error>(pool)
            })
            .await?;
        Ok(())
    }

    /// Runs `op` on a pooled connection on the blocking thread pool.
    async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
    {
        let pool = self
            .pool
            .get()
            .ok_or_else(|| anyhow!("workout store is not initialized"))?
            .clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            op(&mut *conn)
        })
        .await?
    }

    async fn read_or_default<T, F>(&self, what: &str, op: F) -> T
    where
        T: Default + Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
    {
        if !self.is_initialized() {
            debug!("Store not initialized, returning no {}", what);
            return T::default();
        }

        match self.run(op).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to load {}: {:#}", what, e);
                T::default()
            }
        }
    }

    // Catalog

    /// Catalog rows for a weekday label, in the order they were added.
    pub async fn get_exercises_by_day(&self, day: &str) -> Vec<Exercise> {
        let day = day.to_owned();
        self.read_or_default("exercises", move |conn| {
            operations::get_exercises_by_day(conn, &day)
        })
        .await
    }

    pub async fn get_all_exercises(&self) -> Vec<Exercise> {
        self.read_or_default("exercises", operations::get_all_exercises)
            .await
    }

    pub async fn get_exercise_by_name(&self, name: &str, day: &str) -> Option<Exercise> {
        let (name, day) = (name.to_owned(), day.to_owned());
        self.read_or_default("exercise", move |conn| {
            operations::get_exercise_by_name(conn, &name, &day)
        })
        .await
    }

    pub async fn add_exercise(&self, exercise: NewExercise) -> Result<Exercise> {
        let created = self
            .run(move |conn| operations::add_exercise(conn, &exercise))
            .await?;
        info!("Added exercise {} to {}", created.name, created.day);
        Ok(created)
    }

    pub async fn remove_exercise(&self, exercise_id: i32) -> Result<usize> {
        self.run(move |conn| operations::delete_exercise(conn, exercise_id))
            .await
    }

    /// Removes every exercise filed under `day`.
    pub async fn remove_day(&self, day: &str) -> Result<usize> {
        let day = day.to_owned();
        let removed = self
            .run(move |conn| operations::delete_exercises_for_day(conn, &day))
            .await?;
        info!("Removed {} exercises", removed);
        Ok(removed)
    }

    /// Empties the catalog. History rows keep their exercise names.
    pub async fn clear_all_days(&self) -> Result<usize> {
        let removed = self.run(operations::delete_all_exercises).await?;
        info!("Cleared catalog ({} exercises)", removed);
        Ok(removed)
    }

    // History

    /// Saves an entry and its sets atomically; returns the new history id.
    pub async fn save_workout_entry(&self, entry: NewWorkoutEntry) -> Result<i32> {
        let id = self
            .run(move |conn| operations::save_workout_entry(conn, &entry))
            .await?;
        debug!("Saved workout entry {}", id);
        Ok(id)
    }

    /// Every history entry, newest first.
    pub async fn get_workout_history(&self) -> Vec<WorkoutHistoryEntry> {
        self.read_or_default("workout history", operations::get_workout_history)
            .await
    }

    pub async fn get_workout_history_by_exercise(
        &self,
        exercise_name: &str,
    ) -> Vec<WorkoutHistoryEntry> {
        let name = exercise_name.to_owned();
        self.read_or_default("workout history", move |conn| {
            operations::get_workout_history_by_exercise(conn, &name)
        })
        .await
    }

    /// Most recent entry for an exercise; used to pre-fill the weight.
    pub async fn get_last_workout_for_exercise(
        &self,
        exercise_name: &str,
    ) -> Option<WorkoutHistoryEntry> {
        let name = exercise_name.to_owned();
        self.read_or_default("last workout", move |conn| {
            operations::get_last_workout_for_exercise(conn, &name)
        })
        .await
    }

    pub async fn get_workout_sets(&self, workout_history_id: i32) -> Vec<WorkoutSet> {
        self.read_or_default("workout sets", move |conn| {
            operations::get_workout_sets(conn, workout_history_id)
        })
        .await
    }

    pub async fn clear_workout_history(&self) -> Result<usize> {
        let removed = self.run(operations::clear_workout_history).await?;
        info!("Cleared workout history ({} entries)", removed);
        Ok(removed)
    }

    pub async fn get_workout_stats(&self) -> WorkoutStats {
        self.read_or_default("workout stats", operations::get_workout_stats)
            .await
    }

    /// Entries per weekday over the whole history, Sunday first.
    pub async fn get_weekday_frequency(&self) -> [u32; 7] {
        weekday_frequency(&self.get_workout_history().await)
    }
}
