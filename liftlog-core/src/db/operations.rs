use anyhow::Result;
use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    catalog::CatalogEntry,
    db::models::{
        Exercise, ExerciseRow, NewExercise, NewWorkoutEntry, WorkoutHistoryEntry,
        WorkoutHistoryRow, WorkoutSet, WorkoutSetRow, WorkoutStats,
    },
    db::schema::{exercises, store_meta, workout_history, workout_sets},
};

pub const CATALOG_SEEDED_KEY: &str = "catalog_seeded";

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

// Catalog
pub fn count_exercises(conn: &mut SqliteConnection) -> Result<i64> {
    exercises::table
        .count()
        .get_result(conn)
        .map_err(Into::into)
}

pub fn is_catalog_seeded(conn: &mut SqliteConnection) -> Result<bool> {
    let marker = store_meta::table
        .find(CATALOG_SEEDED_KEY)
        .select(store_meta::value)
        .first::<String>(conn)
        .optional()?;
    Ok(marker.is_some())
}

/// Writes `entries` into an empty, never-seeded catalog and records that it
/// happened. Returns the number of rows inserted (0 when skipped).
pub fn seed_catalog(conn: &mut SqliteConnection, entries: &[CatalogEntry]) -> Result<usize> {
    conn.transaction::<_, anyhow::Error, _>(|conn| {
        if is_catalog_seeded(conn)? {
            return Ok(0);
        }

        let mut inserted = 0;
        if count_exercises(conn)? == 0 {
            let created_at = now_millis();
            for entry in entries {
                inserted += diesel::insert_into(exercises::table)
                    .values(&ExerciseRow {
                        name: entry.name,
                        sets: entry.sets,
                        reps: entry.reps,
                        day: entry.day,
                        created_at,
                    })
                    .execute(conn)?;
            }
        }

        diesel::replace_into(store_meta::table)
            .values((
                store_meta::key.eq(CATALOG_SEEDED_KEY),
                store_meta::value.eq(now_millis().to_string()),
            ))
            .execute(conn)?;

        Ok(inserted)
    })
}

pub fn get_exercises_by_day(conn: &mut SqliteConnection, day: &str) -> Result<Vec<Exercise>> {
    exercises::table
        .filter(exercises::day.eq(day))
        .order(exercises::id.asc())
        .select(Exercise::as_select())
        .load(conn)
        .map_err(Into::into)
}

pub fn get_all_exercises(conn: &mut SqliteConnection) -> Result<Vec<Exercise>> {
    exercises::table
        .order((exercises::day.asc(), exercises::id.asc()))
        .select(Exercise::as_select())
        .load(conn)
        .map_err(Into::into)
}

pub fn get_exercise_by_name(
    conn: &mut SqliteConnection,
    name: &str,
    day: &str,
) -> Result<Option<Exercise>> {
    exercises::table
        .filter(exercises::name.eq(name))
        .filter(exercises::day.eq(day))
        .order(exercises::id.asc())
        .select(Exercise::as_select())
        .first(conn)
        .optional()
        .map_err(Into::into)
}

pub fn add_exercise(conn: &mut SqliteConnection, exercise: &NewExercise) -> Result<Exercise> {
    diesel::insert_into(exercises::table)
        .values(&ExerciseRow {
            name: &exercise.name,
            sets: exercise.sets,
            reps: &exercise.reps,
            day: &exercise.day,
            created_at: now_millis(),
        })
        .returning(Exercise::as_returning())
        .get_result(conn)
        .map_err(Into::into)
}

pub fn delete_exercise(conn: &mut SqliteConnection, exercise_id: i32) -> Result<usize> {
    diesel::delete(exercises::table.find(exercise_id))
        .execute(conn)
        .map_err(Into::into)
}

pub fn delete_exercises_for_day(conn: &mut SqliteConnection, day: &str) -> Result<usize> {
    diesel::delete(exercises::table.filter(exercises::day.eq(day)))
        .execute(conn)
        .map_err(Into::into)
}

pub fn delete_all_exercises(conn: &mut SqliteConnection) -> Result<usize> {
    diesel::delete(exercises::table)
        .execute(conn)
        .map_err(Into::into)
}

// History

/// Inserts the history row and then one row per set, in a single
/// transaction. Returns the new history id.
///
/// An `exercise_id` that is not in the catalog (removed meanwhile, or a
/// placeholder) is stored as NULL; the entry is still saved.
pub fn save_workout_entry(conn: &mut SqliteConnection, entry: &NewWorkoutEntry) -> Result<i32> {
    conn.transaction::<_, anyhow::Error, _>(|conn| {
        let created_at = now_millis();

        let exercise_id = match entry.exercise_id {
            Some(id) => exercises::table
                .find(id)
                .select(exercises::id)
                .first::<i32>(conn)
                .optional()?,
            None => None,
        };

        let history_id = diesel::insert_into(workout_history::table)
            .values(&WorkoutHistoryRow {
                date: &entry.date,
                day: &entry.day,
                exercise_id,
                exercise_name: &entry.exercise_name,
                weight: entry.weight,
                sets_detail: &entry.sets_detail,
                note: &entry.note,
                created_at,
            })
            .returning(workout_history::id)
            .get_result::<i32>(conn)?;

        for set in &entry.sets {
            diesel::insert_into(workout_sets::table)
                .values(&WorkoutSetRow {
                    workout_history_id: history_id,
                    set_number: set.set_number,
                    reps: set.reps,
                    weight: set.weight,
                    created_at,
                })
                .execute(conn)?;
        }

        Ok(history_id)
    })
}

pub fn get_workout_history(conn: &mut SqliteConnection) -> Result<Vec<WorkoutHistoryEntry>> {
    workout_history::table
        .order((workout_history::created_at.desc(), workout_history::id.desc()))
        .select(WorkoutHistoryEntry::as_select())
        .load(conn)
        .map_err(Into::into)
}

pub fn get_workout_history_by_exercise(
    conn: &mut SqliteConnection,
    exercise_name: &str,
) -> Result<Vec<WorkoutHistoryEntry>> {
    workout_history::table
        .filter(workout_history::exercise_name.eq(exercise_name))
        .order((workout_history::created_at.desc(), workout_history::id.desc()))
        .select(WorkoutHistoryEntry::as_select())
        .load(conn)
        .map_err(Into::into)
}

pub fn get_last_workout_for_exercise(
    conn: &mut SqliteConnection,
    exercise_name: &str,
) -> Result<Option<WorkoutHistoryEntry>> {
    workout_history::table
        .filter(workout_history::exercise_name.eq(exercise_name))
        .order((workout_history::created_at.desc(), workout_history::id.desc()))
        .select(WorkoutHistoryEntry::as_select())
        .first(conn)
        .optional()
        .map_err(Into::into)
}

pub fn get_workout_sets(
    conn: &mut SqliteConnection,
    workout_history_id: i32,
) -> Result<Vec<WorkoutSet>> {
    workout_sets::table
        .filter(workout_sets::workout_history_id.eq(workout_history_id))
        .order((workout_sets::set_number.asc(), workout_sets::id.asc()))
        .select(WorkoutSet::as_select())
        .load(conn)
        .map_err(Into::into)
}

/// Removes every set row, then every history row. Returns the number of
/// history rows removed.
pub fn clear_workout_history(conn: &mut SqliteConnection) -> Result<usize> {
    conn.transaction::<_, anyhow::Error, _>(|conn| {
        diesel::delete(workout_sets::table).execute(conn)?;
        let removed = diesel::delete(workout_history::table).execute(conn)?;
        Ok(removed)
    })
}

pub fn get_workout_stats(conn: &mut SqliteConnection) -> Result<WorkoutStats> {
    let total_workouts = workout_history::table.count().get_result::<i64>(conn)?;
    let total_exercises = count_exercises(conn)?;
    let last_workout_date = workout_history::table
        .order((workout_history::created_at.desc(), workout_history::id.desc()))
        .select(workout_history::date)
        .first::<String>(conn)
        .optional()?;

    Ok(WorkoutStats {
        total_workouts,
        total_exercises,
        last_workout_date,
    })
}
