//! Integration tests for the workout store.
//! Each test runs against its own database file in a temporary directory.

use diesel::Connection;
use diesel::connection::SimpleConnection;
use diesel::sqlite::SqliteConnection;
use liftlog::catalog::DEFAULT_CATALOG;
use liftlog::db::models::{NewExercise, NewWorkoutEntry, NewWorkoutSet};
use liftlog::db::operations;
use liftlog::{Store, StoreConfig};
use std::path::PathBuf;
use tempfile::TempDir;

fn db_path(dir: &TempDir) -> String {
    dir.path().join("liftlog.db").to_string_lossy().into_owned()
}

async fn open_store(dir: &TempDir) -> anyhow::Result<Store> {
    let store = Store::new(StoreConfig::new(db_path(dir)));
    store.initialize().await?;
    Ok(store)
}

fn entry(exercise: &str, date: &str, reps: &[i32], weight: f64) -> NewWorkoutEntry {
    NewWorkoutEntry {
        date: date.to_string(),
        day: "quarta".to_string(),
        exercise_id: None,
        exercise_name: exercise.to_string(),
        weight,
        sets_detail: reps
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        note: String::new(),
        sets: reps
            .iter()
            .zip(1..)
            .map(|(reps, set_number)| NewWorkoutSet {
                set_number,
                reps: *reps,
                weight,
            })
            .collect(),
    }
}

#[tokio::test]
async fn test_initialize_seeds_catalog_once() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = open_store(&dir).await?;

    assert_eq!(store.get_workout_stats().await.total_exercises, 25);

    store.initialize().await?;
    assert_eq!(store.get_workout_stats().await.total_exercises, 25);

    // A second store on the same file must not seed again either.
    drop(store);
    let reopened = open_store(&dir).await?;
    assert_eq!(reopened.get_all_exercises().await.len(), DEFAULT_CATALOG.len());

    Ok(())
}

#[tokio::test]
async fn test_concurrent_initialize_shares_one_attempt() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = Store::new(StoreConfig::new(db_path(&dir)));

    let (a, b, c) = tokio::join!(store.initialize(), store.initialize(), store.initialize());
    a?;
    b?;
    c?;

    assert!(store.is_initialized());
    assert_eq!(store.get_workout_stats().await.total_exercises, 25);
    Ok(())
}

#[tokio::test]
async fn test_initialize_fails_on_unopenable_path() {
    let dir = TempDir::new().unwrap();
    let missing: PathBuf = dir.path().join("no-such-dir").join("liftlog.db");
    let store = Store::new(StoreConfig::new(missing.to_string_lossy().into_owned()));

    assert!(store.initialize().await.is_err());
    assert!(!store.is_initialized());
}

#[tokio::test]
async fn test_uninitialized_store_reads_empty_and_rejects_writes() {
    let dir = TempDir::new().unwrap();
    let store = Store::new(StoreConfig::new(db_path(&dir)));

    assert!(store.get_exercises_by_day("segunda").await.is_empty());
    assert!(store.get_exercise_by_name("Pullover", "segunda").await.is_none());
    assert!(store.get_workout_history().await.is_empty());
    assert!(store.get_last_workout_for_exercise("Pullover").await.is_none());
    assert!(store.get_workout_sets(1).await.is_empty());
    assert_eq!(store.get_workout_stats().await, Default::default());

    assert!(
        store
            .save_workout_entry(entry("Pullover", "13/10/2025", &[10], 20.0))
            .await
            .is_err()
    );
    assert!(store.clear_workout_history().await.is_err());
}

#[tokio::test]
async fn test_exercises_by_day_in_catalog_order() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = open_store(&dir).await?;

    let monday = store.get_exercises_by_day("segunda").await;
    let names: Vec<&str> = monday.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Puxador frontal",
            "Remada cavalinho",
            "Remada baixa no cabo",
            "Pullover",
            "Rosca na maquina",
            "Rosca martelo",
        ]
    );
    assert_eq!(monday[0].sets, 4);
    assert_eq!(monday[0].reps, "8-12");

    assert!(store.get_exercises_by_day("domingo").await.is_empty());

    let found = store.get_exercise_by_name("Leg press", "sexta").await;
    assert_eq!(found.map(|e| e.sets), Some(3));
    assert!(store.get_exercise_by_name("Leg press", "segunda").await.is_none());

    Ok(())
}

#[tokio::test]
async fn test_save_entry_stores_every_set() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = open_store(&dir).await?;

    let supino = store
        .get_exercise_by_name("Supino declinado", "quarta")
        .await
        .expect("seeded exercise");
    let mut new_entry = entry("Supino declinado", "15/10/2025", &[12, 10, 8], 40.0);
    new_entry.exercise_id = Some(supino.id);
    new_entry.note = "Relatório anotado: boa".to_string();

    let id = store.save_workout_entry(new_entry).await?;

    let sets = store.get_workout_sets(id).await;
    assert_eq!(sets.len(), 3);
    for (expected_number, (set, reps)) in (1..).zip(sets.iter().zip([12, 10, 8])) {
        assert_eq!(set.set_number, expected_number);
        assert_eq!(set.reps, reps);
        assert_eq!(set.weight, 40.0);
        assert_eq!(set.workout_history_id, id);
    }

    let history = store.get_workout_history().await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, id);
    assert_eq!(history[0].exercise_id, Some(supino.id));
    assert_eq!(history[0].sets_detail, "12, 10, 8");
    assert_eq!(history[0].note, "Relatório anotado: boa");

    Ok(())
}

#[tokio::test]
async fn test_history_is_newest_first() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = open_store(&dir).await?;

    let mut ids = Vec::new();
    for (i, exercise) in ["Leg press", "Mesa flexora", "Leg press", "Pullover"]
        .iter()
        .enumerate()
    {
        let date = format!("{:02}/10/2025", i + 10);
        ids.push(store.save_workout_entry(entry(exercise, &date, &[10], 50.0)).await?);
    }

    let history = store.get_workout_history().await;
    let got: Vec<i32> = history.iter().map(|h| h.id).collect();
    let expected: Vec<i32> = ids.iter().rev().copied().collect();
    assert_eq!(got, expected);

    let leg_press = store.get_workout_history_by_exercise("Leg press").await;
    assert_eq!(
        leg_press.iter().map(|h| h.id).collect::<Vec<_>>(),
        vec![ids[2], ids[0]]
    );
    assert!(store.get_workout_history_by_exercise("Remo").await.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_last_workout_is_most_recent_save() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = open_store(&dir).await?;

    assert!(store.get_last_workout_for_exercise("Leg press").await.is_none());

    store
        .save_workout_entry(entry("Leg press", "10/10/2025", &[10, 10, 10], 100.0))
        .await?;
    let second = store
        .save_workout_entry(entry("Leg press", "17/10/2025", &[12, 12, 12], 110.0))
        .await?;
    store
        .save_workout_entry(entry("Pullover", "17/10/2025", &[15], 25.0))
        .await?;

    let last = store
        .get_last_workout_for_exercise("Leg press")
        .await
        .expect("last workout");
    assert_eq!(last.id, second);
    assert_eq!(last.weight, 110.0);

    Ok(())
}

#[tokio::test]
async fn test_clear_history_removes_entries_and_sets() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = open_store(&dir).await?;

    let first = store
        .save_workout_entry(entry("Leg press", "10/10/2025", &[10, 10], 100.0))
        .await?;
    let second = store
        .save_workout_entry(entry("Pullover", "11/10/2025", &[12], 20.0))
        .await?;

    assert_eq!(store.clear_workout_history().await?, 2);
    assert!(store.get_workout_history().await.is_empty());
    assert!(store.get_workout_sets(first).await.is_empty());
    assert!(store.get_workout_sets(second).await.is_empty());

    // Clearing an empty history is fine.
    assert_eq!(store.clear_workout_history().await?, 0);

    // The catalog is untouched.
    assert_eq!(store.get_workout_stats().await.total_exercises, 25);
    Ok(())
}

#[tokio::test]
async fn test_stats_track_history() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = open_store(&dir).await?;

    let stats = store.get_workout_stats().await;
    assert_eq!(stats.total_workouts, 0);
    assert_eq!(stats.total_exercises, 25);
    assert_eq!(stats.last_workout_date, None);

    store
        .save_workout_entry(entry("Leg press", "10/10/2025", &[10], 100.0))
        .await?;
    store
        .save_workout_entry(entry("Leg press", "2025-10-17", &[10], 100.0))
        .await?;

    let stats = store.get_workout_stats().await;
    assert_eq!(stats.total_workouts, 2);
    assert_eq!(stats.last_workout_date.as_deref(), Some("2025-10-17"));
    Ok(())
}

#[tokio::test]
async fn test_weekday_frequency_from_history() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = open_store(&dir).await?;

    for date in ["15/10/2025", "2025-10-15", "22/10/2025", "18/10/2025"] {
        store
            .save_workout_entry(entry("Leg press", date, &[10], 100.0))
            .await?;
    }

    assert_eq!(store.get_weekday_frequency().await, [0, 0, 0, 3, 0, 0, 1]);
    Ok(())
}

#[tokio::test]
async fn test_catalog_is_user_owned_after_seed() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = open_store(&dir).await?;

    let added = store
        .add_exercise(NewExercise {
            name: "Abdominal infra".to_string(),
            sets: 3,
            reps: "15-20".to_string(),
            day: "domingo".to_string(),
        })
        .await?;
    assert_eq!(store.get_exercises_by_day("domingo").await, vec![added.clone()]);

    assert_eq!(store.remove_exercise(added.id).await?, 1);
    assert_eq!(store.remove_exercise(added.id).await?, 0);
    assert_eq!(store.remove_day("sabado").await?, 6);
    assert!(store.get_exercises_by_day("sabado").await.is_empty());

    assert_eq!(store.clear_all_days().await?, 19);
    assert!(store.get_all_exercises().await.is_empty());

    // An emptied catalog is not seeded again on the next start.
    drop(store);
    let reopened = open_store(&dir).await?;
    assert!(reopened.get_all_exercises().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_history_survives_catalog_removal() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = open_store(&dir).await?;

    let pullover = store
        .get_exercise_by_name("Pullover", "segunda")
        .await
        .expect("seeded exercise");
    let mut new_entry = entry("Pullover", "13/10/2025", &[12, 12, 12], 22.5);
    new_entry.exercise_id = Some(pullover.id);
    let id = store.save_workout_entry(new_entry).await?;

    store.clear_all_days().await?;

    let history = store.get_workout_history_by_exercise("Pullover").await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].exercise_id, None);
    assert_eq!(history[0].exercise_name, "Pullover");
    assert_eq!(store.get_workout_sets(id).await.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_unknown_exercise_id_is_saved_without_reference() -> anyhow::Result<()> {
    let store = Store::new(StoreConfig::in_memory());
    store.initialize().await?;

    let mut new_entry = entry("Remada curvada", "16/10/2025", &[10, 10], 35.0);
    new_entry.exercise_id = Some(99999);
    let id = store.save_workout_entry(new_entry).await?;

    let last = store
        .get_last_workout_for_exercise("Remada curvada")
        .await
        .expect("saved entry");
    assert_eq!(last.id, id);
    assert_eq!(last.exercise_id, None);
    assert_eq!(store.get_workout_sets(id).await.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_failed_set_insert_rolls_back_entry() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = open_store(&dir).await?;

    let mut conn = SqliteConnection::establish(&db_path(&dir))?;
    conn.batch_execute(
        "CREATE TRIGGER reject_set_99 BEFORE INSERT ON workout_sets
         WHEN NEW.set_number = 99
         BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
    )?;

    let mut bad = entry("Leg press", "10/10/2025", &[10, 10], 100.0);
    bad.sets[1].set_number = 99;

    assert!(store.save_workout_entry(bad).await.is_err());
    assert!(store.get_workout_history().await.is_empty());
    assert_eq!(store.get_workout_stats().await.total_workouts, 0);
    assert_eq!(operations::count_exercises(&mut conn)?, 25);
    Ok(())
}

#[tokio::test]
async fn test_seeding_can_be_disabled() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = Store::new(StoreConfig::new(db_path(&dir)).with_seed_catalog(false));
    store.initialize().await?;

    assert!(store.get_all_exercises().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_in_memory_store() -> anyhow::Result<()> {
    let store = Store::new(StoreConfig::in_memory());
    store.initialize().await?;

    let id = store
        .save_workout_entry(entry("Leg press", "10/10/2025", &[8, 8], 90.0))
        .await?;
    assert_eq!(store.get_workout_sets(id).await.len(), 2);
    assert_eq!(store.get_workout_stats().await.total_exercises, 25);
    Ok(())
}
