use anyhow::{Result, anyhow, bail};
use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use log::{info, warn};
use serde::Serialize;
use std::fmt;

use liftlog::db::models::NewExercise;
use liftlog::report::{WorkoutReport, today};
use liftlog::weekday::{WEEKDAY_ABBREVIATIONS, weekday_for_date};
use liftlog::{Store, StoreConfig};

#[derive(Parser, Debug)]
#[command(version, about = "liftlog - workout log CLI", long_about = None)]
struct Args {
    /// SQLite database file; defaults to DATABASE_URL
    #[arg(long, global = true)]
    database: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the database and seed the default catalog
    Init,
    /// List catalog exercises for a day, or all of them
    Exercises {
        #[arg(long, conflicts_with = "all")]
        day: Option<String>,
        #[arg(long)]
        all: bool,
    },
    /// Add an exercise to the catalog
    AddExercise {
        name: String,
        #[arg(long)]
        day: String,
        #[arg(long, default_value_t = 3)]
        sets: i32,
        #[arg(long, default_value = "8-12")]
        reps: String,
    },
    /// Remove one catalog exercise by id
    RemoveExercise { id: i32 },
    /// Remove every catalog exercise of a day
    RemoveDay { day: String },
    /// Log a workout: weight plus reps for each set
    Log {
        #[arg(long)]
        day: String,
        #[arg(long)]
        exercise: String,
        /// Defaults to the weight of the last workout of this exercise
        #[arg(long, allow_negative_numbers = true)]
        weight: Option<f64>,
        /// Reps per set, comma separated (e.g. 12,10,8)
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        reps: Vec<i32>,
        #[arg(long, default_value = "")]
        note: String,
        /// dd/mm/yyyy or yyyy-mm-dd; defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show workout history, newest first
    History {
        #[arg(long)]
        exercise: Option<String>,
    },
    /// Show the most recent workout for an exercise
    Last { exercise: String },
    /// Show the sets of one history entry
    Sets { id: i32 },
    /// Delete all workout history
    ClearHistory {
        #[arg(long)]
        yes: bool,
    },
    /// Delete the whole catalog
    ClearDays {
        #[arg(long)]
        yes: bool,
    },
    /// Totals and last workout date
    Stats,
    /// Workouts per weekday
    Frequency,
    /// Weekday of a date
    Weekday { date: String },
}

fn print_one<T: Serialize + fmt::Display>(item: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(item)?),
        OutputFormat::Text => println!("{}", item),
    }
    Ok(())
}

fn print_list<T: Serialize + fmt::Display>(
    items: &[T],
    format: OutputFormat,
    empty: &str,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
        OutputFormat::Text if items.is_empty() => println!("{}", empty),
        OutputFormat::Text => {
            for item in items {
                println!("{}", item);
            }
        }
    }
    Ok(())
}

fn print_frequency(counts: &[u32; 7], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = WEEKDAY_ABBREVIATIONS
                .iter()
                .zip(counts)
                .map(|(day, count)| serde_json::json!({ "day": day, "count": count }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => {
            for (day, count) in WEEKDAY_ABBREVIATIONS.iter().zip(counts) {
                println!("{:<4} {:>3} {}", day, count, "#".repeat(*count as usize));
            }
        }
    }
    Ok(())
}

fn print_weekday(date: &str) -> Result<()> {
    match weekday_for_date(date) {
        Some(day) => println!("{}", day),
        None => bail!("could not parse {:?}; use dd/mm/yyyy or yyyy-mm-dd", date),
    }
    Ok(())
}

async fn open_store(database: Option<String>) -> Result<Store> {
    let config = match database {
        Some(url) => StoreConfig::new(url),
        None => StoreConfig::from_env()?,
    };

    let store = Store::new(config);
    store.initialize().await?;
    Ok(store)
}

async fn run(store: &Store, command: Commands, format: OutputFormat) -> Result<()> {
    match command {
        Commands::Init => {
            let stats = store.get_workout_stats().await;
            println!(
                "Database ready: {} exercises, {} workouts",
                stats.total_exercises, stats.total_workouts
            );
        }
        Commands::Exercises { day, all } => {
            let exercises = match day {
                Some(day) if !all => store.get_exercises_by_day(&day).await,
                _ => store.get_all_exercises().await,
            };
            print_list(&exercises, format, "No exercises found.")?;
        }
        Commands::AddExercise {
            name,
            day,
            sets,
            reps,
        } => {
            if sets <= 0 {
                bail!("sets must be a positive number");
            }
            let exercise = store
                .add_exercise(NewExercise {
                    name,
                    sets,
                    reps,
                    day,
                })
                .await?;
            print_one(&exercise, format)?;
        }
        Commands::RemoveExercise { id } => {
            let removed = store.remove_exercise(id).await?;
            if removed == 0 {
                bail!("no exercise with id {}", id);
            }
            println!("Removed exercise {}", id);
        }
        Commands::RemoveDay { day } => {
            let removed = store.remove_day(&day).await?;
            println!("Removed {} exercises from {}", removed, day);
        }
        Commands::Log {
            day,
            exercise,
            weight,
            reps,
            note,
            date,
        } => {
            let catalog_entry = store.get_exercise_by_name(&exercise, &day).await;
            if catalog_entry.is_none() {
                warn!("{} is not in the catalog for {}", exercise, day);
            }

            let weight = match weight {
                Some(weight) => weight,
                None => {
                    let last = store
                        .get_last_workout_for_exercise(&exercise)
                        .await
                        .ok_or_else(|| {
                            anyhow!("no --weight given and no earlier {} workout to reuse", exercise)
                        })?;
                    info!("Reusing last weight {} kg for {}", last.weight, exercise);
                    last.weight
                }
            };

            let report = WorkoutReport {
                date: date.unwrap_or_else(today),
                day,
                exercise_id: catalog_entry.as_ref().map(|e| e.id),
                exercise_name: exercise,
                weight,
                reps,
                note,
            };
            let entry = report.into_entry(catalog_entry.map(|e| e.sets))?;
            let id = store.save_workout_entry(entry).await?;
            println!("Saved workout #{}", id);
        }
        Commands::History { exercise } => {
            let history = match exercise {
                Some(name) => store.get_workout_history_by_exercise(&name).await,
                None => store.get_workout_history().await,
            };
            print_list(&history, format, "No workouts logged.")?;
        }
        Commands::Last { exercise } => match store.get_last_workout_for_exercise(&exercise).await {
            Some(last) => print_one(&last, format)?,
            None => println!("No workouts logged for {}.", exercise),
        },
        Commands::Sets { id } => {
            let sets = store.get_workout_sets(id).await;
            print_list(&sets, format, "No sets found.")?;
        }
        Commands::ClearHistory { yes } => {
            if !yes {
                bail!("this deletes every logged workout and cannot be undone; pass --yes");
            }
            let removed = store.clear_workout_history().await?;
            println!("Deleted {} workouts", removed);
        }
        Commands::ClearDays { yes } => {
            if !yes {
                bail!("this deletes the whole exercise catalog; pass --yes");
            }
            let removed = store.clear_all_days().await?;
            println!("Deleted {} exercises", removed);
        }
        Commands::Stats => {
            let stats = store.get_workout_stats().await;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
                OutputFormat::Text => {
                    println!("Workouts logged: {}", stats.total_workouts);
                    println!("Exercises:       {}", stats.total_exercises);
                    match stats.last_workout_date {
                        Some(date) => println!("Last workout:    {}", date),
                        None => println!("Start your first workout!"),
                    }
                }
            }
        }
        Commands::Frequency => {
            let counts = store.get_weekday_frequency().await;
            print_frequency(&counts, format)?;
        }
        Commands::Weekday { date } => print_weekday(&date)?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match args.command {
        // Needs no database.
        Commands::Weekday { date } => print_weekday(&date),
        command => {
            let store = open_store(args.database).await?;
            run(&store, command, args.format).await
        }
    }
}
