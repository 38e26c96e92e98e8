use log::LevelFilter;
use std::io::Write;

/// Dependencies (diesel, r2d2) stay at `warn`; `level` applies to this crate.
fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "[liftlog {:<5} {}] {}",
                record.level(),
                short_target(record.target()),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .filter_level(LevelFilter::Warn.min(level))
        .filter_module("liftlog", level);

    // Only the first call installs the filters; later calls set the global max level.
    let _ = builder.try_init();

    log::set_max_level(level);
}

/// "liftlog::db::operations" -> "db::operations"; other crates keep their target.
fn short_target(target: &str) -> &str {
    target.strip_prefix("liftlog::").unwrap_or(target)
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

#[uniffi::export]
pub fn set_debug_log_level() {
    init_logger(LevelFilter::Trace);
}

/// Returns false when `level` is not a known level name.
#[uniffi::export]
pub fn set_log_level(level: &str) -> bool {
    match parse_level(level) {
        Some(lvl) => {
            init_logger(lvl);
            true
        }
        None => false,
    }
}
