use std::env;
use std::sync::Once;

use tracing::Level;

static INIT: Once = Once::new();

/// Installs a global `fmt` subscriber at `level`, unless the process already has one.
pub fn init_logging(level: Level) {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            // Another thread may have won the race for the global default.
            let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
        });
    }
}

/// Same as [`init_logging`], with the level taken from `RT_LOG` (defaults to `info`).
pub fn init_logging_from_env() {
    init_logging(level_from_env());
}

fn level_from_env() -> Level {
    env::var("RT_LOG")
        .ok()
        .and_then(|value| value.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}
