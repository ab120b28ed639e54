//! Logger setup for the CLI.
//!
//! Output format is `[YYYY-mm-dd HH:MM:SS] LEVEL message`. `DEBUG=true`
//! raises the level to debug; `RUST_LOG` overrides both.

use log::LevelFilter;
use std::io::Write;

/// Environment variable that switches on debug output
pub const DEBUG_ENV: &str = "DEBUG";

/// Returns the default level for the given `DEBUG` value
pub fn level_from_debug_flag(value: Option<&str>) -> LevelFilter {
    match value {
        Some(v) if v.trim().eq_ignore_ascii_case("true") => LevelFilter::Debug,
        _ => LevelFilter::Info,
    }
}

/// Installs the global logger. Safe to call more than once.
pub fn init_logging() {
    let debug = std::env::var(DEBUG_ENV).ok();
    let level = level_from_debug_flag(debug.as_deref());

    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {:>5} {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init();

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
