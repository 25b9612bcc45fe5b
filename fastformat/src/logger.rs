// fastformat/src/logger.rs
//! Logger initialization for the fastformat CLI.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger` for the process.
///
/// `RUST_LOG` is honored unless an explicit `level` override is given
/// (the CLI's `--quiet` and `--debug` switches). Initialization is
/// tolerant of being called twice.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
