//! Logging to a file
//!
//! The terminal belongs to the TUI, so every log line goes to
//! `debug-<timestamp>.log`. Debug builds write it next to the binary's
//! working directory, release builds into the cache directory.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Debug;

fn log_file_name(now: NaiveDateTime) -> String {
    format!("debug-{}.log", now.format("%Y%m%d-%H%M%S"))
}

fn log_path() -> PathBuf {
    let name = log_file_name(chrono::Local::now().naive_local());

    let dir = if cfg!(debug_assertions) {
        None
    } else {
        gh_dependabot_config::cache_dir().ok()
    };

    match dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// `RUST_LOG` as a single level, e.g. `info`
fn parse_level(value: Option<&str>) -> LevelFilter {
    match value {
        None => DEFAULT_LEVEL,
        Some(value) => value.trim().parse().unwrap_or(LevelFilter::Info),
    }
}

/// Install the file logger, returning where it writes
pub fn init() -> Result<PathBuf> {
    let path = log_path();
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let mut builder = ConfigBuilder::new();
    builder.set_time_format_rfc3339();
    // Falls back to UTC when the local offset is unknown
    let _ = builder.set_time_offset_to_local();

    let level = parse_level(std::env::var("RUST_LOG").ok().as_deref());
    WriteLogger::init(level, builder.build(), file).context("Failed to initialize logger")?;

    Ok(path)
}
