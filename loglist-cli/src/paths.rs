//! Where the CLI keeps its config and log files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const LATEST_LOG: &str = "latest.log";
const ARCHIVE_PREFIX: &str = "loglist-";

/// Archived runs kept next to `latest.log`.
const KEEP_ARCHIVED: usize = 10;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "loglist", "loglist")
}

/// `config.json` under the platform config dir
/// (`~/.config/loglist` on Linux).
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
}

/// Log file of the current run, under the platform cache dir.
pub fn log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join(LATEST_LOG))
}

/// Archives the previous run's log and prunes old archives.
///
/// Must run before the logger opens `latest.log`.
pub fn rotate_logs() {
    let Some(dirs) = project_dirs() else { return };
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    // Logging is not up yet; a failed rotation just leaves old files behind.
    let _ = rotate_in(dirs.cache_dir(), &stamp, KEEP_ARCHIVED);
}

fn rotate_in(dir: &Path, stamp: &str, keep: usize) -> io::Result<()> {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        fs::rename(&latest, dir.join(format!("{ARCHIVE_PREFIX}{stamp}.log")))?;
    }

    let mut archived: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_archive(path))
        .collect();

    // Stamps sort chronologically as plain strings.
    archived.sort();
    let excess = archived.len().saturating_sub(keep);
    for path in &archived[..excess] {
        fs::remove_file(path)?;
    }
    Ok(())
}

fn is_archive(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(ARCHIVE_PREFIX) && name.ends_with(".log"))
}
