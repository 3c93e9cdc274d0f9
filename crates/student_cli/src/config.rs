//! Command-line arguments for the student records console.

use clap::Parser;
use std::path::{Path, PathBuf};
use student_core::default_log_level;

/// Console record manager for student entities.
#[derive(Parser, Debug)]
#[command(name = "student-records", version)]
#[command(about = "Add, list, update and delete student records from a text menu")]
pub struct Args {
    /// SQLite database file, created on first use.
    #[arg(long, default_value = "students.db")]
    pub db: PathBuf,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, default_value = default_log_level())]
    pub log_level: String,

    /// Directory for rolling log files. Relative paths resolve against the working directory.
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,
}

impl Args {
    /// Absolute log directory, as required by `init_logging`.
    pub fn resolved_log_dir(&self) -> Result<PathBuf, String> {
        let cwd = std::env::current_dir()
            .map_err(|err| format!("cannot resolve working directory: {err}"))?;
        Ok(resolve_against(&cwd, &self.log_dir))
    }
}

fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
