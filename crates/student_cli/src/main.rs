//! Console entry point for the student records manager.
//!
//! # Responsibility
//! - Parse arguments, start file logging, open the record store.
//! - Hand stdin/stdout to the menu loop until the operator exits.

mod config;
mod menu;

use clap::Parser;
use config::Args;
use log::{error, info};
use menu::Menu;
use std::io;
use std::process::ExitCode;
use student_core::{core_version, init_logging, RecordStore};

fn main() -> ExitCode {
    let args = Args::parse();

    // Logging is best-effort; the menu still works without a log file.
    if let Err(err) = start_logging(&args) {
        eprintln!("warning: file logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok core_version={} db={}",
        core_version(),
        args.db.display()
    );

    let store = match RecordStore::initialize(&args.db) {
        Ok(store) => store,
        Err(err) => {
            error!(
                "event=cli_start module=cli status=error error_code=storage_unavailable error={err}"
            );
            eprintln!(
                "cannot open student database `{}`: {err}",
                args.db.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(&store, stdin.lock(), stdout.lock());

    match menu.run() {
        Ok(()) => {
            info!("event=cli_exit module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("console error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn start_logging(args: &Args) -> Result<(), String> {
    let log_dir = args.resolved_log_dir()?;
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| format!("log directory `{}` is not valid UTF-8", log_dir.display()))?;
    init_logging(&args.log_level, log_dir)
}
