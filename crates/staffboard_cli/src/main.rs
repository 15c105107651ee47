//! Interactive terminal front-end for the employee board.
//!
//! # Responsibility
//! - Parse process flags and bootstrap logging and storage.
//! - Hand stdin/stdout to the board session.

mod session;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use staffboard_core::db::{open_db, open_db_in_memory};
use staffboard_core::{default_log_level, init_logging, EmployeeBoard, SqliteKeyValueStore};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "staffboard", version, about = "Employee board kept in a local storage slot")]
struct Cli {
    /// SQLite file holding the local storage slots.
    #[arg(long, default_value = "staffboard.db")]
    db: PathBuf,
    /// Keep slots in memory; nothing survives the session.
    #[arg(long, conflicts_with = "db")]
    in_memory: bool,
    /// Directory for rolling log files; logging is off when omitted.
    #[arg(long)]
    log_dir: Option<PathBuf>,
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let log_dir = std::path::absolute(log_dir)
            .with_context(|| format!("invalid log directory `{}`", log_dir.display()))?;
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, &log_dir.to_string_lossy())?;
    }

    let conn = if cli.in_memory {
        open_db_in_memory()?
    } else {
        open_db(&cli.db)
            .with_context(|| format!("failed to open database `{}`", cli.db.display()))?
    };
    info!(
        "event=cli_start module=cli status=ok in_memory={}",
        cli.in_memory
    );

    let mut board = EmployeeBoard::open(SqliteKeyValueStore::new(&conn))
        .context("failed to load the employee list")?;
    let stdin = std::io::stdin();
    session::run_session(&mut board, stdin.lock(), std::io::stdout().lock())
}
