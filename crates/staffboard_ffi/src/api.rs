//! FFI board API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose board actions (add, delete, sort, snapshot) as sync calls.
//! - Hand back a full table snapshot so the UI re-renders from Rust state.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Board calls are serialized process-wide; each one loads, mutates and
//!   persists the list before returning.

use log::warn;
use staffboard_core::db::open_db;
use staffboard_core::view::TableView;
use staffboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Discipline, EmployeeBoard, FormField, SortKey, SqliteKeyValueStore,
};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock, PoisonError};

const BOARD_DB_FILE_NAME: &str = "staffboard.sqlite3";
static BOARD_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static BOARD_LOCK: Mutex<()> = Mutex::new(());

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    /// Delete target for this snapshot only.
    pub row_index: u32,
    pub name: String,
    pub age: String,
    pub position: String,
    pub experience: String,
    pub discipline: String,
}

/// Board action result with the table to render next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardResponse {
    /// Whether the requested action took effect.
    pub ok: bool,
    pub rows: Vec<EmployeeRow>,
    /// Placeholder text when `rows` is empty.
    pub empty_placeholder: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl BoardResponse {
    fn from_table(ok: bool, table: TableView, message: impl Into<String>) -> Self {
        let rows = table
            .rows
            .into_iter()
            .map(|row| {
                let [name, age, position, experience, discipline] = row.cells;
                EmployeeRow {
                    row_index: u32::try_from(row.position).unwrap_or(u32::MAX),
                    name,
                    age,
                    position,
                    experience,
                    discipline,
                }
            })
            .collect();
        Self {
            ok,
            rows,
            empty_placeholder: table.placeholder.map(str::to_string),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            rows: Vec::new(),
            empty_placeholder: None,
            message: message.into(),
        }
    }
}

/// Discipline select entries, placeholder value (`""`) first.
#[flutter_rust_bridge::frb(sync)]
pub fn discipline_options() -> Vec<String> {
    std::iter::once(Discipline::Unset)
        .chain(Discipline::OPTIONS)
        .map(|option| option.as_str().to_string())
        .collect()
}

/// Returns the current table without mutating anything.
#[flutter_rust_bridge::frb(sync)]
pub fn board_snapshot() -> BoardResponse {
    with_board(|_| Ok((true, "Loaded.".to_string())))
}

/// "Add employee" with raw form input values.
///
/// # FFI contract
/// - `age`/`experience` are raw input text coerced like the form does.
/// - `discipline` must be an option label or empty.
/// - Returns `ok=false` and the unchanged table on rejected input.
#[flutter_rust_bridge::frb(sync)]
pub fn board_add_employee(
    name: String,
    age: String,
    position: String,
    experience: String,
    discipline: String,
) -> BoardResponse {
    let values = [name, age, position, experience, discipline];
    with_board(|board| {
        for (field, value) in FormField::ALL.into_iter().zip(&values) {
            board.change(field, value)?;
        }
        board.submit()?;
        Ok((true, "Employee added.".to_string()))
    })
}

/// Deletes the row at `row_index` of the last rendered snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn board_delete_employee(row_index: u32) -> BoardResponse {
    let Ok(position) = usize::try_from(row_index) else {
        return BoardResponse::failure(format!("no row at position {row_index}"));
    };
    with_board(|board| match board.delete(position)? {
        Some(_) => Ok((true, "Employee deleted.".to_string())),
        None => Ok((false, format!("no row at position {row_index}"))),
    })
}

/// Sorts by `experience` or `discipline`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_sort(key: String) -> BoardResponse {
    let key = match key.parse::<SortKey>() {
        Ok(key) => key,
        Err(err) => return BoardResponse::failure(format!("board_sort failed: {err}")),
    };
    with_board(|board| {
        board.sort(key)?;
        Ok((true, format!("Sorted by {key}.")))
    })
}

fn resolve_board_db_path() -> PathBuf {
    BOARD_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("STAFFBOARD_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(BOARD_DB_FILE_NAME)
        })
        .clone()
}

fn with_board(
    f: impl FnOnce(
        &mut EmployeeBoard<SqliteKeyValueStore<'_>>,
    ) -> Result<(bool, String), staffboard_core::BoardError>,
) -> BoardResponse {
    let _guard = BOARD_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let conn = match open_db(resolve_board_db_path()) {
        Ok(conn) => conn,
        Err(err) => return BoardResponse::failure(format!("board DB open failed: {err}")),
    };
    let mut board = match EmployeeBoard::open(SqliteKeyValueStore::new(&conn)) {
        Ok(board) => board,
        Err(err) => return BoardResponse::failure(format!("board load failed: {err}")),
    };

    match f(&mut board) {
        Ok((ok, message)) => BoardResponse::from_table(ok, board.view().table, message),
        Err(err) => {
            warn!("event=ffi_board_action module=ffi status=error error={err}");
            BoardResponse::from_table(false, board.view().table, err.to_string())
        }
    }
}
