use staffboard_core::db::{open_db, DbError};
use staffboard_core::view::EMPTY_TABLE_PLACEHOLDER;
use staffboard_core::{
    BoardError, Discipline, EmployeeBoard, FormError, FormField, FormState, KeyValueStore,
    MemoryKeyValueStore, SortKey, SqliteKeyValueStore, StoreError, StoreResult,
};
use std::cell::Cell;

/// Slot store whose reads or writes can be switched to fail.
#[derive(Default)]
struct FaultyStore {
    inner: MemoryKeyValueStore,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

fn host_fault() -> StoreError {
    StoreError::Db(DbError::Sqlite(rusqlite::Error::InvalidQuery))
}

impl KeyValueStore for FaultyStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        if self.fail_reads.get() {
            return Err(host_fault());
        }
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes.get() {
            return Err(host_fault());
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.inner.remove_item(key)
    }
}

fn enter<S: KeyValueStore>(
    board: &mut EmployeeBoard<S>,
    values: [&str; 5],
) {
    for (field, value) in FormField::ALL.into_iter().zip(values) {
        board.change(field, value).unwrap();
    }
}

fn names<S: KeyValueStore>(board: &EmployeeBoard<S>) -> Vec<String> {
    board
        .employees()
        .iter()
        .map(|employee| employee.name.clone())
        .collect()
}

#[test]
fn submit_appends_and_resets_form() {
    let mut board = EmployeeBoard::open(MemoryKeyValueStore::new()).unwrap();
    enter(&mut board, ["Alice", "30", "Dev", "5", "IT"]);

    let added = board.submit().unwrap();
    assert_eq!(added.name, "Alice");
    assert_eq!(added.discipline, Discipline::It);
    assert_eq!(board.employees(), [added]);
    assert_eq!(board.form().state(), &FormState::default());
}

#[test]
fn rejected_submit_leaves_form_and_list_unchanged() {
    let mut board = EmployeeBoard::open(MemoryKeyValueStore::new()).unwrap();
    enter(&mut board, ["Bob", "abc", "PM", "8", "Management"]);

    let err = board.submit().unwrap_err();
    assert!(matches!(
        err,
        BoardError::Form(FormError::NotANumber(FormField::Age))
    ));
    assert!(board.employees().is_empty());
    assert_eq!(board.form().state().name, "Bob");
}

#[test]
fn scenario_add_sort_and_delete() {
    let mut board = EmployeeBoard::open(MemoryKeyValueStore::new()).unwrap();
    enter(&mut board, ["Alice", "30", "Dev", "5", "IT"]);
    board.submit().unwrap();
    enter(&mut board, ["Bob", "25", "PM", "8", "Management"]);
    board.submit().unwrap();
    enter(&mut board, ["Cara", "40", "Dev", "5", "IT"]);
    board.submit().unwrap();

    board.sort(SortKey::Experience).unwrap();
    assert_eq!(names(&board), ["Alice", "Cara", "Bob"]);

    board.sort(SortKey::Discipline).unwrap();
    assert_eq!(names(&board), ["Alice", "Cara", "Bob"]);

    let removed = board.delete(1).unwrap().unwrap();
    assert_eq!(removed.name, "Cara");
    assert_eq!(names(&board), ["Alice", "Bob"]);
}

#[test]
fn board_state_survives_reopen_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.db");

    {
        let conn = open_db(&path).unwrap();
        let mut board = EmployeeBoard::open(SqliteKeyValueStore::new(&conn)).unwrap();
        enter(&mut board, ["Bob", "25", "PM", "8", "Management"]);
        board.submit().unwrap();
        enter(&mut board, ["Alice", "30", "Dev", "5", "IT"]);
        board.submit().unwrap();
        board.sort(SortKey::Experience).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let board = EmployeeBoard::open(SqliteKeyValueStore::new(&conn)).unwrap();
    assert_eq!(names(&board), ["Alice", "Bob"]);
    assert_eq!(board.form().state(), &FormState::default());
}

#[test]
fn view_reflects_form_and_table() {
    let mut board = EmployeeBoard::open(MemoryKeyValueStore::new()).unwrap();

    let empty = board.view();
    assert_eq!(empty.table.placeholder, Some(EMPTY_TABLE_PLACEHOLDER));
    assert_eq!(empty.form.inputs[1].value, "0");

    board.change(FormField::Name, "Dee").unwrap();
    board.change(FormField::Age, "n/a").unwrap();
    let editing = board.view();
    assert_eq!(editing.form.inputs[0].value, "Dee");
    assert_eq!(editing.form.inputs[1].value, "");

    board.change(FormField::Age, "50").unwrap();
    board.submit().unwrap();
    let rendered = board.view().to_string();
    assert!(rendered.contains("Dee"));
    assert!(rendered.contains("Add employee"));
    assert!(rendered.contains("Sort by discipline"));
    assert!(!rendered.contains(EMPTY_TABLE_PLACEHOLDER));
}

#[test]
fn submit_write_fault_keeps_employee_and_resets_form() {
    let slots = FaultyStore::default();
    let mut board = EmployeeBoard::open(&slots).unwrap();
    enter(&mut board, ["Alice", "30", "Dev", "5", "IT"]);
    board.submit().unwrap();

    slots.fail_writes.set(true);
    enter(&mut board, ["Bob", "25", "PM", "8", "Management"]);
    let err = board.submit().unwrap_err();
    assert!(matches!(err, BoardError::Store(_)));
    assert_eq!(names(&board), ["Alice", "Bob"]);
    assert_eq!(board.form().state(), &FormState::default());

    let err = board.delete(0).unwrap_err();
    assert!(matches!(err, BoardError::Store(_)));
    assert_eq!(names(&board), ["Bob"]);

    slots.fail_writes.set(false);
    let reopened = EmployeeBoard::open(&slots.inner).unwrap();
    assert_eq!(names(&reopened), ["Alice"]);
}

#[test]
fn open_reports_read_fault() {
    let slots = FaultyStore::default();
    slots.fail_reads.set(true);

    let err = EmployeeBoard::open(&slots)
        .err()
        .expect("read fault must be reported");
    assert!(matches!(err, BoardError::Store(_)));
}
