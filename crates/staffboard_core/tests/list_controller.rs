use staffboard_core::db::DbError;
use staffboard_core::{
    sort_by_discipline, sort_by_experience, Discipline, Employee, EmployeeStore, KeyValueStore,
    ListController, MemoryKeyValueStore, StoreError, StoreResult, ACCOUNTS_KEY,
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

fn employee(name: &str, experience: u32, discipline: Discipline) -> Employee {
    Employee::new(name, 30, "Dev", experience, discipline)
}

fn stored(slots: &MemoryKeyValueStore) -> Vec<Employee> {
    let raw = slots
        .get_item(ACCOUNTS_KEY)
        .unwrap()
        .expect("slot should be written");
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn open_loads_persisted_list() {
    let slots = MemoryKeyValueStore::new();
    EmployeeStore::new(&slots)
        .save(&[employee("A", 1, Discipline::It)])
        .unwrap();

    let list = ListController::open(EmployeeStore::new(&slots)).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.employees()[0].name, "A");
}

#[test]
fn open_with_corrupt_slot_starts_empty() {
    let slots = MemoryKeyValueStore::new();
    slots.set_item(ACCOUNTS_KEY, "[{broken").unwrap();

    let list = ListController::open(EmployeeStore::new(&slots)).unwrap();
    assert!(list.is_empty());
}

#[test]
fn adds_keep_insertion_order_and_persist_each_time() {
    let slots = MemoryKeyValueStore::new();
    let mut list = ListController::open(EmployeeStore::new(&slots)).unwrap();

    for (index, name) in ["A", "B", "C", "D"].into_iter().enumerate() {
        list.add(employee(name, 1, Discipline::Finance)).unwrap();
        assert_eq!(list.len(), index + 1);
        assert_eq!(stored(&slots), list.employees());
    }

    let names = list
        .employees()
        .iter()
        .map(|employee| employee.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, ["A", "B", "C", "D"]);
}

#[test]
fn delete_removes_position_and_shifts_rest() {
    let slots = MemoryKeyValueStore::new();
    let mut list = ListController::open(EmployeeStore::new(&slots)).unwrap();
    let a = employee("A", 1, Discipline::It);
    let b = employee("B", 2, Discipline::It);
    let c = employee("C", 3, Discipline::It);
    for item in [&a, &b, &c] {
        list.add(item.clone()).unwrap();
    }

    let removed = list.delete(1).unwrap();
    assert_eq!(removed, Some(b));
    assert_eq!(list.employees(), [a.clone(), c.clone()]);
    assert_eq!(stored(&slots), [a, c]);
}

#[test]
fn delete_out_of_range_is_noop_without_write() {
    let slots = MemoryKeyValueStore::new();
    let mut list = ListController::open(EmployeeStore::new(&slots)).unwrap();

    assert_eq!(list.delete(0).unwrap(), None);
    assert_eq!(slots.get_item(ACCOUNTS_KEY).unwrap(), None);

    list.add(employee("A", 1, Discipline::It)).unwrap();
    assert_eq!(list.delete(5).unwrap(), None);
    assert_eq!(list.len(), 1);
}

#[test]
fn apply_sort_replaces_and_persists() {
    let slots = MemoryKeyValueStore::new();
    let mut list = ListController::open(EmployeeStore::new(&slots)).unwrap();
    list.add(employee("Alice", 5, Discipline::It)).unwrap();
    list.add(employee("Bob", 8, Discipline::Management)).unwrap();
    list.add(employee("Cara", 5, Discipline::It)).unwrap();
    list.add(employee("Dee", 1, Discipline::Finance)).unwrap();

    list.apply_sort(sort_by_experience).unwrap();
    let names = |list: &ListController<&MemoryKeyValueStore>| {
        list.employees()
            .iter()
            .map(|employee| employee.name.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&list), ["Dee", "Alice", "Cara", "Bob"]);
    assert_eq!(stored(&slots), list.employees());

    list.apply_sort(sort_by_discipline).unwrap();
    assert_eq!(names(&list), ["Dee", "Alice", "Cara", "Bob"]);
    assert_eq!(stored(&slots), list.employees());
}

#[test]
fn open_fails_on_read_fault_and_keeps_stored_list() {
    let slots = FaultyStore::default();
    let stored_before = vec![
        employee("A", 1, Discipline::It),
        employee("B", 2, Discipline::Finance),
    ];
    EmployeeStore::new(&slots).save(&stored_before).unwrap();

    slots.fail_reads.set(true);
    let err = ListController::open(EmployeeStore::new(&slots))
        .err()
        .expect("read fault must not open an empty list");
    assert!(matches!(err, StoreError::Db(_)));

    slots.fail_reads.set(false);
    let mut list = ListController::open(EmployeeStore::new(&slots)).unwrap();
    list.add(employee("C", 3, Discipline::It)).unwrap();
    assert_eq!(stored(&slots.inner).len(), 3);
    assert_eq!(stored(&slots.inner)[..2], stored_before[..]);
}

#[test]
fn delete_write_fault_is_returned_and_keeps_memory_state() {
    let slots = FaultyStore::default();
    let mut list = ListController::open(EmployeeStore::new(&slots)).unwrap();
    list.add(employee("A", 1, Discipline::It)).unwrap();
    list.add(employee("B", 2, Discipline::It)).unwrap();

    slots.fail_writes.set(true);
    let err = list.delete(0).unwrap_err();
    assert!(matches!(err, StoreError::Db(_)));
    assert_eq!(list.len(), 1);
    assert_eq!(list.employees()[0].name, "B");
    assert_eq!(stored(&slots.inner).len(), 2, "slot keeps the last good write");
}
