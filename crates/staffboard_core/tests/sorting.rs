use staffboard_core::{sort_by_discipline, sort_by_experience, Discipline, Employee, SortKey};

fn alice() -> Employee {
    Employee::new("Alice", 30, "Dev", 5, Discipline::It)
}

fn bob() -> Employee {
    Employee::new("Bob", 25, "PM", 8, Discipline::Management)
}

fn cara() -> Employee {
    Employee::new("Cara", 40, "Dev", 5, Discipline::It)
}

fn names(employees: &[Employee]) -> Vec<&str> {
    employees.iter().map(|employee| employee.name.as_str()).collect()
}

#[test]
fn sort_by_experience_is_ascending_and_stable() {
    let employees = vec![alice(), bob(), cara()];

    let sorted = sort_by_experience(&employees);
    assert_eq!(names(&sorted), ["Alice", "Cara", "Bob"]);
}

#[test]
fn sort_by_discipline_is_ascending_and_stable() {
    let employees = vec![alice(), bob(), cara()];

    let sorted = sort_by_discipline(&employees);
    assert_eq!(names(&sorted), ["Alice", "Cara", "Bob"]);
    assert_eq!(sorted[2].discipline, Discipline::Management);
}

#[test]
fn sorting_does_not_mutate_input() {
    let employees = vec![bob(), alice(), cara()];
    let before = employees.clone();

    let _ = sort_by_experience(&employees);
    let _ = sort_by_discipline(&employees);
    assert_eq!(employees, before);
}

#[test]
fn sorting_is_idempotent() {
    let employees = vec![
        cara(),
        bob(),
        Employee::new("Dee", 50, "CFO", 20, Discipline::Finance),
        alice(),
        Employee::new("Eve", 21, "Intern", 0, Discipline::Unset),
    ];

    for strategy in [SortKey::Experience.strategy(), SortKey::Discipline.strategy()] {
        let once = strategy(&employees);
        let twice = strategy(&once);
        assert_eq!(once, twice);
    }
}

#[test]
fn unset_discipline_sorts_first() {
    let employees = vec![
        bob(),
        Employee::new("Eve", 21, "Intern", 0, Discipline::Unset),
        Employee::new("Hal", 45, "Lead", 9, Discipline::HumanResources),
        Employee::new("Dee", 50, "CFO", 20, Discipline::Finance),
        Employee::new("Max", 29, "SEO", 4, Discipline::Marketing),
    ];

    let sorted = sort_by_discipline(&employees);
    let labels = sorted
        .iter()
        .map(|employee| employee.discipline.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        labels,
        ["", "Finance", "Human Resources", "Management", "Marketing"]
    );
}

#[test]
fn empty_and_all_equal_lists_keep_order() {
    assert!(sort_by_experience(&[]).is_empty());
    assert!(sort_by_discipline(&[]).is_empty());

    let same = vec![
        Employee::new("A", 1, "x", 3, Discipline::It),
        Employee::new("B", 2, "y", 3, Discipline::It),
        Employee::new("C", 3, "z", 3, Discipline::It),
    ];
    assert_eq!(sort_by_experience(&same), same);
    assert_eq!(sort_by_discipline(&same), same);
}
