//! Behavioural properties of the list state machine.

use loglist_lib::list::{LoadMore, ListState};
use loglist_lib::model::{Column, Record, Value};
use loglist_lib::{Direction, ListConfig};

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("line", "Line").sortable(),
    ]
}

fn list(default_size: usize, increment: usize) -> ListState {
    let config = ListConfig::default()
        .with_default_display_size(default_size)
        .with_increment(increment);
    ListState::new(columns(), &config).unwrap()
}

/// Rows with unique names and lines drawn from a fixed shuffle.
fn rows(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let key = (i * 7 + 3) % 101;
            Record::with_id("Log__c", format!("a{:03}", i))
                .set("name", format!("LOG-{:03}", key))
                .set("line", key as i32)
        })
        .collect()
}

fn ids(rows: &[Record]) -> Vec<String> {
    rows.iter()
        .filter_map(Record::id)
        .map(str::to_string)
        .collect()
}

fn names(rows: &[Record]) -> Vec<Option<&str>> {
    rows.iter()
        .map(|r| r.get_string("name").ok().flatten())
        .collect()
}

#[test]
fn test_load_more_grows_monotonically_until_all_shown() {
    for len in [0, 1, 4, 8, 13, 30] {
        for increment in [1, 3, 10, 50] {
            let mut state = list(5, increment);
            state.initialize(&rows(len));

            let mut previous = state.display_size();
            while !state.is_showing_all() {
                match state.load_more() {
                    LoadMore::Grown { from, to } => {
                        assert_eq!(from, previous);
                        assert!(to > from);
                        assert!(to <= len);
                    }
                    LoadMore::AllShown => panic!("stopped early at {} of {}", previous, len),
                }
                previous = state.display_size();
            }

            assert_eq!(state.visible_window().len(), len);
            for _ in 0..3 {
                assert_eq!(state.load_more(), LoadMore::AllShown);
                assert_eq!(state.display_size(), previous);
            }
            assert!(!state.is_loading());
        }
    }
}

#[test]
fn test_sort_orders_window_and_preserves_display_size() {
    for field in ["name", "line"] {
        for direction in [Direction::Ascending, Direction::Descending] {
            let mut state = list(5, 3);
            state.initialize(&rows(12));
            state.load_more();
            let size = state.display_size();

            state.set_sort(field, direction).unwrap();

            assert_eq!(state.display_size(), size);
            let window = state.visible_window();
            assert_eq!(window.len(), size);
            for pair in window.windows(2) {
                let ordering = loglist_lib::list::compare_values(
                    pair[0].get(field),
                    pair[1].get(field),
                );
                assert_ne!(direction.apply(ordering), std::cmp::Ordering::Greater);
            }
            assert!(!state.is_loading());
        }
    }
}

#[test]
fn test_descending_reverses_ascending_for_unique_keys() {
    let mut state = list(20, 5);
    state.initialize(&rows(20));

    state.set_sort("line", Direction::Ascending).unwrap();
    let mut ascending = ids(state.all_rows());
    state.set_sort("line", Direction::Descending).unwrap();
    let descending = ids(state.all_rows());

    ascending.reverse();
    assert_eq!(ascending, descending);
}

#[test]
fn test_repeated_sorts_are_reproducible_with_duplicates() {
    let input: Vec<Record> = (0..10)
        .map(|i| {
            Record::with_id("Log__c", format!("a{}", i)).set("line", (i % 3) as i32)
        })
        .collect();

    let mut first = list(10, 5);
    first.initialize(&input);
    first.set_sort("line", Direction::Descending).unwrap();

    let mut second = list(10, 5);
    second.initialize(&input);
    second.set_sort("line", Direction::Descending).unwrap();
    second.set_sort("line", Direction::Descending).unwrap();

    assert_eq!(ids(first.all_rows()), ids(second.all_rows()));
}

#[test]
fn test_scenario_eight_rows_five_plus_three() {
    let mut state = list(5, 3);
    state.initialize(&rows(8));

    assert_eq!(state.visible_window().len(), 5);
    assert!(!state.is_showing_all());
    assert_eq!(state.item_count_summary(), "5+");

    assert_eq!(state.load_more(), LoadMore::Grown { from: 5, to: 8 });
    assert_eq!(state.visible_window().len(), 8);
    assert!(state.is_showing_all());
    assert_eq!(state.item_count_summary(), "8");

    assert_eq!(state.load_more(), LoadMore::AllShown);
    assert_eq!(state.visible_window().len(), 8);
}

#[test]
fn test_scenario_missing_values_sort_low() {
    let mut state = list(5, 3);
    state.initialize(&[
        Record::with_id("Log__c", "1").set("name", "B"),
        Record::with_id("Log__c", "2").set("name", "A"),
        Record::with_id("Log__c", "3").set("name", Value::Null),
    ]);

    state.set_sort("name", Direction::Ascending).unwrap();
    assert_eq!(names(state.visible_window()), [None, Some("A"), Some("B")]);

    state.set_sort("name", Direction::Descending).unwrap();
    assert_eq!(names(state.visible_window()), [Some("B"), Some("A"), None]);
}

#[test]
fn test_initialize_never_mutates_input_rows() {
    let input = rows(4);
    let before = input.clone();
    let mut state = list(5, 3);
    state.initialize(&input);
    state.set_sort("name", Direction::Descending).unwrap();

    assert_eq!(input, before);
    assert!(state.all_rows().iter().all(|r| r.contains("LogUrl")));
}
