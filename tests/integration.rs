//! Integration tests for the undoable string list.

use stringlist::{ListConfig, StringList, UndoKind};

fn list(values: &[&str]) -> StringList {
    values.iter().copied().collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

// --- Walkthroughs ---

#[test]
fn test_insert_walkthrough() {
    init_tracing();
    let mut lst = StringList::new();

    lst.insert_back("a");
    lst.insert_back("b");
    lst.insert_front("c");
    assert_eq!(lst, list(&["c", "a", "b"]));

    assert!(lst.undo());
    assert_eq!(lst, list(&["a", "b"]));
    assert!(lst.undo());
    assert_eq!(lst, list(&["a"]));
    assert!(lst.undo());
    assert_eq!(lst.to_string(), "{}");
    assert!(!lst.undo());
}

#[test]
fn test_remove_all_single_undo() {
    init_tracing();
    let mut lst = list(&["x", "y", "z"]);

    lst.remove_all();
    assert_eq!(lst.to_string(), "{}");
    assert_eq!(lst.history().len(), 3);

    assert!(lst.undo());
    assert_eq!(lst, list(&["x", "y", "z"]));
    assert!(!lst.can_undo());
}

#[test]
fn test_mixed_history_unwinds_in_order() {
    let mut lst = StringList::new();
    let mut snapshots = vec![lst.clone()];

    lst.insert_back("one");
    snapshots.push(lst.clone());
    lst.insert_back("two");
    snapshots.push(lst.clone());
    lst.set(0, "uno").unwrap();
    snapshots.push(lst.clone());
    lst.remove_at(1).unwrap();
    snapshots.push(lst.clone());
    lst.remove_all();
    snapshots.push(lst.clone());
    lst.assign_from(&list(&["p", "q"]));

    while let Some(expected) = snapshots.pop() {
        assert!(lst.undo());
        assert_eq!(lst, expected);
    }
    assert!(!lst.undo());
}

// --- Per-operation undo ---

#[test]
fn test_set_undo_every_index() {
    let original = list(&["a", "b", "c", "d"]);
    for i in 0..original.len() {
        let mut lst = original.clone();
        lst.set(i, "changed").unwrap();
        assert!(lst.undo());
        assert_eq!(lst, original);
        assert_eq!(lst.len(), 4);
    }
}

#[test]
fn test_insert_undo_every_position() {
    let original = list(&["a", "b", "c"]);
    for i in 0..=original.len() {
        let mut lst = original.clone();
        lst.insert_before(i, "new").unwrap();
        assert_eq!(lst.get(i).unwrap(), "new");
        assert!(lst.undo());
        assert_eq!(lst, original);
    }
}

#[test]
fn test_remove_at_undo_every_index() {
    let original = list(&["a", "b", "c"]);
    for i in 0..original.len() {
        let mut lst = original.clone();
        let removed = lst.remove_at(i).unwrap();
        assert_eq!(removed, original.get(i).unwrap());
        assert!(lst.undo());
        assert_eq!(lst, original);
    }
}

#[test]
fn test_remove_all_undo_small_sizes() {
    let cases: [&[&str]; 3] = [&[], &["only"], &["a", "b", "c", "d", "e"]];
    for values in cases {
        let original = list(values);
        let mut lst = original.clone();
        lst.remove_all();
        assert!(lst.is_empty());
        lst.undo();
        assert_eq!(lst, original);
    }
}

#[test]
fn test_duplicate_values_restore_positions() {
    let mut lst = list(&["a", "a", "b", "a"]);
    lst.remove_at(1).unwrap();
    lst.remove_first("a");
    assert_eq!(lst, list(&["b", "a"]));

    lst.undo();
    lst.undo();
    assert_eq!(lst, list(&["a", "a", "b", "a"]));
}

// --- Bulk grouping ---

#[test]
fn test_consecutive_remove_all_are_separate() {
    let mut lst = list(&["a", "b"]);
    lst.remove_all();
    lst.insert_back("c");
    lst.remove_all();

    assert!(lst.undo());
    assert_eq!(lst, list(&["c"]));
    assert!(lst.undo());
    assert!(lst.is_empty());
    assert!(lst.undo());
    assert_eq!(lst, list(&["a", "b"]));
}

#[test]
fn test_consecutive_assigns_are_separate() {
    let mut lst = list(&["a"]);
    lst.assign_from(&list(&["b", "b"]));
    lst.assign_from(&list(&["c", "c", "c"]));

    assert!(lst.undo());
    assert_eq!(lst, list(&["b", "b"]));
    assert!(lst.undo());
    assert_eq!(lst, list(&["a"]));
    assert!(!lst.undo());
}

// --- Assignment ---

#[test]
fn test_assign_leaves_source_untouched() {
    let mut source = StringList::new();
    source.insert_back("s1");
    source.insert_back("s2");
    let source_before = source.clone();

    let mut target = list(&["t1", "t2", "t3"]);
    target.assign_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.history().last().unwrap().kind, UndoKind::Assign);

    assert!(target.undo());
    assert_eq!(target, list(&["t1", "t2", "t3"]));
    assert_eq!(source, source_before);
    assert_eq!(source.history().len(), 2);
}

#[test]
fn test_assign_does_not_inherit_source_history() {
    let mut source = StringList::new();
    source.insert_back("s");

    let mut target = StringList::new();
    target.assign_from(&source);

    assert!(target.undo());
    assert!(target.is_empty());
    assert!(!target.undo());
}

#[test]
fn test_assign_undo_resets_capacity() {
    let config = ListConfig {
        initial_capacity: 2,
    };
    let mut big = StringList::with_config(config.clone());
    for i in 0..20 {
        big.insert_back(format!("v{}", i));
    }
    assert_eq!(big.capacity(), 32);

    let mut target = StringList::with_config(config);
    target.insert_back("a");
    target.assign_from(&big);
    assert_eq!(target.capacity(), 32);

    assert!(target.undo());
    assert_eq!(target, list(&["a"]));
    assert_eq!(target.capacity(), 2);
}

#[test]
fn test_assign_undo_restores_more_than_initial_capacity() {
    let mut target = StringList::new();
    for i in 0..25 {
        target.insert_back(i.to_string());
    }
    let before = target.clone();

    target.assign_from(&StringList::new());
    assert!(target.is_empty());

    assert!(target.undo());
    assert_eq!(target, before);
    assert!(target.capacity() >= target.len());
}

// --- Copies and equality ---

#[test]
fn test_copy_has_fresh_history() {
    let mut original = StringList::new();
    original.insert_back("a");
    original.set(0, "b").unwrap();

    let mut copy = original.clone();
    assert_eq!(copy.capacity(), original.capacity());
    assert!(!copy.undo());
    assert_eq!(copy, list(&["b"]));
}

#[test]
fn test_equality_ignores_history() {
    let mut a = StringList::new();
    a.insert_back("x");
    a.insert_back("y");

    let mut b = StringList::new();
    b.insert_back("y");
    b.insert_front("x");
    b.set(1, "y").unwrap();

    assert_eq!(a, b);
    assert_ne!(a, list(&["x"]));
    assert_ne!(a, list(&["y", "x"]));
}

#[test]
fn test_capacity_doubles() {
    let mut lst = StringList::new();
    for i in 0..10 {
        lst.insert_back(i.to_string());
    }
    assert_eq!(lst.capacity(), 10);

    lst.insert_back("10");
    assert_eq!(lst.capacity(), 20);

    lst.remove_all();
    assert_eq!(lst.capacity(), 20);
}

#[test]
fn test_empty_strings_are_values() {
    let mut lst = StringList::new();
    lst.insert_back("");
    assert_eq!(lst.len(), 1);
    assert_eq!(lst.index_of(""), Some(0));
    assert_eq!(lst.to_string(), "{\"\"}");
}
