use super::*;
use crate::record::EntryKind;

fn file(name: &str) -> Entry {
    Entry::new(name, EntryKind::File)
}

fn dir(name: &str) -> Entry {
    Entry::new(name, EntryKind::Directory)
}

fn names(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn hidden_entries_are_dropped_unless_requested() {
    let input = vec![file(".git"), file("README.md"), file(".env")];

    let visible = prepare(input.clone(), false);
    assert_eq!(names(&visible), ["README.md"]);

    let all = prepare(input, true);
    assert_eq!(names(&all), [".env", ".git", "README.md"]);
}

#[test]
fn hidden_directories_are_filtered_too() {
    let visible = filter_hidden(vec![dir(".git"), dir("src")], false);
    assert_eq!(names(&visible), ["src"]);
}

#[test]
fn directories_sort_before_files_regardless_of_name() {
    let mut entries = vec![file("aa"), dir("zz"), file("AB"), dir("b")];
    sort_entries(&mut entries);

    assert_eq!(names(&entries), ["b", "zz", "AB", "aa"]);
}

#[test]
fn names_compare_case_sensitive_bytewise() {
    let mut entries = vec![
        file("readme"),
        file("README"),
        file("_build"),
        file("Zeta"),
        file("alpha"),
        file("émoji"),
    ];
    sort_entries(&mut entries);

    // 'R' < 'Z' < '_' < 'a' < 'r' < 0xC3 (first byte of 'é')
    assert_eq!(
        names(&entries),
        ["README", "Zeta", "_build", "alpha", "readme", "émoji"]
    );
}

#[test]
fn sorting_is_idempotent() {
    let mut once = vec![
        file("b.rs"),
        dir("target"),
        file(".hidden"),
        dir(".git"),
        file("a.rs"),
    ];
    sort_entries(&mut once);

    let mut twice = once.clone();
    sort_entries(&mut twice);

    assert_eq!(once, twice);
    assert_eq!(names(&once), [".git", "target", ".hidden", "a.rs", "b.rs"]);
}

#[test]
fn prepare_on_empty_input_is_empty() {
    assert!(prepare(Vec::new(), false).is_empty());
    assert!(prepare(Vec::new(), true).is_empty());
}
