use std::cmp::Ordering;

use crate::record::Entry;

/// Drop dotfiles unless `show_hidden` is set.
pub fn filter_hidden(entries: Vec<Entry>, show_hidden: bool) -> Vec<Entry> {
    if show_hidden {
        return entries;
    }
    entries.into_iter().filter(|e| !e.is_hidden()).collect()
}

/// Directories first, then byte-wise ascending by name. Stable.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(compare_entries);
}

fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.name.as_bytes().cmp(b.name.as_bytes()))
}

/// Filter, then sort: the record set every renderer consumes.
pub fn prepare(entries: Vec<Entry>, show_hidden: bool) -> Vec<Entry> {
    let mut entries = filter_hidden(entries, show_hidden);
    sort_entries(&mut entries);
    entries
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
